// Copyright 2025 Irreducible Inc.
//! [`Visibility`] of a wire.

use std::fmt;

use crate::error::ConstraintSystemError;

/// Who supplies the value of a wire.
///
/// The discriminant is the priority of the visibility. The derived [`Ord`] follows it, so
/// `Unset < Internal < Secret < Public < Virtual`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Visibility {
	/// Not classified yet.
	Unset = 0,
	/// Derived by the solver from constraints or hints.
	Internal = 1,
	/// Private witness input.
	Secret = 2,
	/// Public input.
	Public = 3,
	/// Helper wire introduced by the compiler.
	Virtual = 4,
}

impl Visibility {
	/// All visibilities, lowest priority first.
	pub const ALL: [Visibility; 5] = [
		Visibility::Unset,
		Visibility::Internal,
		Visibility::Secret,
		Visibility::Public,
		Visibility::Virtual,
	];

	/// The priority value, which is also the tag stored in a packed term.
	pub const fn priority(self) -> u8 {
		self as u8
	}

	/// The prefix used in front of a variable id when rendering a term.
	pub const fn prefix(self) -> char {
		match self {
			Visibility::Unset => 'u',
			Visibility::Internal => 'i',
			Visibility::Secret => 's',
			Visibility::Public => 'p',
			Visibility::Virtual => 'v',
		}
	}
}

impl TryFrom<u8> for Visibility {
	type Error = ConstraintSystemError;

	fn try_from(tag: u8) -> Result<Self, Self::Error> {
		match tag {
			0 => Ok(Visibility::Unset),
			1 => Ok(Visibility::Internal),
			2 => Ok(Visibility::Secret),
			3 => Ok(Visibility::Public),
			4 => Ok(Visibility::Virtual),
			_ => Err(ConstraintSystemError::InvalidVisibility { tag }),
		}
	}
}

impl From<Visibility> for u8 {
	fn from(visibility: Visibility) -> Self {
		visibility.priority()
	}
}

impl fmt::Display for Visibility {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Visibility::Unset => "unset",
			Visibility::Internal => "internal",
			Visibility::Secret => "secret",
			Visibility::Public => "public",
			Visibility::Virtual => "virtual",
		};
		f.write_str(name)
	}
}
