// Copyright 2025 Irreducible Inc.
//! [`Term`] related definitions.

use std::{cmp::Ordering, fmt};

use crate::{
	consts::{
		COEFF_ID_MASK, COEFF_ID_SHIFT, MAX_COEFF_ID, MAX_VARIABLE_ID, VARIABLE_ID_MASK,
		VARIABLE_ID_SHIFT, VISIBILITY_MASK, VISIBILITY_SHIFT,
	},
	error::{ConstraintSystemError, Result},
	visibility::Visibility,
};

/// One occurrence of a variable inside a linear expression, `coefficient * variable`.
///
/// The coefficient id, variable id and visibility are packed into a single `u64` following the
/// layout in [`consts`][crate::consts]. The coefficient id indexes a coefficient table owned by
/// the caller.
///
/// A `Term` can only be built through [`Term::pack`] or [`Term::from_raw`], both of which reject
/// ids that don't fit and visibility tags outside of [`Visibility`]. Every `Term` in existence is
/// therefore well-formed.
///
/// Two terms are equal iff all three fields are equal. The [`Ord`] implementation is the
/// canonical order, see [`canonical_cmp`][crate::linear_expression::canonical_cmp].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term(u64);

impl Term {
	/// Packs the three fields into a term.
	pub fn pack(coeff_id: u32, variable_id: u32, visibility: Visibility) -> Result<Term> {
		check_range("coefficient id", coeff_id, MAX_COEFF_ID)?;
		check_range("variable id", variable_id, MAX_VARIABLE_ID)?;

		Ok(Term(
			((coeff_id as u64) << COEFF_ID_SHIFT)
				| ((variable_id as u64) << VARIABLE_ID_SHIFT)
				| ((visibility.priority() as u64) << VISIBILITY_SHIFT),
		))
	}

	/// Reinterprets an already packed value.
	///
	/// Fails with [`ConstraintSystemError::InvalidVisibility`] if the visibility tag is not one
	/// of the defined visibilities.
	pub fn from_raw(raw: u64) -> Result<Term> {
		Visibility::try_from(visibility_tag(raw))?;
		Ok(Term(raw))
	}

	/// The packed representation.
	pub const fn raw(self) -> u64 {
		self.0
	}

	/// Splits the term into `(coeff_id, variable_id, visibility)`.
	///
	/// This is the exact inverse of [`Term::pack`].
	pub fn unpack(self) -> (u32, u32, Visibility) {
		(self.coeff_id(), self.variable_id(), self.visibility())
	}

	/// Index of the coefficient in the coefficient table.
	pub const fn coeff_id(self) -> u32 {
		((self.0 >> COEFF_ID_SHIFT) & COEFF_ID_MASK) as u32
	}

	/// Index of the variable.
	pub const fn variable_id(self) -> u32 {
		((self.0 >> VARIABLE_ID_SHIFT) & VARIABLE_ID_MASK) as u32
	}

	/// The raw visibility tag.
	pub const fn visibility_tag(self) -> u8 {
		visibility_tag(self.0)
	}

	/// Visibility of the variable.
	pub fn visibility(self) -> Visibility {
		Visibility::try_from(self.visibility_tag())
			.expect("Term constructors reject undefined visibility tags")
	}

	/// Returns a copy of this term that uses another coefficient.
	pub fn with_coeff_id(self, coeff_id: u32) -> Result<Term> {
		Term::pack(coeff_id, self.variable_id(), self.visibility())
	}

	/// Returns a copy of this term that refers to another variable.
	pub fn with_variable_id(self, variable_id: u32) -> Result<Term> {
		Term::pack(self.coeff_id(), variable_id, self.visibility())
	}

	/// Returns a copy of this term with another visibility.
	pub fn with_visibility(self, visibility: Visibility) -> Term {
		let cleared = self.0 & !(VISIBILITY_MASK << VISIBILITY_SHIFT);
		Term(cleared | ((visibility.priority() as u64) << VISIBILITY_SHIFT))
	}
}

const fn visibility_tag(raw: u64) -> u8 {
	((raw >> VISIBILITY_SHIFT) & VISIBILITY_MASK) as u8
}

fn check_range(field: &'static str, value: u32, max: u32) -> Result<()> {
	if value > max {
		return Err(ConstraintSystemError::RangeOverflow {
			field,
			value: value as u64,
			max: max as u64,
		});
	}
	Ok(())
}

impl fmt::Debug for Term {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (coeff_id, variable_id, visibility) = self.unpack();
		write!(f, "Term(c{coeff_id}*{}{variable_id})", visibility.prefix())
	}
}

impl PartialOrd for Term {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Term {
	fn cmp(&self, other: &Self) -> Ordering {
		crate::linear_expression::canonical_cmp(self, other)
	}
}

impl TryFrom<u64> for Term {
	type Error = ConstraintSystemError;

	fn try_from(raw: u64) -> Result<Self, Self::Error> {
		Term::from_raw(raw)
	}
}

impl From<Term> for u64 {
	fn from(term: Term) -> Self {
		term.raw()
	}
}
