// Copyright 2025 Irreducible Inc.
//! Solver hints.
//!
//! A hint computes a wire with a function supplied at solving time instead of deriving it from
//! constraint satisfaction. This crate only records which function and which inputs; the function
//! registry and its execution live with the solver.

use std::fmt;

use crate::{linear_expression::LinearExpression, term::Term};

/// Opaque identifier of a hint function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HintId(pub u32);

impl fmt::Display for HintId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "hint#{:08x}", self.0)
	}
}

/// Instruction to compute wire `wire_id` by calling hint function `id` on the evaluated `inputs`.
///
/// The wire must not also be the output of a constraint. The front-end upholds this;
/// [`ConstraintSystem::validate`][crate::constraint_system::ConstraintSystem::validate] checks it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
	/// The internal wire the hint computes.
	pub wire_id: u32,
	/// The hint function.
	pub id: HintId,
	/// Inputs to the hint function, in call order.
	pub inputs: Vec<LinearExpression>,
}

impl Hint {
	/// Creates a new hint.
	pub fn new(wire_id: u32, id: HintId, inputs: impl IntoIterator<Item = LinearExpression>) -> Self {
		Hint {
			wire_id,
			id,
			inputs: inputs.into_iter().collect(),
		}
	}

	/// Iterates over every term of every input.
	pub fn input_terms(&self) -> impl Iterator<Item = &Term> {
		self.inputs.iter().flat_map(|input| input.iter())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::visibility::Visibility;

	#[test]
	fn test_input_terms() {
		let a = Term::pack(1, 0, Visibility::Public).unwrap();
		let b = Term::pack(1, 3, Visibility::Internal).unwrap();
		let c = Term::pack(2, 1, Visibility::Secret).unwrap();

		let hint = Hint::new(
			4,
			HintId(0xdead_beef),
			[LinearExpression::from(vec![a, b]), LinearExpression::new(), LinearExpression::from(c)],
		);
		assert_eq!(hint.inputs.len(), 3);
		assert_eq!(hint.input_terms().copied().collect::<Vec<_>>(), vec![a, b, c]);
	}

	#[test]
	fn test_hint_id_display() {
		assert_eq!(HintId(0xbeef).to_string(), "hint#0000beef");
	}
}
