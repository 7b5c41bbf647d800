// Copyright 2025 Irreducible Inc.
//! Hosts error definitions for the compiled crate.

use crate::visibility::Visibility;

/// Result alias used throughout the crate.
pub type Result<T, E = ConstraintSystemError> = std::result::Result<T, E>;

/// Constraint representation related error.
#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintSystemError {
	#[error("visibility tag {tag} is not one of the defined visibilities")]
	InvalidVisibility { tag: u8 },
	#[error("{field} {value} does not fit the packed term (max is {max})")]
	RangeOverflow {
		field: &'static str,
		value: u64,
		max: u64,
	},
	#[error("coefficient id {coeff_id} is out of range for a table of {table_len} coefficients")]
	IndexOutOfRange { coeff_id: u32, table_len: usize },
	#[error("{location} #{index} has a term with unset visibility in its {operand_name} operand")]
	UnsetVisibility {
		location: &'static str,
		index: usize,
		operand_name: &'static str,
	},
	#[error(
		"{location} #{index} refers to {visibility:?} variable {variable_id} in its {operand_name} operand, but only {limit} are declared"
	)]
	OutOfRangeVariable {
		location: &'static str,
		index: usize,
		operand_name: &'static str,
		visibility: Visibility,
		variable_id: u32,
		limit: u32,
	},
	#[error("wire {wire_id} already has a hint")]
	DuplicateHint { wire_id: u32 },
	#[error("hint wire {wire_id} is not an internal wire (only {n_internal} are declared)")]
	HintWireOutOfRange { wire_id: u32, n_internal: u32 },
	#[error("hint wire {wire_id} is also the output of constraint #{constraint_index}")]
	HintWireConstrained {
		wire_id: u32,
		constraint_index: usize,
	},
}
