// Copyright 2025 Irreducible Inc.
//! Compiled constraint system and related definitions.

use std::collections::BTreeMap;

use crate::{
	coefficients::CoeffTable,
	error::{ConstraintSystemError, Result},
	hint::Hint,
	linear_expression::LinearExpression,
	log_entry::LogEntry,
	r1c::R1C,
	visibility::Visibility,
};

/// A compiled rank-1 constraint system.
///
/// Bundles the constraints with everything the solver and the prover need to interpret them: the
/// number of declared variables of each visibility, the coefficient table the terms index into,
/// the hints keyed by the wire they compute, deferred log messages and per-constraint debug info.
///
/// Variable ids of `Public`, `Secret` and `Internal` terms index their own namespace, bounded by
/// `n_public`, `n_secret` and `n_internal` respectively. `Virtual` ids belong to the compiler and
/// are not bounded here.
///
/// # Clone
///
/// While this type is cloneable it may be expensive to do so since constraint systems can have
/// millions of constraints.
#[derive(Debug, Clone)]
pub struct ConstraintSystem {
	/// Number of public variables.
	pub n_public: u32,
	/// Number of secret variables.
	pub n_secret: u32,
	/// Number of internal variables.
	pub n_internal: u32,
	/// The coefficients referenced by the terms.
	pub coefficients: CoeffTable,
	/// The constraints that must be satisfied.
	pub constraints: Vec<R1C>,
	/// Hints, keyed by the internal wire they compute.
	pub hints: BTreeMap<u32, Hint>,
	/// Messages to print once the referenced wires are solved.
	pub logs: Vec<LogEntry>,
	/// Debug messages attached to constraints.
	pub debug_info: Vec<LogEntry>,
	/// Maps a constraint index to its entry in `debug_info`.
	pub constraint_debug: BTreeMap<usize, usize>,
}

impl ConstraintSystem {
	/// Creates a constraint system without constraints.
	pub fn new(n_public: u32, n_secret: u32, n_internal: u32, coefficients: CoeffTable) -> Self {
		ConstraintSystem {
			n_public,
			n_secret,
			n_internal,
			coefficients,
			constraints: Vec::new(),
			hints: BTreeMap::new(),
			logs: Vec::new(),
			debug_info: Vec::new(),
			constraint_debug: BTreeMap::new(),
		}
	}

	/// Appends a constraint, returning its index.
	pub fn add_constraint(&mut self, r1c: R1C) -> usize {
		self.constraints.push(r1c);
		self.constraints.len() - 1
	}

	/// Appends a constraint with a debug message to report when it is not satisfied.
	pub fn add_constraint_with_debug(&mut self, r1c: R1C, debug: LogEntry) -> usize {
		let index = self.add_constraint(r1c);
		self.constraint_debug.insert(index, self.debug_info.len());
		self.debug_info.push(debug);
		index
	}

	/// The debug message attached to the constraint at `constraint_index`, if any.
	pub fn debug_info_for(&self, constraint_index: usize) -> Option<&LogEntry> {
		self.constraint_debug
			.get(&constraint_index)
			.and_then(|&i| self.debug_info.get(i))
	}

	/// Registers a hint for its wire.
	///
	/// A wire is computed by at most one hint.
	pub fn add_hint(&mut self, hint: Hint) -> Result<()> {
		if self.hints.contains_key(&hint.wire_id) {
			return Err(ConstraintSystemError::DuplicateHint {
				wire_id: hint.wire_id,
			});
		}
		if hint.inputs.is_empty() {
			tracing::warn!(wire_id = hint.wire_id, hint_id = %hint.id, "hint has no inputs");
		}
		self.hints.insert(hint.wire_id, hint);
		Ok(())
	}

	/// The hint computing `wire_id`, if any.
	pub fn hint_for(&self, wire_id: u32) -> Option<&Hint> {
		self.hints.get(&wire_id)
	}

	/// Returns true if `wire_id` is computed by a hint.
	pub fn is_hint_wire(&self, wire_id: u32) -> bool {
		self.hints.contains_key(&wire_id)
	}

	/// Appends a deferred log message.
	pub fn add_log(&mut self, entry: LogEntry) {
		self.logs.push(entry);
	}

	/// Returns the number of constraints.
	pub fn n_constraints(&self) -> usize {
		self.constraints.len()
	}

	/// Returns the number of hints.
	pub fn n_hints(&self) -> usize {
		self.hints.len()
	}

	/// Total number of public, secret and internal variables.
	pub fn n_variables(&self) -> usize {
		self.n_public as usize + self.n_secret as usize + self.n_internal as usize
	}

	/// Puts every constraint operand and every hint input into canonical order.
	pub fn canonicalize(&mut self) {
		let _span = tracing::debug_span!(
			"canonicalize",
			n_constraints = self.constraints.len(),
			n_hints = self.hints.len()
		)
		.entered();

		for r1c in &mut self.constraints {
			r1c.l.sort_canonical();
			r1c.r.sort_canonical();
			r1c.o.sort_canonical();
		}
		for hint in self.hints.values_mut() {
			hint.inputs
				.iter_mut()
				.for_each(LinearExpression::sort_canonical);
		}
	}

	/// Ensures that this constraint system is well-formed.
	///
	/// Specifically checks that:
	///
	/// - every coefficient id is in the coefficient table.
	/// - no term has [`Visibility::Unset`].
	/// - public, secret and internal variable ids are within the declared counts.
	/// - every hint computes a declared internal wire.
	/// - no hint wire is also the output of a constraint, i.e. the single internal term of `o`.
	pub fn validate(&self) -> Result<(), ConstraintSystemError> {
		let _span = tracing::debug_span!(
			"validate",
			n_constraints = self.constraints.len(),
			n_hints = self.hints.len()
		)
		.entered();

		for (i, r1c) in self.constraints.iter().enumerate() {
			for (operand_name, operand) in r1c.operands() {
				validate_operand(self, operand, "constraint", i, operand_name)?;
			}
		}

		for (&wire_id, hint) in &self.hints {
			if wire_id >= self.n_internal {
				return Err(ConstraintSystemError::HintWireOutOfRange {
					wire_id,
					n_internal: self.n_internal,
				});
			}
			for input in &hint.inputs {
				validate_operand(self, input, "hint", wire_id as usize, "input")?;
			}
		}

		for (constraint_index, r1c) in self.constraints.iter().enumerate() {
			let [output] = r1c.o.terms() else {
				continue;
			};
			if output.visibility() == Visibility::Internal && self.is_hint_wire(output.variable_id())
			{
				return Err(ConstraintSystemError::HintWireConstrained {
					wire_id: output.variable_id(),
					constraint_index,
				});
			}
		}

		tracing::event!(
			tracing::Level::DEBUG,
			n_constraints = self.constraints.len(),
			n_hints = self.hints.len(),
			n_coefficients = self.coefficients.len(),
			"constraint system is valid"
		);

		return Ok(());

		fn validate_operand(
			cs: &ConstraintSystem,
			operand: &LinearExpression,
			location: &'static str,
			index: usize,
			operand_name: &'static str,
		) -> Result<(), ConstraintSystemError> {
			for term in operand {
				cs.coefficients.get(term.coeff_id())?;

				let limit = match term.visibility() {
					Visibility::Unset => {
						return Err(ConstraintSystemError::UnsetVisibility {
							location,
							index,
							operand_name,
						});
					}
					Visibility::Public => cs.n_public,
					Visibility::Secret => cs.n_secret,
					Visibility::Internal => cs.n_internal,
					Visibility::Virtual => continue,
				};
				if term.variable_id() >= limit {
					return Err(ConstraintSystemError::OutOfRangeVariable {
						location,
						index,
						operand_name,
						visibility: term.visibility(),
						variable_id: term.variable_id(),
						limit,
					});
				}
			}
			Ok(())
		}
	}

	/// Renders every constraint on its own line as `R1C[<index>]: L[...] * R[...] = O[...]`.
	pub fn render(&self) -> Result<String> {
		let _span = tracing::debug_span!("render", n_constraints = self.constraints.len()).entered();

		let mut out = String::new();
		for (i, r1c) in self.constraints.iter().enumerate() {
			if i > 0 {
				out.push('\n');
			}
			out.push_str("R1C[");
			out.push_str(&i.to_string());
			out.push_str("]: ");
			r1c.write_to(&mut out, &self.coefficients)?;
		}
		Ok(out)
	}
}
