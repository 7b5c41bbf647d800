// Copyright 2025 Irreducible Inc.
//! Rank-1 constraint.

use num_bigint::BigInt;

use crate::{error::Result, linear_expression::LinearExpression};

/// Rank-1 constraint `L * R = O`.
///
/// Each side is a [`LinearExpression`] evaluated as `Σ coeff * value` over the field. The
/// constraint is a pure representation and is not mutated after it has been built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct R1C {
	/// Left operand.
	pub l: LinearExpression,
	/// Right operand.
	pub r: LinearExpression,
	/// Output.
	pub o: LinearExpression,
}

impl R1C {
	/// Creates a new constraint `l * r = o`.
	pub fn new(
		l: impl Into<LinearExpression>,
		r: impl Into<LinearExpression>,
		o: impl Into<LinearExpression>,
	) -> Self {
		R1C {
			l: l.into(),
			r: r.into(),
			o: o.into(),
		}
	}

	/// The three operands paired with their names, in `l`, `r`, `o` order.
	pub fn operands(&self) -> [(&'static str, &LinearExpression); 3] {
		[("l", &self.l), ("r", &self.r), ("o", &self.o)]
	}

	/// Renders the constraint as `L[...] * R[...] = O[...]`.
	pub fn render(&self, coeffs: &[BigInt]) -> Result<String> {
		let mut out = String::new();
		self.write_to(&mut out, coeffs)?;
		Ok(out)
	}

	pub(crate) fn write_to(&self, out: &mut String, coeffs: &[BigInt]) -> Result<()> {
		out.push_str("L[");
		self.l.write_to(out, coeffs)?;
		out.push_str("] * R[");
		self.r.write_to(out, coeffs)?;
		out.push_str("] = O[");
		self.o.write_to(out, coeffs)?;
		out.push(']');
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{error::ConstraintSystemError, term::Term, visibility::Visibility};

	fn term(coeff_id: u32, variable_id: u32, visibility: Visibility) -> Term {
		Term::pack(coeff_id, variable_id, visibility).unwrap()
	}

	#[test]
	fn test_render() {
		let r1c = R1C::new(
			term(0, 1, Visibility::Public),
			term(0, 1, Visibility::Public),
			term(1, 2, Visibility::Internal),
		);
		let coeffs = [BigInt::from(1), BigInt::from(1)];
		assert_eq!(r1c.render(&coeffs).unwrap(), "L[1*p1] * R[1*p1] = O[1*i2]");
	}

	#[test]
	fn test_render_multi_term_and_empty() {
		let r1c = R1C::new(
			vec![term(0, 0, Visibility::Secret), term(1, 3, Visibility::Virtual)],
			LinearExpression::new(),
			term(0, 4, Visibility::Internal),
		);
		let coeffs = [BigInt::from(5), BigInt::from(-1)];
		assert_eq!(r1c.render(&coeffs).unwrap(), "L[5*s0 + -1*v3] * R[] = O[5*i4]");
	}

	#[test]
	fn test_render_fails_on_missing_coefficient() {
		let r1c = R1C::new(
			term(0, 0, Visibility::Public),
			term(0, 0, Visibility::Public),
			term(7, 1, Visibility::Internal),
		);
		assert_eq!(
			r1c.render(&[BigInt::from(1)]),
			Err(ConstraintSystemError::IndexOutOfRange {
				coeff_id: 7,
				table_len: 1
			})
		);
	}

	#[test]
	fn test_operands() {
		let r1c = R1C::new(
			term(0, 0, Visibility::Public),
			LinearExpression::new(),
			term(0, 1, Visibility::Internal),
		);
		let names: Vec<_> = r1c.operands().iter().map(|(name, expr)| (*name, expr.len())).collect();
		assert_eq!(names, vec![("l", 1), ("r", 0), ("o", 1)]);
	}
}
