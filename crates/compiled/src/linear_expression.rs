// Copyright 2025 Irreducible Inc.
//! [`LinearExpression`] and the canonical order of terms.

use std::{cmp::Ordering, ops::Deref};

use num_bigint::BigInt;

use crate::{coefficients::lookup, error::Result, term::Term, visibility::Visibility};

/// Compares two terms in canonical order.
///
/// Terms with higher priority visibility come first (`Virtual`, `Public`, `Secret`, `Internal`,
/// then `Unset`). Among terms of the same visibility the lower variable id comes first. Terms that
/// still tie are ordered by coefficient id, which makes this a strict total order over distinct
/// terms: any sort algorithm yields the same sequence for the same multiset of terms.
pub fn canonical_cmp(a: &Term, b: &Term) -> Ordering {
	let (a_coeff, a_var, a_vis) = a.unpack();
	let (b_coeff, b_var, b_vis) = b.unpack();
	b_vis
		.cmp(&a_vis)
		.then(a_var.cmp(&b_var))
		.then(a_coeff.cmp(&b_coeff))
}

/// A linear combination `Σ coeff_i * var_i` of [`Term`]s.
///
/// Insertion order is kept. It matters for display only; the solver expects expressions in
/// canonical order, see [`LinearExpression::sort_canonical`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinearExpression(Vec<Term>);

impl LinearExpression {
	/// Creates an empty expression.
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Number of terms.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the expression has no terms, i.e. it is the constant zero.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Appends a term.
	pub fn push(&mut self, term: Term) {
		self.0.push(term);
	}

	/// The terms, in their current order.
	pub fn terms(&self) -> &[Term] {
		&self.0
	}

	/// Consumes the expression, returning its terms.
	pub fn into_terms(self) -> Vec<Term> {
		self.0
	}

	/// Sorts the terms in place into canonical order.
	pub fn sort_canonical(&mut self) {
		self.0.sort_unstable_by(canonical_cmp);
	}

	/// Returns a copy of this expression in canonical order.
	pub fn to_canonical(&self) -> Self {
		let mut sorted = self.clone();
		sorted.sort_canonical();
		sorted
	}

	/// Returns true if the terms are already in canonical order.
	pub fn is_canonical(&self) -> bool {
		self.0
			.is_sorted_by(|a, b| canonical_cmp(a, b) != Ordering::Greater)
	}

	/// Iterates over the terms that refer to variables of the given visibility.
	pub fn terms_with_visibility(&self, visibility: Visibility) -> impl Iterator<Item = &Term> {
		self.0
			.iter()
			.filter(move |term| term.visibility() == visibility)
	}

	/// Renders the expression as `c0*p0 + c1*i1 + ...`, looking the coefficients up in `coeffs`.
	///
	/// The empty expression renders as the empty string.
	pub fn render(&self, coeffs: &[BigInt]) -> Result<String> {
		let mut out = String::new();
		self.write_to(&mut out, coeffs)?;
		Ok(out)
	}

	pub(crate) fn write_to(&self, out: &mut String, coeffs: &[BigInt]) -> Result<()> {
		for (i, term) in self.0.iter().enumerate() {
			if i > 0 {
				out.push_str(" + ");
			}
			write_term(out, *term, coeffs)?;
		}
		Ok(())
	}
}

fn write_term(out: &mut String, term: Term, coeffs: &[BigInt]) -> Result<()> {
	let coeff = lookup(coeffs, term.coeff_id())?;
	let visibility = Visibility::try_from(term.visibility_tag())?;

	out.push_str(&coeff.to_string());
	out.push('*');
	out.push(visibility.prefix());
	out.push_str(&term.variable_id().to_string());
	Ok(())
}

impl Deref for LinearExpression {
	type Target = [Term];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<Term>> for LinearExpression {
	fn from(terms: Vec<Term>) -> Self {
		Self(terms)
	}
}

impl From<Term> for LinearExpression {
	fn from(term: Term) -> Self {
		Self(vec![term])
	}
}

impl FromIterator<Term> for LinearExpression {
	fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl Extend<Term> for LinearExpression {
	fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
		self.0.extend(iter);
	}
}

impl IntoIterator for LinearExpression {
	type Item = Term;
	type IntoIter = std::vec::IntoIter<Term>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a LinearExpression {
	type Item = &'a Term;
	type IntoIter = std::slice::Iter<'a, Term>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

	use super::*;
	use crate::error::ConstraintSystemError;

	fn term(coeff_id: u32, variable_id: u32, visibility: Visibility) -> Term {
		Term::pack(coeff_id, variable_id, visibility).unwrap()
	}

	fn coeffs(values: &[i64]) -> Vec<BigInt> {
		values.iter().copied().map(BigInt::from).collect()
	}

	fn any_term() -> impl Strategy<Value = Term> {
		(0..4u32, 0..8u32, prop::sample::select(Visibility::ALL.to_vec()))
			.prop_map(|(c, v, vis)| term(c, v, vis))
	}

	#[test]
	fn test_visibility_precedence() {
		let virt = term(0, 100, Visibility::Virtual);
		let internal = term(0, 0, Visibility::Internal);
		assert_eq!(canonical_cmp(&virt, &internal), Ordering::Less);
		assert_eq!(canonical_cmp(&internal, &virt), Ordering::Greater);

		let five = term(0, 5, Visibility::Secret);
		let two = term(0, 2, Visibility::Secret);
		assert_eq!(canonical_cmp(&two, &five), Ordering::Less);
	}

	#[test]
	fn test_sort_canonical() {
		let mut expr: LinearExpression = [
			term(0, 3, Visibility::Internal),
			term(0, 9, Visibility::Unset),
			term(1, 1, Visibility::Public),
			term(0, 4, Visibility::Virtual),
			term(0, 2, Visibility::Secret),
			term(0, 0, Visibility::Public),
			term(0, 1, Visibility::Internal),
		]
		.into_iter()
		.collect();
		assert!(!expr.is_canonical());

		expr.sort_canonical();
		assert!(expr.is_canonical());
		assert_eq!(
			expr.terms(),
			&[
				term(0, 4, Visibility::Virtual),
				term(0, 0, Visibility::Public),
				term(1, 1, Visibility::Public),
				term(0, 2, Visibility::Secret),
				term(0, 1, Visibility::Internal),
				term(0, 3, Visibility::Internal),
				term(0, 9, Visibility::Unset),
			]
		);
	}

	#[test]
	fn test_clone_is_independent() {
		let original: LinearExpression =
			vec![term(0, 1, Visibility::Internal), term(1, 0, Visibility::Public)].into();
		let mut copy = original.clone();
		assert_eq!(copy, original);

		copy.push(term(2, 2, Visibility::Secret));
		copy.sort_canonical();

		assert_eq!(original.len(), 2);
		assert_eq!(original.terms()[0], term(0, 1, Visibility::Internal));
		assert_eq!(copy.len(), 3);
	}

	#[test]
	fn test_to_canonical_leaves_source_untouched() {
		let expr: LinearExpression =
			vec![term(0, 1, Visibility::Internal), term(0, 0, Visibility::Public)].into();
		let sorted = expr.to_canonical();
		assert_eq!(expr.terms()[0].visibility(), Visibility::Internal);
		assert_eq!(sorted.terms()[0].visibility(), Visibility::Public);
	}

	#[test]
	fn test_render() {
		let expr: LinearExpression =
			vec![term(0, 5, Visibility::Internal), term(1, 2, Visibility::Public)].into();
		assert_eq!(expr.render(&coeffs(&[3, 7])).unwrap(), "3*i5 + 7*p2");
	}

	#[test]
	fn test_render_all_prefixes() {
		let expr: LinearExpression = Visibility::ALL
			.iter()
			.enumerate()
			.map(|(i, &vis)| term(0, i as u32, vis))
			.collect();
		assert_eq!(expr.render(&coeffs(&[-2])).unwrap(), "-2*u0 + -2*i1 + -2*s2 + -2*p3 + -2*v4");
	}

	#[test]
	fn test_render_empty() {
		assert_eq!(LinearExpression::new().render(&[]).unwrap(), "");
	}

	#[test]
	fn test_render_missing_coefficient() {
		let expr = LinearExpression::from(term(2, 0, Visibility::Internal));
		assert_eq!(
			expr.render(&coeffs(&[1, 1])),
			Err(ConstraintSystemError::IndexOutOfRange {
				coeff_id: 2,
				table_len: 2
			})
		);
	}

	#[test]
	fn test_terms_with_visibility() {
		let expr: LinearExpression = vec![
			term(0, 0, Visibility::Public),
			term(0, 1, Visibility::Internal),
			term(0, 2, Visibility::Public),
		]
		.into();
		let ids: Vec<_> = expr
			.terms_with_visibility(Visibility::Public)
			.map(|t| t.variable_id())
			.collect();
		assert_eq!(ids, vec![0, 2]);
	}

	#[test]
	fn test_sort_is_reproducible() {
		let terms: Vec<Term> = (0..64)
			.map(|i| term(i % 3, i % 11, Visibility::ALL[(i % 5) as usize]))
			.collect();
		let mut rng = StdRng::seed_from_u64(0);

		let mut reference = terms.clone();
		reference.sort_by(canonical_cmp);

		for _ in 0..16 {
			let mut shuffled = terms.clone();
			shuffled.shuffle(&mut rng);
			let mut expr = LinearExpression::from(shuffled);
			expr.sort_canonical();
			assert_eq!(expr.terms(), reference.as_slice());
		}
	}

	proptest! {
		#[test]
		fn prop_irreflexive_and_antisymmetric(a in any_term(), b in any_term()) {
			prop_assert_eq!(canonical_cmp(&a, &a), Ordering::Equal);
			prop_assert_eq!(canonical_cmp(&a, &b), canonical_cmp(&b, &a).reverse());
			prop_assert_eq!(canonical_cmp(&a, &b) == Ordering::Equal, a == b);
		}

		#[test]
		fn prop_transitive(a in any_term(), b in any_term(), c in any_term()) {
			if canonical_cmp(&a, &b) == Ordering::Less && canonical_cmp(&b, &c) == Ordering::Less {
				prop_assert_eq!(canonical_cmp(&a, &c), Ordering::Less);
			}
		}

		#[test]
		fn prop_stable_and_unstable_sort_agree(terms in prop::collection::vec(any_term(), 0..32)) {
			let mut stable = terms.clone();
			stable.sort_by(canonical_cmp);
			let expr = LinearExpression::from(terms).to_canonical();
			prop_assert_eq!(expr.terms(), stable.as_slice());
			prop_assert!(expr.is_canonical());
		}
	}
}
