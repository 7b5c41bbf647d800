// Copyright 2025 Irreducible Inc.
//! Coefficient table referenced by the coefficient ids of [`Term`][crate::term::Term]s.

use std::{collections::HashMap, ops::Deref};

use num_bigint::BigInt;

use crate::{
	consts::{COEFF_ID_MINUS_ONE, COEFF_ID_ONE, COEFF_ID_TWO, COEFF_ID_ZERO, MAX_COEFF_ID},
	error::{ConstraintSystemError, Result},
};

/// Deduplicating table of arbitrary-precision coefficients.
///
/// Ids are dense and assigned in insertion order. Every table starts with the well-known
/// coefficients `0`, `1`, `2` and `-1` at [`COEFF_ID_ZERO`], [`COEFF_ID_ONE`], [`COEFF_ID_TWO`]
/// and [`COEFF_ID_MINUS_ONE`].
///
/// Rendering functions take the table as `&[BigInt]`, which this type derefs to.
#[derive(Clone, Debug)]
pub struct CoeffTable {
	coeffs: Vec<BigInt>,
	ids: HashMap<BigInt, u32>,
}

impl CoeffTable {
	/// Creates a table holding only the well-known coefficients.
	pub fn new() -> Self {
		let mut table = CoeffTable {
			coeffs: Vec::new(),
			ids: HashMap::new(),
		};
		for (expected_id, value) in [
			(COEFF_ID_ZERO, 0),
			(COEFF_ID_ONE, 1),
			(COEFF_ID_TWO, 2),
			(COEFF_ID_MINUS_ONE, -1),
		] {
			let id = table.push_new(BigInt::from(value));
			debug_assert_eq!(id, expected_id);
		}
		table
	}

	/// Returns the id of `value`, inserting it if it isn't in the table yet.
	///
	/// Fails with [`ConstraintSystemError::RangeOverflow`] once the table holds more coefficients
	/// than a term can address.
	pub fn get_or_insert(&mut self, value: &BigInt) -> Result<u32> {
		if let Some(&id) = self.ids.get(value) {
			return Ok(id);
		}
		let next_id = self.coeffs.len() as u64;
		if next_id > MAX_COEFF_ID as u64 {
			return Err(ConstraintSystemError::RangeOverflow {
				field: "coefficient id",
				value: next_id,
				max: MAX_COEFF_ID as u64,
			});
		}
		Ok(self.push_new(value.clone()))
	}

	fn push_new(&mut self, value: BigInt) -> u32 {
		let id = self.coeffs.len() as u32;
		self.ids.insert(value.clone(), id);
		self.coeffs.push(value);
		id
	}

	/// Looks up the coefficient with the given id.
	pub fn get(&self, coeff_id: u32) -> Result<&BigInt> {
		lookup(&self.coeffs, coeff_id)
	}

	/// Number of distinct coefficients.
	pub fn len(&self) -> usize {
		self.coeffs.len()
	}

	/// Returns true if the table holds no coefficients.
	pub fn is_empty(&self) -> bool {
		self.coeffs.is_empty()
	}

	/// The coefficients, indexed by id.
	pub fn as_slice(&self) -> &[BigInt] {
		&self.coeffs
	}
}

impl Default for CoeffTable {
	fn default() -> Self {
		Self::new()
	}
}

impl Deref for CoeffTable {
	type Target = [BigInt];

	fn deref(&self) -> &Self::Target {
		self.as_slice()
	}
}

impl AsRef<[BigInt]> for CoeffTable {
	fn as_ref(&self) -> &[BigInt] {
		self.as_slice()
	}
}

/// Looks up `coeff_id` in a plain coefficient slice.
pub(crate) fn lookup(coeffs: &[BigInt], coeff_id: u32) -> Result<&BigInt> {
	coeffs
		.get(coeff_id as usize)
		.ok_or(ConstraintSystemError::IndexOutOfRange {
			coeff_id,
			table_len: coeffs.len(),
		})
}
