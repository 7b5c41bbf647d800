// Copyright 2025 Irreducible Inc.
//! Bit layout of a packed [`Term`][crate::term::Term] and the well-known coefficient ids.
//!
//! A term occupies a single `u64`:
//!
//! ```text
//!  63   61 60                            30 29                             0
//! +-------+--------------------------------+-------------------------------+
//! |  vis  |          variable id           |        coefficient id         |
//! +-------+--------------------------------+-------------------------------+
//! ```
//!
//! The widths are fixed. Ids that do not fit are rejected at construction, never truncated.

/// Produces a mask with the lowest `bits` bits set.
const fn low_mask(bits: u32) -> u64 {
	assert!(bits < 64, "mask width must be below 64 bits");
	(1u64 << bits) - 1
}

/// Number of bits reserved for the coefficient id.
pub const COEFF_ID_BITS: u32 = 30;

/// Number of bits reserved for the variable id.
pub const VARIABLE_ID_BITS: u32 = 31;

/// Number of bits reserved for the visibility tag.
///
/// Three bits hold the five defined visibilities; tags 5 to 7 are invalid.
pub const VISIBILITY_BITS: u32 = 3;

const _: () = assert!(COEFF_ID_BITS + VARIABLE_ID_BITS + VISIBILITY_BITS == u64::BITS);

/// Offset of the coefficient id within the packed term.
pub const COEFF_ID_SHIFT: u32 = 0;

/// Offset of the variable id within the packed term.
pub const VARIABLE_ID_SHIFT: u32 = COEFF_ID_SHIFT + COEFF_ID_BITS;

/// Offset of the visibility tag within the packed term.
pub const VISIBILITY_SHIFT: u32 = VARIABLE_ID_SHIFT + VARIABLE_ID_BITS;

/// Mask of the coefficient id, before shifting.
pub const COEFF_ID_MASK: u64 = low_mask(COEFF_ID_BITS);

/// Mask of the variable id, before shifting.
pub const VARIABLE_ID_MASK: u64 = low_mask(VARIABLE_ID_BITS);

/// Mask of the visibility tag, before shifting.
pub const VISIBILITY_MASK: u64 = low_mask(VISIBILITY_BITS);

/// The largest coefficient id a term can address.
pub const MAX_COEFF_ID: u32 = COEFF_ID_MASK as u32;

/// The largest variable id a term can address.
pub const MAX_VARIABLE_ID: u32 = VARIABLE_ID_MASK as u32;

/// Coefficient id of `0` in every [`CoeffTable`][crate::coefficients::CoeffTable].
pub const COEFF_ID_ZERO: u32 = 0;

/// Coefficient id of `1` in every [`CoeffTable`][crate::coefficients::CoeffTable].
pub const COEFF_ID_ONE: u32 = 1;

/// Coefficient id of `2` in every [`CoeffTable`][crate::coefficients::CoeffTable].
pub const COEFF_ID_TWO: u32 = 2;

/// Coefficient id of `-1` in every [`CoeffTable`][crate::coefficients::CoeffTable].
pub const COEFF_ID_MINUS_ONE: u32 = 3;
