// Copyright 2025 Irreducible Inc.
//! Compiled representation of rank-1 constraint systems.
//!
//! This crate defines the in-memory encoding shared by the stages that consume a compiled
//! circuit: the witness solver, proving key generation and the verifier.
//!
//! - [`Term`]: a packed `(coefficient id, variable id, visibility)` triple.
//! - [`LinearExpression`]: a sum of terms, with the [canonical order][canonical_cmp] the solver
//!   relies on.
//! - [`R1C`]: a constraint `L * R = O`.
//! - [`Hint`]: a wire computed by an external function rather than by a constraint.
//! - [`LogEntry`]: a message template resolved once wire values are known.
//! - [`ConstraintSystem`]: the above bundled with the [coefficient table][CoeffTable].
//!
//! Everything is a plain value once built. No arithmetic happens here; coefficients are looked up
//! in a table passed explicitly to the rendering functions.

#![warn(missing_docs)]

pub mod coefficients;
pub mod constraint_system;
pub mod consts;
pub mod error;
pub mod hint;
pub mod linear_expression;
pub mod log_entry;
pub mod r1c;
pub mod term;
pub mod visibility;

pub use coefficients::CoeffTable;
pub use constraint_system::ConstraintSystem;
pub use error::{ConstraintSystemError, Result};
pub use hint::{Hint, HintId};
pub use linear_expression::{LinearExpression, canonical_cmp};
pub use log_entry::LogEntry;
pub use r1c::R1C;
pub use term::Term;
pub use visibility::Visibility;
