// Copyright 2025 Irreducible Inc.
//! Deferred log messages.

/// A message template whose operands are wire values that are only known at solving time.
///
/// `to_resolve` lists, in placeholder order, which wire each placeholder in `format` refers to.
/// Substituting the values is up to whoever consumes the entry once the wires are solved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LogEntry {
	/// The message template.
	pub format: String,
	/// Wires referenced by the placeholders of `format`.
	pub to_resolve: Vec<u32>,
}

impl LogEntry {
	/// Creates a new entry.
	pub fn new(format: impl Into<String>, to_resolve: impl IntoIterator<Item = u32>) -> Self {
		LogEntry {
			format: format.into(),
			to_resolve: to_resolve.into_iter().collect(),
		}
	}
}
