/// Input/output utilities for file manipulation.
pub mod io;

/// Hex encoding and integer reinterpretation utilities.
pub mod strings;
