//! Common utilities used across the Lunar codebase.
//!
//! This crate provides shared functionality for the Lunar toolkit, such as hex encoding and
//! file helpers.

/// General utility functions and types for common tasks.
pub mod utils;
