//! Error types for the configuration module

use lunar_vm::core::hardfork::UnknownForkError;

/// Errors returned while loading, storing or editing the configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be located, read or written
    #[error("Error: {0}")]
    Generic(String),

    /// The configuration file or a value given for a key is malformed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The key is not part of the configuration
    #[error("invalid key: '{0}' is not a valid configuration key.")]
    UnknownKey(String),

    /// The configured fork is not known to the interpreter
    #[error("invalid fork: {0}")]
    UnknownFork(#[from] UnknownForkError),
}
