#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("missing flag --bytecode")]
    MissingBytecode,
    #[error("gas should be a valid decimal")]
    InvalidGas,
    #[error("invalid bytecode: {0}")]
    InvalidBytecode(String),
    #[error("{0}")]
    UnknownFork(#[from] lunar_vm::core::hardfork::UnknownForkError),
    #[error("Config error: {0}")]
    ConfigError(#[from] lunar_config::error::Error),
}
