//! Error types for the Lunar interpreter.

/// Every failure the interpreter can run into. All of them are fatal to the run that raised them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// A push was attempted on a stack that already holds 1024 words.
    #[error("stack overflow")]
    StackOverflow,

    /// An operand was read from deeper than the current stack height.
    #[error("stack underflow")]
    StackUnderflow,

    /// A memory size computation left the range the gas counter can represent.
    #[error("gas uint64 overflow")]
    GasUintOverflow,

    /// The instruction costs more gas than is left.
    #[error("out of gas")]
    OutOfGas,

    /// The fetched byte has no handler in the active jump table.
    #[error("invalid opcode {0:02}")]
    InvalidOpcode(u8),

    /// A PUSH immediate is truncated by the end of the code.
    #[error("not enough bytes to read for opcode {0:02}")]
    NotEnoughBytesToRead(u8),

    /// A byte sequence has more than 32 significant bytes and does not fit in a word.
    #[error("hex number > 256 bits")]
    Overflow,
}
