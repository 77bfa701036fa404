/// The maximum number of words the stack can hold.
pub const STACK_LIMIT: usize = 1024;

/// The size of a word in bytes. Memory always grows in multiples of this.
pub const WORD_SIZE: u64 = 32;

/// The largest memory size, in bytes, whose expansion cost can be computed without the quadratic
/// term overflowing a `u64`.
pub const MAX_MEMORY_SIZE: u64 = 0x1FFFFFFFE0;

/// Linear gas charged per word of memory.
pub const MEMORY_WORD_GAS: u64 = 3;

/// Divisor of the quadratic memory gas term.
pub const MEMORY_QUAD_DIVISOR: u64 = 512;

/// Gas charged per significant byte of an EXP exponent.
pub const EXP_BYTE_GAS: u64 = 50;

/// The gas limit used when a caller does not provide one.
pub const DEFAULT_GAS_LIMIT: u64 = 1_000_000_000;
