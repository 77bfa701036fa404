//! Dynamic gas functions.
//!
//! These only ever read the [`RunState`]. They run against the stack and memory as they were
//! before the opcode's handler touches anything, and the interpreter applies their side effects
//! (the memory cost watermark) only once the full charge has been paid.

use crate::{
    core::{
        constants::{
            EXP_BYTE_GAS, MAX_MEMORY_SIZE, MEMORY_QUAD_DIVISOR, MEMORY_WORD_GAS, WORD_SIZE,
        },
        opcodes::MSTORE8,
        types::{byte_len, ceil32},
        vm::RunState,
    },
    error::Error,
};

/// The outcome of a dynamic gas function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DynamicGas {
    /// Gas to charge on top of the opcode's constant gas.
    pub gas: u64,

    /// The new memory cost watermark, if the instruction grows memory.
    pub memory_cost: Option<u64>,
}

impl DynamicGas {
    /// A charge which leaves the memory watermark untouched.
    pub const fn flat(gas: u64) -> Self {
        Self { gas, memory_cost: None }
    }
}

/// Signature of a dynamic gas function.
pub type DynamicGasFn = fn(&RunState) -> Result<DynamicGas, Error>;

/// The total cost of `words` words of memory: `3 * words + words^2 / 512`.
///
/// ```
/// use lunar_vm::core::gas::memory_cost;
///
/// assert_eq!(memory_cost(1), 3);
/// assert_eq!(memory_cost(512), 2048);
/// ```
#[inline]
pub const fn memory_cost(words: u64) -> u64 {
    MEMORY_WORD_GAS * words + words * words / MEMORY_QUAD_DIVISOR
}

/// Gas for growing memory to cover a MSTORE (32 bytes) or MSTORE8 (1 byte) at the offset on top
/// of the stack.
///
/// Only growth past the current memory size is billed, and only the difference between the new
/// total cost and the highest total cost billed so far.
pub fn memory_expansion_cost(state: &RunState) -> Result<DynamicGas, Error> {
    let write_size = if state.opcode == MSTORE8 { 1 } else { WORD_SIZE };

    let offset = u64::try_from(*state.stack.peek(0)?).map_err(|_| Error::GasUintOverflow)?;
    let new_byte_len = offset
        .checked_add(write_size)
        .and_then(ceil32)
        .filter(|size| *size <= MAX_MEMORY_SIZE)
        .ok_or(Error::GasUintOverflow)?;

    if new_byte_len <= state.memory.byte_len() {
        return Ok(DynamicGas::default());
    }

    let new_cost = memory_cost(new_byte_len / WORD_SIZE);
    Ok(DynamicGas {
        gas: new_cost.saturating_sub(state.highest_memory_cost),
        memory_cost: Some(new_cost),
    })
}

/// Gas for EXP: 50 per significant byte of the exponent, which sits second from the top.
pub fn exp_cost(state: &RunState) -> Result<DynamicGas, Error> {
    let exponent = state.stack.peek(1)?;
    Ok(DynamicGas::flat(EXP_BYTE_GAS * byte_len(*exponent)))
}
