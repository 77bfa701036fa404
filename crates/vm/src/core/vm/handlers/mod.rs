//! Opcode handlers organized by category.
//!
//! Each submodule contains handler functions for related opcodes. Handlers check that every
//! operand they need is on the stack before changing anything, so a failing handler leaves the
//! state as it found it.

use alloy::primitives::U256;

use crate::error::Error;

use super::RunState;

/// Arithmetic operations: ADD, MUL, SDIV, EXP
pub mod arithmetic;

/// Memory operations: MSTORE, MSTORE8
pub mod memory;

/// Stack operations: PUSH1-PUSH32
pub mod stack;

/// Signature of an opcode handler.
pub type HandlerFn = fn(&mut RunState) -> Result<(), Error>;

/// Replaces the top two stack items `a` (top) and `b` (beneath it) with `op(a, b)`.
pub(crate) fn binary_op(state: &mut RunState, op: fn(U256, U256) -> U256) -> Result<(), Error> {
    let b = *state.stack.peek(1)?;
    let a = state.stack.pop()?;
    *state.stack.peek_mut(0)? = op(a, b);
    Ok(())
}
