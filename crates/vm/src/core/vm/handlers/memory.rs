use alloy::primitives::U256;

use crate::{core::vm::RunState, error::Error};

/// Pops the offset and the value of a memory store, in that order.
fn pop_store_operands(state: &mut RunState) -> Result<(u64, U256), Error> {
    state.stack.peek(1)?;

    let offset = state.stack.pop()?;
    let value = state.stack.pop()?;

    // the dynamic gas function has already rejected offsets past the addressable range
    let offset = u64::try_from(offset).map_err(|_| Error::GasUintOverflow)?;
    Ok((offset, value))
}

/// MSTORE - Save word to memory
pub fn mstore(state: &mut RunState) -> Result<(), Error> {
    let (offset, value) = pop_store_operands(state)?;
    state.memory.store_word(offset, &value)
}

/// MSTORE8 - Save byte to memory
pub fn mstore8(state: &mut RunState) -> Result<(), Error> {
    let (offset, value) = pop_store_operands(state)?;
    state.memory.store_byte(offset, value.byte(0))
}
