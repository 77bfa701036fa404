use crate::{
    core::{types, vm::RunState},
    error::Error,
};

use super::binary_op;

/// ADD - Addition operation
pub fn add(state: &mut RunState) -> Result<(), Error> {
    binary_op(state, types::add)
}

/// MUL - Multiplication operation
pub fn mul(state: &mut RunState) -> Result<(), Error> {
    binary_op(state, types::mul)
}

/// SDIV - Signed integer division operation. The top of the stack is the numerator.
pub fn sdiv(state: &mut RunState) -> Result<(), Error> {
    binary_op(state, types::sdiv)
}

/// EXP - Exponential operation. The top of the stack is the base.
pub fn exp(state: &mut RunState) -> Result<(), Error> {
    binary_op(state, types::exp)
}
