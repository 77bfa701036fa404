use std::fmt::{self, Display};

use alloy::primitives::{hex, B256};

use crate::{
    core::{types::keccak256, vm::RunState},
    error::Error,
};

const RULE: &str = "--------------------------------------------------";

/// [`ExecutionResult`] is the result of a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Keccak-256 of the final memory contents.
    pub memory_hash: B256,

    /// The amount of gas consumed during the run.
    pub gas_used: u64,

    /// The amount of gas left after the run halted.
    pub gas_refund: u64,

    /// The error the run halted on, if any.
    pub error: Option<Error>,
}

impl ExecutionResult {
    /// Summarizes a halted run.
    pub fn new(state: &RunState, error: Option<Error>) -> Self {
        Self {
            memory_hash: keccak256(state.memory.as_slice()),
            gas_used: state.gas_used,
            gas_refund: state.gas_remaining,
            error,
        }
    }

    /// Whether the run reached the end of its code without an error.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        match &self.error {
            None => {
                writeln!(f, "{:<22}{}", "Memory Keccak256:", hex::encode(self.memory_hash))?;
                writeln!(f, "{:<22}{}", "Total Gas Consumed:", self.gas_used)?;
                writeln!(f, "{:<22}{}", "Gas Refund:", self.gas_refund)?;
            }
            Some(error) => writeln!(f, "evm error: {error}")?,
        }
        write!(f, "{RULE}")
    }
}
