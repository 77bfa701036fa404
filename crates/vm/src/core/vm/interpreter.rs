#[cfg(feature = "step-tracing")]
use std::time::Instant;

use tracing::debug;
#[cfg(feature = "step-tracing")]
use tracing::trace;

use crate::{
    core::{gas::DynamicGas, opcodes::JumpTable},
    error::Error,
};

use super::{ExecutionResult, RunState};

/// The [`Interpreter`] drives runs against a single jump table.
///
/// It holds no per-run state, so one instance can execute any number of runs, from any number
/// of threads.
#[derive(Clone, Copy, Debug)]
pub struct Interpreter {
    table: &'static JumpTable,
}

impl Interpreter {
    /// Creates an interpreter for the given jump table.
    pub const fn new(table: &'static JumpTable) -> Self {
        Self { table }
    }

    /// Runs `code` with `gas_limit` gas until the end of the code or the first error.
    ///
    /// ```
    /// use lunar_vm::core::{opcodes::MOON_INSTRUCTION_SET, vm::Interpreter};
    ///
    /// let interpreter = Interpreter::new(&MOON_INSTRUCTION_SET);
    /// let result = interpreter.run(vec![0x60, 0x01], 10);
    /// assert!(result.is_success());
    /// assert_eq!(result.gas_used, 3);
    /// ```
    pub fn run(&self, code: Vec<u8>, gas_limit: u64) -> ExecutionResult {
        self.run_with_state(code, gas_limit).0
    }

    /// Same as [`Interpreter::run`], but also hands back the final [`RunState`].
    pub fn run_with_state(&self, code: Vec<u8>, gas_limit: u64) -> (ExecutionResult, RunState) {
        let mut state = RunState::new(code, gas_limit);
        debug!(code_len = state.code.len(), gas_limit, "starting run");

        let error = self.execute(&mut state).err();
        let result = ExecutionResult::new(&state, error);

        debug!(
            gas_used = result.gas_used,
            gas_refund = result.gas_refund,
            memory_size = state.memory.byte_len(),
            error = ?result.error,
            "run halted"
        );
        (result, state)
    }

    /// Steps through `state` until the code is exhausted.
    fn execute(&self, state: &mut RunState) -> Result<(), Error> {
        #[cfg(feature = "step-tracing")]
        let start_time = Instant::now();
        #[cfg(feature = "step-tracing")]
        let mut operation_count: u64 = 0;

        while !state.is_done() {
            self.step(state)?;

            #[cfg(feature = "step-tracing")]
            {
                operation_count += 1;
            }
        }

        #[cfg(feature = "step-tracing")]
        trace!(
            operation_count,
            elapsed = ?start_time.elapsed(),
            "execute.end"
        );
        Ok(())
    }

    /// Executes the opcode at the program counter.
    fn step(&self, state: &mut RunState) -> Result<(), Error> {
        let opcode = state.code[state.pc];
        let info = self.table.get(opcode).ok_or(Error::InvalidOpcode(opcode))?;

        #[cfg(feature = "step-tracing")]
        let pc = state.pc;

        state.pc += 1;
        state.opcode = opcode;

        // the dynamic gas function sees the state as it was before the handler runs
        let dynamic = match info.dynamic_gas() {
            Some(dynamic_gas) => dynamic_gas(state)?,
            None => DynamicGas::default(),
        };
        let gas = info.constant_gas().checked_add(dynamic.gas).ok_or(Error::OutOfGas)?;
        state.use_gas(gas)?;
        if let Some(memory_cost) = dynamic.memory_cost {
            state.highest_memory_cost = memory_cost;
        }

        #[cfg(feature = "step-tracing")]
        trace!(
            pc,
            opcode = info.name(),
            gas,
            stack_size = state.stack.size(),
            mem_size = state.memory.byte_len(),
            "executing opcode"
        );

        (info.handler())(state)
    }
}
