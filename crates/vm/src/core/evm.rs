use crate::core::{
    hardfork::Fork,
    vm::{ExecutionResult, Interpreter, RunState},
};

/// The [`Evm`] is the entry point of the crate: it binds an [`Interpreter`] to the jump table of
/// a [`Fork`] and executes code against it.
#[derive(Clone, Copy, Debug)]
pub struct Evm {
    fork: Fork,
    interpreter: Interpreter,
}

impl Default for Evm {
    fn default() -> Self {
        Self::new(Fork::default())
    }
}

impl Evm {
    /// Creates an [`Evm`] running the instruction set of `fork`.
    pub fn new(fork: Fork) -> Self {
        Self { fork, interpreter: Interpreter::new(fork.jump_table()) }
    }

    /// Returns the fork this [`Evm`] runs.
    pub fn fork(&self) -> Fork {
        self.fork
    }

    /// Executes `code` with at most `gas_limit` gas.
    ///
    /// ```
    /// use lunar_vm::core::{evm::Evm, hardfork::Fork};
    ///
    /// let evm = Evm::new(Fork::Moon);
    ///
    /// // PUSH1 0x01
    /// let result = evm.execute(&[0x60, 0x01], u64::MAX);
    /// assert!(result.is_success());
    /// assert_eq!(result.gas_used, 3);
    /// assert_eq!(result.gas_refund, u64::MAX - 3);
    /// ```
    pub fn execute(&self, code: &[u8], gas_limit: u64) -> ExecutionResult {
        self.interpreter.run(code.to_vec(), gas_limit)
    }

    /// Executes `code` like [`Evm::execute`], also returning the final [`RunState`].
    pub fn execute_with_state(&self, code: &[u8], gas_limit: u64) -> (ExecutionResult, RunState) {
        self.interpreter.run_with_state(code.to_vec(), gas_limit)
    }
}
