use crate::{
    core::{memory::Memory, stack::Stack},
    error::Error,
};

/// [`RunState`] is the mutable context of a single run. It is created when a run starts, owned
/// by that run alone, and handed back to the caller once the run halts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunState {
    /// The code being executed.
    pub code: Vec<u8>,

    /// The offset of the next byte to fetch from `code`.
    pub pc: usize,

    /// The opcode currently executing.
    pub opcode: u8,

    /// The operand stack.
    pub stack: Stack,

    /// The run's memory.
    pub memory: Memory,

    /// The amount of gas left to spend.
    pub gas_remaining: u64,

    /// The amount of gas spent so far.
    pub gas_used: u64,

    /// The highest total memory cost billed so far. Memory growth is only charged for the part
    /// of its cost above this watermark.
    pub highest_memory_cost: u64,
}

impl RunState {
    /// Creates the state of a fresh run over `code` with `gas_limit` gas to spend.
    ///
    /// ```
    /// use lunar_vm::core::vm::RunState;
    ///
    /// let state = RunState::new(vec![0x60, 0x01], 100);
    /// assert_eq!(state.pc, 0);
    /// assert_eq!(state.gas_remaining, 100);
    /// assert!(state.stack.is_empty());
    /// ```
    pub fn new(code: Vec<u8>, gas_limit: u64) -> Self {
        Self {
            code,
            pc: 0,
            opcode: 0,
            stack: Stack::new(),
            memory: Memory::new(),
            gas_remaining: gas_limit,
            gas_used: 0,
            highest_memory_cost: 0,
        }
    }

    /// Charges `gas` against the remaining gas.
    ///
    /// Nothing is deducted if the charge exceeds what is left.
    ///
    /// ```
    /// use lunar_vm::{core::vm::RunState, Error};
    ///
    /// let mut state = RunState::new(Vec::new(), 10);
    /// assert_eq!(state.use_gas(4), Ok(()));
    /// assert_eq!(state.use_gas(7), Err(Error::OutOfGas));
    /// assert_eq!((state.gas_used, state.gas_remaining), (4, 6));
    /// ```
    pub fn use_gas(&mut self, gas: u64) -> Result<(), Error> {
        if gas > self.gas_remaining {
            return Err(Error::OutOfGas);
        }

        self.gas_remaining -= gas;
        self.gas_used += gas;
        Ok(())
    }

    /// Borrows the `n` code bytes following the program counter, without moving it.
    ///
    /// Fails with [`Error::NotEnoughBytesToRead`] for the current opcode if the code ends first.
    pub fn next_bytes(&self, n: usize) -> Result<&[u8], Error> {
        self.pc
            .checked_add(n)
            .and_then(|end| self.code.get(self.pc..end))
            .ok_or(Error::NotEnoughBytesToRead(self.opcode))
    }

    /// Returns `true` once the program counter has run past the end of the code.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.pc >= self.code.len()
    }
}
