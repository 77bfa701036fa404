use super::{OpCodeInfo, OPCODE_INFO_TABLE};

/// A fork's view of the opcode space: which bytes are valid instructions, what they cost and how
/// they execute.
///
/// Tables are built at compile time and live in `static`s, so a single instance is shared by
/// every run on every thread.
#[derive(Debug, Clone, Copy)]
pub struct JumpTable {
    entries: [Option<OpCodeInfo>; 256],
}

impl JumpTable {
    /// Creates a jump table from a full opcode map.
    pub const fn new(entries: [Option<OpCodeInfo>; 256]) -> Self {
        Self { entries }
    }

    /// Looks up the info of `opcode`. Returns `None` for invalid opcodes.
    ///
    /// ```
    /// use lunar_vm::core::opcodes::{MOON_INSTRUCTION_SET, ADD};
    ///
    /// assert_eq!(MOON_INSTRUCTION_SET.get(ADD).map(|info| info.name()), Some("ADD"));
    /// assert!(MOON_INSTRUCTION_SET.get(0x09).is_none());
    /// ```
    #[inline]
    pub fn get(&self, opcode: u8) -> Option<&OpCodeInfo> {
        self.entries[opcode as usize].as_ref()
    }
}

/// The instruction set of the Moon fork.
pub static MOON_INSTRUCTION_SET: JumpTable = JumpTable::new(OPCODE_INFO_TABLE);
