use std::{fmt, str::FromStr};

use crate::core::opcodes::{JumpTable, MOON_INSTRUCTION_SET};

/// The instruction set variants the interpreter can run.
///
/// Each fork maps to a jump table deciding which opcodes are valid and what they cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Fork {
    /// Arithmetic, memory stores and pushes.
    #[default]
    Moon = 0,
}

impl Fork {
    /// Every known fork, oldest first.
    pub const ALL: [Fork; 1] = [Fork::Moon];

    /// Returns the jump table of this fork.
    ///
    /// ```
    /// use lunar_vm::core::{hardfork::Fork, opcodes::ADD};
    ///
    /// assert!(Fork::Moon.jump_table().get(ADD).is_some());
    /// ```
    #[inline]
    pub fn jump_table(self) -> &'static JumpTable {
        match self {
            Fork::Moon => &MOON_INSTRUCTION_SET,
        }
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fork::Moon => write!(f, "Moon"),
        }
    }
}

/// Returned when parsing an unknown fork name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fork: {0}")]
pub struct UnknownForkError(pub String);

impl FromStr for Fork {
    type Err = UnknownForkError;

    /// Parses a fork name, ignoring case.
    ///
    /// ```
    /// use lunar_vm::core::hardfork::Fork;
    ///
    /// assert_eq!("moon".parse::<Fork>(), Ok(Fork::Moon));
    /// assert_eq!("MOON".parse::<Fork>(), Ok(Fork::Moon));
    /// assert!("sun".parse::<Fork>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fork::ALL
            .into_iter()
            .find(|fork| fork.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownForkError(s.to_string()))
    }
}
