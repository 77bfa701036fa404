/// Constants used throughout the VM implementation
pub mod constants;

/// The [`evm::Evm`] facade, executing code against a fork
pub mod evm;

/// Dynamic gas functions
pub mod gas;

/// Fork identifiers and their jump tables
pub mod hardfork;

/// Memory implementation for VM memory management
pub mod memory;

/// Opcode definitions and jump tables
pub mod opcodes;

/// Stack implementation for the VM
pub mod stack;

/// Word arithmetic and hashing primitives
pub mod types;

/// Execution state, opcode handlers and the interpreter loop
pub mod vm;
