//! Lunar EVM interpreter
//!
//! This crate provides a deterministic, gas-metered interpreter for a restricted subset of the
//! Ethereum Virtual Machine instruction set: wrapping arithmetic, memory stores and pushes.
//!
//! ```
//! use lunar_vm::core::{evm::Evm, hardfork::Fork};
//!
//! // PUSH1 0x01, PUSH2 0x0001, ADD
//! let code = [0x60, 0x01, 0x61, 0x00, 0x01, 0x01];
//! let (result, state) = Evm::new(Fork::Moon).execute_with_state(&code, u64::MAX);
//! assert!(result.is_success());
//! assert_eq!(result.gas_used, 9);
//! assert_eq!(state.stack.peek(0).map(|top| top.to::<u64>()), Ok(2));
//! ```

/// Core VM implementation, including memory, stack, gas and opcodes
pub mod core;

/// Error types for the VM
pub mod error;

pub use self::core::{evm::Evm, hardfork::Fork, vm::ExecutionResult};
pub use error::Error;
