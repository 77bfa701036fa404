//! The execution engine.
//!
//! This module provides the per-run [`RunState`], the [`Interpreter`] dispatch loop driving it,
//! and the [`ExecutionResult`] summarizing a finished run.

mod execution;
mod interpreter;
mod state;

/// Opcode handlers organized by category.
pub mod handlers;

pub use execution::ExecutionResult;
pub use handlers::HandlerFn;
pub use interpreter::Interpreter;
pub use state::RunState;
