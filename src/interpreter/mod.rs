//! Interpreter for the block-structured imperative language
//!
//! This module provides the core execution logic:
//! - [`engine`]: the [`Interpreter`] state, frame scoping and history
//! - [`expressions`]: side-effect-free expression evaluation
//! - [`statements`]: command dispatch, assignment, `if`, blocks and `show`
//! - [`loops`]: `while`
//! - [`procedures`]: closures and calls
//! - [`pointers`]: heap allocation, update and release
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! The interpreter walks the command tree directly. Before each command runs
//! it is marked current and, when history is enabled, a snapshot of the frame
//! stack, heap and output is recorded so a finished run can be replayed step
//! by step.

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod expressions;
pub mod loops;
pub mod pointers;
pub mod procedures;
pub mod statements;

pub use engine::Interpreter;
