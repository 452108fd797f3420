//! # Introduction
//!
//! blockimp executes programs in a small block-structured imperative language
//! with statically scoped procedures and an explicitly managed heap. Programs
//! are built directly as abstract syntax trees; there is no surface syntax.
//!
//! ## Execution pipeline
//!
//! ```text
//! AST → Interpreter → Output (+ Snapshots → TUI)
//! ```
//!
//! 1. [`syntax`]: the command and expression trees, a pretty-printed
//!    [`syntax::listing::Listing`] and a set of bundled programs.
//! 2. [`interpreter`]: walks the tree, evaluates expressions and executes
//!    commands, optionally recording a [`snapshot::Snapshot`] before each one.
//! 3. [`memory`]: the four value domains, per-frame environments and stores
//!    linked by static links in a [`memory::stack::FrameStack`], and the
//!    fixed-capacity [`memory::heap::Heap`].
//! 4. [`snapshot`]: snapshot history with a memory limit and a
//!    [`snapshot::MockTerminal`] that records `show` output.
//! 5. [`ui`]: ratatui-based viewer for stepping through a recorded run; not
//!    part of the stable library API.
//!
//! ## Language
//!
//! Values: 64-bit integers and booleans. Pointers live only in variables and
//! refer to heap cells.
//! Commands: assignment, `while`, `if/else`, procedure declaration and call,
//! heap `new`/`free`/update, blocks with local declarations, and `show`.
//!
//! ```
//! use blockimp::syntax::ast::{Com, Decl, Exp};
//!
//! let program = Com::block(
//!     vec![Decl::new("x", Exp::int(41))],
//!     vec![Com::show(Exp::plus(Exp::val("x"), Exp::int(1)))],
//! );
//! blockimp::interpret(program).unwrap();
//! ```

pub mod interpreter;
pub mod memory;
pub mod snapshot;
pub mod syntax;
pub mod ui;

pub use interpreter::config::InterpreterConfig;
pub use interpreter::engine::{interpret, Interpreter};
pub use interpreter::errors::{ErrorKind, InterpreterError};
