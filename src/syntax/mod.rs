//! Program representation
//!
//! Programs are supplied as abstract syntax trees; there is no concrete
//! syntax or parser.
//! - [`ast`]: expression, command and declaration nodes plus builders
//! - [`listing`]: pretty-printed listing with a command → line index
//! - [`programs`]: bundled demo programs

pub mod ast;
pub mod listing;
pub mod programs;
