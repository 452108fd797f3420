//! Runtime error types for the interpreter
//!
//! This module defines [`InterpreterError`], which represents every way a run
//! can fail. The memory model ([`Store`], [`Heap`], [`FrameStack`]) returns the
//! same type, so failures propagate with `?` from the point of detection up to
//! [`interpret`](crate::interpret).
//!
//! All errors are fatal: a run stops at the first failure and nothing is
//! retried.
//!
//! [`Store`]: crate::memory::store::Store
//! [`Heap`]: crate::memory::heap::Heap
//! [`FrameStack`]: crate::memory::stack::FrameStack

use thiserror::Error;

/// Runtime errors that can occur during interpretation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpreterError {
    /// Identifier unresolved through the whole static-link chain
    #[error("Name '{name}' not found")]
    NameNotFound { name: String },

    /// Identifier is bound, but not to a variable
    #[error("Identifier '{name}' is not bound to a variable")]
    NotAVariable { name: String },

    /// Identifier is bound, but not to a procedure
    #[error("Identifier '{name}' is not callable")]
    NotCallable { name: String },

    /// Operator or condition applied to the wrong kind of value
    #[error("Type error in {context}: expected {expected}, got {got}")]
    TypeError {
        context: String,
        expected: String,
        got: String,
    },

    /// Dereference, update or destroy on a slot that does not hold a pointer
    #[error("Variable '{name}' does not contain a pointer")]
    NotAPointer { name: String },

    /// Pointer read as if it were a plain value
    #[error("Variable '{name}' contains a pointer; pointers are not expressible")]
    PointerNotExpressible { name: String },

    /// Store index past the end of a frame's store
    #[error("Store location {index} out of bounds (store holds {len} slots)")]
    OutOfBounds { index: usize, len: usize },

    /// Heap index out of range or not currently allocated
    #[error("Invalid heap access at cell {index}")]
    InvalidHeapAccess { index: usize },

    /// No free heap cell left
    #[error("Heap overflow: all {capacity} cells are allocated")]
    HeapOverflow { capacity: usize },

    /// Value has no representation in the target value domain
    #[error("Cannot convert {value} to a {target} value")]
    ConversionError { value: String, target: &'static str },

    /// Malformed or unsupported AST shape
    #[error("Unknown node: {description}")]
    UnknownNode { description: String },

    /// Checked integer arithmetic overflowed
    #[error("Integer overflow in operation: {operation}")]
    IntegerOverflow { operation: String },

    /// Call with the wrong number of actual parameters
    #[error("Procedure '{procedure}' expects {expected} argument{}, got {got}", plural(.expected))]
    ArgumentCountMismatch {
        procedure: String,
        expected: usize,
        got: usize,
    },

    /// Command needs a current frame but none has been pushed
    #[error("No active frame for '{command}'")]
    NoActiveFrame { command: String },

    /// Block/call nesting deeper than the configured limit
    #[error("Recursion limit of {limit} nested frames exceeded")]
    RecursionLimit { limit: usize },

    /// Snapshot history grew past its memory limit
    #[error("Snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

/// Fieldless classification of an [`InterpreterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NameNotFound,
    NotAVariable,
    NotCallable,
    TypeError,
    NotAPointer,
    PointerNotExpressible,
    OutOfBounds,
    InvalidHeapAccess,
    HeapOverflow,
    ConversionError,
    UnknownNode,
    IntegerOverflow,
    ArgumentCountMismatch,
    NoActiveFrame,
    RecursionLimit,
    SnapshotLimitExceeded,
}

impl InterpreterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpreterError::NameNotFound { .. } => ErrorKind::NameNotFound,
            InterpreterError::NotAVariable { .. } => ErrorKind::NotAVariable,
            InterpreterError::NotCallable { .. } => ErrorKind::NotCallable,
            InterpreterError::TypeError { .. } => ErrorKind::TypeError,
            InterpreterError::NotAPointer { .. } => ErrorKind::NotAPointer,
            InterpreterError::PointerNotExpressible { .. } => ErrorKind::PointerNotExpressible,
            InterpreterError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            InterpreterError::InvalidHeapAccess { .. } => ErrorKind::InvalidHeapAccess,
            InterpreterError::HeapOverflow { .. } => ErrorKind::HeapOverflow,
            InterpreterError::ConversionError { .. } => ErrorKind::ConversionError,
            InterpreterError::UnknownNode { .. } => ErrorKind::UnknownNode,
            InterpreterError::IntegerOverflow { .. } => ErrorKind::IntegerOverflow,
            InterpreterError::ArgumentCountMismatch { .. } => ErrorKind::ArgumentCountMismatch,
            InterpreterError::NoActiveFrame { .. } => ErrorKind::NoActiveFrame,
            InterpreterError::RecursionLimit { .. } => ErrorKind::RecursionLimit,
            InterpreterError::SnapshotLimitExceeded { .. } => ErrorKind::SnapshotLimitExceeded,
        }
    }

    /// Heap cell involved in the failure, if any (highlighted by the viewer)
    pub fn heap_index(&self) -> Option<usize> {
        match self {
            InterpreterError::InvalidHeapAccess { index } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn type_error(context: &str, expected: &str, got: impl std::fmt::Debug) -> Self {
        InterpreterError::TypeError {
            context: context.to_string(),
            expected: expected.to_string(),
            got: format!("{:?}", got),
        }
    }
}

/// Result alias used throughout the interpreter and memory model
pub type Result<T, E = InterpreterError> = std::result::Result<T, E>;
