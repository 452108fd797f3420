//! Runtime value domains
//!
//! The language separates values by where they may live:
//!
//! - [`Eval`] (expressible): the result of evaluating an expression
//! - [`Dval`] (denotable): what an identifier is bound to in an environment
//! - [`Sval`] (storable): what a store slot holds
//! - [`Hval`] (heapable): what a heap cell holds
//!
//! Conversions between compatible pairs are `From` impls when they cannot
//! fail and `TryFrom` impls when some source variant has no counterpart
//! (a pointer is not expressible, a location is not storable, and so on).
//! Failed conversions report [`InterpreterError::ConversionError`].

use crate::interpreter::errors::InterpreterError;
use crate::syntax::ast::{Com, Ide};
use std::fmt;
use std::rc::Rc;

/// Index of a frame in the frame stack arena
pub type FrameIndex = usize;

/// Index of a slot within one frame's store
pub type StoreIndex = usize;

/// Index of a heap cell
pub type HeapIndex = usize;

/// Expressible values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eval {
    Int(i64),
    Bool(bool),
}

/// Storable values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sval {
    Int(i64),
    Bool(bool),
    Pointer(HeapIndex),
}

/// Heapable values (no pointer-to-pointer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hval {
    Int(i64),
    Bool(bool),
}

/// A variable's storage cell: a slot in a specific frame's store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub store_index: StoreIndex,
    pub frame_index: FrameIndex,
}

/// A procedure bundled with the frame that was current at its declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Closure {
    pub params: Rc<[Ide]>,
    pub body: Rc<[Com]>,
    pub defining_frame: FrameIndex,
}

/// Denotable values
#[derive(Debug, Clone, PartialEq)]
pub enum Dval {
    Int(i64),
    Bool(bool),
    Location(Location),
    Procedure(Closure),
}

impl Sval {
    pub fn as_pointer(&self) -> Option<HeapIndex> {
        match self {
            Sval::Pointer(index) => Some(*index),
            _ => None,
        }
    }
}

impl Dval {
    pub fn as_location(&self) -> Option<Location> {
        match self {
            Dval::Location(loc) => Some(*loc),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Dval::Int(_) => "int",
            Dval::Bool(_) => "bool",
            Dval::Location(_) => "location",
            Dval::Procedure(_) => "procedure",
        }
    }
}

fn conversion_error(value: impl fmt::Display, target: &'static str) -> InterpreterError {
    InterpreterError::ConversionError {
        value: value.to_string(),
        target,
    }
}

// ========== Expressible <-> storable ==========

impl From<Eval> for Sval {
    fn from(v: Eval) -> Self {
        match v {
            Eval::Int(n) => Sval::Int(n),
            Eval::Bool(b) => Sval::Bool(b),
        }
    }
}

impl TryFrom<Sval> for Eval {
    type Error = InterpreterError;

    fn try_from(v: Sval) -> Result<Self, Self::Error> {
        match v {
            Sval::Int(n) => Ok(Eval::Int(n)),
            Sval::Bool(b) => Ok(Eval::Bool(b)),
            Sval::Pointer(_) => Err(conversion_error(v, "expressible")),
        }
    }
}

// ========== Expressible <-> heapable ==========

impl From<Eval> for Hval {
    fn from(v: Eval) -> Self {
        match v {
            Eval::Int(n) => Hval::Int(n),
            Eval::Bool(b) => Hval::Bool(b),
        }
    }
}

impl From<Hval> for Eval {
    fn from(v: Hval) -> Self {
        match v {
            Hval::Int(n) => Eval::Int(n),
            Hval::Bool(b) => Eval::Bool(b),
        }
    }
}

// ========== Storable <-> heapable ==========

impl TryFrom<Sval> for Hval {
    type Error = InterpreterError;

    fn try_from(v: Sval) -> Result<Self, Self::Error> {
        match v {
            Sval::Int(n) => Ok(Hval::Int(n)),
            Sval::Bool(b) => Ok(Hval::Bool(b)),
            Sval::Pointer(_) => Err(conversion_error(v, "heapable")),
        }
    }
}

impl From<Hval> for Sval {
    fn from(v: Hval) -> Self {
        match v {
            Hval::Int(n) => Sval::Int(n),
            Hval::Bool(b) => Sval::Bool(b),
        }
    }
}

// ========== Denotable -> expressible / storable ==========

impl TryFrom<&Dval> for Eval {
    type Error = InterpreterError;

    fn try_from(v: &Dval) -> Result<Self, Self::Error> {
        match v {
            Dval::Int(n) => Ok(Eval::Int(*n)),
            Dval::Bool(b) => Ok(Eval::Bool(*b)),
            Dval::Location(_) | Dval::Procedure(_) => {
                Err(conversion_error(v.kind_name(), "expressible"))
            }
        }
    }
}

impl TryFrom<&Dval> for Sval {
    type Error = InterpreterError;

    fn try_from(v: &Dval) -> Result<Self, Self::Error> {
        Eval::try_from(v)
            .map(Sval::from)
            .map_err(|_| conversion_error(v.kind_name(), "storable"))
    }
}

impl From<Eval> for Dval {
    fn from(v: Eval) -> Self {
        match v {
            Eval::Int(n) => Dval::Int(n),
            Eval::Bool(b) => Dval::Bool(b),
        }
    }
}

impl fmt::Display for Eval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eval::Int(n) => write!(f, "{}", n),
            Eval::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl fmt::Display for Hval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Eval::from(*self), f)
    }
}

impl fmt::Display for Sval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sval::Int(n) => write!(f, "{}", n),
            Sval::Bool(b) => write!(f, "{}", b),
            Sval::Pointer(index) => write!(f, "ptr→{}", index),
        }
    }
}
