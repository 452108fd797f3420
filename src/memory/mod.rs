//! Memory model for the interpreter
//!
//! This module provides the core memory abstractions:
//! - [`value`]: the four value domains (expressible, denotable, storable,
//!   heapable) and the conversions between them
//! - [`env`]: per-frame name bindings with shadowing
//! - [`store`]: per-frame append-only slot storage
//! - [`stack`]: the frame stack with static links
//! - [`heap`]: fixed-capacity heap with a free list
//!
//! # Variables and Pointers
//!
//! A variable is a name bound to a [`value::Location`], which is a slot in
//! some frame's store. A pointer variable is a slot holding
//! [`value::Sval::Pointer`], an index into the heap. Stack slots go away when
//! their frame is popped. Heap cells go away only when freed explicitly.

pub mod env;
pub mod heap;
pub mod stack;
pub mod store;
pub mod value;
