//! Per-frame store
//!
//! An append-only sequence of storable values. `alloc` hands out indices in
//! increasing order and never recycles them while the frame lives; `write`
//! replaces a slot's value and may change its tag.

use super::value::{StoreIndex, Sval};
use crate::interpreter::errors::{InterpreterError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    slots: Vec<Sval>,
}

impl Store {
    pub fn new() -> Self {
        Store { slots: Vec::new() }
    }

    pub fn alloc(&mut self, value: Sval) -> StoreIndex {
        self.slots.push(value);
        self.slots.len() - 1
    }

    pub fn read(&self, index: StoreIndex) -> Result<Sval> {
        self.slots
            .get(index)
            .copied()
            .ok_or(InterpreterError::OutOfBounds {
                index,
                len: self.slots.len(),
            })
    }

    pub fn write(&mut self, index: StoreIndex, value: Sval) -> Result<()> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(InterpreterError::OutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    /// All slots in allocation order (for UI display)
    pub fn slots(&self) -> &[Sval] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
