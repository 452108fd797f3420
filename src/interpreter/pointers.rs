//! Heap pointer commands: `new`, `free` and `*x := e`.
//!
//! A pointer variable is an ordinary slot in the current frame holding
//! [`Sval::Pointer`]. Freeing a cell does not clear the slot, so a later
//! dereference through the same variable is caught by the heap as an invalid
//! access.

use crate::interpreter::errors::{InterpreterError, Result};
use crate::interpreter::Interpreter;
use crate::memory::value::{HeapIndex, Hval, Sval};
use crate::syntax::ast::Exp;
use tracing::debug;

impl Interpreter {
    pub(crate) fn new_pointer(&mut self, name: &str, init: &Exp) -> Result<()> {
        let value = Hval::from(self.eval_expr(init)?);
        let index = self
            .stack
            .current_index()
            .ok_or_else(|| InterpreterError::NoActiveFrame {
                command: format!("new {}", name),
            })?;

        let cell = self.heap.alloc(value)?;
        self.stack
            .frame_at_mut(index)
            .declare(index, name, Sval::Pointer(cell));

        debug!(pointer = name, cell, in_use = self.heap.allocated_count(), "alloc");
        Ok(())
    }

    pub(crate) fn destroy_pointer(&mut self, name: &str) -> Result<()> {
        let cell = self.pointer_target(name)?;
        self.heap.free(cell)?;
        debug!(pointer = name, cell, in_use = self.heap.allocated_count(), "free");
        Ok(())
    }

    pub(crate) fn update_pointer(&mut self, name: &str, value: &Exp) -> Result<()> {
        let cell = self.pointer_target(name)?;
        let value = Hval::from(self.eval_expr(value)?);
        self.heap.write(cell, value)
    }

    /// Heap cell referenced by the pointer variable `name`
    fn pointer_target(&self, name: &str) -> Result<HeapIndex> {
        let location = self.stack.resolve_location(name)?;
        self.stack
            .read(location)?
            .as_pointer()
            .ok_or_else(|| InterpreterError::NotAPointer {
                name: name.to_string(),
            })
    }
}
