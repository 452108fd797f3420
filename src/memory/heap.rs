//! Heap implementation for the interpreter
//!
//! This module provides a fixed-capacity heap for user-managed pointers:
//! - Explicit allocation and deallocation (`NewPointer` / `DestroyPointer`)
//! - A free list of available cells; the most recently freed cell is reused first
//! - Use-after-free and double-free detection
//!
//! There is no garbage collection. A cell stays allocated until it is freed
//! explicitly, even if no variable refers to it any more.

use super::value::{HeapIndex, Hval};
use crate::interpreter::constants::{DEFAULT_HEAP_SIZE, MAX_HEAP_SIZE};
use crate::interpreter::errors::{InterpreterError, Result};

/// The heap
#[derive(Debug, Clone, PartialEq)]
pub struct Heap {
    cells: Vec<Option<Hval>>,
    free_cells: Vec<HeapIndex>,
}

impl Heap {
    /// Create a heap with `capacity` empty cells, at most `MAX_HEAP_SIZE`
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_HEAP_SIZE);
        Heap {
            cells: vec![None; capacity],
            free_cells: (0..capacity).collect(),
        }
    }

    /// Place `value` in a free cell and return its index
    pub fn alloc(&mut self, value: Hval) -> Result<HeapIndex> {
        let index = self.free_cells.pop().ok_or(InterpreterError::HeapOverflow {
            capacity: self.cells.len(),
        })?;
        self.cells[index] = Some(value);
        Ok(index)
    }

    /// Release a cell back to the free list
    pub fn free(&mut self, index: HeapIndex) -> Result<()> {
        match self.cells.get_mut(index) {
            Some(cell @ Some(_)) => {
                *cell = None;
                self.free_cells.push(index);
                Ok(())
            }
            _ => Err(InterpreterError::InvalidHeapAccess { index }),
        }
    }

    pub fn read(&self, index: HeapIndex) -> Result<Hval> {
        match self.cells.get(index) {
            Some(Some(value)) => Ok(*value),
            _ => Err(InterpreterError::InvalidHeapAccess { index }),
        }
    }

    pub fn write(&mut self, index: HeapIndex, value: Hval) -> Result<()> {
        match self.cells.get_mut(index) {
            Some(Some(cell)) => {
                *cell = value;
                Ok(())
            }
            _ => Err(InterpreterError::InvalidHeapAccess { index }),
        }
    }

    pub fn is_allocated(&self, index: HeapIndex) -> bool {
        matches!(self.cells.get(index), Some(Some(_)))
    }

    /// Occupied cells in index order (for UI display)
    pub fn cells(&self) -> impl Iterator<Item = (HeapIndex, Hval)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, cell)| cell.map(|v| (i, v)))
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn allocated_count(&self) -> usize {
        self.cells.len() - self.free_cells.len()
    }

    pub fn free_count(&self) -> usize {
        self.free_cells.len()
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new(DEFAULT_HEAP_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::errors::ErrorKind;

    #[test]
    fn test_alloc_read_write() {
        let mut heap = Heap::new(4);
        let i = heap.alloc(Hval::Int(10)).unwrap();
        assert_eq!(heap.read(i), Ok(Hval::Int(10)));
        heap.write(i, Hval::Bool(true)).unwrap();
        assert_eq!(heap.read(i), Ok(Hval::Bool(true)));
        assert_eq!(heap.allocated_count(), 1);
    }

    #[test]
    fn test_first_allocation_takes_last_cell() {
        let mut heap = Heap::new(100);
        assert_eq!(heap.alloc(Hval::Int(0)), Ok(99));
        assert_eq!(heap.alloc(Hval::Int(0)), Ok(98));
    }

    #[test]
    fn test_oversized_heap_is_capped() {
        let heap = Heap::new(usize::MAX / 2);
        assert_eq!(heap.capacity(), MAX_HEAP_SIZE);
        assert_eq!(heap.free_count(), MAX_HEAP_SIZE);
    }

    #[test]
    fn test_overflow_then_reuse_freed_cell() {
        let mut heap = Heap::new(2);
        let a = heap.alloc(Hval::Int(1)).unwrap();
        heap.alloc(Hval::Int(2)).unwrap();
        assert_eq!(
            heap.alloc(Hval::Int(3)).unwrap_err(),
            InterpreterError::HeapOverflow { capacity: 2 }
        );

        heap.free(a).unwrap();
        assert_eq!(heap.alloc(Hval::Int(4)), Ok(a));
        assert_eq!(heap.read(a), Ok(Hval::Int(4)));
    }

    #[test]
    fn test_use_after_free_and_double_free() {
        let mut heap = Heap::new(3);
        let i = heap.alloc(Hval::Int(1)).unwrap();
        heap.free(i).unwrap();

        assert_eq!(heap.read(i).unwrap_err().kind(), ErrorKind::InvalidHeapAccess);
        assert_eq!(
            heap.write(i, Hval::Int(2)).unwrap_err().kind(),
            ErrorKind::InvalidHeapAccess
        );
        assert_eq!(heap.free(i).unwrap_err().kind(), ErrorKind::InvalidHeapAccess);
        assert!(!heap.is_allocated(i));
    }

    #[test]
    fn test_out_of_range_index() {
        let mut heap = Heap::new(3);
        assert_eq!(
            heap.read(3).unwrap_err(),
            InterpreterError::InvalidHeapAccess { index: 3 }
        );
        assert!(heap.free(10).is_err());
    }

    #[test]
    fn test_cells_iterates_occupied_in_order() {
        let mut heap = Heap::new(3);
        heap.alloc(Hval::Int(7)).unwrap(); // cell 2
        heap.alloc(Hval::Bool(false)).unwrap(); // cell 1
        let cells: Vec<_> = heap.cells().collect();
        assert_eq!(cells, vec![(1, Hval::Bool(false)), (2, Hval::Int(7))]);
        assert_eq!(heap.free_count(), 1);
    }
}
