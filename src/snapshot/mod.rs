// Output capture and snapshot history for stepping through a run

use crate::interpreter::errors::InterpreterError;
use crate::memory::{heap::Heap, stack::FrameStack, value::Hval};
use crate::syntax::listing::NodeKey;
use std::mem::size_of;

/// Mock terminal capturing `Show` output, one value per line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockTerminal {
    lines: Vec<String>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { lines: Vec::new() }
    }

    pub fn print_line(&mut self, text: String) {
        self.lines.push(text);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Snapshot of execution state, taken before a command runs
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub stack: FrameStack,
    pub heap: Heap,
    pub terminal: MockTerminal,
    /// Command about to execute; `None` once the run has ended
    pub current: Option<NodeKey>,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough: fixed overhead per frame plus its bindings and slots
        let stack_size: usize = self
            .stack
            .frames()
            .iter()
            .map(|f| 64 + f.env.len() * 48 + f.store.len() * 16)
            .sum();

        let heap_size = self.heap.capacity() * size_of::<Option<Hval>>();

        let terminal_size: usize = self.terminal.lines().iter().map(|l| l.len() + 24).sum();

        stack_size + heap_size + terminal_size
    }
}

/// Manages execution history for stepping backward and forward
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), InterpreterError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(InterpreterError::SnapshotLimitExceeded {
                current: self.current_memory + snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
