//! Interpreter configuration

use super::constants::{DEFAULT_HEAP_SIZE, DEFAULT_MAX_DEPTH};

/// Settings for a single interpreter run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Number of heap cells, capped at [`MAX_HEAP_SIZE`]
    ///
    /// [`MAX_HEAP_SIZE`]: super::constants::MAX_HEAP_SIZE
    pub heap_size: usize,
    /// Maximum nesting of blocks and procedure calls
    pub max_depth: usize,
    /// Also print each `Show` line to stdout as it is produced
    pub echo_output: bool,
    /// Record a snapshot before every command, within this many bytes.
    /// `None` disables history.
    pub snapshot_limit: Option<usize>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        InterpreterConfig {
            heap_size: DEFAULT_HEAP_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            echo_output: false,
            snapshot_limit: None,
        }
    }
}

impl InterpreterConfig {
    pub fn with_heap_size(mut self, heap_size: usize) -> Self {
        self.heap_size = heap_size;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_echo(mut self) -> Self {
        self.echo_output = true;
        self
    }

    pub fn with_history(mut self, limit: usize) -> Self {
        self.snapshot_limit = Some(limit);
        self
    }
}
