// Execution engine for the interpreter

use crate::interpreter::config::InterpreterConfig;
use crate::interpreter::constants::{STACK_GROWTH, STACK_RED_ZONE};
use crate::interpreter::errors::{InterpreterError, Result};
use crate::memory::{
    heap::Heap,
    stack::{Frame, FrameStack},
    value::{Eval, FrameIndex},
};
use crate::snapshot::{MockTerminal, Snapshot, SnapshotManager};
use crate::syntax::ast::Com;
use crate::syntax::listing::NodeKey;
use std::rc::Rc;
use tracing::{debug, warn};

/// Run `command` with default settings, printing each `Show` value to stdout.
///
/// Builds an empty frame stack and an empty heap, executes the command once
/// without pushing a frame for it, and releases everything on return. The
/// top-level command is normally a `Block`, which pushes its own frame.
pub fn interpret(command: Com) -> Result<()> {
    Interpreter::new(command, InterpreterConfig::default().with_echo()).run()
}

/// Grow the native stack if needed before running a recursive step
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, f)
}

/// The interpreter that executes a program
pub struct Interpreter {
    /// Program being executed; shared so commands can be borrowed while `self` mutates
    program: Rc<Com>,

    config: InterpreterConfig,

    /// Frame stack (environments, stores, static links)
    pub(crate) stack: FrameStack,

    /// Heap of user-managed cells
    pub(crate) heap: Heap,

    /// Captured `Show` output
    pub(crate) terminal: MockTerminal,

    /// Command currently executing
    current: Option<NodeKey>,

    /// Snapshot history; `None` when history is disabled
    snapshot_manager: Option<SnapshotManager>,

    /// Current position in execution history
    history_position: usize,

    /// Failure that ended the last run, if any
    error: Option<InterpreterError>,
}

impl Interpreter {
    pub fn new(program: Com, config: InterpreterConfig) -> Self {
        let snapshot_manager = config.snapshot_limit.map(SnapshotManager::new);
        Interpreter {
            program: Rc::new(program),
            heap: Heap::new(config.heap_size),
            config,
            stack: FrameStack::new(),
            terminal: MockTerminal::new(),
            current: None,
            snapshot_manager,
            history_position: 0,
            error: None,
        }
    }

    /// Run the program from start to finish.
    ///
    /// Every run starts from an empty stack, heap, terminal and history, so
    /// the same interpreter can be run again.
    pub fn run(&mut self) -> Result<()> {
        self.reset();
        let program = Rc::clone(&self.program);
        let result = self.exec_command(&program);
        self.current = None;

        match result {
            Ok(()) => {
                debug_assert!(self.stack.is_empty(), "frames leaked past the top-level command");
                debug!(
                    lines = self.terminal.len(),
                    heap_in_use = self.heap.allocated_count(),
                    "run finished"
                );
                self.take_snapshot()
            }
            Err(e) => {
                warn!(error = %e, "run failed");
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Return to the state `new` builds: no frames, an empty heap and no history
    fn reset(&mut self) {
        self.stack = FrameStack::new();
        self.heap = Heap::new(self.config.heap_size);
        self.terminal = MockTerminal::new();
        self.current = None;
        self.snapshot_manager = self.config.snapshot_limit.map(SnapshotManager::new);
        self.history_position = 0;
        self.error = None;
    }

    /// Push `frame`, run `body` in it, then pop back to the previous depth.
    ///
    /// The stack is restored whether `body` succeeds or fails, so an error
    /// propagating out of a block or call never leaves its frame behind.
    pub(crate) fn with_frame<R>(
        &mut self,
        frame: Frame,
        body: impl FnOnce(&mut Self, FrameIndex) -> Result<R>,
    ) -> Result<R> {
        let saved_depth = self.stack.depth();
        if saved_depth >= self.config.max_depth {
            return Err(InterpreterError::RecursionLimit {
                limit: self.config.max_depth,
            });
        }

        let static_link = frame.static_link;
        let index = self.stack.push(frame);
        debug!(frame = index, ?static_link, "push frame");

        let result = ensure_sufficient_stack(|| body(self, index));

        self.stack.truncate(saved_depth);
        debug!(frame = index, ok = result.is_ok(), "pop frame");
        result
    }

    /// Emit a value as one line of output
    pub(crate) fn emit(&mut self, value: Eval) {
        let text = value.to_string();
        if self.config.echo_output {
            println!("{}", text);
        }
        self.terminal.print_line(text);
    }

    /// Mark the command keyed `key` as about to execute and record a snapshot
    pub(crate) fn enter_command(&mut self, key: NodeKey) -> Result<()> {
        self.current = Some(key);
        self.take_snapshot()
    }

    /// Take a snapshot of the current execution state
    fn take_snapshot(&mut self) -> Result<()> {
        let Some(manager) = self.snapshot_manager.as_mut() else {
            return Ok(());
        };

        manager.push(Snapshot {
            stack: self.stack.clone(),
            heap: self.heap.clone(),
            terminal: self.terminal.clone(),
            current: self.current,
        })?;

        self.history_position = manager.len() - 1;
        Ok(())
    }

    /// Restore execution state from a snapshot
    fn restore_snapshot(&mut self, index: usize) -> bool {
        let Some(snapshot) = self.snapshot_manager.as_ref().and_then(|m| m.get(index)) else {
            return false;
        };

        self.stack = snapshot.stack.clone();
        self.heap = snapshot.heap.clone();
        self.terminal = snapshot.terminal.clone();
        self.current = snapshot.current;
        self.history_position = index;
        true
    }

    /// Step backward in history; false at the first snapshot
    pub fn step_backward(&mut self) -> bool {
        self.history_position > 0 && self.restore_snapshot(self.history_position - 1)
    }

    /// Step forward in history; false at the last snapshot
    pub fn step_forward(&mut self) -> bool {
        self.restore_snapshot(self.history_position + 1)
    }

    pub fn rewind_to_start(&mut self) -> bool {
        self.restore_snapshot(0)
    }

    pub fn jump_to_end(&mut self) -> bool {
        self.total_snapshots()
            .checked_sub(1)
            .is_some_and(|last| self.restore_snapshot(last))
    }

    // ========== Getter methods ==========

    pub fn program(&self) -> &Com {
        &self.program
    }

    pub fn stack(&self) -> &FrameStack {
        &self.stack
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn terminal(&self) -> &MockTerminal {
        &self.terminal
    }

    /// Command about to execute at the current history position
    pub fn current_command(&self) -> Option<NodeKey> {
        self.current
    }

    pub fn error(&self) -> Option<&InterpreterError> {
        self.error.as_ref()
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.as_ref().map_or(0, SnapshotManager::len)
    }

    /// Bytes held by recorded snapshots and the configured cap
    pub fn snapshot_memory(&self) -> Option<(usize, usize)> {
        self.snapshot_manager
            .as_ref()
            .map(|m| (m.memory_usage(), m.memory_limit()))
    }

    pub fn is_at_end(&self) -> bool {
        self.history_position + 1 >= self.total_snapshots()
    }
}
