//! Main TUI application state and logic

use crate::interpreter::engine::Interpreter;
use crate::syntax::listing::Listing;
use crate::ui::panes::{
    self, FramesScrollState, HeapRenderData, HeapScrollState, ProgramScrollState,
    StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Program,
    Output,
    Frames,
    Heap,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: program -> output -> frames -> heap)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Program => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Frames,
            FocusedPane::Frames => FocusedPane::Heap,
            FocusedPane::Heap => FocusedPane::Program,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Program => FocusedPane::Heap,
            FocusedPane::Output => FocusedPane::Program,
            FocusedPane::Frames => FocusedPane::Output,
            FocusedPane::Heap => FocusedPane::Frames,
        }
    }
}

/// The main application state
pub struct App {
    /// Interpreter holding a recorded run
    pub interpreter: Interpreter,

    /// Pretty-printed program, keyed by command node
    pub listing: Listing,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub program_scroll: ProgramScrollState,
    pub frames_scroll: FramesScrollState,
    pub heap_scroll: HeapScrollState,
    pub terminal_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create an app over an interpreter whose run has already been recorded
    pub fn new(interpreter: Interpreter) -> Self {
        let listing = Listing::new(interpreter.program());
        let now = Instant::now();
        App {
            interpreter,
            listing,
            focused_pane: FocusedPane::Program,
            program_scroll: ProgramScrollState::default(),
            frames_scroll: FramesScrollState::default(),
            heap_scroll: HeapScrollState::default(),
            terminal_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: now,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.interpreter.step_forward() {
                    self.status_message = "Playing...".to_string();
                    self.terminal_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The run failed and the viewer is showing its final state
    fn showing_error(&self) -> bool {
        self.interpreter.error().is_some() && self.interpreter.is_at_end()
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Program (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Frames (top) | Heap (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        let is_error = self.showing_error();
        let current_line = self
            .interpreter
            .current_command()
            .and_then(|key| self.listing.line_of(key));

        panes::render_program_pane(
            frame,
            left_rows[0],
            &self.listing,
            current_line,
            is_error,
            self.focused_pane == FocusedPane::Program,
            &mut self.program_scroll,
        );

        panes::render_terminal_pane(
            frame,
            left_rows[1],
            self.interpreter.terminal(),
            self.focused_pane == FocusedPane::Output,
            &mut self.terminal_scroll,
        );

        panes::render_frames_pane(
            frame,
            right_rows[0],
            self.interpreter.stack(),
            self.focused_pane == FocusedPane::Frames,
            &mut self.frames_scroll,
        );

        panes::render_heap_pane(
            frame,
            right_rows[1],
            HeapRenderData {
                heap: self.interpreter.heap(),
                error_cell: self
                    .interpreter
                    .error()
                    .filter(|_| is_error)
                    .and_then(|e| e.heap_index()),
            },
            self.focused_pane == FocusedPane::Heap,
            &mut self.heap_scroll,
        );

        let error_message;
        let message = match self.interpreter.error() {
            Some(error) if is_error => {
                error_message = format!("Runtime error: {}", error);
                error_message.as_str()
            }
            _ => self.status_message.as_str(),
        };

        panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message,
                current_step: self.interpreter.history_position(),
                total_steps: self.interpreter.total_snapshots(),
                is_error,
                is_playing: self.is_playing,
                snapshot_memory: self.interpreter.snapshot_memory(),
            },
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c as usize - '0' as usize;
                let stepped = (0..n).take_while(|_| self.interpreter.step_forward()).count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Program => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.program_scroll.target_line_row {
                        self.program_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Frames => {
                    self.frames_scroll.offset = self.frames_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Heap => {
                    self.heap_scroll.offset = self.heap_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.terminal_scroll = self.terminal_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Program => {
                    if let Some(row) = self.program_scroll.target_line_row {
                        self.program_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Frames => {
                    self.frames_scroll.offset = self.frames_scroll.offset.saturating_add(1);
                }
                FocusedPane::Heap => {
                    self.heap_scroll.offset = self.heap_scroll.offset.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.terminal_scroll = self.terminal_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        let now = Instant::now();
                        self.last_play_time =
                            now.checked_sub(Duration::from_secs(1)).unwrap_or(now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.interpreter.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.interpreter.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.terminal_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    fn step_forward(&mut self) {
        if self.interpreter.step_forward() {
            self.status_message = "Stepped forward".to_string();
            self.terminal_scroll = usize::MAX;
        } else {
            self.status_message = "Cannot step forward: at end of history".to_string();
        }
    }

    fn step_backward(&mut self) {
        if self.interpreter.step_backward() {
            self.status_message = "Stepped backward".to_string();
            self.terminal_scroll = usize::MAX;
        } else {
            self.status_message = "Cannot step backward: at start of history".to_string();
        }
    }
}
