//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`program`]: program listing with the current command highlighted
//! - [`frames`]: frame stack with each frame's bindings and static link
//! - [`heap`]: occupied heap cells
//! - [`terminal`]: captured `show` output
//! - [`status`]: status bar with keybindings and history position
//!
//! Each pane module exports a `render_*` function and, where the pane
//! scrolls, a scroll state owned by [`App`](crate::ui::App).

pub mod frames;
pub mod heap;
pub mod program;
pub mod status;
pub mod terminal;

pub use frames::{render_frames_pane, FramesScrollState};
pub use heap::{render_heap_pane, HeapRenderData, HeapScrollState};
pub use program::{render_program_pane, ProgramScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use terminal::render_terminal_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style for a pane, brighter when it has focus
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp a scroll offset so the last page stays full
fn clamp_scroll(offset: usize, total_items: usize, visible_height: usize) -> usize {
    offset.min(total_items.saturating_sub(visible_height))
}

#[cfg(test)]
mod tests {
    use super::clamp_scroll;

    #[test]
    fn test_clamp_scroll() {
        assert_eq!(clamp_scroll(usize::MAX, 10, 4), 6);
        assert_eq!(clamp_scroll(3, 10, 4), 3);
        assert_eq!(clamp_scroll(5, 3, 4), 0);
    }
}
