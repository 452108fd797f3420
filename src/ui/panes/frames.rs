//! Frame stack pane
//!
//! Frames are listed newest first. Each header shows the frame's index and
//! its static link; bindings follow in declaration order with the current
//! contents of their store slots.

use super::border_style;
use crate::memory::stack::{Frame as StackFrame, FrameStack};
use crate::memory::value::{Dval, Sval};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the frames pane
#[derive(Debug, Default)]
pub struct FramesScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

fn binding_value<'a>(stack: &FrameStack, value: &Dval) -> Span<'a> {
    match value {
        Dval::Location(location) => match stack.read(*location) {
            Ok(Sval::Pointer(cell)) => Span::styled(
                format!("ptr→{}", cell),
                Style::default().fg(DEFAULT_THEME.pointer),
            ),
            Ok(value) => Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
            Err(_) => Span::styled("?", Style::default().fg(DEFAULT_THEME.error)),
        },
        Dval::Procedure(closure) => Span::styled(
            format!("proc({})", closure.params.join(", ")),
            Style::default().fg(DEFAULT_THEME.procedure),
        ),
        Dval::Int(n) => Span::styled(n.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        Dval::Bool(b) => Span::styled(b.to_string(), Style::default().fg(DEFAULT_THEME.number)),
    }
}

fn frame_items<'a>(stack: &FrameStack, index: usize, frame: &StackFrame) -> Vec<ListItem<'a>> {
    let link = match frame.static_link {
        Some(parent) => format!("static link → #{}", parent),
        None => "outermost".to_string(),
    };
    let mut items = vec![ListItem::new(Line::from(vec![
        Span::styled(
            format!("#{}", index),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", link), Style::default().fg(DEFAULT_THEME.comment)),
    ]))];

    if frame.env.is_empty() {
        items.push(ListItem::new("  (no bindings)").style(Style::default().fg(DEFAULT_THEME.comment)));
    }
    for binding in frame.env.bindings() {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("  {}", binding.name), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
            binding_value(stack, &binding.value),
        ])));
    }

    items
}

/// Render the frames pane
pub fn render_frames_pane(
    frame: &mut Frame,
    area: Rect,
    stack: &FrameStack,
    is_focused: bool,
    scroll_state: &mut FramesScrollState,
) {
    let block = Block::default()
        .title(format!(" Frames ({}) ", stack.depth()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut all_items = Vec::new();
    if stack.is_empty() {
        all_items.push(ListItem::new("(no frames)").style(Style::default().fg(DEFAULT_THEME.comment)));
    }
    for (index, stack_frame) in stack.frames().iter().enumerate().rev() {
        all_items.extend(frame_items(stack, index, stack_frame));
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Newest frame is on top; jump back there when the stack changes shape
    if total_items != scroll_state.prev_item_count {
        scroll_state.offset = 0;
        scroll_state.prev_item_count = total_items;
    }
    scroll_state.offset = super::clamp_scroll(scroll_state.offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
