//! Heap pane rendering
//!
//! Lists occupied cells in index order with their values. The title shows
//! how many of the heap's cells are in use. A cell named by an invalid heap
//! access is highlighted in the error color.

use super::border_style;
use crate::memory::heap::Heap;
use crate::memory::value::HeapIndex;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the heap pane
#[derive(Debug, Default)]
pub struct HeapScrollState {
    pub offset: usize,
}

/// Data needed to render the heap pane
pub struct HeapRenderData<'a> {
    pub heap: &'a Heap,
    pub error_cell: Option<HeapIndex>,
}

/// Render the heap pane
pub fn render_heap_pane(
    frame: &mut Frame,
    area: Rect,
    data: HeapRenderData,
    is_focused: bool,
    scroll_state: &mut HeapScrollState,
) {
    let block = Block::default()
        .title(format!(
            " Heap ({}/{} cells) ",
            data.heap.allocated_count(),
            data.heap.capacity()
        ))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let mut all_items: Vec<ListItem> = data
        .heap
        .cells()
        .map(|(index, value)| {
            let index_style = if Some(index) == data.error_cell {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.pointer)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{:>4}]", index), index_style),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
            ]))
        })
        .collect();

    if all_items.is_empty() {
        all_items.push(
            ListItem::new("(no allocations)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
    }

    // A freed cell that was accessed again is no longer listed above
    if let Some(cell) = data.error_cell.filter(|c| !data.heap.is_allocated(*c)) {
        all_items.push(ListItem::new(Line::from(vec![
            Span::styled(
                format!("[{:>4}]", cell),
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" invalid access", Style::default().fg(DEFAULT_THEME.error)),
        ])));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    scroll_state.offset = super::clamp_scroll(scroll_state.offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
