//! Program listing pane
//!
//! Shows the pretty-printed program with line numbers. The command about to
//! execute is marked with an arrow and a highlighted background, or in the
//! error color when the run failed at that command.

use super::border_style;
use crate::syntax::listing::Listing;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEYWORDS: &[&str] = &[
    "begin", "end", "var", "while", "do", "if", "then", "else", "proc", "call", "new", "free",
    "show",
];

/// Light keyword/literal highlighting for one listing line
fn highlight_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut start = 0;

    for (i, c) in line.char_indices() {
        if c.is_alphanumeric() || c == '_' {
            continue;
        }
        if start < i {
            spans.push(word_span(&line[start..i], c == '('));
        }
        spans.push(Span::styled(
            &line[i..i + c.len_utf8()],
            Style::default().fg(DEFAULT_THEME.fg),
        ));
        start = i + c.len_utf8();
    }
    if start < line.len() {
        spans.push(word_span(&line[start..], false));
    }

    spans
}

fn word_span(word: &str, before_paren: bool) -> Span<'_> {
    let style = if KEYWORDS.contains(&word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word == "true" || word == "false" || word.chars().all(|c| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if before_paren {
        Style::default().fg(DEFAULT_THEME.procedure)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    Span::styled(word, style)
}

/// Scroll state for the program pane
#[derive(Debug, Default)]
pub struct ProgramScrollState {
    pub offset: usize,
    /// Visual row the current line is kept on (None = center on first render)
    pub target_line_row: Option<usize>,
}

/// Render the program pane
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &Listing,
    current_line: Option<usize>,
    is_error: bool,
    is_focused: bool,
    scroll_state: &mut ProgramScrollState,
) {
    let block = Block::default()
        .title(" Program ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let total_lines = listing.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    if let Some(line) = current_line {
        scroll_state.offset = super::clamp_scroll(
            line.saturating_sub(target_row),
            total_lines,
            visible_height,
        );
    }

    let visible_lines: Vec<Line> = listing
        .lines()
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, text)| {
            let is_current = current_line == Some(idx);
            let marker = if is_current { "→" } else { " " };
            let number = format!("{:4} {} ", idx + 1, marker);

            let mut spans = highlight_line(text);
            let number_style = if is_current && is_error {
                for span in &mut spans {
                    span.style = Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD);
                }
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                for span in &mut spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut line = vec![Span::styled(number, number_style)];
            line.extend(spans);
            Line::from(line)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
