//! Conversation rendering: date separator, messages, typing indicator.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::models::{ChatMessage, Role};
use crate::state::WidgetState;

use super::theme::{COLOR_ASSISTANT, COLOR_DIM, COLOR_TYPING, COLOR_USER};
use super::wrap::wrap_text;

const BAR: &str = "│ ";

/// Label for the date separator, e.g. `Monday, Oct 19`.
pub fn date_label(state: &WidgetState) -> String {
    state.session_date.format("%A, %b %-d").to_string()
}

fn centered(text: String, width: usize, style: Style) -> Line<'static> {
    let pad = width.saturating_sub(text.width()) / 2;
    Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)])
}

fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let (name, color) = match message.role {
        Role::User => ("You", COLOR_USER),
        Role::Assistant => ("Assistant", COLOR_ASSISTANT),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            name,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", message.time_label()),
            Style::default().fg(COLOR_DIM),
        ),
    ])];

    let content_width = width.saturating_sub(BAR.width());
    for text in wrap_text(&message.content, content_width) {
        lines.push(Line::from(vec![
            Span::styled(BAR, Style::default().fg(color)),
            Span::raw(text),
        ]));
    }
    lines
}

/// Animated dots shown while waiting for the reply to start.
pub fn typing_indicator(tick: u64) -> Line<'static> {
    let lit = ((tick / 20) % 3) as usize;
    let mut spans = vec![Span::styled(BAR, Style::default().fg(COLOR_ASSISTANT))];
    for i in 0..3 {
        let style = if i == lit {
            Style::default().fg(COLOR_TYPING).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled("● ", style));
    }
    Line::from(spans)
}

/// Every line of the conversation, top to bottom, wrapped to `width`.
pub fn conversation_lines(state: &WidgetState, width: usize, tick: u64) -> Vec<Line<'static>> {
    let mut lines = vec![
        centered(date_label(state), width, Style::default().fg(COLOR_DIM)),
        Line::default(),
    ];

    for message in &state.messages {
        lines.extend(message_lines(message, width));
        lines.push(Line::default());
    }

    if state.loading {
        lines.push(typing_indicator(tick));
    }

    lines
}

/// First line to show so that the newest line sits at the bottom, moved up
/// by `scroll_offset`.
pub fn scroll_top(total_lines: usize, height: usize, scroll_offset: u16) -> usize {
    let max_top = total_lines.saturating_sub(height);
    max_top.saturating_sub(usize::from(scroll_offset))
}
