//! Panel and launcher layout.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::QUICK_REPLIES;
use crate::state::WidgetState;

use super::messages::{conversation_lines, scroll_top};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_NOTICE};

pub const PANEL_TITLE: &str = " Dilshaj Infotech AI Assistant ";
pub const LAUNCHER_LABEL: &str = " Chat with us · Tab ";
const PANEL_MAX_WIDTH: u16 = 72;

/// Rectangle of `width` x `height` in the bottom-right corner of `area`.
fn bottom_right(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

/// Closed state: a small button in the corner.
pub fn render_launcher(frame: &mut Frame, area: Rect) {
    let width = LAUNCHER_LABEL.width() as u16 + 2;
    let rect = bottom_right(area, width, 3);
    let button = Paragraph::new(Line::from(Span::styled(
        LAUNCHER_LABEL,
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(button, rect);
}

fn quick_reply_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (i, reply) in QUICK_REPLIES.iter().enumerate() {
        let style = if reply.primary {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("F{} ", i + 1), Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(format!("[{}]", reply.text), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

/// Open state: header, conversation, quick replies and input.
pub fn render_panel(frame: &mut Frame, area: Rect, state: &WidgetState, tick: u64) {
    let rect = bottom_right(area, PANEL_MAX_WIDTH, area.height);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            PANEL_TITLE,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            " Esc minimise · Ctrl+R clear · Ctrl+C quit ",
            Style::default().fg(COLOR_DIM),
        )));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let notice_height = u16::from(state.notice.is_some());
    let [conversation_area, notice_area, quick_area, input_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(notice_height),
        Constraint::Length(2),
        Constraint::Length(3),
    ])
    .areas(inner);

    // Conversation, pinned to the newest line unless scrolled up
    let lines = conversation_lines(state, usize::from(conversation_area.width), tick);
    let top = scroll_top(
        lines.len(),
        usize::from(conversation_area.height),
        state.scroll_offset,
    );
    let visible: Vec<Line<'static>> = lines.into_iter().skip(top).collect();
    frame.render_widget(Paragraph::new(visible), conversation_area);

    if let Some(notice) = &state.notice {
        frame.render_widget(
            Paragraph::new(Span::styled(notice.clone(), Style::default().fg(COLOR_NOTICE))),
            notice_area,
        );
    }

    frame.render_widget(
        Paragraph::new(quick_reply_line()).wrap(Wrap { trim: true }),
        quick_area,
    );

    render_input(frame, input_area, state);
}

fn render_input(frame: &mut Frame, area: Rect, state: &WidgetState) {
    let border = if state.input_enabled {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(" Message ", Style::default().fg(COLOR_DIM)));
    let inner = block.inner(area);

    let content = if state.input_enabled {
        Line::from(state.input.value().to_string())
    } else {
        Line::from(Span::styled(
            "Waiting for reply...",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))
    };

    // Keep the cursor in view on long input
    let cursor_col = state.input.before_cursor().width() as u16;
    let h_scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));

    frame.render_widget(
        Paragraph::new(content).block(block).scroll((0, h_scroll)),
        area,
    );

    if state.input_enabled && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_col - h_scroll, inner.y));
    }
}
