//! UI rendering for the chat panel.
//!
//! Closed, only a launcher button is drawn in the bottom-right corner. Open,
//! the panel shows the date separator, the conversation with time stamps,
//! the typing indicator, quick replies and the input line.

mod messages;
mod panel;
mod theme;
mod wrap;

pub use messages::{conversation_lines, date_label};
pub use theme::{COLOR_ACCENT, COLOR_ASSISTANT, COLOR_BORDER, COLOR_DIM, COLOR_USER};
pub use wrap::wrap_text;

use ratatui::Frame;

use crate::app::App;

/// Render the whole UI for the current state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    if app.state.is_open {
        panel::render_panel(frame, area, &app.state, app.tick_count);
    } else {
        panel::render_launcher(frame, area);
    }
}
