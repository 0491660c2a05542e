//! Color theme constants for the chat panel.

use ratatui::style::Color;

/// Panel and launcher border
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights: title, primary quick reply, focused input border
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text: timestamps, hints, date separator
pub const COLOR_DIM: Color = Color::DarkGray;

/// User message bar
pub const COLOR_USER: Color = Color::LightGreen;

/// Assistant message bar
pub const COLOR_ASSISTANT: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Typing indicator dots
pub const COLOR_TYPING: Color = Color::Gray;

/// Notices
pub const COLOR_NOTICE: Color = Color::Yellow;
