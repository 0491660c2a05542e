//! Display-width aware word wrapping.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines at most `width` columns wide.
///
/// Explicit newlines are kept, words longer than a line are split, and an
/// empty input yields one empty line so a placeholder still takes a row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split(' ') {
            let word_width = word.width();
            let sep = usize::from(!current.is_empty());

            if current_width + sep + word_width <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += sep + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if current_width + w > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }

        lines.push(current);
    }

    lines
}
