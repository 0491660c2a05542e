//! Single-line text input with a character cursor.

/// Editable input line of the panel.
///
/// The cursor is a character index, so multi-byte text edits cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.text.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Text before the cursor, for placing the terminal cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = InputLine::new();
        for c in "hello".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);

        input.backspace();
        assert_eq!(input.value(), "hell");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputLine::new();
        input.backspace();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_insert_in_middle_multibyte() {
        let mut input = InputLine::new();
        input.set("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('→');
        assert_eq!(input.value(), "hé→llo");
        assert_eq!(input.before_cursor(), "hé→");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut input = InputLine::new();
        input.set("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "bc");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputLine::new();
        input.set("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_is_blank() {
        let mut input = InputLine::new();
        assert!(input.is_blank());
        input.set("   ");
        assert!(input.is_blank());
        input.set(" x ");
        assert!(!input.is_blank());
        input.clear();
        assert!(input.is_blank());
        assert_eq!(input.cursor(), 0);
    }
}
