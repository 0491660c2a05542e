//! Key bindings.
//!
//! | Key | Action |
//! |-----|--------|
//! | `Ctrl+C` | Quit |
//! | `Tab` | Open / close the panel |
//! | `Esc` | Minimise the panel |
//! | `Enter` | Send the input line |
//! | `F1`..`F4` | Send a quick reply |
//! | `Ctrl+R` | Clear the conversation |
//! | `PageUp` / `PageDown` | Scroll the conversation |

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::quick_reply;

use super::App;

const PAGE: u16 = 5;

impl App {
    /// Dispatch one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        // Global keybinds (always active)
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Tab => {
                self.toggle_panel();
                return;
            }
            _ => {}
        }

        if !self.state.is_open {
            return;
        }

        match key.code {
            KeyCode::Esc => self.minimize_panel(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.refresh_chat();
            }
            KeyCode::Enter => {
                self.send_message(None);
            }
            KeyCode::F(n @ 1..=4) => {
                if let Some(reply) = quick_reply(usize::from(n - 1)) {
                    self.send_message(Some(reply));
                }
            }
            KeyCode::PageUp => self.state.scroll_up(PAGE),
            KeyCode::PageDown => self.state.scroll_down(PAGE),
            _ if self.state.input_enabled => self.edit_input(key),
            _ => {}
        }
    }

    fn edit_input(&mut self, key: KeyEvent) {
        let input = &mut self.state.input;
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                input.insert_char(c);
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            _ => {}
        }
    }
}
