//! Terminal setup and teardown.
//!
//! [`TerminalGuard`] restores the terminal when dropped, and
//! [`setup_panic_hook`] does the same before a panic message is printed.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Enter raw mode and the alternate screen.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen)
}

/// Leave the alternate screen and raw mode. Never fails; safe to call twice.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal first.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        leave_tui_mode(&mut io::stdout());
        original_hook(panic_info);
    }));
}

/// Restores the terminal on drop.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    /// Enter TUI mode on stdout and return the guard that undoes it.
    pub fn enter() -> io::Result<Self> {
        enter_tui_mode(&mut io::stdout())?;
        Ok(Self { cleaned_up: false })
    }

    /// Restore now rather than on drop. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}
