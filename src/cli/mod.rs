//! CLI module.
//!
//! Handles flags before the terminal is taken over:
//!
//! ```ignore
//! use chat_panel::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command) {
//!     // Flag handled; exit with result
//! }
//! // Otherwise start the panel
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{handle_version_command, version_string, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

pub const USAGE: &str = "\
Usage: chat-panel [OPTIONS]

Options:
  --url <URL>      Chatbot backend base URL (env: CHAT_PANEL_URL)
  -V, --version    Print version
  -h, --help       Print this help

Environment:
  CHAT_PANEL_URL           Backend base URL (default http://localhost:8000)
  CHAT_PANEL_LOG           Log file path
  CHAT_PANEL_TIMEOUT_SECS  Connect timeout in seconds (default 30)
  RUST_LOG                 Log filter (default chat_panel=info)";

/// Run a CLI command if applicable.
///
/// * `None` - the panel should start
/// * `Some(Ok(()))` - a flag was handled
/// * `Some(Err(e))` - the arguments were invalid
///
/// `Version` never returns; it exits the process.
pub fn run_cli_command(command: &CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::Run { .. } => None,
    }
}
