//! Version command.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `chat-panel <version>`
pub fn version_string() -> String {
    format!("chat-panel {}", VERSION)
}

/// Print the version and exit successfully.
pub fn handle_version_command() -> ! {
    println!("{}", version_string());
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_string().starts_with("chat-panel "));
    }
}
