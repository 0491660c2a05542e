//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the chat panel, optionally against another backend
    Run { url: Option<String> },
    /// Arguments could not be understood
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over anything else on the line.
///
/// # Examples
///
/// ```
/// use chat_panel::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["chat-panel".to_string(), "--url".to_string(), "http://h:1".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Run { url: Some("http://h:1".to_string()) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut url = None;
    let mut error = None;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--url" => match args.next() {
                Some(value) if !value.starts_with('-') => url = Some(value),
                _ => {
                    error.get_or_insert_with(|| "--url requires a value".to_string());
                }
            },
            other => {
                if let Some(value) = other.strip_prefix("--url=") {
                    url = Some(value.to_string());
                } else {
                    error.get_or_insert_with(|| format!("unknown argument: {}", other));
                }
            }
        }
    }

    match error {
        Some(message) => CliCommand::Invalid(message),
        None => CliCommand::Run { url },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["chat-panel".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run { url: None });
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_url_forms() {
        assert_eq!(
            parse(&["--url", "http://a:1"]),
            CliCommand::Run {
                url: Some("http://a:1".to_string())
            }
        );
        assert_eq!(
            parse(&["--url=http://b:2"]),
            CliCommand::Run {
                url: Some("http://b:2".to_string())
            }
        );
    }

    #[test]
    fn test_parse_url_missing_value() {
        assert!(matches!(parse(&["--url"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--url", "--help"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_argument() {
        assert_eq!(
            parse(&["--nope"]),
            CliCommand::Invalid("unknown argument: --nope".to_string())
        );
    }

    #[test]
    fn test_version_wins_over_errors() {
        assert_eq!(parse(&["--nope", "--version"]), CliCommand::Version);
    }
}
