use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Directory for JSON log files, rotated daily.
    ///
    /// Human-readable logs always go to stderr; the level is controlled by
    /// the PROMPTHUB_LOG environment variable.
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Fetch a prompt, compile it and print the result
    Get {
        /// Name of the prompt
        name: String,

        /// Variable binding in the form key=value, may be repeated
        #[arg(long = "var", short = 'v', value_parser = parse_variable)]
        vars: Vec<(String, String)>,

        /// Compile as a chat prompt and print one `role: content` line per
        /// message
        #[arg(long, default_value_t = false)]
        chat: bool,
    },

    /// Fetch prompts and report any that cannot be fetched
    Warm {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Create a prompt version from a JSON definition file
    Create {
        /// Path to the JSON definition
        path: PathBuf,
    },
}

/// Splits `key=value` at the first `=`; the value may contain further `=`.
pub fn parse_variable(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid variable '{input}', expected key=value")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_variable() {
        assert_eq!(
            parse_variable("name=Ada").unwrap(),
            ("name".to_string(), "Ada".to_string())
        );
        assert_eq!(
            parse_variable("query=a=b").unwrap(),
            ("query".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_variable("empty=").unwrap(), ("empty".to_string(), String::new()));
    }

    #[test]
    fn test_parse_variable_rejects_malformed() {
        assert!(parse_variable("name").is_err());
        assert!(parse_variable("=Ada").is_err());
    }

    #[test]
    fn test_cli_get() {
        let cli = Cli::try_parse_from([
            "prompthub", "get", "greeting", "--var", "name=Ada", "-v", "age=30", "--chat",
        ])
        .unwrap();

        let expected = Command::Get {
            name: "greeting".to_string(),
            vars: vec![
                ("name".to_string(), "Ada".to_string()),
                ("age".to_string(), "30".to_string()),
            ],
            chat: true,
        };
        assert_eq!(cli.command, expected);
        assert_eq!(cli.log_dir, None);
    }

    #[test]
    fn test_cli_warm_requires_names() {
        assert!(Cli::try_parse_from(["prompthub", "warm"]).is_err());
        let cli = Cli::try_parse_from(["prompthub", "--log-dir", "/tmp/logs", "warm", "a", "b"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Warm { names: vec!["a".to_string(), "b".to_string()] }
        );
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
    }
}
