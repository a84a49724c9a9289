//! Utility functions for the CLI

use std::path::Path;

use crate::error::{CliError, CliResult};
use colored::{ColoredString, Colorize};
use serde_json::Value;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize tracing. Logs always go to stderr: stdout carries the
/// protocol in stdio mode.
pub fn init_tracing(verbose: bool, ansi: bool) -> CliResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::General(format!("Failed to set tracing subscriber: {}", e)))?;

    Ok(())
}

/// Utility for colored console output
pub struct ColoredOutput;

impl ColoredOutput {
    pub fn error(msg: &str) -> ColoredString {
        msg.red().bold()
    }

    pub fn dim(msg: &str) -> ColoredString {
        msg.dimmed()
    }

    pub fn highlight(msg: &str) -> ColoredString {
        msg.cyan().bold()
    }
}

/// Validate file exists and is readable
pub fn validate_file_exists(path: &Path) -> CliResult<()> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// Read tool arguments from the command line or a file. No arguments means
/// an empty object.
pub fn read_arguments(args: Option<String>, args_file: Option<&Path>) -> CliResult<Value> {
    let raw = match (args, args_file) {
        (Some(inline), None) => inline,
        (None, Some(path)) => {
            validate_file_exists(path)?;
            std::fs::read_to_string(path)?
        }
        (None, None) => return Ok(Value::Object(Default::default())),
        (Some(_), Some(_)) => {
            return Err(CliError::InvalidArgument(
                "--args and --args-file are mutually exclusive".to_string(),
            ))
        }
    };

    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| CliError::InvalidArgument(format!("Invalid JSON arguments: {}", e)))?;
    if !value.is_object() {
        return Err(CliError::InvalidArgument(
            "Arguments must be a JSON object".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn inline_arguments() {
        let value = read_arguments(Some(r#"{"user": "satyanadella"}"#.into()), None).unwrap();
        assert_eq!(value, json!({"user": "satyanadella"}));

        assert_eq!(read_arguments(None, None).unwrap(), json!({}));
        assert!(matches!(
            read_arguments(Some("[1]".into()), None),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            read_arguments(Some("{oops".into()), None),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn file_arguments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"query": "rust"}}"#).unwrap();

        let value = read_arguments(None, Some(file.path())).unwrap();
        assert_eq!(value, json!({"query": "rust"}));

        assert!(matches!(
            read_arguments(None, Some(Path::new("/no/such/args.json"))),
            Err(CliError::FileNotFound(_))
        ));
    }
}
