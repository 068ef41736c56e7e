//! Command-line argument parsing.

use std::path::PathBuf;

use crate::domain::ThemeMode;
use crate::error::{CalcpadError, CalcpadResult};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the calculator widget (default)
    RunTui(CliOptions),
}

/// Options that adjust how the widget starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// `--theme <light|dark>`
    pub theme: Option<ThemeMode>,
    /// `--log [path]`: `Some(None)` when given without a path
    pub log: Option<Option<PathBuf>>,
}

/// Parse command-line arguments.
///
/// The first item is the program name and is skipped. Unknown flags are
/// ignored; an unrecognized theme name is an error.
///
/// # Examples
///
/// ```
/// use calcpad::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["calcpad".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CalcpadResult<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--theme" => {
                let value = args.next().unwrap_or_default();
                options.theme = Some(parse_theme(&value)?);
            }
            "--log" => {
                let path = args.next_if(|next| !next.starts_with('-')).map(PathBuf::from);
                options.log = Some(path);
            }
            other => {
                if let Some(value) = other.strip_prefix("--theme=") {
                    options.theme = Some(parse_theme(value)?);
                } else if let Some(value) = other.strip_prefix("--log=") {
                    options.log = Some(Some(PathBuf::from(value)));
                }
            }
        }
    }

    Ok(CliCommand::RunTui(options))
}

fn parse_theme(value: &str) -> CalcpadResult<ThemeMode> {
    value
        .parse()
        .map_err(|_| CalcpadError::invalid_argument("--theme", value))
}

/// Usage text printed by `--help`.
pub fn usage() -> String {
    format!(
        "calcpad {}\n\
         A mouse-driven calculator widget for the terminal.\n\
         \n\
         USAGE:\n    calcpad [OPTIONS]\n\
         \n\
         OPTIONS:\n\
         \x20   --theme <light|dark>   Initial display theme\n\
         \x20   --log [path]           Write logs to path (default: cache dir)\n\
         \x20   -V, --version          Print version\n\
         \x20   -h, --help             Print this help\n\
         \n\
         ENVIRONMENT:\n\
         \x20   CALCPAD_THEME          Initial theme, overridden by --theme\n\
         \x20   CALCPAD_LOG_FILE       Log file path, overridden by --log\n\
         \x20   CALCPAD_LOG            Log filter directives (default: info)\n\
         \n\
         Click the keypad to calculate. Press q, Esc or Ctrl+C to quit.",
        super::VERSION
    )
}
