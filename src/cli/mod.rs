//! Command-line interface.
//!
//! Flags are handled before the terminal is taken over:
//!
//! ```ignore
//! use calcpad::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let Some(options) = run_cli_command(command) else {
//!     return Ok(()); // --version or --help already printed
//! };
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, usage, CliCommand, CliOptions};
pub use version::{version_string, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `None` after printing for `Version` and `Help`, and the widget
/// options for `RunTui`.
pub fn run_cli_command(command: CliCommand) -> Option<CliOptions> {
    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            None
        }
        CliCommand::Help => {
            println!("{}", usage());
            None
        }
        CliCommand::RunTui(options) => Some(options),
    }
}
