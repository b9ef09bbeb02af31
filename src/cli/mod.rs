//! Command-line argument parsing.
//!
//! This stays frameworkless: the surface is three flags.

use std::path::PathBuf;

/// Options for a normal TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// Override the directory backend base URL.
    pub source_url: Option<String>,
    /// Override the local data directory (favorites, log file).
    pub data_dir: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information.
    Version,
    /// Run the TUI application (default).
    Run(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// Unknown flags are ignored; a flag expecting a value consumes the next
/// argument when present.
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1); // skip the program name

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--source-url" => {
                if let Some(url) = args.next() {
                    options.source_url = Some(url);
                }
            }
            "--data-dir" => {
                if let Some(dir) = args.next() {
                    options.data_dir = Some(PathBuf::from(dir));
                }
            }
            _ => {}
        }
    }

    CliCommand::Run(options)
}
