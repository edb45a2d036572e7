//! Runs shell-like command pipelines such as `echo hello | tr a-z A-Z`, capturing the output of
//! the last stage.
//!
//! Commands are split on every `|`, each stage is split into words (see
//! [`cmdpipe_parse::split_words`] for the quoting rules), and the stages run one after another
//! with the captured output of one stage as the input of the next.

mod env;
mod error;
mod exit;
mod fs;
mod launch;
mod options;
mod pipeline;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use cmdpipe_parse::ParseError;
pub use env::{current_user_name, home_directory};
pub use error::{ExecError, ExecResult};
pub use exit::{
    EXIT_GENERAL_ERROR, EXIT_NOT_FOUND, EXIT_SIGNAL_BASE, EXIT_SUCCESS, EXIT_UNKNOWN, EXIT_USAGE,
};
pub use fs::{find_in_path, resolve_program};
pub use launch::{Launch, ProcessLauncher, StageOutput, StageRequest};
pub use options::{RunOptions, DEFAULT_HOME_ROOT};
pub use pipeline::Pipeline;

/// Runs a command in `working_directory`, or the current directory, and returns its standard
/// output.
///
/// Standard error is discarded and `HOME` is inherited. Use [`run_command_with`] for other
/// options.
pub fn run_command(command: &str, working_directory: Option<&Path>) -> ExecResult<Option<String>> {
    let mut options = RunOptions::default();
    if let Some(dir) = working_directory {
        options = options.working_directory(dir);
    }
    run_command_with(command, &options)
}

/// Runs a command and returns the captured output of its last stage as text.
///
/// Output is decoded as UTF-8. Invalid sequences are replaced with U+FFFD.
pub fn run_command_with(command: &str, options: &RunOptions) -> ExecResult<Option<String>> {
    run_command_bytes(command, options).map(|output| output.map(decode))
}

/// Runs a command and returns the raw captured output of its last stage.
pub fn run_command_bytes(command: &str, options: &RunOptions) -> ExecResult<Option<Vec<u8>>> {
    Pipeline::new(ProcessLauncher).run(command, options)
}

fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|error| String::from_utf8_lossy(error.as_bytes()).into_owned())
}
