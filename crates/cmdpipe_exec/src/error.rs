use std::io;

use cmdpipe_parse::ParseError;
use thiserror::Error;

use crate::exit::{EXIT_GENERAL_ERROR, EXIT_NOT_FOUND, EXIT_USAGE};

pub type ExecResult<T> = Result<T, ExecError>;

#[derive(Debug, Error)]
pub enum ExecError {
    /// The command text could not be split into runnable stages.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A stage's process could not be started.
    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    /// A stage's process ran and exited with a non-zero status.
    ///
    /// Holds everything the failing stage captured before exiting.
    #[error("'{command}' exited with status {status}")]
    Execution {
        command: String,
        status: i32,
        output: Vec<u8>,
    },

    /// Piping bytes to or from a stage's process failed.
    #[error("input/output error in '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },

    /// A HOME override was requested, but no user name is known.
    #[error("cannot override HOME: no user name found in USER, USERNAME or LOGNAME")]
    UnknownUser,
}

impl ExecError {
    /// Returns the captured output of a failed stage.
    pub fn output(&self) -> Option<&[u8]> {
        match self {
            ExecError::Execution { output, .. } => Some(output),
            _ => None,
        }
    }

    /// Returns the captured output of a failed stage as (lossy) UTF-8 text.
    pub fn output_lossy(&self) -> Option<String> {
        self.output()
            .map(|output| String::from_utf8_lossy(output).into_owned())
    }

    /// Returns the exit status of a failed stage.
    pub fn status(&self) -> Option<i32> {
        match self {
            ExecError::Execution { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns a process exit code describing the error, in the range `1..=255`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecError::Parse(_) => EXIT_USAGE,
            ExecError::Launch { .. } => EXIT_NOT_FOUND,
            ExecError::Execution { status, .. } => match status {
                1..=255 => *status,
                _ => EXIT_GENERAL_ERROR,
            },
            ExecError::Io { .. } | ExecError::UnknownUser => EXIT_GENERAL_ERROR,
        }
    }
}
