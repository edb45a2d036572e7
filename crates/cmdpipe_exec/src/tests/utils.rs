use std::io;

use crate::{
    error::{ExecError, ExecResult},
    launch::StageOutput,
};

/// Returns the result of a stage that exited with `status` after printing `output`.
pub(crate) fn exited(status: i32, output: &[u8]) -> ExecResult<StageOutput> {
    Ok(StageOutput {
        status,
        output: output.to_vec(),
    })
}

/// Returns the result of a stage whose program could not be found.
pub(crate) fn not_found(command: &str) -> ExecResult<StageOutput> {
    Err(ExecError::Launch {
        command: command.to_owned(),
        source: io::Error::new(io::ErrorKind::NotFound, "command not found"),
    })
}
