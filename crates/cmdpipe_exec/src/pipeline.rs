use std::env;

use cmdpipe_parse::split_pipeline;
use itertools::Itertools;

use crate::{
    env::home_directory,
    error::{ExecError, ExecResult},
    fs::path_to_string,
    launch::{Launch, ProcessLauncher, StageRequest},
    options::RunOptions,
};

/// A pipeline executor runs `|`-separated commands one after another, feeding the captured
/// output of each stage to the next.
pub struct Pipeline<L: Launch = ProcessLauncher> {
    launcher: L,
}

impl Default for Pipeline<ProcessLauncher> {
    fn default() -> Self {
        Self::new(ProcessLauncher)
    }
}

impl<L: Launch> Pipeline<L> {
    /// Constructs a pipeline executor that runs stages using `launcher`.
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Runs a command and returns the captured output of its last stage.
    ///
    /// Returns `None` without running anything if the command is blank. All stages are parsed
    /// before the first one is launched. Execution stops at the first stage that fails.
    pub fn run(&self, command: &str, options: &RunOptions) -> ExecResult<Option<Vec<u8>>> {
        tracing::debug!(command, dir = %resolved_directory(options), "running command");

        let segments = split_pipeline(command)?;
        if segments.is_empty() {
            return Ok(None);
        }

        let mut stages = Vec::with_capacity(segments.len());
        for segment in &segments {
            stages.push((segment.text, segment.words()?));
        }

        let home = match &options.home_root {
            Some(root) => Some(home_directory(root, options.home_user.as_deref())?),
            None => None,
        };

        let mut previous: Option<Vec<u8>> = None;
        for (text, args) in stages {
            tracing::trace!(args = %args.iter().join(" "), "launching stage");

            let request = StageRequest {
                command: text.to_owned(),
                args,
                input: previous.take(),
                working_directory: options.working_directory.clone(),
                include_stderr: options.include_stderr,
                home: home.clone(),
            };

            let stage = self.launcher.launch(request)?;
            if !stage.success() {
                tracing::debug!(command = text, status = stage.status, "stage failed");
                return Err(ExecError::Execution {
                    command: text.to_owned(),
                    status: stage.status,
                    output: stage.output,
                });
            }

            previous = Some(stage.output);
        }

        Ok(previous)
    }
}

/// Returns the directory stages run in, for logging.
fn resolved_directory(options: &RunOptions) -> String {
    match &options.working_directory {
        Some(dir) => path_to_string(dir),
        None => env::current_dir()
            .map(|dir| path_to_string(&dir))
            .unwrap_or_else(|_| String::from(".")),
    }
}
