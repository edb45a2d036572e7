use std::{
    io::{self, Read, Write},
    path::PathBuf,
    process::{self, Stdio},
    thread::{self, JoinHandle},
};

#[cfg(test)]
use mockall::automock;

use crate::{
    error::{ExecError, ExecResult},
    exit::{status_code, EXIT_SUCCESS},
    fs::{path_to_string, resolve_program},
};

/// Everything needed to run one stage of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageRequest {
    /// The stage's command text, as written in the pipeline.
    pub command: String,

    /// Program name followed by its arguments.
    pub args: Vec<String>,

    /// Bytes to feed the process on stdin. Stdin is closed when `None`.
    pub input: Option<Vec<u8>>,

    pub working_directory: Option<PathBuf>,
    pub include_stderr: bool,

    /// Value of `HOME` for the process. The inherited value is kept when `None`.
    pub home: Option<PathBuf>,
}

/// The outcome of a stage that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub status: i32,
    pub output: Vec<u8>,
}

impl StageOutput {
    /// Returns `true` if the stage exited with status 0.
    pub fn success(&self) -> bool {
        self.status == EXIT_SUCCESS
    }
}

/// Trait for running a single pipeline stage to completion.
#[cfg_attr(test, automock)]
pub trait Launch {
    /// Runs a stage and returns its exit status and captured output.
    ///
    /// A non-zero exit status is not an error at this level.
    fn launch(&self, request: StageRequest) -> ExecResult<StageOutput>;
}

/// Launches stages as child processes of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launch for ProcessLauncher {
    fn launch(&self, request: StageRequest) -> ExecResult<StageOutput> {
        let StageRequest {
            command,
            args,
            input,
            working_directory,
            include_stderr,
            home,
        } = request;

        let launch_error = |source| ExecError::Launch {
            command: command.clone(),
            source,
        };
        let io_error = |source| ExecError::Io {
            command: command.clone(),
            source,
        };

        if let Some(dir) = &working_directory {
            if !dir.is_dir() {
                return Err(launch_error(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such directory: {}", path_to_string(dir)),
                )));
            }
        }

        let (name, args) = args.split_first().ok_or_else(|| {
            launch_error(io::Error::new(io::ErrorKind::InvalidInput, "empty command"))
        })?;
        let program = resolve_program(name, working_directory.as_deref()).ok_or_else(|| {
            launch_error(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{name}: command not found"),
            ))
        })?;

        // Both stdout and stderr (when included) write to the same pipe, leaving the order of
        // their bytes to the OS.
        let (reader, writer) = os_pipe::pipe().map_err(io_error)?;

        let mut cmd = process::Command::new(&program);
        cmd.args(args);
        if let Some(dir) = &working_directory {
            cmd.current_dir(dir);
        }
        if let Some(home) = &home {
            cmd.env("HOME", home);
        }
        cmd.stdin(match input {
            Some(_) => Stdio::piped(),
            None => Stdio::null(),
        });
        if include_stderr {
            cmd.stderr(writer.try_clone().map_err(io_error)?);
        } else {
            cmd.stderr(Stdio::null());
        }
        cmd.stdout(writer);

        let spawned = cmd.spawn();

        // The command holds the parent's copies of the pipe writer. The reader only sees EOF
        // once they are closed.
        drop(cmd);
        let mut child = spawned.map_err(launch_error)?;

        let stdin_pump = match (child.stdin.take(), input) {
            (Some(mut stdin), Some(bytes)) => {
                Some(thread::spawn(move || stdin.write_all(&bytes)))
            }
            _ => None,
        };
        let stdout_pump = thread::spawn(move || {
            let mut reader = reader;
            let mut output = Vec::new();
            reader.read_to_end(&mut output).map(|_| output)
        });

        let status = child.wait().map_err(io_error)?;
        let output = join_pump("output", stdout_pump).map_err(io_error)?;

        if let Some(stdin_pump) = stdin_pump {
            match join_pump("input", stdin_pump) {
                Ok(()) => {}
                // The process exited without reading all of its input.
                Err(error) if error.kind() == io::ErrorKind::BrokenPipe => {}
                Err(error) => return Err(io_error(error)),
            }
        }

        Ok(StageOutput {
            status: status_code(status),
            output,
        })
    }
}

/// Waits for a pump thread to finish and returns its result.
fn join_pump<T>(stream: &str, handle: JoinHandle<io::Result<T>>) -> io::Result<T> {
    handle.join().unwrap_or_else(|_| {
        tracing::warn!(stream, "pipe pump thread panicked");
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("{stream} pump thread panicked"),
        ))
    })
}
