mod error;


use std::{io::Write, path::PathBuf};

use clap::{crate_version, ArgAction, Parser};
use cmdpipe_exec::{run_command_with, RunOptions};
use error::{display_error, ErrorHandler};
use tracing_subscriber::EnvFilter;

/// Command line options for the application's CLI.
#[derive(Parser, Debug)]
#[command(
    about = "Runs a pipeline of external commands and prints the output of the last one.",
    version = crate_version!()
)]
struct Opts {
    /// Directory to run every stage in
    #[arg(short = 'C', long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Capture standard error along with standard output
    #[arg(short = 'e', long = "stderr")]
    stderr: bool,

    /// Set HOME to <PATH>/<user> for every stage
    #[arg(long, value_name = "PATH", conflicts_with = "default_home")]
    home_root: Option<PathBuf>,

    /// Set HOME to /home/<user> for every stage
    #[arg(long)]
    default_home: bool,

    /// User name for the HOME override, instead of $USER
    #[arg(long, value_name = "NAME")]
    user: Option<String>,

    /// Log more details to stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Command to run, with stages separated by '|'
    command: String,
}

impl Opts {
    /// Returns the options to run the command with.
    fn run_options(&self) -> RunOptions {
        let mut options = RunOptions::new().include_stderr(self.stderr);

        if let Some(dir) = &self.dir {
            options = options.working_directory(dir);
        }

        if let Some(root) = &self.home_root {
            options = options.home_root(root);
        } else if self.default_home {
            options = options.with_default_home_root();
        }

        if let Some(user) = &self.user {
            options = options.home_user(user);
        }

        options
    }
}

/// Entrypoint for the application.
pub fn main() {
    let opts = Opts::parse();
    init_logging(opts.verbose);
    tracing::trace!(?opts, "parsed command line");

    let handler = ErrorHandler::new(atty::is(atty::Stream::Stderr));
    match run_command_with(&opts.command, &opts.run_options()) {
        Ok(output) => print!("{}", output.unwrap_or_default()),
        Err(error) => {
            // Show whatever the failing stage managed to print before exiting.
            if let Some(output) = error.output() {
                let mut stdout = std::io::stdout();
                let _ = stdout.write_all(output);
                let _ = stdout.flush();
            }

            display_error(&handler, &opts.command, &error);
            std::process::exit(error.exit_code());
        }
    }
}

/// Installs a subscriber logging to stderr.
///
/// `RUST_LOG` is respected unless verbosity is raised on the command line.
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
