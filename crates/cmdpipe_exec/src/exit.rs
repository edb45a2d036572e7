use std::process::ExitStatus;

/// Status code for a successful exit.
pub const EXIT_SUCCESS: i32 = 0;

/// Catch-all status code for general errors.
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Status code for commands that could not be parsed.
pub const EXIT_USAGE: i32 = 2;

/// Status code for commands that could not be launched.
pub const EXIT_NOT_FOUND: i32 = 127;

/// Base status code for processes terminated by a signal. The signal number is added to it.
pub const EXIT_SIGNAL_BASE: i32 = 128;

/// Status code for processes that report neither an exit code nor a signal.
pub const EXIT_UNKNOWN: i32 = -1;

/// Converts an [`ExitStatus`] to an integer status code.
pub(crate) fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return EXIT_SIGNAL_BASE + signal;
        }
    }

    EXIT_UNKNOWN
}
