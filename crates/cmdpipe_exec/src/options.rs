use std::path::PathBuf;

/// Home root used by [`RunOptions::with_default_home_root`].
pub const DEFAULT_HOME_ROOT: &str = "/home";

/// Options for running a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Directory to run every stage in. Defaults to the current directory of the process.
    pub working_directory: Option<PathBuf>,

    /// Capture standard error in the same buffer as standard output.
    pub include_stderr: bool,

    /// When set, children see `HOME` as `<home_root>/<user>`.
    pub home_root: Option<PathBuf>,

    /// User name for the `HOME` override. Read from the environment when unset.
    pub home_user: Option<String>,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn working_directory<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn include_stderr(mut self, include_stderr: bool) -> Self {
        self.include_stderr = include_stderr;
        self
    }

    pub fn home_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.home_root = Some(root.into());
        self
    }

    /// Enables the `HOME` override using [`DEFAULT_HOME_ROOT`].
    pub fn with_default_home_root(self) -> Self {
        self.home_root(DEFAULT_HOME_ROOT)
    }

    pub fn home_user<S: Into<String>>(mut self, user: S) -> Self {
        self.home_user = Some(user.into());
        self
    }
}
