use std::{
    env,
    ffi::OsString,
    path::{self, Path, PathBuf},
};

use is_executable::is_executable;

/// Converts a path to a string.
///
/// Non-unicode characters are replaced by '?' in the returned string.
pub fn path_to_string<P: AsRef<Path>>(path: &P) -> String {
    path.as_ref()
        .to_string_lossy()
        .trim_start_matches(r#"\\?\"#)
        .to_string()
}

/// Resolves the program a stage should run.
///
/// A name containing a path separator is taken as a path, relative to `working_directory` when
/// one is given, and must exist. Any other name is searched for in `$PATH`.
///
/// The returned path is absolute, since the child resolves it only after changing into the
/// working directory.
pub fn resolve_program(name: &str, working_directory: Option<&Path>) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let program = if name.chars().any(path::is_separator) {
        let path = match working_directory {
            Some(dir) if Path::new(name).is_relative() => dir.join(name),
            _ => PathBuf::from(name),
        };
        path.exists().then_some(path)
    } else {
        find_in_path(
            name,
            env::var_os("PATH"),
            env::var("PATHEXT").ok().as_deref(),
        )
    };

    program.map(absolute_path)
}

/// Resolves a relative path against the current directory of the process.
fn absolute_path(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }

    match env::current_dir() {
        Ok(dir) => dir.join(path),
        Err(_) => path,
    }
}

/// Find a program by searching for its name in the paths present in `path_var`.
///
/// Optionally, extensions present in the semicolon-separated `path_ext` are used when searching.
/// Note that `$PATHEXT` is typically only present on Windows systems. If it is undefined, only
/// the name is matched.
///
/// Also note that file system case-insensitivity may be in effect.
pub fn find_in_path(
    name: &str,
    path_var: Option<OsString>,
    path_ext: Option<&str>,
) -> Option<PathBuf> {
    // Define all possible file extensions that can be matched.
    let mut extensions = vec![String::new()]; // Empty string = no file extension.
    if let Some(path_ext) = path_ext {
        extensions.extend(
            path_ext
                .split(';')
                .filter(|ext| !ext.is_empty())
                .map(str::to_owned),
        );
    }

    let path_var = path_var?;
    let possible_paths = env::split_paths(&path_var).flat_map(|dir| {
        extensions
            .iter()
            .map(move |extension| dir.join(name.to_owned() + extension))
    });

    for path in possible_paths {
        if is_executable(&path) {
            return Some(path);
        }
    }

    None
}
