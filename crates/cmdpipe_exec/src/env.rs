use std::path::{Path, PathBuf};

use crate::error::{ExecError, ExecResult};

/// Environment variables holding the current user name, in lookup order.
const USER_VARS: [&str; 3] = ["USER", "USERNAME", "LOGNAME"];

/// Returns the name of the current user as found in the process environment.
pub fn current_user_name() -> Option<String> {
    user_name_from(|key| std::env::var(key).ok())
}

/// Returns the first non-blank user name provided by `lookup`.
fn user_name_from<F: Fn(&str) -> Option<String>>(lookup: F) -> Option<String> {
    USER_VARS
        .iter()
        .filter_map(|key| lookup(key))
        .find(|name| !name.trim().is_empty())
}

/// Returns the `HOME` value children should see: `root` joined with the user name.
///
/// `user` takes precedence over the user name found in the environment.
pub fn home_directory(root: &Path, user: Option<&str>) -> ExecResult<PathBuf> {
    match user {
        Some(user) => Ok(root.join(user)),
        None => current_user_name()
            .map(|user| root.join(user))
            .ok_or(ExecError::UnknownUser),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn user_name_prefers_user() {
        let vars = lookup(&[("USER", "alice"), ("USERNAME", "bob")]);
        assert_eq!(user_name_from(vars), Some("alice".into()));
    }

    #[test]
    fn user_name_falls_back_to_username_and_logname() {
        assert_eq!(
            user_name_from(lookup(&[("USERNAME", "bob"), ("LOGNAME", "carol")])),
            Some("bob".into())
        );
        assert_eq!(
            user_name_from(lookup(&[("USER", " "), ("LOGNAME", "carol")])),
            Some("carol".into())
        );
        assert_eq!(user_name_from(lookup(&[])), None);
    }

    #[test]
    fn home_directory_with_explicit_user() {
        let home = home_directory(Path::new("/srv/homes"), Some("alice")).unwrap();
        assert_eq!(home, PathBuf::from("/srv/homes/alice"));
    }
}
