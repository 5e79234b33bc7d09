//! Environment access for the resolvers.
//!
//! Every resolver reads its inputs through [`Environment`] instead of touching
//! process-global state directly. [`ProcessEnv`] reads the live process,
//! [`EnvSnapshot`] holds a frozen copy that can also be built by hand.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Custom override for the secure token path.
pub const TOKEN_PATH_VAR: &str = "GOOGLE_CALENDAR_MCP_TOKEN_PATH";

/// XDG base directory for user configuration.
pub const XDG_CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";

/// Explicit account mode override (`test` or `normal`, any case).
pub const ACCOUNT_MODE_VAR: &str = "GOOGLE_ACCOUNT_MODE";

/// Runtime environment indicator; the literal `test` selects test mode.
pub const NODE_ENV_VAR: &str = "NODE_ENV";

/// Read-only view of the state the resolvers depend on.
pub trait Environment {
    /// Returns the raw value of an environment variable, or `None` if unset.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Returns the current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDir`] if the directory cannot be read.
    fn current_dir(&self) -> Result<PathBuf>;

    /// Returns the invoking user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Returns the value of an environment variable as UTF-8.
    ///
    /// A value that is not valid UTF-8 is returned as `None`. Use
    /// [`Environment::var_os`] for paths.
    fn var(&self, key: &str) -> Option<String> {
        self.var_os(key).and_then(|value| value.into_string().ok())
    }

    /// Returns the raw value of an environment variable, treating an empty value as unset.
    fn non_empty_var_os(&self, key: &str) -> Option<OsString> {
        self.var_os(key).filter(|value| !value.is_empty())
    }
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        std::env::current_dir().map_err(Error::CurrentDir)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// An owned snapshot of environment state.
///
/// Build one by hand for deterministic resolution:
///
/// ```
/// use gcal_auth::{AccountMode, EnvSnapshot};
///
/// let env = EnvSnapshot::new()
///     .with_var("GOOGLE_ACCOUNT_MODE", "Test")
///     .with_current_dir("/srv/app")
///     .with_home_dir("/home/alice");
///
/// assert_eq!(AccountMode::resolve(&env), AccountMode::Test);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<OsString, OsString>,
    current_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl EnvSnapshot {
    /// Creates an empty snapshot: no variables, no working directory, no home.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current process environment.
    ///
    /// Values are kept as-is, including ones that are not valid UTF-8. An
    /// unreadable working directory is recorded as absent.
    #[must_use]
    pub fn capture() -> Self {
        let vars = std::env::vars_os().collect();

        Self {
            vars,
            current_dir: std::env::current_dir().ok(),
            home_dir: dirs::home_dir(),
        }
    }

    /// Sets a variable.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Removes a variable.
    #[must_use]
    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(OsStr::new(key));
        self
    }

    /// Sets the working directory.
    #[must_use]
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Sets the home directory.
    #[must_use]
    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }
}

impl Environment for EnvSnapshot {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(OsStr::new(key)).cloned()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir.clone().ok_or_else(|| {
            Error::CurrentDir(io::Error::new(
                io::ErrorKind::NotFound,
                "no working directory recorded in snapshot",
            ))
        })
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_vars() {
        let env = EnvSnapshot::new()
            .with_var("A", "1")
            .with_var("B", "")
            .with_var("C", "3")
            .without_var("C");

        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert_eq!(env.var("B").as_deref(), Some(""));
        assert!(env.var("C").is_none());
        assert!(env.var("D").is_none());
    }

    #[test]
    fn test_non_empty_var_os() {
        let env = EnvSnapshot::new().with_var("A", "x").with_var("B", "");
        assert_eq!(env.non_empty_var_os("A"), Some(OsString::from("x")));
        assert!(env.non_empty_var_os("B").is_none());
        assert!(env.non_empty_var_os("C").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_kept_raw() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/tmp/tok\xffens.json");
        let env = EnvSnapshot::new().with_var("P", raw);

        assert_eq!(env.var_os("P").as_deref(), Some(raw));
        assert_eq!(env.non_empty_var_os("P").as_deref(), Some(raw));
        assert!(env.var("P").is_none());
    }

    #[test]
    fn test_snapshot_dirs() {
        let env = EnvSnapshot::new()
            .with_current_dir("/work")
            .with_home_dir("/home/user");
        assert_eq!(env.current_dir().unwrap(), PathBuf::from("/work"));
        assert_eq!(env.home_dir(), Some(PathBuf::from("/home/user")));
    }

    #[test]
    fn test_empty_snapshot_has_no_dirs() {
        let env = EnvSnapshot::new();
        assert!(matches!(env.current_dir(), Err(Error::CurrentDir(_))));
        assert!(env.home_dir().is_none());
    }

    #[test]
    fn test_capture_matches_process() {
        let snapshot = EnvSnapshot::capture();
        assert_eq!(snapshot.home_dir(), ProcessEnv.home_dir());
        assert_eq!(
            snapshot.current_dir().ok(),
            ProcessEnv.current_dir().ok()
        );
        assert_eq!(snapshot.var_os("PATH"), ProcessEnv.var_os("PATH"));
    }
}
