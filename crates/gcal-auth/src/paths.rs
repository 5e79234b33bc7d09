//! Token storage path resolution.
//!
//! Secure token path priority, first match wins:
//! 1. `GOOGLE_CALENDAR_MCP_TOKEN_PATH` (custom path)
//! 2. `$XDG_CONFIG_HOME/google-calendar-mcp/tokens.json`
//! 3. `~/.config/google-calendar-mcp/tokens.json`
//!
//! The legacy path is always `<cwd>/.gcp-saved-tokens.json` and is only used
//! to detect tokens left behind by older releases.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::env::{Environment, TOKEN_PATH_VAR, XDG_CONFIG_HOME_VAR};
use crate::error::{Error, Result};

/// Application namespace directory under the config directory.
pub const APP_NAMESPACE: &str = "google-calendar-mcp";

/// File name of the current-format token store.
pub const TOKEN_FILE_NAME: &str = "tokens.json";

/// File name of the legacy token file in the working directory.
pub const LEGACY_TOKEN_FILE_NAME: &str = ".gcp-saved-tokens.json";

/// Config directory used when `XDG_CONFIG_HOME` is unset, relative to home.
const DEFAULT_CONFIG_SUBDIR: &str = ".config";

/// Returns the path where current-format tokens are stored.
///
/// Nothing is read from or created on disk.
///
/// # Errors
///
/// Returns [`Error::HomeDirUnavailable`] if neither override is set and the
/// home directory cannot be determined, or [`Error::CurrentDir`] if a relative
/// path has to be resolved and the working directory cannot be read.
pub fn secure_token_path(env: &impl Environment) -> Result<PathBuf> {
    if let Some(custom) = env.non_empty_var_os(TOKEN_PATH_VAR) {
        let path = resolve_absolute(env, Path::new(&custom))?;
        debug!("Using custom token path from {TOKEN_PATH_VAR}: {}", path.display());
        return Ok(path);
    }

    let path = config_dir(env)?.join(APP_NAMESPACE).join(TOKEN_FILE_NAME);
    debug!("Using token path {}", path.display());
    Ok(path)
}

/// Returns the path of the legacy token file, for migration checks.
///
/// Ignores every environment variable.
///
/// # Errors
///
/// Returns [`Error::CurrentDir`] if the working directory cannot be read.
pub fn legacy_token_path(env: &impl Environment) -> Result<PathBuf> {
    let cwd = normalize(&env.current_dir()?);
    Ok(cwd.join(LEGACY_TOKEN_FILE_NAME))
}

/// Base configuration directory: `$XDG_CONFIG_HOME` or `~/.config`.
fn config_dir(env: &impl Environment) -> Result<PathBuf> {
    if let Some(xdg) = env.non_empty_var_os(XDG_CONFIG_HOME_VAR) {
        let dir = resolve_absolute(env, Path::new(&xdg))?;
        debug!("Using config directory from {XDG_CONFIG_HOME_VAR}: {}", dir.display());
        return Ok(dir);
    }

    let home = env.home_dir().ok_or(Error::HomeDirUnavailable)?;
    resolve_absolute(env, &home.join(DEFAULT_CONFIG_SUBDIR))
}

/// Makes `path` absolute against the working directory and normalizes it.
///
/// The working directory is only consulted for relative paths.
fn resolve_absolute(env: &impl Environment, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }
    Ok(normalize(&env.current_dir()?.join(path)))
}

/// Lexically removes `.` and `..` segments. Never climbs above the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Both token locations, resolved together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPaths {
    /// Current-format token store.
    pub secure: PathBuf,
    /// Legacy token file in the working directory.
    pub legacy: PathBuf,
}

impl TokenPaths {
    /// Resolves both token paths.
    ///
    /// # Errors
    ///
    /// Returns an error if either [`secure_token_path`] or
    /// [`legacy_token_path`] fails.
    pub fn resolve(env: &impl Environment) -> Result<Self> {
        Ok(Self {
            secure: secure_token_path(env)?,
            legacy: legacy_token_path(env)?,
        })
    }
}
