//! Resolved authentication configuration for application startup.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::env::{Environment, ProcessEnv};
use crate::error::Result;
use crate::mode::AccountMode;
use crate::paths::TokenPaths;

/// Token locations and account mode, resolved together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthConfig {
    token_paths: TokenPaths,
    account_mode: AccountMode,
}

impl AuthConfig {
    /// Resolves the configuration from the given environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the token paths cannot be resolved.
    pub fn from_env(env: &impl Environment) -> Result<Self> {
        let config = Self {
            token_paths: TokenPaths::resolve(env)?,
            account_mode: AccountMode::resolve(env),
        };

        info!(
            "Account mode {}, tokens at {}",
            config.account_mode,
            config.token_paths.secure.display()
        );
        Ok(config)
    }

    /// Resolves the configuration from the live process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the token paths cannot be resolved.
    pub fn from_process() -> Result<Self> {
        Self::from_env(&ProcessEnv)
    }

    /// Secure and legacy token paths.
    #[must_use]
    pub const fn token_paths(&self) -> &TokenPaths {
        &self.token_paths
    }

    /// Path of the current-format token store.
    #[must_use]
    pub fn secure_token_path(&self) -> &Path {
        &self.token_paths.secure
    }

    /// Path of the legacy token file.
    #[must_use]
    pub fn legacy_token_path(&self) -> &Path {
        &self.token_paths.legacy
    }

    /// Active account mode.
    #[must_use]
    pub const fn account_mode(&self) -> AccountMode {
        self.account_mode
    }

    /// Returns true when running against the test account.
    #[must_use]
    pub const fn is_test_mode(&self) -> bool {
        self.account_mode.is_test()
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::env::{ACCOUNT_MODE_VAR, EnvSnapshot, TOKEN_PATH_VAR};
    use crate::error::Error;

    #[test]
    fn test_from_env() {
        let env = EnvSnapshot::new()
            .with_current_dir("/work")
            .with_home_dir("/home/alice")
            .with_var(ACCOUNT_MODE_VAR, "Test");

        let config = AuthConfig::from_env(&env).unwrap();
        assert!(config.is_test_mode());
        assert_eq!(config.account_mode(), AccountMode::Test);
        assert_eq!(
            config.secure_token_path(),
            Path::new("/home/alice/.config/google-calendar-mcp/tokens.json")
        );
        assert_eq!(
            config.legacy_token_path(),
            Path::new("/work/.gcp-saved-tokens.json")
        );
    }

    #[test]
    fn test_token_paths_accessor() {
        let env = EnvSnapshot::new()
            .with_current_dir("/work")
            .with_home_dir("/home/alice");

        let config = AuthConfig::from_env(&env).unwrap();
        assert_eq!(config.token_paths(), &TokenPaths::resolve(&env).unwrap());
        assert_eq!(config.token_paths().secure, config.secure_token_path());
        assert_eq!(config.token_paths().legacy, config.legacy_token_path());
    }

    #[test]
    fn test_from_env_propagates_path_errors() {
        let env = EnvSnapshot::new().with_var(TOKEN_PATH_VAR, "/t.json");
        assert!(matches!(
            AuthConfig::from_env(&env),
            Err(Error::CurrentDir(_))
        ));
    }

    #[test]
    fn test_serialize() {
        let env = EnvSnapshot::new()
            .with_current_dir("/work")
            .with_var(TOKEN_PATH_VAR, "/t.json");
        let config = AuthConfig::from_env(&env).unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["account_mode"], "normal");
        assert_eq!(json["token_paths"]["secure"], "/t.json");
        assert_eq!(json["token_paths"]["legacy"], "/work/.gcp-saved-tokens.json");
    }
}
