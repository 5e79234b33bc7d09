//! Account mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::env::{ACCOUNT_MODE_VAR, Environment, NODE_ENV_VAR};
use crate::error::Error;

/// Which set of credentials and data the process operates on.
///
/// `Test` keeps test runs isolated from the real account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountMode {
    /// Test account.
    Test,
    /// Regular account.
    #[default]
    Normal,
}

impl AccountMode {
    /// Resolves the account mode from the environment.
    ///
    /// 1. `GOOGLE_ACCOUNT_MODE`, lowercased, if it is `test` or `normal`.
    ///    Any other value is ignored.
    /// 2. `test` if `NODE_ENV` is exactly `test`.
    /// 3. `normal`.
    #[must_use]
    pub fn resolve(env: &impl Environment) -> Self {
        if let Some(explicit) = env.var(ACCOUNT_MODE_VAR) {
            match explicit.parse::<Self>() {
                Ok(mode) => {
                    debug!("Using account mode {mode} from {ACCOUNT_MODE_VAR}");
                    return mode;
                }
                Err(e) => debug!("Ignoring {ACCOUNT_MODE_VAR}: {e}"),
            }
        }

        if env.var(NODE_ENV_VAR).as_deref() == Some("test") {
            debug!("Detected test environment from {NODE_ENV_VAR}");
            return Self::Test;
        }

        Self::Normal
    }

    /// Returns the lowercase name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Normal => "normal",
        }
    }

    /// Returns true for [`AccountMode::Test`].
    #[must_use]
    pub const fn is_test(self) -> bool {
        matches!(self, Self::Test)
    }
}

impl fmt::Display for AccountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountMode {
    type Err = Error;

    /// Parses `test` or `normal`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" => Ok(Self::Test),
            "normal" => Ok(Self::Normal),
            _ => Err(Error::InvalidAccountMode(s.to_string())),
        }
    }
}
