//! # gcal-auth
//!
//! Token storage locations and account mode for the Google Calendar MCP server.
//!
//! ## Features
//!
//! - **Secure token path**: `GOOGLE_CALENDAR_MCP_TOKEN_PATH`, then
//!   `$XDG_CONFIG_HOME/google-calendar-mcp/tokens.json`, then
//!   `~/.config/google-calendar-mcp/tokens.json`
//! - **Legacy token path**: `<cwd>/.gcp-saved-tokens.json`, for migration
//! - **Account mode**: `GOOGLE_ACCOUNT_MODE`, then `NODE_ENV=test`, then `normal`
//!
//! Paths are computed only; nothing is read, written or created.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gcal_auth::{AccountMode, AuthConfig, ProcessEnv, secure_token_path};
//!
//! # fn main() -> gcal_auth::Result<()> {
//! let tokens = secure_token_path(&ProcessEnv)?;
//! let mode = AccountMode::resolve(&ProcessEnv);
//! println!("{mode}: {}", tokens.display());
//!
//! // Or everything at once
//! let config = AuthConfig::from_process()?;
//! assert_eq!(config.secure_token_path(), tokens.as_path());
//! # Ok(())
//! # }
//! ```
//!
//! Resolvers take any [`Environment`], so tests can pass an [`EnvSnapshot`]
//! instead of mutating the process environment.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod env;
mod error;
pub mod mode;
pub mod paths;

pub use config::AuthConfig;
pub use env::{EnvSnapshot, Environment, ProcessEnv};
pub use error::{Error, Result};
pub use mode::AccountMode;
pub use paths::{TokenPaths, legacy_token_path, secure_token_path};
