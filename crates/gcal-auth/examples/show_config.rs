//! Example: print the resolved token locations and account mode
//!
//! ## Running
//!
//! ```bash
//! cargo run --package gcal-auth --example show_config
//!
//! # With overrides
//! GOOGLE_ACCOUNT_MODE=test XDG_CONFIG_HOME=/tmp/cfg \
//!     cargo run --package gcal-auth --example show_config
//! ```
//!
//! Set `RUST_LOG=gcal_auth=debug` to see which source each value came from.

use gcal_auth::{AuthConfig, EnvSnapshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gcal_auth=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Freeze the environment once so every value comes from the same state.
    let env = EnvSnapshot::capture();
    let config = AuthConfig::from_env(&env)?;

    println!("Account mode:      {}", config.account_mode());
    println!("Token path:        {}", config.secure_token_path().display());
    println!("Legacy token path: {}", config.legacy_token_path().display());
    println!();
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
