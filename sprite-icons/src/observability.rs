//! Logging setup
//!
//! The library only emits `tracing` events. Binaries call [`init`] once to
//! install a subscriber.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directives when `RUST_LOG` is unset
#[must_use]
pub const fn default_directives() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,sprite_icons=trace"
    } else {
        "info"
    }
}

/// Initialize logging
///
/// Sets up:
/// - Pretty formatting in debug builds, JSON in release builds
/// - `RUST_LOG` based filtering, falling back to [`default_directives`]
///
/// Log output goes to stderr so rendered markup on stdout stays clean.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use sprite_icons::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives()));

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}
