//! lintrc core
//!
//! Assembles the ESLint configuration for the webapp frontend from a single
//! build-mode flag and emits it in the JSON shape ESLint consumes. This crate
//! owns the configuration value only; parsing, rule evaluation, and file
//! traversal belong to ESLint itself.

pub mod config;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use config::{BuildMode, LintConfig, MODE_VAR, RuleSetting, Severity, webapp_config};
pub use error::LintrcError;
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintrc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
