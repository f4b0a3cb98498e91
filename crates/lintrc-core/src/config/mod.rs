//! Configuration assembly for the webapp ESLint setup
//!
//! This module builds the single configuration value the external linter
//! consumes:
//! - Strong typing with serde and JSON Schema generation via schemars
//! - A closed severity set (`off` / `warn` / `error`) so invalid severities
//!   are unrepresentable
//! - Severities for a small set of rules computed from the build mode
//!   (`NODE_ENV`); everything else is a static literal
//!
//! ## Emitted shape
//!
//! The serialized form follows ESLint's config schema:
//!
//! ```json
//! {
//!   "root": true,
//!   "env": { "browser": true, "node": true, "es2022": true },
//!   "extends": ["plugin:vue/essential", "plugin:vuetify/base", "eslint:recommended"],
//!   "rules": {
//!     "no-console": "off",
//!     "vue/mustache-interpolation-spacing": ["warn", "always"]
//!   },
//!   "ignorePatterns": ["**/src/modules/**/*"]
//! }
//! ```
//!
//! Preset expansion, rule evaluation, and ignore-glob matching are all owned
//! by the consumer; this module only declares them, in order.

mod assemble;
mod emit;
mod model;

// Re-export main types
pub use assemble::{BuildMode, MODE_VAR, webapp_config};
pub use model::{LintConfig, RuleSetting, Severity};

/// JSON Schema for the configuration shape
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(LintConfig)
}
