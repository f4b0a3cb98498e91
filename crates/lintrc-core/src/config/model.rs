//! Configuration data model
//!
//! The types here mirror the subset of ESLint's config schema the webapp
//! uses. The assembled value is built once and never mutated afterwards.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rule severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disable the rule
    Off,
    /// Warning (doesn't fail the lint run)
    Warn,
    /// Error (fails the lint run)
    Error,
}

/// Configuration entry for a single rule
///
/// ESLint accepts either a bare severity (`"warn"`) or a severity paired
/// with rule options (`["warn", "always"]`); the untagged representation
/// serializes to exactly those two shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleSetting {
    /// Severity only
    Plain(Severity),
    /// Severity plus an auxiliary options value
    WithOptions(Severity, serde_json::Value),
}

impl RuleSetting {
    /// Severity-only entry
    pub fn plain(severity: Severity) -> Self {
        Self::Plain(severity)
    }

    /// Entry with an options value appended after the severity
    pub fn with_options(severity: Severity, options: impl Into<serde_json::Value>) -> Self {
        Self::WithOptions(severity, options.into())
    }

    /// The severity of this entry, regardless of shape
    pub fn severity(&self) -> Severity {
        match self {
            Self::Plain(severity) | Self::WithOptions(severity, _) => *severity,
        }
    }
}

/// The assembled linter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    /// Stop the consumer from searching parent directories for more configs
    #[schemars(description = "Mark this config as the project root")]
    pub root: bool,

    /// Runtime environments whose global identifiers are assumed available
    #[schemars(description = "Named runtime environments (browser, node, ...)")]
    pub env: IndexMap<String, bool>,

    /// Ordered preset references, expanded by the consumer; later entries
    /// override earlier ones when the consumer merges them
    #[schemars(description = "Preset rule bundles to extend, in order")]
    pub extends: Vec<String>,

    /// Per-rule severity overrides, taking precedence over preset values
    #[schemars(description = "Rule severity overrides")]
    pub rules: IndexMap<String, RuleSetting>,

    /// Path globs excluded from linting entirely
    #[schemars(description = "Glob patterns for files to exclude")]
    pub ignore_patterns: Vec<String>,
}
