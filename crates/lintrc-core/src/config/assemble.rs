//! The configuration assembler
//!
//! A pure mapping from the build mode to the fully populated configuration
//! value. Assembly cannot fail: an absent or unrecognized mode degrades to
//! the development branch.

use indexmap::IndexMap;

use super::model::{LintConfig, RuleSetting, Severity};

/// Environment variable the build mode is read from
pub const MODE_VAR: &str = "NODE_ENV";

/// Deployment flavor the configuration is assembled for
///
/// Only the literal `production` is strict; every other value, including an
/// unset variable, resolves to [`BuildMode::Development`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Strict mode: debugging aids become hard errors
    Production,
    /// Lenient mode for local development
    #[default]
    Development,
}

impl BuildMode {
    /// Resolve the mode from an optional raw value
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    /// Resolve the mode from the process environment (`NODE_ENV`)
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(MODE_VAR).ok().as_deref())
    }

    /// Severity for rules that are only enforced in production builds
    fn strict_severity(self) -> Severity {
        match self {
            Self::Production => Severity::Error,
            Self::Development => Severity::Off,
        }
    }
}

/// Assemble the configuration for the webapp frontend
///
/// `no-console` and `no-debugger` are the only mode-sensitive entries; the
/// remaining overrides are static. Preset order and the ignore glob set are
/// emitted exactly as declared here.
pub fn webapp_config(mode: BuildMode) -> LintConfig {
    let gated = RuleSetting::plain(mode.strict_severity());
    let warn = || RuleSetting::plain(Severity::Warn);

    LintConfig {
        root: true,
        env: IndexMap::from([
            ("browser".to_string(), true),
            ("node".to_string(), true),
            ("es2022".to_string(), true),
        ]),
        extends: vec![
            "plugin:vue/essential".to_string(),
            "plugin:vuetify/base".to_string(),
            "eslint:recommended".to_string(),
        ],
        rules: IndexMap::from([
            ("no-console".to_string(), gated.clone()),
            ("no-debugger".to_string(), gated),
            ("vue/v-bind-style".to_string(), warn()),
            ("vue/v-on-style".to_string(), warn()),
            ("vue/v-slot-style".to_string(), warn()),
            (
                "vue/mustache-interpolation-spacing".to_string(),
                RuleSetting::with_options(Severity::Warn, "always"),
            ),
            ("vue/no-multi-spaces".to_string(), warn()),
            // vue3 migration prep
            ("vue/no-deprecated-filter".to_string(), warn()),
            ("vue/no-deprecated-v-on-number-modifiers".to_string(), warn()),
            ("vue/no-deprecated-html-element-is".to_string(), warn()),
        ]),
        ignore_patterns: vec!["**/src/modules/**/*".to_string()],
    }
}
