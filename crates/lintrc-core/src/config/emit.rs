//! Serialization of the assembled configuration
//!
//! The consumer loads the serialized form from a well-known path; this
//! module writes that form and can compare it against what is already on
//! disk.

use std::fs;
use std::path::Path;

use crate::error::LintrcError;
use crate::result::Result;

use super::model::LintConfig;

impl LintConfig {
    /// Serialize to pretty-printed JSON, with a trailing newline
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    /// Write the serialized form to `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| LintrcError::io_error(path, e))?;
        tracing::debug!("Wrote config: {}", path.display());
        Ok(())
    }

    /// Compare this configuration against a serialized one on disk
    ///
    /// Returns `Ok(false)` when the file parses but differs in value.
    /// An unreadable or unparseable file is an error.
    pub fn matches_file(&self, path: &Path) -> Result<bool> {
        let raw = fs::read_to_string(path).map_err(|e| LintrcError::io_error(path, e))?;
        let on_disk: LintConfig = serde_json::from_str(&raw).map_err(|e| {
            LintrcError::config_error(format!("Failed to parse '{}': {e}", path.display()))
        })?;
        Ok(on_disk == *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildMode, webapp_config};
    use tempfile::TempDir;

    #[test]
    fn test_to_json_pretty_shape() {
        let json = webapp_config(BuildMode::Production).to_json_pretty().unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with("}\n"));
        assert!(json.contains(r#""root": true"#));
        assert!(json.contains(r#""no-console": "error""#));
        assert!(json.contains(r#""ignorePatterns""#));
    }

    #[test]
    fn test_write_then_match() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".eslintrc.json");

        let config = webapp_config(BuildMode::Development);
        config.write_to(&path).unwrap();

        assert!(config.matches_file(&path).unwrap());
    }

    #[test]
    fn test_mode_mismatch_is_drift() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".eslintrc.json");

        webapp_config(BuildMode::Development)
            .write_to(&path)
            .unwrap();

        let production = webapp_config(BuildMode::Production);
        assert!(!production.matches_file(&path).unwrap());
    }

    #[test]
    fn test_match_against_missing_file() {
        let config = webapp_config(BuildMode::Development);
        let result = config.matches_file(Path::new("nonexistent.json"));
        assert!(matches!(result, Err(LintrcError::IoError { .. })));
    }

    #[test]
    fn test_match_against_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".eslintrc.json");
        fs::write(&path, "{ invalid json }").unwrap();

        let config = webapp_config(BuildMode::Development);
        let result = config.matches_file(&path);
        assert!(matches!(result, Err(LintrcError::ConfigError { .. })));
    }
}
