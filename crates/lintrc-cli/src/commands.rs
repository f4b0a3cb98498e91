//! Command implementations for the lintrc CLI

use std::path::PathBuf;

use lintrc_core::{BuildMode, LintrcError, Result, config, webapp_config};
use tracing::debug;

/// Assemble the configuration and print or write it
pub fn generate_command(mode: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let mode = BuildMode::from_value(mode.as_deref());
    debug!("Assembling configuration for {:?}", mode);

    let config = webapp_config(mode);
    match output {
        Some(path) => {
            config.write_to(&path)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", config.to_json_pretty()?),
    }
    Ok(())
}

/// Compare a config file on disk against the assembled configuration
pub fn check_command(path: PathBuf, mode: Option<String>) -> Result<()> {
    let mode = BuildMode::from_value(mode.as_deref());
    let config = webapp_config(mode);

    if config.matches_file(&path)? {
        println!("{} is up to date", path.display());
        Ok(())
    } else {
        Err(LintrcError::config_error(format!(
            "{} differs from the assembled configuration; run 'lintrc generate --output {}'",
            path.display(),
            path.display()
        )))
    }
}

/// Print the JSON Schema for the configuration shape
pub fn schema_command() -> Result<()> {
    let schema = config::config_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
