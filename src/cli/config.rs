//! Config command handlers

use crate::cli::ConfigInitArgs;
use crate::config::SwitchboardConfig;
use std::fs;
use std::path::Path;

const EXAMPLE_CONFIG: &str = include_str!("../../switchboard.example.toml");

/// Load configuration for a command
///
/// Falls back to defaults (an empty roster) when the file does not exist.
/// Precedence: CLI log level > environment > file > defaults.
pub fn load_config(
    path: &Path,
    log_level: Option<&str>,
) -> Result<SwitchboardConfig, Box<dyn std::error::Error>> {
    let mut config = if path.exists() {
        SwitchboardConfig::load(Some(path))?
    } else {
        tracing::debug!(path = %path.display(), "Config file not found, using defaults");
        SwitchboardConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Handle `switchboard config init` command
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    fs::write(&args.output, EXAMPLE_CONFIG)?;

    println!("✓ Configuration file created: {}", args.output.display());
    println!("  Edit the [[agents]] entries to describe your support team.");

    Ok(())
}
