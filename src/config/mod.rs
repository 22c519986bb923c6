mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./sorenson.toml",
        "~/.config/sorenson/config.toml",
        "/etc/sorenson/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.server.base_url.is_empty() {
        anyhow::bail!("Server base URL cannot be empty");
    }

    if config.server.timeout_secs == 0 {
        anyhow::bail!("Request timeout cannot be 0");
    }

    if config.presets.is_empty() {
        anyhow::bail!("Preset catalog cannot be empty");
    }

    for group in &config.presets {
        if group.presets.is_empty() {
            anyhow::bail!(
                "Aspect ratio '{}' is declared but has no presets",
                group.aspect_ratio
            );
        }
        for entry in &group.presets {
            if entry.preset_id.is_empty() {
                anyhow::bail!(
                    "Preset for {} {} has an empty identifier",
                    group.aspect_ratio,
                    entry.quality
                );
            }
        }
    }

    Ok(())
}
