//! Tool configuration — an optional `batchcrop.toml`.
//!
//! Configuration covers the knobs that rarely change between runs: encode
//! quality and a default dimension list used when no `--dim` is given on the
//! command line. CLI arguments always win over configured values.
//!
//! Missing file means stock defaults; a present-but-broken file is an error
//! rather than a silent fallback.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "batchcrop.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CropConfig {
    /// Lossy encode quality, 1-100. Clamped at use.
    pub quality: u32,
    /// Default target dimensions (`"WxH"` strings) used when the command
    /// line passes none. Validated exactly like `--dim` arguments.
    pub dimensions: Vec<String>,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            quality: 90,
            dimensions: Vec::new(),
        }
    }
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_config(path: &Path) -> Result<CropConfig, ConfigError> {
    if !path.exists() {
        return Ok(CropConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// A documented stock config, printed by `batchcrop gen-config`.
pub fn stock_config_toml() -> String {
    "\
# batchcrop configuration
#
# Drop this file next to where you run batchcrop (or point at it with
# --config). Command-line flags override everything here.

# Lossy encode quality for JPEG output, 1-100.
quality = 90

# Target dimensions applied when no --dim flag is given.
# Each entry is \"WIDTHxHEIGHT\" in pixels.
dimensions = []

# Example:
# dimensions = [\"1920x1080\", \"800x600\", \"400x400\"]
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/batchcrop.toml")).unwrap();
        assert_eq!(config, CropConfig::default());
        assert_eq!(config.quality, 90);
        assert!(config.dimensions.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "quality = 75\ndimensions = [\"800x600\", \"400x400\"]\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.quality, 75);
        assert_eq!(config.dimensions, vec!["800x600", "400x400"]);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "quality = 60\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.quality, 60);
        assert!(config.dimensions.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "qualty = 60\n").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn stock_config_round_trips() {
        let config: CropConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(config, CropConfig::default());
    }
}
