//! Startup configuration for the overlay.
//!
//! Configuration is read once, before the window opens, and handed to the
//! controller by value. Sources, lowest precedence first: built-in defaults,
//! an optional RON file, command-line overrides. Nothing is ever written back.

use std::path::{Path, PathBuf};

use egui::{Color32, Rgba};
use serde::Deserialize;

/// Border line thickness in points
pub const BORDER_THICKNESS: f32 = 4.0;

/// Border color used when none is configured
pub const DEFAULT_BORDER_COLOR: &str = "#ffffffff";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid border color {code:?}: {reason}")]
    InvalidBorderColor { code: String, reason: String },
}

/// On-disk shape of the config file. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub vignette_enabled: bool,
    pub border: BorderFile,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            vignette_enabled: true,
            border: BorderFile::default(),
        }
    }
}

/// Border section of the config file
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BorderFile {
    pub enabled: bool,
    /// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`
    pub color: String,
}

impl Default for BorderFile {
    fn default() -> Self {
        Self {
            enabled: false,
            color: DEFAULT_BORDER_COLOR.to_string(),
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub vignette_enabled: Option<bool>,
    pub border_enabled: Option<bool>,
    pub border_color: Option<String>,
}

/// Screen-edge border settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderConfig {
    pub enabled: bool,
    pub color: Rgba,
    pub thickness: f32,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Rgba::WHITE,
            thickness: BORDER_THICKNESS,
        }
    }
}

/// Validated overlay configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayConfig {
    pub vignette_enabled: bool,
    pub border: BorderConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            vignette_enabled: true,
            border: BorderConfig::default(),
        }
    }
}

impl OverlayConfig {
    /// Load configuration from an optional RON file and apply overrides
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => read_config_file(path)?,
            None => ConfigFile::default(),
        };
        Self::resolve(file, overrides)
    }

    /// Parse configuration from RON text (no overrides)
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let file = parse_config_file(source, Path::new("<inline>"))?;
        Self::resolve(file, &ConfigOverrides::default())
    }

    /// Merge file values with overrides and validate the border color
    pub fn resolve(file: ConfigFile, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let code = overrides
            .border_color
            .as_deref()
            .unwrap_or(&file.border.color);

        Ok(Self {
            vignette_enabled: overrides.vignette_enabled.unwrap_or(file.vignette_enabled),
            border: BorderConfig {
                enabled: overrides.border_enabled.unwrap_or(file.border.enabled),
                color: parse_color_code(code)?,
                thickness: BORDER_THICKNESS,
            },
        })
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_file(&contents, path)
}

fn parse_config_file(contents: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    ron::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse an HTML-style color code into a linear RGBA color
pub fn parse_color_code(code: &str) -> Result<Rgba, ConfigError> {
    Color32::from_hex(code.trim())
        .map(Rgba::from)
        .map_err(|err| ConfigError::InvalidBorderColor {
            code: code.to_string(),
            reason: format!("{:?}", err),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OverlayConfig::load(None, &ConfigOverrides::default()).unwrap();
        assert!(config.vignette_enabled);
        assert!(!config.border.enabled);
        assert_eq!(config.border.color, Rgba::WHITE);
        assert_eq!(config.border.thickness, BORDER_THICKNESS);
        assert_eq!(config, OverlayConfig::default());
    }

    #[test]
    fn test_parse_full_file() {
        let config = OverlayConfig::from_ron_str(
            r##"(
                vignette_enabled: false,
                border: (enabled: true, color: "#ff0000ff"),
            )"##,
        )
        .unwrap();

        assert!(!config.vignette_enabled);
        assert!(config.border.enabled);
        assert_eq!(config.border.color, Rgba::from(Color32::RED));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = OverlayConfig::from_ron_str("(border: (enabled: true))").unwrap();
        assert!(config.vignette_enabled);
        assert!(config.border.enabled);
        assert_eq!(config.border.color, Rgba::WHITE);
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = ConfigFile {
            vignette_enabled: true,
            border: BorderFile {
                enabled: false,
                color: "#000000".to_string(),
            },
        };
        let overrides = ConfigOverrides {
            vignette_enabled: Some(false),
            border_enabled: Some(true),
            border_color: Some("#00ff00".to_string()),
        };

        let config = OverlayConfig::resolve(file, &overrides).unwrap();
        assert!(!config.vignette_enabled);
        assert!(config.border.enabled);
        assert_eq!(config.border.color, Rgba::from(Color32::GREEN));
    }

    #[test]
    fn test_invalid_border_color_rejected() {
        let overrides = ConfigOverrides {
            border_color: Some("not-a-color".to_string()),
            ..Default::default()
        };
        let err = OverlayConfig::load(None, &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBorderColor { .. }));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let err = OverlayConfig::from_ron_str("(vignette_enabled: maybe)").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_reported_with_path() {
        let path = Path::new("/definitely/not/here/hudflash.ron");
        let err = OverlayConfig::load(Some(path), &ConfigOverrides::default()).unwrap_err();
        match err {
            ConfigError::Read { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_color_code_with_alpha() {
        let color = parse_color_code("#ff000080").unwrap();
        assert!((color.a() - 128.0 / 255.0).abs() < 1e-3);
    }
}
