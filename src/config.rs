// src/config.rs

use ratatui::style::Color;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use url::Url;

use crate::core::palette::{DEFAULT_FALLBACK, Palette};
use crate::logging::config_file;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/analyze";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid endpoint_url {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("invalid color {value:?} for {label:?}")]
    InvalidColor { label: String, value: String },
}

/// On-disk shape of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    endpoint_url: Option<String>,
    fallback_color: Option<String>,
    #[serde(default)]
    colors: BTreeMap<String, String>,
}

/// Everything the widget needs at construction time.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub endpoint_url: Url,
    pub palette: Palette,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint_url: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            palette: Palette::default(),
        }
    }
}

impl WidgetConfig {
    /// Loads the config from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_path(&config_file())
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No config file found, using defaults.");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path: path.to_path_buf(), source }),
        };

        let file: ConfigFile = toml::from_str(&source)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        info!(path = %path.display(), "Loaded config file.");
        Self::from_file(file)
    }

    fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let endpoint_url = match file.endpoint_url {
            Some(value) => parse_endpoint(&value)?,
            None => Self::default().endpoint_url,
        };

        let fallback = parse_color("fallback_color", file.fallback_color.as_deref().unwrap_or(DEFAULT_FALLBACK))?;
        let mut palette = Palette::default().with_fallback(fallback);
        for (label, hex) in &file.colors {
            palette.insert(label, parse_color(label, hex)?);
        }

        Ok(Self { endpoint_url, palette })
    }
}

fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl { value: value.to_string(), reason: e.to_string() })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}

fn parse_color(label: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidColor { label: label.to_string(), value: value.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::CONFIG_FILE;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WidgetConfig::from_path(&dir.path().join(CONFIG_FILE)).unwrap();

        assert_eq!(config.endpoint_url.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn file_overrides_and_extends_defaults() {
        let (_dir, path) = write_config(
            r##"
endpoint_url = "https://sentiment.example.com/v1/analyze"
fallback_color = "#101010"

[colors]
"neutral." = "#00ff00"
FURIOSO = "#aa0000"
"##,
        );

        let config = WidgetConfig::from_path(&path).unwrap();

        assert_eq!(config.endpoint_url.as_str(), "https://sentiment.example.com/v1/analyze");
        assert_eq!(config.palette.color_for("NEUTRAL"), Color::Rgb(0x00, 0xff, 0x00));
        assert_eq!(config.palette.color_for("Furioso"), Color::Rgb(0xaa, 0x00, 0x00));
        assert_eq!(config.palette.color_for("EMOCIONADO"), Color::Rgb(0x33, 0x80, 0xff));
        assert_eq!(config.palette.color_for("desconocido"), Color::Rgb(0x10, 0x10, 0x10));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let (_dir, path) = write_config(r#"endpoint_url = "not a url""#);
        assert!(matches!(WidgetConfig::from_path(&path), Err(ConfigError::InvalidUrl { .. })));

        let (_dir, path) = write_config(r#"endpoint_url = "ftp://example.com/analyze""#);
        assert!(matches!(WidgetConfig::from_path(&path), Err(ConfigError::InvalidUrl { .. })));

        let (_dir, path) = write_config("[colors]\nPOSITIVO = \"verdoso\"\n");
        assert!(matches!(
            WidgetConfig::from_path(&path),
            Err(ConfigError::InvalidColor { label, .. }) if label == "POSITIVO"
        ));
    }

    #[test]
    fn unknown_keys_are_a_parse_error() {
        let (_dir, path) = write_config("api_key = \"secret\"\n");
        assert!(matches!(WidgetConfig::from_path(&path), Err(ConfigError::Parse { .. })));
    }
}
