//! TOML configuration file support.
//!
//! Instead of passing the same flags on every import, settings can live in a
//! config file:
//!
//! ```toml
//! # svdataset.toml
//! [import]
//! sample_rate = 48000.0
//! dimensions = 2
//! id = "0"
//!
//! [output]
//! indent = "    "
//! child_indent = "  "
//! escape_labels = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use svdataset::dataset::Dimensions;
use svdataset::xml::{LabelEscaping, XmlLayout};

/// Root configuration structure for svdataset.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Import-specific settings.
    #[serde(default)]
    pub import: ImportConfig,

    /// XML layout settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for the import command.
#[derive(Debug, Default, Deserialize)]
pub struct ImportConfig {
    /// Sample rate of the frame column.
    pub sample_rate: Option<f64>,

    /// Point geometry (1, 2 or 3).
    pub dimensions: Option<u8>,

    /// Dataset id.
    pub id: Option<String>,
}

/// Configuration for XML output.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Prefix for the dataset tags.
    pub indent: Option<String>,

    /// Extra prefix for point lines.
    pub child_indent: Option<String>,

    /// Escape markup characters in labels (default: true).
    pub escape_labels: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

impl ImportConfig {
    /// Configured geometry, if any.
    pub fn dimensions(&self) -> Result<Option<Dimensions>> {
        self.dimensions
            .map(|d| {
                Dimensions::try_from(d).map_err(|d| {
                    anyhow::anyhow!("Invalid dimensions in config: {} (expected 1, 2 or 3)", d)
                })
            })
            .transpose()
    }
}

impl OutputConfig {
    /// Build the XML layout, letting `--verbatim-labels` win over the file.
    pub fn layout(&self, verbatim_labels: bool) -> XmlLayout {
        let defaults = XmlLayout::default();
        let escape = !verbatim_labels && self.escape_labels.unwrap_or(true);

        XmlLayout {
            indent: self.indent.clone().unwrap_or(defaults.indent),
            child_indent: self.child_indent.clone().unwrap_or(defaults.child_indent),
            line_terminator: defaults.line_terminator,
            label_escaping: if escape {
                LabelEscaping::Escape
            } else {
                LabelEscaping::Verbatim
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [import]
            sample_rate = 48000.0
            dimensions = 3
            id = "7"

            [output]
            indent = "    "
            escape_labels = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.import.sample_rate, Some(48000.0));
        assert_eq!(config.import.dimensions().unwrap(), Some(Dimensions::Three));
        assert_eq!(config.import.id.as_deref(), Some("7"));

        let layout = config.output.layout(false);
        assert_eq!(layout.indent, "    ");
        assert_eq!(layout.child_indent, "  ");
        assert_eq!(layout.label_escaping, LabelEscaping::Verbatim);
    }

    #[test]
    fn test_verbatim_flag_overrides_config() {
        let config = Config::from_str("[output]\nescape_labels = true").unwrap();
        assert_eq!(
            config.output.layout(true).label_escaping,
            LabelEscaping::Verbatim
        );
    }

    #[test]
    fn test_invalid_dimensions() {
        let config = Config::from_str("[import]\ndimensions = 5").unwrap();
        assert!(config.import.dimensions().is_err());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.import.sample_rate, None);
        assert_eq!(config.output.layout(false), XmlLayout::default());
    }
}
