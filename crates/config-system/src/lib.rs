//! Configuration system for the bar chart
//! Describes where the data comes from, where the chart is mounted and where
//! the rendered page goes

use bar_chart_shared::DataFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub mod parser;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser, ConfigSerializer};
pub use validation::ConfigValidator;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Complete bar chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    /// Selector of the element the chart wrapper is appended to
    pub mount: String,
    /// Number of independent render passes into the same document
    pub repeat: u32,
    pub source: SourceConfig,
    pub output: OutputConfig,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            mount: "body".to_string(),
            repeat: 1,
            source: SourceConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Where the data set is acquired from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Values written directly in the configuration
    Inline { values: Vec<f64> },
    /// Local data file
    File {
        path: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<DataFormat>,
    },
    /// Remote payload fetched over HTTP
    Http {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<DataFormat>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timeout_ms: Option<u64>,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Inline { values: Vec::new() }
    }
}

impl SourceConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            SourceConfig::Inline { .. } => "inline",
            SourceConfig::File { .. } => "file",
            SourceConfig::Http { .. } => "http",
        }
    }
}

/// Where the rendered page is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output file; standard output when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            title: "Bar Chart".to_string(),
        }
    }
}

impl BarChartConfig {
    /// Load, parse and validate a configuration file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = ConfigParser::parse_file(path.as_ref())?;
        ConfigValidator::validate(&config)?;
        log::debug!(
            "Loaded configuration from {} ({} source)",
            path.as_ref().display(),
            config.source.kind()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BarChartConfig::default();
        assert_eq!(config.mount, "body");
        assert_eq!(config.repeat, 1);
        assert_eq!(config.output.title, "Bar Chart");
        assert_eq!(config.source, SourceConfig::Inline { values: vec![] });
    }

    #[test]
    fn test_tagged_source() {
        let config: BarChartConfig = serde_json::from_str(
            r#"{"source": {"type": "http", "url": "http://localhost/values.json"}}"#,
        )
        .unwrap();

        assert_eq!(config.mount, "body");
        assert_eq!(
            config.source,
            SourceConfig::Http {
                url: "http://localhost/values.json".to_string(),
                format: None,
                timeout_ms: None,
            }
        );
        assert_eq!(config.source.kind(), "http");
    }
}
