//! Configuration file parser for multiple formats

use crate::{BarChartConfig, ConfigError, Result};
use std::fs;
use std::path::Path;

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Configuration parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse configuration from a file
    pub fn parse_file(path: impl AsRef<Path>) -> Result<BarChartConfig> {
        let path = path.as_ref();

        // Detect format before touching the file
        let format = Self::detect_format(path)?;

        let content = fs::read_to_string(path)?;

        Self::parse_string(&content, format)
    }

    /// Parse configuration from a string
    pub fn parse_string(content: &str, format: ConfigFormat) -> Result<BarChartConfig> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("YAML parse error: {e}"))),
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("JSON parse error: {e}"))),
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("TOML parse error: {e}"))),
        }
    }

    /// Detect configuration format from file extension
    pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ConfigError::Parse("Cannot determine config format from file extension".to_string())
        })?;

        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::Parse(format!(
                "Unsupported config format: {ext}"
            ))),
        }
    }
}

/// Configuration serializer
pub struct ConfigSerializer;

impl ConfigSerializer {
    /// Serialize configuration to a file
    pub fn serialize_file(config: &BarChartConfig, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ConfigParser::detect_format(path)?;
        let content = Self::serialize_string(config, format)?;
        fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Serialize configuration to a string
    pub fn serialize_string(config: &BarChartConfig, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Yaml => serde_yaml::to_string(config)
                .map_err(|e| ConfigError::Parse(format!("YAML serialize error: {e}"))),
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map_err(|e| ConfigError::Parse(format!("JSON serialize error: {e}"))),
            ConfigFormat::Toml => toml::to_string_pretty(config)
                .map_err(|e| ConfigError::Parse(format!("TOML serialize error: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SourceConfig;
    use bar_chart_shared::DataFormat;

    #[test]
    fn test_parse_yaml() {
        let yaml = r##"
mount: "#chart"
repeat: 2
source:
  type: file
  path: data/values.csv
  format: text
output:
  path: chart.html
  title: Weekly totals
"##;
        let config = ConfigParser::parse_string(yaml, ConfigFormat::Yaml).unwrap();

        assert_eq!(config.mount, "#chart");
        assert_eq!(config.repeat, 2);
        assert_eq!(
            config.source,
            SourceConfig::File {
                path: "data/values.csv".into(),
                format: Some(DataFormat::Text),
            }
        );
        assert_eq!(config.output.title, "Weekly totals");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
mount = "body"

[source]
type = "inline"
values = [1.0, 2.0, 3.0]
"#;
        let config = ConfigParser::parse_string(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(
            config.source,
            SourceConfig::Inline {
                values: vec![1.0, 2.0, 3.0]
            }
        );
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_parse_errors() {
        let err = ConfigParser::parse_string("{", ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref msg) if msg.starts_with("JSON parse error")));

        let err = ConfigParser::parse_string(
            r#"{"source": {"type": "ftp"}}"#,
            ConfigFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            ConfigParser::detect_format(Path::new("chart.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigParser::detect_format(Path::new("chart.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert!(ConfigParser::detect_format(Path::new("chart.ini")).is_err());
        assert!(ConfigParser::detect_format(Path::new("chart")).is_err());
    }

    #[test]
    fn test_serialize_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.toml");

        let config = BarChartConfig {
            source: SourceConfig::Http {
                url: "https://example.com/values.json".to_string(),
                format: None,
                timeout_ms: Some(2_000),
            },
            ..Default::default()
        };

        ConfigSerializer::serialize_file(&config, &path).unwrap();
        let loaded = ConfigParser::parse_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
