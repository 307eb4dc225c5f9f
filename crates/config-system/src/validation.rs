//! Configuration validation utilities

use crate::{BarChartConfig, ConfigError, OutputConfig, Result, SourceConfig};
use url::Url;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &BarChartConfig) -> Result<()> {
        Self::validate_mount(&config.mount)?;

        if config.repeat == 0 {
            return Err(ConfigError::Validation(
                "Invalid repeat: 0. At least one render pass is required".to_string(),
            ));
        }

        Self::validate_source(&config.source)?;
        Self::validate_output(&config.output)?;

        Ok(())
    }

    /// Validate the mount selector
    fn validate_mount(mount: &str) -> Result<()> {
        let mount = mount.trim();
        if mount.is_empty() {
            return Err(ConfigError::Validation(
                "Mount selector must not be empty".to_string(),
            ));
        }
        if mount == "#" || mount == "." {
            return Err(ConfigError::Validation(format!(
                "Invalid mount selector: {mount:?}"
            )));
        }
        Ok(())
    }

    /// Validate the data source settings
    fn validate_source(source: &SourceConfig) -> Result<()> {
        match source {
            // Values are deliberately not range-checked; negative bars are allowed
            SourceConfig::Inline { .. } => Ok(()),
            SourceConfig::File { path, .. } => {
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::Validation(
                        "File source path must not be empty".to_string(),
                    ));
                }
                Ok(())
            }
            SourceConfig::Http {
                url, timeout_ms, ..
            } => {
                let parsed = Url::parse(url).map_err(|e| {
                    ConfigError::Validation(format!("Invalid source url {url:?}: {e}"))
                })?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(ConfigError::Validation(format!(
                        "Unsupported url scheme: {}. Must be http or https",
                        parsed.scheme()
                    )));
                }
                if *timeout_ms == Some(0) {
                    return Err(ConfigError::Validation(
                        "Invalid timeout_ms: 0. Omit the field to disable the timeout"
                            .to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Validate output settings
    fn validate_output(output: &OutputConfig) -> Result<()> {
        if let Some(path) = &output.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(
                    "Output path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
