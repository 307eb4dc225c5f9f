use bar_chart_config::SourceConfig;
use bar_chart_data::{DataSource, FileSource, HttpSource, StaticSource};
use bar_chart_shared::{BarChartResult, DataSet};
use std::time::Duration;

/// Data source selected by configuration
pub enum ConfiguredSource {
    Inline(StaticSource),
    File(FileSource),
    Http(HttpSource),
}

impl ConfiguredSource {
    pub fn from_config(config: &SourceConfig) -> BarChartResult<Self> {
        Ok(match config {
            SourceConfig::Inline { values } => {
                ConfiguredSource::Inline(StaticSource::new(values.clone()))
            }
            SourceConfig::File { path, format } => {
                let source = FileSource::new(path);
                ConfiguredSource::File(match format {
                    Some(format) => source.with_format(*format),
                    None => source,
                })
            }
            SourceConfig::Http {
                url,
                format,
                timeout_ms,
            } => {
                let mut source = HttpSource::new(url)?;
                if let Some(format) = format {
                    source = source.with_format(*format);
                }
                if let Some(ms) = timeout_ms {
                    source = source.with_timeout(Duration::from_millis(*ms));
                }
                ConfiguredSource::Http(source)
            }
        })
    }
}

impl DataSource for ConfiguredSource {
    async fn fetch(&self) -> BarChartResult<DataSet> {
        match self {
            ConfiguredSource::Inline(source) => source.fetch().await,
            ConfiguredSource::File(source) => source.fetch().await,
            ConfiguredSource::Http(source) => source.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            ConfiguredSource::Inline(source) => source.describe(),
            ConfiguredSource::File(source) => source.describe(),
            ConfiguredSource::Http(source) => source.describe(),
        }
    }
}
