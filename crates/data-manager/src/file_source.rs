//! Data source reading a local file

use crate::parser::DataParser;
use crate::source::DataSource;
use bar_chart_shared::{BarChartError, BarChartResult, DataFormat, DataSet};
use std::path::{Path, PathBuf};

/// Reads and parses a data file. The format is taken from the explicit
/// setting or from the file extension.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: Option<DataFormat>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: DataFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve_format(&self) -> BarChartResult<DataFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(DataFormat::from_extension)
            .ok_or_else(|| BarChartError::InvalidConfig {
                message: format!(
                    "Cannot determine data format of {}",
                    self.path.display()
                ),
                field: Some("format".to_string()),
            })
    }
}

impl DataSource for FileSource {
    async fn fetch(&self) -> BarChartResult<DataSet> {
        let format = self.resolve_format()?;
        log::debug!("Reading {} as {}", self.path.display(), format.as_str());

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => BarChartError::DataNotFound {
                    resource: self.path.display().to_string(),
                },
                _ => BarChartError::Io {
                    message: format!("{}: {e}", self.path.display()),
                },
            })?;

        DataParser::parse(&content, format)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
