//! Native HTTP data source

use crate::parser::DataParser;
use crate::source::DataSource;
use bar_chart_shared::{BarChartError, BarChartResult, DataFormat, DataSet};
use std::time::Duration;
use url::Url;

/// Fetches a data payload with a GET request.
///
/// No timeout is applied unless one is configured. The payload format is the
/// explicit setting, else the response `Content-Type`, else the URL path
/// extension, else JSON.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    format: Option<DataFormat>,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> BarChartResult<Self> {
        let url = Url::parse(url).map_err(|e| BarChartError::InvalidConfig {
            message: format!("Invalid URL {url:?}: {e}"),
            field: Some("url".to_string()),
        })?;
        Ok(Self {
            url,
            format: None,
            timeout: None,
            client: reqwest::Client::new(),
        })
    }

    pub fn with_format(mut self, format: DataFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn resolve_format(&self, content_type: Option<&str>) -> DataFormat {
        self.format
            .or_else(|| content_type.and_then(DataFormat::from_content_type))
            .or_else(|| DataFormat::from_path(self.url.path()))
            .unwrap_or(DataFormat::Json)
    }

    fn map_request_error(&self, err: reqwest::Error) -> BarChartError {
        if err.is_timeout() {
            BarChartError::Timeout {
                message: format!("{err} (URL: {})", self.url),
                duration_ms: self
                    .timeout
                    .map(|t| t.as_millis() as u64)
                    .unwrap_or_default(),
            }
        } else {
            BarChartError::Network {
                message: format!("{err} (URL: {})", self.url),
            }
        }
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self) -> BarChartResult<DataSet> {
        log::debug!("Fetching {}", self.url);

        let mut request = self.client.get(self.url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BarChartError::Network {
                message: format!("HTTP error! status: {status} (URL: {})", self.url),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let format = self.resolve_format(content_type.as_deref());

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;

        DataParser::parse_bytes(&body, format)
    }

    fn describe(&self) -> String {
        format!("http {}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        let err = HttpSource::new("not a url").unwrap_err();
        assert!(matches!(err, BarChartError::InvalidConfig { .. }));
    }

    #[test]
    fn test_format_resolution() {
        let source = HttpSource::new("http://localhost:8080/values.txt").unwrap();
        assert_eq!(
            source.resolve_format(Some("application/json")),
            DataFormat::Json
        );
        assert_eq!(source.resolve_format(None), DataFormat::Text);
        assert_eq!(
            source
                .clone()
                .with_format(DataFormat::Json)
                .resolve_format(Some("text/plain")),
            DataFormat::Json
        );

        let bare = HttpSource::new("http://localhost:8080/api/data").unwrap();
        assert_eq!(bare.resolve_format(None), DataFormat::Json);
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Port 9 (discard) on localhost is not expected to accept connections
        let source = HttpSource::new("http://127.0.0.1:9/values.json")
            .unwrap()
            .with_timeout(Duration::from_secs(5));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(
            err,
            BarChartError::Network { .. } | BarChartError::Timeout { .. }
        ));
    }
}
