//! Browser data source using the fetch API

use crate::parser::DataParser;
use crate::source::DataSource;
use bar_chart_shared::{BarChartError, BarChartResult, DataFormat, DataSet};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(context: &str, err: JsValue) -> BarChartError {
    BarChartError::Network {
        message: format!(
            "{context}: {}",
            err.as_string().unwrap_or_else(|| format!("{err:?}"))
        ),
    }
}

/// WASM-compatible data source backed by the browser's `fetch`
#[derive(Debug, Clone)]
pub struct FetchSource {
    url: String,
    format: Option<DataFormat>,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: DataFormat) -> Self {
        self.format = Some(format);
        self
    }

    fn resolve_format(&self, content_type: Option<&str>) -> DataFormat {
        let path = self.url.split(['?', '#']).next().unwrap_or_default();
        self.format
            .or_else(|| content_type.and_then(DataFormat::from_content_type))
            .or_else(|| DataFormat::from_path(path))
            .unwrap_or(DataFormat::Json)
    }
}

impl DataSource for FetchSource {
    async fn fetch(&self) -> BarChartResult<DataSet> {
        let opts = RequestInit::new();
        opts.set_method("GET");

        let headers = Headers::new().map_err(|e| js_error("Failed to create headers", e))?;
        headers
            .set("Accept", "application/json, text/plain")
            .map_err(|e| js_error("Failed to set headers", e))?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| js_error("Failed to create request", e))?;

        let window = web_sys::window().ok_or_else(|| BarChartError::JsInterop {
            message: "No window object available".to_string(),
        })?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("Fetch failed", e))?;
        let resp: Response = resp_value.dyn_into().map_err(|_| BarChartError::Network {
            message: "Invalid response type".to_string(),
        })?;

        if !resp.ok() {
            return Err(BarChartError::Network {
                message: format!("HTTP error! status: {} (URL: {})", resp.status(), self.url),
            });
        }

        let content_type = resp.headers().get("Content-Type").ok().flatten();
        let format = self.resolve_format(content_type.as_deref());

        let text = JsFuture::from(
            resp.text()
                .map_err(|e| js_error("Failed to read response body", e))?,
        )
        .await
        .map_err(|e| js_error("Failed to read response body", e))?;

        let body = text.as_string().ok_or_else(|| BarChartError::DataParse {
            message: "Response body is not text".to_string(),
            offset: None,
        })?;

        DataParser::parse(&body, format)
    }

    fn describe(&self) -> String {
        format!("fetch {}", self.url)
    }
}
