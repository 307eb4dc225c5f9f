//! Common error types used across all bar chart crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all bar chart operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum BarChartError {
    // Data acquisition errors
    #[error("Data fetch failed: {message}")]
    DataFetch { message: String },

    #[error("Data parse error: {message}")]
    DataParse {
        message: String,
        offset: Option<usize>,
    },

    #[error("Data not found: {resource}")]
    DataNotFound { resource: String },

    #[error("Network request failed: {message}")]
    Network { message: String },

    #[error("Request timeout: {message}")]
    Timeout { message: String, duration_ms: u64 },

    // Document errors
    #[error("Mount point not found: {selector}")]
    MountPointNotFound { selector: String },

    #[error("Element cannot accept children: {message}")]
    InvalidContainer { message: String },

    #[error("Unknown document node: {id}")]
    InvalidNode { id: usize },

    #[error("Style update failed: {message}")]
    Style { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // Host errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Result type alias for bar chart operations
pub type BarChartResult<T> = Result<T, BarChartError>;

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: BarChartError,
    pub timestamp: u64,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
    pub metadata: serde_json::Value,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: BarChartError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis() as u64,
            context: None,
        }
    }

    /// Add context to the error response
    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
            metadata: serde_json::Value::Null,
        });
        self
    }

    /// Add metadata to the error context
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        if let Some(ref mut ctx) = self.context {
            ctx.metadata = metadata;
        }
        self
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"type":"Internal","details":{"message":"Failed to serialize error"}}}"#.to_string()
        })
    }
}

impl From<serde_json::Error> for BarChartError {
    fn from(err: serde_json::Error) -> Self {
        BarChartError::DataParse {
            message: err.to_string(),
            offset: Some(err.column()),
        }
    }
}

impl From<std::io::Error> for BarChartError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => BarChartError::DataNotFound {
                resource: err.to_string(),
            },
            _ => BarChartError::Io {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for BarChartError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        BarChartError::JsInterop {
            message: err
                .as_string()
                .unwrap_or_else(|| format!("{err:?}")),
        }
    }
}
