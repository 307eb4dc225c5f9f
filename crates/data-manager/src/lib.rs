//! Data Manager crate for the bar chart
//! Acquires the data set a chart is rendered from

pub mod parser;
pub mod source;

#[cfg(not(target_arch = "wasm32"))]
pub mod file_source;
#[cfg(not(target_arch = "wasm32"))]
pub mod http_source;

#[cfg(target_arch = "wasm32")]
pub mod wasm_fetch;

pub use parser::DataParser;
pub use source::{DataSource, StaticSource};

#[cfg(not(target_arch = "wasm32"))]
pub use file_source::FileSource;
#[cfg(not(target_arch = "wasm32"))]
pub use http_source::HttpSource;

#[cfg(target_arch = "wasm32")]
pub use wasm_fetch::FetchSource;

pub use bar_chart_shared::{BarChartError, BarChartResult, DataFormat, DataSet};
