//! Data source wrapping a host promise

use bar_chart_data::DataSource;
use bar_chart_shared::{BarChartError, BarChartResult, DataSet};
use std::cell::RefCell;
use wasm_bindgen_futures::JsFuture;

/// Awaits a JavaScript promise that resolves to an array of numbers.
///
/// A promise settles once, so the source can be fetched once; a rejected
/// promise surfaces as a `DataFetch` error.
pub struct PromiseSource {
    promise: RefCell<Option<js_sys::Promise>>,
}

impl PromiseSource {
    pub fn new(promise: js_sys::Promise) -> Self {
        Self {
            promise: RefCell::new(Some(promise)),
        }
    }
}

impl DataSource for PromiseSource {
    async fn fetch(&self) -> BarChartResult<DataSet> {
        let promise = self
            .promise
            .borrow_mut()
            .take()
            .ok_or_else(|| BarChartError::Internal {
                message: "Promise already consumed".to_string(),
            })?;

        let value = JsFuture::from(promise)
            .await
            .map_err(|e| BarChartError::DataFetch {
                message: e.as_string().unwrap_or_else(|| format!("{e:?}")),
            })?;

        let values: Vec<f64> =
            serde_wasm_bindgen::from_value(value).map_err(|e| BarChartError::DataParse {
                message: e.to_string(),
                offset: None,
            })?;
        Ok(DataSet::new(values))
    }

    fn describe(&self) -> String {
        "host promise".to_string()
    }
}
