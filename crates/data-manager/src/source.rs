//! Data source abstraction

use bar_chart_shared::{BarChartResult, DataSet};

/// An asynchronous producer of a single data set.
///
/// `fetch` resolves to the data set or fails; a failed fetch means no render
/// pass takes place. Futures are not required to be `Send` so that browser
/// sources can implement this trait.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch(&self) -> BarChartResult<DataSet>;

    /// Short description used in log messages
    fn describe(&self) -> String;
}

/// Source that yields a fixed data set
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    data: DataSet,
}

impl StaticSource {
    pub fn new(data: impl Into<DataSet>) -> Self {
        Self { data: data.into() }
    }
}

impl DataSource for StaticSource {
    async fn fetch(&self) -> BarChartResult<DataSet> {
        Ok(self.data.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} values)", self.data.len())
    }
}
