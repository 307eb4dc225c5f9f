//! WASM Bridge crate for the bar chart
//! Renders a bar chart into the page from JavaScript-supplied data

use bar_chart_data::{DataSource, StaticSource};
use bar_chart_renderer::{ChartRenderer, Document};
use bar_chart_shared::{BarChartResult, DataSet, ErrorResponse};
use wasm_bindgen::prelude::*;

pub mod promise_source;
pub mod web_document;

pub use promise_source::PromiseSource;
pub use web_document::WebDocument;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Acquire the data, then render one chart under the element matching
/// `selector`. The mount point is looked up only once the data has arrived.
async fn render_into<S: DataSource>(source: &S, selector: &str) -> BarChartResult<usize> {
    let data = source.fetch().await?;
    log::info!("Acquired {} values from {}", data.len(), source.describe());

    let mut document = WebDocument::current()?;
    let container = document.mount_point(selector)?;
    let chart = ChartRenderer::new().render(&mut document, &data, &container)?;
    Ok(chart.bar_count())
}

fn to_js_error(err: bar_chart_shared::BarChartError, operation: &str, selector: &str) -> JsValue {
    log::error!("{operation} failed for {selector}: {err}");
    JsValue::from_str(
        &ErrorResponse::new(err)
            .with_context("wasm-bridge", operation)
            .with_metadata(serde_json::json!({ "selector": selector }))
            .to_json(),
    )
}

/// Render `values` (an array of numbers) under `selector`.
/// Resolves to the number of bars created.
#[wasm_bindgen]
pub async fn render_bar_chart(values: JsValue, selector: String) -> Result<u32, JsValue> {
    let values: Vec<f64> = serde_wasm_bindgen::from_value(values).map_err(|e| {
        to_js_error(
            bar_chart_shared::BarChartError::DataParse {
                message: e.to_string(),
                offset: None,
            },
            "render_bar_chart",
            &selector,
        )
    })?;
    let source = StaticSource::new(DataSet::new(values));

    render_into(&source, &selector)
        .await
        .map(|count| count as u32)
        .map_err(|e| to_js_error(e, "render_bar_chart", &selector))
}

/// Await a host promise resolving to an array of numbers, then render it.
/// A rejected promise rejects the returned promise and renders nothing.
#[wasm_bindgen]
pub async fn render_bar_chart_from_promise(
    promise: js_sys::Promise,
    selector: String,
) -> Result<u32, JsValue> {
    let source = PromiseSource::new(promise);

    render_into(&source, &selector)
        .await
        .map(|count| count as u32)
        .map_err(|e| to_js_error(e, "render_bar_chart_from_promise", &selector))
}

/// Fetch a JSON or text payload from `url`, then render it.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn render_bar_chart_from_url(url: String, selector: String) -> Result<u32, JsValue> {
    let source = bar_chart_data::FetchSource::new(url);

    render_into(&source, &selector)
        .await
        .map(|count| count as u32)
        .map_err(|e| to_js_error(e, "render_bar_chart_from_url", &selector))
}
