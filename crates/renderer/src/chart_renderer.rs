//! Bar chart render pass
//!
//! One pass appends a wrapper `div` to the container and one bar `div` per
//! value under it, in input order. Bars are never updated or removed, and a
//! second pass creates a second wrapper next to the first.

use crate::document::Document;
use bar_chart_data::DataSource;
use bar_chart_shared::{BarChartResult, BarStyle, DataSet};
use std::cell::RefCell;

const WRAPPER_TAG: &str = "div";
const BAR_TAG: &str = "div";

/// Elements created by one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart<N> {
    pub wrapper: N,
    pub bars: Vec<N>,
}

impl<N> RenderedChart<N> {
    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }
}

/// Renders a data set as horizontal bars
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: BarStyle,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: BarStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    /// Run one render pass of `data` under `container`.
    ///
    /// Values are not validated: a negative value produces a negative width.
    /// Failing to create the wrapper aborts the pass before any bar exists.
    pub fn render<D: Document>(
        &self,
        doc: &mut D,
        data: &DataSet,
        container: &D::Node,
    ) -> BarChartResult<RenderedChart<D::Node>> {
        let wrapper = doc.append_element(container, WRAPPER_TAG)?;

        let mut bars = Vec::with_capacity(data.len());
        for value in data.iter() {
            let bar = doc.append_element(&wrapper, BAR_TAG)?;
            self.apply_bar_style(doc, &bar, value)?;
            bars.push(bar);
        }

        log::debug!("Rendered {} bars", bars.len());
        Ok(RenderedChart { wrapper, bars })
    }

    fn apply_bar_style<D: Document>(
        &self,
        doc: &mut D,
        bar: &D::Node,
        value: f64,
    ) -> BarChartResult<()> {
        doc.set_style(bar, "width", &self.style.bar_width(value))?;
        for (property, fixed) in self.style.fixed_properties() {
            doc.set_style(bar, property, fixed)?;
        }
        doc.set_text(bar, &self.style.label(value))
    }

    /// Await the data set from `source`, then render it.
    ///
    /// If the source fails its error is returned and the document is left
    /// untouched. The document is only borrowed after the data arrives, so
    /// concurrent calls against one document append their wrappers in the
    /// order their sources resolve.
    pub async fn render_from<S, D>(
        &self,
        source: &S,
        doc: &RefCell<D>,
        container: &D::Node,
    ) -> BarChartResult<RenderedChart<D::Node>>
    where
        S: DataSource,
        D: Document,
    {
        let data = source.fetch().await.map_err(|err| {
            log::warn!("Data acquisition from {} failed: {err}", source.describe());
            err
        })?;
        log::info!(
            "Acquired {} values from {}",
            data.len(),
            source.describe()
        );

        let mut doc = doc.borrow_mut();
        self.render(&mut *doc, &data, container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom_tree::DomTree;

    #[test]
    fn test_render_simple() {
        let mut tree = DomTree::new();
        let body = tree.body();

        let chart = ChartRenderer::new()
            .render(&mut tree, &DataSet::from(vec![1.0, 2.0, 3.0]), &body)
            .unwrap();

        assert_eq!(tree.children(body), vec![chart.wrapper]);
        assert_eq!(tree.children(chart.wrapper), chart.bars);

        let widths: Vec<_> = chart.bars.iter().map(|b| tree.style(*b, "width")).collect();
        assert_eq!(widths, vec![Some("10px"), Some("20px"), Some("30px")]);

        let texts: Vec<_> = chart.bars.iter().map(|b| tree.text_content(*b)).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_style_application_order() {
        let mut tree = DomTree::new();
        let body = tree.body();

        let chart = ChartRenderer::new()
            .render(&mut tree, &DataSet::from(vec![4.2]), &body)
            .unwrap();

        let properties: Vec<_> = tree
            .styles(chart.bars[0])
            .iter()
            .map(|(p, v)| (p.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            properties,
            vec![
                ("width", "42px"),
                ("background-color", "steelblue"),
                ("border", "1px solid white"),
                ("color", "white"),
                ("padding-left", "2px"),
            ]
        );
    }

    #[test]
    fn test_empty_data_creates_empty_wrapper() {
        let mut tree = DomTree::new();
        let body = tree.body();

        let chart = ChartRenderer::new()
            .render(&mut tree, &DataSet::default(), &body)
            .unwrap();

        assert_eq!(chart.bar_count(), 0);
        assert_eq!(tree.children(body), vec![chart.wrapper]);
        assert!(tree.children(chart.wrapper).is_empty());
    }

    #[test]
    fn test_invalid_container_creates_nothing() {
        let mut tree = DomTree::new();
        let body = tree.body();
        let img = tree.append_element(&body, "img").unwrap();
        let before = tree.len();

        let result = ChartRenderer::new().render(&mut tree, &DataSet::from(vec![1.0]), &img);

        assert!(result.is_err());
        assert_eq!(tree.len(), before);
    }
}
