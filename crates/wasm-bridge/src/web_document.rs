//! Browser document implementing the rendering primitives over `web-sys`

use bar_chart_renderer::Document;
use bar_chart_shared::{BarChartError, BarChartResult};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// The page's `document`
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    /// Wrap the document of the current window
    pub fn current() -> BarChartResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| BarChartError::JsInterop {
                message: "No document available".to_string(),
            })?;
        Ok(Self { document })
    }

    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn html_element<'a>(&self, node: &'a Element) -> BarChartResult<&'a HtmlElement> {
        node.dyn_ref::<HtmlElement>()
            .ok_or_else(|| BarChartError::Style {
                message: format!("<{}> has no inline style", node.tag_name().to_lowercase()),
            })
    }
}

impl Document for WebDocument {
    type Node = Element;

    fn mount_point(&self, selector: &str) -> BarChartResult<Element> {
        self.document
            .query_selector(selector)
            .map_err(BarChartError::from)?
            .ok_or_else(|| BarChartError::MountPointNotFound {
                selector: selector.to_string(),
            })
    }

    fn append_element(&mut self, parent: &Element, tag: &str) -> BarChartResult<Element> {
        let element = self.document.create_element(tag)?;
        parent
            .append_child(&element)
            .map_err(|e| BarChartError::InvalidContainer {
                message: format!(
                    "<{}> rejected a child: {}",
                    parent.tag_name().to_lowercase(),
                    e.as_string().unwrap_or_else(|| format!("{e:?}"))
                ),
            })?;
        Ok(element)
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) -> BarChartResult<()> {
        self.html_element(node)?
            .style()
            .set_property(property, value)
            .map_err(BarChartError::from)
    }

    fn set_text(&mut self, node: &Element, text: &str) -> BarChartResult<()> {
        node.set_text_content(Some(text));
        Ok(())
    }
}
