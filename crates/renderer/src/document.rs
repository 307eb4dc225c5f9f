//! Rendering collaborator abstraction
//!
//! A chart only needs four things from the document it is drawn into: find a
//! mount point, append a child element, set a style property and set text.
//! Anything offering those primitives can host a chart, whether it is the
//! in-memory [`crate::DomTree`] or a browser document.

use bar_chart_shared::BarChartResult;

pub trait Document {
    /// Handle to an element of this document
    type Node: Clone;

    /// Locate an existing element that accepts children
    fn mount_point(&self, selector: &str) -> BarChartResult<Self::Node>;

    /// Create a new `tag` element as the last child of `parent`
    fn append_element(&mut self, parent: &Self::Node, tag: &str) -> BarChartResult<Self::Node>;

    /// Set an inline style property
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str) -> BarChartResult<()>;

    /// Replace the text content of an element
    fn set_text(&mut self, node: &Self::Node, text: &str) -> BarChartResult<()>;
}
