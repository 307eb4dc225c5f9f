//! Bar chart renderer
//!
//! Binds each value of a data set to a newly created element of a document
//! and styles it from that value. The document is abstracted behind the
//! [`Document`] trait; [`DomTree`] is the in-memory implementation used for
//! native rendering and HTML output.

pub mod chart_renderer;
pub mod document;
pub mod dom_tree;

pub use chart_renderer::{ChartRenderer, RenderedChart};
pub use document::Document;
pub use dom_tree::{DomTree, NodeId};
