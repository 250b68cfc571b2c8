//! Rendering of the document model.
//!
//! The pipeline itself stops at the `DocumentSet`; renderers turn it into
//! files. The bundled renderer produces static HTML in the shape of the
//! classic schema-doc layout (summary, table list, one page per table,
//! global index and trigger pages).

mod html;

pub use html::HtmlRenderer;

use crate::emit::DocumentSet;

/// One output file.
#[derive(Debug, Clone)]
pub struct Page {
    /// File name relative to the output directory.
    pub file_name: String,
    pub contents: String,
}

/// Turns a document set into output files.
pub trait Renderer {
    fn render(&self, docs: &DocumentSet) -> Vec<Page>;
}
