// ABOUTME: Markdown to draft-body conversion entry points
// ABOUTME: Frontmatter split, parse, block walk, and doc assembly

mod block;
pub mod document;
pub mod frontmatter;
mod inline;
pub mod parser;
pub mod syntax;

use crate::Result;
use block::BlockConverter;
use serde::Serialize;
use tracing::debug;

pub use document::{ContentNode, Document, Mark, MarkType, NodeType};
pub use frontmatter::Frontmatter;
pub use parser::ComrakParser;
pub use syntax::MarkdownParser;

/// Everything a caller needs to build a draft from one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub title: String,
    pub frontmatter: Option<Frontmatter>,
    pub body: Document,
}

/// Converter over a replaceable parser.
#[derive(Debug, Clone, Default)]
pub struct Converter<P = ComrakParser> {
    parser: P,
}

impl<P: MarkdownParser> Converter<P> {
    pub fn new(parser: P) -> Self {
        Converter { parser }
    }

    /// Convert a full source file.
    ///
    /// A non-empty frontmatter `title` wins over the first level-1 heading,
    /// and in that case the heading is kept in the body.
    pub fn convert(&self, source: &[u8]) -> Result<Conversion> {
        let (frontmatter, body) = frontmatter::extract(source);
        let preset = frontmatter.as_ref().map(|fm| fm.title.as_str());
        let (title, body) = self.convert_body(body, preset)?;

        Ok(Conversion {
            title,
            frontmatter,
            body,
        })
    }

    /// Convert Markdown that has already had any frontmatter removed.
    pub fn convert_body(
        &self,
        source: &[u8],
        preset_title: Option<&str>,
    ) -> Result<(String, Document)> {
        let blocks = self.parser.parse(source)?;
        let (title, nodes) = BlockConverter::new(preset_title).convert(&blocks);
        debug!(
            blocks = blocks.len(),
            nodes = nodes.len(),
            has_title = !title.is_empty(),
            "converted markdown body"
        );
        Ok((title, Document::new(nodes)))
    }
}

/// Convert a source file with the default comrak parser.
pub fn convert(source: &[u8]) -> Result<Conversion> {
    Converter::<ComrakParser>::default().convert(source)
}

/// Convert a frontmatter-free body with the default comrak parser.
pub fn convert_body(source: &[u8], preset_title: Option<&str>) -> Result<(String, Document)> {
    Converter::<ComrakParser>::default().convert_body(source, preset_title)
}
