// ABOUTME: comrak-backed implementation of the MarkdownParser seam
// ABOUTME: Maps comrak's arena AST onto the owned syntax tree

use crate::markdown::syntax::{Block, Inline, MarkdownParser};
use crate::Result;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};

/// CommonMark parser with the strikethrough extension enabled.
///
/// Holds no state between calls; every parse gets its own arena.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakParser;

impl ComrakParser {
    fn options() -> Options<'static> {
        let mut options = Options::default();
        options.extension.strikethrough = true;
        options
    }
}

impl MarkdownParser for ComrakParser {
    fn parse(&self, source: &[u8]) -> Result<Vec<Block>> {
        let text = std::str::from_utf8(source)?;
        let arena = Arena::new();
        let root = parse_document(&arena, text, &Self::options());
        Ok(convert_blocks(root))
    }
}

fn convert_blocks<'a>(node: &'a AstNode<'a>) -> Vec<Block> {
    node.children().map(convert_block).collect()
}

fn convert_block<'a>(node: &'a AstNode<'a>) -> Block {
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Heading(heading) => Block::Heading {
            level: heading.level,
            content: convert_inlines(node),
        },

        NodeValue::Paragraph => Block::Paragraph(convert_inlines(node)),

        NodeValue::BlockQuote => Block::BlockQuote(convert_blocks(node)),

        NodeValue::CodeBlock(code) => Block::CodeBlock {
            // Info string may carry metadata after the language
            language: code
                .info
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string(),
            literal: code.literal.clone(),
        },

        NodeValue::List(list) => Block::List {
            ordered: matches!(list.list_type, ListType::Ordered),
            items: node.children().map(convert_blocks).collect(),
        },

        NodeValue::ThematicBreak => Block::ThematicBreak,

        _ => Block::Other(convert_inlines(node)),
    }
}

fn convert_inlines<'a>(node: &'a AstNode<'a>) -> Vec<Inline> {
    let mut inlines: Vec<Inline> = Vec::new();

    for child in node.children() {
        let ast = child.data.borrow();

        match &ast.value {
            NodeValue::Text(text) => inlines.push(Inline::text(text.to_string())),

            // Breaks belong to the text run they end
            NodeValue::SoftBreak | NodeValue::LineBreak => match inlines.last_mut() {
                Some(Inline::Text { soft_break, .. }) if !*soft_break => *soft_break = true,
                _ => inlines.push(Inline::Text {
                    text: String::new(),
                    soft_break: true,
                }),
            },

            NodeValue::Code(code) => inlines.push(Inline::Code(code.literal.clone())),

            NodeValue::Emph => inlines.push(Inline::Emphasis {
                level: 1,
                children: convert_inlines(child),
            }),

            NodeValue::Strong => inlines.push(Inline::Emphasis {
                level: 2,
                children: convert_inlines(child),
            }),

            NodeValue::Strikethrough => inlines.push(Inline::Strikethrough(convert_inlines(child))),

            NodeValue::Link(link) => inlines.push(convert_link(&link.url, convert_inlines(child))),

            _ => inlines.push(Inline::Other(convert_inlines(child))),
        }
    }

    inlines
}

/// comrak represents `<url>` autolinks as links whose only content is the
/// URL itself (minus `mailto:` for addresses).
fn convert_link(url: &str, children: Vec<Inline>) -> Inline {
    let is_autolink = match children.as_slice() {
        [Inline::Text {
            text,
            soft_break: false,
        }] => text == url || url.strip_prefix("mailto:") == Some(text.as_str()),
        _ => false,
    };

    if is_autolink {
        Inline::Autolink(url.to_string())
    } else {
        Inline::Link {
            destination: url.to_string(),
            children,
        }
    }
}
