// ABOUTME: Parser-neutral Markdown syntax tree consumed by the converter
// ABOUTME: Any parser that can produce these nodes can back the conversion

use crate::Result;

/// Block-level syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    BlockQuote(Vec<Block>),
    /// Fenced or indented code. `language` is empty when no info string was given.
    CodeBlock { language: String, literal: String },
    List { ordered: bool, items: Vec<Vec<Block>> },
    ThematicBreak,
    /// Anything the converter has no dedicated rule for, reduced to its inline text.
    Other(Vec<Inline>),
}

/// Inline-level syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// A run of text; `soft_break` is set when a line break follows it.
    Text { text: String, soft_break: bool },
    Code(String),
    /// `level` 1 is emphasis, 2 is strong emphasis.
    Emphasis { level: u8, children: Vec<Inline> },
    Strikethrough(Vec<Inline>),
    Link { destination: String, children: Vec<Inline> },
    Autolink(String),
    Other(Vec<Inline>),
}

impl Inline {
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text {
            text: text.into(),
            soft_break: false,
        }
    }

    /// Plain text of this span and its descendants, ignoring formatting.
    pub fn plain_text(&self, out: &mut String) {
        match self {
            Inline::Text { text, .. } => out.push_str(text),
            Inline::Code(literal) | Inline::Autolink(literal) => out.push_str(literal),
            Inline::Emphasis { children, .. }
            | Inline::Strikethrough(children)
            | Inline::Link { children, .. }
            | Inline::Other(children) => {
                for child in children {
                    child.plain_text(out);
                }
            }
        }
    }
}

/// Source of syntax trees for the converter.
///
/// Implementations must reject input that is not UTF-8 with
/// [`crate::Error::Encoding`] and otherwise never fail on odd Markdown.
pub trait MarkdownParser {
    fn parse(&self, source: &[u8]) -> Result<Vec<Block>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_flattens_formatting() {
        let span = Inline::Link {
            destination: "https://example.com".into(),
            children: vec![
                Inline::text("see "),
                Inline::Emphasis {
                    level: 2,
                    children: vec![Inline::text("this")],
                },
                Inline::Code(" now".into()),
            ],
        };
        let mut out = String::new();
        span.plain_text(&mut out);
        assert_eq!(out, "see this now");
    }

    #[test]
    fn test_plain_text_ignores_soft_break() {
        let span = Inline::Text {
            text: "line".into(),
            soft_break: true,
        };
        let mut out = String::new();
        span.plain_text(&mut out);
        assert_eq!(out, "line");
    }
}
