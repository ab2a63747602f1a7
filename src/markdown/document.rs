// ABOUTME: Serde models for the rich-text draft body sent to the publishing API
// ABOUTME: Typed nodes and marks whose JSON layout is a wire contract

use serde::{Deserialize, Serialize};

/// Node kinds understood by the draft editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Doc,
    Heading,
    Paragraph,
    Blockquote,
    CodeBlock,
    BulletList,
    OrderedList,
    ListItem,
    HorizontalRule,
    Text,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// One unit of document structure: a block container or a text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    #[serde(rename = "type")]
    pub kind: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<NodeAttrs>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ContentNode {
    pub fn block(kind: NodeType, content: Vec<ContentNode>) -> Self {
        ContentNode {
            kind,
            attrs: None,
            content,
            marks: Vec::new(),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        ContentNode {
            kind: NodeType::Text,
            attrs: None,
            content: Vec::new(),
            marks,
            text: Some(text.into()),
        }
    }

    pub fn heading(level: u8, content: Vec<ContentNode>) -> Self {
        ContentNode {
            attrs: Some(NodeAttrs {
                level: Some(level),
                language: None,
            }),
            ..ContentNode::block(NodeType::Heading, content)
        }
    }

    /// Code block holding its literal source as a single unmarked text leaf.
    pub fn code_block(language: Option<String>, code: impl Into<String>) -> Self {
        ContentNode {
            attrs: language.map(|language| NodeAttrs {
                level: None,
                language: Some(language),
            }),
            ..ContentNode::block(NodeType::CodeBlock, vec![ContentNode::text(code, Vec::new())])
        }
    }

    pub fn horizontal_rule() -> Self {
        ContentNode::block(NodeType::HorizontalRule, Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkType {
    Strong,
    Em,
    Strikethrough,
    Code,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttrs {
    pub href: String,
}

/// Inline formatting attached to a text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<MarkAttrs>,
}

impl Mark {
    pub fn new(kind: MarkType) -> Self {
        Mark { kind, attrs: None }
    }

    pub fn link(href: impl Into<String>) -> Self {
        Mark {
            kind: MarkType::Link,
            attrs: Some(MarkAttrs { href: href.into() }),
        }
    }
}

/// Root `doc` node wrapping the top-level blocks in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: NodeType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentNode>,
}

impl Document {
    pub fn new(content: Vec<ContentNode>) -> Self {
        Document {
            kind: NodeType::Doc,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_leaf_serializes_type_marks_and_text() {
        let leaf = ContentNode::text("hi", vec![Mark::new(MarkType::Strong)]);
        let json = serde_json::to_string(&leaf).unwrap();
        assert_eq!(json, r#"{"type":"text","marks":[{"type":"strong"}],"text":"hi"}"#);
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let json = serde_json::to_string(&ContentNode::horizontal_rule()).unwrap();
        assert_eq!(json, r#"{"type":"horizontal_rule"}"#);

        let json = serde_json::to_string(&Document::new(vec![])).unwrap();
        assert_eq!(json, r#"{"type":"doc"}"#);
    }

    #[test]
    fn test_heading_and_code_block_attrs() {
        let json = serde_json::to_string(&ContentNode::heading(2, vec![])).unwrap();
        assert_eq!(json, r#"{"type":"heading","attrs":{"level":2}}"#);

        let json =
            serde_json::to_string(&ContentNode::code_block(Some("rust".into()), "fn main() {}\n"))
                .unwrap();
        assert_eq!(
            json,
            r#"{"type":"code_block","attrs":{"language":"rust"},"content":[{"type":"text","text":"fn main() {}\n"}]}"#
        );

        let json = serde_json::to_string(&ContentNode::code_block(None, "x")).unwrap();
        assert_eq!(
            json,
            r#"{"type":"code_block","content":[{"type":"text","text":"x"}]}"#
        );
    }

    #[test]
    fn test_link_mark_carries_href() {
        let json = serde_json::to_string(&Mark::link("https://example.com")).unwrap();
        assert_eq!(json, r#"{"type":"link","attrs":{"href":"https://example.com"}}"#);
    }

    #[test]
    fn test_document_deserializes_from_wire_shape() {
        let json = r#"{
            "type": "doc",
            "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "Hello"}]}
            ]
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.kind, NodeType::Doc);
        assert_eq!(doc.content[0].kind, NodeType::Paragraph);
        assert_eq!(doc.content[0].content[0].text.as_deref(), Some("Hello"));
    }
}
