// ABOUTME: Block-level conversion and title extraction
// ABOUTME: Walks top-level blocks in order and recurses into containers

use crate::markdown::document::{ContentNode, NodeType};
use crate::markdown::inline::convert_inlines;
use crate::markdown::syntax::{Block, Inline};

/// Top-level block walk that consumes at most one level-1 heading as the title.
pub(crate) struct BlockConverter {
    title: String,
    title_captured: bool,
}

impl BlockConverter {
    /// A non-empty `preset_title` (from frontmatter) counts as already
    /// captured, so every heading stays in the body.
    pub(crate) fn new(preset_title: Option<&str>) -> Self {
        match preset_title.filter(|t| !t.is_empty()) {
            Some(title) => BlockConverter {
                title: title.to_string(),
                title_captured: true,
            },
            None => BlockConverter {
                title: String::new(),
                title_captured: false,
            },
        }
    }

    pub(crate) fn convert(mut self, blocks: &[Block]) -> (String, Vec<ContentNode>) {
        let mut nodes = Vec::with_capacity(blocks.len());

        for block in blocks {
            if let Block::Heading { level: 1, content } = block {
                if !self.title_captured {
                    self.title = heading_text(content);
                    self.title_captured = true;
                    continue;
                }
            }
            nodes.extend(convert_block(block));
        }

        (self.title, nodes)
    }
}

fn heading_text(content: &[Inline]) -> String {
    let mut text = String::new();
    for inline in content {
        inline.plain_text(&mut text);
    }
    text
}

fn convert_blocks(blocks: &[Block]) -> Vec<ContentNode> {
    blocks.iter().filter_map(convert_block).collect()
}

fn convert_block(block: &Block) -> Option<ContentNode> {
    let node = match block {
        Block::Heading { level, content } => ContentNode::heading(*level, convert_inlines(content)),

        Block::Paragraph(content) => {
            ContentNode::block(NodeType::Paragraph, convert_inlines(content))
        }

        Block::BlockQuote(children) => {
            ContentNode::block(NodeType::Blockquote, convert_blocks(children))
        }

        Block::CodeBlock { language, literal } => {
            let language = (!language.is_empty()).then(|| language.clone());
            ContentNode::code_block(language, literal.clone())
        }

        Block::List { ordered, items } => {
            let kind = if *ordered {
                NodeType::OrderedList
            } else {
                NodeType::BulletList
            };
            let items = items
                .iter()
                .map(|item| ContentNode::block(NodeType::ListItem, convert_blocks(item)))
                .collect();
            ContentNode::block(kind, items)
        }

        Block::ThematicBreak => ContentNode::horizontal_rule(),

        Block::Other(content) => {
            let content = convert_inlines(content);
            if content.is_empty() {
                return None;
            }
            ContentNode::block(NodeType::Paragraph, content)
        }
    };

    Some(node)
}
