// ABOUTME: Inline span conversion into marked text leaves
// ABOUTME: Formatting nests through a persistent stack shared by reference only

use crate::markdown::document::{ContentNode, Mark, MarkType};
use crate::markdown::syntax::Inline;

/// Marks in effect at one depth of inline nesting.
///
/// Pushing borrows the parent and returns a new frame, so sibling spans
/// each extend their own copy and never see one another's marks.
#[derive(Debug)]
pub(crate) enum MarkStack<'a> {
    Empty,
    Frame {
        mark: Mark,
        parent: &'a MarkStack<'a>,
    },
}

impl<'a> MarkStack<'a> {
    pub(crate) fn push(&'a self, mark: Mark) -> MarkStack<'a> {
        MarkStack::Frame { mark, parent: self }
    }

    /// Outer-to-inner list of the marks on this frame and its ancestors.
    pub(crate) fn to_vec(&self) -> Vec<Mark> {
        match self {
            MarkStack::Empty => Vec::new(),
            MarkStack::Frame { mark, parent } => {
                let mut marks = parent.to_vec();
                marks.push(mark.clone());
                marks
            }
        }
    }
}

/// Convert a run of inline spans starting from an empty mark stack.
pub(crate) fn convert_inlines(inlines: &[Inline]) -> Vec<ContentNode> {
    convert_children(inlines, &MarkStack::Empty)
}

fn convert_children(inlines: &[Inline], marks: &MarkStack<'_>) -> Vec<ContentNode> {
    inlines
        .iter()
        .flat_map(|inline| convert_inline(inline, marks))
        .collect()
}

fn convert_inline(inline: &Inline, marks: &MarkStack<'_>) -> Vec<ContentNode> {
    match inline {
        Inline::Text { text, soft_break } => {
            let mut text = text.clone();
            if *soft_break {
                text.push('\n');
            }
            vec![ContentNode::text(text, marks.to_vec())]
        }

        // Code spans never contain nested formatting
        Inline::Code(literal) => {
            let marks = marks.push(Mark::new(MarkType::Code));
            vec![ContentNode::text(literal.clone(), marks.to_vec())]
        }

        Inline::Emphasis { level, children } => {
            let kind = if *level >= 2 {
                MarkType::Strong
            } else {
                MarkType::Em
            };
            convert_children(children, &marks.push(Mark::new(kind)))
        }

        Inline::Strikethrough(children) => {
            convert_children(children, &marks.push(Mark::new(MarkType::Strikethrough)))
        }

        Inline::Link {
            destination,
            children,
        } => convert_children(children, &marks.push(Mark::link(destination.clone()))),

        Inline::Autolink(url) => {
            let marks = marks.push(Mark::link(url.clone()));
            vec![ContentNode::text(url.clone(), marks.to_vec())]
        }

        Inline::Other(children) => convert_children(children, marks),
    }
}
