//! The node sum type
//!
//!     Every element of the tree is one variant of [`Node`]. Serialized nodes carry a
//!     `node-type` tag naming the variant, so a tree can be written to JSON and read back.

use super::super::traits::{AstNode, Container};
use super::{
    Adornment, BlankLine, BlockQuote, LiteralBlock, Paragraph, Section, SystemMessage,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of child nodes
pub type NodeList = Vec<Node>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Section,
    Paragraph,
    BlankLine,
    Adornment,
    BlockQuote,
    SystemMessage,
    LiteralBlock,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Section => "Section",
            NodeType::Paragraph => "Paragraph",
            NodeType::BlankLine => "BlankLine",
            NodeType::Adornment => "Adornment",
            NodeType::BlockQuote => "BlockQuote",
            NodeType::SystemMessage => "SystemMessage",
            NodeType::LiteralBlock => "LiteralBlock",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node-type")]
pub enum Node {
    Section(Section),
    Paragraph(Paragraph),
    BlankLine(BlankLine),
    Adornment(Adornment),
    BlockQuote(BlockQuote),
    SystemMessage(SystemMessage),
    LiteralBlock(LiteralBlock),
}

impl Node {
    fn inner(&self) -> &dyn AstNode {
        match self {
            Node::Section(n) => n,
            Node::Paragraph(n) => n,
            Node::BlankLine(n) => n,
            Node::Adornment(n) => n,
            Node::BlockQuote(n) => n,
            Node::SystemMessage(n) => n,
            Node::LiteralBlock(n) => n,
        }
    }

    /// Child list of container variants; `None` for leaves.
    pub fn children(&self) -> Option<&NodeList> {
        match self {
            Node::Section(n) => Some(n.children()),
            Node::BlockQuote(n) => Some(n.children()),
            Node::SystemMessage(n) => Some(n.children()),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut NodeList> {
        match self {
            Node::Section(n) => Some(n.children_mut()),
            Node::BlockQuote(n) => Some(n.children_mut()),
            Node::SystemMessage(n) => Some(n.children_mut()),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&Section> {
        match self {
            Node::Section(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Node::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_block_quote(&self) -> Option<&BlockQuote> {
        match self {
            Node::BlockQuote(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_system_message(&self) -> Option<&SystemMessage> {
        match self {
            Node::SystemMessage(m) => Some(m),
            _ => None,
        }
    }

    /// Visit this node and all of its descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        if let Some(children) = self.children() {
            for child in children {
                child.walk(visit);
            }
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> NodeType {
        self.inner().node_type()
    }
    fn id(&self) -> usize {
        self.inner().id()
    }
    fn line_number(&self) -> usize {
        self.inner().line_number()
    }
    fn start_position(&self) -> usize {
        self.inner().start_position()
    }
    fn display_label(&self) -> String {
        self.inner().display_label()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.node_type(), self.display_label())
    }
}
