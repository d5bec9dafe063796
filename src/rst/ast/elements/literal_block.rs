//! LiteralBlock element
//!
//!     Verbatim text. The parser only builds literal blocks inside system messages, where they
//!     hold the offending source lines.

use super::super::traits::AstNode;
use super::node::NodeType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralBlock {
    pub id: usize,
    pub text: String,
    pub length: usize,
    pub position: usize,
    pub line: usize,
}

impl LiteralBlock {
    pub fn new(id: usize, text: String, position: usize, line: usize) -> Self {
        Self {
            id,
            length: text.chars().count(),
            text,
            position,
            line,
        }
    }
}

impl AstNode for LiteralBlock {
    fn node_type(&self) -> NodeType {
        NodeType::LiteralBlock
    }
    fn id(&self) -> usize {
        self.id
    }
    fn line_number(&self) -> usize {
        self.line
    }
    fn start_position(&self) -> usize {
        self.position
    }
    fn display_label(&self) -> String {
        self.text.replace('\n', "⏎")
    }
}
