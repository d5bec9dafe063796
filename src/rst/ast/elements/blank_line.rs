//! BlankLine element
//!
//!     Blank lines separate elements but carry no content. The tree builder absorbs blank line
//!     tokens without producing nodes; the variant exists so that externally authored trees
//!     containing blank line records can be represented and compared.

use super::super::traits::AstNode;
use super::node::NodeType;
use crate::rst::token::Token;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankLine {
    pub id: usize,
    pub position: usize,
    pub line: usize,
}

impl BlankLine {
    pub fn from_token(id: usize, token: &Token) -> Self {
        Self {
            id,
            position: token.position,
            line: token.line,
        }
    }
}

impl AstNode for BlankLine {
    fn node_type(&self) -> NodeType {
        NodeType::BlankLine
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
        "blank line".to_string()
    }
}
