//! BlockQuote element
//!
//!     A block quote is recognized purely by indentation: text indented after a blank line opens
//!     a quote whose level is the indentation width divided by the configured indent width
//!     (4 by default). Following lines at the same level continue the quote.
//!
//!         Some text.
//!
//!             A quoted line.

use super::super::traits::{AstNode, Container};
use super::node::{NodeList, NodeType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockQuote {
    pub id: usize,
    pub level: usize,
    pub position: usize,
    pub line: usize,
    #[serde(rename = "node-list", default)]
    pub children: NodeList,
}

impl BlockQuote {
    pub fn new(id: usize, level: usize, position: usize, line: usize) -> Self {
        Self {
            id,
            level,
            position,
            line,
            children: NodeList::new(),
        }
    }
}

impl AstNode for BlockQuote {
    fn node_type(&self) -> NodeType {
        NodeType::BlockQuote
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
        format!("level {}", self.level)
    }
}

impl Container for BlockQuote {
    fn children(&self) -> &NodeList {
        &self.children
    }
    fn children_mut(&mut self) -> &mut NodeList {
        &mut self.children
    }
}

impl fmt::Display for BlockQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockQuote(level {}, {} items)",
            self.level,
            self.children.len()
        )
    }
}
