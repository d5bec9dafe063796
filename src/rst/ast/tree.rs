//! The parse result
//!
//!     A [`Tree`] owns the root node list and the diagnostics gathered while building it.
//!     Node ids are handed out by [`NodeIds`], one counter per parse.

use super::elements::{Node, NodeList};
use super::error::ParseError;
use super::traits::AstNode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub name: String,
    #[serde(rename = "node-list")]
    pub root: NodeList,
    #[serde(skip)]
    pub errors: Vec<ParseError>,
}

impl Tree {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: NodeList::new(),
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All nodes in document order, depth first
    pub fn nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for node in &self.root {
            node.walk(&mut |n| out.push(n));
        }
        out
    }

    pub fn find_by_id(&self, id: usize) -> Option<&Node> {
        self.nodes().into_iter().find(|n| n.id() == id)
    }
}

/// Monotonic node id source. The first id handed out is 1.
#[derive(Debug, Default)]
pub struct NodeIds {
    last: usize,
}

impl NodeIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> usize {
        self.last += 1;
        self.last
    }

    pub fn last(&self) -> usize {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::ast::elements::{BlockQuote, Paragraph};

    #[test]
    fn test_ids_are_increasing() {
        let mut ids = NodeIds::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.last(), 2);
    }

    #[test]
    fn test_nodes_in_document_order() {
        let mut tree = Tree::new("input");
        tree.root
            .push(Node::Paragraph(Paragraph::synthesized(1, "a", 1, 1)));
        let mut quote = BlockQuote::new(2, 1, 5, 3);
        quote
            .children
            .push(Node::Paragraph(Paragraph::synthesized(3, "b", 5, 3)));
        tree.root.push(Node::BlockQuote(quote));

        let ids: Vec<usize> = tree.nodes().iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            tree.find_by_id(3).and_then(|n| n.as_paragraph()).map(|p| p.text.as_str()),
            Some("b")
        );
        assert!(!tree.has_errors());
    }
}
