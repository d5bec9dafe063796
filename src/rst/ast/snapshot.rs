//! AST Snapshot - a normalized intermediate representation of the tree
//!
//! This module provides a canonical, format-agnostic representation of the tree
//! suitable for rendering to any output format. Each formatter works from the snapshot
//! and only deals with presentation.

use super::elements::Node;
use super::traits::AstNode;
use super::tree::Tree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstSnapshot {
    /// The type of node (e.g., "Section", "Paragraph")
    pub node_type: String,

    /// The primary label or text content of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: BTreeMap<String, String>,

    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Snapshot a whole tree. The root snapshot is labeled with the tree's name.
pub fn snapshot_tree(tree: &Tree) -> AstSnapshot {
    AstSnapshot::new("Tree".to_string(), tree.name.clone())
        .with_children(tree.root.iter().map(snapshot_node).collect())
}

pub fn snapshot_node(node: &Node) -> AstSnapshot {
    let base = AstSnapshot::new(node.node_type().to_string(), node.display_label())
        .with_attribute("id", node.id())
        .with_attribute("line", node.line_number())
        .with_attribute("position", node.start_position());

    let base = match node {
        Node::Section(s) => {
            let base = base
                .with_attribute("level", s.level)
                .with_attribute("char", s.underline.rune);
            match &s.overline {
                Some(over) => base.with_attribute("overline", over.rune),
                None => base,
            }
        }
        Node::BlockQuote(q) => base.with_attribute("level", q.level),
        Node::SystemMessage(m) => base.with_attribute("severity", m.severity),
        Node::Paragraph(p) => base.with_attribute("length", p.length),
        Node::LiteralBlock(l) => base.with_attribute("length", l.length),
        Node::Adornment(a) => base.with_attribute("char", a.rune),
        Node::BlankLine(_) => base,
    };

    match node.children() {
        Some(children) => base.with_children(children.iter().map(snapshot_node).collect()),
        None => base,
    }
}
