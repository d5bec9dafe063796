//! SystemMessage element
//!
//!     Malformed markup is never fatal. The parser records what it could not understand as a
//!     system message node placed where the problem occurred, and keeps going. A system message
//!     always has exactly two children: a paragraph with the human readable explanation and a
//!     literal block with the offending source text.

use super::super::traits::{AstNode, Container};
use super::literal_block::LiteralBlock;
use super::node::{Node, NodeList, NodeType};
use super::paragraph::Paragraph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How bad a diagnostic is. Only `Warning` and `Severe` are produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Severe => "SEVERE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMessage {
    pub id: usize,
    pub severity: Severity,
    pub position: usize,
    pub line: usize,
    #[serde(rename = "node-list", default)]
    pub children: NodeList,
}

impl SystemMessage {
    /// Assemble a message from pre-assigned ids: `id` for the message itself, followed by
    /// the ids of its explanation paragraph and literal block.
    pub fn new(
        ids: [usize; 3],
        severity: Severity,
        message: &str,
        literal: String,
        position: usize,
        line: usize,
    ) -> Self {
        let [id, paragraph_id, literal_id] = ids;
        Self {
            id,
            severity,
            position,
            line,
            children: vec![
                Node::Paragraph(Paragraph::synthesized(paragraph_id, message, position, line)),
                Node::LiteralBlock(LiteralBlock::new(literal_id, literal, position, line)),
            ],
        }
    }

    /// Override the length recorded on the literal block.
    pub fn with_literal_length(mut self, length: usize) -> Self {
        for node in self.children.iter_mut() {
            if let Node::LiteralBlock(literal) = node {
                literal.length = length;
            }
        }
        self
    }

    /// The explanation text
    pub fn message(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            Node::Paragraph(p) => Some(p.text.as_str()),
            _ => None,
        })
    }

    /// The offending source text
    pub fn literal(&self) -> Option<&str> {
        self.children.iter().find_map(|node| match node {
            Node::LiteralBlock(l) => Some(l.text.as_str()),
            _ => None,
        })
    }
}

impl AstNode for SystemMessage {
    fn node_type(&self) -> NodeType {
        NodeType::SystemMessage
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
        format!("{}: {}", self.severity, self.message().unwrap_or_default())
    }
}

impl Container for SystemMessage {
    fn children(&self) -> &NodeList {
        &self.children
    }
    fn children_mut(&mut self) -> &mut NodeList {
        &mut self.children
    }
}

impl fmt::Display for SystemMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SystemMessage({})", self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_shape() {
        let msg = SystemMessage::new(
            [4, 5, 6],
            Severity::Warning,
            "Title underline too short.",
            "Title\n===".to_string(),
            1,
            2,
        );

        assert_eq!(msg.children.len(), 2);
        assert_eq!(msg.message(), Some("Title underline too short."));
        assert_eq!(msg.literal(), Some("Title\n==="));
        assert_eq!(msg.children[0].id(), 5);
        assert_eq!(msg.children[1].id(), 6);
        assert_eq!(msg.children[1].line_number(), 2);
    }

    #[test]
    fn test_literal_length_override() {
        let msg = SystemMessage::new(
            [1, 2, 3],
            Severity::Warning,
            "Title underline too short.",
            "Title\n===".to_string(),
            1,
            1,
        )
        .with_literal_length(10);

        assert_eq!(msg.literal(), Some("Title\n==="));
        assert!(matches!(&msg.children[1], Node::LiteralBlock(l) if l.length == 10));
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Severe.to_string(), "SEVERE");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }
}
