//! Paragraph element

use super::super::traits::AstNode;
use super::node::NodeType;
use crate::rst::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of running text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub id: usize,
    pub text: String,
    pub length: usize,
    pub position: usize,
    pub line: usize,
}

impl Paragraph {
    pub fn from_token(id: usize, token: &Token) -> Self {
        Self {
            id,
            text: token.value.clone(),
            length: token.length,
            position: token.position,
            line: token.line,
        }
    }

    /// A paragraph with no source text behind it, such as a system message explanation.
    pub fn synthesized(id: usize, text: &str, position: usize, line: usize) -> Self {
        Self {
            id,
            text: text.to_string(),
            length: text.chars().count(),
            position,
            line,
        }
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> NodeType {
        NodeType::Paragraph
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
        if self.text.chars().count() > 50 {
            format!("{}...", self.text.chars().take(50).collect::<String>())
        } else {
            self.text.clone()
        }
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph('{}')", self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::token::TokenKind;

    #[test]
    fn test_paragraph_from_token() {
        let token = Token::new(TokenKind::Paragraph, "quoted", 5, 3);
        let para = Paragraph::from_token(1, &token);
        assert_eq!(para.text, "quoted");
        assert_eq!(para.length, 6);
        assert_eq!(para.start_position(), 5);
        assert_eq!(para.line_number(), 3);
    }

    #[test]
    fn test_display_label_truncates() {
        let para = Paragraph::synthesized(1, &"x".repeat(60), 1, 1);
        assert_eq!(para.display_label().len(), 53);
        assert_eq!(para.length, 60);
    }
}
