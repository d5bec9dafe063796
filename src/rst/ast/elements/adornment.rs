//! Adornment element
//!
//!     An adornment is a line made of one repeated punctuation rune, written under a section
//!     title (the underline) and optionally above it (the overline). Adornments are kept on the
//!     Section they belong to rather than in a child list.

use super::super::traits::AstNode;
use super::node::NodeType;
use crate::rst::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adornment {
    pub id: usize,
    #[serde(rename = "char")]
    pub rune: char,
    pub length: usize,
    pub position: usize,
    pub line: usize,
}

impl Adornment {
    /// Build from a `SectionAdornment` token. The rune is the token's first character.
    pub fn from_token(id: usize, token: &Token) -> Self {
        Self {
            id,
            rune: token.first_char().unwrap_or(' '),
            length: token.length,
            position: token.position,
            line: token.line,
        }
    }
}

impl AstNode for Adornment {
    fn node_type(&self) -> NodeType {
        NodeType::Adornment
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
        format!("{} x{}", self.rune, self.length)
    }
}

impl fmt::Display for Adornment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Adornment('{}', {})", self.rune, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::token::TokenKind;

    #[test]
    fn test_from_token() {
        let token = Token::new(TokenKind::SectionAdornment, "-----", 1, 2);
        let adornment = Adornment::from_token(7, &token);
        assert_eq!(adornment.rune, '-');
        assert_eq!(adornment.length, 5);
        assert_eq!(adornment.line, 2);
        assert_eq!(adornment.id(), 7);
    }

    #[test]
    fn test_serializes_rune_as_char() {
        let token = Token::new(TokenKind::SectionAdornment, "==", 1, 1);
        let json = serde_json::to_value(Adornment::from_token(1, &token)).unwrap();
        assert_eq!(json["char"], "=");
    }
}
