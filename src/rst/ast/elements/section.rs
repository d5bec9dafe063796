//! Section element
//!
//!     A section is a titled container. Its title line is marked by an underline adornment and,
//!     optionally, a matching overline:
//!
//!         =========
//!         Overlined
//!         =========
//!
//!         Underlined
//!         ----------
//!
//!     The nesting level is not visible in the markup itself. The first distinct adornment rune
//!     seen in a document is level 1, the next distinct one level 2, and so on; reusing a rune
//!     reuses its level. Levels are filled in by the parser's level registry, never by the lexer.
//!
//!     Everything that follows a section title, up to the next section of the same or a higher
//!     level, becomes a child of that section.

use super::super::traits::{AstNode, Container};
use super::adornment::Adornment;
use super::node::{NodeList, NodeType};
use crate::rst::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: usize,
    pub text: String,
    pub level: usize,
    pub length: usize,
    pub position: usize,
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overline: Option<Adornment>,
    pub underline: Adornment,
    #[serde(rename = "node-list", default)]
    pub children: NodeList,
}

impl Section {
    /// Build a section from its title token. The level is left at 0 until registered.
    pub fn new(id: usize, title: &Token, overline: Option<Adornment>, underline: Adornment) -> Self {
        Self {
            id,
            text: title.value.clone(),
            level: 0,
            length: title.length,
            position: title.position,
            line: title.line,
            overline,
            underline,
            children: NodeList::new(),
        }
    }

    pub fn rune(&self) -> char {
        self.underline.rune
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }
}

impl AstNode for Section {
    fn node_type(&self) -> NodeType {
        NodeType::Section
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
        self.text.clone()
    }
}

impl Container for Section {
    fn children(&self) -> &NodeList {
        &self.children
    }
    fn children_mut(&mut self) -> &mut NodeList {
        &mut self.children
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section('{}', level {}, {} items)",
            self.text,
            self.level,
            self.children.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::token::TokenKind;

    fn underline(value: &str, line: usize) -> Adornment {
        Adornment::from_token(2, &Token::new(TokenKind::SectionAdornment, value, 1, line))
    }

    #[test]
    fn test_section_from_title() {
        let title = Token::new(TokenKind::Title, "Introduction", 1, 1);
        let section = Section::new(3, &title, None, underline("============", 2)).with_level(1);

        assert_eq!(section.text, "Introduction");
        assert_eq!(section.length, 12);
        assert_eq!(section.rune(), '=');
        assert_eq!(section.level, 1);
        assert!(section.children().is_empty());
        assert_eq!(
            section.to_string(),
            "Section('Introduction', level 1, 0 items)"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let title = Token::new(TokenKind::Title, "Title", 1, 1);
        let section = Section::new(3, &title, None, underline("=====", 2)).with_level(1);
        let json = serde_json::to_value(&section).unwrap();

        assert_eq!(json["text"], "Title");
        assert_eq!(json["level"], 1);
        assert_eq!(json["underline"]["char"], "=");
        assert!(json.get("overline").is_none());
        assert!(json["node-list"].as_array().unwrap().is_empty());
    }
}
