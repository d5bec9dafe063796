//! Token types shared by the lexer and the parser.
//!
//!     The lexer works line by line, so most tokens cover exactly one source line, or the part
//!     of it that follows indentation. A document such as
//!
//!         Title
//!         =====
//!
//!         Some text.
//!
//!     lexes into `Title`, `SectionAdornment`, `BlankLine`, `Paragraph`, `EOF`. Section levels
//!     are never decided here: the lexer only tells adornment lines apart from text, and the
//!     parser assigns levels from the order in which adornment runes first appear.
//!
//!     Positions are 1-based columns counted in characters, lengths are character counts, and
//!     line numbers are 1-based. Line endings are not part of `Title`, `SectionAdornment` or
//!     `Paragraph` values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of tokens emitted by the lexer.
///
/// `Error`, `Blockquote`, `LiteralBlock` and `SystemMessage` are reserved: the lexer never
/// emits them, and the parser reports them as not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "EOF")]
    Eof,
    Error,
    Title,
    SectionAdornment,
    Paragraph,
    Blockquote,
    LiteralBlock,
    SystemMessage,
    Space,
    BlankLine,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Error => "Error",
            TokenKind::Title => "Title",
            TokenKind::SectionAdornment => "SectionAdornment",
            TokenKind::Paragraph => "Paragraph",
            TokenKind::Blockquote => "Blockquote",
            TokenKind::LiteralBlock => "LiteralBlock",
            TokenKind::SystemMessage => "SystemMessage",
            TokenKind::Space => "Space",
            TokenKind::BlankLine => "BlankLine",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based column of the first character within its line
    pub position: usize,
    pub line: usize,
    /// Length of `value` in characters
    pub length: usize,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize, line: usize) -> Self {
        let value = value.into();
        Self {
            kind,
            position,
            line,
            length: value.chars().count(),
            value,
        }
    }

    /// An end-of-input token. Its value is always empty.
    pub fn eof(position: usize, line: usize) -> Self {
        Self::new(TokenKind::Eof, "", position, line)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// First character of the value, used as the adornment rune of adornment lines.
    pub fn first_char(&self) -> Option<char> {
        self.value.chars().next()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {:?}",
            self.line, self.position, self.kind, self.value
        )
    }
}
