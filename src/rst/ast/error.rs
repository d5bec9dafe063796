//! Recoverable parse diagnostics
//!
//!     Nothing the parser finds in a document aborts the parse. Each problem becomes a
//!     [`ParseError`] in the tree's error list, and the section related ones are also placed in
//!     the tree as system message nodes.

use super::elements::Severity;
use crate::rst::token::TokenKind;
use std::fmt;

/// Diagnostics that are materialized as SystemMessage nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    WarningShortUnderline,
    ErrorUnexpectedSectionTitle,
    ErrorUnexpectedSectionTitleOrTransition,
}

impl MessageKind {
    pub fn message(&self) -> &'static str {
        match self {
            MessageKind::WarningShortUnderline => "Title underline too short.",
            MessageKind::ErrorUnexpectedSectionTitle => "Unexpected section title.",
            MessageKind::ErrorUnexpectedSectionTitleOrTransition => {
                "Unexpected section title or transition."
            }
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            MessageKind::WarningShortUnderline => Severity::Warning,
            MessageKind::ErrorUnexpectedSectionTitle
            | MessageKind::ErrorUnexpectedSectionTitleOrTransition => Severity::Severe,
        }
    }

    /// Does the quoted literal join a title line and its adornment line?
    pub fn joins_lines(&self) -> bool {
        !matches!(self, MessageKind::ErrorUnexpectedSectionTitleOrTransition)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    SystemMessage(MessageKind),
    /// A title and adornment rune pair that was already used by an earlier section
    DuplicateSection { title: String, rune: char },
    OverlineLengthMismatch,
    OverlineUnderlineMismatch,
    /// A title line with no adornment line after it
    MissingUnderline { title: String },
    Unimplemented(TokenKind),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::SystemMessage(kind) => f.write_str(kind.message()),
            ErrorKind::DuplicateSection { title, rune } => {
                write!(f, "Duplicate section title {title:?} with adornment '{rune}'.")
            }
            ErrorKind::OverlineLengthMismatch => {
                f.write_str("Title overline and title differ in length.")
            }
            ErrorKind::OverlineUnderlineMismatch => {
                f.write_str("Title overline does not match the underline.")
            }
            ErrorKind::MissingUnderline { title } => {
                write!(f, "Title {title:?} has no underline.")
            }
            ErrorKind::Unimplemented(kind) => write!(f, "Token kind {kind} is not implemented."),
        }
    }
}

/// One recoverable diagnostic, tied to the source line that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub source_name: String,
    pub line: usize,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(source_name: impl Into<String>, line: usize, kind: ErrorKind) -> Self {
        Self {
            source_name: source_name.into(),
            line,
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rst: {}:{}: {}", self.source_name, self.line, self.kind)
    }
}

impl std::error::Error for ParseError {}
