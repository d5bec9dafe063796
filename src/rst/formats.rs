//! Output formats
//!
//!     A document can be rendered as a treeviz tree, as JSON, or, for debugging the lexer, as
//!     its token sequence (one token per line, or JSON).

pub mod json;
pub mod treeviz;

use crate::rst::lexing::tokenize;
use crate::rst::parsing::parse;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Treeviz,
    Json,
    Tokens,
    TokensJson,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
            OutputFormat::Tokens => "tokens",
            OutputFormat::TokensJson => "tokens-json",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Treeviz,
            OutputFormat::Json,
            OutputFormat::Tokens,
            OutputFormat::TokensJson,
        ]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

#[derive(Debug)]
pub enum FormatError {
    UnknownFormat(String),
    Json(serde_json::Error),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(f, "Unknown format: {name}"),
            FormatError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::Json(err)
    }
}

/// Lex or parse `source` and serialize the result in `format`.
pub fn render(name: &str, source: &str, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Treeviz => {
            let (tree, _) = parse(name, source);
            Ok(treeviz::to_treeviz_str(&tree))
        }
        OutputFormat::Json => {
            let (tree, _) = parse(name, source);
            json::to_json(&tree)
        }
        OutputFormat::Tokens => Ok(tokenize(source)
            .iter()
            .map(|token| format!("{token}\n"))
            .collect()),
        OutputFormat::TokensJson => json::tokens_to_json(&tokenize(source)),
    }
}
