//! A lexer and tree builder for a subset of reStructuredText
//!
//!     Supported markup: section titles with underlines and optional overlines, paragraphs,
//!     blank lines and indentation based block quotes. Malformed section markup is reported as
//!     system messages inside the tree instead of failing the parse.
//!
//!     Pipeline:
//!
//!         text -> lexing (tokens) -> parsing (tree + diagnostics) -> formats (output)
//!
//!     Start with [`parse`]; [`formats::render`] turns a document into treeviz or JSON.

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;

pub use ast::{Node, ParseError, Tree};
pub use config::ParserConfig;
pub use parsing::{parse, parse_with_config};
pub use token::{Token, TokenKind};
