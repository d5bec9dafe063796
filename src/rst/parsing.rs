//! Parsing
//!
//!     Builds a [`Tree`] from source text. The lexer runs on its own thread and feeds the tree
//!     builder through a rendezvous channel; the builder looks at tokens through a small
//!     window so it can inspect the title before an underline, or the title and underline
//!     after an overline.
//!
//!     Parsing never fails. Problems in the document come back as [`ParseError`]s next to a
//!     best-effort tree.

pub mod levels;
pub mod messages;
pub mod parser;
pub mod window;

pub use parser::Parser;

use crate::rst::ast::error::ParseError;
use crate::rst::ast::tree::Tree;
use crate::rst::config::ParserConfig;
use crate::rst::lexing::{Lexer, TokenStream};
use tracing::warn;

/// Parse `text` with the default configuration. `name` only labels diagnostics.
pub fn parse(name: &str, text: &str) -> (Tree, Vec<ParseError>) {
    parse_with_config(name, text, &ParserConfig::default())
}

pub fn parse_with_config(
    name: &str,
    text: &str,
    config: &ParserConfig,
) -> (Tree, Vec<ParseError>) {
    let tree = match TokenStream::spawn(text.to_string()) {
        Ok(stream) => Parser::new(name, stream, config).parse(),
        Err(err) => {
            warn!(%err, "could not start lexer thread, lexing inline");
            Parser::new(name, Lexer::new(text), config).parse()
        }
    };
    let errors = tree.errors.clone();
    (tree, errors)
}
