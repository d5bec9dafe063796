//! JSON serialization of trees
//!
//!     Nodes are written as records tagged with `node-type`, children under `node-list`, so
//!     trees can be compared against externally written fixtures and read back.

use super::FormatError;
use crate::rst::ast::tree::Tree;
use crate::rst::token::Token;

pub fn to_json(tree: &Tree) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Read a tree back. Diagnostics are not part of the JSON form, so the result has none.
pub fn from_json(text: &str) -> Result<Tree, FormatError> {
    Ok(serde_json::from_str(text)?)
}

pub fn tokens_to_json(tokens: &[Token]) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(tokens)?)
}
