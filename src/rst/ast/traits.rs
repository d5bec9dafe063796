//! AST traits - Common interfaces for uniform node access
//!
//! This module defines the common traits that provide uniform access
//! to AST node information across all node types.

use super::elements::{NodeList, NodeType};

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> NodeType;
    /// Identifier assigned at construction, increasing across one parse
    fn id(&self) -> usize;
    /// 1-based source line
    fn line_number(&self) -> usize;
    /// 1-based column of the node's first character
    fn start_position(&self) -> usize;
    fn display_label(&self) -> String;
}

/// Trait for nodes that own a child list
pub trait Container: AstNode {
    fn children(&self) -> &NodeList;
    fn children_mut(&mut self) -> &mut NodeList;
}
