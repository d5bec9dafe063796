//! Document tree
//!
//!     The tree is made of [`Node`] values. Containers (sections, block quotes and system
//!     messages) own their children; the [`Tree`] owns the root list and the diagnostics.
//!
//!     Every node records the 1-based line and the 1-based character column where it starts,
//!     and text bearing nodes record their length in characters, so a node can always be
//!     traced back to its source with [`SourceLocation::slice`].

pub mod elements;
pub mod error;
pub mod location;
pub mod snapshot;
pub mod traits;
pub mod tree;

pub use elements::{
    Adornment, BlankLine, BlockQuote, LiteralBlock, Node, NodeList, NodeType, Paragraph,
    Section, Severity, SystemMessage,
};
pub use error::{ErrorKind, MessageKind, ParseError};
pub use location::{Position, SourceLocation};
pub use snapshot::{snapshot_node, snapshot_tree, AstSnapshot};
pub use traits::{AstNode, Container};
pub use tree::{NodeIds, Tree};
