//! Element-specific AST node definitions
//!
//! Each element type lives in its own module; [`Node`] ties them together.

pub mod adornment;
pub mod blank_line;
pub mod block_quote;
pub mod literal_block;
pub mod node;
pub mod paragraph;
pub mod section;
pub mod system_message;

pub use adornment::Adornment;
pub use blank_line::BlankLine;
pub use block_quote::BlockQuote;
pub use literal_block::LiteralBlock;
pub use node::{Node, NodeList, NodeType};
pub use paragraph::Paragraph;
pub use section::Section;
pub use system_message::{Severity, SystemMessage};
