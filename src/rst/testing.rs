//! Testing utilities
//!
//!     Tree assertions and text matchers shared by unit and integration tests.

mod assertions;
mod matchers;

pub use assertions::{
    assert_tree, BlockQuoteAssertion, NodeAssertion, ParagraphAssertion, SectionAssertion,
    SystemMessageAssertion, TreeAssertion,
};
pub use matchers::TextMatch;
