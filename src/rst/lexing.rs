//! Lexing
//!
//!     Turns source text into a flat sequence of [`Token`](crate::rst::token::Token)s, one per
//!     line or line part, always ending with `EOF`.
//!
//!     [`Lexer`] is a pull-driven state machine and an `Iterator` over tokens. [`TokenStream`]
//!     runs the same machine on a separate thread behind a rendezvous channel, which is how the
//!     parser consumes it by default.

pub mod cursor;
pub mod lexer;
pub mod lookahead;
pub mod stream;

pub use lexer::{tokenize, Lexer};
pub use lookahead::{is_adornment, is_section, ADORNMENTS};
pub use stream::TokenStream;
