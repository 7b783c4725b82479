//! PHP lexing for the source-file parser
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind, text, line numbers
//!     ↓
//! TokenStream → significant tokens, one-token push-back
//!     ↓
//! SourceFile parser → entity tree
//! ```
//!
//! The parser only depends on the [`TokenSource`] trait, so a host with its
//! own tokenizer can feed it directly.

pub mod keywords;
mod lexer;
mod token_kind;
mod token_source;

pub use lexer::{Lexer, Token, tokenize};
pub use token_kind::TokenKind;
pub use token_source::{TokenSource, TokenStream};
