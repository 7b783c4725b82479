//! Token sources consumed by the source-file parser.

use super::lexer::{Lexer, Token};
use super::token_kind::TokenKind;

/// A pull-based stream of significant tokens with one token of push-back.
///
/// Whitespace never reaches the parser; comments do. `unget` un-consumes
/// exactly the most recently returned token; calling it twice in a row, or
/// after the stream reported exhaustion, has no further effect.
pub trait TokenSource {
    fn next_token(&mut self) -> Option<Token>;

    fn unget(&mut self);
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Option<Token> {
        (**self).next_token()
    }

    fn unget(&mut self) {
        (**self).unget()
    }
}

/// The default [`TokenSource`]: the logos lexer minus whitespace.
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    last: Option<Token>,
    pushed_back: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexer::new(text),
            last: None,
            pushed_back: false,
        }
    }
}

impl TokenSource for TokenStream<'_> {
    fn next_token(&mut self) -> Option<Token> {
        if self.pushed_back {
            self.pushed_back = false;
            return self.last.clone();
        }
        self.last = self
            .lexer
            .by_ref()
            .find(|t| t.kind != TokenKind::WHITESPACE);
        self.last.clone()
    }

    fn unget(&mut self) {
        if self.last.is_some() {
            self.pushed_back = true;
        }
    }
}
