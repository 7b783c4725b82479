#![allow(clippy::unwrap_used)]

use phpscope::parser::tokenize;
use phpscope::{ParseOptions, PhpDocParser, SourceFile, Token, TokenKind, TokenSource};

/// Replays a pre-lexed token list, counting pulls.
struct Replay {
    tokens: Vec<Token>,
    pos: usize,
    pulls: usize,
}

impl Replay {
    fn new(text: &str) -> Self {
        let tokens = tokenize(text)
            .into_iter()
            .filter(|t| t.kind != TokenKind::WHITESPACE)
            .collect();
        Self {
            tokens,
            pos: 0,
            pulls: 0,
        }
    }
}

impl TokenSource for Replay {
    fn next_token(&mut self) -> Option<Token> {
        self.pulls += 1;
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn unget(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }
}

#[test]
fn test_parse_from_custom_source() {
    let mut source = Replay::new("<?php namespace N; class A { public $x; function m(int $a) {} }");
    let file = SourceFile::parse_tokens(&mut source, &ParseOptions::default(), &PhpDocParser);

    assert_eq!(file.namespace().full_name(), "\\N");
    let a = file.find("\\N\\A").unwrap();
    let names: Vec<_> = file.children(a.id()).map(|c| c.full_name()).collect();
    assert_eq!(names, ["$x", "m"]);
    assert_eq!(source.pos, source.tokens.len());
    assert!(source.pulls > source.tokens.len());
}

#[test]
fn test_custom_source_matches_default_stream() {
    let text = "<?php use A\\B as C; /** @return C */ function f(C $c = null) {}";
    let from_stream = SourceFile::parse(text);
    let from_replay =
        SourceFile::parse_tokens(Replay::new(text), &ParseOptions::default(), &PhpDocParser);
    assert_eq!(from_stream.to_string(), from_replay.to_string());
}
