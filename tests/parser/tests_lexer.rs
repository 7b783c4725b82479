#![allow(clippy::unwrap_used)]

use phpscope::parser::tokenize;
use phpscope::TokenKind;
use rstest::rstest;

fn kinds(text: &str) -> Vec<TokenKind> {
    tokenize(text)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| *k != TokenKind::WHITESPACE)
        .collect()
}

#[rstest]
#[case("CLASS", TokenKind::CLASS_KW)]
#[case("Function", TokenKind::FUNCTION_KW)]
#[case("NameSpace", TokenKind::NAMESPACE_KW)]
#[case("require_once", TokenKind::REQUIRE_ONCE_KW)]
#[case("instanceof", TokenKind::IDENT)]
#[case("$this", TokenKind::VARIABLE)]
#[case("'single'", TokenKind::STRING)]
#[case("\"double $x\"", TokenKind::STRING)]
#[case("(string)", TokenKind::CAST)]
#[case("( int )", TokenKind::CAST)]
#[case("0x1F", TokenKind::INTEGER)]
#[case("1.5e3", TokenKind::DECIMAL)]
#[case("/** doc */", TokenKind::DOC_COMMENT)]
#[case("/* block */", TokenKind::BLOCK_COMMENT)]
#[case("// line", TokenKind::LINE_COMMENT)]
#[case("# hash", TokenKind::LINE_COMMENT)]
#[case("#[", TokenKind::HASH_BRACKET)]
#[case("...", TokenKind::ELLIPSIS)]
#[case("??=", TokenKind::COMPOUND_ASSIGN)]
fn test_single_token(#[case] text: &str, #[case] expected: TokenKind) {
    assert_eq!(kinds(text), [expected], "lexing {text:?}");
}

#[test]
fn test_qualified_name_tokens() {
    assert_eq!(
        kinds("\\Foo\\Bar"),
        [
            TokenKind::NS_SEPARATOR,
            TokenKind::IDENT,
            TokenKind::NS_SEPARATOR,
            TokenKind::IDENT
        ]
    );
}

#[test]
fn test_multiline_tokens_track_lines() {
    let tokens: Vec<_> = tokenize("<?php\n/**\n * doc\n */\nclass A {}")
        .into_iter()
        .filter(|t| t.kind != TokenKind::WHITESPACE)
        .collect();
    let doc = &tokens[0];
    assert_eq!(doc.kind, TokenKind::DOC_COMMENT);
    assert_eq!((doc.line, doc.end_line), (2, 4));
    assert_eq!(tokens[1].line, 5);
}

#[test]
fn test_html_outside_tags_produces_no_tokens() {
    assert_eq!(
        kinds("<p>{ } ;</p><?php $a ?><div>{</div>"),
        [TokenKind::VARIABLE]
    );
}
