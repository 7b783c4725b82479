//! PHP keyword table.
//!
//! Keywords are case-insensitive in PHP. Only the words the parser reacts to
//! get a dedicated kind; every other reserved word lexes as an identifier.

use super::token_kind::TokenKind;

/// Keyword spellings (lowercase) and their kinds.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("abstract", TokenKind::ABSTRACT_KW),
    ("as", TokenKind::AS_KW),
    ("class", TokenKind::CLASS_KW),
    ("const", TokenKind::CONST_KW),
    ("define", TokenKind::DEFINE_KW),
    ("extends", TokenKind::EXTENDS_KW),
    ("final", TokenKind::FINAL_KW),
    ("function", TokenKind::FUNCTION_KW),
    ("implements", TokenKind::IMPLEMENTS_KW),
    ("include", TokenKind::INCLUDE_KW),
    ("include_once", TokenKind::INCLUDE_ONCE_KW),
    ("interface", TokenKind::INTERFACE_KW),
    ("namespace", TokenKind::NAMESPACE_KW),
    ("new", TokenKind::NEW_KW),
    ("private", TokenKind::PRIVATE_KW),
    ("protected", TokenKind::PROTECTED_KW),
    ("public", TokenKind::PUBLIC_KW),
    ("require", TokenKind::REQUIRE_KW),
    ("require_once", TokenKind::REQUIRE_ONCE_KW),
    ("static", TokenKind::STATIC_KW),
    ("trait", TokenKind::TRAIT_KW),
    ("use", TokenKind::USE_KW),
];

/// Classify an identifier: its keyword kind, or `IDENT`.
pub fn keyword_kind(text: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(kw, _)| kw.eq_ignore_ascii_case(text))
        .map_or(TokenKind::IDENT, |&(_, kind)| kind)
}
