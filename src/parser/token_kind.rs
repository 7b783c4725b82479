//! Token kinds produced by the PHP lexer.
//!
//! Single-character punctuation the parser dispatches on (`{`, `}`, `(`, `)`,
//! `;`, `,`, `=`) has its own kind, and `=` is never produced for compound
//! operators such as `==`, `=>` or `.=`.

/// All token kinds in PHP source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,  // `// ...` or `# ...`
    BLOCK_COMMENT, // `/* ... */`
    DOC_COMMENT,   // `/** ... */`
    ERROR,

    // =========================================================================
    // LITERALS AND NAMES
    // =========================================================================
    VARIABLE,     // $name
    IDENT,        // name
    NS_SEPARATOR, // \
    INTEGER,      // 42, 0x2A, 0b101
    DECIMAL,      // 3.14, 1e10
    STRING,       // '...', "...", `...`, heredoc, nowdoc
    CAST,         // (int), (string), ...

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,           // {
    R_BRACE,           // }
    L_BRACKET,         // [
    R_BRACKET,         // ]
    L_PAREN,           // (
    R_PAREN,           // )
    SEMICOLON,         // ;
    COMMA,             // ,
    COLON,             // :
    COLON_COLON,       // ::
    DOT,               // .
    ELLIPSIS,          // ...
    EQ,                // =
    EQ_EQ,             // ==
    EQ_EQ_EQ,          // ===
    BANG_EQ,           // != or <>
    BANG_EQ_EQ,        // !==
    LT,                // <
    GT,                // >
    LT_EQ,             // <=
    GT_EQ,             // >=
    SPACESHIP,         // <=>
    ARROW,             // ->
    NULLSAFE_ARROW,    // ?->
    FAT_ARROW,         // =>
    PLUS,              // +
    MINUS,             // -
    STAR,              // *
    STAR_STAR,         // **
    SLASH,             // /
    PERCENT,           // %
    PLUS_PLUS,         // ++
    MINUS_MINUS,       // --
    SHL,               // <<
    SHR,               // >>
    AMP,               // &
    AMP_AMP,           // &&
    PIPE,              // |
    PIPE_PIPE,         // ||
    CARET,             // ^
    TILDE,             // ~
    BANG,              // !
    QUESTION,          // ?
    QUESTION_QUESTION, // ??
    AT,                // @
    DOLLAR,            // $
    HASH_BRACKET,      // #[
    COMPOUND_ASSIGN,   // += -= *= /= .= %= **= ??= <<= >>= &= |= ^=

    // =========================================================================
    // KEYWORDS (only those the parser dispatches on)
    // =========================================================================
    ABSTRACT_KW,
    AS_KW,
    CLASS_KW,
    CONST_KW,
    DEFINE_KW,
    EXTENDS_KW,
    FINAL_KW,
    FUNCTION_KW,
    IMPLEMENTS_KW,
    INCLUDE_KW,
    INCLUDE_ONCE_KW,
    INTERFACE_KW,
    NAMESPACE_KW,
    NEW_KW,
    PRIVATE_KW,
    PROTECTED_KW,
    PUBLIC_KW,
    REQUIRE_KW,
    REQUIRE_ONCE_KW,
    STATIC_KW,
    TRAIT_KW,
    USE_KW,
}

impl TokenKind {
    /// Line, block and doc comments.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenKind::LINE_COMMENT | TokenKind::BLOCK_COMMENT | TokenKind::DOC_COMMENT
        )
    }

    /// Block and doc comments: the ones collected for doc association.
    pub fn is_block_comment(self) -> bool {
        matches!(self, TokenKind::BLOCK_COMMENT | TokenKind::DOC_COMMENT)
    }

    pub fn is_keyword(self) -> bool {
        self >= TokenKind::ABSTRACT_KW
    }

    /// `public`, `private` or `protected`.
    pub fn is_visibility(self) -> bool {
        matches!(
            self,
            TokenKind::PUBLIC_KW | TokenKind::PRIVATE_KW | TokenKind::PROTECTED_KW
        )
    }
}
