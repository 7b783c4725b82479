//! Logos-based lexer for PHP
//!
//! Splits source text into tokens with 1-based line numbers. Text outside
//! `<?php ... ?>` blocks is inline HTML and produces no tokens.

use super::keywords::keyword_kind;
use super::token_kind::TokenKind;
use logos::Logos;
use smol_str::SmolStr;
use text_size::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    /// Line the token starts on (1-based)
    pub line: u32,
    /// Line the token ends on; differs from `line` for multi-line comments and strings
    pub end_line: u32,
    pub offset: TextSize,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, line: u32) -> Self {
        let end_line = line + count_newlines(text);
        Self {
            kind,
            text: SmolStr::new(text),
            line,
            end_line,
            offset: TextSize::new(0),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Lexer wrapping the logos-generated tokenizer.
///
/// Text that contains an open tag starts in inline-HTML mode; anything else
/// is treated as a bare PHP snippet.
pub struct Lexer<'a> {
    source: &'a str,
    /// `None` while scanning inline HTML
    inner: Option<logos::Lexer<'a, LogosToken>>,
    /// Byte offset of the inner lexer's input within `source`
    base: usize,
    /// Where inline-HTML scanning resumes
    cursor: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            source: input,
            inner: None,
            base: 0,
            cursor: 0,
            line: 1,
        };
        if !has_open_tag(input) {
            lexer.enter_php(0);
        }
        lexer
    }

    fn enter_php(&mut self, at: usize) {
        let source = self.source;
        self.base = at;
        self.inner = Some(LogosToken::lexer(&source[at..]));
    }

    /// Skip inline HTML up to and including the next open tag.
    /// Returns false when the source is exhausted.
    fn skip_html(&mut self) -> bool {
        let rest = &self.source[self.cursor..];
        let Some(pos) = rest.find("<?") else {
            self.line += count_newlines(rest);
            self.cursor = self.source.len();
            return false;
        };
        let end = self.cursor + pos + open_tag_len(&rest[pos..]);
        self.line += count_newlines(&self.source[self.cursor..end]);
        self.enter_php(end);
        true
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(inner) = self.inner.as_mut() else {
                if self.skip_html() {
                    continue;
                }
                return None;
            };

            let Some(result) = inner.next() else {
                self.inner = None;
                self.cursor = self.source.len();
                return None;
            };
            let span = inner.span();
            let text = inner.slice();

            let kind = match result {
                Ok(LogosToken::CloseTag) => {
                    self.line += count_newlines(text);
                    self.cursor = self.base + span.end;
                    self.inner = None;
                    continue;
                }
                Ok(LogosToken::Ident) => keyword_kind(text),
                Ok(LogosToken::BlockComment) if text.starts_with("/**") && text.len() > 4 => {
                    TokenKind::DOC_COMMENT
                }
                Ok(t) => t.into(),
                Err(()) => TokenKind::ERROR,
            };

            let line = self.line;
            let end_line = line + count_newlines(text);
            self.line = end_line;

            return Some(Token {
                kind,
                text: SmolStr::new(text),
                line,
                end_line,
                offset: TextSize::new((self.base + span.start) as u32),
            });
        }
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

fn count_newlines(text: &str) -> u32 {
    text.bytes().filter(|&b| b == b'\n').count() as u32
}

fn has_open_tag(text: &str) -> bool {
    text.trim_start().starts_with("<?")
        || text.contains("<?=")
        || text.to_ascii_lowercase().contains("<?php")
}

fn open_tag_len(text: &str) -> usize {
    if text.get(..5).is_some_and(|t| t.eq_ignore_ascii_case("<?php")) {
        5
    } else if text.starts_with("<?=") {
        3
    } else {
        2
    }
}

// ============================================================================
// CALLBACKS
// ============================================================================

/// Consume through the closing `*/`, or to end of input.
fn block_comment(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(rest.len()),
    }
    true
}

/// Consume a quoted string body through its closing quote, honouring
/// backslash escapes. Unterminated strings run to end of input.
fn quoted(lex: &mut logos::Lexer<LogosToken>, quote: u8) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => {
                lex.bump(i + 1);
                return true;
            }
            _ => i += 1,
        }
    }
    lex.bump(bytes.len());
    true
}

/// Consume a heredoc/nowdoc body through the line holding its closing label.
fn heredoc(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let label = lex.slice()[3..]
        .trim_matches(|c: char| c == ' ' || c == '\t' || c == '"' || c == '\'')
        .to_string();
    let rest = lex.remainder();
    let mut consumed = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_start_matches([' ', '\t']);
        if let Some(after) = trimmed.strip_prefix(label.as_str()) {
            if !after.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_') {
                let indent = line.len() - trimmed.len();
                lex.bump(consumed + indent + label.len());
                return true;
            }
        }
        consumed += line.len();
    }
    lex.bump(rest.len());
    true
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    #[regex(r"#([^\[\n][^\n]*)?")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("?>")]
    CloseTag,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"\$[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Variable,

    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Ident,

    #[token("\\")]
    Backslash,

    #[regex(r"0[xX][0-9a-fA-F_]+|0[bB][01_]+|[0-9][0-9_]*")]
    Integer,

    #[regex(r"([0-9][0-9_]*)?\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    Decimal,

    #[token("'", |lex| quoted(lex, b'\''))]
    #[token("\"", |lex| quoted(lex, b'"'))]
    #[token("`", |lex| quoted(lex, b'`'))]
    #[regex(
        r#"<<<[ \t]*("[a-zA-Z_][a-zA-Z0-9_]*"|'[a-zA-Z_][a-zA-Z0-9_]*'|[a-zA-Z_][a-zA-Z0-9_]*)"#,
        heredoc
    )]
    String,

    #[regex(r"\([ \t]*(int|integer|bool|boolean|float|double|real|string|array|object|unset|binary)[ \t]*\)")]
    Cast,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("::")]
    ColonColon,
    #[token("...")]
    Ellipsis,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    BangEqEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    #[token("<>")]
    BangEq,
    #[token("<=>")]
    Spaceship,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("->")]
    Arrow,
    #[token("?->")]
    NullsafeArrow,
    #[token("=>")]
    FatArrow,
    #[token("**")]
    StarStar,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("??")]
    QuestionQuestion,
    #[token("#[")]
    HashBracket,
    #[regex(r"(\*\*|\?\?|<<|>>|[-+*/.%&|^])=")]
    CompoundAssign,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("!")]
    Bang,
    #[token("?")]
    Question,
    #[token("@")]
    At,
    #[token("$")]
    Dollar,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            // Trivia
            Whitespace => TokenKind::WHITESPACE,
            LineComment => TokenKind::LINE_COMMENT,
            BlockComment => TokenKind::BLOCK_COMMENT,
            // Handled by the lexer loop; never surfaces as a token
            CloseTag => TokenKind::WHITESPACE,

            // Literals
            Variable => TokenKind::VARIABLE,
            Ident => TokenKind::IDENT,
            Backslash => TokenKind::NS_SEPARATOR,
            Integer => TokenKind::INTEGER,
            Decimal => TokenKind::DECIMAL,
            String => TokenKind::STRING,
            Cast => TokenKind::CAST,

            // Multi-char punctuation
            ColonColon => TokenKind::COLON_COLON,
            Ellipsis => TokenKind::ELLIPSIS,
            EqEqEq => TokenKind::EQ_EQ_EQ,
            BangEqEq => TokenKind::BANG_EQ_EQ,
            EqEq => TokenKind::EQ_EQ,
            BangEq => TokenKind::BANG_EQ,
            Spaceship => TokenKind::SPACESHIP,
            LtEq => TokenKind::LT_EQ,
            GtEq => TokenKind::GT_EQ,
            Arrow => TokenKind::ARROW,
            NullsafeArrow => TokenKind::NULLSAFE_ARROW,
            FatArrow => TokenKind::FAT_ARROW,
            StarStar => TokenKind::STAR_STAR,
            PlusPlus => TokenKind::PLUS_PLUS,
            MinusMinus => TokenKind::MINUS_MINUS,
            Shl => TokenKind::SHL,
            Shr => TokenKind::SHR,
            AmpAmp => TokenKind::AMP_AMP,
            PipePipe => TokenKind::PIPE_PIPE,
            QuestionQuestion => TokenKind::QUESTION_QUESTION,
            HashBracket => TokenKind::HASH_BRACKET,
            CompoundAssign => TokenKind::COMPOUND_ASSIGN,

            // Single-char punctuation
            LBrace => TokenKind::L_BRACE,
            RBrace => TokenKind::R_BRACE,
            LBracket => TokenKind::L_BRACKET,
            RBracket => TokenKind::R_BRACKET,
            LParen => TokenKind::L_PAREN,
            RParen => TokenKind::R_PAREN,
            Semicolon => TokenKind::SEMICOLON,
            Comma => TokenKind::COMMA,
            Colon => TokenKind::COLON,
            Dot => TokenKind::DOT,
            Eq => TokenKind::EQ,
            Lt => TokenKind::LT,
            Gt => TokenKind::GT,
            Plus => TokenKind::PLUS,
            Minus => TokenKind::MINUS,
            Star => TokenKind::STAR,
            Slash => TokenKind::SLASH,
            Percent => TokenKind::PERCENT,
            Amp => TokenKind::AMP,
            Pipe => TokenKind::PIPE,
            Caret => TokenKind::CARET,
            Tilde => TokenKind::TILDE,
            Bang => TokenKind::BANG,
            Question => TokenKind::QUESTION,
            At => TokenKind::AT,
            Dollar => TokenKind::DOLLAR,
        }
    }
}
