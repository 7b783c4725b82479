//! # phpscope
//!
//! Tolerant, single-pass symbol extraction for PHP source files.
//!
//! The parser turns a token stream into an entity tree (namespaces, classes,
//! interfaces, traits, functions and variables), resolves names against the
//! file's `use` aliases and namespace, and attaches doc comments by line
//! proximity. It never fails: incomplete input yields a truncated but
//! well-formed tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project      → File loading, parallel multi-file parsing
//!   ↓
//! source_file  → Scope-stack driver, declaration parsers, name resolution,
//!   ↓            doc association
//! doc          → Doc-comment model and tag parser
//!   ↓
//! entity       → Entity tree arena, entity kinds, flags
//!   ↓
//! parser       → Logos lexer, token kinds, TokenSource trait
//!   ↓
//! base         → Name primitives (separator, scalar types)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → entity → doc → source_file → project)
// ============================================================================

/// Foundation helpers for PHP names
pub mod base;

/// Lexer: logos tokenizer, token kinds, keyword table, token sources
pub mod parser;

/// Entity tree: the symbol table produced by parsing
pub mod entity;

/// Doc comments: model and default tag parser
pub mod doc;

/// The source-file parser
pub mod source_file;

/// Loading files from disk
pub mod project;

pub use doc::{DocComment, DocCommentParser, PhpDocParser};
pub use entity::{Entity, EntityId, EntityKind, EntityTree, FunctionFlags, VariableFlags};
pub use parser::{Lexer, Token, TokenKind, TokenSource, TokenStream};
pub use project::{LoadError, load_and_parse, parse_files};
pub use source_file::{AliasTable, ParseOptions, SourceFile};
