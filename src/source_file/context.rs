//! Parser state shared by the statement handlers.
//!
//! Every token the handlers consume goes through [`Parser::next_token`],
//! which keeps the brace depth, the comment pool and the look-back buffer in
//! step with the stream. [`Parser::unget_token`] undoes exactly one read.

use tracing::trace;

use super::SourceFile;
use super::lookback::LookBack;
use super::resolve::{AliasTable, make_identifier_absolute};
use crate::base::GLOBAL_NAMESPACE;
use crate::doc::DocCommentParser;
use crate::entity::{Entity, EntityId, EntityKind, EntityTree};
use crate::parser::{Token, TokenKind, TokenSource};

pub(super) struct Parser<'d, S> {
    source: S,
    pub(super) docs: &'d dyn DocCommentParser,
    pub(super) filename: String,
    pub(super) parse_function_body: bool,

    pub(super) tree: EntityTree,
    root: Option<EntityId>,
    scopes: Vec<EntityId>,
    pub(super) aliases: AliasTable,
    pub(super) defines: Vec<EntityId>,
    pub(super) comments: Vec<Token>,
    pub(super) lookback: LookBack,

    /// Brace depth after the last token read
    pub(super) depth: u32,
    depth_before_last: u32,
    pub(super) reached_eof: bool,
}

impl<'d, S: TokenSource> Parser<'d, S> {
    pub fn new(
        source: S,
        filename: &str,
        parse_function_body: bool,
        docs: &'d dyn DocCommentParser,
    ) -> Self {
        Self {
            source,
            docs,
            filename: filename.to_string(),
            parse_function_body,
            tree: EntityTree::new(),
            root: None,
            scopes: Vec::new(),
            aliases: AliasTable::new(),
            defines: Vec::new(),
            comments: Vec::new(),
            lookback: LookBack::default(),
            depth: 0,
            depth_before_last: 0,
            reached_eof: false,
        }
    }

    /// Parse the whole stream, then attach doc comments.
    pub fn run(mut self) -> SourceFile {
        self.parse_scope(None);
        let root = match self.root {
            Some(root) => root,
            None => self.current_scope(),
        };
        self.associate_docs(root);
        trace!(
            entities = self.tree.len(),
            aliases = self.aliases.len(),
            "parsed {}",
            self.filename
        );
        SourceFile {
            filename: self.filename,
            tree: self.tree,
            namespace: root,
            defines: self.defines,
            aliases: self.aliases,
            comments: self.comments,
        }
    }

    // ========================================================================
    // Token bookkeeping
    // ========================================================================

    pub fn next_token(&mut self) -> Option<Token> {
        let Some(token) = self.source.next_token() else {
            self.reached_eof = true;
            return None;
        };

        self.depth_before_last = self.depth;
        match token.kind {
            TokenKind::L_BRACE => self.depth += 1,
            TokenKind::R_BRACE => self.depth = self.depth.saturating_sub(1),
            TokenKind::SEMICOLON => self.lookback.clear(),
            kind if kind.is_block_comment() => self.comments.push(token.clone()),
            _ => {}
        }
        self.lookback.push(token.clone());
        Some(token)
    }

    /// Push `token`, the last one read, back to the source.
    pub fn unget_token(&mut self, token: &Token) {
        self.source.unget();
        self.depth = self.depth_before_last;
        if token.kind.is_block_comment() {
            self.comments.pop();
        }
        self.lookback.pop_if(token);
    }

    /// Read up to and including the first token of `kind`.
    pub fn read_until_found(&mut self, kind: TokenKind) -> Option<Token> {
        self.read_until_one_of(&[kind])
    }

    pub fn read_until_one_of(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        while let Some(token) = self.next_token() {
            if kinds.contains(&token.kind) {
                return Some(token);
            }
        }
        None
    }

    /// Skip through the next token of `kind`. False when input ran out first.
    pub fn consume_until(&mut self, kind: TokenKind) -> bool {
        self.read_until_found(kind).is_some()
    }

    /// Skip to the `}` matching a `{` that was just read.
    pub fn skip_block(&mut self) -> bool {
        let inner = self.depth;
        while let Some(token) = self.next_token() {
            if token.is(TokenKind::R_BRACE) && self.depth < inner {
                return true;
            }
        }
        false
    }

    /// Skip an attribute group whose `#[` was just read.
    pub fn skip_attribute(&mut self) -> bool {
        let mut open = 1u32;
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::L_BRACKET | TokenKind::HASH_BRACKET => open += 1,
                TokenKind::R_BRACKET => {
                    open -= 1;
                    if open == 0 {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    /// Skip the rest of a statement unless `last` already ended it.
    pub fn finish_statement(&mut self, last: &Token) {
        if !last.is(TokenKind::SEMICOLON) {
            self.consume_until(TokenKind::SEMICOLON);
        }
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    /// Innermost open scope. Creates the global namespace when no
    /// `namespace` statement came first.
    pub fn current_scope(&mut self) -> EntityId {
        if let Some(&top) = self.scopes.last() {
            return top;
        }
        match self.root {
            Some(root) => {
                self.scopes.push(root);
                root
            }
            None => self.open_namespace(GLOBAL_NAMESPACE, None),
        }
    }

    pub fn has_namespace(&self) -> bool {
        self.root.is_some()
    }

    /// Create the file's namespace and make it the outermost scope.
    /// `keyword` is the `namespace` token; the implicit global namespace has none.
    pub fn open_namespace(&mut self, path: &str, keyword: Option<&Token>) -> EntityId {
        let mut namespace = Entity::new(EntityKind::Namespace);
        namespace.set_full_name(path);
        if let Some(keyword) = keyword {
            namespace.line = keyword.line;
            namespace.offset = keyword.offset;
        }
        namespace.filename = self.filename.clone();
        let root = self.tree.alloc(namespace);
        self.root = Some(root);
        self.scopes.push(root);
        root
    }

    pub fn push_scope(&mut self, id: EntityId) {
        trace!(depth = self.depth, "enter {}", self.tree[id].full_name());
        self.scopes.push(id);
    }

    pub fn pop_scope(&mut self) {
        if let Some(id) = self.scopes.pop() {
            trace!(depth = self.depth, "leave {}", self.tree[id].full_name());
        }
    }

    /// Close a scope whose body ended normally. At end of input the stack
    /// no longer matters and is left alone.
    pub fn pop_scope_unless_eof(&mut self) {
        if !self.reached_eof {
            self.pop_scope();
        }
    }

    /// The current scope when it is a class, interface or trait.
    pub fn current_class(&self) -> Option<EntityId> {
        self.scopes
            .last()
            .copied()
            .filter(|&id| self.tree[id].is_class())
    }

    /// Nearest class on the scope's ancestor chain.
    pub fn enclosing_class(&self) -> Option<EntityId> {
        let mut current = self.scopes.last().copied();
        while let Some(id) = current {
            if self.tree[id].is_class() {
                return Some(id);
            }
            current = self.tree[id].parent();
        }
        None
    }

    /// Full name of the file's namespace, `\` until one is declared.
    pub fn namespace_path(&self) -> &str {
        self.root
            .map(|root| self.tree[root].full_name())
            .unwrap_or(GLOBAL_NAMESPACE)
    }

    pub fn make_absolute(&self, name: &str) -> String {
        make_identifier_absolute(name, &self.aliases, self.namespace_path())
    }

    /// New entity stamped with this file's name and the position of `at`.
    pub fn entity(&self, kind: EntityKind, name: &str, at: &Token) -> Entity {
        let mut entity = Entity::new(kind);
        entity.set_full_name(name);
        entity.line = at.line;
        entity.offset = at.offset;
        entity.filename = self.filename.clone();
        entity
    }
}
