//! Source-file parsing.
//!
//! [`SourceFile`] is the result of one pass over a PHP file: an entity tree
//! rooted at the file's namespace, the `define()` constants found along the
//! way, the `use` alias table and every block comment seen.
//!
//! ## Parsing model
//!
//! The parser is a token-driven state machine over a [`TokenSource`] with a
//! scope stack. Scope bodies are dispatched by one loop that returns when
//! the `}` closing the scope is seen; declaration handlers run nested
//! instances of it for class bodies. Modifiers are not parsed eagerly. They
//! are recovered from a look-back buffer of the tokens since the last
//! statement boundary once the declaration kind is known.
//!
//! Nothing here reports errors: unexpected tokens are skipped, truncated
//! declarations are dropped or kept partially, and end of input simply
//! stops the pass.
//!
//! ```text
//! TokenSource → Parser (scope stack, look-back, aliases) → EntityTree
//!                                   ↓
//!                         doc-comment association
//! ```

mod context;
mod declarations;
mod doc_pass;
mod driver;
mod expression;
mod function;
mod lookback;
mod resolve;


use std::fmt;

use tracing::trace;

pub use function::CLOSURE_NAME;
pub use resolve::{AliasTable, make_identifier_absolute};

use context::Parser;

use crate::doc::{DocCommentParser, PhpDocParser};
use crate::entity::{Entity, EntityId, EntityKind, EntityTree, VariableFlags};
use crate::parser::{Token, TokenSource, TokenStream};

/// Knobs for one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Stamped on every entity
    pub filename: String,
    /// Record local variables of function bodies
    pub parse_function_body: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_function_bodies(mut self, enabled: bool) -> Self {
        self.parse_function_body = enabled;
        self
    }
}

/// Entities extracted from one PHP file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    filename: String,
    tree: EntityTree,
    namespace: EntityId,
    defines: Vec<EntityId>,
    aliases: AliasTable,
    comments: Vec<Token>,
}

impl SourceFile {
    pub fn parse(text: &str) -> Self {
        Self::parse_with_options(text, &ParseOptions::default())
    }

    pub fn parse_with_options(text: &str, options: &ParseOptions) -> Self {
        Self::parse_tokens(TokenStream::new(text), options, &PhpDocParser)
    }

    /// Parse from any token source, using `docs` to read doc comments.
    pub fn parse_tokens<S: TokenSource>(
        source: S,
        options: &ParseOptions,
        docs: &dyn DocCommentParser,
    ) -> Self {
        trace!(
            filename = %options.filename,
            function_bodies = options.parse_function_body,
            "parse"
        );
        Parser::new(
            source,
            &options.filename,
            options.parse_function_body,
            docs,
        )
        .run()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn tree(&self) -> &EntityTree {
        &self.tree
    }

    /// The file's namespace; the global namespace `\` when none was declared.
    pub fn namespace(&self) -> &Entity {
        &self.tree[self.namespace]
    }

    pub fn namespace_id(&self) -> EntityId {
        self.namespace
    }

    pub fn get(&self, id: EntityId) -> &Entity {
        &self.tree[id]
    }

    pub fn children(&self, id: EntityId) -> impl Iterator<Item = &Entity> + '_ {
        self.tree.children(id)
    }

    /// Global constants registered with `define()`, in source order.
    pub fn defines(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.defines.iter().map(|&id| &self.tree[id])
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The alias table as class entities whose short name is the alias.
    pub fn alias_entities(&self) -> Vec<Entity> {
        self.aliases
            .iter()
            .map(|(alias, full_name)| {
                let mut entity = Entity::new(EntityKind::class());
                entity.set_full_name(full_name);
                entity.set_short_name(alias);
                entity.filename = self.filename.clone();
                entity
            })
            .collect()
    }

    /// Every block and doc comment of the file, in source order.
    pub fn comments(&self) -> &[Token] {
        &self.comments
    }

    /// Resolve `name` the way the parser resolved names at end of file.
    pub fn make_identifier_absolute(&self, name: &str) -> String {
        make_identifier_absolute(name, &self.aliases, self.namespace().full_name())
    }

    /// First entity below the namespace whose full name is `name`.
    pub fn find(&self, name: &str) -> Option<&Entity> {
        self.tree
            .descendants(self.namespace)
            .into_iter()
            .map(|id| &self.tree[id])
            .find(|e| e.full_name() == name)
    }

    /// Top-level classes, interfaces and traits.
    pub fn classes(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.children(self.namespace).filter(|e| e.is_class())
    }

    /// Top-level functions.
    pub fn functions(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.children(self.namespace).filter(|e| e.is_function())
    }

    fn fmt_entity(&self, f: &mut fmt::Formatter<'_>, id: EntityId, indent: usize) -> fmt::Result {
        let entity = &self.tree[id];
        write!(f, "{:indent$}{} {}", "", entity.kind.display(), entity.full_name())?;
        match &entity.kind {
            EntityKind::Namespace => {}
            EntityKind::Class(info) => {
                if !info.extends.is_empty() {
                    write!(f, " extends {}", info.extends)?;
                }
                if !info.implements.is_empty() {
                    write!(f, " implements {}", info.implements.join(", "))?;
                }
                if !info.traits.is_empty() {
                    write!(f, " uses {}", info.traits.join(", "))?;
                }
            }
            EntityKind::Function(info) => {
                write!(f, "(")?;
                let params = self
                    .tree
                    .children(id)
                    .filter(|c| c.is_function_arg())
                    .map(|c| c.full_name())
                    .collect::<Vec<_>>();
                write!(f, "{})", params.join(", "))?;
                if !info.return_value.is_empty() {
                    write!(f, ": {}", info.return_value)?;
                }
                let names = flag_names(info.flags.iter_names().map(|(name, _)| name));
                if !names.is_empty() {
                    write!(f, " [{names}]")?;
                }
            }
            EntityKind::Variable(info) => {
                if !info.type_hint.is_empty() {
                    write!(f, ": {}", info.type_hint)?;
                }
                if !info.default_value.is_empty() {
                    write!(f, " = {}", info.default_value)?;
                } else if !info.expression_hint.is_empty() {
                    write!(f, " = {}", info.expression_hint)?;
                }
                let flags = info.flags - VariableFlags::FUNCTION_ARG;
                let names = flag_names(flags.iter_names().map(|(name, _)| name));
                if !names.is_empty() {
                    write!(f, " [{names}]")?;
                }
            }
        }
        writeln!(f, " @{}", entity.line)?;

        for &child in entity.children() {
            if !self.tree[child].is_function_arg() {
                self.fmt_entity(f, child, indent + 2)?;
            }
        }
        Ok(())
    }
}

fn flag_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable dump: the alias table, then the entity tree.
impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "aliases:")?;
        for (alias, full_name) in self.aliases.iter() {
            writeln!(f, "  {alias} => {full_name}")?;
        }
        if self.defines.is_empty() {
            writeln!(f, "defines: none")?;
        } else {
            writeln!(f, "defines:")?;
            for define in self.defines() {
                writeln!(f, "  {} @{}", define.full_name(), define.line)?;
            }
        }
        self.fmt_entity(f, self.namespace, 0)
    }
}
