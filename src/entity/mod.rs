//! Entity tree - the symbol table produced by parsing one PHP file.
//!
//! Entities live in an arena ([`EntityTree`]) and refer to each other by
//! [`EntityId`]. Each entity has exactly one owner: the child list of its
//! parent, or one of the side lists kept by the parser (defines, aliases).
//! The `parent` link is a lookup relation only.
//!
//! ## Key Types
//!
//! - [`Entity`] - Shared header (names, provenance, links) plus a kind payload
//! - [`EntityKind`] - `Namespace`, `Class`, `Function` or `Variable`
//! - [`FunctionFlags`], [`VariableFlags`] - Modifier bitsets

mod flags;
mod tree;


pub use flags::{FunctionFlags, VariableFlags};
pub use tree::EntityTree;

use text_size::TextSize;

use crate::base::short_name_of;

/// Index of an entity in its [`EntityTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u32);

impl EntityId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Class, interface or trait details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassInfo {
    /// Absolute name of the parent class, or empty
    pub extends: String,
    /// Absolute names, in declaration order, without duplicates
    pub implements: Vec<String>,
    /// Absolute names from `use Trait;` statements inside the body
    pub traits: Vec<String>,
    pub is_interface: bool,
    pub is_trait: bool,
}

impl ClassInfo {
    /// Append an implemented interface unless it is already listed.
    pub fn add_implements(&mut self, name: String) {
        if !self.implements.contains(&name) {
            self.implements.push(name);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionInfo {
    pub flags: FunctionFlags,
    /// Return type taken from the doc comment
    pub return_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableInfo {
    pub flags: VariableFlags,
    /// Absolute class name or primitive keyword, or empty
    pub type_hint: String,
    /// Right-hand side of the initializing assignment when it is not `new X(...)`
    pub expression_hint: String,
    /// Default value text (parameters only)
    pub default_value: String,
    pub is_reference: bool,
}

/// Kind-specific payload of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Namespace,
    Class(ClassInfo),
    Function(FunctionInfo),
    Variable(VariableInfo),
}

impl EntityKind {
    pub fn class() -> Self {
        EntityKind::Class(ClassInfo::default())
    }

    pub fn function() -> Self {
        EntityKind::Function(FunctionInfo::default())
    }

    pub fn variable() -> Self {
        EntityKind::Variable(VariableInfo::default())
    }

    pub fn display(&self) -> &'static str {
        match self {
            EntityKind::Namespace => "namespace",
            EntityKind::Class(info) if info.is_interface => "interface",
            EntityKind::Class(info) if info.is_trait => "trait",
            EntityKind::Class(_) => "class",
            EntityKind::Function(_) => "function",
            EntityKind::Variable(_) => "variable",
        }
    }
}

/// A node of the entity tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    pub kind: EntityKind,
    full_name: String,
    short_name: String,
    pub filename: String,
    /// 1-based source line; 0 when unknown
    pub line: u32,
    /// Byte offset of the declaring token
    pub offset: TextSize,
    pub doc_comment: String,
    parent: Option<EntityId>,
    children: Vec<EntityId>,
}

impl Entity {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            id: EntityId::new(0),
            kind,
            full_name: String::new(),
            short_name: String::new(),
            filename: String::new(),
            line: 0,
            offset: TextSize::new(0),
            doc_comment: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Set the full name; the short name follows as its last path component.
    pub fn set_full_name(&mut self, name: impl Into<String>) {
        self.full_name = name.into();
        self.short_name = short_name_of(&self.full_name).to_string();
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Override the derived short name (used for aliases).
    pub fn set_short_name(&mut self, name: impl Into<String>) {
        self.short_name = name.into();
    }

    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    pub fn children(&self) -> &[EntityId] {
        &self.children
    }

    pub fn is_namespace(&self) -> bool {
        matches!(self.kind, EntityKind::Namespace)
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, EntityKind::Class(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, EntityKind::Function(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.kind, EntityKind::Variable(_))
    }

    pub fn as_class(&self) -> Option<&ClassInfo> {
        match &self.kind {
            EntityKind::Class(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_class_mut(&mut self) -> Option<&mut ClassInfo> {
        match &mut self.kind {
            EntityKind::Class(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionInfo> {
        match &self.kind {
            EntityKind::Function(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_function_mut(&mut self) -> Option<&mut FunctionInfo> {
        match &mut self.kind {
            EntityKind::Function(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableInfo> {
        match &self.kind {
            EntityKind::Variable(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_variable_mut(&mut self) -> Option<&mut VariableInfo> {
        match &mut self.kind {
            EntityKind::Variable(info) => Some(info),
            _ => None,
        }
    }

    pub fn is_interface(&self) -> bool {
        self.as_class().is_some_and(|c| c.is_interface)
    }

    pub fn is_function_arg(&self) -> bool {
        self.as_variable()
            .is_some_and(|v| v.flags.contains(VariableFlags::FUNCTION_ARG))
    }
}
