//! Attach collected doc comments to the entities they precede.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::context::Parser;
use crate::entity::{EntityId, EntityKind, VariableFlags};
use crate::parser::{Token, TokenSource};

impl<S: TokenSource> Parser<'_, S> {
    /// Walk the tree from `root`, parents first. An entity takes the comment
    /// ending on the line just above it, or failing that one on its own line
    /// that starts before the entity's token.
    /// A comment is used at most once. Parameters without a comment of their
    /// own borrow the `@param` type from their function's comment.
    pub(super) fn associate_docs(&mut self, root: EntityId) {
        let mut by_end_line: FxHashMap<u32, Token> = FxHashMap::default();
        for comment in &self.comments {
            by_end_line.insert(comment.end_line, comment.clone());
        }

        for id in self.tree.descendants(root) {
            if self.tree[id].filename.is_empty() {
                self.tree[id].filename = self.filename.clone();
            }

            let line = self.tree[id].line;
            let offset = self.tree[id].offset;
            let comment = line
                .checked_sub(1)
                .and_then(|above| by_end_line.remove(&above))
                .or_else(|| {
                    let precedes = by_end_line
                        .get(&line)
                        .is_some_and(|comment| comment.offset < offset);
                    if precedes {
                        by_end_line.remove(&line)
                    } else {
                        None
                    }
                });

            match comment {
                Some(comment) => self.apply_doc(id, &comment),
                None if self.tree[id].is_function_arg() => self.apply_param_doc(id),
                None => {}
            }
        }
    }

    fn apply_doc(&mut self, id: EntityId, comment: &Token) {
        let doc = self.docs.parse(&comment.text);
        trace!(line = comment.line, "doc comment for `{}`", self.tree[id].full_name());

        let return_type = doc.return_type.as_deref().map(|ty| self.make_absolute(ty));
        let var_type = doc.var_type.as_deref().map(|ty| self.make_absolute(ty));

        let entity = &mut self.tree[id];
        entity.doc_comment = comment.text.to_string();
        match &mut entity.kind {
            EntityKind::Function(info) => {
                if let Some(ty) = return_type {
                    info.return_value = ty;
                }
            }
            EntityKind::Variable(info) if !info.flags.contains(VariableFlags::FUNCTION_ARG) => {
                if let Some(ty) = var_type.filter(|ty| !ty.is_empty()) {
                    info.type_hint = ty;
                }
            }
            _ => {}
        }
    }

    fn apply_param_doc(&mut self, id: EntityId) {
        let Some(function) = self.tree[id].parent() else {
            return;
        };
        let function_doc = &self.tree[function].doc_comment;
        if function_doc.is_empty() {
            return;
        }

        let doc = self.docs.parse(function_doc);
        let Some(ty) = doc.param_type(self.tree[id].full_name()) else {
            return;
        };
        let ty = self.make_absolute(ty);
        if let Some(info) = self.tree[id].as_variable_mut() {
            if info.type_hint.is_empty() {
                info.type_hint = ty;
            }
        }
    }
}

