//! Statement dispatch.

use tracing::{debug, trace};

use super::context::Parser;
use crate::entity::{EntityKind, VariableFlags, VariableInfo};
use crate::parser::{Token, TokenKind, TokenSource};

impl<S: TokenSource> Parser<'_, S> {
    /// Dispatch statements until a `}` brings the depth back to
    /// `exit_depth`, or until input runs out when there is none.
    pub(super) fn parse_scope(&mut self, exit_depth: Option<u32>) {
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::EQ | TokenKind::L_BRACE | TokenKind::SEMICOLON => self.lookback.clear(),
                TokenKind::R_BRACE => {
                    self.lookback.clear();
                    if exit_depth == Some(self.depth) {
                        return;
                    }
                }
                TokenKind::VARIABLE => {
                    let scope = self.current_scope();
                    if !self.tree[scope].is_class() {
                        self.on_variable(&token);
                    }
                }
                TokenKind::PUBLIC_KW | TokenKind::PRIVATE_KW | TokenKind::PROTECTED_KW => {
                    self.on_member();
                }
                TokenKind::DEFINE_KW => self.on_define(&token),
                TokenKind::CONST_KW => self.on_const(VariableFlags::empty()),
                TokenKind::REQUIRE_KW
                | TokenKind::REQUIRE_ONCE_KW
                | TokenKind::INCLUDE_KW
                | TokenKind::INCLUDE_ONCE_KW => self.lookback.clear(),
                TokenKind::USE_KW => {
                    if self.enclosing_class().is_some() {
                        self.on_use_trait();
                    } else {
                        self.on_use();
                    }
                    self.lookback.clear();
                }
                TokenKind::CLASS_KW | TokenKind::INTERFACE_KW | TokenKind::TRAIT_KW => {
                    self.on_class(&token);
                    self.lookback.clear();
                }
                TokenKind::NAMESPACE_KW => {
                    self.on_namespace(&token);
                    self.lookback.clear();
                }
                TokenKind::FUNCTION_KW => {
                    self.on_function();
                    self.lookback.clear();
                }
                _ => {}
            }
        }
    }

    /// A visibility keyword in a class body: look ahead for the member it
    /// introduces.
    fn on_member(&mut self) {
        let Some(class) = self.current_class() else {
            return;
        };

        let Some(token) = self.read_until_one_of(&[
            TokenKind::VARIABLE,
            TokenKind::FUNCTION_KW,
            TokenKind::CONST_KW,
            TokenKind::SEMICOLON,
            TokenKind::R_BRACE,
        ]) else {
            trace!("input ended inside member declaration");
            return;
        };

        match token.kind {
            TokenKind::VARIABLE => {
                let flags = self.lookback.variable_flags() | VariableFlags::MEMBER;
                let kind = EntityKind::Variable(VariableInfo {
                    flags,
                    ..Default::default()
                });
                let member = self.entity(kind, &token.text, &token);
                self.tree.add(class, member);
                self.consume_until(TokenKind::SEMICOLON);
            }
            TokenKind::FUNCTION_KW => {
                self.on_function();
                self.lookback.clear();
            }
            TokenKind::CONST_KW => {
                let visibility = self.lookback.variable_flags() & VariableFlags::VISIBILITY;
                self.on_const(visibility);
            }
            TokenKind::R_BRACE => {
                debug!(line = token.line, "member declaration cut short by `}}`");
                self.unget_token(&token);
            }
            _ => debug!(line = token.line, "member declaration without a name"),
        }
    }

    /// `$name [= expression]` outside a class body.
    fn on_variable(&mut self, token: &Token) {
        let scope = self.current_scope();
        let created = if self.tree.find_child(scope, &token.text).is_none() {
            let variable = self.entity(EntityKind::variable(), &token.text, token);
            Some(self.tree.add(scope, variable))
        } else {
            None
        };

        let Some(next) = self.next_token() else {
            return;
        };
        if !next.is(TokenKind::EQ) {
            self.lookback.clear();
            self.unget_token(&next);
            return;
        }

        let Some(expression) = self.read_expression() else {
            return;
        };
        if let Some(id) = created {
            self.apply_assignment(id, &expression);
        }
    }
}
