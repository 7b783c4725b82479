//! Function declarations: signature, modifiers and body.

use tracing::{debug, trace};

use super::context::Parser;
use crate::entity::{
    EntityId, EntityKind, FunctionFlags, FunctionInfo, VariableFlags, VariableInfo,
};
use crate::parser::{Token, TokenKind, TokenSource};

/// Name given to anonymous functions.
pub const CLOSURE_NAME: &str = "{closure}";

/// A parameter whose variable token has been read but whose default value
/// may still be coming.
struct PendingParam {
    token: Token,
    type_hint: String,
    is_reference: bool,
}

impl<S: TokenSource> Parser<'_, S> {
    /// Called after the `function` keyword.
    pub(super) fn on_function(&mut self) {
        let Some(mut token) = self.next_token() else {
            return;
        };
        if token.is(TokenKind::AMP) {
            // returns by reference
            let Some(next) = self.next_token() else {
                return;
            };
            token = next;
        }

        let (name, signature_open) = match token.kind {
            TokenKind::L_PAREN => (CLOSURE_NAME.to_string(), true),
            TokenKind::IDENT => (token.text.to_string(), false),
            kind if kind.is_keyword() => (token.text.to_string(), false),
            _ => {
                trace!(line = token.line, "`function` followed by `{}`", token.text);
                return;
            }
        };

        // modifiers are read before the parameter list can add its own
        let mut flags = self.lookback.function_flags();
        let scope = self.current_scope();
        if self.tree[scope].is_interface() {
            flags |= FunctionFlags::ABSTRACT;
        }

        let kind = EntityKind::Function(FunctionInfo {
            flags,
            ..FunctionInfo::default()
        });
        let function = self.entity(kind, &name, &token);
        let id = self.tree.add(scope, function);
        self.push_scope(id);

        self.parse_signature(signature_open);

        if flags.contains(FunctionFlags::ABSTRACT) {
            if !self.consume_until(TokenKind::SEMICOLON) {
                debug!(line = token.line, "abstract function `{name}` is not terminated");
                self.pop_scope();
                return;
            }
        } else if self.read_until_found(TokenKind::L_BRACE).is_some() {
            if self.parse_function_body {
                self.parse_body(id);
            } else {
                self.skip_block();
            }
        } else {
            debug!(line = token.line, "function `{name}` has no body");
            self.pop_scope();
            return;
        }

        self.pop_scope_unless_eof();
        self.lookback.clear();
    }

    /// Parameter list. `open` is true when the `(` was already consumed.
    fn parse_signature(&mut self, open: bool) {
        if !open && self.read_until_found(TokenKind::L_PAREN).is_none() {
            return;
        }

        let mut depth = 1u32;
        let mut brackets = 0u32;
        let mut param: Option<PendingParam> = None;
        let mut type_hint = String::new();
        let mut default_value = String::new();
        let mut in_default = false;

        while let Some(token) = self.next_token() {
            match token.kind {
                kind if kind.is_comment() => {}
                TokenKind::VARIABLE if !in_default => {
                    let mut hint = std::mem::take(&mut type_hint);
                    let is_reference = hint.ends_with('&');
                    if is_reference {
                        hint.pop();
                    }
                    param = Some(PendingParam {
                        type_hint: self.resolve_type_hint(&hint),
                        token,
                        is_reference,
                    });
                }
                TokenKind::L_PAREN => {
                    depth += 1;
                    if in_default {
                        default_value.push('(');
                    }
                }
                TokenKind::R_PAREN => {
                    depth -= 1;
                    if depth == 0 {
                        self.add_param(param.take(), &default_value);
                        return;
                    }
                    if in_default {
                        default_value.push(')');
                    }
                }
                TokenKind::HASH_BRACKET if !in_default => {
                    if !self.skip_attribute() {
                        return;
                    }
                }
                TokenKind::L_BRACKET | TokenKind::R_BRACKET => {
                    if token.is(TokenKind::L_BRACKET) {
                        brackets += 1;
                    } else {
                        brackets = brackets.saturating_sub(1);
                    }
                    if in_default {
                        default_value.push_str(&token.text);
                    } else {
                        type_hint.push_str(&token.text);
                    }
                }
                TokenKind::COMMA if depth == 1 && brackets == 0 => {
                    self.add_param(param.take(), &default_value);
                    type_hint.clear();
                    default_value.clear();
                    in_default = false;
                }
                TokenKind::EQ if depth == 1 && brackets == 0 && !in_default => in_default = true,
                TokenKind::NEW_KW if in_default => default_value.push_str("new "),
                _ if in_default => default_value.push_str(&token.text),
                // promoted constructor parameters carry modifiers
                kind if kind.is_visibility() => {}
                TokenKind::ELLIPSIS => {}
                _ => type_hint.push_str(&token.text),
            }
        }
    }

    /// Resolve each member of a union hint. The nullable `?` is dropped.
    fn resolve_type_hint(&self, hint: &str) -> String {
        let hint = hint.strip_prefix('?').unwrap_or(hint);
        if !hint.contains('|') {
            return self.make_absolute(hint);
        }
        hint.split('|')
            .map(|part| self.make_absolute(part))
            .collect::<Vec<_>>()
            .join("|")
    }

    fn add_param(&mut self, param: Option<PendingParam>, default_value: &str) {
        let Some(param) = param else {
            return;
        };
        let kind = EntityKind::Variable(VariableInfo {
            flags: VariableFlags::FUNCTION_ARG,
            type_hint: param.type_hint,
            default_value: default_value.to_string(),
            is_reference: param.is_reference,
            ..VariableInfo::default()
        });
        let variable = self.entity(kind, &param.token.text, &param.token);
        let scope = self.current_scope();
        self.tree.add(scope, variable);
    }

    /// Collect local variables until the body's closing `}`.
    fn parse_body(&mut self, function: EntityId) {
        self.lookback.clear();
        let exit_depth = self.depth.saturating_sub(1);

        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::L_BRACE | TokenKind::SEMICOLON => self.lookback.clear(),
                TokenKind::R_BRACE => {
                    self.lookback.clear();
                    if self.depth == exit_depth {
                        return;
                    }
                }
                TokenKind::VARIABLE => {
                    let local = self.entity(EntityKind::variable(), &token.text, &token);
                    let id = self.tree.add(function, local);

                    let Some(next) = self.next_token() else {
                        return;
                    };
                    if !next.is(TokenKind::EQ) {
                        self.lookback.clear();
                        self.unget_token(&next);
                        continue;
                    }
                    if let Some(expression) = self.read_expression() {
                        self.apply_assignment(id, &expression);
                    } else if self.reached_eof {
                        return;
                    }
                }
                _ => {}
            }
        }
    }
}
