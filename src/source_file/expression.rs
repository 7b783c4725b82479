//! Right-hand sides of assignments.

use super::context::Parser;
use crate::entity::EntityId;
use crate::parser::{TokenKind, TokenSource};

impl<S: TokenSource> Parser<'_, S> {
    /// Concatenate the text of an expression up to its terminating `;`.
    ///
    /// A `{` outside parentheses, or a `}` that closes an enclosing block,
    /// also ends the expression and is pushed back. String literals, casts
    /// and comments are left out. Returns `None` for `require` expressions
    /// and when input runs out.
    pub(super) fn read_expression(&mut self) -> Option<String> {
        let mut expression = String::new();
        let mut nesting = 0u32;
        let mut braces = 0u32;

        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::SEMICOLON if braces == 0 => return Some(expression),
                TokenKind::L_BRACE if nesting == 0 => {
                    self.unget_token(&token);
                    return Some(expression);
                }
                TokenKind::R_BRACE if braces == 0 => {
                    self.unget_token(&token);
                    return Some(expression);
                }
                TokenKind::REQUIRE_KW | TokenKind::REQUIRE_ONCE_KW => return None,
                TokenKind::STRING | TokenKind::CAST => {}
                kind if kind.is_comment() => {}
                TokenKind::L_PAREN | TokenKind::L_BRACKET => {
                    nesting += 1;
                    expression.push_str(&token.text);
                }
                TokenKind::R_PAREN | TokenKind::R_BRACKET => {
                    nesting = nesting.saturating_sub(1);
                    expression.push_str(&token.text);
                }
                TokenKind::L_BRACE => {
                    braces += 1;
                    expression.push('{');
                }
                TokenKind::R_BRACE => {
                    braces -= 1;
                    expression.push('}');
                }
                TokenKind::NEW_KW => expression.push_str("new "),
                _ => expression.push_str(&token.text),
            }
        }
        None
    }

    /// Record what an assignment tells about a freshly created variable:
    /// the class of a `new` expression, or the raw expression text.
    pub(super) fn apply_assignment(&mut self, variable: EntityId, expression: &str) {
        let class_hint = expression.strip_prefix("new ").map(|rest| {
            let rest = rest.trim();
            let class = rest.find('(').map_or(rest, |paren| &rest[..paren]);
            self.make_absolute(class)
        });

        let Some(info) = self.tree[variable].as_variable_mut() else {
            return;
        };
        match class_hint {
            Some(class) => info.type_hint = class,
            None => info.expression_hint = expression.to_string(),
        }
    }
}
