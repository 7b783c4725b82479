//! Look-back buffer: tokens seen since the last statement boundary.

use crate::entity::{FunctionFlags, VariableFlags};
use crate::parser::{Token, TokenKind};

/// Tokens since the last `;`, `{`, `}`, `=` or finished declaration, in
/// the order they were read. Modifier flags are recovered from it once the
/// parser knows what kind of declaration it is looking at.
#[derive(Debug, Default)]
pub(super) struct LookBack {
    tokens: Vec<Token>,
}

impl LookBack {
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Drop the newest token if it is `token` (undo of a push).
    pub fn pop_if(&mut self, token: &Token) {
        if self.tokens.last() == Some(token) {
            self.tokens.pop();
        }
    }

    #[cfg(test)]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|t| t.kind == kind)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Function modifiers. No visibility bit is set unless a keyword says so.
    pub fn function_flags(&self) -> FunctionFlags {
        self.tokens
            .iter()
            .fold(FunctionFlags::empty(), |flags, token| match token.kind {
                TokenKind::ABSTRACT_KW => flags | FunctionFlags::ABSTRACT,
                TokenKind::FINAL_KW => flags | FunctionFlags::FINAL,
                TokenKind::STATIC_KW => flags | FunctionFlags::STATIC,
                TokenKind::PUBLIC_KW => flags.with_visibility(FunctionFlags::PUBLIC),
                TokenKind::PRIVATE_KW => flags.with_visibility(FunctionFlags::PRIVATE),
                TokenKind::PROTECTED_KW => flags.with_visibility(FunctionFlags::PROTECTED),
                _ => flags,
            })
    }

    /// Variable modifiers. Visibility defaults to public.
    pub fn variable_flags(&self) -> VariableFlags {
        self.tokens
            .iter()
            .fold(VariableFlags::PUBLIC, |flags, token| match token.kind {
                TokenKind::STATIC_KW => flags | VariableFlags::STATIC,
                TokenKind::CONST_KW => flags | VariableFlags::CONST,
                TokenKind::PUBLIC_KW => flags.with_visibility(VariableFlags::PUBLIC),
                TokenKind::PRIVATE_KW => flags.with_visibility(VariableFlags::PRIVATE),
                TokenKind::PROTECTED_KW => flags.with_visibility(VariableFlags::PROTECTED),
                _ => flags,
            })
    }
}
