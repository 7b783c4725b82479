//! Namespace, import, class, trait-use, define and const statements.

use tracing::{debug, trace};

use super::context::Parser;
use crate::base::{ensure_absolute, short_name_of};
use crate::entity::{ClassInfo, EntityKind, VariableFlags, VariableInfo};
use crate::parser::{Token, TokenKind, TokenSource};

impl<S: TokenSource> Parser<'_, S> {
    /// `namespace A\B;` or `namespace A\B {`. Only the first namespace of a
    /// file is honored.
    pub(super) fn on_namespace(&mut self, keyword: &Token) {
        let mut path = String::new();
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::SEMICOLON => break,
                TokenKind::L_BRACE => {
                    self.unget_token(&token);
                    break;
                }
                kind if kind.is_comment() => {}
                _ => {
                    if path.is_empty() && !token.is(TokenKind::NS_SEPARATOR) {
                        path.push('\\');
                    }
                    path.push_str(&token.text);
                }
            }
        }

        if self.has_namespace() {
            debug!(line = keyword.line, "ignoring additional namespace `{path}`");
            return;
        }
        if path.is_empty() {
            path.push('\\');
        }
        self.open_namespace(&path, Some(keyword));
    }

    /// `use A\B [as C], D, E\{F, G as H};` at file level.
    pub(super) fn on_use(&mut self) {
        let mut prefix = String::new();
        let mut full_name = String::new();
        let mut alias = String::new();
        let mut current = String::new();

        while let Some(token) = self.next_token() {
            match token.kind {
                kind if kind.is_comment() => {}
                TokenKind::FUNCTION_KW | TokenKind::CONST_KW
                    if current.is_empty() && full_name.is_empty() => {}
                TokenKind::AS_KW => full_name = std::mem::take(&mut current),
                TokenKind::L_BRACE => prefix = std::mem::take(&mut current),
                TokenKind::COMMA | TokenKind::SEMICOLON | TokenKind::R_BRACE => {
                    if full_name.is_empty() {
                        full_name = std::mem::take(&mut current);
                    } else if alias.is_empty() {
                        alias = std::mem::take(&mut current);
                    }
                    self.add_alias(&format!("{prefix}{full_name}"), &alias, token.line);

                    current.clear();
                    full_name.clear();
                    alias.clear();
                    match token.kind {
                        TokenKind::R_BRACE => prefix.clear(),
                        TokenKind::SEMICOLON => return,
                        _ => {}
                    }
                }
                _ => current.push_str(&token.text),
            }
        }
    }

    fn add_alias(&mut self, full_name: &str, alias: &str, line: u32) {
        if full_name.is_empty() {
            return;
        }
        let alias = if alias.is_empty() {
            short_name_of(full_name)
        } else {
            alias
        };
        if alias.is_empty() {
            return;
        }
        if !self.aliases.insert(alias, full_name) {
            trace!(line, "alias `{alias}` already imported");
        }
    }

    /// `use T1, T2;` or `use T1, T2 { ... }` inside a class body.
    pub(super) fn on_use_trait(&mut self) {
        let Some(class) = self.enclosing_class() else {
            return;
        };

        let mut traits = Vec::new();
        let mut current = String::new();
        while let Some(token) = self.next_token() {
            match token.kind {
                kind if kind.is_comment() => {}
                TokenKind::COMMA => self.push_resolved(&mut traits, &mut current),
                TokenKind::SEMICOLON => {
                    self.push_resolved(&mut traits, &mut current);
                    break;
                }
                TokenKind::L_BRACE => {
                    self.push_resolved(&mut traits, &mut current);
                    self.skip_block();
                    break;
                }
                _ => current.push_str(&token.text),
            }
        }

        if let Some(info) = self.tree[class].as_class_mut() {
            info.traits.extend(traits);
        }
    }

    fn push_resolved(&self, names: &mut Vec<String>, current: &mut String) {
        let name = std::mem::take(current);
        if !name.trim().is_empty() {
            names.push(self.make_absolute(&name));
        }
    }

    /// `class|interface|trait Name [extends X] [implements Y, Z] { ... }`
    pub(super) fn on_class(&mut self, keyword: &Token) {
        let name = loop {
            let Some(token) = self.next_token() else {
                return;
            };
            if token.kind.is_comment() {
                continue;
            }
            if !token.is(TokenKind::IDENT) {
                // `Foo::class`, `new class`, or a truncated declaration
                debug!(line = token.line, "`{}` is not a class name", token.text);
                self.unget_token(&token);
                return;
            }
            break token;
        };

        let mut info = ClassInfo {
            is_interface: keyword.is(TokenKind::INTERFACE_KW),
            is_trait: keyword.is(TokenKind::TRAIT_KW),
            ..ClassInfo::default()
        };
        let full_name = self.make_absolute(&name.text);

        loop {
            let Some(token) = self.next_token() else {
                debug!(line = name.line, "input ended before body of `{full_name}`");
                return;
            };
            match token.kind {
                TokenKind::EXTENDS_KW => {
                    let Some(parent) = self.read_qualified_name() else {
                        return;
                    };
                    info.extends = self.make_absolute(&parent);
                }
                TokenKind::IMPLEMENTS_KW => {
                    let Some(names) = self.read_name_list(TokenKind::L_BRACE) else {
                        return;
                    };
                    for name in names {
                        info.add_implements(name);
                    }
                }
                TokenKind::SEMICOLON => {
                    debug!(line = token.line, "declaration of `{full_name}` has no body");
                    return;
                }
                TokenKind::L_BRACE => break,
                _ => {}
            }
        }

        let class = self.entity(EntityKind::Class(info), &full_name, &name);
        let scope = self.current_scope();
        let id = self.tree.add(scope, class);
        self.push_scope(id);
        self.lookback.clear();
        self.parse_scope(Some(self.depth.saturating_sub(1)));
        self.pop_scope_unless_eof();
    }

    /// Identifier run such as `Base` or `\Vendor\Base`. The token after the
    /// name is pushed back.
    fn read_qualified_name(&mut self) -> Option<String> {
        let first = self.read_until_one_of(&[TokenKind::IDENT, TokenKind::NS_SEPARATOR])?;
        let mut name = first.text.to_string();
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::IDENT | TokenKind::NS_SEPARATOR => name.push_str(&token.text),
                _ => {
                    self.unget_token(&token);
                    break;
                }
            }
        }
        Some(name)
    }

    /// Comma separated names up to `delimiter`, which is pushed back. Names
    /// come back resolved. `None` when input runs out first.
    fn read_name_list(&mut self, delimiter: TokenKind) -> Option<Vec<String>> {
        let mut names = Vec::new();
        let mut current = String::new();
        while let Some(token) = self.next_token() {
            match token.kind {
                kind if kind == delimiter => {
                    self.push_resolved(&mut names, &mut current);
                    self.unget_token(&token);
                    return Some(names);
                }
                kind if kind.is_comment() => {}
                TokenKind::COMMA => self.push_resolved(&mut names, &mut current),
                _ => current.push_str(&token.text),
            }
        }
        None
    }

    /// `define('NAME', value);` registers a global constant.
    pub(super) fn on_define(&mut self, keyword: &Token) {
        let Some(token) = self.next_token() else {
            return;
        };
        if !token.is(TokenKind::L_PAREN) {
            self.finish_statement(&token);
            return;
        }

        let Some(token) = self.next_token() else {
            return;
        };
        if let Some(name) = token.is(TokenKind::STRING).then(|| unquote(&token.text)).flatten() {
            let kind = EntityKind::Variable(VariableInfo {
                flags: VariableFlags::DEFINE,
                ..VariableInfo::default()
            });
            let define = self.entity(kind, &ensure_absolute(name), keyword);
            let id = self.tree.alloc(define);
            self.defines.push(id);
        } else {
            trace!(line = keyword.line, "define without a literal name");
        }

        self.finish_statement(&token);
    }

    /// `const [Type] NAME = value;` in a namespace or class body. The name is
    /// the last identifier before `=`.
    pub(super) fn on_const(&mut self, visibility: VariableFlags) {
        let mut name: Option<Token> = None;
        let end = loop {
            let Some(token) = self.next_token() else {
                return;
            };
            match token.kind {
                TokenKind::IDENT => name = Some(token),
                TokenKind::EQ | TokenKind::SEMICOLON => break token,
                _ => {}
            }
        };

        if let Some(name) = name {
            let kind = EntityKind::Variable(VariableInfo {
                flags: VariableFlags::MEMBER | VariableFlags::CONST | visibility,
                ..VariableInfo::default()
            });
            let constant = self.entity(kind, &name.text, &name);
            let scope = self.current_scope();
            self.tree.add(scope, constant);
        } else {
            debug!(line = end.line, "constant without a name");
        }
        self.finish_statement(&end);
    }
}

/// Strip matching single or double quotes.
fn unquote(text: &str) -> Option<&str> {
    ['\'', '"']
        .into_iter()
        .find_map(|q| text.strip_prefix(q)?.strip_suffix(q))
        .filter(|name| !name.is_empty())
}
