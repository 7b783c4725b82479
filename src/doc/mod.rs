//! Doc comments.
//!
//! A [`DocCommentParser`] turns the raw text of a `/** ... */` block into a
//! [`DocComment`] holding the tags the entity tree cares about: `@var`,
//! `@return` and `@param`. The parser is a seam so callers can plug in a
//! richer implementation; [`PhpDocParser`] is the default.

use indexmap::IndexMap;

/// Tags extracted from one doc comment. Types are kept as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    pub var_type: Option<String>,
    pub return_type: Option<String>,
    /// Parameter name (with `$`) → type, in tag order
    pub params: IndexMap<String, String>,
}

impl DocComment {
    /// Type documented for parameter `name`, with or without its `$`.
    pub fn param_type(&self, name: &str) -> Option<&str> {
        let key = if name.starts_with('$') {
            name.to_string()
        } else {
            format!("${name}")
        };
        self.params.get(&key).map(String::as_str)
    }
}

pub trait DocCommentParser {
    fn parse(&self, text: &str) -> DocComment;
}

/// Line-oriented phpDoc tag reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpDocParser;

impl DocCommentParser for PhpDocParser {
    fn parse(&self, text: &str) -> DocComment {
        let mut doc = DocComment::default();

        for line in text.lines() {
            let line = strip_decoration(line);
            let mut words = line.split_whitespace();
            match words.next() {
                Some("@var") => {
                    // both `@var Type $name` and `@var $name Type` occur
                    let ty = words.find(|w| !w.starts_with('$'));
                    if doc.var_type.is_none() {
                        doc.var_type = ty.map(str::to_string);
                    }
                }
                Some("@return") => {
                    if doc.return_type.is_none() {
                        doc.return_type = words.next().map(str::to_string);
                    }
                }
                Some("@param") => {
                    let (Some(first), Some(second)) = (words.next(), words.next()) else {
                        continue;
                    };
                    let (ty, name) = if first.starts_with('$') {
                        (second, first)
                    } else {
                        (first, second)
                    };
                    let name = name.trim_start_matches('&').trim_start_matches("...");
                    if name.starts_with('$') {
                        doc.params
                            .entry(name.to_string())
                            .or_insert_with(|| ty.to_string());
                    }
                }
                _ => {}
            }
        }

        doc
    }
}

/// Remove comment delimiters and the leading `*` of a doc line.
fn strip_decoration(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_prefix("/**").unwrap_or(line);
    let line = line.strip_suffix("*/").unwrap_or(line);
    line.trim().trim_start_matches('*').trim()
}
