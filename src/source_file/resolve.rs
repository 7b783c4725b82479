//! File-scoped alias table and identifier resolution.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::base::{NS_SEPARATOR, ensure_absolute, is_primitive};

/// Import aliases of one file: short alias → absolute name, in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: IndexMap<String, String, FxBuildHasher>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `alias → full_name`. The first import of an alias wins;
    /// returns false when the alias was already taken.
    pub fn insert(&mut self, alias: impl Into<String>, full_name: &str) -> bool {
        let alias = alias.into();
        if self.entries.contains_key(&alias) {
            return false;
        }
        self.entries.insert(alias, ensure_absolute(full_name));
        true
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a type or class name to its absolute form.
///
/// Resolution order:
/// 1. Primitive scalar names pass through
/// 2. Empty input stays empty
/// 3. Names containing a separator are only forced absolute
/// 4. The alias table is consulted
/// 5. Otherwise the name lives in `namespace`
pub fn make_identifier_absolute(name: &str, aliases: &AliasTable, namespace: &str) -> String {
    let name = name.trim();

    if is_primitive(name) {
        return name.to_string();
    }

    if name.is_empty() {
        return String::new();
    }

    if name.contains(NS_SEPARATOR) {
        return ensure_absolute(name);
    }

    if let Some(full_name) = aliases.get(name) {
        return full_name.to_string();
    }

    let mut resolved = namespace.to_string();
    if !resolved.ends_with(NS_SEPARATOR) {
        resolved.push(NS_SEPARATOR);
    }
    resolved.push_str(name);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table() -> AliasTable {
        let mut aliases = AliasTable::new();
        aliases.insert("Baz", "Foo\\Bar");
        aliases.insert("int", "\\Evil\\Int");
        aliases
    }

    #[rstest]
    #[case("string")]
    #[case("int")]
    #[case("integer")]
    #[case("bool")]
    #[case("boolean")]
    #[case("double")]
    #[case("array")]
    #[case("mixed")]
    fn test_primitives_are_never_prefixed(#[case] name: &str) {
        assert_eq!(make_identifier_absolute(name, &table(), "\\A\\B"), name);
    }

    #[rstest]
    #[case("Baz", "\\Foo\\Bar")]
    #[case("C", "\\A\\B\\C")]
    #[case("Sub\\C", "\\Sub\\C")]
    #[case("\\Root", "\\Root")]
    #[case("  Padded ", "\\A\\B\\Padded")]
    #[case("", "")]
    fn test_resolution(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(make_identifier_absolute(input, &table(), "\\A\\B"), expected);
    }

    #[test]
    fn test_global_namespace_has_single_separator() {
        assert_eq!(make_identifier_absolute("C", &AliasTable::new(), "\\"), "\\C");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let once = make_identifier_absolute("C", &table(), "\\A");
        assert_eq!(make_identifier_absolute(&once, &table(), "\\A"), once);
    }

    #[test]
    fn test_first_alias_wins() {
        let mut aliases = AliasTable::new();
        assert!(aliases.insert("X", "\\First\\X"));
        assert!(!aliases.insert("X", "\\Second\\X"));
        assert_eq!(aliases.get("X"), Some("\\First\\X"));
        assert_eq!(aliases.len(), 1);
    }
}
