//! Namespace path primitives.

/// Separator between namespace path components.
pub const NS_SEPARATOR: char = '\\';

/// Full name of the global namespace.
pub const GLOBAL_NAMESPACE: &str = "\\";

/// Scalar type names passed through name resolution untouched.
pub const PRIMITIVE_TYPES: &[&str] = &[
    "string", "array", "mixed", "bool", "int", "integer", "boolean", "double",
];

/// Returns true for the scalar type keywords that are exempt from resolution.
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(&name)
}

/// Prefix `name` with the separator unless it already starts with one.
pub fn ensure_absolute(name: &str) -> String {
    if name.starts_with(NS_SEPARATOR) {
        name.to_string()
    } else {
        format!("{NS_SEPARATOR}{name}")
    }
}

/// Last path component of `name` (the whole string when it has no separator).
pub fn short_name_of(name: &str) -> &str {
    match name.rfind(NS_SEPARATOR) {
        Some(pos) => &name[pos + NS_SEPARATOR.len_utf8()..],
        None => name,
    }
}
