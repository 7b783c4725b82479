//! Foundation helpers shared by the lexer and the parser.
//!
//! - [`NS_SEPARATOR`] - The PHP namespace path separator
//! - [`is_primitive`] - Scalar type names that are never namespace-resolved
//! - [`ensure_absolute`], [`short_name_of`] - Path manipulation
//!
//! This module has NO dependencies on other phpscope modules.

mod names;

pub use names::{
    GLOBAL_NAMESPACE, NS_SEPARATOR, PRIMITIVE_TYPES, ensure_absolute, is_primitive, short_name_of,
};
