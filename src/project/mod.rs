//! Loading PHP files from disk.
//!
//! Reads files (decoding UTF-8 with a Latin-1 fallback), stamps their
//! absolute path on every entity, and parses whole directories in parallel.

mod error;
pub mod file_loader;

pub use error::LoadError;
pub use file_loader::{collect_file_paths, load_and_parse, load_file, parse_files};
