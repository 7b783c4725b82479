//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod entity_assertions;
pub mod source_fixtures;
