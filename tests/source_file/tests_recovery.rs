#![allow(clippy::unwrap_used)]

use crate::helpers::entity_assertions::*;
use crate::helpers::source_fixtures::*;
use phpscope::{ParseOptions, SourceFile};
use rstest::rstest;

/// Char-boundary prefixes of `text`, every `step` bytes.
fn prefixes(text: &str, step: usize) -> impl Iterator<Item = &str> {
    (0..=text.len())
        .step_by(step)
        .filter(|&end| text.is_char_boundary(end))
        .map(move |end| &text[..end])
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_every_prefix_parses(#[case] bodies: bool) {
    let options = ParseOptions::new().with_function_bodies(bodies);
    for prefix in prefixes(REPOSITORY, 7) {
        let file = SourceFile::parse_with_options(prefix, &options);
        assert_well_formed(&file);
    }
}

#[test]
fn test_prefix_keeps_completed_declarations() {
    let cut = REPOSITORY.find("public function find").unwrap();
    let file = SourceFile::parse(&REPOSITORY[..cut]);
    assert_well_formed(&file);

    let class = get_entity(&file, "\\Shop\\Orders\\OrderRepository");
    assert_eq!(
        child_names(&file, class.id()),
        ["VERSION", "$logger", "$cache", "__construct"]
    );
}

#[test]
fn test_unbalanced_closing_braces() {
    let file = SourceFile::parse("<?php } } class A { } } } class B { function f() {} }");
    assert_well_formed(&file);
    get_entity(&file, "\\A");
    let b = get_entity(&file, "\\B");
    assert_eq!(child_names(&file, b.id()), ["f"]);
}

#[test]
fn test_unterminated_expression_at_end() {
    let file = SourceFile::parse("<?php namespace N; $x = foo(");
    assert_well_formed(&file);
    let x = get_child(&file, file.namespace_id(), "$x");
    assert_eq!(x.as_variable().unwrap().expression_hint, "");
}

#[test]
fn test_unclosed_parenthesis_stops_at_statement_end() {
    let file = SourceFile::parse("<?php $x = foo(1; class After {}");
    assert_well_formed(&file);
    get_entity(&file, "\\After");
}

#[test]
fn test_noise_between_declarations() {
    let file = SourceFile::parse(
        "<?php @@@ ~~ \\\\ ^^^ class A {} ;;; %%% function f() {} !!! interface I {}",
    );
    assert_well_formed(&file);
    get_entity(&file, "\\A");
    get_entity(&file, "f");
    get_entity(&file, "\\I");
}

#[test]
fn test_nested_functions_in_class_method_bodies() {
    let file = SourceFile::parse_with_options(
        "<?php class A { function outer() { $cb = function() { $inner = 1; }; $after = 2; } function next() {} }",
        &ParseOptions::new().with_function_bodies(true),
    );
    assert_well_formed(&file);
    let a = get_entity(&file, "\\A");
    assert_eq!(child_names(&file, a.id()), ["outer", "next"]);
    let outer = get_child(&file, a.id(), "outer");
    assert_eq!(child_names(&file, outer.id()), ["$cb", "$inner", "$after"]);
}
