#![allow(clippy::unwrap_used)]

use crate::helpers::entity_assertions::*;
use phpscope::source_file::make_identifier_absolute;
use phpscope::{AliasTable, SourceFile};
use rstest::rstest;

#[rstest]
#[case("\\A\\B", "\\A\\B")]
#[case("\\Already", "\\Already")]
#[case("Rel\\Path", "\\Rel\\Path")]
#[case("string", "string")]
fn test_resolution_is_idempotent(#[case] input: &str, #[case] expected: &str) {
    let mut aliases = AliasTable::new();
    aliases.insert("Already", "\\Elsewhere\\Already");
    let once = make_identifier_absolute(input, &aliases, "\\Ns");
    assert_eq!(once, expected);
    assert_eq!(make_identifier_absolute(&once, &aliases, "\\Ns"), once);
}

#[test]
fn test_alias_declared_after_use_site_is_not_applied() {
    let file = SourceFile::parse("<?php namespace N; function f(Late $x) {} use Lib\\Late;");
    let f = get_entity(&file, "f");
    let x = get_child(&file, f.id(), "$x").as_variable().unwrap();
    assert_eq!(x.type_hint, "\\N\\Late");
    // later lookups see the complete table
    assert_eq!(file.make_identifier_absolute("Late"), "\\Lib\\Late");
}

#[test]
fn test_class_names_resolve_in_namespace() {
    let file = SourceFile::parse(
        "<?php namespace App\\Http;\nuse App\\Base\\Controller;\nclass Home extends Controller implements \\JsonSerializable {}",
    );
    let home = get_entity(&file, "\\App\\Http\\Home");
    let info = home.as_class().unwrap();
    assert_eq!(info.extends, "\\App\\Base\\Controller");
    assert_eq!(info.implements, ["\\JsonSerializable"]);
}

#[test]
fn test_doc_types_resolve_through_aliases() {
    let file = SourceFile::parse(
        "<?php namespace App;\nuse Lib\\Clock;\n/** @return Clock */\nfunction now() {}\n/** @var string */\n$label = 'x';",
    );
    let now = get_entity(&file, "now");
    assert_eq!(now.as_function().unwrap().return_value, "\\Lib\\Clock");
    let label = get_child(&file, file.namespace_id(), "$label");
    assert_eq!(label.as_variable().unwrap().type_hint, "string");
}
