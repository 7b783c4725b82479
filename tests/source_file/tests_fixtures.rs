#![allow(clippy::unwrap_used)]

use crate::helpers::entity_assertions::*;
use crate::helpers::source_fixtures::*;
use phpscope::{FunctionFlags, ParseOptions, SourceFile, VariableFlags};

fn repository() -> SourceFile {
    SourceFile::parse_with_options(REPOSITORY, &ParseOptions::new().with_filename("Repo.php"))
}

#[test]
fn test_repository_namespace_and_aliases() {
    let file = repository();
    assert_well_formed(&file);

    let ns = file.namespace();
    assert_eq!(ns.full_name(), "\\Shop\\Orders");
    assert_eq!(ns.line, 5);
    assert!(ns.doc_comment.contains("Order storage."));

    let aliases: Vec<_> = file.aliases().iter().collect();
    assert_eq!(
        aliases,
        [
            ("Entity", "\\Shop\\Core\\Entity"),
            ("RepositoryContract", "\\Shop\\Core\\Contracts\\Repository"),
            ("Countable", "\\Shop\\Core\\Contracts\\Countable"),
            ("Logger", "\\Psr\\Log\\LoggerInterface"),
        ]
    );
}

#[test]
fn test_repository_define() {
    let file = repository();
    let defines: Vec<_> = file.defines().collect();
    assert_eq!(defines.len(), 1);
    assert_eq!(defines[0].full_name(), "\\ORDERS_TABLE");
    assert_eq!(defines[0].line, 11);
    assert_eq!(defines[0].filename, "Repo.php");
}

#[test]
fn test_repository_class_header() {
    let file = repository();
    let class = get_entity(&file, "\\Shop\\Orders\\OrderRepository");
    assert_eq!(class.line, 16);
    assert!(class.doc_comment.contains("Persists orders."));

    let info = class.as_class().unwrap();
    assert_eq!(info.extends, "\\Shop\\Core\\Entity");
    assert_eq!(
        info.implements,
        [
            "\\Shop\\Core\\Contracts\\Repository",
            "\\Shop\\Core\\Contracts\\Countable"
        ]
    );
    assert_eq!(info.traits, ["\\Shop\\Core\\Traits\\Timestamps"]);
}

#[test]
fn test_repository_members() {
    let file = repository();
    let class = get_entity(&file, "\\Shop\\Orders\\OrderRepository");
    assert_eq!(
        child_names(&file, class.id()),
        ["VERSION", "$logger", "$cache", "__construct", "find", "table", "count"]
    );

    let version = get_child(&file, class.id(), "VERSION").as_variable().unwrap();
    assert_eq!(version.flags, VariableFlags::MEMBER | VariableFlags::CONST);

    let logger = get_child(&file, class.id(), "logger");
    let info = logger.as_variable().unwrap();
    assert_eq!(info.flags, VariableFlags::PRIVATE | VariableFlags::MEMBER);
    assert_eq!(info.type_hint, "\\Psr\\Log\\LoggerInterface");
    assert_eq!(logger.doc_comment, "/** @var Logger */");

    let cache = get_child(&file, class.id(), "cache").as_variable().unwrap();
    assert_eq!(
        cache.flags,
        VariableFlags::PROTECTED | VariableFlags::STATIC | VariableFlags::MEMBER
    );
}

#[test]
fn test_repository_methods() {
    let file = repository();
    let class = get_entity(&file, "\\Shop\\Orders\\OrderRepository");
    let flags = |name: &str| {
        get_child(&file, class.id(), name)
            .as_function()
            .unwrap()
            .flags
    };

    assert_eq!(flags("__construct"), FunctionFlags::PUBLIC);
    assert_eq!(flags("find"), FunctionFlags::PUBLIC);
    assert_eq!(flags("table"), FunctionFlags::ABSTRACT | FunctionFlags::PROTECTED);
    assert_eq!(flags("count"), FunctionFlags::PUBLIC | FunctionFlags::STATIC);

    let find = get_child(&file, class.id(), "find");
    assert_eq!(find.line, 39);
    assert_eq!(
        find.as_function().unwrap().return_value,
        "\\Shop\\Orders\\Order|null"
    );
    let id = get_child(&file, find.id(), "$id").as_variable().unwrap();
    assert_eq!(id.type_hint, "int");
}

#[test]
fn test_repository_constructor_parameters() {
    let file = repository();
    let class = get_entity(&file, "\\Shop\\Orders\\OrderRepository");
    let ctor = get_child(&file, class.id(), "__construct");
    assert_eq!(child_names(&file, ctor.id()), ["$logger", "$options"]);

    // typed through @param
    let logger = get_child(&file, ctor.id(), "$logger").as_variable().unwrap();
    assert_eq!(logger.type_hint, "\\Psr\\Log\\LoggerInterface");
    assert!(logger.flags.contains(VariableFlags::FUNCTION_ARG));

    let options = get_child(&file, ctor.id(), "$options").as_variable().unwrap();
    assert_eq!(options.type_hint, "array");
    assert_eq!(options.default_value, "array('ttl'=>60)");
}

#[test]
fn test_repository_interface_and_function() {
    let file = repository();

    let auditable = get_entity(&file, "\\Shop\\Orders\\Auditable");
    assert!(auditable.is_interface());
    let audit = get_child(&file, auditable.id(), "audit");
    assert_eq!(
        audit.as_function().unwrap().flags,
        FunctionFlags::PUBLIC | FunctionFlags::ABSTRACT
    );
    assert_eq!(child_names(&file, audit.id()), ["$logger", "$trail", "$rest"]);
    let trail = get_child(&file, audit.id(), "$trail").as_variable().unwrap();
    assert!(trail.is_reference);
    assert_eq!(trail.type_hint, "");
    let rest = get_child(&file, audit.id(), "$rest").as_variable().unwrap();
    assert_eq!(rest.type_hint, "");

    let helper = get_entity(&file, "helper");
    assert_eq!(helper.parent(), Some(file.namespace_id()));
    assert_eq!(helper.as_function().unwrap().flags, FunctionFlags::empty());
    let order = get_child(&file, helper.id(), "$order").as_variable().unwrap();
    assert_eq!(order.type_hint, "\\Shop\\Orders\\Order");
    assert_eq!(order.default_value, "null");
}

#[test]
fn test_repository_function_bodies() {
    let file = SourceFile::parse_with_options(
        REPOSITORY,
        &ParseOptions::new().with_function_bodies(true),
    );
    assert_well_formed(&file);

    let class = get_entity(&file, "\\Shop\\Orders\\OrderRepository");
    let find = get_child(&file, class.id(), "find");
    assert_eq!(child_names(&file, find.id()), ["$id", "$order", "$order"]);
    let order = file.children(find.id()).nth(1).unwrap();
    assert_eq!(order.as_variable().unwrap().type_hint, "\\Shop\\Orders\\Order");
    assert_eq!(order.line, 41);

    // members after bodies are still found
    assert_eq!(
        child_names(&file, class.id()),
        ["VERSION", "$logger", "$cache", "__construct", "find", "table", "count"]
    );
}

#[test]
fn test_template_with_inline_html() {
    let file = SourceFile::parse(TEMPLATE);
    assert_well_formed(&file);
    assert_eq!(file.namespace().full_name(), "\\Views");
    assert_eq!(file.namespace().line, 4);

    let title = get_child(&file, file.namespace_id(), "$title");
    assert_eq!(title.line, 6);
    assert_eq!(title.as_variable().unwrap().expression_hint, "page_title()");

    let widget = get_entity(&file, "\\Views\\Widget");
    assert_eq!(widget.line, 10);
    assert_eq!(child_names(&file, widget.id()), ["$label"]);
}

#[test]
fn test_display_lists_tree() {
    let printed = repository().to_string();
    assert!(printed.contains("Logger => \\Psr\\Log\\LoggerInterface"));
    assert!(printed.contains("\\ORDERS_TABLE @11"));
    assert!(printed.contains("class \\Shop\\Orders\\OrderRepository extends \\Shop\\Core\\Entity"));
    assert!(printed.contains("interface \\Shop\\Orders\\Auditable"));
}
