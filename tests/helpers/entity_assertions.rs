//! Entity lookup and assertion helpers.

use phpscope::{Entity, EntityId, SourceFile};

/// Look up an entity by full name anywhere below the namespace.
pub fn get_entity<'a>(file: &'a SourceFile, full_name: &str) -> &'a Entity {
    file.find(full_name)
        .unwrap_or_else(|| panic!("Expected entity '{}' to exist\n{}", full_name, file))
}

/// Look up a direct child of `parent` by name.
pub fn get_child<'a>(file: &'a SourceFile, parent: EntityId, name: &str) -> &'a Entity {
    file.tree().find_child(parent, name).unwrap_or_else(|| {
        panic!(
            "Expected '{}' to have child '{}'\n{}",
            file.get(parent).full_name(),
            name,
            file
        )
    })
}

/// Names of the direct children of `parent`, in source order.
pub fn child_names(file: &SourceFile, parent: EntityId) -> Vec<String> {
    file.children(parent)
        .map(|c| c.full_name().to_string())
        .collect()
}

/// Assert the parent/child links of every entity agree and that the
/// namespace is the only root reachable from the tree.
pub fn assert_well_formed(file: &SourceFile) {
    let root = file.namespace();
    assert!(root.is_namespace(), "root is a {}", root.kind.display());
    assert_eq!(root.parent(), None, "namespace must not have a parent");

    let reachable = file.tree().descendants(file.namespace_id());
    for &id in &reachable {
        for &child in file.get(id).children() {
            assert_eq!(
                file.get(child).parent(),
                Some(id),
                "child '{}' does not point back to '{}'",
                file.get(child).full_name(),
                file.get(id).full_name()
            );
        }
    }

    let mut seen = std::collections::HashSet::new();
    for id in reachable {
        assert!(seen.insert(id), "entity reachable twice: {:?}", id);
    }
}
