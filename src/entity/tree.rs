//! Arena storage for entities.

use std::ops::{Index, IndexMut};

use super::{Entity, EntityId};

/// Arena owning every entity produced while parsing one file.
///
/// Entities are never removed; ids stay valid for the life of the tree.
#[derive(Debug, Clone, Default)]
pub struct EntityTree {
    entities: Vec<Entity>,
}

impl EntityTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a detached entity and return its id.
    pub fn alloc(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId::new(self.entities.len());
        entity.id = id;
        entity.parent = None;
        entity.children.clear();
        self.entities.push(entity);
        id
    }

    /// Append `child` to `parent`'s children. A child that already has an
    /// owner, or that is an ancestor of `parent`, is left where it is.
    pub fn add_child(&mut self, parent: EntityId, child: EntityId) {
        if self.entities[child.index()].parent.is_some() || self.is_ancestor(child, parent) {
            return;
        }
        self.entities[child.index()].parent = Some(parent);
        self.entities[parent.index()].children.push(child);
    }

    /// True when `ancestor` is `id` or lies on its parent chain.
    pub fn is_ancestor(&self, ancestor: EntityId, id: EntityId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.get(cur).and_then(|e| e.parent);
        }
        false
    }

    /// Allocate `entity` and attach it under `parent` in one step.
    pub fn add(&mut self, parent: EntityId, entity: Entity) -> EntityId {
        let id = self.alloc(entity);
        self.add_child(parent, id);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    pub fn parent(&self, id: EntityId) -> Option<&Entity> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    pub fn children(&self, id: EntityId) -> impl Iterator<Item = &Entity> + '_ {
        self.get(id)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&c| &self.entities[c.index()])
    }

    /// Find a direct child by name. Variable names match with or without
    /// their leading `$`.
    pub fn find_child(&self, parent: EntityId, name: &str) -> Option<&Entity> {
        let dollar = format!("${name}");
        self.children(parent)
            .find(|c| c.full_name() == name || c.full_name() == dollar)
    }

    /// `root` and everything below it, parents before children.
    pub fn descendants(&self, root: EntityId) -> Vec<EntityId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(entity) = self.get(id) else {
                continue;
            };
            order.push(id);
            stack.extend(entity.children.iter().rev());
        }
        order
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }
}

impl Index<EntityId> for EntityTree {
    type Output = Entity;

    fn index(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }
}

impl IndexMut<EntityId> for EntityTree {
    fn index_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.index()]
    }
}
