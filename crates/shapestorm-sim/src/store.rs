//! Entity store: a hecs world behind a deferred add/destroy protocol.
//!
//! Entities added mid-tick become live only at the next `update()`, and
//! `destroy` marks without removing, so no system pass ever observes its
//! own iteration being invalidated. The store also keeps an
//! insertion-ordered index of live entities with their immutable tags,
//! which is what the systems iterate when ordering matters.

use hecs::{CommandBuffer, DynamicBundle, Entity, World};

use shapestorm_core::components::Tag;

pub struct EntityStore {
    world: World,
    pending: CommandBuffer,
    /// Entities reserved this tick, appended to `order` at `update()`.
    spawned: Vec<(Entity, Tag)>,
    /// Live entities in insertion order.
    order: Vec<(Entity, Tag)>,
    /// Entities marked dead, purged at the next `update()`.
    dead: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            pending: CommandBuffer::new(),
            spawned: Vec::new(),
            order: Vec::new(),
            dead: Vec::new(),
        }
    }

    /// Queue a new entity. The returned handle is valid immediately (its
    /// id is reserved), but the entity joins the live set only at the
    /// next `update()`. The tag is also attached as a component.
    pub fn add(&mut self, tag: Tag, components: impl DynamicBundle) -> Entity {
        let entity = self.world.reserve_entity();
        self.pending.insert(entity, components);
        self.pending.insert(entity, (tag,));
        self.spawned.push((entity, tag));
        entity
    }

    /// All live entities with their tags, insertion order.
    pub fn entities(&self) -> Vec<(Entity, Tag)> {
        self.order.clone()
    }

    /// Live entities carrying the given tag, insertion order.
    pub fn tagged(&self, tag: Tag) -> Vec<Entity> {
        self.order
            .iter()
            .filter(|(_, t)| *t == tag)
            .map(|(e, _)| *e)
            .collect()
    }

    /// Mark an entity dead. Idempotent; storage is untouched until the
    /// next `update()`, but `is_alive` reflects the mark immediately.
    pub fn destroy(&mut self, entity: Entity) {
        if !self.dead.contains(&entity) {
            self.dead.push(entity);
        }
    }

    /// Whether the entity is in the live set and not marked dead.
    /// Entities queued by `add` this tick are not yet alive.
    pub fn is_alive(&self, entity: Entity) -> bool {
        !self.dead.contains(&entity) && self.order.iter().any(|(e, _)| *e == entity)
    }

    /// Purge entities marked dead since the previous call, then move
    /// queued entities into the live set.
    pub fn update(&mut self) {
        for entity in self.dead.drain(..) {
            let _ = self.world.despawn(entity);
        }
        let world = &self.world;
        self.order.retain(|(e, _)| world.contains(*e));

        self.world.flush();
        self.pending.run_on(&mut self.world);
        self.order.append(&mut self.spawned);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapestorm_core::components::{Score, Transform};
    use shapestorm_core::types::Vec2;

    #[test]
    fn test_added_entities_live_only_after_update() {
        let mut store = EntityStore::new();
        let entity = store.add(Tag::Enemy, (Transform::default(),));

        assert!(!store.is_alive(entity));
        assert!(store.entities().is_empty());

        store.update();
        assert!(store.is_alive(entity));
        assert_eq!(store.entities(), vec![(entity, Tag::Enemy)]);
    }

    #[test]
    fn test_destroy_marks_immediately_and_purges_on_update() {
        let mut store = EntityStore::new();
        let entity = store.add(Tag::Bullet, (Transform::default(),));
        store.update();

        store.destroy(entity);
        // Marked dead at once, but storage untouched until the purge.
        assert!(!store.is_alive(entity));
        assert!(store.world().contains(entity));

        store.update();
        assert!(!store.world().contains(entity));
        assert!(store.entities().is_empty());
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut store = EntityStore::new();
        let entity = store.add(Tag::Enemy, (Transform::default(),));
        store.update();

        store.destroy(entity);
        store.destroy(entity);
        store.update();
        assert!(store.is_empty());
    }

    #[test]
    fn test_tag_filter_keeps_insertion_order() {
        let mut store = EntityStore::new();
        let a = store.add(Tag::Enemy, (Transform::default(),));
        let b = store.add(Tag::Bullet, (Transform::default(),));
        let c = store.add(Tag::Enemy, (Transform::default(),));
        store.update();

        assert_eq!(store.tagged(Tag::Enemy), vec![a, c]);
        assert_eq!(store.tagged(Tag::Bullet), vec![b]);
        assert!(store.tagged(Tag::SpecialWeapon).is_empty());
    }

    #[test]
    fn test_components_reachable_after_update() {
        let mut store = EntityStore::new();
        let entity = store.add(
            Tag::Enemy,
            (
                Transform::new(Vec2::new(1.0, 2.0), Vec2::ZERO),
                Score { value: 300 },
            ),
        );
        store.update();

        let tf = *store.world().get::<&Transform>(entity).unwrap();
        assert_eq!(tf.position, Vec2::new(1.0, 2.0));
        assert_eq!(store.world().get::<&Score>(entity).unwrap().value, 300);
        // The tag rides along as a component for archetype queries.
        assert_eq!(*store.world().get::<&Tag>(entity).unwrap(), Tag::Enemy);
    }
}
