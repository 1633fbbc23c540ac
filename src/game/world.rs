//! Game World
//!
//! The World is the component store:
//! - Entity allocation in creation order
//! - One typed storage per component kind
//! - Full reset via `destroy_all`
//!
//! Component kinds are fixed at compile time, so they are plain fields
//! rather than a `HashMap<TypeId, ...>`.

use super::entity::{Entity, EntityAllocator};
use super::component::ComponentStorage;
use super::components::{Rigidbody, Sprite, Transform};

pub struct World {
    entities: EntityAllocator,

    /// Live entities in creation order; systems iterate this
    live: Vec<Entity>,

    /// Every live entity has one
    pub transforms: ComponentStorage<Transform>,

    /// Visual, optional
    pub sprites: ComponentStorage<Sprite>,

    /// Velocity, optional; absent means static
    pub bodies: ComponentStorage<Rigidbody>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            live: Vec::new(),
            transforms: ComponentStorage::new(),
            sprites: ComponentStorage::new(),
            bodies: ComponentStorage::new(),
        }
    }

    /// Create a new entity with a default transform.
    /// Returns the entity ID for adding more components.
    pub fn create(&mut self) -> Entity {
        let entity = self.entities.allocate();
        self.live.push(entity);
        self.transforms.insert(entity, Transform::default());
        entity
    }

    /// Create an entity and replace its default transform.
    pub fn create_with(&mut self, transform: Transform) -> Entity {
        let entity = self.create();
        self.transforms.insert(entity, transform);
        entity
    }

    /// Clear every storage and rewind the id counter.
    /// This is the only way entities leave the world.
    pub fn destroy_all(&mut self) {
        self.live.clear();
        self.transforms.clear();
        self.sprites.clear();
        self.bodies.clear();
        self.entities.reset();
    }

    /// Live entities in creation order.
    pub fn entities(&self) -> &[Entity] {
        &self.live
    }

    pub fn entity_count(&self) -> usize {
        self.live.len()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
