//! Entity Identifiers
//!
//! Entities are plain integers handed out by a monotonic counter.
//! Ids are never reused within a run: there is no per-entity despawn,
//! only a full reset that rewinds the counter along with every storage.

/// A unique identifier for a game entity. Carries no data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u32);

impl Entity {
    /// Should only be called by EntityAllocator (and tests).
    pub(crate) fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id, used as the index into component storage.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Allocates entity ids in creation order.
#[derive(Debug)]
pub struct EntityAllocator {
    /// Next id to hand out
    next_id: u32,
}

impl EntityAllocator {
    /// The id the first entity of a run receives
    pub const FIRST_ID: u32 = 1;

    pub fn new() -> Self {
        Self { next_id: Self::FIRST_ID }
    }

    /// Allocate a new entity.
    pub fn allocate(&mut self) -> Entity {
        let entity = Entity::new(self.next_id);
        self.next_id += 1;
        entity
    }

    /// Rewind the counter. Only valid together with clearing every storage.
    pub fn reset(&mut self) {
        self.next_id = Self::FIRST_ID;
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
