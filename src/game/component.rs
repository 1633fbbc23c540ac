//! Component Storage
//!
//! `ComponentStorage<T>` is a sparse array that maps entity ids to
//! component data. Absence is a `None` slot, never an error: systems
//! check presence before they mutate.
//!
//! A scene holds a handful of entities, so a flat `Vec<Option<T>>`
//! indexed by id beats any hashing or archetype scheme here.

use super::entity::Entity;

/// Sparse storage for a single component type.
pub struct ComponentStorage<T> {
    /// Sparse array indexed by entity.id()
    data: Vec<Option<T>>,
}

impl<T> ComponentStorage<T> {
    /// Create empty storage.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
    }

    /// Insert a component for an entity.
    /// Replaces any existing component, so each entity holds at most one.
    pub fn insert(&mut self, entity: Entity, component: T) {
        let idx = entity.id() as usize;
        self.ensure_capacity(idx);
        self.data[idx] = Some(component);
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.data.get(entity.id() as usize).and_then(|opt| opt.as_ref())
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data.get_mut(entity.id() as usize).and_then(|opt| opt.as_mut())
    }

    /// Check if an entity has this component.
    #[cfg(test)]
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Drop every component and release the backing array.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Number of entities that have this component.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|opt| opt.is_some()).count()
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut storage: ComponentStorage<i32> = ComponentStorage::new();
        let entity = Entity::new(5);

        storage.insert(entity, 42);
        assert_eq!(storage.get(entity), Some(&42));
        assert!(storage.contains(entity));
    }

    #[test]
    fn test_insert_replaces() {
        let mut storage: ComponentStorage<i32> = ComponentStorage::new();
        let entity = Entity::new(1);

        storage.insert(entity, 1);
        storage.insert(entity, 2);
        assert_eq!(storage.get(entity), Some(&2));
        assert_eq!(storage.count(), 1);
    }

    #[test]
    fn test_missing_is_absent_not_error() {
        let mut storage: ComponentStorage<i32> = ComponentStorage::new();
        storage.insert(Entity::new(2), 7);

        assert_eq!(storage.get(Entity::new(1)), None);
        assert_eq!(storage.get(Entity::new(900)), None);
        assert!(storage.get_mut(Entity::new(900)).is_none());
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut storage: ComponentStorage<i32> = ComponentStorage::new();
        let entity = Entity::new(3);

        storage.insert(entity, 100);
        if let Some(value) = storage.get_mut(entity) {
            *value += 1;
        }
        assert_eq!(storage.get(entity), Some(&101));
    }

    #[test]
    fn test_clear() {
        let mut storage: ComponentStorage<i32> = ComponentStorage::new();
        storage.insert(Entity::new(4), 1);

        storage.clear();
        assert_eq!(storage.count(), 0);
        assert!(!storage.contains(Entity::new(4)));
    }
}
