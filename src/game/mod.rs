//! Game Foundation Module
//!
//! A minimal entity-component setup for a single fixed 2D scene.
//!
//! Key concepts:
//! - Entity: monotonically assigned integer id
//! - Component: plain data (Transform, Sprite, Rigidbody) in sparse storage
//! - World: the component store
//! - Systems: stateless passes run by the loop driver

pub mod entity;
pub mod component;
pub mod components;
pub mod world;
pub mod systems;
pub mod renderer;
pub mod runtime;
pub mod scene;

// Re-export main types
pub use entity::Entity;
pub use world::World;
pub use renderer::{DestRect, DrawSurface};
pub use runtime::{run, Clock, LoopDriver, Present};
pub use scene::spawn_scene;
