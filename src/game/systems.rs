//! Simulation Systems
//!
//! Stateless passes over the world, run once per fixed step in this order:
//! 1. `player_control_system` adds the input impulse to the player
//! 2. `physics_system` integrates positions and damps velocities
//!
//! Damping is applied per step, not scaled by `dt`, so drag is tied to the
//! step count. Keep it that way: tuning values assume it.

use super::{Entity, World};
use crate::input::InputSnapshot;

/// Explicit Euler on position, then multiplicative damping on velocity.
/// Entities missing a transform or a rigidbody are left alone.
pub fn physics_system(world: &mut World, dt: f32, damping: f32) {
    for i in 0..world.entity_count() {
        let entity = world.entities()[i];
        let (Some(transform), Some(body)) =
            (world.transforms.get_mut(entity), world.bodies.get_mut(entity))
        else {
            continue;
        };

        transform.position += body.velocity * dt;
        body.velocity *= damping;
    }
}

/// Accelerate the player by `axis * speed`. `speed` is already scaled by
/// the fixed step. No cap: damping sets the terminal velocity.
pub fn player_control_system(world: &mut World, player: Entity, input: &InputSnapshot, speed: f32) {
    let Some(body) = world.bodies.get_mut(player) else {
        return;
    };
    body.velocity += input.axis() * speed;
}
