//! Game Components
//!
//! Plain data attached to entities. Behavior lives in systems.

use macroquad::math::Vec2;

use crate::texture::TextureId;

/// Position, rotation and scale of an entity in screen space.
///
/// `position` is the visual centre of the entity's sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    /// Rotation in degrees, clockwise on screen
    pub rotation: f32,
    pub scale: Vec2,
}

impl Transform {
    /// Identity transform (origin, no rotation, scale 1)
    pub const IDENTITY: Transform = Transform {
        position: Vec2::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
    };

    pub fn from_position(position: Vec2) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A drawable image and its intrinsic size in pixels.
///
/// `texture` is `None` when there is nothing to draw; the renderer skips
/// such sprites instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub texture: Option<TextureId>,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    pub fn new(texture: TextureId, width: u32, height: u32) -> Self {
        Self { texture: Some(texture), width, height }
    }
}

/// Velocity for moving entities. Entities without one are static.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rigidbody {
    pub velocity: Vec2,
    /// Not read by any system yet
    #[allow(dead_code)]
    pub mass: f32,
}

impl Default for Rigidbody {
    fn default() -> Self {
        Self { velocity: Vec2::ZERO, mass: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_default() {
        let t = Transform::default();
        assert_eq!(t.position, Vec2::ZERO);
        assert_eq!(t.rotation, 0.0);
        assert_eq!(t.scale, Vec2::ONE);
    }

    #[test]
    fn test_rigidbody_default_is_at_rest() {
        let rb = Rigidbody::default();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert_eq!(rb.mass, 1.0);
    }
}
