//! Sprite Renderer
//!
//! Clears the frame, then blits every entity that has both a transform and
//! a resolvable sprite. A transform's position is the sprite's centre, so
//! the destination rectangle is offset by half its size.
//!
//! Presentation is not done here: the loop driver presents right after
//! this pass, which is where vsync pacing happens.

use crate::config::Rgb;
use crate::texture::{TextureCache, TextureUploader};
use super::components::{Sprite, Transform};
use super::World;

/// Axis-aligned destination rectangle in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl DestRect {
    /// Scaled sprite size, centred on the transform's position.
    ///
    /// Sizes truncate toward zero and the half-size offset uses integer
    /// division before the position is rounded.
    pub fn for_sprite(sprite: &Sprite, transform: &Transform) -> Self {
        let w = (sprite.width as f32 * transform.scale.x) as i32;
        let h = (sprite.height as f32 * transform.scale.y) as i32;
        Self {
            x: (transform.position.x - (w / 2) as f32).round() as i32,
            y: (transform.position.y - (h / 2) as f32).round() as i32,
            w,
            h,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// What the renderer draws onto.
pub trait DrawSurface {
    type Texture;

    fn clear(&mut self, color: Rgb);

    /// Blit `texture` into `dest`, rotated by `rotation` degrees about the
    /// centre of `dest`.
    fn draw_sprite(&mut self, texture: &Self::Texture, dest: DestRect, rotation: f32);
}

/// Draw one frame. Returns the number of sprites blitted.
pub fn render_system<U, S>(world: &World, textures: &TextureCache<U>, surface: &mut S, background: Rgb) -> usize
where
    U: TextureUploader,
    S: DrawSurface<Texture = U::Texture>,
{
    surface.clear(background);

    let mut drawn = 0;
    for &entity in world.entities() {
        let (Some(sprite), Some(transform)) = (world.sprites.get(entity), world.transforms.get(entity)) else {
            continue;
        };
        let Some(texture) = sprite.texture.and_then(|id| textures.get(id)) else {
            continue;
        };

        surface.draw_sprite(texture, DestRect::for_sprite(sprite, transform), transform.rotation);
        drawn += 1;
    }
    drawn
}
