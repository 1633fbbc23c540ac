//! The fixed scene: one controllable player in the middle of the window
//! and a row of static decorations sharing its sprite.

use macroquad::math::Vec2;

use crate::config::EngineConfig;
use crate::texture::{TextureCache, TextureSource, TextureUploader};
use super::components::{Rigidbody, Sprite, Transform};
use super::{Entity, World};

const DECORATION_SCALE: f32 = 0.8;

/// Spawn the scene into `world` and return the player entity.
pub fn spawn_scene<U: TextureUploader>(world: &mut World, textures: &mut TextureCache<U>, config: &EngineConfig) -> Entity {
    let centre = Vec2::new(config.window.width as f32 / 2.0, config.window.height as f32 / 2.0);
    let player = world.create_with(Transform::from_position(centre));
    world.bodies.insert(player, Rigidbody::default());

    let lookup = textures.load(&config.scene.player_sprite);
    if lookup.source == TextureSource::Fallback {
        log::info!("{} stands in as a solid square", config.scene.player_sprite);
    }
    let (width, height) = config.scene.sprite_size;
    let sprite = Sprite::new(lookup.id, width, height);
    world.sprites.insert(player, sprite);

    for i in 0..config.scene.decoration_count {
        let position = Vec2::new(100.0 + i as f32 * 120.0, 150.0 + (i % 2) as f32 * 80.0);
        let decoration = world.create_with(
            Transform::from_position(position).with_scale(Vec2::splat(DECORATION_SCALE)),
        );
        world.sprites.insert(decoration, sprite);
    }

    log::info!(
        "scene ready: player {}, {} entities, {} with sprite, {} with body",
        player,
        world.entity_count(),
        world.sprites.count(),
        world.bodies.count()
    );
    player
}
