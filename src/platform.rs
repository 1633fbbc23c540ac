//! macroquad binding
//!
//! The only module that talks to the window. Everything else sees the
//! platform through `Clock`, `KeyboardSource`, `DrawSurface`, `Present`
//! and `TextureUploader`.

use image::RgbaImage;
use macroquad::prelude::*;

use crate::config::{Rgb, WindowConfig};
use crate::game::{Clock, DestRect, DrawSurface, Present};
use crate::input::{Action, KeyboardSource};
use crate::texture::TextureUploader;

/// Window settings handed to macroquad when it opens the window.
pub fn window_conf(window: &WindowConfig) -> Conf {
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        platform: macroquad::miniquad::conf::Platform {
            // 0 turns vsync off; None would leave the driver default
            swap_interval: Some(if window.vsync { 1 } else { 0 }),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Clock, keyboard and screen of the macroquad window.
pub struct MacroquadPlatform;

impl MacroquadPlatform {
    /// Route the close button through `is_quit_requested` instead of
    /// tearing the window down under the loop.
    pub fn new() -> Self {
        prevent_quit();
        Self
    }
}

impl Clock for MacroquadPlatform {
    fn now(&self) -> f64 {
        get_time()
    }
}

impl KeyboardSource for MacroquadPlatform {
    fn close_requested(&mut self) -> bool {
        is_quit_requested()
    }

    fn action_pressed(&self, action: Action) -> bool {
        is_key_pressed(action.key())
    }

    fn action_down(&self, action: Action) -> bool {
        is_key_down(action.key())
    }
}

impl DrawSurface for MacroquadPlatform {
    type Texture = Texture2D;

    fn clear(&mut self, [r, g, b]: Rgb) {
        clear_background(Color::from_rgba(r, g, b, 255));
    }

    fn draw_sprite(&mut self, texture: &Texture2D, dest: DestRect, rotation: f32) {
        if dest.is_empty() {
            return;
        }
        draw_texture_ex(
            texture,
            dest.x as f32,
            dest.y as f32,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w as f32, dest.h as f32)),
                // pivot None rotates about the centre of dest
                rotation: rotation.to_radians(),
                ..Default::default()
            },
        );
    }
}

impl Present for MacroquadPlatform {
    async fn present(&mut self) {
        next_frame().await;
    }
}

/// Uploads decoded pixels to GPU textures.
pub struct MacroquadUploader;

impl TextureUploader for MacroquadUploader {
    type Texture = Texture2D;

    fn upload(&mut self, image: &RgbaImage) -> Texture2D {
        // decode() rejects anything wider or taller than u16::MAX
        let texture = Texture2D::from_rgba8(image.width() as u16, image.height() as u16, image.as_raw());
        texture.set_filter(FilterMode::Nearest);
        texture
    }
}
