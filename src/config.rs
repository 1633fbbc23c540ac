//! Engine configuration
//!
//! Every tunable lives in `EngineConfig`. The defaults reproduce the fixed
//! scene exactly; an optional `engine2d.ron` in the working directory can
//! override any section. A missing file is not an error, a malformed one is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::InitError;

/// File looked up in the working directory at startup
pub const CONFIG_FILE: &str = "engine2d.ron";

/// An RGB triple, stored as a plain array so it round-trips through RON.
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
    pub render: RenderConfig,
    pub scene: SceneConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    /// Request vertical sync from the swap chain
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Motor 2D - Revisado".to_string(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed simulation step in seconds
    pub fixed_dt: f32,
    /// Player acceleration in pixels per second, scaled by `fixed_dt` per step
    pub player_speed: f32,
    /// Velocity multiplier applied once per fixed step
    pub damping: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            player_speed: 200.0,
            damping: 0.98,
        }
    }
}

impl SimulationConfig {
    /// Velocity impulse per unit of axis input, per fixed step
    pub fn scaled_speed(&self) -> f32 {
        self.player_speed * self.fixed_dt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub background: Rgb,
    /// Colour of the square synthesized for textures that fail to load
    pub fallback_color: Rgb,
    /// Edge length of the fallback square in pixels
    pub fallback_size: u16,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: [50, 50, 60],
            fallback_color: [200, 80, 80],
            fallback_size: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub player_sprite: String,
    /// Intrinsic sprite size used for every entity in the scene
    pub sprite_size: (u32, u32),
    pub decoration_count: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            player_sprite: "player.bmp".to_string(),
            sprite_size: (64, 64),
            decoration_count: 5,
        }
    }
}

impl EngineConfig {
    /// Load `engine2d.ron` from the working directory, or defaults if absent.
    pub fn load_or_default() -> Result<(Self, Option<PathBuf>), InitError> {
        let path = PathBuf::from(CONFIG_FILE);
        if !path.exists() {
            return Ok((Self::default(), None));
        }
        let config = Self::load(&path)?;
        Ok((config, Some(path)))
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, InitError> {
        let contents = std::fs::read_to_string(path).map_err(|source| InitError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&contents, path)
    }

    fn from_ron(contents: &str, path: &Path) -> Result<Self, InitError> {
        let config: EngineConfig = ron::from_str(contents).map_err(|source| InitError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would hang or break the loop.
    pub fn validate(&self) -> Result<(), InitError> {
        let sim = &self.simulation;
        if !(sim.fixed_dt.is_finite() && sim.fixed_dt > 0.0) {
            return Err(InitError::InvalidConfig(format!(
                "simulation.fixed_dt must be positive, got {}",
                sim.fixed_dt
            )));
        }
        if !(0.0..=1.0).contains(&sim.damping) {
            return Err(InitError::InvalidConfig(format!(
                "simulation.damping must be within 0..=1, got {}",
                sim.damping
            )));
        }
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(InitError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.render.fallback_size == 0 {
            return Err(InitError::InvalidConfig(
                "render.fallback_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_scene() {
        let config = EngineConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.simulation.damping, 0.98);
        assert_eq!(config.render.fallback_color, [200, 80, 80]);
        assert_eq!(config.scene.player_sprite, "player.bmp");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = EngineConfig::from_ron(
            "(simulation: (player_speed: 50.0))",
            Path::new("inline.ron"),
        )
        .unwrap();
        assert_eq!(config.simulation.player_speed, 50.0);
        assert_eq!(config.simulation.fixed_dt, 1.0 / 60.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_zero_step_rejected() {
        let result = EngineConfig::from_ron("(simulation: (fixed_dt: 0.0))", Path::new("x.ron"));
        assert!(matches!(result, Err(InitError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "(window: (width: \"wide\"))").unwrap();

        let result = EngineConfig::load(&path);
        assert!(matches!(result, Err(InitError::ConfigParse { .. })));
    }

    #[test]
    fn test_serialized_default_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let text = ron::ser::to_string_pretty(&EngineConfig::default(), Default::default()).unwrap();
        std::fs::write(&path, text).unwrap();

        assert_eq!(EngineConfig::load(&path).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_scaled_speed() {
        let sim = SimulationConfig { fixed_dt: 0.5, player_speed: 200.0, damping: 0.98 };
        assert_eq!(sim.scaled_speed(), 100.0);
    }
}
