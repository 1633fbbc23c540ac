//! Loop Driver
//!
//! Fixed-timestep accumulator: wall-clock time is banked every outer
//! iteration and spent in whole `fixed_dt` steps, so simulation advances at
//! a constant rate no matter how irregular frames are. Rendering happens
//! exactly once per outer iteration, after the catch-up steps.
//!
//! Per outer iteration:
//! 1. bank the elapsed time since the previous iteration
//! 2. poll input once
//! 3. run player control + physics while a whole step is banked
//! 4. render, then present (blocks on vsync)
//!
//! Quit is observed after polling; the iteration that sees it still
//! finishes its steps and its frame, then the loop stops.

use crate::config::{EngineConfig, Rgb};
use crate::input::{InputSnapshot, KeyboardSource};
use crate::texture::{TextureCache, TextureUploader};
use super::renderer::{render_system, DrawSurface};
use super::systems::{physics_system, player_control_system};
use super::{Entity, World};

/// Monotonic time source, in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Hands the finished frame to the display.
pub trait Present {
    async fn present(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Terminating,
}

/// Counters reported at shutdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub steps: u64,
    /// Most fixed steps run before a single render
    pub max_steps_per_frame: u32,
}

pub struct LoopDriver {
    fixed_dt: f32,
    /// Control impulse per step, already scaled by `fixed_dt`
    speed: f32,
    damping: f32,
    background: Rgb,
    player: Entity,

    /// Banked time not yet simulated, in seconds
    accumulator: f64,
    /// Clock reading at the start of the previous iteration
    previous: f64,
    input: InputSnapshot,
    state: LoopState,
    stats: LoopStats,
}

impl LoopDriver {
    /// `now` seeds the clock so the first iteration measures from here.
    pub fn new(config: &EngineConfig, player: Entity, now: f64) -> Self {
        Self {
            fixed_dt: config.simulation.fixed_dt,
            speed: config.simulation.scaled_speed(),
            damping: config.simulation.damping,
            background: config.render.background,
            player,
            accumulator: 0.0,
            previous: now,
            input: InputSnapshot::new(),
            state: LoopState::Running,
            stats: LoopStats::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Bank time since the previous call, poll input, and run every whole
    /// fixed step that fits. Returns the number of steps run.
    pub fn update(&mut self, now: f64, keyboard: &mut impl KeyboardSource, world: &mut World) -> u32 {
        let elapsed = (now - self.previous).max(0.0);
        self.previous = now;

        self.input.poll(keyboard);
        let steps = self.advance(elapsed, world);

        if self.input.quit && self.state == LoopState::Running {
            log::info!("terminating after {} frame(s)", self.stats.frames + 1);
            self.state = LoopState::Terminating;
        }
        steps
    }

    /// Add `elapsed` seconds to the accumulator and drain it in fixed steps
    /// using the current input snapshot.
    pub fn advance(&mut self, elapsed: f64, world: &mut World) -> u32 {
        self.accumulator += elapsed;

        let step = self.fixed_dt as f64;
        let mut steps = 0;
        while self.accumulator >= step {
            player_control_system(world, self.player, &self.input, self.speed);
            physics_system(world, self.fixed_dt, self.damping);
            self.accumulator -= step;
            steps += 1;
        }

        if steps > 0 {
            log::trace!("ran {} step(s), {:.4}s banked", steps, self.accumulator);
        }
        self.stats.steps += steps as u64;
        self.stats.max_steps_per_frame = self.stats.max_steps_per_frame.max(steps);
        steps
    }

    /// Draw the frame for this iteration.
    pub fn render<U, S>(&mut self, world: &World, textures: &TextureCache<U>, surface: &mut S) -> usize
    where
        U: TextureUploader,
        S: DrawSurface<Texture = U::Texture>,
    {
        self.stats.frames += 1;
        render_system(world, textures, surface, self.background)
    }
}

/// Drive the loop until quit. `platform` is the clock, the keyboard and the
/// screen at once.
pub async fn run<P, U>(driver: &mut LoopDriver, platform: &mut P, world: &mut World, textures: &TextureCache<U>) -> LoopStats
where
    U: TextureUploader,
    P: Clock + KeyboardSource + DrawSurface<Texture = U::Texture> + Present,
{
    while driver.state() == LoopState::Running {
        let now = platform.now();
        driver.update(now, platform, world);
        driver.render(world, textures, platform);
        platform.present().await;
    }
    driver.stats()
}
