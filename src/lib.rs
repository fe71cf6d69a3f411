//! Water Catch - catch the water, dodge the bombs
//!
//! Core modules:
//! - `sim`: Session simulation (spawning, motion, collisions, scoring, input)
//! - `session`: Lifecycle state machine driving the simulation
//! - `persistence`: High score storage backends
//! - `platform`: Browser/native platform abstraction
//! - `settings`: Game configuration
//! - `events`: Queued presenter for polling hosts
//! - `autopilot`: Demo-mode player
//! - `web`: JavaScript bindings (wasm32)

pub mod autopilot;
pub mod events;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use events::{EventQueue, GameEvent};
pub use persistence::{HighScoreStore, MemoryStore, PersistError};
pub use session::{Frame, NullPresenter, Presenter, Session};
pub use settings::GameConfig;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Physics tick period (advance drops, resolve catches, emit frame)
    pub const PHYSICS_TICK_MS: u32 = 30;
    /// Spawn tick period (one new drop per tick)
    pub const SPAWN_TICK_MS: u32 = 1000;
    /// Countdown tick period (timed sessions only)
    pub const COUNTDOWN_TICK_MS: u32 = 1000;
    /// Longest frame delta the scheduler will catch up on
    pub const MAX_FRAME_MS: u32 = 250;

    /// Default session length for timed play
    pub const SESSION_SECONDS: u32 = 60;

    /// Player container size
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Player top edge sits this far above the bottom of the surface
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;
    /// Discrete step size (one key press / tap)
    pub const STEP_AMOUNT: f32 = 20.0;

    /// Drop sprite size (square)
    pub const DROP_SIZE: f32 = 32.0;
    /// Vertical displacement per physics tick
    pub const FALL_STEP: f32 = 5.0;
    /// Probability that a spawned drop is water rather than a bomb
    pub const WATER_CHANCE: f32 = 0.7;

    /// Points for catching water
    pub const WATER_POINTS: i32 = 10;
    /// Points lost for catching a bomb
    pub const BOMB_PENALTY: i32 = 10;
    /// Reaching this score ends the session as a win
    pub const WIN_SCORE: i32 = 100;
    /// Falling to this score ends the session as a loss
    pub const LOSS_SCORE: i32 = -50;
}

/// Play area dimensions, supplied by the host (viewport size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Whether a point lies on the surface (edges inclusive)
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Clamp a left edge so an object of `width` stays within `[0, surface_width]`
#[inline]
pub fn clamp_left(x: f32, width: f32, surface_width: f32) -> f32 {
    x.min(surface_width - width).max(0.0)
}
