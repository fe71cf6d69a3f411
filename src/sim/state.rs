//! Game state and core simulation types
//!
//! Everything a session mutates lives here; the `Session` owns one `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{Surface, clamp_left};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session running yet
    #[default]
    Idle,
    /// Active gameplay, timers armed
    Playing,
    /// Frozen mid-session, timers disarmed
    Paused,
    /// Session over (score threshold or time up)
    Ended,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Score reached the win threshold
    Won,
    /// Score fell to the loss threshold
    Lost,
    /// Countdown ran out
    TimeUp,
}

/// Drop types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropKind {
    Water,
    Bomb,
}

impl DropKind {
    /// Score delta applied when the player catches this drop
    pub fn score_delta(&self) -> i32 {
        match self {
            DropKind::Water => WATER_POINTS,
            DropKind::Bomb => -BOMB_PENALTY,
        }
    }
}

/// A falling drop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droplet {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub kind: DropKind,
}

impl Droplet {
    pub fn new(id: u32, x: f32, kind: DropKind) -> Self {
        Self {
            id,
            pos: Vec2::new(x, 0.0),
            kind,
        }
    }

    /// Move one physics step down
    #[inline]
    pub fn fall(&mut self) {
        self.pos.y += FALL_STEP;
    }
}

/// The player's container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; `y` is fixed for the session
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    /// Place the player centered near the bottom of the surface
    pub fn spawn(surface: &Surface) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        let x = clamp_left(surface.width / 2.0 - size.x / 2.0, size.x, surface.width);
        let y = (surface.height - PLAYER_BOTTOM_OFFSET).max(0.0);
        Self {
            pos: Vec2::new(x, y),
            size,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Set the horizontal position, clamped to the surface
    pub fn set_x(&mut self, x: f32, surface_width: f32) {
        if x.is_nan() {
            return;
        }
        self.pos.x = clamp_left(x, self.size.x, surface_width);
    }

    /// Whether a point lies inside the player rectangle (edges inclusive)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.pos.x
            && x <= self.pos.x + self.size.x
            && y >= self.pos.y
            && y <= self.pos.y + self.size.y
    }
}

/// Complete simulation state of one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Play area, fixed for the session
    pub surface: Surface,
    /// Current phase
    pub phase: GamePhase,
    /// Player container
    pub player: Player,
    /// Live drops in creation order
    pub drops: Vec<Droplet>,
    /// Running score
    pub score: i32,
    /// Seconds remaining (None in untimed sessions)
    pub time_left: Option<u32>,
    /// Set on entering Ended
    pub end_reason: Option<EndReason>,
    /// Physics ticks run this session
    pub time_ticks: u64,
    /// Next drop ID
    next_id: u32,
}

impl GameState {
    /// Fresh state for a new session on the given surface
    pub fn new(surface: Surface, time_left: Option<u32>) -> Self {
        Self {
            surface,
            phase: GamePhase::Idle,
            player: Player::spawn(&surface),
            drops: Vec::new(),
            score: 0,
            time_left,
            end_reason: None,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new drop ID
    pub fn next_drop_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Surface::default(), None)
    }
}
