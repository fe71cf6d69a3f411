//! Session simulation
//!
//! All gameplay rules live here. This module has no rendering, audio or
//! storage dependencies:
//! - Fixed per-tick displacement only
//! - Seeded RNG only
//! - Single-threaded, every step runs to completion

pub mod collision;
pub mod controller;
pub mod scheduler;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{DropFate, drop_off_screen, drop_player_collision, resolve_drop};
pub use controller::{DragState, PlayerController};
pub use scheduler::{PeriodicTask, Scheduler, TaskKind};
pub use score::{apply_catch, score_outcome};
pub use spawner::{Spawner, kind_for_roll};
pub use state::{DropKind, Droplet, EndReason, GamePhase, GameState, Player};
pub use tick::{TickReport, countdown_step, physics_step};
