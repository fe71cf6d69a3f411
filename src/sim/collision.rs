//! Collision detection between drops and the player
//!
//! A catch only needs the drop's bottom edge to reach the player's top edge
//! while the two overlap horizontally; full containment is not required.

use super::state::{Droplet, Player};
use crate::Surface;
use crate::consts::DROP_SIZE;

/// What happens to a drop after it has moved this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropFate {
    /// Overlaps the player
    Caught,
    /// Fell past the bottom edge
    Missed,
    /// Still falling
    Live,
}

/// Check whether a drop is touching the player
pub fn drop_player_collision(drop: &Droplet, player: &Player) -> bool {
    drop.pos.y + DROP_SIZE >= player.pos.y
        && drop.pos.x < player.pos.x + player.size.x
        && drop.pos.x + DROP_SIZE > player.pos.x
}

/// Check if a drop has left the bottom of the surface
pub fn drop_off_screen(drop: &Droplet, surface: &Surface) -> bool {
    drop.pos.y > surface.height
}

/// Classify an already-advanced drop. Catch wins over off-screen.
pub fn resolve_drop(drop: &Droplet, player: &Player, surface: &Surface) -> DropFate {
    if drop_player_collision(drop, player) {
        DropFate::Caught
    } else if drop_off_screen(drop, surface) {
        DropFate::Missed
    } else {
        DropFate::Live
    }
}
