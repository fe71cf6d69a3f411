//! Demo-mode player
//!
//! Plays through the same discrete-step input a human uses: chases the lowest
//! water drop still above the container and sidesteps bombs about to land.

use crate::consts::{DROP_SIZE, STEP_AMOUNT};
use crate::session::Frame;
use crate::sim::DropKind;

/// Bombs closer than this (vertically) to the container trigger a dodge
const DANGER_ZONE: f32 = 120.0;

/// Pick the next step for the player, if any
pub fn next_step(frame: &Frame<'_>) -> Option<f32> {
    let player = frame.player;
    let top = player.pos.y;
    let left = player.pos.x;
    let right = left + player.size.x;
    let center = left + player.size.x / 2.0;

    // Dodge first: a bomb over the container and close to landing
    let threat = frame
        .drops
        .iter()
        .filter(|d| d.kind == DropKind::Bomb)
        .filter(|d| d.pos.y + DROP_SIZE < top && top - (d.pos.y + DROP_SIZE) < DANGER_ZONE)
        .find(|d| d.pos.x < right && d.pos.x + DROP_SIZE > left);
    if let Some(bomb) = threat {
        let bomb_center = bomb.pos.x + DROP_SIZE / 2.0;
        let away = if bomb_center >= center { -STEP_AMOUNT } else { STEP_AMOUNT };
        // Pinned against a wall: dodge the other way
        let pinned_left = away < 0.0 && left <= 0.0;
        let pinned_right = away > 0.0 && right >= frame.surface.width;
        return Some(if pinned_left || pinned_right { -away } else { away });
    }

    let target = frame
        .drops
        .iter()
        .filter(|d| d.kind == DropKind::Water && d.pos.y + DROP_SIZE < top)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;

    let delta = (target.pos.x + DROP_SIZE / 2.0) - center;
    if delta.abs() < STEP_AMOUNT / 2.0 {
        None
    } else {
        Some(STEP_AMOUNT.copysign(delta))
    }
}
