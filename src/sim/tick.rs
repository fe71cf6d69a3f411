//! Per-tick simulation steps
//!
//! `physics_step` and `countdown_step` are the bodies of the physics and
//! countdown timers. Neither checks the session phase; the `Session` only
//! calls them while Playing.

use super::collision::{DropFate, resolve_drop};
use super::score::apply_catch;
use super::state::{DropKind, EndReason, GameState};

/// What happened during one physics tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Caught drops, in processing order
    pub catches: Vec<DropKind>,
    /// Drops that fell off the bottom
    pub missed: usize,
    /// Set when a catch pushed the score past a threshold
    pub end: Option<EndReason>,
}

/// Advance every drop one step and resolve catches and misses.
///
/// Walks back-to-front so removal never skips a neighbor. Stops as soon as a
/// catch makes the score terminal; remaining drops are left where they are.
pub fn physics_step(state: &mut GameState) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    for i in (0..state.drops.len()).rev() {
        state.drops[i].fall();

        match resolve_drop(&state.drops[i], &state.player, &state.surface) {
            DropFate::Caught => {
                let drop = state.drops.remove(i);
                report.catches.push(drop.kind);
                let end = apply_catch(&mut state.score, drop.kind);
                log::debug!("Caught {:?} drop {} (score {})", drop.kind, drop.id, state.score);
                if let Some(reason) = end {
                    report.end = Some(reason);
                    break;
                }
            }
            DropFate::Missed => {
                state.drops.remove(i);
                report.missed += 1;
            }
            DropFate::Live => {}
        }
    }

    report
}

/// Take one second off the clock. Returns true when time has run out.
/// Untimed sessions never run out.
pub fn countdown_step(state: &mut GameState) -> bool {
    match &mut state.time_left {
        Some(time_left) => {
            *time_left = time_left.saturating_sub(1);
            *time_left == 0
        }
        None => false,
    }
}
