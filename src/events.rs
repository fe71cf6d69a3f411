//! Buffered presenter for hosts that poll
//!
//! Script hosts can't receive Rust callbacks mid-tick, so `EventQueue`
//! records what a `Presenter` would have been told and hands it over when
//! the host asks.

use serde::Serialize;

use crate::session::{Frame, Presenter};
use crate::sim::DropKind;

/// A presenter call, as data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    SessionStart,
    Catch { kind: DropKind },
    SessionEnd { final_score: i32, high_score: i32 },
    PauseToggle { paused: bool },
}

/// Presenter that queues events and remembers whether a redraw is due
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
    redraw: bool,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every event queued since the last drain, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether a frame was emitted since the last call; clears the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

impl Presenter for EventQueue {
    fn on_session_start(&mut self) {
        self.events.push(GameEvent::SessionStart);
    }

    fn on_frame(&mut self, _frame: &Frame<'_>) {
        self.redraw = true;
    }

    fn on_catch(&mut self, kind: DropKind) {
        self.events.push(GameEvent::Catch { kind });
    }

    fn on_session_end(&mut self, final_score: i32, high_score: i32) {
        self.events.push(GameEvent::SessionEnd {
            final_score,
            high_score,
        });
    }

    fn on_pause_toggle(&mut self, paused: bool) {
        self.events.push(GameEvent::PauseToggle { paused });
    }
}
