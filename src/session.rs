//! Session lifecycle
//!
//! `Session` owns the game state, the timers and the input controls, and is
//! the only thing that mutates them. Hosts drive it with `advance` (wall
//! time) and the input entry points; rendering and audio happen in a
//! `Presenter`, storage in a `HighScoreStore`.
//!
//! ```text
//!   Idle --start--> Playing --pause--> Paused
//!                    |   ^---resume----'  |
//!          score/time|                    |restart
//!                    v                    v
//!                  Ended --restart--> Playing
//! ```

use serde::Serialize;

use crate::Surface;
use crate::persistence::HighScoreStore;
use crate::platform::entropy_seed;
use crate::settings::GameConfig;
use crate::sim::{
    DragState, DropKind, Droplet, EndReason, GamePhase, GameState, Player, PlayerController,
    Scheduler, Spawner, TaskKind, countdown_step, physics_step,
};

/// Read-only view of a session for rendering / HUD
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    pub phase: GamePhase,
    pub surface: Surface,
    pub player: &'a Player,
    pub drops: &'a [Droplet],
    pub score: i32,
    pub time_left: Option<u32>,
    pub high_score: i32,
}

impl<'a> Frame<'a> {
    fn of(state: &'a GameState, high_score: i32) -> Self {
        Self {
            phase: state.phase,
            surface: state.surface,
            player: &state.player,
            drops: &state.drops,
            score: state.score,
            time_left: state.time_left,
            high_score,
        }
    }
}

/// Receives everything the player should see or hear.
///
/// Calls are fire-and-forget; a presenter must never call back into the
/// session from inside a callback.
pub trait Presenter {
    /// A session began: start looped background music
    fn on_session_start(&mut self) {}
    /// State changed (physics tick or clock tick): redraw
    fn on_frame(&mut self, _frame: &Frame<'_>) {}
    /// A drop was caught: play its sound cue
    fn on_catch(&mut self, _kind: DropKind) {}
    /// Session over: show results, stop background music
    fn on_session_end(&mut self, _final_score: i32, _high_score: i32) {}
    /// Paused (halt music) or resumed (continue music)
    fn on_pause_toggle(&mut self, _paused: bool) {}
}

/// Presenter that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// One game session and its lifecycle
pub struct Session<S: HighScoreStore, P: Presenter> {
    config: GameConfig,
    /// Surface for the next session (resizes apply on start/restart)
    surface: Surface,
    state: GameState,
    high_score: i32,
    spawner: Spawner,
    scheduler: Scheduler,
    /// Present while Playing or Paused
    controls: Option<PlayerController>,
    store: S,
    presenter: P,
}

impl<S: HighScoreStore, P: Presenter> Session<S, P> {
    pub fn new(config: GameConfig, store: S, presenter: P) -> Self {
        let surface = config.surface;
        let high_score = store.load_high_score();
        Self {
            state: GameState::new(surface, config.session_length()),
            scheduler: Scheduler::new(config.timed),
            spawner: Spawner::new(config.seed.unwrap_or_else(entropy_seed)),
            config,
            surface,
            high_score,
            controls: None,
            store,
            presenter,
        }
    }

    // === Lifecycle ===

    /// Idle -> Playing
    pub fn start(&mut self) {
        if self.state.phase != GamePhase::Idle {
            log::debug!("start() ignored in {:?}", self.state.phase);
            return;
        }
        self.begin();
    }

    /// Paused/Ended -> fresh session
    pub fn restart(&mut self) {
        match self.state.phase {
            GamePhase::Paused | GamePhase::Ended => self.begin(),
            phase => log::debug!("restart() ignored in {:?}", phase),
        }
    }

    /// Playing -> Paused
    pub fn pause(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        self.scheduler.disarm_all();
        if let Some(controls) = &mut self.controls {
            controls.drag_end();
        }
        self.state.phase = GamePhase::Paused;
        log::info!("Paused (score {})", self.state.score);
        self.presenter.on_pause_toggle(true);
    }

    /// Paused -> Playing, continuing from the frozen state
    pub fn resume(&mut self) {
        if self.state.phase != GamePhase::Paused {
            return;
        }
        self.state.phase = GamePhase::Playing;
        self.scheduler.arm_all();
        log::info!("Resumed");
        self.presenter.on_pause_toggle(false);
    }

    /// Pause when playing, resume when paused
    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            _ => {}
        }
    }

    /// New play area; takes effect at the next start/restart
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        if self.state.phase == GamePhase::Idle {
            self.state = GameState::new(surface, self.config.session_length());
        }
    }

    fn begin(&mut self) {
        self.scheduler.disarm_all();

        self.state = GameState::new(self.surface, self.config.session_length());
        self.state.phase = GamePhase::Playing;
        self.high_score = self.store.load_high_score();
        self.spawner = Spawner::new(self.config.seed.unwrap_or_else(entropy_seed));
        self.controls = Some(PlayerController::new());
        self.scheduler.arm_all();

        log::info!(
            "Session started ({}x{}, {}, seed {})",
            self.surface.width,
            self.surface.height,
            match self.state.time_left {
                Some(secs) => format!("{}s", secs),
                None => "untimed".to_string(),
            },
            self.spawner.seed()
        );
        self.presenter.on_session_start();
        self.presenter.on_frame(&Frame::of(&self.state, self.high_score));
    }

    fn end(&mut self, reason: EndReason) {
        self.scheduler.disarm_all();
        self.controls = None;
        self.state.phase = GamePhase::Ended;
        self.state.end_reason = Some(reason);

        let score = self.state.score;
        if score > self.high_score {
            log::info!("New high score {} (was {})", score, self.high_score);
            self.high_score = score;
            self.store.save_high_score(score);
        }

        log::info!("Session ended: {:?}, final score {}", reason, score);
        self.presenter.on_session_end(score, self.high_score);
    }

    // === Timers ===

    /// Feed elapsed wall time and run every timer firing that fell due
    pub fn advance(&mut self, dt_ms: u32) {
        for task in self.scheduler.advance(dt_ms) {
            if self.state.phase != GamePhase::Playing {
                break;
            }
            match task {
                TaskKind::Physics => self.physics_tick(),
                TaskKind::Spawn => self.spawn_tick(),
                TaskKind::Countdown => self.countdown_tick(),
            }
        }
    }

    /// Physics timer body: move drops, resolve catches, redraw
    pub fn physics_tick(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        let report = physics_step(&mut self.state);
        if report.missed > 0 {
            log::trace!("{} drops fell past the player", report.missed);
        }
        for kind in &report.catches {
            self.presenter.on_catch(*kind);
        }
        self.presenter.on_frame(&Frame::of(&self.state, self.high_score));

        if let Some(reason) = report.end {
            self.end(reason);
        }
    }

    /// Spawn timer body: one new drop
    pub fn spawn_tick(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        self.spawner.spawn(&mut self.state);
    }

    /// Countdown timer body: one second off the clock
    pub fn countdown_tick(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        let expired = countdown_step(&mut self.state);
        self.presenter.on_frame(&Frame::of(&self.state, self.high_score));
        if expired {
            self.end(EndReason::TimeUp);
        }
    }

    // === Input ===

    /// Move the player by a fixed step (negative = left)
    pub fn step_player(&mut self, amount: f32) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        if let Some(controls) = &self.controls {
            controls.step(&mut self.state.player, amount, &self.state.surface);
        }
    }

    /// Pointer down. Returns true if the pointer grabbed the player.
    pub fn drag_start(&mut self, x: f32, y: f32) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        match &mut self.controls {
            Some(controls) => controls.drag_start(&self.state.player, x, y, &self.state.surface),
            None => false,
        }
    }

    /// Pointer moved
    pub fn drag_move(&mut self, x: f32) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        if let Some(controls) = &self.controls {
            controls.drag_move(&mut self.state.player, x, &self.state.surface);
        }
    }

    /// Pointer up
    pub fn drag_end(&mut self) {
        if let Some(controls) = &mut self.controls {
            controls.drag_end();
        }
    }

    /// Pointer left the surface: same as releasing it
    pub fn pointer_leave(&mut self) {
        self.drag_end();
    }

    // === Accessors ===

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> i32 {
        self.state.score
    }

    pub fn time_left(&self) -> Option<u32> {
        self.state.time_left
    }

    pub fn high_score(&self) -> i32 {
        self.high_score
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.state.end_reason
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn drops(&self) -> &[Droplet] {
        &self.state.drops
    }

    pub fn surface(&self) -> Surface {
        self.state.surface
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame::of(&self.state, self.high_score)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether input controls are attached (Playing or Paused)
    pub fn input_attached(&self) -> bool {
        self.controls.is_some()
    }

    pub fn drag_state(&self) -> DragState {
        self.controls
            .as_ref()
            .map(|c| c.drag_state())
            .unwrap_or_default()
    }

    /// Whether any timer is armed
    pub fn timers_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
