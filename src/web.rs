//! JavaScript bindings (wasm32 only)
//!
//! wasm-bindgen can't export the generic `Session`, so `WaterCatch` pins it
//! to LocalStorage and an `EventQueue`. The page calls `advance` from its
//! animation frame, redraws when `take_redraw` says so, and plays sounds
//! for whatever `drain_events` returns.

use wasm_bindgen::prelude::*;

use crate::events::EventQueue;
use crate::platform::{self, DefaultStore};
use crate::{GameConfig, Session, Surface};

fn to_js(err: serde_json::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WaterCatch {
    session: Session<DefaultStore, EventQueue>,
}

#[wasm_bindgen]
impl WaterCatch {
    /// Session sized to the viewport, with any config saved in LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WaterCatch {
        let mut config = GameConfig::load();
        config.surface = Surface::new(width, height);
        WaterCatch {
            session: Session::new(config, platform::default_store(), EventQueue::new()),
        }
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn resume(&mut self) {
        self.session.resume();
    }

    pub fn toggle_pause(&mut self) {
        self.session.toggle_pause();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(Surface::new(width, height));
    }

    /// Milliseconds since the previous call
    pub fn advance(&mut self, dt_ms: u32) {
        self.session.advance(dt_ms);
    }

    pub fn step_player(&mut self, amount: f32) {
        self.session.step_player(amount);
    }

    pub fn drag_start(&mut self, x: f32, y: f32) -> bool {
        self.session.drag_start(x, y)
    }

    pub fn drag_move(&mut self, x: f32) {
        self.session.drag_move(x);
    }

    pub fn drag_end(&mut self) {
        self.session.drag_end();
    }

    pub fn pointer_leave(&mut self) {
        self.session.pointer_leave();
    }

    pub fn score(&self) -> i32 {
        self.session.score()
    }

    pub fn high_score(&self) -> i32 {
        self.session.high_score()
    }

    pub fn time_left(&self) -> Option<u32> {
        self.session.time_left()
    }

    /// Whether a frame was produced since the last call
    pub fn take_redraw(&mut self) -> bool {
        self.session.presenter_mut().take_redraw()
    }

    /// Current frame (phase, player, drops, HUD values) as JSON
    pub fn frame_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.frame()).map_err(to_js)
    }

    /// Queued start/catch/end/pause events as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        let events = self.session.presenter_mut().drain();
        serde_json::to_string(&events).map_err(to_js)
    }
}
