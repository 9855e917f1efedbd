//! Browser host bindings
//!
//! The page owns the canvas, the DeviceMotion subscription and the frame
//! clock. It forwards `rotationRate` readings to `on_input_sample`, calls
//! `advance` from requestAnimationFrame and reads the ball back to draw.

use wasm_bindgen::prelude::*;

use crate::driver::FixedStepDriver;
use crate::session::GameSession;
use crate::settings::MazeConfig;
use crate::sim::InputSample;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Tilt Maze starting...");
}

/// A game session exposed to JavaScript
#[wasm_bindgen]
pub struct WasmSession {
    session: GameSession,
    driver: FixedStepDriver,
}

#[wasm_bindgen]
impl WasmSession {
    /// Session on the stock maze
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSession {
        Self {
            session: GameSession::default(),
            driver: FixedStepDriver::default(),
        }
    }

    /// Session from a JSON `MazeConfig`
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<WasmSession, JsValue> {
        let config = MazeConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let session =
            GameSession::from_config(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            session,
            driver: FixedStepDriver::default(),
        })
    }

    #[wasm_bindgen(js_name = onInputSample)]
    pub fn on_input_sample(&mut self, rx: f32, ry: f32, rz: f32) {
        self.session.on_input_sample(InputSample::new(rx, ry, rz));
    }

    /// Run exactly one simulation step
    pub fn tick(&mut self) {
        self.session.tick();
    }

    /// Run the steps owed for `dt_secs` of frame time; returns steps run
    pub fn advance(&mut self, dt_secs: f32) -> u32 {
        self.driver.advance(&mut self.session, dt_secs)
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.driver.clear();
    }

    #[wasm_bindgen(js_name = ballX)]
    pub fn ball_x(&self) -> f32 {
        self.session.snapshot().ball_x
    }

    #[wasm_bindgen(js_name = ballY)]
    pub fn ball_y(&self) -> f32 {
        self.session.snapshot().ball_y
    }

    #[wasm_bindgen(js_name = hasWon)]
    pub fn has_won(&self) -> bool {
        self.session.has_won()
    }

    #[wasm_bindgen(js_name = ballRadius)]
    pub fn ball_radius(&self) -> f32 {
        self.session.simulator().ball().radius
    }

    /// `{ ball_x, ball_y, has_won }` as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_default()
    }

    /// Static layout (bounds, obstacles, goal) as JSON, for drawing once
    #[wasm_bindgen(js_name = arenaJson)]
    pub fn arena_json(&self) -> String {
        serde_json::to_string(self.session.arena()).unwrap_or_default()
    }
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}
