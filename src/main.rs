//! Snake Chase entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

    use snake_chase::Tuning;
    use snake_chase::renderer::CanvasRenderer;
    use snake_chase::sim::{GamePhase, GameState, TickInput, tick};

    /// Nominal frame length used for the very first frame
    const FIRST_FRAME_MS: f64 = 1000.0 / 60.0;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        /// Written by input handlers, consumed once per frame
        input: TickInput,
        last_time: f64,
        last_phase: GamePhase,
    }

    impl Game {
        fn new(state: GameState, renderer: CanvasRenderer) -> Self {
            let input = TickInput {
                pointer: state.pointer,
                dt_ms: 0.0,
            };
            let last_phase = state.phase;
            Self {
                state,
                renderer,
                input,
                last_time: 0.0,
                last_phase,
            }
        }

        /// Run one simulation step
        fn update(&mut self, time: f64) {
            self.input.dt_ms = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                FIRST_FRAME_MS
            };
            self.last_time = time;

            tick(&mut self.state, &self.input);

            if self.state.phase.is_playing() != self.last_phase.is_playing() {
                log::debug!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            }
            self.last_phase = self.state.phase;
        }

        /// Render the current frame
        fn render(&self) {
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.renderer.resize(width, height);
            self.state.resize(width as f32, height as f32);
            log::debug!("Resized to {}x{}", width, height);
        }
    }

    fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok((width as u32, height as u32))
    }

    /// Optional `<script id="tuning" type="application/json">` overrides
    fn load_tuning(document: &Document) -> Tuning {
        let json = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content());
        Tuning::load_or_default(json.as_deref())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Snake Chase starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let renderer = CanvasRenderer::new(canvas)?;
        let (width, height) = viewport_size(&window)?;
        renderer.resize(width, height);

        let tuning = load_tuning(&document);
        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_tuning(seed, Vec2::new(width as f32, height as f32), tuning);
        let game = Rc::new(RefCell::new(Game::new(state, renderer)));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&window, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Snake Chase running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, game: Rc<RefCell<Game>>) {
        // Mouse move - absolute client position
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().input.pointer =
                    Vec2::new(event.client_x() as f32, event.client_y() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - first touch acts as the pointer
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    event.prevent_default();
                    game.borrow_mut().input.pointer =
                        Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                }
            });
            let _ = window
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Viewport resize
        {
            let window_clone = window.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                match viewport_size(&window_clone) {
                    Ok((w, h)) => game.borrow_mut().resize(w, h),
                    Err(e) => log::warn!("Could not read viewport size: {:?}", e),
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Snake Chase failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Snake Chase (native) starting...");
    log::info!("Native mode runs a headless simulation - run with `trunk serve` for the web version");

    let config = headless::HeadlessConfig::from_env()?;
    let summary = headless::run(&config);
    log::info!(
        "Simulated {} frames: {} catches, {} rounds, {} live particles",
        summary.frames,
        summary.catches,
        summary.rounds,
        summary.particles
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use anyhow::{Context, Result};
    use glam::Vec2;

    use snake_chase::Tuning;
    use snake_chase::sim::{GameState, TickInput, tick};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
    /// Scripted pointer orbit
    const ORBIT_RADIUS: f32 = 220.0;
    const ORBIT_STEP: f32 = 0.02;

    pub struct HeadlessConfig {
        pub seed: u64,
        pub frames: u64,
        pub tuning: Tuning,
    }

    impl HeadlessConfig {
        /// Read `SNAKE_CHASE_SEED`, `SNAKE_CHASE_FRAMES` and `SNAKE_CHASE_TUNING` (a JSON path)
        pub fn from_env() -> Result<Self> {
            let seed = match std::env::var("SNAKE_CHASE_SEED") {
                Ok(s) => s.parse().context("SNAKE_CHASE_SEED must be an integer")?,
                Err(_) => 1,
            };
            let frames = match std::env::var("SNAKE_CHASE_FRAMES") {
                Ok(s) => s.parse().context("SNAKE_CHASE_FRAMES must be an integer")?,
                Err(_) => 60 * 60,
            };
            let tuning = match std::env::var("SNAKE_CHASE_TUNING") {
                Ok(path) => {
                    let json = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading tuning file {path}"))?;
                    Tuning::from_json(&json).with_context(|| format!("loading {path}"))?
                }
                Err(_) => Tuning::default(),
            };
            Ok(Self {
                seed,
                frames,
                tuning,
            })
        }
    }

    pub struct Summary {
        pub frames: u64,
        pub catches: u32,
        pub rounds: u32,
        pub particles: usize,
    }

    /// Step the game with the pointer circling the viewport center
    pub fn run(config: &HeadlessConfig) -> Summary {
        log::info!("Headless run with seed {}", config.seed);
        let mut state = GameState::with_tuning(config.seed, VIEWPORT, config.tuning.clone());
        let center = VIEWPORT / 2.0;
        let mut catches = 0;

        for frame in 0..config.frames {
            let angle = frame as f32 * ORBIT_STEP;
            let input = TickInput {
                pointer: center + Vec2::new(angle.cos(), angle.sin()) * ORBIT_RADIUS,
                dt_ms: FRAME_MS,
            };
            let was_playing = state.phase.is_playing();
            tick(&mut state, &input);
            if was_playing && !state.phase.is_playing() {
                catches += 1;
            }
        }

        Summary {
            frames: state.frame,
            catches,
            rounds: state.rounds,
            particles: state.particles.len(),
        }
    }
}
