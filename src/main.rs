//! Heart Catch entry point
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
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, MouseEvent, TouchEvent};

    use heart_catch::platform::{self, ids};
    use heart_catch::renderer::CanvasSurface;
    use heart_catch::scene::SceneCue;
    use heart_catch::{GameSession, Settings};

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        surface: CanvasSurface,
        document: Document,
    }

    impl Game {
        /// Run one frame and push DOM changes
        fn frame(&mut self, time: f64) {
            let report = self.session.frame(&mut self.surface, time);

            if let Some(meter) = report.meter() {
                platform::set_meter(&self.document, meter);
            }
            for cue in &report.scene.cues {
                match cue {
                    SceneCue::ShowProposal | SceneCue::ShowCelebration => {
                        platform::show_screen(&self.document, self.session.screen());
                    }
                    SceneCue::RevealHiddenMessage => {
                        platform::reveal_hidden_message(&self.document);
                    }
                }
            }
            if report.scene.story_changed {
                platform::set_story_text(&self.document, self.session.scene.story.text());
            }
        }

        /// Match canvas and simulation to the window size
        fn resize(&mut self) {
            let (w, h) = viewport();
            self.surface.resize(w as u32, h as u32);
            self.session.resize(w, h);
        }

        fn start(&mut self) {
            self.resize();
            if self.session.start() {
                platform::set_meter(&self.document, self.session.state.score.meter_percent());
                platform::show_screen(&self.document, self.session.screen());
            }
        }
    }

    fn viewport() -> (f32, f32) {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        (w as f32, h as f32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        if console_log::init_with_level(settings.log_level()).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Heart Catch starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(ids::CANVAS)
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let (w, h) = viewport();
        let mut session = GameSession::new(settings, seed, Vec2::new(w, h));
        if let Some(size) = platform::no_button_size(&document) {
            session.set_no_button_size(size);
        }
        log::info!("Game initialized with seed: {}", session.state.seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            surface: CanvasSurface::new(canvas, ctx),
            document: document.clone(),
        }));
        game.borrow_mut().resize();

        setup_input_handlers(&window, game.clone())?;
        setup_buttons(&document, game.clone())?;

        // Background hearts float on the start screen too
        request_animation_frame(game);

        log::info!("Heart Catch running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Resize
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().resize();
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - absolute position centers the basket
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().session.pointer_moved(event.client_x() as f32);
            });
            window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().session.pointer_moved(touch.client_x() as f32);
                }
            });
            window
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id(ids::START_BUTTON) {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().start();
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id(ids::YES_BUTTON) {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                if g.session.accept() {
                    platform::highlight_yes(&g.document);
                }
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id(ids::NO_BUTTON) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut g = game.borrow_mut();
                if let Some(size) = platform::no_button_size(&g.document) {
                    g.session.set_no_button_size(size);
                }
                let (w, h) = viewport();
                if let Some(pos) = g.session.dodge(Vec2::new(w, h)) {
                    let label = g.session.scene.no_button.label.unwrap_or_default();
                    platform::place_no_button(&g.document, pos, label);
                }
            });
            for event in ["mouseover", "touchstart"] {
                btn.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
            }
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    let settings = heart_catch::Settings::load();
    // RUST_LOG overrides the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level().as_str()),
    )
    .init();
    log::info!("Heart Catch (native) starting...");
    log::info!("Native mode runs a headless autoplay - use `trunk serve` for the web version");

    let outcome = autoplay::run(settings, 20_260_214);
    log::info!(
        "Autoplay finished: phase={} score={} frames={} ticks={} hidden_message={}",
        outcome.phase.as_str(),
        outcome.score,
        outcome.frames,
        outcome.ticks,
        outcome.hidden_message_visible
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted playthrough against the recording surface
#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use glam::Vec2;
    use heart_catch::renderer::RecordingSurface;
    use heart_catch::sim::GamePhase;
    use heart_catch::{GameSession, Settings};

    /// 60 Hz
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after ten simulated minutes
    const MAX_FRAMES: u64 = 36_000;

    pub struct Outcome {
        pub phase: GamePhase,
        pub score: u32,
        pub frames: u64,
        /// Simulation ticks, equal to `frames`
        pub ticks: u64,
        pub hidden_message_visible: bool,
    }

    pub fn run(settings: Settings, seed: u64) -> Outcome {
        let mut session = GameSession::new(settings, seed, Vec2::new(800.0, 600.0));
        let mut surface = RecordingSurface::new();
        let mut frames = 0;
        let mut dodged = false;

        session.start();
        while frames < MAX_FRAMES && !session.scene.hidden_message_visible {
            // Chase the lowest heart still in play
            let target = session
                .state
                .hearts
                .iter()
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
                .map(|h| h.pos.x);
            if let Some(x) = target {
                session.pointer_moved(x);
            }

            session.frame(&mut surface, frames as f64 * FRAME_MS);
            frames += 1;

            if session.phase() == GamePhase::Proposal && session.scene.story.is_done() {
                if !dodged {
                    dodged = session.dodge(Vec2::new(800.0, 600.0)).is_some();
                    log::info!("Tried to say no");
                }
                session.accept();
            }
        }

        Outcome {
            phase: session.phase(),
            score: session.state.score.score(),
            frames,
            ticks: session.state.time_ticks,
            hidden_message_visible: session.scene.hidden_message_visible,
        }
    }
}
