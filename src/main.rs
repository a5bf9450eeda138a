//! Gem Dash entry point
//!
//! The browser owns all scheduling and I/O: keyboard events feed the input
//! state, two intervals drive the spawners, and `requestAnimationFrame`
//! drives the simulation/render loop. The native binary runs the same
//! simulation headlessly with a scripted spawn cadence.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use gem_dash::GameConfig;
    use gem_dash::render::{self, CanvasSurface};
    use gem_dash::sim::{
        Direction, GameEvent, GameLoop, GameState, InputState, spawn_gem, spawn_obstacle,
    };

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        game_loop: GameLoop,
        surface: CanvasSurface,
        /// Interval handles for the two spawn timers, cancelled on game over
        spawn_timers: Option<(i32, i32)>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Gem Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // An unavailable 2D context is a fatal startup configuration error.
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("2d context unavailable")
            .dyn_into()
            .expect("not a 2d context");

        // Canvas dimensions are read-only configuration fixed at startup.
        let config = GameConfig::with_canvas(canvas.width() as f32, canvas.height() as f32);
        let seed = js_sys::Date::now() as u64;

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(config, seed),
            input: InputState::default(),
            game_loop: GameLoop::new(),
            surface: CanvasSurface::new(ctx),
            spawn_timers: None,
        }));

        set_score_text(0);
        setup_input_handlers(game.clone());
        start_spawn_timers(game.clone());

        // Kick off the first frame
        request_animation_frame(game);

        log::info!("Gem Dash running (seed {seed})");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Keydown: mark the direction held; unrecognized keys are ignored
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    game.borrow_mut().input.set_held(dir, true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup: release the direction
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(dir) = Direction::from_key(&event.key()) {
                    game.borrow_mut().input.set_held(dir, false);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_spawn_timers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let (obstacle_ms, gem_ms) = {
            let g = game.borrow();
            (
                g.state.config.obstacle_spawn_ms as i32,
                g.state.config.gem_spawn_ms as i32,
            )
        };

        let obstacle_id = {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                spawn_obstacle(&mut game.borrow_mut().state);
            });
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    obstacle_ms,
                )
                .expect("failed to start obstacle spawn timer");
            closure.forget();
            id
        };

        let gem_id = {
            let game = game.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                spawn_gem(&mut game.borrow_mut().state);
            });
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    gem_ms,
                )
                .expect("failed to start gem spawn timer");
            closure.forget();
            id
        };

        game.borrow_mut().spawn_timers = Some((obstacle_id, gem_id));
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            let g = &mut *g;

            let input = g.input;
            let events = g.game_loop.frame(&mut g.state, &input);
            for event in events {
                match event {
                    GameEvent::ScoreChanged(score) => set_score_text(score),
                    GameEvent::GameOver => {
                        show_game_over();
                        cancel_spawn_timers(g);
                        log::info!("Game over at score {}", g.state.score);
                    }
                }
            }

            // The final frame is still rendered after the loop stops.
            render::draw(&g.state, &mut g.surface);
            g.game_loop.is_running()
        };

        if keep_going {
            request_animation_frame(game);
        }
    }

    /// Stop both spawn intervals; recurring work ends with the game.
    fn cancel_spawn_timers(game: &mut Game) {
        if let Some((obstacle_id, gem_id)) = game.spawn_timers.take() {
            let window = web_sys::window().expect("no window");
            window.clear_interval_with_handle(obstacle_id);
            window.clear_interval_with_handle(gem_id);
        }
    }

    fn set_score_text(score: u64) {
        let document = web_sys::window().expect("no window").document().expect("no document");
        if let Some(el) = document.get_element_by_id("scoreDisplay") {
            el.set_text_content(Some(&format!("Score: {score}")));
        }
    }

    fn show_game_over() {
        let document = web_sys::window().expect("no window").document().expect("no document");
        if let Some(el) = document.get_element_by_id("gameOverMsg") {
            let _ = el.set_attribute("style", "display: block");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gem_dash::GameConfig;
    use gem_dash::sim::{GameEvent, GameLoop, GameState, InputState, spawn_gem, spawn_obstacle};

    env_logger::init();
    log::info!("Gem Dash (native) starting...");

    // Headless run at a nominal 60 fps: spawn cadence derived from the
    // configured periods, no input held, seeded RNG for reproducibility.
    let config = GameConfig::default();
    let obstacle_every = (config.obstacle_spawn_ms as u64 * 60).div_ceil(1000);
    let gem_every = (config.gem_spawn_ms as u64 * 60).div_ceil(1000);

    let mut state = GameState::new(config, 0xDEC0DE);
    let mut game_loop = GameLoop::new();
    let input = InputState::default();

    let mut frames: u64 = 0;
    while game_loop.is_running() && frames < 36_000 {
        if frames % obstacle_every == 0 {
            spawn_obstacle(&mut state);
        }
        if frames % gem_every == 0 {
            spawn_gem(&mut state);
        }
        for event in game_loop.frame(&mut state, &input) {
            match event {
                GameEvent::ScoreChanged(score) => log::info!("Score: {score}"),
                GameEvent::GameOver => log::info!("Game over"),
            }
        }
        frames += 1;
    }

    log::info!(
        "Headless run finished after {frames} frames, final score {}",
        state.score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
