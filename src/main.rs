//! Trail Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use trail_pong::consts::FRAME_MS;
    use trail_pong::renderer::{CanvasSurface, Surface};
    use trail_pong::{Game, Settings};

    /// Game plus the host-side bits the frame loop needs
    struct App {
        game: Game,
        surface: CanvasSurface,
        last_time: f64,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time) as f32
            } else {
                FRAME_MS
            };
            self.last_time = time;
            self.game.frame(&mut self.surface, dt);
        }
    }

    /// Inner window size in whole pixels
    fn window_size() -> (u32, u32) {
        let Some(window) = web_sys::window() else {
            return (0, 0);
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w as u32, h as u32)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Trail Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let surface = CanvasSurface::new(canvas).expect("no 2d context");

        let (width, height) = window_size();
        surface.resize(width, height);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, surface.size(), settings);

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            last_time: 0.0,
        }));

        setup_input_handlers(app.clone());
        setup_resize_handler(app.clone());

        request_animation_frame(app);
        log::info!("Trail Pong running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key(&event.key(), true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: key-ups will not arrive while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().game.input.clear();
                log::info!("Input released (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = window_size();
            app.borrow().surface.resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Trail Pong (native) starting...");
    log::info!("Native mode runs a headless match - build for wasm32 to play in a browser");

    headless::run(60 * 60);
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use trail_pong::consts::FRAME_MS;
    use trail_pong::renderer::Surface;
    use trail_pong::sim::Bounds;
    use trail_pong::{Game, Settings};

    /// Surface with a fixed size that draws nothing
    struct NullSurface(Bounds);

    impl Surface for NullSurface {
        fn size(&self) -> Bounds {
            self.0
        }
        fn fade(&mut self, _color: &str) {}
        fn draw_disc(&mut self, _center: Vec2, _radius: f32, _fill: &str, _stroke: Option<&str>) {}
        fn draw_rect(&mut self, _pos: Vec2, _width: f32, _height: f32, _fill: &str) {}
    }

    /// Play `frames` frames with a simple autopilot on the keyboard side
    pub fn run(frames: u32) {
        let mut surface = NullSurface(Bounds::new(800.0, 600.0));
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let mut game = Game::new(seed, surface.size(), Settings::load());

        for _ in 0..frames {
            // Hold the key toward the ball, release the other one
            let ball_y = game.state.ball.pos.y;
            let paddle_y = game.state.player.center().y;
            game.key("ArrowUp", ball_y < paddle_y - 20.0);
            game.key("ArrowDown", ball_y > paddle_y + 20.0);

            game.frame(&mut surface, FRAME_MS);
        }

        let summary = serde_json::json!({
            "seed": seed,
            "frames": game.state.frame,
            "player": game.state.player.score,
            "bot": game.state.bot.score,
        });
        println!("{}", summary);
    }
}
