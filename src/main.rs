//! Springbox entry point
//!
//! Handles platform-specific initialization: DOM wiring and the
//! requestAnimationFrame loop on the web, a headless smoke run natively.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlInputElement};

    use springbox::platform::CanvasSurface;
    use springbox::{Game, Settings};

    /// App state shared between event handlers and the frame loop.
    struct App {
        game: Option<Game>,
        surface: Option<CanvasSurface>,
    }

    impl App {
        fn new() -> Self {
            Self {
                game: None,
                surface: None,
            }
        }
    }

    fn document() -> Document {
        web_sys::window().expect("no window").document().expect("no document")
    }

    fn by_id(id: &str) -> Element {
        document()
            .get_element_by_id(id)
            .unwrap_or_else(|| panic!("missing element #{id}"))
    }

    fn input(id: &str) -> HtmlInputElement {
        by_id(id).dyn_into().expect("not an input element")
    }

    /// Panels swap via the `off-screen` class, same as the page stylesheet
    /// expects.
    fn show_panel(id: &str) {
        let _ = by_id(id).class_list().remove_1("off-screen");
    }

    fn hide_panel(id: &str) {
        let _ = by_id(id).class_list().add_1("off-screen");
    }

    fn read_settings() -> Settings {
        Settings::from_panel(
            input("position-setting-input").checked(),
            input("sound-setting-input").checked(),
            &input("back-count-input").value(),
            &input("speed-input").value(),
        )
    }

    fn update_panel_displays() {
        let settings = read_settings();
        by_id("back-count-display").set_text_content(Some(&settings.box_count.to_string()));
        by_id("speed-display").set_text_content(Some(&settings.speed_label()));
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Springbox starting...");

        let app = Rc::new(RefCell::new(App::new()));

        setup_settings_panel(app.clone());
        setup_game_panel(app.clone());

        hide_panel("game");
        update_panel_displays();

        log::info!("Springbox ready");
    }

    fn setup_settings_panel(app: Rc<RefCell<App>>) {
        // Slider readouts track their inputs.
        for id in ["back-count-input", "speed-input"] {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                update_panel_displays();
            });
            let _ = by_id(id)
                .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                start_game(app.clone());
            });
            let _ = by_id("start-input")
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_game_panel(app: Rc<RefCell<App>>) {
        on_press(app.clone(), "position-input", |app| {
            if let Some(game) = app.game.as_mut() {
                game.position_click();
            }
        });
        on_press(app.clone(), "sound-input", |app| {
            if let Some(game) = app.game.as_mut() {
                game.sound_click();
            }
        });
        on_press(app, "back-button", |app| {
            if let Some(mut game) = app.game.take() {
                game.end();
            }
            app.surface = None;
            hide_panel("game");
            show_panel("settings");
        });
    }

    /// Registers `action` for both quick desktop clicks and quick mobile
    /// touches, so buttons respond without waiting for a full click.
    fn on_press(app: Rc<RefCell<App>>, id: &str, action: fn(&mut App)) {
        for event in ["mousedown", "touchstart"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                action(&mut app.borrow_mut());
            });
            let _ = by_id(id)
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_game(app: Rc<RefCell<App>>) {
        let canvas: HtmlCanvasElement = by_id("canvas").dyn_into().expect("not a canvas");
        let container: HtmlElement = by_id("canvas-container").dyn_into().expect("not an element");

        // Size the backing store from the container's layout.
        let width = container.offset_width().max(1) as u32;
        let height = container.offset_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = read_settings();
        let surface = CanvasSurface::from_canvas(&canvas).expect("no 2d context");
        let seed = js_sys::Date::now() as u64;

        let mut game = Game::new(width as f32, height as f32, settings, seed);
        game.start();
        log::info!("starting game with seed {seed} and {settings:?}");

        {
            let mut a = app.borrow_mut();
            a.game = Some(game);
            a.surface = Some(surface);
        }

        hide_panel("settings");
        show_panel("game");

        request_frame(app);
    }

    fn request_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            let App { game, surface } = &mut *a;
            let (Some(game), Some(surface)) = (game.as_mut(), surface.as_mut()) else {
                return;
            };
            // Inactive game: let the scheduling chain die.
            if !game.is_active() {
                return;
            }
            game.frame(time, surface);
        }

        request_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Springbox (native) starting...");

    println!("\nRunning headless smoke test...");
    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drives the engine for a few simulated seconds against a no-op surface.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use springbox::platform::NullSurface;
    use springbox::{Game, Settings};

    let mut game = Game::new(800.0, 600.0, Settings::default(), 42);
    let mut surface = NullSurface::new();
    game.start();

    let mut now = 0.0;
    for frame in 0..300 {
        game.frame(now, &mut surface);
        now += 1000.0 / 60.0;
        if frame == 60 {
            game.position_click();
        }
    }

    assert!(game.is_active(), "game should still be running");
    game.end();
    assert!(!game.is_active());
    println!("✓ Headless smoke test passed!");
}
