//! Browser client for Pong
//!
//! Draws the game on an `HtmlCanvasElement` through its 2d context and drives
//! the simulation from `window.setInterval`. The page calls `show_title` and
//! `run_game`; everything else happens inside the match.

pub mod fsm;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod console_log;
#[cfg(target_arch = "wasm32")]
mod input;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::Once;

    use game_core::{draw_title, GameLoop, LoopStatus, Match};
    use log::{error, info};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    use crate::canvas::CanvasSurface;
    use crate::fsm::{ScreenAction, ScreenFsm};
    use crate::input::{listen_click, listen_mouse_move};
    use crate::session::Session;

    thread_local! {
        static SCREEN: RefCell<ScreenFsm> = RefCell::new(ScreenFsm::new());
    }

    static INIT: Once = Once::new();

    fn init() {
        INIT.call_once(|| {
            console_error_panic_hook::set_once();
            crate::console_log::init(log::LevelFilter::Info);
        });
    }

    fn transition(action: ScreenAction) -> Result<(), JsValue> {
        SCREEN.with(|screen| {
            if screen.borrow_mut().transition(action) {
                Ok(())
            } else {
                Err(JsValue::from_str(&format!(
                    "Cannot {:?} while on {}",
                    action,
                    screen.borrow().screen_string()
                )))
            }
        })
    }

    /// Render the static title card
    #[wasm_bindgen]
    pub fn show_title(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        init();
        transition(ScreenAction::ShowTitle)?;
        let mut surface = CanvasSurface::new(canvas)?;
        draw_title(&mut surface);
        Ok(())
    }

    /// Start a match on `canvas`; `on_game_over` is called with no arguments
    /// once somebody wins
    #[wasm_bindgen]
    pub fn run_game(canvas: HtmlCanvasElement, on_game_over: js_sys::Function) -> Result<(), JsValue> {
        init();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let mut surface = CanvasSurface::new(canvas.clone())?;
        transition(ScreenAction::StartMatch)?;

        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let game = Match::for_surface(&surface, seed);
        let period_ms = game.config().tick_ms;

        let on_end: Box<dyn FnOnce()> = Box::new(move || {
            let _ = transition(ScreenAction::MatchEnded);
            if let Err(err) = on_game_over.call0(&JsValue::NULL) {
                error!("game over callback threw: {:?}", err);
            }
        });
        let session = Session::new(GameLoop::new(game, on_end));

        listen_click(&canvas, session.clone());
        listen_mouse_move(&canvas, session.clone());

        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick = {
            let handle = handle.clone();
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                if session.tick(&mut surface) == LoopStatus::Stopped {
                    if let Some(id) = handle.take() {
                        window.clear_interval_with_handle(id);
                    }
                }
            })
        };
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms as i32,
        )?;
        handle.set(Some(id));
        tick.forget();

        info!("match started, ticking every {}ms", period_ms);
        Ok(())
    }
}
