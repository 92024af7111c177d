//! Mouse input wiring
//!
//! Handlers are installed through the canvas `onclick` / `onmousemove`
//! properties, so a rematch replaces the previous match's handlers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::session::Session;

/// Canvas click resumes play
pub fn listen_click(canvas: &HtmlCanvasElement, session: Session) {
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        session.click();
    });
    canvas.set_onclick(Some(on_click.as_ref().unchecked_ref()));
    on_click.forget();
}

/// Mouse movement over the canvas steers the near paddle
pub fn listen_mouse_move(canvas: &HtmlCanvasElement, session: Session) {
    let target = canvas.clone();
    let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        session.pointer_moved(event.client_y() as f32, target.offset_top() as f32);
    });
    canvas.set_onmousemove(Some(on_move.as_ref().unchecked_ref()));
    on_move.forget();
}
