//! Shared handle to the running match
//!
//! The interval callback and the pointer listeners all run on the page's
//! single thread. They share one `GameLoop` through `Rc<RefCell<_>>`, so a
//! handler only ever sees the match between ticks.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{GameLoop, LoopStatus, Match, Surface};
use log::warn;

#[derive(Clone)]
pub struct Session {
    inner: Rc<RefCell<GameLoop>>,
}

impl Session {
    pub fn new(game_loop: GameLoop) -> Self {
        Self {
            inner: Rc::new(RefCell::new(game_loop)),
        }
    }

    /// Click/tap on the canvas. Ignored once the match is over.
    pub fn click(&self) {
        if let Ok(mut game_loop) = self.inner.try_borrow_mut() {
            let _ = game_loop.game_mut().click();
        } else {
            warn!("click arrived during a tick, dropped");
        }
    }

    /// Mouse moved to `client_y` on a canvas whose top edge is at `canvas_top`
    pub fn pointer_moved(&self, client_y: f32, canvas_top: f32) {
        if let Ok(mut game_loop) = self.inner.try_borrow_mut() {
            let _ = game_loop.game_mut().pointer_moved(client_y, canvas_top);
        } else {
            warn!("pointer move arrived during a tick, dropped");
        }
    }

    pub fn tick(&self, surface: &mut dyn Surface) -> LoopStatus {
        match self.inner.try_borrow_mut() {
            Ok(mut game_loop) => game_loop.tick(surface),
            Err(_) => {
                warn!("tick re-entered, skipped");
                LoopStatus::Running
            }
        }
    }

    pub fn with_game<R>(&self, f: impl FnOnce(&Match) -> R) -> R {
        f(self.inner.borrow().game())
    }
}
