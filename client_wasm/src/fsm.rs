//! Screen State Machine
//!
//! Tracks which screen the canvas is showing so the page cannot start a
//! second match on top of a running one.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Screens
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Blank,
    Title,
    Playing,
    GameOver,
}

/// Actions that trigger screen changes
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    ShowTitle,
    StartMatch,
    MatchEnded,
}

/// Screen Finite State Machine
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct ScreenFsm {
    screen: Screen,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl ScreenFsm {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self {
            screen: Screen::Blank,
        }
    }

    /// Get current screen
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Get current screen as string (for JS interop)
    pub fn screen_string(&self) -> String {
        format!("{:?}", self.screen)
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: ScreenAction) -> bool {
        self.next_screen(action).is_some()
    }

    /// Attempt a transition; returns whether it happened
    pub fn transition(&mut self, action: ScreenAction) -> bool {
        match self.next_screen(action) {
            Some(next) => {
                self.screen = next;
                true
            }
            None => false,
        }
    }

    fn next_screen(&self, action: ScreenAction) -> Option<Screen> {
        match (self.screen, action) {
            // A running match owns the canvas until it ends
            (Screen::Playing, ScreenAction::MatchEnded) => Some(Screen::GameOver),
            (Screen::Playing, _) => None,

            (_, ScreenAction::ShowTitle) => Some(Screen::Title),
            (_, ScreenAction::StartMatch) => Some(Screen::Playing),

            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }
}

impl Default for ScreenFsm {
    fn default() -> Self {
        Self::new()
    }
}
