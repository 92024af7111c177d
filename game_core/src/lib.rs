//! Deterministic Pong simulation core
//!
//! A [`Match`] owns the court, both paddles, the ball and the score. A
//! [`GameLoop`] ticks it at a fixed period and redraws through a host
//! [`Surface`]; pointer and click input go straight to the match between
//! ticks.

pub mod components;
pub mod config;
pub mod court;
pub mod error;
pub mod game;
pub mod params;
pub mod render;
pub mod resources;
pub mod scheduler;
pub mod systems;
pub mod velocity;

pub use components::*;
pub use config::*;
pub use court::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use render::{draw_title, Color, DrawCommand, RecordingSurface, Surface, TextAlign, TextStyle};
pub use resources::*;
pub use scheduler::*;
