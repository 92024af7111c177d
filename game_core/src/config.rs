use std::time::Duration;

use crate::{Color, Court, Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub tick_ms: u64,
    pub opponent_speed: f32,
    pub max_score: u8,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_hit_spin: f32,
    pub ball_radius: f32,
    pub ball_max_velocity: f32,
    pub ball_color: Color,
    pub near_color: Color,
    pub far_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: Params::TICK_MS,
            opponent_speed: Params::OPPONENT_SPEED,
            max_score: Params::MAX_SCORE,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_hit_spin: Params::PADDLE_HIT_SPIN,
            ball_radius: Params::BALL_RADIUS,
            ball_max_velocity: Params::BALL_MAX_VELOCITY,
            ball_color: Color::GREEN,
            near_color: Color::RED,
            far_color: Color::BLUE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Left edge of a paddle; the two sides mirror each other
    pub fn paddle_x(&self, side: Side, court: &Court) -> f32 {
        match side {
            Side::Near => 0.0,
            Side::Far => court.width - self.paddle_width,
        }
    }

    /// Top edge that vertically centres a paddle in the court
    pub fn paddle_start_y(&self, court: &Court) -> f32 {
        court.height / 2.0 - self.paddle_height / 2.0
    }

    pub fn paddle_color(&self, side: Side) -> Color {
        match side {
            Side::Near => self.near_color,
            Side::Far => self.far_color,
        }
    }
}
