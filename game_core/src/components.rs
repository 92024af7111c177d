use glam::Vec2;

use crate::Color;

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Human-controlled, left edge
    Near,
    /// Opponent-controlled, right edge
    Far,
}

impl Side {
    /// Name shown in the winner overlay
    pub fn display_name(self) -> &'static str {
        match self {
            Side::Near => "Player",
            Side::Far => "Computer",
        }
    }
}

/// Paddle - a fixed-size rectangle positioned by its top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32, color: Color) -> Self {
        Self {
            side,
            pos,
            width,
            height,
            color,
        }
    }

    pub fn mid_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Whether the ball's vertical span touches this paddle
    pub fn overlaps_vertically(&self, ball: &Ball) -> bool {
        ball.pos.y <= self.bottom() && ball.pos.y + ball.radius >= self.pos.y
    }

    /// Send the ball back, steering it by where it struck the paddle
    pub fn hit_ball(&self, ball: &mut Ball, spin: f32) {
        ball.vel.x = -ball.vel.x;

        if ball.pos.y + ball.radius / 2.0 > self.mid_y() {
            ball.vel.y += spin;
        } else {
            ball.vel.y -= spin;
        }
    }
}

/// Ball - the pong ball, positioned by its centre
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Put the ball back at `center` with a fresh velocity
    pub fn serve(&mut self, center: Vec2, vel: Vec2) {
        self.pos = center;
        self.vel = vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle_at(y: f32) -> Paddle {
        Paddle::new(Side::Near, Vec2::new(0.0, y), 25.0, 100.0, Color::RED)
    }

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        Ball::new(Vec2::new(x, y), vel, 10.0, Color::GREEN)
    }

    #[test]
    fn test_hit_ball_lower_half_adds_spin() {
        let paddle = paddle_at(250.0);
        let mut ball = ball_at(10.0, 320.0, Vec2::new(-12.0, 5.0));

        paddle.hit_ball(&mut ball, 7.0);

        assert_eq!(ball.vel, Vec2::new(12.0, 12.0));
    }

    #[test]
    fn test_hit_ball_upper_half_subtracts_spin() {
        let paddle = paddle_at(250.0);
        let mut ball = ball_at(10.0, 260.0, Vec2::new(-12.0, 5.0));

        paddle.hit_ball(&mut ball, 7.0);

        assert_eq!(ball.vel, Vec2::new(12.0, -2.0));
    }

    #[test]
    fn test_hit_ball_contact_point_biased_by_half_radius() {
        // Centre 5px above the paddle midpoint still counts as the lower half
        let paddle = paddle_at(250.0);
        let mut ball = ball_at(10.0, 296.0, Vec2::new(-12.0, 0.0));

        paddle.hit_ball(&mut ball, 7.0);
        assert_eq!(ball.vel.y, 7.0);

        // Exactly at the biased midpoint goes up
        let mut ball = ball_at(10.0, 295.0, Vec2::new(-12.0, 0.0));
        paddle.hit_ball(&mut ball, 7.0);
        assert_eq!(ball.vel.y, -7.0);
    }

    #[test]
    fn test_overlaps_vertically_edges() {
        let paddle = paddle_at(250.0);
        assert!(paddle.overlaps_vertically(&ball_at(10.0, 350.0, Vec2::ZERO)));
        assert!(!paddle.overlaps_vertically(&ball_at(10.0, 350.5, Vec2::ZERO)));
        assert!(paddle.overlaps_vertically(&ball_at(10.0, 240.0, Vec2::ZERO)));
        assert!(!paddle.overlaps_vertically(&ball_at(10.0, 239.5, Vec2::ZERO)));
    }

    #[test]
    fn test_serve_moves_ball_to_center() {
        let mut ball = ball_at(-30.0, 12.0, Vec2::new(-20.0, 3.0));
        ball.serve(Vec2::new(400.0, 300.0), Vec2::new(10.0, -15.0));
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(ball.vel, Vec2::new(10.0, -15.0));
    }

    #[test]
    fn test_side_display_name() {
        assert_eq!(Side::Near.display_name(), "Player");
        assert_eq!(Side::Far.display_name(), "Computer");
    }
}
