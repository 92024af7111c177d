use crate::Ball;

/// Move ball one Euler step along its velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use glam::Vec2;

    #[test]
    fn test_move_ball_single_step() {
        let mut ball = Ball::new(
            Vec2::new(400.0, 300.0),
            Vec2::new(-12.0, 5.0),
            10.0,
            Color::GREEN,
        );

        move_ball(&mut ball);
        assert_eq!(ball.pos, Vec2::new(388.0, 305.0));

        move_ball(&mut ball);
        assert_eq!(ball.pos, Vec2::new(376.0, 310.0));
        assert_eq!(ball.vel, Vec2::new(-12.0, 5.0), "Velocity untouched");
    }
}
