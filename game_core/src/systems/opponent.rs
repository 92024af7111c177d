use crate::{Ball, Paddle};

/// Step the opponent paddle toward the ball's height.
///
/// Moves a fixed `speed` per tick with no easing and no clamp to the court,
/// so the paddle can overshoot or leave the court vertically.
pub fn track_ball(paddle: &mut Paddle, ball: &Ball, speed: f32) {
    let mid = paddle.mid_y();

    if mid < ball.pos.y {
        paddle.pos.y += speed;
    } else if mid > ball.pos.y {
        paddle.pos.y -= speed;
    }
}
