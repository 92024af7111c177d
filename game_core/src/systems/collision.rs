use log::debug;

use crate::{Ball, Config, Court, Events, Paddle};

/// Bounce the ball off the top and bottom of the court.
///
/// The bounce is perfectly elastic and the centre is clamped onto the edge it
/// crossed so the ball never draws outside the court.
pub fn bounce_off_walls(ball: &mut Ball, court: &Court, events: &mut Events) {
    if ball.pos.y >= court.max_y() {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = court.max_y();
        events.wall_bounce = true;
        debug!("ball bounced off bottom wall at x={:.1}", ball.pos.x);
    }
    if ball.pos.y <= court.min_y() {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = court.min_y();
        events.wall_bounce = true;
        debug!("ball bounced off top wall at x={:.1}", ball.pos.x);
    }
}

/// Near paddle band: the centre strictly inside `(0, paddle width)`
pub fn touches_near_paddle(ball: &Ball, near: &Paddle) -> bool {
    ball.pos.x < near.width && ball.pos.x > 0.0 && near.overlaps_vertically(ball)
}

/// Far paddle band: the leading edge strictly inside `(W - paddle width, W)`
pub fn touches_far_paddle(ball: &Ball, far: &Paddle, court: &Court) -> bool {
    let leading_edge = ball.pos.x + ball.radius;
    leading_edge > court.width - far.width
        && leading_edge < court.width
        && far.overlaps_vertically(ball)
}

/// Check ball against both paddles and hand any contact to the paddle
pub fn check_paddle_hits(
    ball: &mut Ball,
    near: &Paddle,
    far: &Paddle,
    court: &Court,
    config: &Config,
    events: &mut Events,
) {
    if touches_near_paddle(ball, near) {
        near.hit_ball(ball, config.paddle_hit_spin);
        events.near_hit = true;
        debug!("near paddle hit, ball velocity now {:?}", ball.vel);
    }

    if touches_far_paddle(ball, far, court) {
        far.hit_ball(ball, config.paddle_hit_spin);
        events.far_hit = true;
        debug!("far paddle hit, ball velocity now {:?}", ball.vel);
    }
}
