use log::info;

use crate::velocity::random_velocity;
use crate::{Ball, Config, Court, Events, GameRng, MatchState, Side};

/// Side credited when the ball has left the court, if it has.
///
/// Leaving past the right edge credits the near player and leaving past the
/// left edge credits the far player; the ball must be a full radius beyond
/// the edge.
pub fn exit_scorer(ball: &Ball, court: &Court) -> Option<Side> {
    if ball.pos.x > court.width + ball.radius {
        Some(Side::Near)
    } else if ball.pos.x < -ball.radius {
        Some(Side::Far)
    } else {
        None
    }
}

/// Check if ball left the court (scoring).
///
/// On a score the ball is served again from the centre, play pauses, the
/// scorer's counter goes up by one and the match end is evaluated. Returns
/// the winner when this point decided the match.
pub fn check_scoring(
    ball: &mut Ball,
    court: &Court,
    state: &mut MatchState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Side> {
    let scorer = exit_scorer(ball, court)?;

    ball.serve(court.center(), random_velocity(rng, config.ball_max_velocity));

    match scorer {
        Side::Near => events.near_scored = true,
        Side::Far => events.far_scored = true,
    }

    let winner = state.record_score_and_check(scorer, config.max_score);
    let score = state.score();
    info!(
        "{} scored, {}-{}",
        scorer.display_name(),
        score.near,
        score.far
    );

    if let Some(side) = winner {
        events.match_ended = true;
        info!("match over, {} wins", side.display_name());
    }

    winner
}
