//! Scripted stand-in for the human player

use std::collections::VecDeque;

use game_core::{Match, Phase};

/// Points the pointer at where the ball was `lag` ticks ago and clicks
/// whenever play is waiting. A larger lag makes it miss more.
pub struct Autopilot {
    lag: usize,
    seen: VecDeque<f32>,
}

impl Autopilot {
    pub fn new(lag: usize) -> Self {
        Self {
            lag,
            seen: VecDeque::with_capacity(lag + 1),
        }
    }

    /// Pointer height to report this tick
    pub fn aim(&mut self, ball_y: f32) -> f32 {
        self.seen.push_back(ball_y);
        if self.seen.len() > self.lag + 1 {
            self.seen.pop_front();
        }
        self.seen.front().copied().unwrap_or(ball_y)
    }

    /// Feed one tick of input into the match
    pub fn drive(&mut self, game: &mut Match) {
        let pointer = self.aim(game.ball().pos.y);
        // Surface sits at the top of the page
        let _ = game.pointer_moved(pointer, 0.0);

        if matches!(game.state().phase(), Phase::NotStarted | Phase::Paused) {
            let _ = game.click();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, Court, GameRng, Side};

    #[test]
    fn test_aim_without_lag_tracks_ball() {
        let mut pilot = Autopilot::new(0);
        assert_eq!(pilot.aim(10.0), 10.0);
        assert_eq!(pilot.aim(20.0), 20.0);
    }

    #[test]
    fn test_aim_with_lag_trails_ball() {
        let mut pilot = Autopilot::new(2);
        assert_eq!(pilot.aim(1.0), 1.0);
        assert_eq!(pilot.aim(2.0), 1.0);
        assert_eq!(pilot.aim(3.0), 1.0);
        assert_eq!(pilot.aim(4.0), 2.0);
        assert_eq!(pilot.aim(5.0), 3.0);
    }

    #[test]
    fn test_drive_starts_play_and_moves_paddle() {
        let mut game = Match::new(Court::default(), Config::new(), GameRng::new(1));
        let mut pilot = Autopilot::new(0);

        pilot.drive(&mut game);

        assert!(game.state().is_live());
        assert_eq!(game.paddle(Side::Near).pos.y, 250.0);
    }
}
