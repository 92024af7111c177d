use crate::{GameError, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub near: u8, // Human player score
    pub far: u8,  // Opponent score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Near => self.near += 1,
            Side::Far => self.far += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Near => self.near,
            Side::Far => self.far,
        }
    }

    /// Side whose score sits exactly on the threshold, near side first
    pub fn winner_at(&self, max_score: u8) -> Option<Side> {
        if self.near == max_score {
            Some(Side::Near)
        } else if self.far == max_score {
            Some(Side::Far)
        } else {
            None
        }
    }
}

/// Where a match is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Live,
    /// Between rallies, waiting for a click
    Paused,
    Ended,
}

/// Live flag, score pair and winner for one match
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    live: bool,
    started: bool,
    score: Score,
    winner: Option<Side>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::Ended
        } else if self.live {
            Phase::Live
        } else if self.started {
            Phase::Paused
        } else {
            Phase::NotStarted
        }
    }

    /// Start or continue play. Refused once a winner exists.
    pub fn resume(&mut self) -> Result<(), GameError> {
        if self.is_ended() {
            return Err(GameError::MatchEnded);
        }
        self.live = true;
        self.started = true;
        Ok(())
    }

    /// Credit `side` with a point, pause play and settle the winner.
    ///
    /// Returns the winner when this point ends the match. The winner is set
    /// at most once; the threshold test is equality, so a score that has
    /// somehow run past it never ends the match.
    pub fn record_score_and_check(&mut self, side: Side, max_score: u8) -> Option<Side> {
        self.live = false;
        self.score.increment(side);

        if self.winner.is_some() {
            return None;
        }

        self.winner = self.score.winner_at(max_score);
        self.winner
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub near_hit: bool,
    pub far_hit: bool,
    pub wall_bounce: bool,
    pub near_scored: bool,
    pub far_scored: bool,
    pub match_ended: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self) -> bool {
        self.near_scored || self.far_scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Near);
        score.increment(Side::Near);
        score.increment(Side::Far);
        assert_eq!(score.near, 2);
        assert_eq!(score.far, 1);
        assert_eq!(score.get(Side::Far), 1);
    }

    #[test]
    fn test_score_winner_requires_exact_threshold() {
        let score = Score { near: 6, far: 0 };
        assert_eq!(score.winner_at(7), None, "No winner below threshold");

        let score = Score { near: 7, far: 3 };
        assert_eq!(score.winner_at(7), Some(Side::Near));

        let score = Score { near: 2, far: 7 };
        assert_eq!(score.winner_at(7), Some(Side::Far));

        let score = Score { near: 8, far: 0 };
        assert_eq!(score.winner_at(7), None, "Equality, not >=");
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = MatchState::new();
        assert_eq!(state.phase(), Phase::NotStarted);
        assert!(!state.is_live());

        state.resume().unwrap();
        assert_eq!(state.phase(), Phase::Live);

        state.record_score_and_check(Side::Far, 7);
        assert_eq!(state.phase(), Phase::Paused);

        state.resume().unwrap();
        assert_eq!(state.phase(), Phase::Live);
    }

    #[test]
    fn test_record_score_pauses_and_increments_one_side() {
        let mut state = MatchState::new();
        state.resume().unwrap();

        let winner = state.record_score_and_check(Side::Near, 7);

        assert_eq!(winner, None);
        assert!(!state.is_live());
        assert_eq!(state.score(), Score { near: 1, far: 0 });
    }

    #[test]
    fn test_winner_set_exactly_once() {
        let mut state = MatchState::new();
        for _ in 0..6 {
            assert_eq!(state.record_score_and_check(Side::Far, 7), None);
        }
        assert_eq!(state.record_score_and_check(Side::Far, 7), Some(Side::Far));
        assert_eq!(state.phase(), Phase::Ended);

        // A stray point afterwards does not announce the winner again
        assert_eq!(state.record_score_and_check(Side::Near, 1), None);
        assert_eq!(state.winner(), Some(Side::Far));
    }

    #[test]
    fn test_resume_refused_after_end() {
        let mut state = MatchState::new();
        state.record_score_and_check(Side::Near, 1);
        assert!(matches!(state.resume(), Err(GameError::MatchEnded)));
        assert!(!state.is_live());
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.near_hit = true;
        events.far_scored = true;
        events.match_ended = true;
        assert!(events.scored());

        events.clear();

        assert_eq!(events, Events::default());
        assert!(!events.scored());
    }
}
