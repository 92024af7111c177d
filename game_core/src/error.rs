use thiserror::Error;

/// Input the core refuses to apply
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GameError {
    #[error("pointer coordinate is not finite (y = {y}, offset = {offset})")]
    NonFinitePointer { y: f32, offset: f32 },

    #[error("match has already ended")]
    MatchEnded,
}
