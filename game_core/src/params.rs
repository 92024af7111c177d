/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (canvas size the page provides)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_HIT_SPIN: f32 = 7.0; // vy change on every paddle hit
    pub const OPPONENT_SPEED: f32 = 15.0; // px per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_MAX_VELOCITY: f32 = 10.0; // serve speed per axis is [1x, 2x) of this

    // Score
    pub const MAX_SCORE: u8 = 7; // First to 7 wins

    // Scheduler
    pub const TICK_MS: u64 = 33; // ~30 Hz
}
