use glam::Vec2;
use log::info;

use crate::render::{draw_frame, Frame, Surface};
use crate::systems::*;
use crate::velocity::random_velocity;
use crate::{Ball, Config, Court, Events, GameError, GameRng, MatchState, Paddle, Side};

/// One match: the court, both paddles, the ball and the score.
///
/// Everything the simulation touches lives here and is handed to the
/// systems explicitly. Throw the value away and build a new one for a rematch.
pub struct Match {
    court: Court,
    config: Config,
    near: Paddle,
    far: Paddle,
    ball: Ball,
    state: MatchState,
    rng: GameRng,
    events: Events,
}

impl Match {
    pub fn new(court: Court, config: Config, mut rng: GameRng) -> Self {
        let paddle = |side: Side| {
            Paddle::new(
                side,
                Vec2::new(config.paddle_x(side, &court), config.paddle_start_y(&court)),
                config.paddle_width,
                config.paddle_height,
                config.paddle_color(side),
            )
        };
        let near = paddle(Side::Near);
        let far = paddle(Side::Far);

        let ball = Ball::new(
            court.center(),
            random_velocity(&mut rng, config.ball_max_velocity),
            config.ball_radius,
            config.ball_color,
        );

        info!(
            "new match on {}x{} court, first to {}",
            court.width, court.height, config.max_score
        );

        Self {
            court,
            config,
            near,
            far,
            ball,
            state: MatchState::new(),
            rng,
            events: Events::new(),
        }
    }

    /// Default tuning on a court the size of `surface`
    pub fn for_surface(surface: &dyn Surface, seed: u64) -> Self {
        let court = Court::new(surface.width(), surface.height());
        Self::new(court, Config::default(), GameRng::new(seed))
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Near => &self.near,
            Side::Far => &self.far,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Near => &mut self.near,
            Side::Far => &mut self.far,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// What happened during the last `update`
    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Advance the simulation by one tick.
    ///
    /// The ball only moves while play is live; the opponent tracks the ball
    /// every tick. Returns the winner if this tick decided the match.
    pub fn update(&mut self) -> Option<Side> {
        self.events.clear();

        let winner = if self.state.is_live() {
            self.step_ball()
        } else {
            None
        };

        track_ball(&mut self.far, &self.ball, self.config.opponent_speed);

        winner
    }

    fn step_ball(&mut self) -> Option<Side> {
        move_ball(&mut self.ball);
        bounce_off_walls(&mut self.ball, &self.court, &mut self.events);
        check_paddle_hits(
            &mut self.ball,
            &self.near,
            &self.far,
            &self.court,
            &self.config,
            &mut self.events,
        );
        check_scoring(
            &mut self.ball,
            &self.court,
            &mut self.state,
            &self.config,
            &mut self.rng,
            &mut self.events,
        )
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        draw_frame(
            surface,
            &Frame {
                court: &self.court,
                ball: &self.ball,
                near: &self.near,
                far: &self.far,
                state: &self.state,
            },
        );
    }

    /// Click/tap on the surface
    pub fn click(&mut self) -> Result<(), GameError> {
        apply_click(&mut self.state)
    }

    /// Pointer moved to page-relative `pointer_y`; `surface_top` is the
    /// surface's offset from the top of the page
    pub fn pointer_moved(&mut self, pointer_y: f32, surface_top: f32) -> Result<(), GameError> {
        apply_pointer_move(&mut self.near, pointer_y, surface_top)
    }
}
