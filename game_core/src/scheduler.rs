//! Fixed-tick driver for a [`Match`]
//!
//! The host owns the timer. Every period it calls [`GameLoop::tick`]; once a
//! tick reports [`LoopStatus::Stopped`] the host cancels its timer. Native
//! hosts can use [`GameLoop::run_blocking`] instead.

use std::thread;
use std::time::Instant;

use log::{debug, info};

use crate::render::Surface;
use crate::Match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Running,
    Stopped,
}

/// How `run_blocking` spaces out ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep out the rest of each tick period
    RealTime,
    /// Tick back to back
    Unpaced,
}

pub struct GameLoop<F: FnOnce() = Box<dyn FnOnce()>> {
    game: Match,
    on_end: Option<F>,
    stopped: bool,
    ticks: u64,
}

impl<F: FnOnce()> GameLoop<F> {
    /// Start a match. `on_end` runs once, after the frame that shows the winner.
    pub fn new(game: Match, on_end: F) -> Self {
        Self {
            game,
            on_end: Some(on_end),
            stopped: false,
            ticks: 0,
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Input handlers mutate the match through here between ticks
    pub fn game_mut(&mut self) -> &mut Match {
        &mut self.game
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Ticks performed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One tick: simulate, then redraw everything.
    ///
    /// Does nothing once the loop has stopped.
    pub fn tick(&mut self, surface: &mut dyn Surface) -> LoopStatus {
        if self.stopped {
            return LoopStatus::Stopped;
        }

        self.game.update();
        self.game.draw(surface);
        self.ticks += 1;

        if self.game.state().is_ended() {
            self.stop();
            return LoopStatus::Stopped;
        }
        LoopStatus::Running
    }

    fn stop(&mut self) {
        self.stopped = true;
        info!("game loop stopped after {} ticks", self.ticks);
        if let Some(on_end) = self.on_end.take() {
            on_end();
        }
    }

    /// Drive ticks on the current thread until the match ends or `max_ticks`
    /// have run. `before_tick` gets the match and the tick index ahead of
    /// each tick so callers can feed input.
    pub fn run_blocking<I>(
        &mut self,
        surface: &mut dyn Surface,
        pacing: Pacing,
        max_ticks: Option<u64>,
        mut before_tick: I,
    ) -> LoopStatus
    where
        I: FnMut(&mut Match, u64),
    {
        let period = self.game.config().tick_period();
        debug!("running blocking loop, period {:?}, {:?}", period, pacing);

        while self.is_running() {
            if max_ticks.is_some_and(|max| self.ticks >= max) {
                return LoopStatus::Running;
            }

            let started = Instant::now();
            before_tick(&mut self.game, self.ticks);
            if self.tick(surface) == LoopStatus::Stopped {
                break;
            }

            if pacing == Pacing::RealTime {
                if let Some(rest) = period.checked_sub(started.elapsed()) {
                    thread::sleep(rest);
                }
            }
        }
        LoopStatus::Stopped
    }
}
