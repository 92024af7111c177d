use glam::Vec2;

use crate::Params;

/// The fixed play area, sized from the drawing surface at match start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn min_y(&self) -> f32 {
        0.0
    }

    pub fn max_y(&self) -> f32 {
        self.height
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(Params::COURT_WIDTH, Params::COURT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_center() {
        let court = Court::default();
        assert_eq!(court.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_court_vertical_bounds() {
        let court = Court::new(320.0, 240.0);
        assert_eq!(court.min_y(), 0.0);
        assert_eq!(court.max_y(), 240.0);
    }
}
