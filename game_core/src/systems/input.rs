use log::{info, warn};

use crate::{GameError, MatchState, Paddle};

/// Top edge that centres the paddle on a page-relative pointer height
pub fn pointer_to_paddle_y(
    pointer_y: f32,
    surface_top: f32,
    paddle_height: f32,
) -> Result<f32, GameError> {
    let y = (pointer_y - surface_top) - paddle_height / 2.0;
    if !y.is_finite() {
        return Err(GameError::NonFinitePointer {
            y: pointer_y,
            offset: surface_top,
        });
    }
    Ok(y)
}

/// Follow the pointer with the human paddle. Allowed in every phase.
///
/// A non-finite coordinate leaves the paddle where it was.
pub fn apply_pointer_move(
    paddle: &mut Paddle,
    pointer_y: f32,
    surface_top: f32,
) -> Result<(), GameError> {
    match pointer_to_paddle_y(pointer_y, surface_top, paddle.height) {
        Ok(y) => {
            paddle.pos.y = y;
            Ok(())
        }
        Err(err) => {
            warn!("ignoring pointer move: {}", err);
            Err(err)
        }
    }
}

/// Click anywhere: put the ball in play
pub fn apply_click(state: &mut MatchState) -> Result<(), GameError> {
    let was_live = state.is_live();
    match state.resume() {
        Ok(()) => {
            if !was_live {
                info!("rally resumed at {}-{}", state.score().near, state.score().far);
            }
            Ok(())
        }
        Err(err) => {
            warn!("ignoring click: {}", err);
            Err(err)
        }
    }
}
