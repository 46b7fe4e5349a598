use crate::{Config, Paddle, Side};
use hecs::World;

/// The four logical paddle actions a key press can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl PaddleMove {
    pub fn side(self) -> Side {
        match self {
            PaddleMove::LeftUp | PaddleMove::LeftDown => Side::Left,
            PaddleMove::RightUp | PaddleMove::RightDown => Side::Right,
        }
    }

    /// Vertical sense of the move: -1 toward the top, +1 toward the bottom
    fn y_sign(self) -> f32 {
        match self {
            PaddleMove::LeftUp | PaddleMove::RightUp => -1.0,
            PaddleMove::LeftDown | PaddleMove::RightDown => 1.0,
        }
    }
}

/// Fixed four-entry key-code table. Codes are the platform key codes of the
/// original keyboard layout: W/S steer the left paddle, the arrow keys the
/// right one. Any other code resolves to nothing and is ignored.
#[derive(Debug, Clone)]
pub struct KeyMap {
    pub left_up: u32,
    pub left_down: u32,
    pub right_up: u32,
    pub right_down: u32,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            left_up: 87,    // W
            left_down: 83,  // S
            right_up: 38,   // ArrowUp
            right_down: 40, // ArrowDown
        }
    }
}

impl KeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, key_code: u32) -> Option<PaddleMove> {
        if key_code == self.left_up {
            Some(PaddleMove::LeftUp)
        } else if key_code == self.left_down {
            Some(PaddleMove::LeftDown)
        } else if key_code == self.right_up {
            Some(PaddleMove::RightUp)
        } else if key_code == self.right_down {
            Some(PaddleMove::RightDown)
        } else {
            None
        }
    }
}

/// Apply one discrete paddle move: shift by the fixed step, but only when
/// the whole step fits inside the field. A move that would land out of
/// bounds is dropped, never an error.
pub fn apply_move(world: &mut World, config: &Config, mv: PaddleMove) {
    let side = mv.side();
    let delta = mv.y_sign() * config.paddle_step;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != side {
            continue;
        }
        let target = paddle.y + delta;
        if target >= 0.0 && target <= config.max_paddle_y() {
            paddle.y = target;
        }
    }
}
