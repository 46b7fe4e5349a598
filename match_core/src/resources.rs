use crate::components::Side;

/// Result of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Left,
    Right,
    Draw,
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Outcome when the clock runs out: strictly greater score wins,
    /// equal scores are a draw
    pub fn outcome(&self) -> Winner {
        if self.left > self.right {
            Winner::Left
        } else if self.right > self.left {
            Winner::Right
        } else {
            Winner::Draw
        }
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any_scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Random number generator for serve directions
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(7)
    }
}
