use glam::Vec2;

/// Which half of the field a paddle (or player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle component - represents a player's paddle
///
/// `y` is the top edge of the paddle and stays within
/// [0, field_height - paddle_height]; the X position is fixed per side.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component
///
/// The ball carries a scalar speed and a direction pair rather than a
/// velocity vector: `dir.x` is always -1 or +1, `dir.y` is a continuous
/// value in [-1, 1]. The direction is deliberately not normalized, so the
/// net displacement along a steep diagonal exceeds the nominal speed.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub speed: f32,
    pub dir: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, speed: f32, dir: Vec2) -> Self {
        Self { pos, speed, dir }
    }

    /// Per-tick displacement
    pub fn velocity(&self) -> Vec2 {
        self.dir * self.speed
    }

    /// Serve from the center: base speed, horizontal direction an even coin
    /// flip, vertical direction uniform in [-1, 1]
    pub fn reset(&mut self, config: &crate::Config, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = config.field_center();
        self.speed = config.ball_speed_base;

        let x_dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y_dir: f32 = rng.0.gen_range(-1.0..=1.0);
        self.dir = Vec2::new(x_dir, y_dir);
    }
}
