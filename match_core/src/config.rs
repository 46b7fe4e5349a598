use crate::components::Side;
use glam::Vec2;

/// Game tuning parameters for the match
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 25.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_STEP: f32 = 50.0; // per key press, not per second

    // Ball
    pub const BALL_RADIUS: f32 = 12.5;
    pub const BALL_SPEED_BASE: f32 = 3.0;
    pub const BALL_SPEED_MAX: f32 = 10.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.5; // added on each paddle contact

    // Clock
    pub const MATCH_DURATION_SECS: u32 = 60;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub ball_radius: f32,
    pub ball_speed_base: f32,
    pub ball_speed_max: f32,
    pub ball_speed_increment: f32,
    pub match_duration_secs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            match_duration_secs: Params::MATCH_DURATION_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.field_width - self.paddle_width,
        }
    }

    /// Largest legal paddle Y (paddle Y is its top edge)
    pub fn max_paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Default paddle Y: left paddle starts at the top, right at the bottom
    pub fn default_paddle_y(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.max_paddle_y(),
        }
    }

    /// Center of the field, where the ball is served from
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }
}
