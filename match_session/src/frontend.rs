//! Outbound signals from the match engine to the rendering/audio layer.
//!
//! Every signal is fire-and-forget: the trait returns nothing, and an
//! implementation that fails (a busy playback device, a torn terminal) must
//! swallow the failure itself rather than let it back into the game loop.

use match_core::Winner;

/// Drawable state for one frame, in field coordinates. The renderer owns
/// the mapping onto its own surface.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
}

/// The external rendering/audio collaborator
pub trait Frontend {
    /// Paint one frame
    fn draw_frame(&mut self, frame: &FrameSnapshot);

    /// Ball touched a paddle
    fn play_touch_sound(&mut self) {}

    /// Match ended
    fn play_win_sound(&mut self) {}

    /// Score text changed
    fn update_score(&mut self, left: u32, right: u32);

    /// Clock text changed; `text` is already formatted as `MM:SS`
    fn update_clock(&mut self, text: &str);

    /// Emitted once per match end
    fn report_match_result(&mut self, winner: Winner);
}

/// Frontend that discards every signal. Used headless and in tests.
#[derive(Debug, Default)]
pub struct NullFrontend;

impl Frontend for NullFrontend {
    fn draw_frame(&mut self, _frame: &FrameSnapshot) {}
    fn update_score(&mut self, _left: u32, _right: u32) {}
    fn update_clock(&mut self, _text: &str) {}
    fn report_match_result(&mut self, _winner: Winner) {}
}
