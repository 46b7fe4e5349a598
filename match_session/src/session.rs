use hecs::World;
use tracing::{debug, info};

use match_core::systems::input::{apply_move, KeyMap, PaddleMove};
use match_core::{
    create_ball, create_paddle, step, Ball, Config, Events, GameRng, Paddle, Score, Side,
};

use crate::clock::MatchClock;
use crate::frontend::{FrameSnapshot, Frontend};
use crate::fsm::{MatchPhase, PhaseAction};
use crate::scheduler::{TaskSlot, TaskToken};

/// Live tokens for the two loops a running match drives
#[derive(Debug, Clone, Copy)]
pub struct SessionTokens {
    pub render: TaskToken,
    pub countdown: TaskToken,
}

/// One match: owns the whole simulation plus the lifecycle around it.
///
/// The host drives it with three calls: key events go to `handle_key` /
/// `apply_move`, the display loop calls `render_tick` at refresh rate, and
/// a 1 Hz timer calls `countdown_tick`. Both tick calls present a token
/// and get the follow-up token back; `None` means the loop is dead.
pub struct MatchSession {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub clock: MatchClock,
    pub phase: MatchPhase,
    pub key_map: KeyMap,
    pub render_slot: TaskSlot,
    pub countdown_slot: TaskSlot,
    pub frontend: Box<dyn Frontend>,
}

impl MatchSession {
    pub fn new(config: Config, seed: u64, frontend: Box<dyn Frontend>) -> Self {
        let mut world = World::new();

        create_paddle(&mut world, Side::Left, config.default_paddle_y(Side::Left));
        create_paddle(&mut world, Side::Right, config.default_paddle_y(Side::Right));
        create_ball(
            &mut world,
            Ball::new(
                config.field_center(),
                config.ball_speed_base,
                glam::Vec2::new(1.0, 1.0),
            ),
        );

        let clock = MatchClock::new(config.match_duration_secs);

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            clock,
            phase: MatchPhase::NotStarted,
            key_map: KeyMap::new(),
            render_slot: TaskSlot::new(),
            countdown_slot: TaskSlot::new(),
            frontend,
        }
    }

    /// Begin the match. Only valid before the first start; anywhere else it
    /// is a no-op and hands back no tokens, leaving the running loops (and
    /// every observable value) untouched.
    pub fn start(&mut self) -> Option<SessionTokens> {
        let next = self.phase.next(PhaseAction::Start)?;
        self.phase = next;

        info!("match started");
        self.serve();
        self.clock.reset();
        self.push_text_signals();
        Some(self.schedule_loops())
    }

    /// Restart from any phase: cancel both loops, wipe scores and clock,
    /// park the paddles on their default (asymmetric) spots, and go
    /// straight back into play with fresh tokens.
    pub fn reset(&mut self) -> SessionTokens {
        self.render_slot.cancel();
        self.countdown_slot.cancel();

        self.score = Score::new();
        self.clock.reset();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = self.config.default_paddle_y(paddle.side);
        }
        self.serve();

        if let Some(next) = self.phase.next(PhaseAction::Reset) {
            self.phase = next;
        }

        info!("match reset");
        self.push_text_signals();
        self.schedule_loops()
    }

    /// Feed a raw platform key code through the four-entry map. Unknown
    /// codes fall through silently.
    pub fn handle_key(&mut self, key_code: u32) {
        if let Some(mv) = self.key_map.resolve(key_code) {
            self.apply_move(mv);
        }
    }

    /// Apply one discrete paddle move immediately, clamped to the field
    pub fn apply_move(&mut self, mv: PaddleMove) {
        apply_move(&mut self.world, &self.config, mv);
    }

    /// One display-rate tick: advance the simulation, forward the frame's
    /// events, paint. Returns the next token, or `None` once this loop has
    /// been cancelled or the match is no longer running.
    pub fn render_tick(&mut self, token: TaskToken) -> Option<TaskToken> {
        if !self.render_slot.accepts(token) || !self.phase.is_running() {
            return None;
        }

        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if self.events.ball_hit_paddle {
            self.frontend.play_touch_sound();
        }
        if self.events.any_scored() {
            debug!(left = self.score.left, right = self.score.right, "point scored");
            self.frontend.update_score(self.score.left, self.score.right);
        }

        let frame = self.frame_snapshot();
        self.frontend.draw_frame(&frame);

        Some(token)
    }

    /// One 1 Hz tick: drop a second off the clock and refresh the display.
    /// At zero the match ends: both loops are cancelled, the result goes
    /// out, and no follow-up token is returned.
    pub fn countdown_tick(&mut self, token: TaskToken) -> Option<TaskToken> {
        if !self.countdown_slot.accepts(token) || !self.phase.is_running() {
            return None;
        }

        let expired = self.clock.tick();
        let text = self.clock.display();
        self.frontend.update_clock(&text);

        if expired {
            self.end_match();
            None
        } else {
            debug!(remaining = self.clock.remaining_secs, "countdown tick");
            Some(token)
        }
    }

    /// Drawable state for the renderer
    pub fn frame_snapshot(&self) -> FrameSnapshot {
        let mut left_paddle_y = self.config.default_paddle_y(Side::Left);
        let mut right_paddle_y = self.config.default_paddle_y(Side::Right);
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left_paddle_y = paddle.y,
                Side::Right => right_paddle_y = paddle.y,
            }
        }

        let (ball_x, ball_y) = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos.x, ball.pos.y))
            .unwrap_or_else(|| {
                let center = self.config.field_center();
                (center.x, center.y)
            });

        FrameSnapshot {
            field_width: self.config.field_width,
            field_height: self.config.field_height,
            paddle_width: self.config.paddle_width,
            paddle_height: self.config.paddle_height,
            left_paddle_y,
            right_paddle_y,
            ball_x,
            ball_y,
            ball_radius: self.config.ball_radius,
        }
    }

    /// Current ball, if spawned
    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Paddle Y for one side
    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
    }

    fn serve(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }
    }

    fn schedule_loops(&mut self) -> SessionTokens {
        SessionTokens {
            render: self.render_slot.schedule(),
            countdown: self.countdown_slot.schedule(),
        }
    }

    fn push_text_signals(&mut self) {
        let left = self.score.left;
        let right = self.score.right;
        self.frontend.update_score(left, right);
        let text = self.clock.display();
        self.frontend.update_clock(&text);
    }

    fn end_match(&mut self) {
        self.render_slot.cancel();
        self.countdown_slot.cancel();
        if let Some(next) = self.phase.next(PhaseAction::TimeUp) {
            self.phase = next;
        }

        let winner = self.score.outcome();
        info!(?winner, left = self.score.left, right = self.score.right, "match over");
        self.frontend.play_win_sound();
        self.frontend.report_match_result(winner);
    }
}
