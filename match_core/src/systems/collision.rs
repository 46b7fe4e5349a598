use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Resolve ball collisions with the top/bottom walls and both paddles.
///
/// The checks are independent and run unconditionally every tick, in this
/// order: wall, left paddle, right paddle. The paddle check is a 1-D
/// horizontal proximity threshold plus a vertical span test, not a true
/// circle-rectangle intersection; the ball can graze a paddle corner and
/// still register contact, or overlap a paddle's side without registering
/// when the span test fails. That looseness is part of the game's feel and
/// is kept as-is.
pub fn resolve_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Snapshot paddle positions first so the ball can be mutated freely
    let mut left_y = None;
    let mut right_y = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left_y = Some(paddle.y),
            Side::Right => right_y = Some(paddle.y),
        }
    }

    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Wall bounce. The vertical sign flips only while the ball is moving
        // toward the wall, so a ball dwelling inside the one-radius band
        // bounces exactly once per crossing instead of jittering.
        if ball.pos.y <= radius && ball.dir.y < 0.0 {
            ball.dir.y = -ball.dir.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.y >= config.field_height - radius && ball.dir.y > 0.0 {
            ball.dir.y = -ball.dir.y;
            events.ball_hit_wall = true;
        }

        // Left paddle: horizontal proximity to the paddle face plus the
        // paddle's vertical span. Fires every tick the ball sits in the
        // contact band; the forced direction carries it back out.
        if let Some(paddle_y) = left_y {
            let face_x = config.paddle_x(Side::Left) + config.paddle_width;
            if ball.pos.x <= face_x + radius
                && ball.pos.y >= paddle_y
                && ball.pos.y <= paddle_y + config.paddle_height
            {
                ball.dir.x = 1.0;
                ball.speed = (ball.speed + config.ball_speed_increment).min(config.ball_speed_max);
                events.ball_hit_paddle = true;
            }
        }

        // Right paddle, symmetric
        if let Some(paddle_y) = right_y {
            let face_x = config.paddle_x(Side::Right);
            if ball.pos.x >= face_x - radius
                && ball.pos.y >= paddle_y
                && ball.pos.y <= paddle_y + config.paddle_height
            {
                ball.dir.x = -1.0;
                ball.speed = (ball.speed + config.ball_speed_increment).min(config.ball_speed_max);
                events.ball_hit_paddle = true;
            }
        }
    }
}
