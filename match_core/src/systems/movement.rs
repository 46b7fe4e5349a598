use crate::Ball;
use hecs::World;

/// Advance the ball by one tick of `speed * direction` on both axes.
///
/// The displacement is fixed per tick rather than scaled by elapsed time, so
/// simulation speed follows the render tick rate.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let delta = ball.velocity();
        ball.pos += delta;
    }
}
