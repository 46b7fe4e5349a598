pub mod components;
pub mod config;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one render tick: move the ball, resolve wall
/// and paddle collisions, then settle any point scored. Paddle moves are
/// not part of the tick; key presses mutate the paddles directly through
/// `systems::input::apply_move`.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Resolve collisions (walls, then both paddles)
    resolve_collisions(world, config, events);

    // 3. Check scoring (ball exited the field)
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
