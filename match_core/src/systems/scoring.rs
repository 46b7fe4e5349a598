use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;

/// Check whether the ball left the field horizontally and score the point.
///
/// The ball is allowed past the horizontal bounds for exactly this instant;
/// the serve that follows puts it back at the center with base speed and a
/// fresh random direction.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            score.increment(Side::Right);
            events.right_scored = true;
            ball.reset(config, rng);
        }

        if ball.pos.x >= config.field_width {
            score.increment(Side::Left);
            events.left_scored = true;
            ball.reset(config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup() -> (World, Config, Score, Events, GameRng) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            Events::new(),
            GameRng::new(7),
        )
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(-2.0, 250.0), 6.0, Vec2::new(-1.0, 0.0)),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Ball::new(
                Vec2::new(config.field_width + 2.0, 250.0),
                6.0,
                Vec2::new(1.0, 0.0),
            ),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_exit_at_exact_boundary_scores() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(0.0, 250.0), 3.0, Vec2::new(-1.0, 0.0)),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "x = 0 counts as an exit");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(-2.0, 100.0), 9.5, Vec2::new(-1.0, 0.8)),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, config.field_center(), "Serve starts at center");
            assert_eq!(ball.speed, config.ball_speed_base, "Speed back to base");
            assert!(ball.dir.x == 1.0 || ball.dir.x == -1.0);
            assert!((-1.0..=1.0).contains(&ball.dir.y));
        }
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(250.0, 250.0), 3.0, Vec2::new(1.0, 0.3)),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
        assert!(!events.any_scored());
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(-1.0, 250.0), 3.0, Vec2::new(-1.0, 0.0)),
        );
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        // Push the ball out again for a second point
        events.clear();
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = -1.0;
        }
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 2, "Scores should accumulate");
        assert_eq!(score.left, 0);
    }
}
