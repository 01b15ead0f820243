use crate::{Arena, Ball, Paddle, PaddleDirection};
use glam::Vec2;
use hecs::World;

/// Where the ball would land this tick, before any wall is considered.
/// Displacement is rounded to whole units.
pub fn tentative_position(ball: &Ball, dt: f32) -> Vec2 {
    ball.pos + (ball.vel * dt).round()
}

/// Shift one paddle by a key press; refuses any move that would leave the arena.
pub fn shift_paddle(paddle: &mut Paddle, arena: &Arena, direction: PaddleDirection) -> bool {
    let target = paddle.center_x + direction.sign() * paddle.shift;
    let half_width = paddle.half_width();

    if arena.left() <= target - half_width && target + half_width <= arena.right() {
        paddle.center_x = target;
        true
    } else {
        false
    }
}

/// Apply a key press to every paddle in the world
pub fn move_paddles(world: &mut World, arena: &Arena, direction: PaddleDirection) -> bool {
    let mut moved = false;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        moved |= shift_paddle(paddle, arena, direction);
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(100.0, 100.0, 1000.0, 600.0)
    }

    #[test]
    fn test_tentative_position_rounds_displacement() {
        let ball = Ball::new(Vec2::new(600.0, 105.0), Vec2::new(20.0, -60.0));
        let next = tentative_position(&ball, 1.0 / 60.0);
        // 20/60 rounds to 0, -60/60 to -1
        assert_eq!(next, Vec2::new(600.0, 104.0));
    }

    #[test]
    fn test_tentative_position_large_dt() {
        let ball = Ball::new(Vec2::new(600.0, 400.0), Vec2::new(35.0, -42.0));
        let next = tentative_position(&ball, 0.5);
        assert_eq!(next, Vec2::new(618.0, 379.0));
    }

    #[test]
    fn test_shift_paddle_moves_by_shift() {
        let mut paddle = Paddle::new(600.0, 100.0, 50.0, 12.0);
        assert!(shift_paddle(&mut paddle, &arena(), PaddleDirection::Left));
        assert_eq!(paddle.center_x, 588.0);
        assert!(shift_paddle(&mut paddle, &arena(), PaddleDirection::Right));
        assert!(shift_paddle(&mut paddle, &arena(), PaddleDirection::Right));
        assert_eq!(paddle.center_x, 612.0);
    }

    #[test]
    fn test_shift_paddle_allows_touching_wall() {
        // Left end lands exactly on the wall
        let mut paddle = Paddle::new(137.0, 100.0, 50.0, 12.0);
        assert!(shift_paddle(&mut paddle, &arena(), PaddleDirection::Left));
        assert_eq!(paddle.center_x, 125.0);
        assert_eq!(paddle.span().0, arena().left());
    }

    #[test]
    fn test_shift_paddle_ignores_move_past_wall() {
        let mut paddle = Paddle::new(130.0, 100.0, 50.0, 12.0);
        assert!(!shift_paddle(&mut paddle, &arena(), PaddleDirection::Left));
        assert_eq!(paddle.center_x, 130.0, "No partial move");

        let mut paddle = Paddle::new(1070.0, 100.0, 50.0, 12.0);
        assert!(!shift_paddle(&mut paddle, &arena(), PaddleDirection::Right));
        assert_eq!(paddle.center_x, 1070.0);
    }

    #[test]
    fn test_move_paddles_in_world() {
        let mut world = World::new();
        let entity = world.spawn((Paddle::new(600.0, 100.0, 50.0, 12.0),));

        assert!(move_paddles(&mut world, &arena(), PaddleDirection::Right));

        let paddle = world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.center_x, 612.0);
    }
}
