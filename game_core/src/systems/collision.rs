use crate::{Arena, Ball, Events, RightWallBounce};

/// Resolve the left and right walls for a tentative x.
///
/// A ball that reaches a wall sticks to it and has its horizontal velocity
/// forced to point back into the arena. Returns the x to commit.
pub fn resolve_side_walls(
    ball: &mut Ball,
    tentative_x: f32,
    arena: &Arena,
    policy: RightWallBounce,
    events: &mut Events,
) -> f32 {
    if tentative_x <= arena.left() {
        ball.vel.x = ball.vel.x.abs();
        events.ball_hit_wall = true;
        tracing::trace!(x = tentative_x, "ball hit left wall");
        arena.left()
    } else if tentative_x >= arena.right() {
        ball.vel.x = match policy {
            RightWallBounce::Mirror => -ball.vel.x.abs(),
            RightWallBounce::Legacy => -ball.vel.y.abs(),
        };
        events.ball_hit_wall = true;
        tracing::trace!(x = tentative_x, "ball hit right wall");
        arena.right()
    } else {
        tentative_x
    }
}

/// Resolve the top wall for a tentative y. Returns the y to commit.
pub fn resolve_top_wall(ball: &mut Ball, tentative_y: f32, arena: &Arena, events: &mut Events) -> f32 {
    if tentative_y >= arena.top() {
        ball.vel.y = -ball.vel.y.abs();
        events.ball_hit_wall = true;
        tracing::trace!(y = tentative_y, "ball hit top wall");
        arena.top()
    } else {
        tentative_y
    }
}
