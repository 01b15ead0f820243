pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod map;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod state;
pub mod systems;

pub use clock::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;
pub use state::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one tick of the single-player Pong simulation.
///
/// `time.dt` is the tick length; a non-positive or non-finite `dt` leaves
/// the world untouched.
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    let dt = time.dt;
    if !(dt.is_finite() && dt > 0.0) {
        return;
    }
    time.now += dt;

    let paddle = world
        .query::<&Paddle>()
        .iter()
        .next()
        .map(|(_e, paddle)| *paddle);
    let Some(paddle) = paddle else {
        return;
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        advance_ball(ball, &paddle, dt, arena, config, score, events, rng);
    }
}

#[allow(clippy::too_many_arguments)]
fn advance_ball(
    ball: &mut Ball,
    paddle: &Paddle,
    dt: f32,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Where would the ball go
    let tentative = tentative_position(ball, dt);

    // 2. Left/right walls
    let x = resolve_side_walls(ball, tentative.x, arena, config.right_wall, events);

    // 3. Bottom edge is gated by the paddle, otherwise the top wall
    let y = match check_bottom_edge(ball, paddle, tentative, arena, score, events) {
        BottomEdge::Returned => arena.bottom(),
        BottomEdge::Missed => {
            ball.reset(arena, config, rng);
            return;
        }
        BottomEdge::Clear => resolve_top_wall(ball, tentative.y, arena, events),
    };

    ball.pos = Vec2::new(x, y);
}

/// Helper to create the paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle) -> hecs::Entity {
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
