use crate::{Arena, Ball, Events, Paddle, Score};
use glam::Vec2;

/// What happened at the bottom (scoring) edge this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomEdge {
    /// Ball did not reach the edge
    Clear,
    /// Paddle returned the ball; it is clamped to the edge and heads up
    Returned,
    /// Ball got past the paddle; score is reset and the ball must be re-served
    Missed,
}

/// Check the bottom edge against the paddle using the tentative position
pub fn check_bottom_edge(
    ball: &mut Ball,
    paddle: &Paddle,
    tentative: Vec2,
    arena: &Arena,
    score: &mut Score,
    events: &mut Events,
) -> BottomEdge {
    if tentative.y > arena.bottom() {
        return BottomEdge::Clear;
    }

    if paddle.covers(tentative.x) {
        ball.vel.y = ball.vel.y.abs();
        score.increment();
        events.ball_returned = true;
        events.score_changed = true;
        tracing::debug!(x = tentative.x, points = score.points, "ball returned");
        BottomEdge::Returned
    } else {
        let lost = score.points;
        score.reset();
        events.ball_missed = true;
        events.score_changed = true;
        tracing::debug!(x = tentative.x, lost, "ball missed");
        BottomEdge::Missed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Arena, Paddle, Score, Events) {
        (
            Arena::new(100.0, 100.0, 1000.0, 600.0),
            Paddle::new(600.0, 100.0, 50.0, 12.0),
            Score::new(),
            Events::new(),
        )
    }

    #[test]
    fn test_return_inside_span() {
        let (arena, paddle, mut score, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(600.0, 101.0), Vec2::new(0.0, -60.0));

        let outcome = check_bottom_edge(
            &mut ball,
            &paddle,
            Vec2::new(600.0, 100.0),
            &arena,
            &mut score,
            &mut events,
        );

        assert_eq!(outcome, BottomEdge::Returned);
        assert_eq!(score.points, 1);
        assert_eq!(ball.vel.y, 60.0);
        assert!(events.ball_returned && events.score_changed);
        assert!(!events.ball_missed);
    }

    #[test]
    fn test_miss_outside_span() {
        let (arena, paddle, mut score, mut events) = setup();
        score.points = 4;
        let mut ball = Ball::new(Vec2::new(50.0, 101.0), Vec2::new(0.0, -60.0));

        let outcome = check_bottom_edge(
            &mut ball,
            &paddle,
            Vec2::new(50.0, 100.0),
            &arena,
            &mut score,
            &mut events,
        );

        assert_eq!(outcome, BottomEdge::Missed);
        assert_eq!(score.points, 0);
        assert!(events.ball_missed && events.score_changed);
    }

    #[test]
    fn test_miss_on_span_end() {
        let (arena, paddle, mut score, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(625.0, 101.0), Vec2::new(0.0, -60.0));

        let outcome = check_bottom_edge(
            &mut ball,
            &paddle,
            Vec2::new(625.0, 100.0),
            &arena,
            &mut score,
            &mut events,
        );

        assert_eq!(outcome, BottomEdge::Missed);
    }

    #[test]
    fn test_clear_above_edge() {
        let (arena, paddle, mut score, mut events) = setup();
        let mut ball = Ball::new(Vec2::new(600.0, 105.0), Vec2::new(0.0, -60.0));

        let outcome = check_bottom_edge(
            &mut ball,
            &paddle,
            Vec2::new(600.0, 104.0),
            &arena,
            &mut score,
            &mut events,
        );

        assert_eq!(outcome, BottomEdge::Clear);
        assert_eq!(score.points, 0);
        assert_eq!(ball.vel.y, -60.0);
        assert_eq!(events, Events::new());
    }
}
