use glam::Vec2;
use rand::Rng;

use crate::{Arena, Config, GameRng};

/// Which way a key press pushes the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleDirection {
    Left,
    Right,
}

impl PaddleDirection {
    pub fn sign(self) -> f32 {
        match self {
            PaddleDirection::Left => -1.0,
            PaddleDirection::Right => 1.0,
        }
    }
}

/// Paddle component - guards the bottom edge of the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub center_x: f32,
    pub y: f32,     // Fixed at the arena bottom
    pub width: f32,
    pub shift: f32, // Distance covered by one key press
}

impl Paddle {
    pub fn new(center_x: f32, y: f32, width: f32, shift: f32) -> Self {
        Self {
            center_x,
            y,
            width,
            shift,
        }
    }

    /// Centered on the arena, sized from the window width
    pub fn for_window(arena: &Arena, window_width: f32, config: &Config) -> Self {
        Self::new(
            arena.center().x,
            arena.bottom(),
            config.paddle_width(window_width),
            config.paddle_shift(window_width),
        )
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    /// (left end, right end)
    pub fn span(&self) -> (f32, f32) {
        (
            self.center_x - self.half_width(),
            self.center_x + self.half_width(),
        )
    }

    /// Strictly inside the span; touching an end is a miss
    pub fn covers(&self, x: f32) -> bool {
        let (lo, hi) = self.span();
        lo < x && x < hi
    }
}

/// Ball component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Speed every serve starts with
    pub fn serve_speed(arena: &Arena, config: &Config) -> f32 {
        arena.width().min(arena.height()) / config.ball_speed_divisor
    }

    /// Serve from the arena center towards the paddle
    pub fn reset(&mut self, arena: &Arena, config: &Config, rng: &mut GameRng) {
        self.pos = arena.center();

        let speed = Self::serve_speed(arena, config);
        let (lo, hi) = config.launch_angle_range();
        let angle: f32 = if lo < hi {
            rng.0.gen_range(lo..=hi)
        } else {
            lo
        };

        // Angle is measured in the upper half-plane and mirrored downwards
        self.vel = Vec2::new(speed * angle.cos(), -speed * angle.sin());
    }

    pub fn serve(arena: &Arena, config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO);
        ball.reset(arena, config, rng);
        ball
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(100.0, 100.0, 1000.0, 600.0)
    }

    #[test]
    fn test_paddle_span_and_covers() {
        let paddle = Paddle::new(600.0, 100.0, 50.0, 12.0);
        assert_eq!(paddle.span(), (575.0, 625.0));
        assert!(paddle.covers(600.0));
        assert!(paddle.covers(575.5));
        assert!(!paddle.covers(575.0), "Span ends are exclusive");
        assert!(!paddle.covers(625.0), "Span ends are exclusive");
        assert!(!paddle.covers(50.0));
    }

    #[test]
    fn test_paddle_for_window() {
        let config = Config::new();
        let paddle = Paddle::for_window(&arena(), 1200.0, &config);
        assert_eq!(paddle.center_x, 600.0);
        assert_eq!(paddle.y, 100.0);
        assert_eq!(paddle.width, 60.0);
        assert_eq!(paddle.shift, 12.0);
    }

    #[test]
    fn test_ball_reset_distribution() {
        let config = Config::new();
        let arena = arena();
        let mut rng = GameRng::new(12345);
        let expected_speed = 60.0; // min(1000, 600) / 10

        for _ in 0..500 {
            let ball = Ball::serve(&arena, &config, &mut rng);
            assert_eq!(ball.pos, arena.center());
            assert!(ball.vel.y < 0.0, "Serve must head towards the paddle");
            assert!(
                (ball.vel.length() - expected_speed).abs() < 1e-3,
                "Serve speed should be {}, got {}",
                expected_speed,
                ball.vel.length()
            );
            // 45..135 degrees keeps |vx| <= |vy|
            assert!(ball.vel.x.abs() <= ball.vel.y.abs() + 1e-3);
        }
    }

    #[test]
    fn test_ball_reset_covers_both_horizontal_directions() {
        let config = Config::new();
        let arena = arena();
        let mut rng = GameRng::new(7);
        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..200 {
            let ball = Ball::serve(&arena, &config, &mut rng);
            saw_left |= ball.vel.x < 0.0;
            saw_right |= ball.vel.x > 0.0;
        }
        assert!(saw_left && saw_right);
    }

    #[test]
    fn test_ball_reset_fixed_angle() {
        let mut config = Config::new();
        config.launch_angle_min_deg = 90.0;
        config.launch_angle_max_deg = 90.0;
        let mut rng = GameRng::new(1);
        let ball = Ball::serve(&arena(), &config, &mut rng);
        assert!(ball.vel.x.abs() < 1e-3);
        assert!((ball.vel.y + 60.0).abs() < 1e-3);
    }
}
