//! Camera for Pong game
//!
//! The simulation is y-up with the origin at the bottom-left of the window;
//! ggez draws y-down from the top-left.

use glam::{Affine2, Vec2};

pub struct Camera {
    world_to_screen: Affine2,
}

impl Camera {
    /// Flip the y axis of a window `screen_height` pixels tall
    pub fn flip_y(screen_height: f32) -> Self {
        let world_to_screen = Affine2::from_scale_angle_translation(
            Vec2::new(1.0, -1.0),
            0.0,
            Vec2::new(0.0, screen_height),
        );
        Self { world_to_screen }
    }

    pub fn to_screen(&self, point: Vec2) -> Vec2 {
        self.world_to_screen.transform_point2(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_y() {
        let camera = Camera::flip_y(800.0);
        assert_eq!(camera.to_screen(Vec2::new(100.0, 100.0)), Vec2::new(100.0, 700.0));
        assert_eq!(camera.to_screen(Vec2::new(640.0, 800.0)), Vec2::new(640.0, 0.0));
        assert_eq!(camera.to_screen(Vec2::ZERO), Vec2::new(0.0, 800.0));
    }
}
