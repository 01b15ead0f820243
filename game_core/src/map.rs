use glam::Vec2;

use crate::{Config, ConfigError};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// The play box. World space is y-up: `bottom` is the scoring edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    bounds: Aabb,
}

impl Arena {
    pub fn new(x_margin: f32, y_margin: f32, width: f32, height: f32) -> Self {
        Self {
            bounds: Aabb::from_origin_size(Vec2::new(x_margin, y_margin), Vec2::new(width, height)),
        }
    }

    /// Inset the window by the configured margins
    pub fn from_window(
        window_width: f32,
        window_height: f32,
        config: &Config,
    ) -> Result<Self, ConfigError> {
        let width = window_width - 2.0 * config.box_x_margin;
        let height = window_height - 2.0 * config.box_y_margin;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::ArenaTooSmall {
                width: window_width,
                height: window_height,
            });
        }
        Ok(Self::new(config.box_x_margin, config.box_y_margin, width, height))
    }

    pub fn left(&self) -> f32 {
        self.bounds.min.x
    }

    pub fn right(&self) -> f32 {
        self.bounds.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.bounds.min.y
    }

    pub fn top(&self) -> f32 {
        self.bounds.max.y
    }

    pub fn width(&self) -> f32 {
        self.bounds.size().x
    }

    pub fn height(&self) -> f32 {
        self.bounds.size().y
    }

    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }

    /// Corners in line-loop order, starting bottom-left and going up
    pub fn corners(&self) -> [Vec2; 4] {
        let Aabb { min, max } = self.bounds;
        [
            min,
            Vec2::new(min.x, max.y),
            max,
            Vec2::new(max.x, min.y),
        ]
    }
}
