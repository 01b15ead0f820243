//! Immediate-mode drawing of the box, paddle, ball and score

use game_core::RenderSnapshot;
use ggez::graphics::{self, DrawMode, DrawParam, Font, Mesh, Text};
use ggez::nalgebra as na;
use ggez::{Context, GameResult};
use glam::Vec2;

use crate::camera::Camera;

const LINE_WIDTH: f32 = 2.0;
const BALL_RADIUS: f32 = 3.0;
const MIN_LABEL_SIZE: f32 = 12.0;

type Point2 = na::Point2<f32>;

pub struct Renderer {
    camera: Camera,
    font: Font,
    label: String,
    label_size: f32,
    score_text: Text,
}

impl Renderer {
    pub fn new(screen_height: f32, snapshot: &RenderSnapshot) -> Self {
        let font = Font::default();
        let label_size = snapshot.label_size.max(MIN_LABEL_SIZE);
        let label = snapshot.score_label.clone();
        let score_text = Text::new((label.clone(), font, label_size));
        Self {
            camera: Camera::flip_y(screen_height),
            font,
            label,
            label_size,
            score_text,
        }
    }

    /// Rebuild the cached score text when the label changed
    pub fn set_score_label(&mut self, label: String) {
        if label != self.label {
            self.score_text = Text::new((label.clone(), self.font, self.label_size));
            self.label = label;
        }
    }

    fn point(&self, world: Vec2) -> Point2 {
        let screen = self.camera.to_screen(world);
        Point2::new(screen.x, screen.y)
    }

    pub fn draw(&self, ctx: &mut Context, snapshot: &RenderSnapshot) -> GameResult {
        let outline: Vec<Point2> = snapshot.outline.iter().map(|&p| self.point(p)).collect();
        let arena = Mesh::new_polygon(ctx, DrawMode::stroke(LINE_WIDTH), &outline, graphics::WHITE)?;
        graphics::draw(ctx, &arena, DrawParam::default())?;

        if let Some([left, right]) = snapshot.paddle {
            let ends = [self.point(left), self.point(right)];
            let paddle = Mesh::new_line(ctx, &ends, LINE_WIDTH, graphics::WHITE)?;
            graphics::draw(ctx, &paddle, DrawParam::default())?;
        }

        // A single pixel is hard to see, so the ball point is a small dot
        if let Some(pos) = snapshot.ball {
            let ball = Mesh::new_circle(
                ctx,
                DrawMode::fill(),
                self.point(pos),
                BALL_RADIUS,
                0.1,
                graphics::WHITE,
            )?;
            graphics::draw(ctx, &ball, DrawParam::default())?;
        }

        // Center the label on its anchor
        let (width, height) = self.score_text.dimensions(ctx);
        let anchor = self.point(snapshot.label_anchor);
        let dest = Point2::new(anchor.x - width as f32 / 2.0, anchor.y - height as f32 / 2.0);
        graphics::draw(ctx, &self.score_text, DrawParam::default().dest(dest))?;

        Ok(())
    }
}
