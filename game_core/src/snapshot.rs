use glam::Vec2;

/// Everything a renderer needs for one frame, in world (y-up) space
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub outline: [Vec2; 4], // Closed loop
    pub paddle: Option<[Vec2; 2]>,
    pub ball: Option<Vec2>,
    pub score_label: String,
    pub label_anchor: Vec2, // Center of the label
    pub label_size: f32,
}
