/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const BOX_X_MARGIN: f32 = 100.0;
    pub const BOX_Y_MARGIN: f32 = 100.0;

    // Paddle
    pub const PADDLE_WIDTH_DIVISOR: u32 = 20; // paddle width = window width / 20
    pub const PADDLE_SHIFT_DIVISOR: u32 = 100; // one key press = window width / 100

    // Ball
    pub const BALL_SPEED_DIVISOR: f32 = 10.0; // speed = min(box w, box h) / 10
    pub const LAUNCH_ANGLE_MIN_DEG: f32 = 45.0;
    pub const LAUNCH_ANGLE_MAX_DEG: f32 = 135.0;

    // Physics
    pub const TICK_RATE_HZ: u32 = 60;
    pub const MAX_TICK_RATE_HZ: u32 = 1000;
    pub const MAX_FRAME_DT: f32 = 0.25; // Clamp to prevent a catch-up spiral
}
