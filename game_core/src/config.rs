use std::path::Path;

use serde::Deserialize;

use crate::{ConfigError, Params};

/// How the ball's horizontal velocity is forced when it reaches the right wall
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RightWallBounce {
    /// Mirror of the left wall: `vx = -|vx|`
    #[default]
    Mirror,
    /// Old behaviour: `vx = -|vy|`
    Legacy,
}

/// Game configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub box_x_margin: f32,
    pub box_y_margin: f32,
    pub paddle_width_divisor: u32,
    pub paddle_shift_divisor: u32,
    pub ball_speed_divisor: f32,
    pub launch_angle_min_deg: f32,
    pub launch_angle_max_deg: f32,
    pub tick_rate_hz: u32,
    pub right_wall: RightWallBounce,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            box_x_margin: Params::BOX_X_MARGIN,
            box_y_margin: Params::BOX_Y_MARGIN,
            paddle_width_divisor: Params::PADDLE_WIDTH_DIVISOR,
            paddle_shift_divisor: Params::PADDLE_SHIFT_DIVISOR,
            ball_speed_divisor: Params::BALL_SPEED_DIVISOR,
            launch_angle_min_deg: Params::LAUNCH_ANGLE_MIN_DEG,
            launch_angle_max_deg: Params::LAUNCH_ANGLE_MAX_DEG,
            tick_rate_hz: Params::TICK_RATE_HZ,
            right_wall: RightWallBounce::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys fall back to [`Params`]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(self.box_x_margin >= 0.0) {
            return Err(invalid("box_x_margin", "must be a non-negative number"));
        }
        if !(self.box_y_margin >= 0.0) {
            return Err(invalid("box_y_margin", "must be a non-negative number"));
        }
        if self.paddle_width_divisor == 0 {
            return Err(invalid("paddle_width_divisor", "must be at least 1"));
        }
        if self.paddle_shift_divisor == 0 {
            return Err(invalid("paddle_shift_divisor", "must be at least 1"));
        }
        if !(self.ball_speed_divisor > 0.0) {
            return Err(invalid("ball_speed_divisor", "must be positive"));
        }
        if !(0.0..=180.0).contains(&self.launch_angle_min_deg)
            || !(0.0..=180.0).contains(&self.launch_angle_max_deg)
        {
            return Err(invalid(
                "launch_angle_min_deg",
                "launch angles must lie within [0, 180] degrees",
            ));
        }
        if self.launch_angle_min_deg > self.launch_angle_max_deg {
            return Err(invalid(
                "launch_angle_min_deg",
                format!(
                    "{} is greater than launch_angle_max_deg {}",
                    self.launch_angle_min_deg, self.launch_angle_max_deg
                ),
            ));
        }
        if self.tick_rate_hz == 0 || self.tick_rate_hz > Params::MAX_TICK_RATE_HZ {
            return Err(invalid(
                "tick_rate_hz",
                format!("must lie within [1, {}]", Params::MAX_TICK_RATE_HZ),
            ));
        }
        Ok(())
    }

    /// Paddle width derived from the window width
    pub fn paddle_width(&self, window_width: f32) -> f32 {
        (window_width / self.paddle_width_divisor as f32).floor()
    }

    /// Horizontal distance moved by one key press
    pub fn paddle_shift(&self, window_width: f32) -> f32 {
        (window_width / self.paddle_shift_divisor as f32).floor()
    }

    /// Launch angle range in radians
    pub fn launch_angle_range(&self) -> (f32, f32) {
        (
            self.launch_angle_min_deg.to_radians(),
            self.launch_angle_max_deg.to_radians(),
        )
    }

    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate_hz as f32
    }
}
