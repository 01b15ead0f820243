//! Command-line flags

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use game_core::{Config, RightWallBounce};

#[derive(Debug, Parser)]
#[command(name = "pong", version, about = "Single-player Pong: keep the ball off the bottom edge")]
pub struct Args {
    /// TOML file with game settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use the whole desktop instead of a window
    #[arg(long)]
    pub fullscreen: bool,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Seed for serve angles; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Right wall copies |vy| into vx instead of mirroring the left wall
    #[arg(long)]
    pub legacy_right_wall: bool,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => Config::new(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.legacy_right_wall {
            config.right_wall = RightWallBounce::Legacy;
        }

        config.validate()?;
        Ok(config)
    }
}
