//! Single-player Pong on the desktop
//!
//! Arrow keys (or A/D) move the paddle, Escape (or Q) quits.

mod app;
mod camera;
mod cli;
mod input;
mod renderer;

use anyhow::anyhow;
use clap::Parser;
use ggez::{conf, event, ContextBuilder};
use tracing::info;

use crate::app::PongApp;
use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    info!(?config, fullscreen = args.fullscreen, "starting pong");

    let mut window_mode = conf::WindowMode::default().dimensions(args.width, args.height);
    if args.fullscreen {
        window_mode = window_mode.fullscreen_type(conf::FullscreenType::Desktop);
    }

    let (ctx, events_loop) = &mut ContextBuilder::new("pong", "pongo")
        .window_setup(conf::WindowSetup::default().title("Pong"))
        .window_mode(window_mode)
        .build()
        .map_err(|e| anyhow!("failed to create window: {e}"))?;

    let app = &mut PongApp::new(ctx, config)?;
    event::run(ctx, events_loop, app).map_err(|e| anyhow!("event loop failed: {e}"))
}
