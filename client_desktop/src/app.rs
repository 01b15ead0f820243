use game_core::{Config, FixedClock, GameState};
use ggez::event::{self, EventHandler, KeyCode, KeyMods};
use ggez::{graphics, timer, Context, GameResult};
use tracing::info;

use crate::input::command_for_key;
use crate::renderer::Renderer;

/// Owns the game and drives it from ggez callbacks
pub struct PongApp {
    game: GameState,
    clock: FixedClock,
    renderer: Renderer,
}

impl PongApp {
    pub fn new(ctx: &mut Context, config: Config) -> anyhow::Result<Self> {
        let (width, height) = graphics::drawable_size(ctx);
        let clock = FixedClock::new(config.tick_rate_hz);
        let game = GameState::new(width, height, config)?;

        let arena = game.arena();
        info!(
            width,
            height,
            box_left = arena.left(),
            box_bottom = arena.bottom(),
            box_width = arena.width(),
            box_height = arena.height(),
            "window ready"
        );

        let renderer = Renderer::new(height, &game.snapshot());
        Ok(Self {
            game,
            clock,
            renderer,
        })
    }
}

impl EventHandler for PongApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let elapsed = timer::delta(ctx).as_secs_f32();

        for _ in 0..self.clock.accumulate(elapsed) {
            self.game.advance(self.clock.step());
            if self.game.events().score_changed {
                self.renderer.set_score_label(self.game.score().label());
            }
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, graphics::BLACK);
        self.renderer.draw(ctx, &self.game.snapshot())?;
        graphics::present(ctx)?;

        timer::yield_now();
        Ok(())
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        keycode: KeyCode,
        _keymods: KeyMods,
        _repeat: bool,
    ) {
        if let Some(command) = command_for_key(keycode) {
            if !self.game.apply(command) {
                info!(points = self.game.score().points, "quit requested");
                event::quit(ctx);
            }
        }
    }
}
