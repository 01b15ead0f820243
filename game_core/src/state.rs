use glam::Vec2;
use hecs::World;

use crate::systems::move_paddles;
use crate::{
    create_ball, create_paddle, step, Arena, Ball, Command, Config, ConfigError, Events, GameRng,
    Paddle, PaddleDirection, RenderSnapshot, Score, Time,
};

/// A running game: one ball, one paddle and the score.
///
/// Owned by whatever drives the loop; nothing here is global.
pub struct GameState {
    world: World,
    arena: Arena,
    config: Config,
    time: Time,
    score: Score,
    events: Events,
    rng: GameRng,
}

impl GameState {
    /// Lay out the arena and paddle for a window and serve the first ball
    pub fn new(window_width: f32, window_height: f32, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let arena = Arena::from_window(window_width, window_height, &config)?;
        let paddle = Paddle::for_window(&arena, window_width, &config);
        if paddle.width > arena.width() {
            return Err(ConfigError::Invalid {
                field: "paddle_width_divisor",
                reason: format!(
                    "paddle width {} does not fit in a box {} wide",
                    paddle.width,
                    arena.width()
                ),
            });
        }
        let rng = GameRng::from_seed_opt(config.seed);
        Ok(Self::from_parts(arena, paddle, config, rng))
    }

    pub fn from_parts(arena: Arena, paddle: Paddle, config: Config, mut rng: GameRng) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, paddle);

        let ball = Ball::serve(&arena, &config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            arena,
            config,
            time: Time::default(),
            score: Score::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Run one tick of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Nudge the paddle; returns false when the move would leave the arena
    pub fn move_paddle(&mut self, direction: PaddleDirection) -> bool {
        move_paddles(&mut self.world, &self.arena, direction)
    }

    /// Apply a player command. Returns false once the player asked to quit.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => {
                self.move_paddle(direction);
                true
            }
            Command::Quit => false,
        }
    }

    /// Overwrite the ball's position and velocity
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .next()
            .map(|(_e, paddle)| *paddle)
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events raised by the last `advance`
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn time(&self) -> Time {
        self.time
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let paddle = self.paddle().map(|paddle| {
            let (lo, hi) = paddle.span();
            [Vec2::new(lo, paddle.y), Vec2::new(hi, paddle.y)]
        });
        let half_margin = self.config.box_y_margin / 2.0;

        RenderSnapshot {
            outline: self.arena.corners(),
            paddle,
            ball: self.ball().map(|ball| ball.pos),
            score_label: self.score.label(),
            label_anchor: Vec2::new(self.arena.center().x, self.arena.top() + half_margin),
            label_size: half_margin,
        }
    }
}
