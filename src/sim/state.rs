//! Game state and core simulation types
//!
//! Everything the step function reads or writes lives here. Positions are in
//! surface pixels with y growing downward.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai::AiController;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Which half of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The side across the net
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of a horizontal velocity travelling toward this side
    pub fn approach_sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Current size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// One Euler step: position += velocity
    #[inline]
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A paddle. `pos` is the top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    /// Per-frame step; only `y` is used for movement
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, vel: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            pos,
            vel,
            width,
            height,
            score: 0,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.half_width(), self.half_height())
    }

    /// Move from held keys. Holding both cancels out.
    pub fn update(&mut self, input: &TickInput) {
        if input.up {
            self.pos.y -= self.vel.y;
        }
        if input.down {
            self.pos.y += self.vel.y;
        }
    }
}

/// Things that happened during a tick, for the host to turn into sound and HUD updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball reflected off the paddle on `side`
    PaddleHit { side: Side },
    /// Ball left the playfield past `side`'s buffered edge
    BallExited { side: Side },
    /// `side` scored and now has `score` points
    Scored { side: Side, score: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    /// Frames simulated so far
    pub frame: u64,
    pub ball: Ball,
    /// Keyboard-controlled paddle (left)
    pub player: Paddle,
    /// Bot-controlled paddle (right)
    pub bot: Paddle,
    pub ai: AiController,
    /// Events since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game laid out for `bounds`
    pub fn new(seed: u64, bounds: Bounds, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let (sx, sx_spread) = tuning.ball_speed_x;
        let (sy, sy_spread) = tuning.ball_speed_y;
        let vel = Vec2::new(
            sx + rng.random::<f32>() * sx_spread,
            sy + rng.random::<f32>() * sy_spread,
        );
        let ball = Ball::new(Vec2::from(tuning.ball_start), vel, tuning.ball_radius);

        let step = Vec2::splat(tuning.paddle_step);
        let y = (bounds.height / 2.0).floor() - tuning.paddle_height / 2.0;
        let player = Paddle::new(
            Side::Left,
            Vec2::new(0.0, y),
            step,
            tuning.paddle_width,
            tuning.paddle_height,
        );
        let bot = Paddle::new(
            Side::Right,
            Vec2::new(bounds.width - tuning.paddle_width, y),
            step,
            tuning.paddle_width,
            tuning.paddle_height,
        );

        let ai = AiController::new(
            Side::Right,
            tuning.ai_delay_min_ms..tuning.ai_delay_max_ms,
            tuning.ai_max_pending,
        );

        log::debug!("New game: seed {} ball velocity {:?}", seed, vel);

        Self {
            seed,
            rng,
            tuning,
            frame: 0,
            ball,
            player,
            bot,
            ai,
            events: Vec::new(),
        }
    }

    /// Paddle defending `side`
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.bot,
        }
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
