//! Trail Pong - keyboard vs. bot Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, AI, scoring)
//! - `renderer`: Drawing surface abstraction and the per-frame draw order
//! - `platform`: Host input (key map) handling
//! - `audio`: Fire-and-forget sound cues
//! - `hud`: Score display
//! - `settings` / `tuning`: Player preferences and data-driven game balance
//! - `game`: Frame driver tying the above together

pub mod audio;
pub mod game;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal frame length (ms) used when the host gives no timestamp
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Longest frame the driver will feed to the AI timers (tab switch, debugger)
    pub const MAX_FRAME_MS: f32 = 250.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_START_X: f32 = 200.0;
    pub const BALL_START_Y: f32 = 200.0;
    /// Initial horizontal speed is BALL_SPEED_X + U[0, BALL_SPEED_X_SPREAD)
    pub const BALL_SPEED_X: f32 = 6.0;
    pub const BALL_SPEED_X_SPREAD: f32 = 5.0;
    /// Initial vertical speed is BALL_SPEED_Y + U[0, BALL_SPEED_Y_SPREAD)
    pub const BALL_SPEED_Y: f32 = 5.0;
    pub const BALL_SPEED_Y_SPREAD: f32 = 5.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 160.0;
    /// Per-frame step in both axes
    pub const PADDLE_STEP: f32 = 11.0;
    /// Extra horizontal reach when testing ball vs paddle
    pub const PADDLE_HIT_SLOP: f32 = 1.0;

    /// Margin past the playfield edge for scoring, and re-entry distance from the edge
    pub const RESPAWN_BUFFER: f32 = 150.0;
    /// Respawn y is drawn from [margin, height - margin)
    pub const RESPAWN_Y_MARGIN: f32 = 100.0;

    /// Bot reaction delay range (ms)
    pub const AI_DELAY_MIN_MS: f32 = 175.0;
    pub const AI_DELAY_MAX_MS: f32 = 265.0;
    /// Upper bound on bot moves waiting for their delay to elapse
    pub const AI_MAX_PENDING: usize = 32;
}
