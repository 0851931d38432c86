//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, state passed in explicitly (input snapshot, bounds)
//! - Seeded RNG only
//! - Bot reaction delays are explicit timers, not host callbacks
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod scoring;
pub mod state;
pub mod tick;

pub use ai::{AiController, PendingMove};
pub use collision::{ball_edge_collision, ball_paddle_collision, clamp_paddle};
pub use scoring::{respawn_ball, update_score};
pub use state::{Ball, Bounds, GameEvent, GameState, Paddle, Side};
pub use tick::{TickInput, tick};
