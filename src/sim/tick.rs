//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame. The host supplies the input
//! snapshot, the current surface size and the wall-clock time since the last
//! frame (only the bot's reaction timers use it).

use super::collision::{ball_edge_collision, ball_paddle_collision, clamp_paddle};
use super::scoring::update_score;
use super::state::{Bounds, GameEvent, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// "Up" key held
    pub up: bool,
    /// "Down" key held
    pub down: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, bounds: Bounds, dt_ms: f32) {
    state.frame += 1;
    let tuning = &state.tuning;

    // Move
    state.player.update(input);
    state.ball.update();
    state.ai.update(&state.ball, &mut state.bot, dt_ms, &mut state.rng);

    // The bot hugs the right edge even if the surface was resized
    state.bot.pos.x = bounds.width - state.bot.width;
    clamp_paddle(&mut state.player, bounds);
    clamp_paddle(&mut state.bot, bounds);

    // Collide
    for paddle in [&state.player, &state.bot] {
        if ball_paddle_collision(&mut state.ball, paddle, bounds, tuning.paddle_hit_slop) {
            state.events.push(GameEvent::PaddleHit { side: paddle.side });
        }
    }
    ball_edge_collision(&mut state.ball, bounds);

    // Score
    update_score(
        &mut state.ball,
        &mut state.player,
        &mut state.bot,
        bounds,
        tuning.respawn_buffer,
        tuning.respawn_y_margin,
        &mut state.rng,
        &mut state.events,
    );
}
