//! Collision detection and response
//!
//! Everything is axis-aligned: hits only flip the sign of one velocity component.

use super::state::{Ball, Bounds, Paddle};

/// Reflect the ball off the top and bottom edges.
///
/// The left and right edges are open so the ball can leave and score.
/// Returns true if the vertical velocity was flipped.
pub fn ball_edge_collision(ball: &mut Ball, bounds: Bounds) -> bool {
    if ball.bottom() >= bounds.height || ball.top() <= 0.0 {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Keep a paddle inside the playfield vertically.
///
/// On a surface shorter than the paddle the bottom edge wins.
pub fn clamp_paddle(paddle: &mut Paddle, bounds: Bounds) {
    if paddle.pos.y <= 0.0 {
        paddle.pos.y = 0.0;
    }
    let max_y = bounds.height - paddle.height;
    if paddle.pos.y >= max_y {
        paddle.pos.y = max_y;
    }
}

/// Ball vs paddle overlap test, reflecting horizontal velocity on a hit.
///
/// The test does not care which paddle it is given: both paddles are checked
/// against the same horizontal band `[paddle.width, width - paddle.width]`.
/// Returns true on a hit.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle, bounds: Bounds, slop: f32) -> bool {
    let center = paddle.center();
    let dx = (ball.pos.x - center.x).abs();
    let dy = (ball.pos.y - center.y).abs();

    let in_reach = dx <= ball.radius + paddle.half_width() + slop;
    let in_span = dy <= paddle.half_height() - ball.radius;
    let in_band = paddle.width <= ball.pos.x && ball.pos.x <= bounds.width - paddle.width;

    if in_reach && in_span && in_band {
        ball.vel.x = -ball.vel.x;
        return true;
    }
    false
}
