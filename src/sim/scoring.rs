//! Out-of-bounds detection, scoring and ball respawn

use rand::Rng;

use super::state::{Ball, Bounds, GameEvent, Paddle, Side};

/// Put the ball back in play on the side it was heading toward, then reverse it.
///
/// A ball moving right re-enters `buffer` units in from the right edge, a ball
/// moving left `buffer` units in from the left edge, at a random height in
/// `[margin, height - margin)`. Both velocity components are then negated.
pub fn respawn_ball<R: Rng>(ball: &mut Ball, bounds: Bounds, buffer: f32, margin: f32, rng: &mut R) {
    let x = if ball.vel.x > 0.0 {
        Some(bounds.width - buffer)
    } else if ball.vel.x < 0.0 {
        Some(buffer)
    } else {
        None
    };

    if let Some(x) = x {
        let y = margin + rng.random::<f32>() * (bounds.height - 2.0 * margin);
        ball.pos = glam::Vec2::new(x, y);
        log::debug!("Ball respawned at ({:.1}, {:.1})", x, y);
    }

    ball.vel = -ball.vel;
}

/// Award a point when the ball is `buffer` units past either side, then respawn it.
///
/// Left exit scores for `right`, right exit scores for `left`. Returns the side
/// that scored, if any.
#[allow(clippy::too_many_arguments)]
pub fn update_score<R: Rng>(
    ball: &mut Ball,
    left: &mut Paddle,
    right: &mut Paddle,
    bounds: Bounds,
    buffer: f32,
    margin: f32,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) -> Option<Side> {
    let mut scorer = None;

    if ball.pos.x <= -ball.radius - buffer {
        right.score += 1;
        log::info!("Right scores: {} - {}", left.score, right.score);
        concede(Side::Left, right.score, events);
        respawn_ball(ball, bounds, buffer, margin, rng);
        scorer = Some(Side::Right);
    }

    if ball.pos.x >= bounds.width + ball.radius + buffer {
        left.score += 1;
        log::info!("Left scores: {} - {}", left.score, right.score);
        concede(Side::Right, left.score, events);
        respawn_ball(ball, bounds, buffer, margin, rng);
        scorer = Some(Side::Left);
    }

    scorer
}

/// Record the ball leaving past `exited` and the point it gives the other side
fn concede(exited: Side, score: u32, events: &mut Vec<GameEvent>) {
    events.push(GameEvent::BallExited { side: exited });
    events.push(GameEvent::Scored {
        side: exited.opponent(),
        score,
    });
}
