//! Bot paddle controller
//!
//! The bot reacts late on purpose. Each frame the ball travels toward the bot,
//! it queues one paddle step (up or down, decided right now) that lands after a
//! random delay. Queued steps are never re-evaluated or cancelled, so a step
//! scheduled before a bounce or a respawn still lands afterwards.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, Side};

/// A paddle step waiting for its reaction delay to elapse
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingMove {
    /// Time left before the step lands (ms)
    pub remaining_ms: f32,
    /// Signed y offset to apply
    pub dy: f32,
}

/// Delayed ball-tracking controller for one paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiController {
    pub side: Side,
    delay_min_ms: f32,
    delay_max_ms: f32,
    max_pending: usize,
    pending: VecDeque<PendingMove>,
}

impl AiController {
    pub fn new(side: Side, delay_ms: std::ops::Range<f32>, max_pending: usize) -> Self {
        Self {
            side,
            delay_min_ms: delay_ms.start,
            delay_max_ms: delay_ms.end,
            max_pending,
            pending: VecDeque::with_capacity(max_pending),
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Advance every timer by `dt_ms` and apply the steps that came due.
    ///
    /// Returns how many steps were applied.
    pub fn advance(&mut self, paddle: &mut Paddle, dt_ms: f32) -> usize {
        let mut applied = 0;
        self.pending.retain_mut(|m| {
            m.remaining_ms -= dt_ms;
            if m.remaining_ms <= 0.0 {
                paddle.pos.y += m.dy;
                applied += 1;
                false
            } else {
                true
            }
        });
        applied
    }

    /// Queue a step toward the ball if it is heading our way.
    ///
    /// The comparison uses the paddle's top edge. Returns the queued step, if any.
    pub fn observe<R: Rng>(&mut self, ball: &Ball, paddle: &Paddle, rng: &mut R) -> Option<PendingMove> {
        if ball.vel.x * self.side.approach_sign() <= 0.0 {
            return None;
        }

        let dy = if ball.pos.y > paddle.pos.y {
            paddle.vel.y
        } else if ball.pos.y < paddle.pos.y {
            -paddle.vel.y
        } else {
            return None;
        };

        if self.pending.len() >= self.max_pending {
            log::trace!("AI queue full ({}), dropping step", self.max_pending);
            return None;
        }

        let mv = PendingMove {
            remaining_ms: rng.random_range(self.delay_min_ms..self.delay_max_ms),
            dy,
        };
        self.pending.push_back(mv);
        Some(mv)
    }

    /// Run one frame: land due steps, then maybe queue a new one
    pub fn update<R: Rng>(&mut self, ball: &Ball, paddle: &mut Paddle, dt_ms: f32, rng: &mut R) {
        self.advance(paddle, dt_ms);
        self.observe(ball, paddle, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn bot() -> AiController {
        AiController::new(Side::Right, 175.0..265.0, 32)
    }

    fn bot_paddle(y: f32) -> Paddle {
        Paddle::new(Side::Right, Vec2::new(780.0, y), Vec2::splat(11.0), 20.0, 160.0)
    }

    fn ball(y: f32, vx: f32) -> Ball {
        Ball::new(Vec2::new(400.0, y), Vec2::new(vx, 4.0), 20.0)
    }

    #[test]
    fn test_ignores_ball_moving_away() {
        let mut ai = bot();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(ai.observe(&ball(500.0, -6.0), &bot_paddle(100.0), &mut rng).is_none());
        assert!(ai.observe(&ball(500.0, 0.0), &bot_paddle(100.0), &mut rng).is_none());
        assert_eq!(ai.pending_len(), 0);
    }

    #[test]
    fn test_left_side_tracks_leftward_ball() {
        let mut ai = AiController::new(Side::Left, 175.0..265.0, 32);
        let mut rng = Pcg32::seed_from_u64(1);
        let paddle = Paddle::new(Side::Left, Vec2::new(0.0, 100.0), Vec2::splat(11.0), 20.0, 160.0);
        assert!(ai.observe(&ball(500.0, 6.0), &paddle, &mut rng).is_none());
        assert!(ai.observe(&ball(500.0, -6.0), &paddle, &mut rng).is_some());
    }

    #[test]
    fn test_direction_toward_ball() {
        let mut ai = bot();
        let mut rng = Pcg32::seed_from_u64(1);
        let down = ai.observe(&ball(500.0, 6.0), &bot_paddle(100.0), &mut rng).unwrap();
        assert_eq!(down.dy, 11.0);
        let up = ai.observe(&ball(50.0, 6.0), &bot_paddle(100.0), &mut rng).unwrap();
        assert_eq!(up.dy, -11.0);
        assert!(ai.observe(&ball(100.0, 6.0), &bot_paddle(100.0), &mut rng).is_none());
    }

    #[test]
    fn test_delay_in_range() {
        let mut ai = AiController::new(Side::Right, 175.0..265.0, 1000);
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..500 {
            let mv = ai.observe(&ball(500.0, 6.0), &bot_paddle(100.0), &mut rng).unwrap();
            assert!((175.0..265.0).contains(&mv.remaining_ms));
        }
        assert_eq!(ai.pending_len(), 500);
    }

    #[test]
    fn test_step_lands_after_delay() {
        let mut ai = bot();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut paddle = bot_paddle(100.0);
        let mv = ai.observe(&ball(500.0, 6.0), &paddle, &mut rng).unwrap();

        assert_eq!(ai.advance(&mut paddle, mv.remaining_ms - 1.0), 0);
        assert_eq!(paddle.pos.y, 100.0);

        assert_eq!(ai.advance(&mut paddle, 2.0), 1);
        assert_eq!(paddle.pos.y, 111.0);
        assert_eq!(ai.pending_len(), 0);
    }

    #[test]
    fn test_stale_step_still_lands() {
        let mut ai = bot();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut paddle = bot_paddle(100.0);
        ai.observe(&ball(500.0, 6.0), &paddle, &mut rng);

        // Ball turns around; nothing new is queued but the old step still applies
        let away = ball(500.0, -6.0);
        for _ in 0..20 {
            ai.update(&away, &mut paddle, 1000.0 / 60.0, &mut rng);
        }
        assert_eq!(paddle.pos.y, 111.0);
        assert_eq!(ai.pending_len(), 0);
    }

    #[test]
    fn test_queue_bound() {
        let mut ai = AiController::new(Side::Right, 175.0..265.0, 3);
        let mut rng = Pcg32::seed_from_u64(5);
        let paddle = bot_paddle(100.0);
        for _ in 0..10 {
            ai.observe(&ball(500.0, 6.0), &paddle, &mut rng);
        }
        assert_eq!(ai.pending_len(), 3);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let run = || {
            let mut ai = bot();
            let mut rng = Pcg32::seed_from_u64(1234);
            let mut paddle = bot_paddle(100.0);
            let target = ball(500.0, 6.0);
            for _ in 0..120 {
                ai.update(&target, &mut paddle, 1000.0 / 60.0, &mut rng);
            }
            (paddle.pos.y, ai.pending_len())
        };
        assert_eq!(run(), run());
    }
}
