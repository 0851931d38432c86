//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a settings document can
//! override it. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ball_radius: f32,
    pub ball_start: (f32, f32),
    /// Horizontal launch speed range `[min, min + spread)`
    pub ball_speed_x: (f32, f32),
    /// Vertical launch speed range `[min, min + spread)`
    pub ball_speed_y: (f32, f32),

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub paddle_hit_slop: f32,

    pub respawn_buffer: f32,
    pub respawn_y_margin: f32,

    pub ai_delay_min_ms: f32,
    pub ai_delay_max_ms: f32,
    pub ai_max_pending: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_radius: BALL_RADIUS,
            ball_start: (BALL_START_X, BALL_START_Y),
            ball_speed_x: (BALL_SPEED_X, BALL_SPEED_X_SPREAD),
            ball_speed_y: (BALL_SPEED_Y, BALL_SPEED_Y_SPREAD),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            paddle_hit_slop: PADDLE_HIT_SLOP,

            respawn_buffer: RESPAWN_BUFFER,
            respawn_y_margin: RESPAWN_Y_MARGIN,

            ai_delay_min_ms: AI_DELAY_MIN_MS,
            ai_delay_max_ms: AI_DELAY_MAX_MS,
            ai_max_pending: AI_MAX_PENDING,
        }
    }
}

impl Tuning {
    /// Replace values that would break simulation invariants with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.ball_radius > 0.0 && self.ball_radius.is_finite()) {
            log::warn!("ball_radius {} must be positive and finite, using default", self.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if !(self.paddle_width > 0.0 && self.paddle_width.is_finite()) {
            log::warn!("paddle_width {} must be positive and finite, using default", self.paddle_width);
            self.paddle_width = defaults.paddle_width;
        }
        if !(self.paddle_height > 0.0 && self.paddle_height.is_finite()) {
            log::warn!("paddle_height {} must be positive and finite, using default", self.paddle_height);
            self.paddle_height = defaults.paddle_height;
        }
        let delays_finite = self.ai_delay_min_ms.is_finite() && self.ai_delay_max_ms.is_finite();
        if !(delays_finite && self.ai_delay_min_ms >= 0.0 && self.ai_delay_max_ms > self.ai_delay_min_ms) {
            log::warn!(
                "AI delay range [{}, {}) is empty or unbounded, using default",
                self.ai_delay_min_ms,
                self.ai_delay_max_ms
            );
            self.ai_delay_min_ms = defaults.ai_delay_min_ms;
            self.ai_delay_max_ms = defaults.ai_delay_max_ms;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.ball_radius, 20.0);
        assert_eq!(t.paddle_height, 160.0);
        assert_eq!(t.respawn_buffer, 150.0);
        assert_eq!((t.ai_delay_min_ms, t.ai_delay_max_ms), (175.0, 265.0));
    }

    #[test]
    fn test_sanitized_fixes_bad_values() {
        let t = Tuning {
            ball_radius: -3.0,
            paddle_height: 0.0,
            ai_delay_min_ms: 300.0,
            ai_delay_max_ms: 100.0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(t.ball_radius, BALL_RADIUS);
        assert_eq!(t.paddle_height, PADDLE_HEIGHT);
        assert_eq!(t.ai_delay_min_ms, AI_DELAY_MIN_MS);
        assert_eq!(t.ai_delay_max_ms, AI_DELAY_MAX_MS);
    }

    #[test]
    fn test_sanitized_rejects_non_finite() {
        let t = Tuning {
            ball_radius: f32::INFINITY,
            paddle_width: f32::NAN,
            ai_delay_max_ms: f32::INFINITY,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(t.ball_radius, BALL_RADIUS);
        assert_eq!(t.paddle_width, PADDLE_WIDTH);
        assert_eq!((t.ai_delay_min_ms, t.ai_delay_max_ms), (AI_DELAY_MIN_MS, AI_DELAY_MAX_MS));
    }

    #[test]
    fn test_overflowing_json_delay_falls_back() {
        // 1e39 does not fit in an f32 and parses to infinity
        let t: Tuning = serde_json::from_str(r#"{ "ai_delay_max_ms": 1e39 }"#).unwrap();
        assert!(t.ai_delay_max_ms.is_infinite());
        let t = t.sanitized();
        assert_eq!(t.ai_delay_max_ms, AI_DELAY_MAX_MS);
    }

    #[test]
    fn test_sanitized_keeps_good_values() {
        let t = Tuning {
            ball_radius: 8.0,
            paddle_step: 4.0,
            ..Default::default()
        };
        assert_eq!(t.clone().sanitized(), t);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let t: Tuning = serde_json::from_str(r#"{ "ball_radius": 12.5 }"#).unwrap();
        assert_eq!(t.ball_radius, 12.5);
        assert_eq!(t.paddle_width, PADDLE_WIDTH);
    }
}
