//! Rendering module
//!
//! The game draws through a [`Surface`]: a 2D target that knows its size and can
//! fill discs and rectangles. On the web this is a canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{Bounds, GameState};

/// A 2D drawing target
pub trait Surface {
    /// Current drawable size; may change between frames
    fn size(&self) -> Bounds;

    /// Wash the whole surface with `color`. A translucent color leaves a motion trail.
    fn fade(&mut self, color: &str);

    fn draw_disc(&mut self, center: Vec2, radius: f32, fill: &str, stroke: Option<&str>);

    fn draw_rect(&mut self, pos: Vec2, width: f32, height: f32, fill: &str);
}

/// Colors used for a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub ball_fill: String,
    pub ball_stroke: String,
    pub paddle_fill: String,
    pub background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ball_fill: "#FF00FF".to_string(),
            ball_stroke: "#33FF00".to_string(),
            paddle_fill: "#33FF00".to_string(),
            background: fade_color(0.2),
        }
    }
}

impl Palette {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            background: fade_color(settings.trail_alpha),
            ..Self::default()
        }
    }
}

/// Black at the given opacity, as a CSS color
pub fn fade_color(alpha: f32) -> String {
    format!("rgba(0,0,0,{})", alpha)
}

/// Draw one frame: fade the previous one, then paddle 1, paddle 2, ball
pub fn draw_frame(surface: &mut dyn Surface, state: &GameState, palette: &Palette, ball_outline: bool) {
    surface.fade(&palette.background);

    for paddle in [&state.player, &state.bot] {
        surface.draw_rect(paddle.pos, paddle.width, paddle.height, &palette.paddle_fill);
    }

    let stroke = ball_outline.then_some(palette.ball_stroke.as_str());
    surface.draw_disc(state.ball.pos, state.ball.radius, &palette.ball_fill, stroke);
}
