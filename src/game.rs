//! Frame driver
//!
//! Owns everything a host needs to run the game and performs one frame per
//! [`Game::frame`] call. Any clock can drive it: `requestAnimationFrame` on the
//! web, a fixed loop natively, or a test feeding synthetic ticks.

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::MAX_FRAME_MS;
use crate::hud::ScoreBoard;
use crate::platform::InputState;
use crate::renderer::{Palette, Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{Bounds, GameEvent, GameState, Side, tick};

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub events: Vec<GameEvent>,
    pub cues: Vec<SoundEffect>,
}

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    pub settings: Settings,
    audio: AudioManager,
    palette: Palette,
    scoreboard: ScoreBoard,
}

impl Game {
    pub fn new(seed: u64, bounds: Bounds, settings: Settings) -> Self {
        let settings = settings.sanitized();
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, bounds, settings.tuning.clone()),
            input: InputState::new(),
            audio: AudioManager::new(&settings),
            palette: Palette::from_settings(&settings),
            scoreboard: ScoreBoard::new(),
            settings,
        }
    }

    /// Record a key event from the host
    pub fn key(&mut self, key: &str, pressed: bool) {
        self.input.set(key, pressed);
    }

    /// Simulate and draw one frame. `dt_ms` is wall time since the previous frame.
    pub fn frame(&mut self, surface: &mut dyn Surface, dt_ms: f32) -> FrameReport {
        let bounds = surface.size();
        let input = self.input.snapshot(&self.settings.controls);

        tick(&mut self.state, &input, bounds, dt_ms.clamp(0.0, MAX_FRAME_MS));

        let events = self.state.drain_events();
        let cues = events.iter().filter_map(|e| self.audio.handle(e)).collect();

        for (side, value) in self.scoreboard.refresh(
            self.state.paddle(Side::Left).score,
            self.state.paddle(Side::Right).score,
        ) {
            ScoreBoard::show(side, value);
        }

        draw_frame(surface, &self.state, &self.palette, self.settings.ball_outline);

        FrameReport { events, cues }
    }
}
