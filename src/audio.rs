//! Sound cues
//!
//! Cues are fire-and-forget: playback failures are logged and dropped, and
//! nothing here ever blocks the frame loop.

use crate::settings::Settings;
use crate::sim::{GameEvent, Side};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball leaves the playfield
    BallLeft,
}

impl SoundEffect {
    /// Asset path relative to the page
    pub fn asset(self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "./asset/sound/mixkit-arcade-mechanical-bling-210.mp3",
            SoundEffect::BallLeft => "./asset/sound/mixkit-ominous-drums-227.wav",
        }
    }
}

/// Cue to play for a simulation event, if any.
///
/// Only the player's side conceding plays the "ball left" cue unless
/// `cue_on_both_exits` is set.
pub fn cue_for(event: &GameEvent, cue_on_both_exits: bool) -> Option<SoundEffect> {
    match event {
        GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
        GameEvent::BallExited { side: Side::Left } => Some(SoundEffect::BallLeft),
        GameEvent::BallExited { side: Side::Right } if cue_on_both_exits => Some(SoundEffect::BallLeft),
        GameEvent::BallExited { .. } | GameEvent::Scored { .. } => None,
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    volume: f32,
    cue_on_both_exits: bool,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        Self {
            volume: settings.effective_volume(),
            cue_on_both_exits: settings.cue_on_both_exits,
        }
    }

    /// Play whatever cue `event` maps to. Returns the cue, if one was triggered.
    pub fn handle(&self, event: &GameEvent) -> Option<SoundEffect> {
        let effect = cue_for(event, self.cue_on_both_exits)?;
        self.play(effect);
        Some(effect)
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.volume <= 0.0 {
            return;
        }
        self.start(effect);
    }

    #[cfg(target_arch = "wasm32")]
    fn start(&self, effect: SoundEffect) {
        // A fresh element per cue lets overlapping hits play over each other
        let audio = match web_sys::HtmlAudioElement::new_with_src(effect.asset()) {
            Ok(audio) => audio,
            Err(e) => {
                log::warn!("Failed to create audio element for {:?}: {:?}", effect, e);
                return;
            }
        };
        audio.set_volume(self.volume as f64);
        // The returned promise rejects if autoplay is blocked; nothing to do about it
        if let Err(e) = audio.play() {
            log::debug!("Audio play failed for {:?}: {:?}", effect, e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn start(&self, effect: SoundEffect) {
        log::debug!("Cue {:?} ({}) at volume {:.2}", effect, effect.asset(), self.volume);
    }
}
