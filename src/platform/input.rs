//! Keyboard state
//!
//! Key events land here whenever the host delivers them; the frame loop reads a
//! snapshot once per frame. The last write before the snapshot wins.

use std::collections::HashMap;

use crate::settings::Controls;
use crate::sim::TickInput;

/// Pressed/released state per key identifier
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down or key-up
    pub fn set(&mut self, key: &str, pressed: bool) {
        match self.keys.get_mut(key) {
            Some(state) => *state = pressed,
            None => {
                self.keys.insert(key.to_string(), pressed);
            }
        }
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Release everything (window lost focus, key-ups will never arrive)
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Resolve the bound keys into this frame's input
    pub fn snapshot(&self, controls: &Controls) -> TickInput {
        TickInput {
            up: controls.up.iter().any(|k| self.is_pressed(k)),
            down: controls.down.iter().any(|k| self.is_pressed(k)),
        }
    }
}
