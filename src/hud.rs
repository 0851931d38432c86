//! Score display
//!
//! The page shows one number per player. Values are only pushed when they change.

use crate::sim::Side;

/// Last values pushed to the display
#[derive(Debug, Clone, Default)]
pub struct ScoreBoard {
    shown: [Option<u32>; 2],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare against what is on screen; return the entries that need pushing
    pub fn refresh(&mut self, left: u32, right: u32) -> Vec<(Side, u32)> {
        let mut changed = Vec::new();
        for (slot, side, value) in [(0, Side::Left, left), (1, Side::Right, right)] {
            if self.shown[slot] != Some(value) {
                self.shown[slot] = Some(value);
                changed.push((side, value));
            }
        }
        changed
    }

    /// DOM element id for a side's score
    pub fn element_id(side: Side) -> &'static str {
        match side {
            Side::Left => "player1score",
            Side::Right => "player2score",
        }
    }

    /// Write a score into the page. Missing elements are ignored.
    #[cfg(target_arch = "wasm32")]
    pub fn show(side: Side, value: u32) {
        let el = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::element_id(side)));
        match el {
            Some(el) => el.set_text_content(Some(&value.to_string())),
            None => log::debug!("No #{} element to show score", Self::element_id(side)),
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn show(side: Side, value: u32) {
        log::info!("{}: {}", Self::element_id(side), value);
    }
}
