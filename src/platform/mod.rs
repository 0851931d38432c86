//! Platform abstraction layer
//!
//! Host-side state that the simulation reads through snapshots.

pub mod input;

pub use input::InputState;
