//! Terminal input module.
//!
//! This module is independent of the game logic. It maps `crossterm` events
//! (keys, mouse presses, resizes) into [`types::InputEvent`] and collects the
//! events of one frame in arrival order.

pub mod map;
pub mod pump;

pub use mixel_memory_types as types;

pub use map::{map_event, map_key, should_quit};
pub use pump::EventPump;
