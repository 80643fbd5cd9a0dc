//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the pairs game: levels, dealing, tile
//! state, the toggle controls, and the flip/compare/advance state machine.
//! It has **no dependencies** on the terminal, audio, or video, which keeps it:
//!
//! - **Deterministic**: a seeded game deals the same grids every time
//! - **Testable**: every transition is driven by plain [`types::InputEvent`]s
//! - **Portable**: rendering goes through the [`Renderer`] trait
//!
//! # Module Structure
//!
//! - [`level`]: level index, pair count, grid rows, wrap-around
//! - [`layout`]: tile rectangles inside the viewport
//! - [`pool`]: distinct image keys, sampling, dealing
//! - [`tile`]: tile value type and the per-level [`TileSet`]
//! - [`toggle`]: music and video toggle controls
//! - [`game`]: the [`MatchGame`] state machine
//! - [`render`]: drawing interface consumed by the game
//!
//! # Game Rules
//!
//! - Level `n` deals `n + 1` pairs into 4 columns
//! - Two face-up tiles with equal keys stay up; unequal ones turn back down
//!   after one second worth of frames, during which flips are ignored
//! - When every tile is up, space deals the next level (5 wraps to 1)
//!
//! # Example
//!
//! ```
//! use mixel_memory_core::{ImagePool, MatchGame, Outcome};
//! use mixel_memory_types::{InputEvent, MouseButton};
//!
//! let pool = ImagePool::new(["ash", "bean", "coco", "dot", "echo", "fig"]);
//! let mut game = MatchGame::with_seed(pool, 7).unwrap();
//!
//! let first = game.tiles().get(0).unwrap().rect;
//! let outcomes = game
//!     .update(&[InputEvent::Click { button: MouseButton::Left, x: first.x, y: first.y }])
//!     .unwrap();
//! assert!(matches!(outcomes[0], Outcome::Flipped { .. }));
//! ```

pub mod game;
pub mod layout;
pub mod level;
pub mod pool;
pub mod render;
pub mod snapshot;
pub mod tile;
pub mod toggle;

pub use mixel_memory_types as types;

// Re-export commonly used types for convenience
pub use game::{
    GameSettings, MatchGame, Outcome, Phase, INFO_TEXT, NEXT_LEVEL_TEXT, TOO_SMALL_TEXT, WON_TEXT,
};
pub use layout::GridLayout;
pub use level::Level;
pub use pool::{key_from_file_name, DealError, ImagePool};
pub use render::Renderer;
pub use snapshot::GameSnapshot;
pub use tile::{Tile, TileSet};
pub use toggle::{Toggle, Toggles};
