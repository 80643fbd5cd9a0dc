//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the game describes each frame
//! through the [`core::Renderer`] trait, [`Screen`] rasterizes it into a
//! framebuffer of styled cells, and [`TerminalRenderer`] flushes changed
//! cells to the terminal.
//!
//! - [`fb`]: cells, styles, framebuffer drawing helpers
//! - [`screen`]: [`Screen`] and the tile art [`Gallery`]
//! - [`renderer`]: terminal session and diff flushing

pub mod fb;
pub mod renderer;
pub mod screen;

pub use mixel_memory_core as core;
pub use mixel_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_into, TerminalRenderer};
pub use screen::{Gallery, Screen};
