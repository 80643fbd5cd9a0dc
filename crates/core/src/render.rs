//! Drawing interface consumed by the game.
//!
//! The game describes a frame as a sequence of calls; implementations decide
//! how to rasterize them (terminal framebuffer, test recorder, ...).

use crate::tile::Tile;
use crate::toggle::Toggle;
use crate::types::{Font, TextPos, VideoFrame};

pub trait Renderer {
    type Error;

    /// Clear the frame and draw the backdrop (the current video frame, if any).
    fn draw_background(&mut self, frame: Option<&VideoFrame>);

    /// Draw one horizontally centered line of text.
    fn draw_text(&mut self, text: &str, font: Font, pos: TextPos);

    /// Draw a tile: its face when shown, its back otherwise.
    fn draw_tile(&mut self, tile: &Tile);

    /// Draw a toggle's on or off icon at its rect.
    fn draw_toggle_icon(&mut self, toggle: &Toggle);

    /// Make the frame visible.
    fn present(&mut self) -> Result<(), Self::Error>;
}
