//! Shared types module - plain data and constants
//!
//! This module defines the small vocabulary shared by the game logic, the
//! input mapping, the media services, and the terminal renderer. Everything
//! here is plain data with no external dependencies.
//!
//! # Grid Geometry
//!
//! All positions are terminal cells (column, row), origin top-left.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_COLS` | 4 | Tiles per grid row |
//! | `TILE_WIDTH` | 14 | Tile width in columns |
//! | `TILE_HEIGHT` | 6 | Tile height in rows |
//! | `TILE_GAP_X` | 2 | Horizontal spacing between tiles |
//! | `TILE_GAP_Y` | 1 | Vertical spacing between tiles |
//! | `GRID_TOP` | 6 | First tile row (below the header) |
//! | `HUD_ROWS` | 4 | Rows kept free below the grid |
//! | `MIN_TILE_HEIGHT` | 3 | Shortest tile on a short viewport |
//!
//! On a viewport too short for the full grid, the row gap is dropped first,
//! then tiles shrink toward `MIN_TILE_HEIGHT`.
//!
//! # Levels
//!
//! Levels run from 1 to `MAX_LEVEL` and wrap back to 1. Level `n` deals
//! `n + 1` pairs.
//!
//! # Timing
//!
//! The game advances one step per displayed frame. `DEFAULT_FPS` frames make
//! up the one-second reveal of a mismatched pair.
//!
//! # Examples
//!
//! ```
//! use mixel_memory_types::Rect;
//!
//! let tile = Rect::new(10, 6, 14, 6);
//! assert!(tile.contains(10, 6));
//! assert!(tile.contains(23, 11));
//! assert!(!tile.contains(24, 6));
//! ```

/// Window caption and header title.
pub const GAME_TITLE: &str = "MiXel Memory Game";

/// Tiles per grid row.
pub const GRID_COLS: u16 = 4;

/// Highest level before wrapping back to level 1.
pub const MAX_LEVEL: u8 = 5;

/// Tile width in terminal columns.
pub const TILE_WIDTH: u16 = 14;

/// Tile height in terminal rows.
pub const TILE_HEIGHT: u16 = 6;

/// Horizontal spacing between tiles.
pub const TILE_GAP_X: u16 = 2;

/// Vertical spacing between tiles.
pub const TILE_GAP_Y: u16 = 1;

/// Row of the first tile row, below the title and level text.
pub const GRID_TOP: u16 = 6;

/// Rows below the grid for the attempts line and the completion message.
pub const HUD_ROWS: u16 = 4;

/// Tiles never shrink below this many rows.
pub const MIN_TILE_HEIGHT: u16 = 3;

/// Frames per second of the main loop (and frames in a mismatch reveal).
pub const DEFAULT_FPS: u32 = 60;

/// Music volume at startup.
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Viewport size used before the terminal reports its own.
pub const DEFAULT_VIEWPORT_WIDTH: u16 = 80;
pub const DEFAULT_VIEWPORT_HEIGHT: u16 = 24;

/// Width of a toggle icon in columns.
pub const TOGGLE_ICON_WIDTH: u16 = 3;

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// One past the rightmost column.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Check whether a cell lies inside the rectangle (right/bottom exclusive).
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Mouse buttons the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Esc,
    Char(char),
    Other,
}

/// One input event, delivered in order within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Window close or quit request.
    Quit,
    /// Mouse button pressed at a cell.
    Click { button: MouseButton, x: u16, y: u16 },
    /// Key pressed.
    KeyDown(Key),
    /// Terminal resized.
    Resize { width: u16, height: u16 },
}

/// Text faces used by the header and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Large title face.
    Title,
    /// Body text.
    Content,
}

/// Vertical placement of a horizontally centered line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextPos {
    /// Row counted from the top of the viewport.
    Top(u16),
    /// Row counted up from the bottom of the viewport (0 = last row).
    Bottom(u16),
}

/// The two clickable toggle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    Music,
    Video,
}

impl ToggleKind {
    /// Icon glyphs for the on and off states.
    pub fn icon(&self, on: bool) -> &'static str {
        match (self, on) {
            (ToggleKind::Music, true) => "[♪]",
            (ToggleKind::Music, false) => "[×]",
            (ToggleKind::Video, true) => "[▶]",
            (ToggleKind::Video, false) => "[■]",
        }
    }
}

/// One decoded frame of the background video, as rows of text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoFrame {
    pub lines: Vec<String>,
}

impl VideoFrame {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Widest row in characters.
    pub fn width(&self) -> u16 {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16
    }

    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
