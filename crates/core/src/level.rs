//! Level progression.
//!
//! Level `n` deals `n + 1` pairs into a grid of [`GRID_COLS`] columns.

use crate::types::{GRID_COLS, MAX_LEVEL};

/// A difficulty stage (1-based, wraps from [`MAX_LEVEL`] back to 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    pub const FIRST: Level = Level(1);
    pub const LAST: Level = Level(MAX_LEVEL);

    /// Create a level from its 1-based index.
    ///
    /// # Examples
    ///
    /// ```
    /// use mixel_memory_core::Level;
    ///
    /// assert_eq!(Level::new(3).map(|l| l.index()), Some(3));
    /// assert_eq!(Level::new(0), None);
    /// assert_eq!(Level::new(6), None);
    /// ```
    pub fn new(index: u8) -> Option<Self> {
        (1..=MAX_LEVEL).contains(&index).then_some(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Number of distinct images dealt.
    pub fn pair_count(self) -> usize {
        self.0 as usize + 1
    }

    /// Number of tiles on the grid (always even).
    pub fn tile_count(self) -> usize {
        self.pair_count() * 2
    }

    pub fn cols(self) -> u16 {
        GRID_COLS
    }

    /// Grid rows; the last row may be partial.
    pub fn rows(self) -> u16 {
        self.tile_count().div_ceil(GRID_COLS as usize) as u16
    }

    pub fn is_last(self) -> bool {
        self.0 >= MAX_LEVEL
    }

    /// The following level, wrapping to [`Level::FIRST`] after the last one.
    pub fn next(self) -> Self {
        if self.is_last() {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// Every level in play order.
    pub fn all() -> impl Iterator<Item = Level> {
        (1..=MAX_LEVEL).map(Level)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
