//! Grid placement of tiles inside the viewport.

use crate::types::{
    Rect, GRID_COLS, GRID_TOP, HUD_ROWS, MIN_TILE_HEIGHT, TILE_GAP_X, TILE_GAP_Y, TILE_HEIGHT,
    TILE_WIDTH,
};

/// Fixed tile size and spacing; tiles are laid out left to right, top to
/// bottom, and the grid is centered horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub tile_w: u16,
    pub tile_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    pub top: u16,
    pub cols: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            tile_w: TILE_WIDTH,
            tile_h: TILE_HEIGHT,
            gap_x: TILE_GAP_X,
            gap_y: TILE_GAP_Y,
            top: GRID_TOP,
            cols: GRID_COLS,
        }
    }
}

impl GridLayout {
    /// Width of a full row of tiles including the gaps between them.
    pub fn grid_width(&self) -> u16 {
        let cols = self.cols.max(1);
        self.tile_w * cols + self.gap_x * (cols - 1)
    }

    /// Left edge of the grid for a viewport `width` columns wide.
    pub fn left(&self, width: u16) -> u16 {
        width.saturating_sub(self.grid_width()) / 2
    }

    /// Rectangle of the `index`-th tile.
    pub fn cell_rect(&self, index: usize, width: u16) -> Rect {
        let cols = self.cols.max(1) as usize;
        let col = (index % cols) as u16;
        let row = (index / cols) as u16;
        Rect::new(
            self.left(width) + col * (self.tile_w + self.gap_x),
            self.top + row * (self.tile_h + self.gap_y),
            self.tile_w,
            self.tile_h,
        )
    }

    fn rows(&self, count: usize) -> u16 {
        count.div_ceil(self.cols.max(1) as usize) as u16
    }

    /// First row below a grid holding `count` tiles.
    pub fn bottom(&self, count: usize) -> u16 {
        let rows = self.rows(count);
        if rows == 0 {
            return self.top;
        }
        self.top + rows * self.tile_h + (rows - 1) * self.gap_y
    }

    /// Whether `count` tiles end above the HUD of a viewport `height` rows tall.
    pub fn fits(&self, count: usize, height: u16) -> bool {
        self.bottom(count) <= height.saturating_sub(HUD_ROWS)
    }

    /// This layout, squeezed vertically for a short viewport: the row gap goes
    /// first, then tiles shrink, never below [`MIN_TILE_HEIGHT`]. The result
    /// can still overflow when even minimum tiles do not fit; check [`fits`].
    ///
    /// [`fits`]: GridLayout::fits
    pub fn fitted(&self, count: usize, height: u16) -> Self {
        if self.fits(count, height) {
            return *self;
        }
        let mut fit = Self { gap_y: 0, ..*self };
        if fit.fits(count, height) {
            return fit;
        }
        let rows = self.rows(count).max(1);
        let room = height.saturating_sub(HUD_ROWS).saturating_sub(self.top);
        let floor = MIN_TILE_HEIGHT.min(self.tile_h);
        fit.tile_h = (room / rows).clamp(floor, self.tile_h);
        fit
    }
}
