//! Tiles and the per-level tile container.

use crate::layout::GridLayout;
use crate::types::Rect;

/// One grid cell showing one instance of an image, face down or face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Shared by the two tiles of a pair.
    pub key: String,
    pub rect: Rect,
    pub shown: bool,
}

impl Tile {
    pub fn new(key: impl Into<String>, rect: Rect) -> Self {
        Self {
            key: key.into(),
            rect,
            shown: false,
        }
    }

    pub fn show(&mut self) {
        self.shown = true;
    }

    pub fn hide(&mut self) {
        self.shown = false;
    }
}

/// The active level's tiles, in deal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Place `keys` on the grid in order.
    pub fn from_keys<I, S>(keys: I, layout: &GridLayout, width: u16) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tiles = keys
            .into_iter()
            .enumerate()
            .map(|(i, key)| Tile::new(key, layout.cell_rect(i, width)))
            .collect();
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Index of the tile under a cell, if any.
    pub fn tile_at(&self, x: u16, y: u16) -> Option<usize> {
        self.tiles.iter().position(|t| t.rect.contains(x, y))
    }

    /// True when every tile is face up (vacuously true for an empty set).
    pub fn all_shown(&self) -> bool {
        self.tiles.iter().all(|t| t.shown)
    }

    pub fn shown_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.shown).count()
    }

    /// Recompute positions for a new viewport width; order and faces are kept.
    pub fn relayout(&mut self, layout: &GridLayout, width: u16) {
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            tile.rect = layout.cell_rect(i, width);
        }
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> TileSet {
        TileSet::from_keys(["a", "b", "a", "b"], &GridLayout::default(), 80)
    }

    #[test]
    fn tiles_start_face_down() {
        let tiles = set();
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles.shown_count(), 0);
        assert!(!tiles.all_shown());
    }

    #[test]
    fn tile_at_finds_tile_under_cell() {
        let tiles = set();
        let r = tiles.get(2).unwrap().rect;
        assert_eq!(tiles.tile_at(r.x + 1, r.y + 1), Some(2));
        assert_eq!(tiles.tile_at(0, 0), None);
    }

    #[test]
    fn relayout_keeps_faces() {
        let mut tiles = set();
        tiles.get_mut(1).unwrap().show();
        tiles.relayout(&GridLayout::default(), 120);
        assert!(tiles.get(1).unwrap().shown);
        assert_eq!(tiles.get(0).unwrap().rect.x, GridLayout::default().left(120));
    }
}
