//! Screen: the terminal implementation of the game's [`Renderer`].
//!
//! Drawing goes into a framebuffer; `present` flushes it to the terminal, or
//! keeps it for inspection when the screen is headless.

use std::collections::HashMap;

use anyhow::Result;

use crate::core::{Renderer, Tile, Toggle};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::renderer::TerminalRenderer;
use crate::types::{Font, Rect, TextPos, VideoFrame};

const BACKGROUND: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const VIDEO: CellStyle = CellStyle::new(Rgb::new(70, 90, 110), Rgb::new(0, 0, 0));
const TITLE: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
const CONTENT: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0));
const TILE_BACK: CellStyle = CellStyle::new(Rgb::new(190, 190, 190), Rgb::new(245, 245, 245));
const TILE_FACE: CellStyle = CellStyle::new(Rgb::new(250, 220, 150), Rgb::new(40, 34, 30));
const TILE_LABEL: CellStyle = CellStyle::new(Rgb::new(160, 150, 140), Rgb::new(40, 34, 30)).dim();
const ICON_ON: CellStyle = CellStyle::new(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)).bold();
const ICON_OFF: CellStyle = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(255, 255, 255));

/// Text art for each image key.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    art: HashMap<String, Vec<String>>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add art for a key; the first art registered for a key wins.
    pub fn insert(&mut self, key: impl Into<String>, lines: Vec<String>) {
        self.art.entry(key.into()).or_insert(lines);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.art.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.art.len()
    }

    pub fn is_empty(&self) -> bool {
        self.art.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for Gallery {
    fn from_iter<T: IntoIterator<Item = (K, Vec<String>)>>(iter: T) -> Self {
        let mut gallery = Gallery::new();
        for (key, lines) in iter {
            gallery.insert(key, lines);
        }
        gallery
    }
}

pub struct Screen {
    canvas: FrameBuffer,
    gallery: Gallery,
    terminal: Option<TerminalRenderer>,
}

impl Screen {
    /// A screen that never touches the terminal.
    pub fn headless(gallery: Gallery, width: u16, height: u16) -> Self {
        Self {
            canvas: FrameBuffer::new(width, height),
            gallery,
            terminal: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.canvas.width()
    }

    pub fn height(&self) -> u16 {
        self.canvas.height()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.canvas.resize(width, height);
        if let Some(term) = self.terminal.as_mut() {
            term.invalidate();
        }
    }

    /// The last drawn frame (headless screens only; a terminal screen swaps
    /// its canvas on present).
    pub fn frame(&self) -> &FrameBuffer {
        &self.canvas
    }

    /// Start flushing to an entered terminal session.
    pub fn attach_terminal(&mut self, terminal: TerminalRenderer) {
        self.terminal = Some(terminal);
    }

    /// Give back the terminal session for teardown.
    pub fn take_terminal(&mut self) -> Option<TerminalRenderer> {
        self.terminal.take()
    }

    fn text_row(&self, pos: TextPos) -> u16 {
        match pos {
            TextPos::Top(row) => row,
            TextPos::Bottom(row) => self.canvas.height().saturating_sub(1 + row),
        }
    }

    fn draw_face(&mut self, tile: &Tile) {
        let r = tile.rect;
        self.canvas.fill_rect(r, ' ', TILE_FACE);
        self.canvas.draw_box(r, TILE_FACE);
        if r.w < 3 || r.h < 3 {
            return;
        }

        // Inner area minus the label row.
        let inner = Rect::new(r.x + 1, r.y + 1, r.w - 2, r.h - 2);
        let art_rows = inner.h.saturating_sub(1);
        if let Some(lines) = self.gallery.get(&tile.key) {
            let shown = lines.len().min(art_rows as usize) as u16;
            let top = inner.y + (art_rows - shown) / 2;
            for (i, line) in lines.iter().take(shown as usize).enumerate() {
                let clipped: String = line.chars().take(inner.w as usize).collect();
                self.canvas
                    .put_centered(inner.x, inner.w, top + i as u16, &clipped, TILE_FACE);
            }
        }
        let label: String = tile.key.chars().take(inner.w as usize).collect();
        self.canvas
            .put_centered(inner.x, inner.w, inner.bottom() - 1, &label, TILE_LABEL);
    }

    fn draw_back(&mut self, tile: &Tile) {
        self.canvas.fill_rect(tile.rect, '░', TILE_BACK);
    }
}

impl Renderer for Screen {
    type Error = anyhow::Error;

    fn draw_background(&mut self, frame: Option<&VideoFrame>) {
        self.canvas.clear(BACKGROUND.cell(' '));
        let Some(frame) = frame else {
            return;
        };
        let top = self.canvas.height().saturating_sub(frame.height()) / 2;
        let left = self.canvas.width().saturating_sub(frame.width()) / 2;
        for (i, line) in frame.lines.iter().enumerate() {
            self.canvas
                .put_str(left, top.saturating_add(i as u16), line, VIDEO);
        }
    }

    fn draw_text(&mut self, text: &str, font: Font, pos: TextPos) {
        let style = match font {
            Font::Title => TITLE,
            Font::Content => CONTENT,
        };
        let row = self.text_row(pos);
        let width = self.canvas.width();
        self.canvas.put_centered(0, width, row, text, style);
    }

    fn draw_tile(&mut self, tile: &Tile) {
        if tile.shown {
            self.draw_face(tile);
        } else {
            self.draw_back(tile);
        }
    }

    fn draw_toggle_icon(&mut self, toggle: &Toggle) {
        let style = if toggle.on { ICON_ON } else { ICON_OFF };
        self.canvas
            .put_str(toggle.rect.x, toggle.rect.y, toggle.icon(), style);
    }

    fn present(&mut self) -> Result<()> {
        match self.terminal.as_mut() {
            Some(term) => term.draw_swap(&mut self.canvas),
            None => Ok(()),
        }
    }
}
