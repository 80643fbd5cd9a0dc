//! Music and video toggle controls in the top-right corner.

use crate::types::{Rect, ToggleKind, TOGGLE_ICON_WIDTH};

/// One on/off control with its clickable icon rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub kind: ToggleKind,
    pub on: bool,
    pub rect: Rect,
}

impl Toggle {
    pub fn icon(&self) -> &'static str {
        self.kind.icon(self.on)
    }
}

/// Both toggles; each starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    music: Toggle,
    video: Toggle,
}

impl Toggles {
    pub fn new(width: u16) -> Self {
        let mut toggles = Self {
            music: Toggle {
                kind: ToggleKind::Music,
                on: true,
                rect: Rect::default(),
            },
            video: Toggle {
                kind: ToggleKind::Video,
                on: true,
                rect: Rect::default(),
            },
        };
        toggles.relayout(width);
        toggles
    }

    /// Music icon one column from the right edge, video icon left of it.
    pub fn relayout(&mut self, width: u16) {
        let music_x = width.saturating_sub(TOGGLE_ICON_WIDTH + 1);
        let video_x = music_x.saturating_sub(TOGGLE_ICON_WIDTH + 1);
        self.music.rect = Rect::new(music_x, 0, TOGGLE_ICON_WIDTH, 1);
        self.video.rect = Rect::new(video_x, 0, TOGGLE_ICON_WIDTH, 1);
    }

    pub fn get(&self, kind: ToggleKind) -> &Toggle {
        match kind {
            ToggleKind::Music => &self.music,
            ToggleKind::Video => &self.video,
        }
    }

    pub fn is_on(&self, kind: ToggleKind) -> bool {
        self.get(kind).on
    }

    /// Which icon, if any, covers the cell.
    pub fn hit(&self, x: u16, y: u16) -> Option<ToggleKind> {
        [&self.music, &self.video]
            .into_iter()
            .find(|t| t.rect.contains(x, y))
            .map(|t| t.kind)
    }

    /// Flip a toggle and return its new state.
    pub fn flip(&mut self, kind: ToggleKind) -> bool {
        let toggle = match kind {
            ToggleKind::Music => &mut self.music,
            ToggleKind::Video => &mut self.video,
        };
        toggle.on = !toggle.on;
        toggle.on
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toggle> {
        [&self.music, &self.video].into_iter()
    }
}
