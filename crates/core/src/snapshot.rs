use crate::game::Phase;

/// Plain copy of the observable game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub level: u8,
    pub phase: Phase,
    pub tile_count: usize,
    pub shown_count: usize,
    /// Keys of the face-up tiles awaiting comparison, in flip order.
    pub flipped: Vec<String>,
    pub blocked: bool,
    pub level_complete: bool,
    pub attempts: u32,
    pub music_on: bool,
    pub video_on: bool,
}

impl GameSnapshot {
    /// True while tile clicks are accepted.
    pub fn accepts_flips(&self) -> bool {
        !self.blocked && !self.level_complete
    }

    pub fn pairs_found(&self) -> usize {
        self.shown_count.saturating_sub(self.flipped.len()) / 2
    }
}
