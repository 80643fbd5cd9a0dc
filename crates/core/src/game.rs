//! Match game state machine.
//!
//! Phases within a level:
//!
//! ```text
//! Idle --click--> OneFlipped --click--> (compare)
//!                                         |-- equal ----> Idle, or LevelComplete when all tiles are up
//!                                         `-- unequal --> Blocked --reveal frames--> Idle
//! LevelComplete --space--> Idle (next level, fresh grid)
//! ```
//!
//! The mismatch reveal is counted in frames: every [`MatchGame::update`] call
//! is one frame, and a mismatched pair stays up for exactly `reveal_frames`
//! frames after the frame in which it was flipped.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::layout::GridLayout;
use crate::level::Level;
use crate::pool::{DealError, ImagePool};
use crate::render::Renderer;
use crate::snapshot::GameSnapshot;
use crate::tile::TileSet;
use crate::toggle::Toggles;
use crate::types::{
    Font, InputEvent, Key, MouseButton, TextPos, ToggleKind, VideoFrame, DEFAULT_FPS,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, GAME_TITLE,
};

pub const INFO_TEXT: &str = "Find 2 of each";
pub const NEXT_LEVEL_TEXT: &str = "Level complete. Press space for next level.";
pub const WON_TEXT: &str = "Congrats. You won. Press space to play again.";
pub const TOO_SMALL_TEXT: &str = "Terminal too small. Enlarge it to keep playing.";

/// Where the current level stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing face up awaiting comparison.
    Idle,
    /// One tile face up awaiting its partner.
    OneFlipped,
    /// A mismatched pair is showing; tile clicks are ignored.
    Blocked,
    /// Every tile is face up; space deals the next level.
    LevelComplete,
}

/// Observable effects of a frame, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Flipped { key: String },
    Matched { key: String },
    Mismatched { first: String, second: String },
    /// The reveal delay ran out and the mismatched pair turned back down.
    PairHidden,
    LevelComplete { level: Level },
    LevelAdvanced { level: Level },
    MusicToggled(bool),
    VideoToggled(bool),
}

/// Construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Frames a mismatched pair stays face up (one second at this frame rate).
    pub reveal_frames: u32,
    /// Viewport width used to center the grid.
    pub width: u16,
    /// Viewport height the grid is squeezed into.
    pub height: u16,
    /// Deal seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub layout: GridLayout,
    pub start_level: Level,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            reveal_frames: DEFAULT_FPS,
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            seed: None,
            layout: GridLayout::default(),
            start_level: Level::FIRST,
        }
    }
}

/// Level, tiles, toggles, and the flip/compare/advance logic.
#[derive(Debug, Clone)]
pub struct MatchGame {
    pool: ImagePool,
    rng: StdRng,
    /// Full-size layout; `layout` is this squeezed to the viewport height.
    base_layout: GridLayout,
    layout: GridLayout,
    width: u16,
    height: u16,
    level: Level,
    tiles: TileSet,
    /// Tile indices face up and unmatched, in flip order.
    flipped: ArrayVec<usize, 2>,
    blocked: bool,
    block_frames: u32,
    reveal_frames: u32,
    level_complete: bool,
    attempts: u32,
    toggles: Toggles,
}

impl MatchGame {
    /// Create a game and deal its first level.
    pub fn new(pool: ImagePool, settings: GameSettings) -> Result<Self, DealError> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut game = Self {
            pool,
            rng,
            base_layout: settings.layout,
            layout: settings.layout,
            width: settings.width,
            height: settings.height,
            level: settings.start_level,
            tiles: TileSet::default(),
            flipped: ArrayVec::new(),
            blocked: false,
            block_frames: 0,
            reveal_frames: settings.reveal_frames.max(1),
            level_complete: false,
            attempts: 0,
            toggles: Toggles::new(settings.width),
        };
        game.generate_level()?;
        Ok(game)
    }

    /// Seeded game with default layout, for deterministic play.
    pub fn with_seed(pool: ImagePool, seed: u64) -> Result<Self, DealError> {
        Self::new(
            pool,
            GameSettings {
                seed: Some(seed),
                ..GameSettings::default()
            },
        )
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }

    pub fn blocked(&self) -> bool {
        self.blocked
    }

    pub fn level_complete(&self) -> bool {
        self.level_complete
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn reveal_frames(&self) -> u32 {
        self.reveal_frames
    }

    pub fn music_on(&self) -> bool {
        self.toggles.is_on(ToggleKind::Music)
    }

    pub fn video_on(&self) -> bool {
        self.toggles.is_on(ToggleKind::Video)
    }

    /// Keys of the face-up tiles awaiting comparison.
    pub fn flipped_keys(&self) -> impl Iterator<Item = &str> {
        self.flipped
            .iter()
            .filter_map(|&i| self.tiles.get(i))
            .map(|t| t.key.as_str())
    }

    pub fn phase(&self) -> Phase {
        if self.level_complete {
            Phase::LevelComplete
        } else if self.blocked {
            Phase::Blocked
        } else if self.flipped.is_empty() {
            Phase::Idle
        } else {
            Phase::OneFlipped
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            level: self.level.index(),
            phase: self.phase(),
            tile_count: self.tiles.len(),
            shown_count: self.tiles.shown_count(),
            flipped: self.flipped_keys().map(str::to_owned).collect(),
            blocked: self.blocked,
            level_complete: self.level_complete,
            attempts: self.attempts,
            music_on: self.music_on(),
            video_on: self.video_on(),
        }
    }

    /// Run one frame over the events polled for it.
    ///
    /// Toggle clicks and space are always handled. Tile clicks are handled
    /// unless the frame started blocked, in which case the frame counts
    /// toward the mismatch reveal instead.
    pub fn update(&mut self, events: &[InputEvent]) -> Result<Vec<Outcome>, DealError> {
        let mut out = Vec::new();
        let started_blocked = self.blocked;

        for event in events {
            match *event {
                InputEvent::Click {
                    button: MouseButton::Left,
                    x,
                    y,
                } => {
                    if let Some(kind) = self.toggles.hit(x, y) {
                        out.push(self.toggle(kind));
                    } else if !self.blocked && self.grid_fits() {
                        self.flip_at(x, y, &mut out);
                    }
                }
                InputEvent::KeyDown(Key::Space) if self.level_complete => {
                    self.advance_level()?;
                    out.push(Outcome::LevelAdvanced { level: self.level });
                }
                InputEvent::Resize { width, height } => self.relayout(width, height),
                _ => {}
            }
        }

        if started_blocked {
            if let Some(outcome) = self.tick() {
                out.push(outcome);
            }
        }

        Ok(out)
    }

    /// Count one blocked frame; hides the mismatched pair once the reveal
    /// delay has elapsed. Does nothing when not blocked.
    pub fn tick(&mut self) -> Option<Outcome> {
        if !self.blocked {
            return None;
        }
        self.block_frames += 1;
        if self.block_frames < self.reveal_frames {
            return None;
        }

        self.block_frames = 0;
        self.blocked = false;
        for &i in &self.flipped {
            if let Some(tile) = self.tiles.get_mut(i) {
                tile.hide();
            }
        }
        self.flipped.clear();
        debug!(level = self.level.index(), "mismatched pair hidden");
        Some(Outcome::PairHidden)
    }

    /// Flip the tile under a cell, if it is face down.
    fn flip_at(&mut self, x: u16, y: u16, out: &mut Vec<Outcome>) {
        let Some(index) = self.tiles.tile_at(x, y) else {
            return;
        };
        let Some(tile) = self.tiles.get_mut(index) else {
            return;
        };
        if tile.shown {
            return;
        }

        tile.show();
        let key = tile.key.clone();
        self.flipped.push(index);
        out.push(Outcome::Flipped { key });

        if self.flipped.is_full() {
            self.compare(out);
        }
    }

    fn compare(&mut self, out: &mut Vec<Outcome>) {
        let (first, second) = (self.flipped[0], self.flipped[1]);
        let (Some(a), Some(b)) = (self.tiles.get(first), self.tiles.get(second)) else {
            self.flipped.clear();
            return;
        };
        let (first_key, second_key) = (a.key.clone(), b.key.clone());
        self.attempts += 1;

        if first_key == second_key {
            self.flipped.clear();
            debug!(key = %first_key, attempts = self.attempts, "pair matched");
            out.push(Outcome::Matched { key: first_key });
            if self.tiles.all_shown() {
                self.level_complete = true;
                info!(
                    level = self.level.index(),
                    attempts = self.attempts,
                    "level complete"
                );
                out.push(Outcome::LevelComplete { level: self.level });
            }
        } else {
            self.blocked = true;
            self.block_frames = 0;
            debug!(first = %first_key, second = %second_key, "pair mismatched");
            out.push(Outcome::Mismatched {
                first: first_key,
                second: second_key,
            });
        }
    }

    fn toggle(&mut self, kind: ToggleKind) -> Outcome {
        let on = self.toggles.flip(kind);
        info!(?kind, on, "toggle clicked");
        match kind {
            ToggleKind::Music => Outcome::MusicToggled(on),
            ToggleKind::Video => Outcome::VideoToggled(on),
        }
    }

    /// Move to the next level (wrapping after the last) and deal it. On
    /// failure the current level, grid, and completion state are kept.
    pub fn advance_level(&mut self) -> Result<(), DealError> {
        self.deal(self.level.next())?;
        info!(level = self.level.index(), "advanced level");
        Ok(())
    }

    /// Deal a fresh grid for the current level, discarding the old one.
    pub fn generate_level(&mut self) -> Result<(), DealError> {
        self.deal(self.level)
    }

    fn deal(&mut self, level: Level) -> Result<(), DealError> {
        let deck = self.pool.deal(level, &mut self.rng)?;
        let layout = self.base_layout.fitted(deck.len(), self.height);
        self.tiles = TileSet::from_keys(deck, &layout, self.width);
        self.layout = layout;
        self.level = level;
        self.flipped.clear();
        self.blocked = false;
        self.block_frames = 0;
        self.level_complete = false;
        self.attempts = 0;
        debug!(
            level = self.level.index(),
            tiles = self.tiles.len(),
            "dealt level"
        );
        Ok(())
    }

    /// Re-fit tiles and move the toggle icons for a new viewport size.
    pub fn relayout(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.layout = self.base_layout.fitted(self.tiles.len(), height);
        self.tiles.relayout(&self.layout, width);
        self.toggles.relayout(width);
    }

    /// Whether the current grid fits the viewport; tile clicks are ignored
    /// and the grid is not drawn while it does not.
    pub fn grid_fits(&self) -> bool {
        self.layout.fits(self.tiles.len(), self.height)
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Describe the current frame to a renderer and present it.
    pub fn draw<R: Renderer>(
        &self,
        renderer: &mut R,
        backdrop: Option<&VideoFrame>,
    ) -> Result<(), R::Error> {
        let snap = self.snapshot();
        renderer.draw_background(backdrop);

        renderer.draw_text(GAME_TITLE, Font::Title, TextPos::Top(1));
        renderer.draw_text(
            &format!("Level {}", snap.level),
            Font::Content,
            TextPos::Top(3),
        );
        renderer.draw_text(INFO_TEXT, Font::Content, TextPos::Top(4));

        for toggle in self.toggles.iter() {
            renderer.draw_toggle_icon(toggle);
        }

        if !self.grid_fits() {
            renderer.draw_text(TOO_SMALL_TEXT, Font::Content, TextPos::Top(6));
            return renderer.present();
        }

        for tile in &self.tiles {
            renderer.draw_tile(tile);
        }

        let hud = format!(
            "Attempts {}   Pairs {}/{}",
            snap.attempts,
            snap.pairs_found(),
            snap.tile_count / 2
        );
        renderer.draw_text(&hud, Font::Content, TextPos::Bottom(3));

        if snap.level_complete {
            let message = if self.level.is_last() {
                WON_TEXT
            } else {
                NEXT_LEVEL_TEXT
            };
            renderer.draw_text(message, Font::Content, TextPos::Bottom(1));
        }

        renderer.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;

    fn pool() -> ImagePool {
        ImagePool::new(["ash", "bean", "coco", "dot", "echo", "fig", "ginger"])
    }

    fn game() -> MatchGame {
        MatchGame::with_seed(pool(), 3).unwrap()
    }

    fn click(rect: Rect) -> InputEvent {
        InputEvent::Click {
            button: MouseButton::Left,
            x: rect.x,
            y: rect.y,
        }
    }

    /// Indices of one matching pair and one tile with a different key.
    fn pair_and_other(game: &MatchGame) -> (usize, usize, usize) {
        let tiles: Vec<_> = game.tiles().iter().collect();
        let first = 0;
        let partner = (1..tiles.len())
            .find(|&i| tiles[i].key == tiles[first].key)
            .unwrap();
        let other = (1..tiles.len())
            .find(|&i| tiles[i].key != tiles[first].key)
            .unwrap();
        (first, partner, other)
    }

    fn rect(game: &MatchGame, i: usize) -> Rect {
        game.tiles().get(i).unwrap().rect
    }

    #[test]
    fn starts_idle_on_level_one() {
        let g = game();
        assert_eq!(g.level(), Level::FIRST);
        assert_eq!(g.phase(), Phase::Idle);
        assert_eq!(g.tiles().len(), 4);
        assert!(g.music_on() && g.video_on());
    }

    #[test]
    fn first_click_moves_to_one_flipped() {
        let mut g = game();
        let out = g.update(&[click(rect(&g, 0))]).unwrap();
        assert!(matches!(out.as_slice(), [Outcome::Flipped { .. }]));
        assert_eq!(g.phase(), Phase::OneFlipped);
        assert_eq!(g.flipped_keys().count(), 1);
    }

    #[test]
    fn clicking_a_shown_tile_again_is_ignored() {
        let mut g = game();
        let r = rect(&g, 0);
        g.update(&[click(r)]).unwrap();
        let out = g.update(&[click(r)]).unwrap();
        assert!(out.is_empty());
        assert_eq!(g.flipped_keys().count(), 1);
    }

    #[test]
    fn non_left_clicks_do_nothing() {
        let mut g = game();
        let r = rect(&g, 0);
        let out = g
            .update(&[InputEvent::Click {
                button: MouseButton::Right,
                x: r.x,
                y: r.y,
            }])
            .unwrap();
        assert!(out.is_empty());
        assert_eq!(g.tiles().shown_count(), 0);
    }

    #[test]
    fn matching_pair_stays_up() {
        let mut g = game();
        let (a, b, _) = pair_and_other(&g);
        g.update(&[click(rect(&g, a)), click(rect(&g, b))]).unwrap();
        assert_eq!(g.flipped_keys().count(), 0);
        assert!(g.tiles().get(a).unwrap().shown);
        assert!(g.tiles().get(b).unwrap().shown);
        assert_eq!(g.attempts(), 1);

        for _ in 0..(g.reveal_frames() * 2) {
            g.update(&[]).unwrap();
        }
        assert!(g.tiles().get(a).unwrap().shown);
    }

    #[test]
    fn mismatch_blocks_then_hides_after_reveal_frames() {
        let mut g = game();
        let (a, _, other) = pair_and_other(&g);
        let out = g.update(&[click(rect(&g, a)), click(rect(&g, other))]).unwrap();
        assert!(matches!(out.last(), Some(Outcome::Mismatched { .. })));
        assert_eq!(g.phase(), Phase::Blocked);

        for _ in 0..g.reveal_frames() - 1 {
            assert!(g.update(&[]).unwrap().is_empty());
            assert!(g.blocked());
        }
        let out = g.update(&[]).unwrap();
        assert_eq!(out, vec![Outcome::PairHidden]);
        assert!(!g.blocked());
        assert_eq!(g.tiles().shown_count(), 0);
        assert_eq!(g.phase(), Phase::Idle);
    }

    #[test]
    fn clicks_while_blocked_are_ignored() {
        let mut g = game();
        let (a, partner, other) = pair_and_other(&g);
        g.update(&[click(rect(&g, a)), click(rect(&g, other))]).unwrap();
        let out = g.update(&[click(rect(&g, partner))]).unwrap();
        assert!(out.is_empty());
        assert!(!g.tiles().get(partner).unwrap().shown);
    }

    #[test]
    fn toggles_work_while_blocked() {
        let mut g = game();
        let (a, _, other) = pair_and_other(&g);
        g.update(&[click(rect(&g, a)), click(rect(&g, other))]).unwrap();
        let music = g.toggles().get(ToggleKind::Music).rect;
        let out = g.update(&[click(music)]).unwrap();
        assert_eq!(out, vec![Outcome::MusicToggled(false)]);
        assert!(!g.music_on());
    }

    #[test]
    fn space_only_advances_when_complete() {
        let mut g = game();
        g.update(&[InputEvent::KeyDown(Key::Space)]).unwrap();
        assert_eq!(g.level(), Level::FIRST);
    }

    #[test]
    fn resize_recenters_grid() {
        let mut g = game();
        g.update(&[InputEvent::Resize {
            width: 120,
            height: 40,
        }])
        .unwrap();
        assert_eq!(rect(&g, 0).x, GridLayout::default().left(120));
        assert_eq!(
            g.toggles().get(ToggleKind::Music).rect.right(),
            119
        );
    }

    fn solve(g: &mut MatchGame) {
        let n = g.tiles().len();
        for i in 0..n {
            if g.tiles().get(i).unwrap().shown {
                continue;
            }
            let key = g.tiles().get(i).unwrap().key.clone();
            let twin = (i + 1..n)
                .find(|&j| g.tiles().get(j).unwrap().key == key)
                .unwrap();
            g.update(&[click(rect(g, i)), click(rect(g, twin))]).unwrap();
        }
    }

    #[test]
    fn snapshot_follows_each_phase() {
        let mut g = game();
        let (a, partner, other) = pair_and_other(&g);

        let snap = g.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert!(snap.accepts_flips());
        assert_eq!(snap.pairs_found(), 0);

        g.update(&[click(rect(&g, a))]).unwrap();
        let snap = g.snapshot();
        assert_eq!(snap.phase, Phase::OneFlipped);
        assert!(snap.accepts_flips());
        assert_eq!(snap.flipped.len(), 1);
        assert_eq!(snap.pairs_found(), 0);

        g.update(&[click(rect(&g, other))]).unwrap();
        let snap = g.snapshot();
        assert_eq!(snap.phase, Phase::Blocked);
        assert!(!snap.accepts_flips());
        assert_eq!(snap.shown_count, 2);
        assert_eq!(snap.pairs_found(), 0);

        for _ in 0..g.reveal_frames() {
            g.update(&[]).unwrap();
        }
        g.update(&[click(rect(&g, a)), click(rect(&g, partner))]).unwrap();
        let snap = g.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.pairs_found(), 1);
        assert_eq!(snap.attempts, 2);

        solve(&mut g);
        let snap = g.snapshot();
        assert_eq!(snap.phase, Phase::LevelComplete);
        assert!(!snap.accepts_flips());
        assert_eq!(snap.pairs_found(), 2);
        assert_eq!(snap.tile_count, 4);
    }

    #[test]
    fn failed_advance_keeps_the_finished_level() {
        let mut g = MatchGame::with_seed(ImagePool::new(["ash", "bean"]), 5).unwrap();
        solve(&mut g);
        assert!(g.level_complete());
        let before: Vec<_> = g.tiles().iter().cloned().collect();

        let err = g.update(&[InputEvent::KeyDown(Key::Space)]).unwrap_err();
        assert_eq!(
            err,
            DealError::PoolTooSmall {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(g.level(), Level::FIRST);
        assert!(g.level_complete());
        assert_eq!(g.tiles().iter().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn last_level_fits_a_standard_terminal() {
        let mut g = MatchGame::new(
            pool(),
            GameSettings {
                seed: Some(1),
                width: 80,
                height: 24,
                start_level: Level::LAST,
                ..GameSettings::default()
            },
        )
        .unwrap();
        assert!(g.grid_fits());
        let lowest = g.tiles().iter().map(|t| t.rect.bottom()).max().unwrap();
        assert!(lowest <= 24 - crate::types::HUD_ROWS);

        g.update(&[InputEvent::Resize {
            width: 80,
            height: 60,
        }])
        .unwrap();
        assert_eq!(g.layout(), &GridLayout::default());
    }

    #[test]
    fn too_short_viewport_ignores_tile_clicks() {
        let mut g = game();
        g.update(&[InputEvent::Resize {
            width: 80,
            height: 10,
        }])
        .unwrap();
        assert!(!g.grid_fits());
        assert!(g.update(&[click(rect(&g, 0))]).unwrap().is_empty());

        g.update(&[InputEvent::Resize {
            width: 80,
            height: 24,
        }])
        .unwrap();
        assert!(g.grid_fits());
        assert_eq!(g.update(&[click(rect(&g, 0))]).unwrap().len(), 1);
    }

    #[test]
    fn undersized_pool_fails_to_deal() {
        let err = MatchGame::with_seed(ImagePool::new(["solo"]), 1).unwrap_err();
        assert_eq!(
            err,
            DealError::PoolTooSmall {
                requested: 2,
                available: 1
            }
        );
    }
}
