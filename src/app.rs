//! Application context: the game plus the services it drives.
//!
//! `App` owns everything the frame loop needs. Each frame it advances the
//! backdrop, feeds the polled events to the game, forwards toggle changes to
//! the music and video services, and redraws.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::core::{GameSettings, Level, MatchGame, Outcome};
use crate::media::{default_audio, Assets, AudioService, Backdrop, TextVideo, VideoService};
use crate::term::{Gallery, Screen, TerminalRenderer};
use crate::types::{InputEvent, GAME_TITLE};

pub struct App<V: VideoService = TextVideo> {
    config: Config,
    game: MatchGame,
    screen: Screen,
    audio: Box<dyn AudioService>,
    backdrop: Backdrop<V>,
    frames: u64,
    quit: bool,
}

impl App<TextVideo> {
    /// Load assets, start the music and the backdrop, then take over the
    /// terminal. Everything that can fail runs before the terminal is entered.
    pub fn init(config: Config) -> Result<Self> {
        let assets = Assets::load(&config.assets_dir)
            .with_context(|| format!("load assets from {}", config.assets_dir.display()))?;

        let (width, height) = TerminalRenderer::size();
        let screen = Screen::headless(gallery(&assets), width, height);
        let mut app = Self::assemble(config, &assets, screen, default_audio(), TextVideo::new())?;

        let mut terminal = TerminalRenderer::new();
        terminal.enter(GAME_TITLE)?;
        app.screen.attach_terminal(terminal);
        Ok(app)
    }
}

impl<V: VideoService> App<V> {
    /// Wire a game to already-built services.
    pub fn assemble(
        config: Config,
        assets: &Assets,
        screen: Screen,
        mut audio: Box<dyn AudioService>,
        video: V,
    ) -> Result<Self> {
        let pool = assets.pool();
        pool.ensure_serves(Level::LAST)
            .with_context(|| format!("cat images in {}", assets.paths.cats.display()))?;

        let game = MatchGame::new(
            pool,
            GameSettings {
                reveal_frames: config.fps,
                width: screen.width(),
                height: screen.height(),
                seed: config.seed,
                ..GameSettings::default()
            },
        )?;

        audio.load_track(&assets.paths.track)?;
        audio.set_volume(config.volume);
        audio.play(true)?;

        let backdrop = Backdrop::open(video, &assets.paths.video, config.video_hold)?;

        info!(
            cats = assets.cats.len(),
            fps = config.fps,
            seed = ?config.seed,
            width = screen.width(),
            height = screen.height(),
            "game started"
        );

        Ok(Self {
            config,
            game,
            screen,
            audio,
            backdrop,
            frames: 0,
            quit: false,
        })
    }

    /// Run one frame over the events polled for it.
    pub fn frame(&mut self, events: &[InputEvent]) -> Result<()> {
        self.backdrop.advance();

        for event in events {
            match *event {
                InputEvent::Quit => self.quit = true,
                InputEvent::Resize { width, height } => self.screen.resize(width, height),
                _ => {}
            }
        }

        for outcome in self.game.update(events)? {
            self.apply(&outcome);
        }

        self.game
            .draw(&mut self.screen, Some(self.backdrop.frame()))?;
        self.frames += 1;
        Ok(())
    }

    fn apply(&mut self, outcome: &Outcome) {
        match *outcome {
            Outcome::MusicToggled(true) => self.audio.resume(),
            Outcome::MusicToggled(false) => self.audio.pause(),
            Outcome::VideoToggled(on) => self.backdrop.set_playing(on),
            Outcome::LevelComplete { level } => {
                info!(%level, attempts = self.game.attempts(), "level complete")
            }
            Outcome::LevelAdvanced { level } => info!(%level, "level dealt"),
            _ => debug!(?outcome, "outcome"),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn frame_duration(&self) -> Duration {
        self.config.frame_duration()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn game(&self) -> &MatchGame {
        &self.game
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn audio(&self) -> &dyn AudioService {
        self.audio.as_ref()
    }

    pub fn backdrop(&self) -> &Backdrop<V> {
        &self.backdrop
    }

    /// Stop the music and give the terminal back.
    pub fn teardown(mut self) -> Result<()> {
        self.audio.pause();
        if let Some(mut terminal) = self.screen.take_terminal() {
            terminal.exit()?;
        }
        info!(frames = self.frames, level = %self.game.level(), "game stopped");
        Ok(())
    }
}

/// Gallery of the loaded cat art, keyed like the image pool.
pub fn gallery(assets: &Assets) -> Gallery {
    assets
        .cats
        .iter()
        .map(|cat| (cat.key.clone(), cat.lines.clone()))
        .collect()
}
