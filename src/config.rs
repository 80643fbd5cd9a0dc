//! Startup configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MIXEL_ASSETS_DIR` | `assets` | Asset root |
//! | `MIXEL_FPS` | 60 | Frame rate; also the mismatch reveal in frames |
//! | `MIXEL_SEED` | random | Deal seed |
//! | `MIXEL_VOLUME` | 0.5 | Music volume (0.0 to 1.0) |
//! | `MIXEL_VIDEO_HOLD` | 6 | Game frames per video frame |
//! | `MIXEL_LOG_PATH` | unset | Log file; logging is off when unset |
//! | `MIXEL_LOG` | `info` | Log filter directives |
//!
//! Unparsable values fall back to the default.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::{DEFAULT_FPS, DEFAULT_VOLUME};

pub const MAX_FPS: u32 = 240;
pub const DEFAULT_VIDEO_HOLD: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub assets_dir: PathBuf,
    pub fps: u32,
    pub seed: Option<u64>,
    pub volume: f32,
    pub video_hold: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            fps: DEFAULT_FPS,
            seed: None,
            volume: DEFAULT_VOLUME,
            video_hold: DEFAULT_VIDEO_HOLD,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (process env in production, maps in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let assets_dir = get("MIXEL_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);
        let fps = get("MIXEL_FPS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.fps)
            .clamp(1, MAX_FPS);
        let seed = get("MIXEL_SEED").and_then(|s| s.parse().ok());
        let volume = get("MIXEL_VOLUME")
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(defaults.volume)
            .clamp(0.0, 1.0);
        let video_hold = get("MIXEL_VIDEO_HOLD")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.video_hold)
            .max(1);
        let log_path = get("MIXEL_LOG_PATH").map(PathBuf::from);
        let log_filter = get("MIXEL_LOG").unwrap_or(defaults.log_filter);

        Self {
            assets_dir,
            fps,
            seed,
            volume,
            video_hold,
            log_path,
            log_filter,
        }
    }

    /// Wall-clock length of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(1)))
    }
}
