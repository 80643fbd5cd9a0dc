//! Background video.
//!
//! The video is a text file of frames separated by lines holding exactly
//! [`FRAME_SEPARATOR`]. [`TextVideo`] decodes it lazily, one frame per call;
//! [`Backdrop`] plays a source in a loop, reopening it at end of stream or on
//! a read failure, and can freeze on the last decoded frame.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};

use crate::types::VideoFrame;

pub const FRAME_SEPARATOR: &str = "---";

pub trait VideoService {
    /// (Re)open a video, positioned before its first frame.
    fn open(&mut self, path: &Path) -> Result<()>;

    /// Decode the next frame; `Ok(None)` at end of stream.
    fn next_frame(&mut self) -> Result<Option<VideoFrame>>;
}

/// Decoder for text-frame video files.
#[derive(Debug, Default)]
pub struct TextVideo {
    reader: Option<Box<dyn BufReadDebug>>,
    line: String,
}

/// Object-safe `BufRead` that can sit in a `Debug` struct.
trait BufReadDebug: BufRead + std::fmt::Debug {}
impl<T: BufRead + std::fmt::Debug> BufReadDebug for T {}

impl TextVideo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode from an in-memory or otherwise already-open reader.
    pub fn from_reader<R: BufRead + std::fmt::Debug + 'static>(reader: R) -> Self {
        Self {
            reader: Some(Box::new(reader)),
            line: String::new(),
        }
    }
}

impl VideoService for TextVideo {
    fn open(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).with_context(|| format!("open video {}", path.display()))?;
        self.reader = Some(Box::new(BufReader::new(file)));
        Ok(())
    }

    fn next_frame(&mut self) -> Result<Option<VideoFrame>> {
        let reader = self
            .reader
            .as_mut()
            .ok_or_else(|| anyhow!("video read before open"))?;

        let mut lines = Vec::new();
        loop {
            self.line.clear();
            if reader.read_line(&mut self.line)? == 0 {
                break;
            }
            let row = self.line.trim_end_matches(['\n', '\r']);
            if row == FRAME_SEPARATOR {
                if lines.is_empty() {
                    // Leading or doubled separator.
                    continue;
                }
                break;
            }
            lines.push(row.to_string());
        }

        Ok((!lines.is_empty()).then(|| VideoFrame::new(lines)))
    }
}

/// Looping, freezable playback of a video source.
#[derive(Debug)]
pub struct Backdrop<V> {
    source: V,
    path: PathBuf,
    current: VideoFrame,
    playing: bool,
    /// Game frames each video frame stays up.
    hold: u32,
    held: u32,
    reopens: u64,
}

impl<V: VideoService> Backdrop<V> {
    /// Open `path` and decode its first frame; a video without frames is an error.
    pub fn open(mut source: V, path: impl Into<PathBuf>, hold: u32) -> Result<Self> {
        let path = path.into();
        source.open(&path)?;
        let first = source
            .next_frame()
            .with_context(|| format!("decode video {}", path.display()))?
            .ok_or_else(|| anyhow!("video {} has no frames", path.display()))?;
        debug!(path = %path.display(), "video opened");
        Ok(Self {
            source,
            path,
            current: first,
            playing: true,
            hold: hold.max(1),
            held: 0,
            reopens: 0,
        })
    }

    /// The frame to draw.
    pub fn frame(&self) -> &VideoFrame {
        &self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Resume advancing, or freeze on the current frame.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Times the source was reopened after end of stream or a read failure.
    pub fn reopens(&self) -> u64 {
        self.reopens
    }

    /// Advance by one game frame.
    pub fn advance(&mut self) {
        if !self.playing {
            return;
        }
        self.held += 1;
        if self.held < self.hold {
            return;
        }
        self.held = 0;

        match self.source.next_frame() {
            Ok(Some(frame)) => self.current = frame,
            Ok(None) => self.rewind(),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "video read failed, reopening");
                self.rewind();
            }
        }
    }

    /// Reopen the source and show its first frame; keeps the last frame when
    /// that fails too.
    fn rewind(&mut self) {
        self.reopens += 1;
        let first = self
            .source
            .open(&self.path)
            .and_then(|()| self.source.next_frame());
        match first {
            Ok(Some(frame)) => self.current = frame,
            Ok(None) => warn!(path = %self.path.display(), "reopened video has no frames"),
            Err(err) => warn!(error = %format!("{err:#}"), "video reopen failed"),
        }
    }
}
