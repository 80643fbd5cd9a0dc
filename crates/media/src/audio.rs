//! Background music.
//!
//! [`AudioService`] is the mixer interface the app drives. Two
//! implementations: [`SilentAudio`] keeps the play/pause/volume state without
//! an output device, and `RodioAudio` (feature `audio`) plays through rodio.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::types::DEFAULT_VOLUME;

pub trait AudioService {
    /// Load a track, replacing any previous one. The file must exist.
    fn load_track(&mut self, path: &Path) -> Result<()>;

    /// Start the loaded track from the beginning.
    fn play(&mut self, looped: bool) -> Result<()>;

    fn pause(&mut self);

    fn resume(&mut self);

    /// Volume in `0.0..=1.0`; out-of-range values are clamped.
    fn set_volume(&mut self, volume: f32);

    fn volume(&self) -> f32;

    fn is_paused(&self) -> bool;
}

/// Mixer state without sound output.
#[derive(Debug, Clone, PartialEq)]
pub struct SilentAudio {
    track: Option<PathBuf>,
    playing: bool,
    paused: bool,
    looped: bool,
    volume: f32,
}

impl SilentAudio {
    pub fn new() -> Self {
        Self {
            track: None,
            playing: false,
            paused: false,
            looped: false,
            volume: DEFAULT_VOLUME,
        }
    }

    pub fn track(&self) -> Option<&Path> {
        self.track.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing && !self.paused
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }
}

impl Default for SilentAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioService for SilentAudio {
    fn load_track(&mut self, path: &Path) -> Result<()> {
        let meta = std::fs::metadata(path)
            .with_context(|| format!("audio track {}", path.display()))?;
        if !meta.is_file() {
            bail!("audio track {} is not a file", path.display());
        }
        self.track = Some(path.to_path_buf());
        self.playing = false;
        self.paused = false;
        Ok(())
    }

    fn play(&mut self, looped: bool) -> Result<()> {
        if self.track.is_none() {
            bail!("play called before a track was loaded");
        }
        self.playing = true;
        self.paused = false;
        self.looped = looped;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(feature = "audio")]
pub use device::RodioAudio;

#[cfg(feature = "audio")]
mod device {
    use std::io::Cursor;
    use std::path::Path;

    use anyhow::{bail, Context, Result};
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

    use super::AudioService;
    use crate::types::DEFAULT_VOLUME;

    /// Plays the track on the default output device.
    pub struct RodioAudio {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        sink: Option<Sink>,
        track: Option<Vec<u8>>,
        volume: f32,
        paused: bool,
    }

    impl RodioAudio {
        pub fn try_new() -> Result<Self> {
            let (stream, handle) =
                OutputStream::try_default().context("open default audio output")?;
            Ok(Self {
                _stream: stream,
                handle,
                sink: None,
                track: None,
                volume: DEFAULT_VOLUME,
                paused: false,
            })
        }
    }

    impl AudioService for RodioAudio {
        fn load_track(&mut self, path: &Path) -> Result<()> {
            let bytes = std::fs::read(path)
                .with_context(|| format!("audio track {}", path.display()))?;
            // Fail at load time rather than on the first play.
            Decoder::new(Cursor::new(bytes.clone()))
                .with_context(|| format!("decode audio track {}", path.display()))?;
            self.track = Some(bytes);
            self.sink = None;
            Ok(())
        }

        fn play(&mut self, looped: bool) -> Result<()> {
            let Some(bytes) = self.track.clone() else {
                bail!("play called before a track was loaded");
            };
            let source = Decoder::new(Cursor::new(bytes)).context("decode audio track")?;
            let sink = Sink::try_new(&self.handle).context("create audio sink")?;
            sink.set_volume(self.volume);
            if looped {
                sink.append(source.repeat_infinite());
            } else {
                sink.append(source);
            }
            sink.play();
            self.sink = Some(sink);
            self.paused = false;
            Ok(())
        }

        fn pause(&mut self) {
            if let Some(sink) = &self.sink {
                sink.pause();
            }
            self.paused = true;
        }

        fn resume(&mut self) {
            if let Some(sink) = &self.sink {
                sink.play();
            }
            self.paused = false;
        }

        fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
            if let Some(sink) = &self.sink {
                sink.set_volume(self.volume);
            }
        }

        fn volume(&self) -> f32 {
            self.volume
        }

        fn is_paused(&self) -> bool {
            self.paused
        }
    }
}

/// The best available audio service: rodio output when the `audio` feature
/// is on and a device opens, silent state tracking otherwise.
pub fn default_audio() -> Box<dyn AudioService> {
    #[cfg(feature = "audio")]
    {
        match RodioAudio::try_new() {
            Ok(audio) => {
                tracing::debug!("audio output opened");
                return Box::new(audio);
            }
            Err(err) => warn!(error = %format!("{err:#}"), "audio output unavailable, music muted"),
        }
    }
    #[cfg(not(feature = "audio"))]
    warn!("built without the audio feature, music muted");

    Box::new(SilentAudio::new())
}
