//! Media services consumed by the game loop.
//!
//! - [`assets`]: startup loading of cat art, the music track, and the video
//! - [`audio`]: background music behind the [`AudioService`] trait
//! - [`video`]: text-frame video decoding and the looping [`Backdrop`]
//!
//! Playback state lives here; the game only reports toggle changes and the
//! app forwards them to these services.

pub mod assets;
pub mod audio;
pub mod video;

pub use mixel_memory_core as core;
pub use mixel_memory_types as types;

pub use assets::{AssetError, AssetPaths, Assets, CatArt};
#[cfg(feature = "audio")]
pub use audio::RodioAudio;
pub use audio::{default_audio, AudioService, SilentAudio};
pub use video::{Backdrop, TextVideo, VideoService, FRAME_SEPARATOR};
