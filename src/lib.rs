//! MiXel Memory Game (workspace facade crate).
//!
//! The game rules, input mapping, media services, and terminal renderer live
//! in dedicated crates under `crates/`; this package re-exports them as
//! `mixel_memory::{core,input,media,term,types}` and adds the application
//! shell: configuration, logging, and the per-frame [`app::App`].

pub mod app;
pub mod config;
pub mod logging;

pub use mixel_memory_core as core;
pub use mixel_memory_input as input;
pub use mixel_memory_media as media;
pub use mixel_memory_term as term;
pub use mixel_memory_types as types;

pub use app::App;
pub use config::Config;
