//! # tracklab-core
//!
//! Session layer for the tracklab studio. Owns the live mixer, the in-memory
//! project list and the track → playback handle map, and turns actions into
//! state changes, playback calls and advisories. No decoding, no DSP.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tracklab_core::config::Config;
//! use tracklab_core::dispatch::LocalDispatcher;
//! use tracklab_core::playback::MemoryBackend;
//! use tracklab_core::state::StudioState;
//! use tracklab_types::{Action, Dispatcher, TrackAction};
//!
//! // 1. Session from config; the first-launch project is created here
//! let config = Config::load();
//! let mut state = StudioState::new(&config);
//!
//! // 2. Any PlaybackBackend; MemoryBackend plays nothing
//! let mut backend = MemoryBackend::new();
//!
//! // 3. Dispatch; playback side effects are applied before it returns
//! let mut dispatcher = LocalDispatcher::new(&mut state, &mut backend);
//! let result = dispatcher.dispatch(&Action::Track(TrackAction::Add {
//!     source: "file:///drums.wav".into(),
//!     name: "Drums".into(),
//! }));
//!
//! // 4. Show result.status; read result.export / result.import as needed
//! ```
//!
//! ## Module Overview
//!
//! - [`state`]: `StudioState` and the `ProjectStore`
//! - [`dispatch`]: `dispatch_action()`, the single entry point for state
//!   mutation, plus `LocalDispatcher` and playback side effects
//! - [`playback`]: `PlaybackBackend` trait, handle registry, in-memory backend
//! - [`estimate`]: analytics and performance estimators
//! - [`export`]: JSON project snapshot
//! - [`config`]: TOML configuration loading (embedded + user override)
//! - [`error`]: `StudioError` and `PlaybackError`

pub mod config;
pub mod dispatch;
pub mod error;
pub mod estimate;
pub mod export;
pub mod playback;
pub mod state;

pub use error::{PlaybackError, Result, StudioError};
