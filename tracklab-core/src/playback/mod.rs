//! Playback collaborator boundary.
//!
//! The studio never decodes audio. A `PlaybackBackend` opens a source into an
//! opaque handle and plays/pauses it whole. `PlaybackRegistry` remembers which
//! handle belongs to which track so handles are always closed before a track
//! is discarded.

mod memory;

pub use memory::{HandleState, MemoryBackend};

use std::collections::HashMap;

use tracklab_types::TrackId;

use crate::error::PlaybackError;

/// Opaque handle issued by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackHandle(u64);

impl PlaybackHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Platform playback API. Calls may block and may fail; every call is
/// issued from the dispatching thread.
pub trait PlaybackBackend {
    fn open(&mut self, source: &str) -> Result<PlaybackHandle, PlaybackError>;
    fn play(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError>;
    fn pause(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError>;
    fn set_volume(&mut self, handle: PlaybackHandle, volume: f32) -> Result<(), PlaybackError>;
    fn close(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError>;
}

/// Track → handle map.
#[derive(Debug, Default)]
pub struct PlaybackRegistry {
    handles: HashMap<TrackId, PlaybackHandle>,
}

impl PlaybackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, track: TrackId, handle: PlaybackHandle) -> Option<PlaybackHandle> {
        self.handles.insert(track, handle)
    }

    pub fn get(&self, track: TrackId) -> Option<PlaybackHandle> {
        self.handles.get(&track).copied()
    }

    pub fn take(&mut self, track: TrackId) -> Option<PlaybackHandle> {
        self.handles.remove(&track)
    }

    pub fn contains(&self, track: TrackId) -> bool {
        self.handles.contains_key(&track)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Remove every handle, returning them in track order for closing.
    pub fn drain(&mut self) -> Vec<(TrackId, PlaybackHandle)> {
        let mut handles: Vec<_> = self.handles.drain().collect();
        handles.sort_by_key(|(track, _)| track.get());
        handles
    }
}
