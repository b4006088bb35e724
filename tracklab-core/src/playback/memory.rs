//! In-process backend that tracks handle state without producing sound.
//! Used for headless sessions and tests; failures can be injected per source
//! or per handle.

use std::collections::{HashMap, HashSet};

use super::{PlaybackBackend, PlaybackHandle};
use crate::error::PlaybackError;

#[derive(Debug, Clone, PartialEq)]
pub struct HandleState {
    pub source: String,
    pub playing: bool,
    pub volume: f32,
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    next_handle: u64,
    handles: HashMap<PlaybackHandle, HandleState>,
    unopenable: HashSet<String>,
    failing: HashSet<String>,
    closed: Vec<PlaybackHandle>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// `open` on this source will fail.
    pub fn fail_open(&mut self, source: impl Into<String>) {
        self.unopenable.insert(source.into());
    }

    /// `play`/`pause` on any handle opened from this source will fail.
    pub fn fail_transport(&mut self, source: impl Into<String>) {
        self.failing.insert(source.into());
    }

    pub fn state(&self, handle: PlaybackHandle) -> Option<&HandleState> {
        self.handles.get(&handle)
    }

    pub fn open_count(&self) -> usize {
        self.handles.len()
    }

    pub fn playing_count(&self) -> usize {
        self.handles.values().filter(|h| h.playing).count()
    }

    pub fn is_playing(&self, source: &str) -> bool {
        self.handles.values().any(|h| h.source == source && h.playing)
    }

    pub fn closed(&self) -> &[PlaybackHandle] {
        &self.closed
    }

    fn loaded_mut(&mut self, handle: PlaybackHandle) -> Result<&mut HandleState, PlaybackError> {
        self.handles
            .get_mut(&handle)
            .ok_or(PlaybackError::NotLoaded(handle.get()))
    }

    fn transport(&mut self, handle: PlaybackHandle, playing: bool) -> Result<(), PlaybackError> {
        let failing = {
            let state = self.loaded_mut(handle)?;
            state.source.clone()
        };
        if self.failing.contains(&failing) {
            return Err(PlaybackError::Backend(format!("device rejected '{}'", failing)));
        }
        self.loaded_mut(handle)?.playing = playing;
        Ok(())
    }
}

impl PlaybackBackend for MemoryBackend {
    fn open(&mut self, source: &str) -> Result<PlaybackHandle, PlaybackError> {
        if self.unopenable.contains(source) {
            return Err(PlaybackError::Open {
                source_ref: source.to_string(),
                reason: "unsupported or missing file".to_string(),
            });
        }
        let handle = PlaybackHandle::new(self.next_handle);
        self.next_handle += 1;
        self.handles.insert(
            handle,
            HandleState { source: source.to_string(), playing: false, volume: 1.0 },
        );
        Ok(handle)
    }

    fn play(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError> {
        self.transport(handle, true)
    }

    fn pause(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError> {
        self.transport(handle, false)
    }

    fn set_volume(&mut self, handle: PlaybackHandle, volume: f32) -> Result<(), PlaybackError> {
        self.loaded_mut(handle)?.volume = volume;
        Ok(())
    }

    fn close(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError> {
        self.handles
            .remove(&handle)
            .ok_or(PlaybackError::NotLoaded(handle.get()))?;
        self.closed.push(handle);
        Ok(())
    }
}
