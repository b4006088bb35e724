#![allow(dead_code)]
//! Test harness utilities for tracklab-core integration tests.

use std::collections::{HashMap, HashSet};

use tracklab_core::config::Config;
use tracklab_core::dispatch::LocalDispatcher;
use tracklab_core::playback::{PlaybackBackend, PlaybackHandle};
use tracklab_core::state::StudioState;
use tracklab_core::PlaybackError;
use tracklab_types::{Action, DispatchResult, Dispatcher, TrackAction, TrackId};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Open(String),
    Play(u64),
    Pause(u64),
    SetVolume(u64, f32),
    Close(u64),
}

/// Backend that records every call in order and fails on request.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    pub calls: Vec<Call>,
    next_handle: u64,
    sources: HashMap<u64, String>,
    reject_open: HashSet<String>,
    reject_transport: HashSet<String>,
}

impl ScriptedBackend {
    pub fn reject_open(&mut self, source: &str) {
        self.reject_open.insert(source.to_string());
    }

    pub fn reject_transport(&mut self, source: &str) {
        self.reject_transport.insert(source.to_string());
    }

    pub fn plays(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Play(_))).count()
    }

    pub fn pauses(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Call::Pause(_))).count()
    }

    fn transport(&self, handle: PlaybackHandle) -> Result<(), PlaybackError> {
        let source = self
            .sources
            .get(&handle.get())
            .ok_or(PlaybackError::NotLoaded(handle.get()))?;
        if self.reject_transport.contains(source) {
            return Err(PlaybackError::Backend(format!("{} is busy", source)));
        }
        Ok(())
    }
}

impl PlaybackBackend for ScriptedBackend {
    fn open(&mut self, source: &str) -> Result<PlaybackHandle, PlaybackError> {
        self.calls.push(Call::Open(source.to_string()));
        if self.reject_open.contains(source) {
            return Err(PlaybackError::Open {
                source_ref: source.to_string(),
                reason: "no such file".to_string(),
            });
        }
        let raw = self.next_handle;
        self.next_handle += 1;
        self.sources.insert(raw, source.to_string());
        Ok(PlaybackHandle::new(raw))
    }

    fn play(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError> {
        self.calls.push(Call::Play(handle.get()));
        self.transport(handle)
    }

    fn pause(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError> {
        self.calls.push(Call::Pause(handle.get()));
        self.transport(handle)
    }

    fn set_volume(&mut self, handle: PlaybackHandle, volume: f32) -> Result<(), PlaybackError> {
        self.calls.push(Call::SetVolume(handle.get(), volume));
        Ok(())
    }

    fn close(&mut self, handle: PlaybackHandle) -> Result<(), PlaybackError> {
        self.calls.push(Call::Close(handle.get()));
        self.sources
            .remove(&handle.get())
            .map(|_| ())
            .ok_or(PlaybackError::NotLoaded(handle.get()))
    }
}

/// A session plus its backend, driven through `LocalDispatcher`.
pub struct Studio {
    pub state: StudioState,
    pub backend: ScriptedBackend,
}

impl Studio {
    pub fn new() -> Self {
        Self::with_config("")
    }

    pub fn with_config(toml: &str) -> Self {
        let config = Config::from_toml_str(toml).unwrap();
        Self { state: StudioState::new(&config), backend: ScriptedBackend::default() }
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        LocalDispatcher::new(&mut self.state, &mut self.backend).dispatch(&action)
    }

    /// Add a track named `name` from `<name>.wav`.
    pub fn add(&mut self, name: &str) -> TrackId {
        let result = self.dispatch(Action::Track(TrackAction::Add {
            source: format!("{}.wav", name.to_lowercase()),
            name: name.to_string(),
        }));
        result.added_track.unwrap()
    }

    pub fn current_track_names(&self) -> Vec<String> {
        self.state
            .projects
            .current()
            .map(|p| p.tracks.iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default()
    }
}
