use serde::{Deserialize, Serialize};

use super::effect::{AudioEffect, EffectParams};
use super::track::{clamp_unit, AudioTrack};
use crate::{EffectId, TrackId};

pub const DEFAULT_BPM: u16 = 120;
pub const MIN_BPM: u16 = 20;
pub const MAX_BPM: u16 = 300;

/// Live working set of tracks plus transport flags.
/// Created once per session and never persisted directly; projects hold copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixerState {
    /// Render order is insertion order
    pub tracks: Vec<AudioTrack>,
    /// Decorative; nothing is tempo-synced
    pub bpm: u16,
    /// Seconds; unused by playback
    pub current_time: f64,
    pub is_playing: bool,
    pub master_volume: f32,
    /// Next track ID to assign (never reused, always increments)
    #[serde(skip)]
    next_track_id: u32,
    #[serde(skip)]
    next_effect_id: u32,
}

impl Default for MixerState {
    fn default() -> Self {
        Self::new()
    }
}

impl MixerState {
    pub fn new() -> Self {
        Self::new_with_bpm(DEFAULT_BPM)
    }

    pub fn new_with_bpm(bpm: u16) -> Self {
        Self {
            tracks: Vec::new(),
            bpm: bpm.clamp(MIN_BPM, MAX_BPM),
            current_time: 0.0,
            is_playing: false,
            master_volume: 1.0,
            next_track_id: 0,
            next_effect_id: 0,
        }
    }

    pub fn track(&self, id: TrackId) -> Option<&AudioTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn track_mut(&mut self, id: TrackId) -> Option<&mut AudioTrack> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    pub fn track_ids(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.tracks.iter().map(|t| t.id)
    }

    /// Append a track with default settings. Returns its ID.
    pub fn add_track(&mut self, name: impl Into<String>, source: impl Into<String>) -> TrackId {
        let id = TrackId::new(self.next_track_id);
        self.next_track_id = self.next_track_id.saturating_add(1);
        self.tracks.push(AudioTrack::new(id, name, source));
        id
    }

    /// Remove a track by ID. Returns the removed track, if any.
    pub fn remove_track(&mut self, id: TrackId) -> Option<AudioTrack> {
        let idx = self.tracks.iter().position(|t| t.id == id)?;
        Some(self.tracks.remove(idx))
    }

    pub fn alloc_effect_id(&mut self) -> EffectId {
        let id = EffectId::new(self.next_effect_id);
        self.next_effect_id = self.next_effect_id.saturating_add(1);
        id
    }

    /// Apply an effect built from `params` to a track. Returns the new effect's ID,
    /// or None if the track does not exist.
    pub fn apply_effect(&mut self, track: TrackId, params: EffectParams) -> Option<EffectId> {
        if self.track(track).is_none() {
            return None;
        }
        let id = self.alloc_effect_id();
        self.track_mut(track)?.apply_effect(AudioEffect::new(id, params));
        Some(id)
    }

    pub fn set_master_volume(&mut self, value: f32) {
        self.master_volume = clamp_unit(value);
    }

    pub fn set_bpm(&mut self, bpm: u16) {
        self.bpm = bpm.clamp(MIN_BPM, MAX_BPM);
    }

    pub fn active_track_count(&self) -> usize {
        self.tracks.iter().filter(|t| !t.muted).count()
    }

    pub fn effect_count(&self) -> usize {
        self.tracks.iter().map(AudioTrack::effect_count).sum()
    }

    /// Replace the track list wholesale (e.g. from a project) and advance the
    /// ID counters past anything it contains.
    pub fn replace_tracks(&mut self, tracks: Vec<AudioTrack>) {
        self.tracks = tracks;
        self.recompute_next_ids();
    }

    fn recompute_next_ids(&mut self) {
        self.next_track_id = self
            .tracks
            .iter()
            .map(|t| t.id.get().saturating_add(1))
            .max()
            .unwrap_or(0)
            .max(self.next_track_id);
        self.next_effect_id = self
            .tracks
            .iter()
            .flat_map(|t| t.effects.iter())
            .map(|e| e.id.get().saturating_add(1))
            .max()
            .unwrap_or(0)
            .max(self.next_effect_id);
    }
}
