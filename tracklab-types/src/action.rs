//! Action types for the dispatch system.
//!
//! Actions represent user intents that flow through the dispatch system.
//! This module contains all action enums and the `DispatchResult` returned to
//! the front end.

use serde::{Deserialize, Serialize};

use crate::{EffectParams, ProjectId, SettingsUpdate, TrackId};

// ============================================================================
// Reports and status
// ============================================================================

/// Severity of a user-visible advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Advisory returned from dispatch. The front end decides how to show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub level: StatusLevel,
    pub message: String,
}

/// One entry returned by the platform file picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    pub source: String,
    pub name: String,
}

impl FileSelection {
    pub fn new(source: impl Into<String>, name: impl Into<String>) -> Self {
        Self { source: source.into(), name: name.into() }
    }
}

/// Per-track failure recorded by a best-effort operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackFailure {
    /// Track id when the track exists; None when it could not be created
    pub track: Option<TrackId>,
    pub name: String,
    pub reason: String,
}

/// Outcome of importing a batch of file selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub requested: usize,
    pub loaded: Vec<TrackId>,
    pub failures: Vec<TrackFailure>,
}

impl ImportReport {
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }
}

/// Outcome of a play/pause broadcast over every track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub failures: Vec<TrackFailure>,
}

impl BroadcastReport {
    pub fn succeeded(&self) -> usize {
        self.attempted.saturating_sub(self.failures.len())
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

// ============================================================================
// DispatchResult
// ============================================================================

/// Result of dispatching an action: advisories and outputs for the front end.
#[derive(Debug, Clone, Default)]
pub struct DispatchResult {
    pub status: Vec<StatusEvent>,
    /// The mixer's track collection changed (drives auto-save and re-estimation)
    pub tracks_changed: bool,
    /// Track created by `TrackAction::Add`
    pub added_track: Option<TrackId>,
    /// Project created, saved or loaded by this action
    pub project: Option<ProjectId>,
    /// Serialized snapshot produced by `ProjectAction::Export`
    pub export: Option<String>,
    pub import: Option<ImportReport>,
    pub broadcast: Option<BroadcastReport>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_status(level: StatusLevel, message: impl Into<String>) -> Self {
        let mut r = Self::default();
        r.push_status(level, message);
        r
    }

    pub fn changed() -> Self {
        Self { tracks_changed: true, ..Self::default() }
    }

    pub fn push_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status.push(StatusEvent { level, message: message.into() });
    }

    pub fn has_errors(&self) -> bool {
        self.status.iter().any(|s| s.level == StatusLevel::Error)
    }

    pub fn merge(&mut self, other: DispatchResult) {
        self.status.extend(other.status);
        self.tracks_changed |= other.tracks_changed;
        if other.added_track.is_some() {
            self.added_track = other.added_track;
        }
        if other.project.is_some() {
            self.project = other.project;
        }
        if other.export.is_some() {
            self.export = other.export;
        }
        if other.import.is_some() {
            self.import = other.import;
        }
        if other.broadcast.is_some() {
            self.broadcast = other.broadcast;
        }
    }
}

// ============================================================================
// Domain-specific action enums
// ============================================================================

/// Track actions. `Add` and `Import` need the playback backend; the rest are
/// pure mixer mutations (plus a forwarded volume/close for the backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackAction {
    Add { source: String, name: String },
    Import(Vec<FileSelection>),
    Remove(TrackId),
    SetVolume(TrackId, f32),
    /// Mixer row +/- buttons
    AdjustVolume(TrackId, f32),
    ToggleMute(TrackId),
    ToggleSolo(TrackId),
    ApplyEffect(TrackId, EffectParams),
}

/// Mixer-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MixerAction {
    SetMasterVolume(f32),
    SetBpm(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportAction {
    PlayAll,
    PauseAll,
    TogglePlayback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProjectAction {
    /// Create a project from the current mixer tracks
    Create { name: String },
    /// Create "Project N" where N follows the current project count
    New,
    /// Save the current project with the current mixer tracks
    Save,
    Load(ProjectId),
    Delete(ProjectId),
    /// Export the current project
    Export,
    UpdateSettings(SettingsUpdate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceAction {
    Toggle,
    Set(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    None,
    Track(TrackAction),
    Mixer(MixerAction),
    Transport(TransportAction),
    Project(ProjectAction),
    Performance(PerformanceAction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_latest_outputs() {
        let mut a = DispatchResult::with_status(StatusLevel::Info, "a");
        a.project = Some(ProjectId::new(1));
        let mut b = DispatchResult::changed();
        b.push_status(StatusLevel::Error, "b");
        b.project = Some(ProjectId::new(2));
        a.merge(b);
        assert!(a.tracks_changed);
        assert_eq!(a.status.len(), 2);
        assert!(a.has_errors());
        assert_eq!(a.project, Some(ProjectId::new(2)));
    }

    #[test]
    fn broadcast_counts() {
        let report = BroadcastReport {
            attempted: 3,
            failures: vec![TrackFailure { track: Some(TrackId::new(1)), name: "Bass".into(), reason: "gone".into() }],
        };
        assert_eq!(report.succeeded(), 2);
        assert!(!report.is_clean());
    }
}
