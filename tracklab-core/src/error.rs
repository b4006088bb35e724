//! Error types for the studio core.

use thiserror::Error;
use tracklab_types::{ProjectId, TrackId};

/// Failure reported by a playback backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The source could not be opened (missing file, unsupported format, ...)
    #[error("cannot open '{source_ref}': {reason}")]
    Open { source_ref: String, reason: String },

    /// The handle is unknown to the backend or was already closed
    #[error("playback handle {0} is not loaded")]
    NotLoaded(u64),

    #[error("playback backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum StudioError {
    /// A track's source could not be opened; the track was not added
    #[error("could not load '{name}': {reason}")]
    SourceLoad { name: String, reason: String },

    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("could not save project: {0}")]
    SaveFailure(String),

    #[error("could not export project: {0}")]
    ExportFailure(String),

    /// A single track failed during a play/pause broadcast
    #[error("playback failed on {track}: {source}")]
    Playback {
        track: TrackId,
        #[source]
        source: PlaybackError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
