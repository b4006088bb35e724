//! # tracklab-types
//!
//! Shared type definitions for the tracklab studio.
//! This crate contains the plain data model (tracks, effects, mixer, projects),
//! the action enums that describe user intents, and the pure reducers that
//! apply those intents to a `MixerState`. It has no I/O and no playback.

pub mod action;
mod dispatch;
pub mod reduce;
pub mod state;

pub use action::*;
pub use dispatch::Dispatcher;

// Re-export all state types at crate root for convenience
pub use state::*;

/// Unique identifier for a track in the mixer. Never reused within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TrackId(u32);

impl TrackId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "track_{}", self.0)
    }
}

/// Unique identifier for an applied effect.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct EffectId(u32);

impl EffectId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fx_{}", self.0)
    }
}

/// Unique identifier for a project held by the project store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "project_{}", self.0)
    }
}
