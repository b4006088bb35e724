//! Pure state-mutation reducers for the studio mixer.
//!
//! These functions are the single source of truth for action → mixer mutations.
//! tracklab-core dispatch calls into this module for everything that does not
//! need the playback backend.
//!
//! Reducers are pure: they mutate `MixerState` only.
//! They do NOT:
//! - Talk to the playback backend (open/play/pause/close)
//! - Auto-save projects
//! - Produce user-visible advisories

mod mixer;
mod track;

use crate::{Action, MixerState, TrackAction};

/// What a reducer did to the mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// The action needs the backend or project store; caller must handle it
    NotReducible,
    /// Handled, nothing changed (e.g. unknown track id)
    Unchanged,
    /// Mixer-wide fields changed; the track collection did not
    MixerChanged,
    /// The track collection changed
    TracksChanged,
}

impl Reduction {
    pub fn handled(self) -> bool {
        self != Reduction::NotReducible
    }

    pub fn tracks_changed(self) -> bool {
        self == Reduction::TracksChanged
    }
}

/// Check whether an action can be applied without the playback backend.
pub fn is_reducible(action: &Action) -> bool {
    match action {
        Action::None => true,
        Action::Track(a) => !matches!(
            a,
            TrackAction::Add { .. } | TrackAction::Import(_) | TrackAction::Remove(_)
        ),
        Action::Mixer(_) => true,
        Action::Transport(_) => false,
        Action::Project(_) => false,
        Action::Performance(_) => false,
    }
}

/// Apply an action's mixer mutations.
pub fn reduce_action(action: &Action, mixer: &mut MixerState) -> Reduction {
    if !is_reducible(action) {
        return Reduction::NotReducible;
    }
    match action {
        Action::None => Reduction::Unchanged,
        Action::Track(a) => track::reduce(a, mixer),
        Action::Mixer(a) => mixer::reduce(a, mixer),
        Action::Transport(_) | Action::Project(_) | Action::Performance(_) => {
            Reduction::NotReducible
        }
    }
}
