mod local;
mod performance;
mod project;
pub mod side_effects;
mod track;
mod transport;

pub use local::LocalDispatcher;
pub use side_effects::{apply_side_effects, PlaybackSideEffect};
pub use track::{add_track, import_tracks, remove_track};

use tracklab_types::reduce::reduce_action;
use tracklab_types::{Action, DispatchResult, StatusLevel};

use crate::playback::PlaybackBackend;
use crate::state::StudioState;

/// Dispatch an action. Returns a DispatchResult with advisories and outputs
/// for the front end.
///
/// Calls that need an answer (open, close) go to `backend` directly. Play,
/// pause and volume calls are collected into `effects`; the caller applies
/// them with `apply_side_effects` after dispatch returns.
///
/// Any change to the track collection auto-saves the current project (when
/// its settings allow) and re-checks performance.
pub fn dispatch_action(
    action: &Action,
    state: &mut StudioState,
    backend: &mut dyn PlaybackBackend,
    effects: &mut Vec<PlaybackSideEffect>,
) -> DispatchResult {
    let reduction = reduce_action(action, &mut state.mixer);

    let mut result = if reduction.handled() {
        track::forward_volume(action, state, effects);
        DispatchResult {
            tracks_changed: reduction.tracks_changed(),
            ..DispatchResult::default()
        }
    } else {
        match action {
            Action::Track(a) => track::dispatch_track(a, state, backend),
            Action::Transport(a) => transport::dispatch_transport(*a, state, effects),
            Action::Project(a) => project::dispatch_project(a, state),
            Action::Performance(a) => performance::dispatch_performance(*a, state),
            Action::None | Action::Mixer(_) => DispatchResult::none(),
        }
    };

    if result.tracks_changed {
        auto_save(state, &mut result);
        performance::observe(state, &mut result);
    }

    result
}

fn auto_save(state: &mut StudioState, result: &mut DispatchResult) {
    let enabled = state
        .projects
        .current()
        .is_some_and(|p| p.settings.auto_save);
    if !enabled {
        return;
    }
    match state.projects.save_current(&state.mixer) {
        Ok(id) => log::debug!(target: "project", "auto-saved {}", id),
        Err(e) => {
            log::warn!(target: "project", "auto-save failed: {}", e);
            result.push_status(StatusLevel::Error, e.to_string());
        }
    }
}
