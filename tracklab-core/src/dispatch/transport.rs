use tracklab_types::{BroadcastReport, DispatchResult, TransportAction};

use crate::state::StudioState;

use super::side_effects::PlaybackSideEffect;

pub(super) fn dispatch_transport(
    action: TransportAction,
    state: &mut StudioState,
    effects: &mut Vec<PlaybackSideEffect>,
) -> DispatchResult {
    match action {
        TransportAction::PlayAll => play_all(state, effects),
        TransportAction::PauseAll => pause_all(state, effects),
        TransportAction::TogglePlayback => {
            if state.mixer.is_playing {
                pause_all(state, effects)
            } else {
                play_all(state, effects)
            }
        }
    }
}

/// Queue a play for every unmuted track that has a handle.
fn play_all(state: &mut StudioState, effects: &mut Vec<PlaybackSideEffect>) -> DispatchResult {
    for track in state.mixer.tracks.iter().filter(|t| !t.muted) {
        if let Some(handle) = state.playback.get(track.id) {
            effects.push(PlaybackSideEffect::Play {
                track: track.id,
                name: track.name.clone(),
                handle,
            });
        }
    }
    state.mixer.is_playing = true;
    broadcast_result()
}

/// Queue a pause for every handle, muted or not.
fn pause_all(state: &mut StudioState, effects: &mut Vec<PlaybackSideEffect>) -> DispatchResult {
    for track in &state.mixer.tracks {
        if let Some(handle) = state.playback.get(track.id) {
            effects.push(PlaybackSideEffect::Pause {
                track: track.id,
                name: track.name.clone(),
                handle,
            });
        }
    }
    state.mixer.is_playing = false;
    broadcast_result()
}

fn broadcast_result() -> DispatchResult {
    DispatchResult {
        broadcast: Some(BroadcastReport::default()),
        ..DispatchResult::default()
    }
}
