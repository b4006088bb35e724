use tracklab_types::{
    Action, AudioTrack, DispatchResult, FileSelection, ImportReport, StatusLevel, TrackAction,
    TrackFailure, TrackId,
};

use crate::error::{Result, StudioError};
use crate::playback::PlaybackBackend;
use crate::state::StudioState;

use super::side_effects::PlaybackSideEffect;

/// Track actions that need the backend: add, import and remove.
pub(super) fn dispatch_track(
    action: &TrackAction,
    state: &mut StudioState,
    backend: &mut dyn PlaybackBackend,
) -> DispatchResult {
    match action {
        TrackAction::Add { source, name } => match add_track(state, backend, source, name) {
            Ok(id) => {
                let mut result = DispatchResult::changed();
                result.added_track = Some(id);
                result
            }
            Err(e) => DispatchResult::with_status(StatusLevel::Error, e.to_string()),
        },
        TrackAction::Import(files) => {
            let report = import_tracks(state, backend, files);
            let mut result = DispatchResult::none();
            result.tracks_changed = !report.loaded.is_empty();
            if let Some((level, message)) = import_summary(&report) {
                result.push_status(level, message);
            }
            result.import = Some(report);
            result
        }
        TrackAction::Remove(id) => match remove_track(state, backend, *id) {
            Some(_) => DispatchResult::changed(),
            None => DispatchResult::none(),
        },
        // Reducible; handled before we get here
        _ => DispatchResult::none(),
    }
}

/// Open `source` and append a track for it. Nothing is added when the
/// backend cannot open the source.
pub fn add_track(
    state: &mut StudioState,
    backend: &mut dyn PlaybackBackend,
    source: &str,
    name: &str,
) -> Result<TrackId> {
    let handle = backend.open(source).map_err(|e| {
        log::warn!(target: "track", "cannot load '{}': {}", name, e);
        StudioError::SourceLoad { name: name.to_string(), reason: e.to_string() }
    })?;
    let id = state.mixer.add_track(name, source);
    state.playback.insert(id, handle);
    log::info!(target: "track", "added {} '{}'", id, name);
    Ok(id)
}

/// Load each selection independently.
pub fn import_tracks(
    state: &mut StudioState,
    backend: &mut dyn PlaybackBackend,
    files: &[FileSelection],
) -> ImportReport {
    let mut report = ImportReport { requested: files.len(), ..ImportReport::default() };
    for file in files {
        match add_track(state, backend, &file.source, &file.name) {
            Ok(id) => report.loaded.push(id),
            Err(e) => report.failures.push(TrackFailure {
                track: None,
                name: file.name.clone(),
                reason: e.to_string(),
            }),
        }
    }
    report
}

fn import_summary(report: &ImportReport) -> Option<(StatusLevel, String)> {
    let loaded = report.loaded_count();
    match (report.requested, loaded) {
        (0, _) => None,
        (requested, loaded) if loaded == requested => Some((
            StatusLevel::Success,
            format!("{} track(s) imported", loaded),
        )),
        (_, 0) => Some((StatusLevel::Error, "No files could be imported".to_string())),
        (requested, loaded) => Some((
            StatusLevel::Warning,
            format!("Imported {} of {} files", loaded, requested),
        )),
    }
}

/// Close the track's handle, then drop the track. Unknown ids are ignored.
pub fn remove_track(
    state: &mut StudioState,
    backend: &mut dyn PlaybackBackend,
    id: TrackId,
) -> Option<AudioTrack> {
    state.mixer.track(id)?;
    if let Some(handle) = state.playback.take(id) {
        if let Err(e) = backend.close(handle) {
            log::warn!(target: "track", "closing {} failed: {}", id, e);
        }
    }
    let removed = state.mixer.remove_track(id);
    log::info!(target: "track", "removed {}", id);
    removed
}

/// After a reduced volume change, push the new level to the track's handle.
pub(super) fn forward_volume(
    action: &Action,
    state: &StudioState,
    effects: &mut Vec<PlaybackSideEffect>,
) {
    let id = match action {
        Action::Track(TrackAction::SetVolume(id, _)) | Action::Track(TrackAction::AdjustVolume(id, _)) => *id,
        _ => return,
    };
    if let (Some(track), Some(handle)) = (state.mixer.track(id), state.playback.get(id)) {
        effects.push(PlaybackSideEffect::SetVolume { track: id, handle, volume: track.volume });
    }
}
