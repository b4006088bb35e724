//! PlaybackSideEffect: playback calls produced by dispatchers.
//!
//! Dispatch functions push side effects into a `Vec<PlaybackSideEffect>`
//! instead of calling the backend for anything that does not need an
//! immediate answer. `apply_side_effects` runs them in order after dispatch
//! returns and folds any play/pause failures into the result.

use tracklab_types::{BroadcastReport, DispatchResult, StatusLevel, TrackFailure, TrackId};

use crate::error::{PlaybackError, StudioError};
use crate::playback::{PlaybackBackend, PlaybackHandle};

/// A deferred playback call produced during action dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackSideEffect {
    SetVolume {
        track: TrackId,
        handle: PlaybackHandle,
        volume: f32,
    },
    Play {
        track: TrackId,
        name: String,
        handle: PlaybackHandle,
    },
    Pause {
        track: TrackId,
        name: String,
        handle: PlaybackHandle,
    },
}

/// Apply every effect, one at a time. A failing call never stops the rest.
pub fn apply_side_effects(
    effects: &[PlaybackSideEffect],
    backend: &mut dyn PlaybackBackend,
    result: &mut DispatchResult,
) {
    for effect in effects {
        apply_one(effect, backend, result);
    }

    let summary = result
        .broadcast
        .as_ref()
        .filter(|report| !report.is_clean())
        .map(|report| {
            format!(
                "{} of {} tracks did not respond",
                report.failures.len(),
                report.attempted
            )
        });
    if let Some(message) = summary {
        result.push_status(StatusLevel::Warning, message);
    }
}

fn apply_one(
    effect: &PlaybackSideEffect,
    backend: &mut dyn PlaybackBackend,
    result: &mut DispatchResult,
) {
    match effect {
        PlaybackSideEffect::SetVolume { track, handle, volume } => {
            if let Err(e) = backend.set_volume(*handle, *volume) {
                log::warn!(target: "playback", "set_volume on {} failed: {}", track, e);
            }
        }
        PlaybackSideEffect::Play { track, name, handle } => {
            let outcome = backend.play(*handle);
            record(result, *track, name, outcome);
        }
        PlaybackSideEffect::Pause { track, name, handle } => {
            let outcome = backend.pause(*handle);
            record(result, *track, name, outcome);
        }
    }
}

fn record(
    result: &mut DispatchResult,
    track: TrackId,
    name: &str,
    outcome: Result<(), PlaybackError>,
) {
    let report = result.broadcast.get_or_insert_with(BroadcastReport::default);
    report.attempted += 1;
    if let Err(source) = outcome {
        let err = StudioError::Playback { track, source };
        log::warn!(target: "playback", "{}", err);
        report.failures.push(TrackFailure {
            track: Some(track),
            name: name.to_string(),
            reason: err.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::MemoryBackend;

    #[test]
    fn failures_do_not_stop_siblings() {
        let mut backend = MemoryBackend::new();
        backend.fail_transport("b.wav");
        let a = backend.open("a.wav").unwrap();
        let b = backend.open("b.wav").unwrap();
        let c = backend.open("c.wav").unwrap();

        let effects: Vec<_> = [(0, "a", a), (1, "b", b), (2, "c", c)]
            .into_iter()
            .map(|(i, name, handle)| PlaybackSideEffect::Play {
                track: TrackId::new(i),
                name: name.to_string(),
                handle,
            })
            .collect();

        let mut result = DispatchResult::none();
        apply_side_effects(&effects, &mut backend, &mut result);

        let report = result.broadcast.unwrap();
        assert_eq!(report.attempted, 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failures[0].track, Some(TrackId::new(1)));
        assert!(backend.is_playing("a.wav"));
        assert!(backend.is_playing("c.wav"));
        assert_eq!(result.status[0].level, StatusLevel::Warning);
    }

    #[test]
    fn volume_reaches_the_handle() {
        let mut backend = MemoryBackend::new();
        let h = backend.open("a.wav").unwrap();
        let mut result = DispatchResult::none();
        apply_side_effects(
            &[PlaybackSideEffect::SetVolume { track: TrackId::new(0), handle: h, volume: 0.25 }],
            &mut backend,
            &mut result,
        );
        assert_eq!(backend.state(h).unwrap().volume, 0.25);
        assert!(result.broadcast.is_none());
        assert!(result.status.is_empty());
    }
}
