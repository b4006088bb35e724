use super::Reduction;
use crate::{MixerState, TrackAction};

pub(super) fn reduce(action: &TrackAction, mixer: &mut MixerState) -> Reduction {
    match action {
        TrackAction::SetVolume(id, value) => match mixer.track_mut(*id) {
            Some(track) => {
                track.set_volume(*value);
                Reduction::TracksChanged
            }
            None => Reduction::Unchanged,
        },
        TrackAction::AdjustVolume(id, delta) => match mixer.track_mut(*id) {
            Some(track) => {
                track.adjust_volume(*delta);
                Reduction::TracksChanged
            }
            None => Reduction::Unchanged,
        },
        TrackAction::ToggleMute(id) => match mixer.track_mut(*id) {
            Some(track) => {
                track.muted = !track.muted;
                Reduction::TracksChanged
            }
            None => Reduction::Unchanged,
        },
        TrackAction::ToggleSolo(id) => match mixer.track_mut(*id) {
            Some(track) => {
                track.solo = !track.solo;
                Reduction::TracksChanged
            }
            None => Reduction::Unchanged,
        },
        TrackAction::ApplyEffect(id, params) => match mixer.apply_effect(*id, *params) {
            Some(_) => Reduction::TracksChanged,
            None => Reduction::Unchanged,
        },
        TrackAction::Add { .. } | TrackAction::Import(_) | TrackAction::Remove(_) => {
            Reduction::NotReducible
        }
    }
}
