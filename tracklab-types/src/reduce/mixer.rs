use super::Reduction;
use crate::{MixerAction, MixerState};

pub(super) fn reduce(action: &MixerAction, mixer: &mut MixerState) -> Reduction {
    match action {
        MixerAction::SetMasterVolume(value) => {
            mixer.set_master_volume(*value);
            Reduction::MixerChanged
        }
        MixerAction::SetBpm(bpm) => {
            mixer.set_bpm(*bpm);
            Reduction::MixerChanged
        }
    }
}
