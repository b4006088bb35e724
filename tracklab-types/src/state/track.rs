use serde::{Deserialize, Serialize};

use super::effect::{AudioEffect, EffectType};
use crate::TrackId;

/// One audio source in the mixer plus its volume/mute/effect configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    pub id: TrackId,
    pub name: String,
    /// URI or path handed to the playback backend
    #[serde(rename = "filePath")]
    pub source: String,
    /// 0.0 - 1.0
    pub volume: f32,
    /// Reserved; not applied by playback
    pub pan: f32,
    /// Seconds; not populated by the current backends
    pub duration: f32,
    #[serde(rename = "isMuted")]
    pub muted: bool,
    /// Flag only; solo is not enforced on playback
    #[serde(rename = "isSolo")]
    pub solo: bool,
    /// At most one effect per `EffectType`, in application order
    pub effects: Vec<AudioEffect>,
}

impl AudioTrack {
    pub fn new(id: TrackId, name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            source: source.into(),
            volume: 1.0,
            pan: 0.0,
            duration: 0.0,
            muted: false,
            solo: false,
            effects: Vec::new(),
        }
    }

    pub fn set_volume(&mut self, value: f32) {
        self.volume = clamp_unit(value);
    }

    pub fn adjust_volume(&mut self, delta: f32) {
        self.set_volume(self.volume + delta);
    }

    pub fn effect(&self, effect_type: EffectType) -> Option<&AudioEffect> {
        self.effects.iter().find(|e| e.effect_type() == effect_type)
    }

    /// Apply an effect. An existing effect of the same type is replaced in place
    /// and returned; otherwise the effect is appended.
    pub fn apply_effect(&mut self, effect: AudioEffect) -> Option<AudioEffect> {
        match self
            .effects
            .iter_mut()
            .find(|e| e.effect_type() == effect.effect_type())
        {
            Some(slot) => Some(std::mem::replace(slot, effect)),
            None => {
                self.effects.push(effect);
                None
            }
        }
    }

    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }
}

/// Clamp to [0, 1]; NaN maps to 0.
pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
