//! Project model: a named, timestamped snapshot of a track list plus settings.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use super::track::{clamp_unit, AudioTrack};
use crate::ProjectId;

/// Per-project settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSettings {
    pub master_volume: f32,
    pub metronome: bool,
    pub auto_save: bool,
    pub performance_mode: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            metronome: false,
            auto_save: true,
            performance_mode: false,
        }
    }
}

/// Partial settings; `None` fields are left untouched by `apply_to`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub master_volume: Option<f32>,
    pub metronome: Option<bool>,
    pub auto_save: Option<bool>,
    pub performance_mode: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, settings: &mut ProjectSettings) {
        if let Some(v) = self.master_volume {
            settings.master_volume = clamp_unit(v);
        }
        if let Some(v) = self.metronome {
            settings.metronome = v;
        }
        if let Some(v) = self.auto_save {
            settings.auto_save = v;
        }
        if let Some(v) = self.performance_mode {
            settings.performance_mode = v;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioProject {
    pub id: ProjectId,
    pub name: String,
    #[serde(with = "rfc3339")]
    pub created_at: SystemTime,
    #[serde(with = "rfc3339")]
    pub last_saved: SystemTime,
    /// Independent copy of the mixer's tracks at save time
    pub tracks: Vec<AudioTrack>,
    pub bpm: u16,
    pub user_id: String,
    pub settings: ProjectSettings,
}

impl AudioProject {
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

/// `SystemTime` as an RFC 3339 UTC string with millisecond precision,
/// e.g. `2023-11-14T22:13:20.123Z`.
pub mod rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::SystemTime;

    pub fn format(time: &SystemTime) -> String {
        DateTime::<Utc>::from(*time).to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SystemTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(SystemTime::from)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn settings_defaults() {
        let s = ProjectSettings::default();
        assert_eq!(s.master_volume, 1.0);
        assert!(!s.metronome);
        assert!(s.auto_save);
        assert!(!s.performance_mode);
    }

    #[test]
    fn partial_update_merges() {
        let mut s = ProjectSettings::default();
        let update = SettingsUpdate { metronome: Some(true), master_volume: Some(1.7), ..Default::default() };
        update.apply_to(&mut s);
        assert!(s.metronome);
        assert_eq!(s.master_volume, 1.0);
        assert!(s.auto_save);
        assert!(SettingsUpdate::default().is_empty());
        assert!(!update.is_empty());
    }

    #[test]
    fn update_uses_camel_case_keys() {
        let update: SettingsUpdate =
            serde_json::from_str(r#"{"masterVolume": 0.5, "performanceMode": true}"#).unwrap();
        assert_eq!(update.master_volume, Some(0.5));
        assert_eq!(update.performance_mode, Some(true));
        assert_eq!(update.auto_save, None);
        let json = serde_json::to_value(update).unwrap();
        assert_eq!(json["masterVolume"], 0.5);
        assert!(json.get("master_volume").is_none());
    }

    #[test]
    fn timestamps_serialize_as_iso_strings() {
        let at = UNIX_EPOCH + Duration::from_millis(1_700_000_000_123);
        let project = AudioProject {
            id: ProjectId::new(1),
            name: "Demo".into(),
            created_at: at,
            last_saved: at,
            tracks: vec![AudioTrack::new(crate::TrackId::new(0), "Kick", "kick.wav")],
            bpm: 120,
            user_id: "user_1".into(),
            settings: ProjectSettings::default(),
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20.123Z");
        assert_eq!(json["lastSaved"], "2023-11-14T22:13:20.123Z");
        assert_eq!(json["settings"]["autoSave"], true);
        assert_eq!(json["tracks"][0]["filePath"], "kick.wav");
        assert_eq!(json["tracks"][0]["isMuted"], false);
        assert_eq!(json["tracks"][0]["isSolo"], false);
        let back: AudioProject = serde_json::from_value(json).unwrap();
        assert_eq!(back, project);
    }
}
