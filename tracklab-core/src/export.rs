//! JSON snapshot of a project for sharing. Writing the string anywhere is
//! the caller's business.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracklab_types::AudioProject;

use crate::error::{Result, StudioError};

pub const EXPORT_VERSION: &str = "1.0.0";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectExport<'a> {
    #[serde(flatten)]
    project: &'a AudioProject,
    export_date: String,
    version: &'static str,
    platform: &'static str,
}

pub fn export_project(project: &AudioProject) -> Result<String> {
    export_project_at(project, Utc::now())
}

/// Export with an explicit timestamp.
pub fn export_project_at(project: &AudioProject, at: DateTime<Utc>) -> Result<String> {
    let snapshot = ProjectExport {
        project,
        export_date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        version: EXPORT_VERSION,
        platform: std::env::consts::OS,
    };
    serde_json::to_string_pretty(&snapshot).map_err(|e| {
        log::error!(target: "export", "export of {} failed: {}", project.id, e);
        StudioError::ExportFailure(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::UNIX_EPOCH;
    use tracklab_types::{AudioTrack, ProjectId, ProjectSettings, TrackId};

    fn project() -> AudioProject {
        AudioProject {
            id: ProjectId::new(3),
            name: "Demo".into(),
            created_at: UNIX_EPOCH,
            last_saved: UNIX_EPOCH,
            tracks: vec![AudioTrack::new(TrackId::new(0), "Drums", "drums.wav")],
            bpm: 128,
            user_id: "user_1".into(),
            settings: ProjectSettings::default(),
        }
    }

    #[test]
    fn snapshot_carries_metadata() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let json = export_project_at(&project(), at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["exportDate"], "2024-05-01T12:30:00.000Z");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["platform"], std::env::consts::OS);
        assert_eq!(value["name"], "Demo");
        assert_eq!(value["bpm"], 128);
        assert_eq!(value["tracks"][0]["name"], "Drums");
        assert_eq!(value["settings"]["autoSave"], true);
    }

    #[test]
    fn export_date_parses_as_rfc3339() {
        let json = export_project(&project()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let date = value["exportDate"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(date).is_ok());
    }
}
