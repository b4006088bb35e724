mod common;

use common::Studio;
use tracklab_types::{
    Action, ProjectAction, ProjectId, SettingsUpdate, StatusLevel, TrackAction,
};

#[test]
fn test_first_launch_project_is_current() {
    let studio = Studio::new();
    assert_eq!(studio.state.projects.len(), 1);
    assert_eq!(studio.state.projects.current().unwrap().name, "My First Project");
}

#[test]
fn test_first_project_name_from_config() {
    let studio = Studio::with_config("[defaults]\nfirst_project_name = \"Sketchbook\"\n");
    assert_eq!(studio.state.projects.current().unwrap().name, "Sketchbook");
}

#[test]
fn test_create_save_load_round_trips_tracks() {
    let mut studio = Studio::with_config("[runtime]\nauto_save = false\n");
    studio.add("Drums");
    studio.add("Bass");

    let created = studio
        .dispatch(Action::Project(ProjectAction::Create { name: "Demo".into() }))
        .project
        .unwrap();
    studio.add("Keys");
    let saved = studio.dispatch(Action::Project(ProjectAction::Save));
    assert_eq!(saved.project, Some(created));

    let other = studio.dispatch(Action::Project(ProjectAction::New)).project.unwrap();
    assert_eq!(studio.state.projects.current_id(), Some(other));

    let loaded = studio.dispatch(Action::Project(ProjectAction::Load(created)));
    assert_eq!(loaded.project, Some(created));
    let project = studio.state.projects.current().unwrap();
    assert_eq!(project.id, created);
    assert_eq!(project.tracks, studio.state.mixer.tracks);
}

#[test]
fn test_saved_project_is_an_independent_copy() {
    let mut studio = Studio::with_config("[runtime]\nauto_save = false\n");
    let id = studio.add("Drums");
    studio.dispatch(Action::Project(ProjectAction::Save));
    studio.dispatch(Action::Track(TrackAction::SetVolume(id, 0.2)));
    let saved = &studio.state.projects.current().unwrap().tracks[0];
    assert_eq!(saved.volume, 1.0);
}

#[test]
fn test_load_unknown_is_advisory_only() {
    let mut studio = Studio::new();
    let before = studio.state.projects.current_id();
    let result = studio.dispatch(Action::Project(ProjectAction::Load(ProjectId::new(77))));
    assert_eq!(result.status[0].level, StatusLevel::Warning);
    assert_eq!(studio.state.projects.current_id(), before);
}

#[test]
fn test_delete_current_clears_pointer() {
    let mut studio = Studio::new();
    let first = studio.state.projects.current_id().unwrap();
    let second = studio.dispatch(Action::Project(ProjectAction::New)).project.unwrap();

    studio.dispatch(Action::Project(ProjectAction::Delete(first)));
    assert_eq!(studio.state.projects.current_id(), Some(second));

    studio.dispatch(Action::Project(ProjectAction::Delete(second)));
    assert_eq!(studio.state.projects.current_id(), None);
    assert!(studio.state.projects.is_empty());
}

#[test]
fn test_delete_unknown_leaves_list() {
    let mut studio = Studio::new();
    let result = studio.dispatch(Action::Project(ProjectAction::Delete(ProjectId::new(9))));
    assert_eq!(result.status[0].level, StatusLevel::Warning);
    assert_eq!(studio.state.projects.len(), 1);
}

#[test]
fn test_new_project_is_numbered_after_count() {
    let mut studio = Studio::new();
    studio.dispatch(Action::Project(ProjectAction::New));
    studio.dispatch(Action::Project(ProjectAction::New));
    let names: Vec<_> = studio.state.projects.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Project 3", "Project 2", "My First Project"]);
}

#[test]
fn test_projects_ordered_most_recently_saved_first() {
    let mut studio = Studio::new();
    let first = studio.state.projects.current_id().unwrap();
    studio.dispatch(Action::Project(ProjectAction::New));
    studio.dispatch(Action::Project(ProjectAction::Load(first)));
    studio.dispatch(Action::Project(ProjectAction::Save));
    assert_eq!(studio.state.projects.projects()[0].id, first);
}

#[test]
fn test_auto_save_follows_every_track_change() {
    let mut studio = Studio::new();
    let a = studio.add("A");
    studio.add("B");
    assert_eq!(studio.current_track_names(), vec!["A", "B"]);

    studio.dispatch(Action::Track(TrackAction::ToggleMute(a)));
    assert!(studio.state.projects.current().unwrap().tracks[0].muted);

    studio.dispatch(Action::Track(TrackAction::Remove(a)));
    assert_eq!(studio.current_track_names(), vec!["B"]);
}

#[test]
fn test_auto_save_after_last_track_removed() {
    let mut studio = Studio::new();
    let a = studio.add("A");
    studio.dispatch(Action::Track(TrackAction::Remove(a)));
    assert!(studio.current_track_names().is_empty());
}

#[test]
fn test_auto_save_respects_setting() {
    let mut studio = Studio::new();
    studio.dispatch(Action::Project(ProjectAction::UpdateSettings(SettingsUpdate {
        auto_save: Some(false),
        ..Default::default()
    })));
    studio.add("A");
    assert!(studio.current_track_names().is_empty());
}

#[test]
fn test_no_auto_save_without_current_project() {
    let mut studio = Studio::new();
    let only = studio.state.projects.current_id().unwrap();
    studio.dispatch(Action::Project(ProjectAction::Delete(only)));
    let result = studio.dispatch(Action::Track(TrackAction::Add {
        source: "a.wav".into(),
        name: "A".into(),
    }));
    assert!(!result.has_errors());
    assert!(studio.state.projects.is_empty());
}

#[test]
fn test_update_settings_merges_and_mirrors() {
    let mut studio = Studio::new();
    let result = studio.dispatch(Action::Project(ProjectAction::UpdateSettings(SettingsUpdate {
        master_volume: Some(0.6),
        metronome: Some(true),
        ..Default::default()
    })));
    assert!(result.project.is_some());
    let settings = studio.state.projects.current().unwrap().settings;
    assert!(settings.metronome);
    assert!(settings.auto_save);
    assert!((settings.master_volume - 0.6).abs() < 1e-6);
    assert!((studio.state.mixer.master_volume - 0.6).abs() < 1e-6);
}

#[test]
fn test_save_without_current_reports_failure() {
    let mut studio = Studio::new();
    let only = studio.state.projects.current_id().unwrap();
    studio.dispatch(Action::Project(ProjectAction::Delete(only)));
    let result = studio.dispatch(Action::Project(ProjectAction::Save));
    assert!(result.has_errors());
    assert!(studio.state.projects.is_empty());
}

#[test]
fn test_export_current_project() {
    let mut studio = Studio::new();
    studio.add("Drums");
    let result = studio.dispatch(Action::Project(ProjectAction::Export));
    let json: serde_json::Value = serde_json::from_str(&result.export.unwrap()).unwrap();
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(json["name"], "My First Project");
    assert_eq!(json["tracks"][0]["name"], "Drums");
    assert!(json["exportDate"].is_string());
    assert!(json["platform"].is_string());
}

#[test]
fn test_export_without_project() {
    let mut studio = Studio::new();
    let only = studio.state.projects.current_id().unwrap();
    studio.dispatch(Action::Project(ProjectAction::Delete(only)));
    let result = studio.dispatch(Action::Project(ProjectAction::Export));
    assert!(result.export.is_none());
    assert_eq!(result.status[0].level, StatusLevel::Warning);
}

#[test]
fn test_loading_project_adopts_its_master_volume() {
    let mut studio = Studio::new();
    let first = studio.state.projects.current_id().unwrap();
    studio.dispatch(Action::Project(ProjectAction::UpdateSettings(SettingsUpdate {
        master_volume: Some(0.4),
        ..Default::default()
    })));
    studio.dispatch(Action::Project(ProjectAction::New));
    studio.dispatch(Action::Project(ProjectAction::UpdateSettings(SettingsUpdate {
        master_volume: Some(0.9),
        ..Default::default()
    })));
    assert!((studio.state.mixer.master_volume - 0.9).abs() < 1e-6);

    let result = studio.dispatch(Action::Project(ProjectAction::Load(first)));
    assert!((studio.state.mixer.master_volume - 0.4).abs() < 1e-6);
    assert!(result.status[0].message.contains("(0 tracks)"));
}
