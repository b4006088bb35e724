use tracklab_types::{DispatchResult, ProjectAction, ProjectSettings, SettingsUpdate, StatusLevel};

use crate::export::export_project;
use crate::state::StudioState;

pub(super) fn dispatch_project(action: &ProjectAction, state: &mut StudioState) -> DispatchResult {
    match action {
        ProjectAction::Create { name } => {
            let id = state.projects.create(name, state.mixer.tracks.clone());
            created(state, id)
        }
        ProjectAction::New => {
            let name = state.projects.new_project_name();
            let id = state.projects.create(&name, Vec::new());
            created(state, id)
        }
        ProjectAction::Save => match state.projects.save_current(&state.mixer) {
            Ok(id) => {
                let mut result = DispatchResult::with_status(StatusLevel::Success, "Project saved");
                result.project = Some(id);
                result
            }
            Err(e) => {
                log::error!(target: "project", "{}", e);
                DispatchResult::with_status(StatusLevel::Error, e.to_string())
            }
        },
        ProjectAction::Load(id) => match state.projects.load(*id) {
            Ok(project) => {
                let message =
                    format!("Loaded '{}' ({} tracks)", project.name, project.track_count());
                let ProjectSettings { master_volume, performance_mode, .. } = project.settings;
                state.mixer.set_master_volume(master_volume);
                let mut result = DispatchResult::with_status(StatusLevel::Success, message);
                if let Some(advisory) = state.performance.set_performance_mode(performance_mode) {
                    result.push_status(StatusLevel::Info, advisory);
                }
                result.project = Some(*id);
                result
            }
            Err(e) => {
                log::warn!(target: "project", "{}", e);
                DispatchResult::with_status(StatusLevel::Warning, e.to_string())
            }
        },
        ProjectAction::Delete(id) => match state.projects.delete(*id) {
            Ok(project) => DispatchResult::with_status(
                StatusLevel::Success,
                format!("Deleted '{}'", project.name),
            ),
            Err(e) => {
                log::warn!(target: "project", "{}", e);
                DispatchResult::with_status(StatusLevel::Warning, e.to_string())
            }
        },
        ProjectAction::Export => {
            let Some(project) = state.projects.current() else {
                return DispatchResult::with_status(StatusLevel::Warning, "No project to export");
            };
            match export_project(project) {
                Ok(json) => {
                    let mut result = DispatchResult::with_status(
                        StatusLevel::Success,
                        format!("Exported '{}'", project.name),
                    );
                    result.project = Some(project.id);
                    result.export = Some(json);
                    result
                }
                Err(e) => DispatchResult::with_status(StatusLevel::Error, e.to_string()),
            }
        }
        ProjectAction::UpdateSettings(update) => update_settings(update, state),
    }
}

fn created(state: &StudioState, id: tracklab_types::ProjectId) -> DispatchResult {
    let name = state
        .projects
        .get(id)
        .map(|p| p.name.as_str())
        .unwrap_or_default();
    let mut result =
        DispatchResult::with_status(StatusLevel::Success, format!("Project '{}' created", name));
    result.project = Some(id);
    result
}

/// Merge into the current project's settings, then mirror the live
/// fields into the mixer and the performance monitor.
fn update_settings(update: &SettingsUpdate, state: &mut StudioState) -> DispatchResult {
    if update.is_empty() {
        return DispatchResult::none();
    }
    match state.projects.update_settings(update) {
        Ok(Some(id)) => {
            let mut result = DispatchResult::none();
            if let Some(volume) = update.master_volume {
                state.mixer.set_master_volume(volume);
            }
            if let Some(mode) = update.performance_mode {
                if let Some(advisory) = state.performance.set_performance_mode(mode) {
                    result.push_status(StatusLevel::Info, advisory);
                }
            }
            result.project = Some(id);
            result
        }
        Ok(None) => DispatchResult::none(),
        Err(e) => {
            log::error!(target: "project", "{}", e);
            DispatchResult::with_status(StatusLevel::Error, e.to_string())
        }
    }
}
