use std::time::SystemTime;

use tracklab_types::{
    AudioProject, AudioTrack, MixerState, ProjectId, ProjectSettings, SettingsUpdate,
};

use crate::error::{Result, StudioError};

/// Values stamped onto every newly created project.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTemplate {
    pub bpm: u16,
    pub user_id: String,
    pub settings: ProjectSettings,
}

impl Default for ProjectTemplate {
    fn default() -> Self {
        Self {
            bpm: tracklab_types::DEFAULT_BPM,
            user_id: "user_1".to_string(),
            settings: ProjectSettings::default(),
        }
    }
}

/// In-memory project list, most recently saved first.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    entries: Vec<AudioProject>,
    current: Option<ProjectId>,
    next_id: u32,
    template: ProjectTemplate,
}

impl ProjectStore {
    pub fn new(template: ProjectTemplate) -> Self {
        Self {
            entries: Vec::new(),
            current: None,
            next_id: 0,
            template,
        }
    }

    pub fn projects(&self) -> &[AudioProject] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: ProjectId) -> Option<&AudioProject> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn current_id(&self) -> Option<ProjectId> {
        self.current
    }

    pub fn current(&self) -> Option<&AudioProject> {
        self.current.and_then(|id| self.get(id))
    }

    /// Name used by "new project": one past the current count.
    pub fn new_project_name(&self) -> String {
        format!("Project {}", self.entries.len() + 1)
    }

    /// Create a project from `tracks` and make it current. A blank name falls
    /// back to `new_project_name`.
    pub fn create(&mut self, name: &str, tracks: Vec<AudioTrack>) -> ProjectId {
        let name = match name.trim() {
            "" => self.new_project_name(),
            trimmed => trimmed.to_string(),
        };
        let id = ProjectId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let now = SystemTime::now();
        self.entries.insert(
            0,
            AudioProject {
                id,
                name,
                created_at: now,
                last_saved: now,
                tracks,
                bpm: self.template.bpm,
                user_id: self.template.user_id.clone(),
                settings: self.template.settings,
            },
        );
        self.current = Some(id);
        log::info!(target: "project", "created {}", id);
        id
    }

    /// Store `project`, replacing any entry with the same id, and move it to
    /// the front. On failure nothing changes.
    pub fn save(&mut self, mut project: AudioProject) -> Result<ProjectId> {
        if project.id.get() >= self.next_id {
            return Err(StudioError::SaveFailure(format!(
                "{} was not created by this session",
                project.id
            )));
        }
        if project.name.trim().is_empty() {
            return Err(StudioError::SaveFailure("project name is empty".to_string()));
        }

        let id = project.id;
        project.last_saved = SystemTime::now();
        self.entries.retain(|p| p.id != id);
        self.entries.insert(0, project);
        self.current = Some(id);
        log::debug!(target: "project", "saved {}", id);
        Ok(id)
    }

    /// Save the current project with the mixer's tracks and tempo.
    pub fn save_current(&mut self, mixer: &MixerState) -> Result<ProjectId> {
        let mut project = self
            .current()
            .cloned()
            .ok_or_else(|| StudioError::SaveFailure("no current project".to_string()))?;
        project.tracks = mixer.tracks.clone();
        project.bpm = mixer.bpm;
        self.save(project)
    }

    /// Point `current` at `id`. The mixer is left alone.
    pub fn load(&mut self, id: ProjectId) -> Result<&AudioProject> {
        let idx = self
            .entries
            .iter()
            .position(|p| p.id == id)
            .ok_or(StudioError::ProjectNotFound(id))?;
        self.current = Some(id);
        Ok(&self.entries[idx])
    }

    pub fn delete(&mut self, id: ProjectId) -> Result<AudioProject> {
        let idx = self
            .entries
            .iter()
            .position(|p| p.id == id)
            .ok_or(StudioError::ProjectNotFound(id))?;
        let removed = self.entries.remove(idx);
        if self.current == Some(id) {
            self.current = None;
        }
        log::info!(target: "project", "deleted {}", id);
        Ok(removed)
    }

    /// Merge `update` into the current project's settings and save it.
    /// Returns `Ok(None)` when there is no current project.
    pub fn update_settings(&mut self, update: &SettingsUpdate) -> Result<Option<ProjectId>> {
        let Some(mut project) = self.current().cloned() else {
            return Ok(None);
        };
        update.apply_to(&mut project.settings);
        self.save(project).map(Some)
    }
}
