use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::StudioError;
use crate::state::ProjectTemplate;
use tracklab_types::{ProjectSettings, DEFAULT_BPM, MAX_BPM, MIN_BPM};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    runtime: RuntimeConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    bpm: Option<u16>,
    master_volume: Option<f32>,
    user_id: Option<String>,
    first_project_name: Option<String>,
}

#[derive(Deserialize, Default)]
struct RuntimeConfig {
    auto_save: Option<bool>,
    metronome: Option<bool>,
    performance_mode: Option<bool>,
}

pub struct Config {
    defaults: DefaultsConfig,
    runtime: RuntimeConfig,
}

impl Config {
    /// Embedded defaults merged with the user's config file, if any.
    pub fn load() -> Self {
        match user_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::embedded(),
        }
    }

    /// Embedded defaults merged with the file at `path`. A missing file is not
    /// an error; an unreadable or malformed one is logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Self::embedded();
        if !path.exists() {
            return config;
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(user) => config.merge(user),
                Err(e) => {
                    log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                }
            },
            Err(e) => {
                log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
            }
        }
        config
    }

    /// Embedded defaults merged with `contents`.
    pub fn from_toml_str(contents: &str) -> Result<Self, StudioError> {
        let user: ConfigFile =
            toml::from_str(contents).map_err(|e| StudioError::Config(e.to_string()))?;
        let mut config = Self::embedded();
        config.merge(user);
        Ok(config)
    }

    fn embedded() -> Self {
        let base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");
        Config {
            defaults: base.defaults,
            runtime: base.runtime,
        }
    }

    fn merge(&mut self, user: ConfigFile) {
        merge_defaults(&mut self.defaults, user.defaults);
        merge_runtime(&mut self.runtime, user.runtime);
    }

    /// Default tempo, clamped to `MIN_BPM..=MAX_BPM`.
    pub fn bpm(&self) -> u16 {
        self.defaults.bpm.unwrap_or(DEFAULT_BPM).clamp(MIN_BPM, MAX_BPM)
    }

    pub fn user_id(&self) -> &str {
        self.defaults.user_id.as_deref().unwrap_or("user_1")
    }

    /// Name of the project created on first launch.
    pub fn first_project_name(&self) -> &str {
        self.defaults
            .first_project_name
            .as_deref()
            .unwrap_or("My First Project")
    }

    /// Settings given to every newly created project.
    pub fn project_settings(&self) -> ProjectSettings {
        let fallback = ProjectSettings::default();
        ProjectSettings {
            master_volume: self
                .defaults
                .master_volume
                .map(|v| v.clamp(0.0, 1.0))
                .unwrap_or(fallback.master_volume),
            metronome: self.runtime.metronome.unwrap_or(fallback.metronome),
            auto_save: self.runtime.auto_save.unwrap_or(fallback.auto_save),
            performance_mode: self
                .runtime
                .performance_mode
                .unwrap_or(fallback.performance_mode),
        }
    }

    pub fn project_template(&self) -> ProjectTemplate {
        ProjectTemplate {
            bpm: self.bpm(),
            user_id: self.user_id().to_string(),
            settings: self.project_settings(),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tracklab").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.bpm.is_some() {
        base.bpm = user.bpm;
    }
    if user.master_volume.is_some() {
        base.master_volume = user.master_volume;
    }
    if user.user_id.is_some() {
        base.user_id = user.user_id;
    }
    if user.first_project_name.is_some() {
        base.first_project_name = user.first_project_name;
    }
}

fn merge_runtime(base: &mut RuntimeConfig, user: RuntimeConfig) {
    if user.auto_save.is_some() {
        base.auto_save = user.auto_save;
    }
    if user.metronome.is_some() {
        base.metronome = user.metronome;
    }
    if user.performance_mode.is_some() {
        base.performance_mode = user.performance_mode;
    }
}
