pub mod effect;
pub mod mixer;
pub mod project;
pub mod track;

pub use effect::*;
pub use mixer::*;
pub use project::{AudioProject, ProjectSettings, SettingsUpdate};
pub use track::AudioTrack;
