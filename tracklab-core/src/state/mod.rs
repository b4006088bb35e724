mod projects;

pub use projects::{ProjectStore, ProjectTemplate};

use tracklab_types::MixerState;

use crate::config::Config;
use crate::estimate::{
    recommendations, AudioAnalytics, MetricsEstimator, PerformanceMetrics, PerformanceMonitor,
    PlaceholderEstimator, Recommendation,
};
use crate::playback::{PlaybackBackend, PlaybackRegistry};

/// Everything a studio session owns: the live mixer, the project list, the
/// performance monitor and the track → playback handle map.
pub struct StudioState {
    pub mixer: MixerState,
    pub projects: ProjectStore,
    pub performance: PerformanceMonitor,
    pub playback: PlaybackRegistry,
    estimator: Box<dyn MetricsEstimator>,
}

impl StudioState {
    /// Fresh session from config. The project list starts empty, so the
    /// first-launch project is created here and made current.
    pub fn new(config: &Config) -> Self {
        let template = config.project_template();
        let mut mixer = MixerState::new_with_bpm(template.bpm);
        mixer.set_master_volume(template.settings.master_volume);
        let performance = PerformanceMonitor::new(template.settings.performance_mode);

        let mut projects = ProjectStore::new(template);
        if projects.is_empty() {
            projects.create(config.first_project_name(), Vec::new());
        }

        Self {
            mixer,
            projects,
            performance,
            playback: PlaybackRegistry::new(),
            estimator: Box::new(PlaceholderEstimator),
        }
    }

    pub fn with_estimator(mut self, estimator: Box<dyn MetricsEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    pub fn analytics(&self) -> AudioAnalytics {
        self.estimator.analytics(&self.mixer.tracks)
    }

    pub fn performance_metrics(&self) -> PerformanceMetrics {
        self.estimator
            .performance(&self.mixer.tracks, self.performance.performance_mode())
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommendations(&self.performance_metrics(), self.performance.performance_mode())
    }

    pub fn should_limit_rendering(&self) -> bool {
        self.performance.should_limit_rendering(self.mixer.is_playing)
    }

    /// Session teardown: close every open handle. Tracks stay in the mixer
    /// but no longer have a handle. Close failures are logged and skipped.
    pub fn close_all(&mut self, backend: &mut dyn PlaybackBackend) {
        let handles = self.playback.drain();
        log::debug!(target: "playback", "closing {} handles", handles.len());
        for (track, handle) in handles {
            if let Err(e) = backend.close(handle) {
                log::warn!(target: "playback", "close of {} failed: {}", track, e);
            }
        }
        self.mixer.is_playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_launch_creates_current_project() {
        let state = StudioState::new(&Config::from_toml_str("").unwrap());
        assert_eq!(state.projects.len(), 1);
        let current = state.projects.current().unwrap();
        assert_eq!(current.name, "My First Project");
        assert!(current.tracks.is_empty());
        assert_eq!(state.mixer.bpm, 120);
    }

    #[test]
    fn config_seeds_mixer_and_monitor() {
        let config = Config::from_toml_str(
            "[defaults]\nbpm = 95\nmaster_volume = 0.5\n\n[runtime]\nperformance_mode = true\n",
        )
        .unwrap();
        let state = StudioState::new(&config);
        assert_eq!(state.mixer.bpm, 95);
        assert_eq!(state.mixer.master_volume, 0.5);
        assert!(state.performance.performance_mode());
        assert!(state.should_limit_rendering());
        assert_eq!(state.projects.current().unwrap().bpm, 95);
    }

    #[test]
    fn close_all_releases_handles() {
        use crate::playback::MemoryBackend;
        use tracklab_types::TrackId;

        let mut state = StudioState::new(&Config::from_toml_str("").unwrap());
        let mut backend = MemoryBackend::new();
        for (raw, source) in ["a.wav", "b.wav"].into_iter().enumerate() {
            let handle = backend.open(source).unwrap();
            state.playback.insert(TrackId::new(raw as u32), handle);
        }
        // a handle the backend no longer knows must not stop the sweep
        let stale = backend.open("c.wav").unwrap();
        backend.close(stale).unwrap();
        state.playback.insert(TrackId::new(2), stale);
        state.mixer.is_playing = true;

        state.close_all(&mut backend);
        assert!(state.playback.is_empty());
        assert_eq!(backend.open_count(), 0);
        assert_eq!(backend.closed().len(), 3);
        assert!(!state.mixer.is_playing);
    }

    struct Fixed;

    impl MetricsEstimator for Fixed {
        fn analytics(&self, _tracks: &[tracklab_types::AudioTrack]) -> AudioAnalytics {
            crate::estimate::estimate_analytics(&[])
        }

        fn performance(
            &self,
            _tracks: &[tracklab_types::AudioTrack],
            _performance_mode: bool,
        ) -> PerformanceMetrics {
            PerformanceMetrics {
                memory_usage: 90,
                frame_rate: 30,
                active_tracks: 20,
                effects_count: 0,
                is_optimal: false,
            }
        }
    }

    #[test]
    fn estimator_is_replaceable() {
        let state = StudioState::new(&Config::from_toml_str("").unwrap()).with_estimator(Box::new(Fixed));
        assert_eq!(state.performance_metrics().memory_usage, 90);
        assert!(state.recommendations().contains(&Recommendation::CloseUnusedProjects));
    }
}
