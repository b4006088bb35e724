//! Derived numbers shown by the analytics and performance panels.
//!
//! Nothing here measures audio. The figures are formulas over track and
//! effect counts, kept behind `MetricsEstimator` so a measuring
//! implementation can replace `PlaceholderEstimator` without touching callers.

mod analytics;
mod performance;

pub use analytics::{
    estimate_analytics, AudioAnalytics, AVERAGE_BITRATE_KBPS, MB_PER_TRACK, SECONDS_PER_TRACK,
};
pub use performance::{
    estimate_performance, recommendations, PerformanceMetrics, PerformanceMonitor,
    PerformanceStatus, Recommendation, MAX_OPTIMAL_ACTIVE_TRACKS, MAX_OPTIMAL_EFFECTS,
};

use tracklab_types::AudioTrack;

pub trait MetricsEstimator {
    fn analytics(&self, tracks: &[AudioTrack]) -> AudioAnalytics;
    fn performance(&self, tracks: &[AudioTrack], performance_mode: bool) -> PerformanceMetrics;
}

/// Fixed-constant estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderEstimator;

impl MetricsEstimator for PlaceholderEstimator {
    fn analytics(&self, tracks: &[AudioTrack]) -> AudioAnalytics {
        estimate_analytics(tracks)
    }

    fn performance(&self, tracks: &[AudioTrack], performance_mode: bool) -> PerformanceMetrics {
        estimate_performance(tracks, performance_mode)
    }
}
