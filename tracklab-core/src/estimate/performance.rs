use serde::Serialize;
use tracklab_types::AudioTrack;

pub const MAX_OPTIMAL_ACTIVE_TRACKS: usize = 8;
pub const MAX_OPTIMAL_EFFECTS: usize = 10;

const MEMORY_PER_ACTIVE_TRACK: usize = 5;
const MEMORY_PER_EFFECT: usize = 2;
const TARGET_FRAME_RATE: u32 = 60;
const MIN_FRAME_RATE: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceMetrics {
    /// Percent, 0 - 100
    pub memory_usage: u32,
    pub frame_rate: u32,
    pub active_tracks: usize,
    pub effects_count: usize,
    pub is_optimal: bool,
}

impl PerformanceMetrics {
    pub fn status(&self) -> PerformanceStatus {
        if self.is_optimal {
            PerformanceStatus::Optimal
        } else if self.memory_usage > 80 {
            PerformanceStatus::Critical
        } else {
            PerformanceStatus::Alert
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PerformanceStatus {
    Optimal,
    Alert,
    Critical,
}

impl PerformanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PerformanceStatus::Optimal => "OPTIMAL",
            PerformanceStatus::Alert => "ALERT",
            PerformanceStatus::Critical => "CRITICAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    MuteNonEssentialTracks,
    ReduceEffects,
    CloseUnusedProjects,
    EnablePerformanceMode,
    Optimal,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::MuteNonEssentialTracks => "Mute non-essential tracks",
            Recommendation::ReduceEffects => "Reduce effects on less important tracks",
            Recommendation::CloseUnusedProjects => "Close unused projects",
            Recommendation::EnablePerformanceMode => "Enable performance mode",
            Recommendation::Optimal => "Performance is optimal",
        }
    }
}

/// Memory is charged per *active* (unmuted) track.
pub fn estimate_performance(tracks: &[AudioTrack], performance_mode: bool) -> PerformanceMetrics {
    let active_tracks = tracks.iter().filter(|t| !t.muted).count();
    let effects_count: usize = tracks.iter().map(AudioTrack::effect_count).sum();

    let memory = active_tracks
        .saturating_mul(MEMORY_PER_ACTIVE_TRACK)
        .saturating_add(effects_count.saturating_mul(MEMORY_PER_EFFECT))
        .min(100);

    let frame_rate = if performance_mode {
        TARGET_FRAME_RATE
    } else {
        let cost = u32::try_from(effects_count.saturating_mul(2)).unwrap_or(u32::MAX);
        TARGET_FRAME_RATE.saturating_sub(cost).max(MIN_FRAME_RATE)
    };

    PerformanceMetrics {
        memory_usage: memory as u32,
        frame_rate,
        active_tracks,
        effects_count,
        is_optimal: active_tracks <= MAX_OPTIMAL_ACTIVE_TRACKS
            && effects_count <= MAX_OPTIMAL_EFFECTS,
    }
}

/// Advisories in display order; a lone `Optimal` when nothing triggers.
pub fn recommendations(metrics: &PerformanceMetrics, performance_mode: bool) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if metrics.active_tracks > 6 {
        out.push(Recommendation::MuteNonEssentialTracks);
    }
    if metrics.effects_count > 8 {
        out.push(Recommendation::ReduceEffects);
    }
    if metrics.memory_usage > 70 {
        out.push(Recommendation::CloseUnusedProjects);
    }
    if !performance_mode && !metrics.is_optimal {
        out.push(Recommendation::EnablePerformanceMode);
    }
    if out.is_empty() {
        out.push(Recommendation::Optimal);
    }
    out
}

/// Holds the performance-mode flag and raises the "enable performance mode"
/// advisory once per optimal → non-optimal crossing.
#[derive(Debug, Clone)]
pub struct PerformanceMonitor {
    performance_mode: bool,
    was_optimal: bool,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

impl PerformanceMonitor {
    pub fn new(performance_mode: bool) -> Self {
        Self { performance_mode, was_optimal: true }
    }

    pub fn performance_mode(&self) -> bool {
        self.performance_mode
    }

    /// Set the mode. Returns a confirmation advisory when it turns on.
    pub fn set_performance_mode(&mut self, enabled: bool) -> Option<String> {
        let turned_on = enabled && !self.performance_mode;
        self.performance_mode = enabled;
        turned_on.then(|| "Performance mode enabled: optimizations applied".to_string())
    }

    /// Feed freshly estimated metrics. Returns an advisory on the first
    /// non-optimal reading after an optimal one while the mode is off.
    /// Never enables the mode itself.
    pub fn observe(&mut self, metrics: &PerformanceMetrics) -> Option<String> {
        let crossed = self.was_optimal && !metrics.is_optimal;
        self.was_optimal = metrics.is_optimal;
        if !crossed || self.performance_mode {
            return None;
        }
        let message = if metrics.active_tracks > MAX_OPTIMAL_ACTIVE_TRACKS {
            format!(
                "You have {} active tracks. Consider enabling performance mode.",
                metrics.active_tracks
            )
        } else {
            format!(
                "You have {} effects applied. Consider enabling performance mode.",
                metrics.effects_count
            )
        };
        Some(message)
    }

    /// Front ends may skip non-essential redraws while paused in performance mode.
    pub fn should_limit_rendering(&self, is_playing: bool) -> bool {
        self.performance_mode && !is_playing
    }
}
