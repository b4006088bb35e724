use serde::Serialize;
use tracklab_types::AudioTrack;

/// Assumed length of every track.
pub const SECONDS_PER_TRACK: u32 = 180;
/// Assumed file size of every track.
pub const MB_PER_TRACK: f32 = 5.0;
pub const AVERAGE_BITRATE_KBPS: u32 = 320;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioAnalytics {
    pub total_duration_secs: u32,
    pub file_size_mb: f32,
    pub average_bitrate_kbps: u32,
    pub effects_applied: usize,
    /// Highest track volume, 0 with no tracks
    pub peak_volume: f32,
    /// Mean track volume, 0 with no tracks
    pub loudness: f32,
}

impl Default for AudioAnalytics {
    fn default() -> Self {
        estimate_analytics(&[])
    }
}

impl AudioAnalytics {
    /// `m:ss`
    pub fn format_duration(&self) -> String {
        format!("{}:{:02}", self.total_duration_secs / 60, self.total_duration_secs % 60)
    }

    pub fn format_file_size(&self) -> String {
        format!("{:.1} MB", self.file_size_mb)
    }
}

pub fn estimate_analytics(tracks: &[AudioTrack]) -> AudioAnalytics {
    let count = tracks.len();
    let peak_volume = tracks.iter().map(|t| t.volume).fold(0.0_f32, f32::max);
    let loudness = if count == 0 {
        0.0
    } else {
        tracks.iter().map(|t| t.volume).sum::<f32>() / count as f32
    };

    AudioAnalytics {
        total_duration_secs: (count as u32).saturating_mul(SECONDS_PER_TRACK),
        file_size_mb: count as f32 * MB_PER_TRACK,
        average_bitrate_kbps: AVERAGE_BITRATE_KBPS,
        effects_applied: tracks.iter().map(AudioTrack::effect_count).sum(),
        peak_volume,
        loudness,
    }
}
