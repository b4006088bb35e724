//! Effect parameter model.
//!
//! Effects are parameter records only; nothing in the studio renders them.
//! The payload is a closed sum type, so an effect's type is always the type of
//! its parameters. Values are clamped where they are edited (`set`, `nudge`),
//! not where an effect is applied to a track.

use serde::{Deserialize, Serialize};

use crate::EffectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectType {
    Equalizer,
    Reverb,
    Delay,
    Compressor,
}

impl EffectType {
    pub const ALL: [EffectType; 4] = [
        EffectType::Equalizer,
        EffectType::Reverb,
        EffectType::Delay,
        EffectType::Compressor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EffectType::Equalizer => "EQ",
            EffectType::Reverb => "Reverb",
            EffectType::Delay => "Delay",
            EffectType::Compressor => "Compressor",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectType::Equalizer => "equalizer",
            EffectType::Reverb => "reverb",
            EffectType::Delay => "delay",
            EffectType::Compressor => "compressor",
        }
    }

    pub fn default_params(&self) -> EffectParams {
        match self {
            EffectType::Equalizer => EffectParams::Equalizer(EqParams::default()),
            EffectType::Reverb => EffectParams::Reverb(ReverbParams::default()),
            EffectType::Delay => EffectParams::Delay(DelayParams::default()),
            EffectType::Compressor => EffectParams::Compressor(CompressorParams::default()),
        }
    }
}

/// Display unit of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    Decibels,
    Seconds,
    Millis,
    Hertz,
    Ratio,
    Percent,
}

impl ParamUnit {
    pub fn format(&self, value: f32) -> String {
        match self {
            ParamUnit::Decibels => format!("{}dB", value),
            ParamUnit::Seconds => format!("{:.1}s", value),
            ParamUnit::Millis => format!("{}ms", value),
            ParamUnit::Hertz => {
                if value >= 1000.0 {
                    format!("{:.1}kHz", value / 1000.0)
                } else {
                    format!("{}Hz", value)
                }
            }
            ParamUnit::Ratio => format!("{:.1}:1", value),
            ParamUnit::Percent => format!("{}%", (value * 100.0).round() as i32),
        }
    }
}

/// Valid range, step and default of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
    pub unit: ParamUnit,
    /// Values snap to whole numbers
    pub integer: bool,
}

impl ParamRange {
    const fn new(min: f32, max: f32, step: f32, default: f32, unit: ParamUnit) -> Self {
        Self { min, max, step, default, unit, integer: false }
    }

    const fn whole(min: f32, max: f32, default: f32, unit: ParamUnit) -> Self {
        Self { min, max, step: 1.0, default, unit, integer: true }
    }

    /// Clamp into range. NaN falls back to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        let v = value.clamp(self.min, self.max);
        if self.integer {
            v.round()
        } else {
            v
        }
    }

    /// Move `steps` increments from `value`, clamped and rounded to two decimals.
    pub fn nudge(&self, value: f32, steps: i32) -> f32 {
        let moved = value + self.step * steps as f32;
        round_hundredths(self.clamp(moved))
    }
}

fn round_hundredths(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

const EQ_GAIN: ParamRange = ParamRange::whole(-12.0, 12.0, 0.0, ParamUnit::Decibels);

const REVERB_DECAY: ParamRange = ParamRange::new(0.1, 10.0, 0.1, 2.0, ParamUnit::Seconds);
const REVERB_WET: ParamRange = ParamRange::new(0.0, 1.0, 0.05, 0.3, ParamUnit::Percent);
const REVERB_DRY: ParamRange = ParamRange::new(0.0, 1.0, 0.05, 0.7, ParamUnit::Percent);
const REVERB_PRE_DELAY: ParamRange = ParamRange::new(0.0, 100.0, 1.0, 20.0, ParamUnit::Millis);

const DELAY_TIME: ParamRange = ParamRange::new(0.0, 2000.0, 10.0, 400.0, ParamUnit::Millis);
const DELAY_FEEDBACK: ParamRange = ParamRange::new(0.0, 0.9, 0.05, 0.5, ParamUnit::Percent);
const DELAY_WET: ParamRange = ParamRange::new(0.0, 1.0, 0.05, 0.3, ParamUnit::Percent);
const DELAY_CUTOFF: ParamRange = ParamRange::new(100.0, 20000.0, 100.0, 5000.0, ParamUnit::Hertz);

const COMP_THRESHOLD: ParamRange = ParamRange::new(-60.0, 0.0, 1.0, -20.0, ParamUnit::Decibels);
const COMP_RATIO: ParamRange = ParamRange::new(1.0, 20.0, 0.1, 4.0, ParamUnit::Ratio);
const COMP_ATTACK: ParamRange = ParamRange::new(1.0, 100.0, 1.0, 3.0, ParamUnit::Millis);
const COMP_RELEASE: ParamRange = ParamRange::new(10.0, 1000.0, 10.0, 250.0, ParamUnit::Millis);
const COMP_GAIN: ParamRange = ParamRange::new(0.0, 20.0, 1.0, 2.0, ParamUnit::Decibels);

/// A record of named, ranged parameters keyed by `Key`.
pub trait ParamSet {
    type Key: Copy + 'static;

    const KEYS: &'static [Self::Key];

    fn range(key: Self::Key) -> ParamRange;
    fn value(&self, key: Self::Key) -> f32;
    fn slot_mut(&mut self, key: Self::Key) -> &mut f32;

    /// Store `value` clamped into the key's range. Returns the stored value.
    fn set(&mut self, key: Self::Key, value: f32) -> f32 {
        let v = Self::range(key).clamp(value);
        *self.slot_mut(key) = v;
        v
    }

    /// Step the value up or down. Returns the stored value.
    fn nudge(&mut self, key: Self::Key, steps: i32) -> f32 {
        let v = Self::range(key).nudge(self.value(key), steps);
        *self.slot_mut(key) = v;
        v
    }

    fn clamp_all(&mut self) {
        for &key in Self::KEYS {
            let v = self.value(key);
            self.set(key, v);
        }
    }
}

// ============================================================================
// Equalizer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EqBand {
    Low,
    Mid,
    High,
}

/// Three-band gain. All bands default to 0 dB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EqParams {
    pub low_gain: f32,
    pub mid_gain: f32,
    pub high_gain: f32,
}

impl ParamSet for EqParams {
    type Key = EqBand;

    const KEYS: &'static [EqBand] = &[EqBand::Low, EqBand::Mid, EqBand::High];

    fn range(_key: EqBand) -> ParamRange {
        EQ_GAIN
    }

    fn value(&self, key: EqBand) -> f32 {
        match key {
            EqBand::Low => self.low_gain,
            EqBand::Mid => self.mid_gain,
            EqBand::High => self.high_gain,
        }
    }

    fn slot_mut(&mut self, key: EqBand) -> &mut f32 {
        match key {
            EqBand::Low => &mut self.low_gain,
            EqBand::Mid => &mut self.mid_gain,
            EqBand::High => &mut self.high_gain,
        }
    }
}

// ============================================================================
// Reverb
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReverbParam {
    Decay,
    WetLevel,
    DryLevel,
    PreDelay,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverbParams {
    /// Seconds
    pub decay: f32,
    pub wet_level: f32,
    pub dry_level: f32,
    /// Milliseconds
    pub pre_delay: f32,
}

impl Default for ReverbParams {
    fn default() -> Self {
        Self {
            decay: REVERB_DECAY.default,
            wet_level: REVERB_WET.default,
            dry_level: REVERB_DRY.default,
            pre_delay: REVERB_PRE_DELAY.default,
        }
    }
}

impl ParamSet for ReverbParams {
    type Key = ReverbParam;

    const KEYS: &'static [ReverbParam] = &[
        ReverbParam::Decay,
        ReverbParam::WetLevel,
        ReverbParam::DryLevel,
        ReverbParam::PreDelay,
    ];

    fn range(key: ReverbParam) -> ParamRange {
        match key {
            ReverbParam::Decay => REVERB_DECAY,
            ReverbParam::WetLevel => REVERB_WET,
            ReverbParam::DryLevel => REVERB_DRY,
            ReverbParam::PreDelay => REVERB_PRE_DELAY,
        }
    }

    fn value(&self, key: ReverbParam) -> f32 {
        match key {
            ReverbParam::Decay => self.decay,
            ReverbParam::WetLevel => self.wet_level,
            ReverbParam::DryLevel => self.dry_level,
            ReverbParam::PreDelay => self.pre_delay,
        }
    }

    fn slot_mut(&mut self, key: ReverbParam) -> &mut f32 {
        match key {
            ReverbParam::Decay => &mut self.decay,
            ReverbParam::WetLevel => &mut self.wet_level,
            ReverbParam::DryLevel => &mut self.dry_level,
            ReverbParam::PreDelay => &mut self.pre_delay,
        }
    }
}

// ============================================================================
// Delay
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelayParam {
    DelayTime,
    Feedback,
    WetLevel,
    Cutoff,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayParams {
    /// Milliseconds
    pub delay_time: f32,
    pub feedback: f32,
    pub wet_level: f32,
    /// Hz
    pub cutoff: f32,
}

impl Default for DelayParams {
    fn default() -> Self {
        Self {
            delay_time: DELAY_TIME.default,
            feedback: DELAY_FEEDBACK.default,
            wet_level: DELAY_WET.default,
            cutoff: DELAY_CUTOFF.default,
        }
    }
}

impl ParamSet for DelayParams {
    type Key = DelayParam;

    const KEYS: &'static [DelayParam] = &[
        DelayParam::DelayTime,
        DelayParam::Feedback,
        DelayParam::WetLevel,
        DelayParam::Cutoff,
    ];

    fn range(key: DelayParam) -> ParamRange {
        match key {
            DelayParam::DelayTime => DELAY_TIME,
            DelayParam::Feedback => DELAY_FEEDBACK,
            DelayParam::WetLevel => DELAY_WET,
            DelayParam::Cutoff => DELAY_CUTOFF,
        }
    }

    fn value(&self, key: DelayParam) -> f32 {
        match key {
            DelayParam::DelayTime => self.delay_time,
            DelayParam::Feedback => self.feedback,
            DelayParam::WetLevel => self.wet_level,
            DelayParam::Cutoff => self.cutoff,
        }
    }

    fn slot_mut(&mut self, key: DelayParam) -> &mut f32 {
        match key {
            DelayParam::DelayTime => &mut self.delay_time,
            DelayParam::Feedback => &mut self.feedback,
            DelayParam::WetLevel => &mut self.wet_level,
            DelayParam::Cutoff => &mut self.cutoff,
        }
    }
}

// ============================================================================
// Compressor
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompressorParam {
    Threshold,
    Ratio,
    Attack,
    Release,
    Gain,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressorParams {
    /// dB
    pub threshold: f32,
    pub ratio: f32,
    /// Milliseconds
    pub attack: f32,
    /// Milliseconds
    pub release: f32,
    /// Makeup gain, dB
    pub gain: f32,
}

impl Default for CompressorParams {
    fn default() -> Self {
        Self {
            threshold: COMP_THRESHOLD.default,
            ratio: COMP_RATIO.default,
            attack: COMP_ATTACK.default,
            release: COMP_RELEASE.default,
            gain: COMP_GAIN.default,
        }
    }
}

impl ParamSet for CompressorParams {
    type Key = CompressorParam;

    const KEYS: &'static [CompressorParam] = &[
        CompressorParam::Threshold,
        CompressorParam::Ratio,
        CompressorParam::Attack,
        CompressorParam::Release,
        CompressorParam::Gain,
    ];

    fn range(key: CompressorParam) -> ParamRange {
        match key {
            CompressorParam::Threshold => COMP_THRESHOLD,
            CompressorParam::Ratio => COMP_RATIO,
            CompressorParam::Attack => COMP_ATTACK,
            CompressorParam::Release => COMP_RELEASE,
            CompressorParam::Gain => COMP_GAIN,
        }
    }

    fn value(&self, key: CompressorParam) -> f32 {
        match key {
            CompressorParam::Threshold => self.threshold,
            CompressorParam::Ratio => self.ratio,
            CompressorParam::Attack => self.attack,
            CompressorParam::Release => self.release,
            CompressorParam::Gain => self.gain,
        }
    }

    fn slot_mut(&mut self, key: CompressorParam) -> &mut f32 {
        match key {
            CompressorParam::Threshold => &mut self.threshold,
            CompressorParam::Ratio => &mut self.ratio,
            CompressorParam::Attack => &mut self.attack,
            CompressorParam::Release => &mut self.release,
            CompressorParam::Gain => &mut self.gain,
        }
    }
}

// ============================================================================
// Tagged payload
// ============================================================================

/// Identifies one parameter of one effect type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectParam {
    Eq(EqBand),
    Reverb(ReverbParam),
    Delay(DelayParam),
    Compressor(CompressorParam),
}

impl EffectParam {
    pub fn effect_type(&self) -> EffectType {
        match self {
            EffectParam::Eq(_) => EffectType::Equalizer,
            EffectParam::Reverb(_) => EffectType::Reverb,
            EffectParam::Delay(_) => EffectType::Delay,
            EffectParam::Compressor(_) => EffectType::Compressor,
        }
    }

    pub fn range(&self) -> ParamRange {
        match *self {
            EffectParam::Eq(k) => EqParams::range(k),
            EffectParam::Reverb(k) => ReverbParams::range(k),
            EffectParam::Delay(k) => DelayParams::range(k),
            EffectParam::Compressor(k) => CompressorParams::range(k),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EffectParam::Eq(EqBand::Low) => "Low",
            EffectParam::Eq(EqBand::Mid) => "Mid",
            EffectParam::Eq(EqBand::High) => "High",
            EffectParam::Reverb(ReverbParam::Decay) => "Decay",
            EffectParam::Reverb(ReverbParam::WetLevel) => "Wet",
            EffectParam::Reverb(ReverbParam::DryLevel) => "Dry",
            EffectParam::Reverb(ReverbParam::PreDelay) => "Pre-Delay",
            EffectParam::Delay(DelayParam::DelayTime) => "Time",
            EffectParam::Delay(DelayParam::Feedback) => "Feedback",
            EffectParam::Delay(DelayParam::WetLevel) => "Wet",
            EffectParam::Delay(DelayParam::Cutoff) => "Cutoff",
            EffectParam::Compressor(CompressorParam::Threshold) => "Threshold",
            EffectParam::Compressor(CompressorParam::Ratio) => "Ratio",
            EffectParam::Compressor(CompressorParam::Attack) => "Attack",
            EffectParam::Compressor(CompressorParam::Release) => "Release",
            EffectParam::Compressor(CompressorParam::Gain) => "Gain",
        }
    }

    pub fn format(&self, value: f32) -> String {
        self.range().unit.format(value)
    }
}

/// Parameter payload. The variant is the effect type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "parameters", rename_all = "lowercase")]
pub enum EffectParams {
    Equalizer(EqParams),
    Reverb(ReverbParams),
    Delay(DelayParams),
    Compressor(CompressorParams),
}

impl EffectParams {
    pub fn effect_type(&self) -> EffectType {
        match self {
            EffectParams::Equalizer(_) => EffectType::Equalizer,
            EffectParams::Reverb(_) => EffectType::Reverb,
            EffectParams::Delay(_) => EffectType::Delay,
            EffectParams::Compressor(_) => EffectType::Compressor,
        }
    }

    /// Current value, or None when `param` belongs to another effect type.
    pub fn get(&self, param: EffectParam) -> Option<f32> {
        match (self, param) {
            (EffectParams::Equalizer(p), EffectParam::Eq(k)) => Some(p.value(k)),
            (EffectParams::Reverb(p), EffectParam::Reverb(k)) => Some(p.value(k)),
            (EffectParams::Delay(p), EffectParam::Delay(k)) => Some(p.value(k)),
            (EffectParams::Compressor(p), EffectParam::Compressor(k)) => Some(p.value(k)),
            _ => None,
        }
    }

    /// Store a clamped value. None (and no change) when `param` belongs to another type.
    pub fn set(&mut self, param: EffectParam, value: f32) -> Option<f32> {
        match (self, param) {
            (EffectParams::Equalizer(p), EffectParam::Eq(k)) => Some(p.set(k, value)),
            (EffectParams::Reverb(p), EffectParam::Reverb(k)) => Some(p.set(k, value)),
            (EffectParams::Delay(p), EffectParam::Delay(k)) => Some(p.set(k, value)),
            (EffectParams::Compressor(p), EffectParam::Compressor(k)) => Some(p.set(k, value)),
            _ => None,
        }
    }

    pub fn nudge(&mut self, param: EffectParam, steps: i32) -> Option<f32> {
        match (self, param) {
            (EffectParams::Equalizer(p), EffectParam::Eq(k)) => Some(p.nudge(k, steps)),
            (EffectParams::Reverb(p), EffectParam::Reverb(k)) => Some(p.nudge(k, steps)),
            (EffectParams::Delay(p), EffectParam::Delay(k)) => Some(p.nudge(k, steps)),
            (EffectParams::Compressor(p), EffectParam::Compressor(k)) => Some(p.nudge(k, steps)),
            _ => None,
        }
    }

    /// Restore every parameter of this type to its default.
    pub fn reset(&mut self) {
        *self = self.effect_type().default_params();
    }
}

impl From<EqParams> for EffectParams {
    fn from(p: EqParams) -> Self {
        EffectParams::Equalizer(p)
    }
}

impl From<ReverbParams> for EffectParams {
    fn from(p: ReverbParams) -> Self {
        EffectParams::Reverb(p)
    }
}

impl From<DelayParams> for EffectParams {
    fn from(p: DelayParams) -> Self {
        EffectParams::Delay(p)
    }
}

impl From<CompressorParams> for EffectParams {
    fn from(p: CompressorParams) -> Self {
        EffectParams::Compressor(p)
    }
}

/// An effect applied to a track. Serializes flat as `{id, type, parameters}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioEffect {
    pub id: EffectId,
    #[serde(flatten)]
    pub params: EffectParams,
}

impl AudioEffect {
    pub fn new(id: EffectId, params: impl Into<EffectParams>) -> Self {
        Self { id, params: params.into() }
    }

    pub fn effect_type(&self) -> EffectType {
        self.params.effect_type()
    }
}
