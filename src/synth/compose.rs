//! Wave composition
//!
//! Builds new waveforms from existing ones by scaling frequency, shifting
//! phase, scaling magnitude and summing.

use serde::{Deserialize, Serialize};

use super::Waveform;
use crate::error::{Error, Result};

/// Frequency, phase offset and magnitude applied to a base waveform
///
/// Evaluates as `base(t * frequency + phase_offset) * magnitude`. A control
/// change builds a new value rather than editing one in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    /// Cycles of the base per cycle of phase; negative values mirror the wave
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Shift in radians added after frequency scaling
    #[serde(default)]
    pub phase_offset: f64,

    /// Output scale, not clamped
    #[serde(default = "default_magnitude")]
    pub magnitude: f64,
}

fn default_frequency() -> f64 { 1.0 }
fn default_magnitude() -> f64 { 1.0 }

impl WaveParameters {
    /// Create a parameter set
    pub fn new(frequency: f64, phase_offset: f64, magnitude: f64) -> Self {
        Self {
            frequency,
            phase_offset,
            magnitude,
        }
    }

    /// Replace the frequency (builder pattern)
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Replace the phase offset (builder pattern)
    pub fn with_phase_offset(mut self, phase_offset: f64) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    /// Replace the magnitude (builder pattern)
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// True when applying these parameters leaves a waveform unchanged
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Reject parameters that cannot produce finite output
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("frequency", self.frequency),
            ("phase_offset", self.phase_offset),
            ("magnitude", self.magnitude),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Map an outer phase to the phase seen by the base waveform
    pub fn inner_phase(&self, phase: f64) -> f64 {
        phase * self.frequency + self.phase_offset
    }
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self::new(1.0, 0.0, 1.0)
    }
}

/// A waveform paired with its weight inside a composite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weighted {
    pub wave: Waveform,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 { 1.0 }

impl Weighted {
    pub fn new(wave: Waveform, weight: f64) -> Self {
        Self { wave, weight }
    }
}

/// Scale and shift a waveform: `t ↦ base(t * frequency + phase_offset) * magnitude`
pub fn parameterize(
    base: Waveform,
    frequency: f64,
    phase_offset: f64,
    magnitude: f64,
) -> Waveform {
    base.parameterize(WaveParameters::new(frequency, phase_offset, magnitude))
}

/// Sum waveforms left to right; an empty list is the zero function
pub fn sum(components: impl IntoIterator<Item = Waveform>) -> Waveform {
    Waveform::Sum {
        components: components.into_iter().collect(),
    }
}

/// Weighted sum of `(waveform, weight)` pairs
pub fn composite(members: impl IntoIterator<Item = (Waveform, f64)>) -> Waveform {
    Waveform::Composite {
        members: members
            .into_iter()
            .map(|(wave, weight)| Weighted::new(wave, weight))
            .collect(),
    }
}
