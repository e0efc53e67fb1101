//! Basic periodic oscillators
//!
//! Every oscillator maps a phase in radians to a signal value and repeats
//! every [`PERIOD`]. Phases are reduced with [`wrap_phase`] so all shapes
//! agree on where a cycle starts.

use std::f64::consts::{PI, TAU};

/// Period shared by all oscillators (one full turn)
pub const PERIOD: f64 = TAU;

/// Anything that can be evaluated at a phase
pub trait Oscillator: Send + Sync {
    /// Evaluate the oscillator at `phase` radians
    fn eval(&self, phase: f64) -> f64;
}

impl<F> Oscillator for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn eval(&self, phase: f64) -> f64 {
        self(phase)
    }
}

/// Reduce a phase into `[0, 2π)` using the Euclidean remainder
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(PERIOD);
    // rem_euclid may round up to exactly the divisor for tiny negative inputs
    if wrapped >= PERIOD {
        0.0
    } else {
        wrapped
    }
}

/// Sine wave, range `[-1, 1]`
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Triangle wave with peaks of ±1, rising through zero at phase 0 like `sine`
pub fn triangle(phase: f64) -> f64 {
    1.0 - (2.0 / PI) * (wrap_phase(phase + PI / 2.0) - PI).abs()
}

/// Square wave: `+1` for the first half of each cycle, `-1` for the second
pub fn square(phase: f64) -> f64 {
    if !phase.is_finite() {
        return f64::NAN;
    }
    if wrap_phase(phase) < PI {
        1.0
    } else {
        -1.0
    }
}

/// Sawtooth ramping from `-1` up towards `+1` across each cycle
pub fn sawtooth(phase: f64) -> f64 {
    wrap_phase(phase) / PI - 1.0
}
