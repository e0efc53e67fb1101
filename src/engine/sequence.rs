//! Sample sequence generation
//!
//! Sequences are built fresh on every call. Oscillators may contain noise,
//! so repeated calls are expected to differ.

use std::f64::consts::TAU;

use serde::Serialize;
use tracing::{trace, warn};

use crate::error::Result;
use crate::mapping::{ColorMapper, RgbColor};
use crate::synth::Oscillator;

/// Default phase covered by a sequence (one full turn)
pub const DEFAULT_PHASE_SPAN: f64 = TAU;

/// One evaluated point of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub index: usize,
    pub phase: f64,
    pub value: f64,
}

/// One color of a color band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorSample {
    pub index: usize,
    #[serde(flatten)]
    pub color: RgbColor,
}

/// Evaluate `oscillator` at `index / count * phase_span` for each index in `[0, count)`
///
/// A count of zero gives an empty sequence.
pub fn generate_samples<O: Oscillator + ?Sized>(
    oscillator: &O,
    count: usize,
    phase_span: f64,
) -> Vec<Sample> {
    trace!(count, phase_span, "generating samples");
    (0..count)
        .map(|index| {
            let phase = index as f64 / count as f64 * phase_span;
            Sample {
                index,
                phase,
                value: oscillator.eval(phase),
            }
        })
        .collect()
}

/// Map each index in `[0, count)` to a color with the default mapper
pub fn generate_colors<O: Oscillator + ?Sized>(
    oscillator: &O,
    count: usize,
    total_samples: f64,
) -> Result<Vec<ColorSample>> {
    generate_colors_with(&ColorMapper::new(), oscillator, count, total_samples)
}

/// Map each index in `[0, count)` to a color with the given mapper
///
/// Fails on an invalid `total_samples` even when `count` is zero.
pub fn generate_colors_with<O: Oscillator + ?Sized>(
    mapper: &ColorMapper,
    oscillator: &O,
    count: usize,
    total_samples: f64,
) -> Result<Vec<ColorSample>> {
    ColorMapper::theta(0, total_samples)?;
    trace!(count, total_samples, "generating colors");
    let colors = (0..count)
        .map(|index| {
            let color = mapper.map(oscillator, index, total_samples)?;
            Ok(ColorSample { index, color })
        })
        .collect::<Result<Vec<_>>>()?;

    let out_of_gamut = colors.iter().filter(|c| !c.color.in_gamut()).count();
    if out_of_gamut > 0 {
        warn!(
            out_of_gamut,
            count, "oscillator output outside [-1, 1], colors out of gamut"
        );
    }
    Ok(colors)
}
