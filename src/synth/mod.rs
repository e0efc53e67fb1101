//! Oscillators and wave composition
//!
//! Contains the basic periodic shapes, noise, the composable waveform tree
//! and a few named presets.

mod compose;
mod noise;
mod oscillator;
pub mod presets;
mod waveform;

pub use compose::{composite, parameterize, sum, WaveParameters, Weighted};
pub use noise::{noise, NoiseSource};
pub use oscillator::{sawtooth, sine, square, triangle, wrap_phase, Oscillator, PERIOD};
pub use waveform::Waveform;
