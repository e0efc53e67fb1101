//! Huewave - Periodic oscillators mapped to values and colors
//!
//! Evaluates sine, triangle, square, sawtooth and noise oscillators, composes
//! them with frequency, phase and magnitude controls, and turns them into
//! sample sequences and color bands for a renderer to draw.

pub mod config;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod synth;

pub use config::SceneConfig;
pub use engine::{generate_colors, generate_samples, Engine, Frame};
pub use error::{Error, Result};
pub use mapping::{map_to_color, ColorMapper, RgbColor};
pub use synth::{composite, parameterize, sum, Oscillator, WaveParameters, Waveform};
