//! Frame engine
//!
//! Drives a scene's oscillator across its sample and color ranges. A
//! presentation layer asks for a new frame on every redraw.

mod sequence;

pub use sequence::{
    generate_colors, generate_colors_with, generate_samples, ColorSample, Sample,
    DEFAULT_PHASE_SPAN,
};

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::config::SceneConfig;
use crate::mapping::ColorMapper;
use crate::synth::{WaveParameters, Waveform};

/// Everything a renderer needs for one redraw
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub samples: Vec<Sample>,
    pub colors: Vec<ColorSample>,
}

/// The main frame engine
pub struct Engine {
    config: SceneConfig,
    oscillator: Waveform,
    mapper: ColorMapper,
}

impl Engine {
    /// Create a new engine from a scene, validating it first
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let oscillator = config.oscillator();
        let mapper = ColorMapper::new().with_clamp(config.colors.clamp);
        debug!(
            deterministic = oscillator.is_deterministic(),
            peak = oscillator.peak(),
            "engine ready"
        );
        Ok(Self {
            config,
            oscillator,
            mapper,
        })
    }

    /// Get the scene configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The wave with the current controls applied
    pub fn oscillator(&self) -> &Waveform {
        &self.oscillator
    }

    /// Replace the live controls and rebuild the oscillator
    pub fn set_controls(&mut self, controls: WaveParameters) -> Result<()> {
        controls.validate()?;
        self.config.controls = controls;
        self.oscillator = self.config.oscillator();
        Ok(())
    }

    /// Evaluate the sample sequence
    pub fn samples(&self) -> Vec<Sample> {
        let samples = &self.config.samples;
        generate_samples(&self.oscillator, samples.count, samples.phase_span)
    }

    /// Evaluate the color band
    pub fn colors(&self) -> Result<Vec<ColorSample>> {
        let colors = &self.config.colors;
        Ok(generate_colors_with(
            &self.mapper,
            &self.oscillator,
            colors.count,
            colors.total_samples,
        )?)
    }

    /// Produce a fresh frame
    pub fn render(&self) -> Result<Frame> {
        Ok(Frame {
            samples: self.samples(),
            colors: self.colors()?,
        })
    }
}
