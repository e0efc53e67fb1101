//! Configuration schema definitions

use std::f64::consts::TAU;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::synth::{presets, WaveParameters, Waveform};

/// Largest sample or color count a scene may request
pub const MAX_COUNT: usize = 1_000_000;

/// Main configuration for a scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Waveform tree to visualize (default: sine)
    #[serde(default)]
    pub wave: Waveform,

    /// Live controls applied on top of the wave
    #[serde(default)]
    pub controls: WaveParameters,

    /// Bar/line sampling settings
    #[serde(default)]
    pub samples: SampleConfig,

    /// Color band settings
    #[serde(default)]
    pub colors: ColorConfig,
}

impl SceneConfig {
    /// Scene using a named preset with default settings
    pub fn from_preset(name: &str) -> Result<Self> {
        Ok(Self {
            wave: presets::by_name(name)?,
            ..Self::default()
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.wave.has_custom() {
            bail!("Custom oscillators cannot be used in a scene file");
        }
        self.controls.validate()?;

        if self.samples.count > MAX_COUNT {
            bail!("Sample count must be at most {}", MAX_COUNT);
        }
        if !self.samples.phase_span.is_finite() {
            bail!("Phase span must be finite");
        }

        if self.colors.count > MAX_COUNT {
            bail!("Color count must be at most {}", MAX_COUNT);
        }
        if !(self.colors.total_samples.is_finite() && self.colors.total_samples > 0.0) {
            bail!("Color total_samples must be finite and greater than zero");
        }

        Ok(())
    }

    /// The wave with the live controls applied
    pub fn oscillator(&self) -> Waveform {
        self.wave.clone().parameterize(self.controls)
    }

    /// Template written by `huewave init`
    pub fn example_yaml() -> Result<String> {
        let example = Self {
            wave: presets::combo(),
            controls: WaveParameters::new(1.0, 0.0, 1.0),
            samples: SampleConfig::default(),
            colors: ColorConfig {
                count: 300,
                total_samples: 150.0,
                clamp: false,
            },
        };
        Ok(serde_yaml::to_string(&example)?)
    }
}

/// Sample sequence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Number of samples (default: 40)
    #[serde(default = "default_sample_count")]
    pub count: usize,

    /// Phase covered by the whole sequence in radians (default: 2π)
    #[serde(default = "default_phase_span")]
    pub phase_span: f64,
}

fn default_sample_count() -> usize { 40 }
fn default_phase_span() -> f64 { TAU }

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: default_sample_count(),
            phase_span: default_phase_span(),
        }
    }
}

/// Color band configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Number of colors to produce (default: 256)
    #[serde(default = "default_color_count")]
    pub count: usize,

    /// Indices per full turn of the color wheel (default: 256)
    #[serde(default = "default_total_samples")]
    pub total_samples: f64,

    /// Clamp channels into [0, 1] (default: false)
    #[serde(default)]
    pub clamp: bool,
}

fn default_color_count() -> usize { 256 }
fn default_total_samples() -> f64 { 256.0 }

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            count: default_color_count(),
            total_samples: default_total_samples(),
            clamp: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sample_config() {
        let yaml = "count: 12";
        let config: SampleConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.count, 12);
        assert_eq!(config.phase_span, TAU); // default
    }

    #[test]
    fn test_color_config() {
        let yaml = r#"
count: 300
total_samples: 150
clamp: true
"#;
        let config: ColorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.count, 300);
        assert_eq!(config.total_samples, 150.0);
        assert!(config.clamp);
    }

    #[test]
    fn test_scene_config() {
        let yaml = r#"
wave:
  kind: composite
  members:
    - wave:
        kind: sine
      weight: 0.5
    - wave:
        kind: noise
      weight: 0.1
controls:
  frequency: 2.0
  phase_offset: 0.5
"#;
        let config: SceneConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.wave.is_deterministic());
        assert_eq!(config.controls.magnitude, 1.0);
        assert_eq!(config.samples.count, 40);
        assert_eq!(config.colors.total_samples, 256.0);
    }

    #[test]
    fn test_config_validation() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());

        let mut bad_total = SceneConfig::default();
        bad_total.colors.total_samples = 0.0;
        assert!(bad_total.validate().is_err());

        let mut bad_span = SceneConfig::default();
        bad_span.samples.phase_span = f64::NAN;
        assert!(bad_span.validate().is_err());

        let mut bad_controls = SceneConfig::default();
        bad_controls.controls.magnitude = f64::INFINITY;
        assert!(bad_controls.validate().is_err());

        let mut too_many = SceneConfig::default();
        too_many.samples.count = MAX_COUNT + 1;
        assert!(too_many.validate().is_err());

        let custom = SceneConfig {
            wave: Waveform::custom(|t: f64| t.cos()),
            ..SceneConfig::default()
        };
        assert!(custom.validate().is_err());
    }

    #[test]
    fn test_negative_frequency_is_valid() {
        let mut config = SceneConfig::default();
        config.controls = WaveParameters::new(-1.0, 0.0, 1.0);
        assert!(config.validate().is_ok());
        assert!((config.oscillator().eval(1.0) - (-1.0f64).sin()).abs() < 1e-12);
    }

    #[test]
    fn test_example_yaml_parses() {
        let yaml = SceneConfig::example_yaml().unwrap();
        let config: SceneConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.colors.count, 300);
        let expected = presets::combo().eval(0.7);
        assert!((config.oscillator().eval(0.7) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_from_preset() {
        assert!(SceneConfig::from_preset("square").is_ok());
        assert!(SceneConfig::from_preset("chirp").is_err());
    }
}
