//! Waveform trees
//!
//! A [`Waveform`] is either one of the basic shapes or a composition of
//! other waveforms. One evaluator walks the tree, and every variant except
//! [`Waveform::Custom`] can be written to and read from configuration files.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::compose::{WaveParameters, Weighted};
use super::{noise, sawtooth, sine, square, triangle, Oscillator};

/// Waveform types
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
    Square,
    Sawtooth,
    /// Uniform noise in `[-1, 1]`, different on every evaluation
    Noise,
    /// Base waveform with frequency, phase offset and magnitude applied
    Parameterized {
        base: Box<Waveform>,
        #[serde(default)]
        params: WaveParameters,
    },
    /// Plain sum of the components, evaluated left to right
    Sum {
        #[serde(default)]
        components: Vec<Waveform>,
    },
    /// Weighted sum of the members, evaluated left to right
    Composite {
        #[serde(default)]
        members: Vec<Weighted>,
    },
    /// Any other oscillator; cannot be stored in configuration
    #[serde(skip)]
    Custom(Arc<dyn Oscillator>),
}

impl Waveform {
    /// Wrap an arbitrary oscillator so it can join a tree
    pub fn custom(oscillator: impl Oscillator + 'static) -> Self {
        Waveform::Custom(Arc::new(oscillator))
    }

    /// Apply parameters to this waveform
    ///
    /// Identity parameters return the waveform unchanged.
    pub fn parameterize(self, params: WaveParameters) -> Self {
        if params.is_identity() {
            return self;
        }
        Waveform::Parameterized {
            base: Box::new(self),
            params,
        }
    }

    /// Evaluate the waveform at `phase` radians
    pub fn eval(&self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => sine(phase),
            Waveform::Triangle => triangle(phase),
            Waveform::Square => square(phase),
            Waveform::Sawtooth => sawtooth(phase),
            Waveform::Noise => noise(phase),
            Waveform::Parameterized { base, params } => {
                base.eval(params.inner_phase(phase)) * params.magnitude
            }
            Waveform::Sum { components } => components
                .iter()
                .fold(0.0, |acc, wave| acc + wave.eval(phase)),
            Waveform::Composite { members } => members
                .iter()
                .fold(0.0, |acc, member| acc + member.wave.eval(phase) * member.weight),
            Waveform::Custom(oscillator) => oscillator.eval(phase),
        }
    }

    /// False if any noise leaf is reachable
    ///
    /// Custom oscillators are assumed deterministic.
    pub fn is_deterministic(&self) -> bool {
        match self {
            Waveform::Noise => false,
            Waveform::Parameterized { base, .. } => base.is_deterministic(),
            Waveform::Sum { components } => components.iter().all(Waveform::is_deterministic),
            Waveform::Composite { members } => {
                members.iter().all(|m| m.wave.is_deterministic())
            }
            _ => true,
        }
    }

    /// True if the tree contains a custom oscillator
    pub fn has_custom(&self) -> bool {
        match self {
            Waveform::Custom(_) => true,
            Waveform::Parameterized { base, .. } => base.has_custom(),
            Waveform::Sum { components } => components.iter().any(Waveform::has_custom),
            Waveform::Composite { members } => members.iter().any(|m| m.wave.has_custom()),
            _ => false,
        }
    }

    /// Upper bound on `|eval(t)|` for every phase
    ///
    /// Custom oscillators are assumed to stay within `[-1, 1]`.
    pub fn peak(&self) -> f64 {
        match self {
            Waveform::Parameterized { base, params } => base.peak() * params.magnitude.abs(),
            Waveform::Sum { components } => components.iter().map(Waveform::peak).sum(),
            Waveform::Composite { members } => members
                .iter()
                .map(|m| m.wave.peak() * m.weight.abs())
                .sum(),
            _ => 1.0,
        }
    }
}

impl Oscillator for Waveform {
    fn eval(&self, phase: f64) -> f64 {
        Waveform::eval(self, phase)
    }
}

impl fmt::Debug for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Waveform::Sine => f.write_str("Sine"),
            Waveform::Triangle => f.write_str("Triangle"),
            Waveform::Square => f.write_str("Square"),
            Waveform::Sawtooth => f.write_str("Sawtooth"),
            Waveform::Noise => f.write_str("Noise"),
            Waveform::Parameterized { base, params } => f
                .debug_struct("Parameterized")
                .field("base", base)
                .field("params", params)
                .finish(),
            Waveform::Sum { components } => {
                f.debug_struct("Sum").field("components", components).finish()
            }
            Waveform::Composite { members } => {
                f.debug_struct("Composite").field("members", members).finish()
            }
            Waveform::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{composite, parameterize, sum, NoiseSource, PERIOD};
    use std::f64::consts::PI;

    #[test]
    fn test_basic_shapes_match_functions() {
        for i in 0..100 {
            let t = i as f64 * 0.13 - 5.0;
            assert_eq!(Waveform::Sine.eval(t), sine(t));
            assert_eq!(Waveform::Triangle.eval(t), triangle(t));
            assert_eq!(Waveform::Square.eval(t), square(t));
            assert_eq!(Waveform::Sawtooth.eval(t), sawtooth(t));
        }
    }

    #[test]
    fn test_nested_composition() {
        let inner = sum([Waveform::Sine, Waveform::Square]);
        let outer = parameterize(inner, 2.0, 0.0, 0.5);
        let t = 0.3;
        let expected = (sine(0.6) + square(0.6)) * 0.5;
        assert!((outer.eval(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_composed_periodicity() {
        let wave = sum([
            parameterize(Waveform::Triangle, 2.0, 0.4, 0.3),
            parameterize(Waveform::Sine, 1.0, PI / 3.0, 0.7),
        ]);
        for i in 0..100 {
            let t = i as f64 * 0.071;
            assert!((wave.eval(t) - wave.eval(t + PERIOD)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_identity_parameterize_is_noop() {
        let wave = Waveform::Square.parameterize(WaveParameters::default());
        assert!(matches!(wave, Waveform::Square));
    }

    #[test]
    fn test_determinism() {
        assert!(Waveform::Sine.is_deterministic());
        assert!(!Waveform::Noise.is_deterministic());
        let mixed = composite([(Waveform::Sine, 1.0), (Waveform::Noise, 0.1)]);
        assert!(!mixed.is_deterministic());
        assert!(!parameterize(Waveform::Noise, 1.0, 0.0, 2.0).is_deterministic());
    }

    #[test]
    fn test_peak() {
        assert_eq!(Waveform::Sine.peak(), 1.0);
        assert_eq!(parameterize(Waveform::Sine, 1.0, 0.0, -3.0).peak(), 3.0);
        assert_eq!(sum([Waveform::Sine, Waveform::Square]).peak(), 2.0);
        assert_eq!(composite([(Waveform::Sine, 0.5), (Waveform::Noise, -0.25)]).peak(), 0.75);
        assert_eq!(sum(Vec::new()).peak(), 0.0);
    }

    #[test]
    fn test_custom_oscillator() {
        let wave = sum([Waveform::custom(|t: f64| t.cos()), Waveform::Sine]);
        assert!(wave.has_custom());
        assert!((wave.eval(0.0) - 1.0).abs() < 1e-12);

        let seeded = Waveform::custom(NoiseSource::seeded(1));
        let value = seeded.eval(0.0);
        assert!((-1.0..=1.0).contains(&value));
        assert_eq!(format!("{:?}", seeded), "Custom(..)");
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = r#"
kind: sum
components:
  - kind: sine
  - kind: parameterized
    base:
      kind: triangle
    params:
      frequency: 10
      magnitude: 0.1
"#;
        let wave: Waveform = serde_yaml::from_str(yaml).unwrap();
        let t = 0.42;
        let expected = sine(t) + triangle(t * 10.0) * 0.1;
        assert!((wave.eval(t) - expected).abs() < 1e-12);

        let text = serde_yaml::to_string(&wave).unwrap();
        let back: Waveform = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back.eval(t), wave.eval(t));
    }

    #[test]
    fn test_custom_is_not_serializable() {
        let wave = Waveform::custom(|t: f64| t);
        assert!(serde_json::to_string(&wave).is_err());
    }
}
