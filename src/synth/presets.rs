//! Named waveform presets

use super::{composite, parameterize, Waveform};
use crate::error::{Error, Result};

/// Names accepted by [`by_name`]
pub const PRESET_NAMES: &[&str] = &["sine", "triangle", "square", "sawtooth", "noise", "combo"];

/// A slow sine with a fast, quiet triangle ripple on top
///
/// `combo(t) = (triangle(10t) / 10 + sine(t)) / 2`
pub fn combo() -> Waveform {
    composite([
        (parameterize(Waveform::Triangle, 10.0, 0.0, 0.1), 0.5),
        (Waveform::Sine, 0.5),
    ])
}

/// Look up a preset by name
pub fn by_name(name: &str) -> Result<Waveform> {
    match name.to_ascii_lowercase().as_str() {
        "sine" => Ok(Waveform::Sine),
        "triangle" => Ok(Waveform::Triangle),
        "square" => Ok(Waveform::Square),
        "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
        "noise" => Ok(Waveform::Noise),
        "combo" => Ok(combo()),
        _ => Err(Error::UnknownPreset(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::{sine, triangle};

    #[test]
    fn test_combo_formula() {
        let wave = combo();
        for i in 0..300 {
            let t = i as f64 / 100.0 * std::f64::consts::PI;
            let expected = (triangle(t * 10.0) / 10.0 + sine(t)) / 2.0;
            assert!((wave.eval(t) - expected).abs() < 1e-12, "combo({})", t);
        }
    }

    #[test]
    fn test_all_names_resolve() {
        for name in PRESET_NAMES {
            assert!(by_name(name).is_ok(), "preset {} missing", name);
        }
        assert!(matches!(by_name("SAW"), Ok(Waveform::Sawtooth)));
    }

    #[test]
    fn test_unknown_preset() {
        assert_eq!(
            by_name("chirp").unwrap_err(),
            Error::UnknownPreset("chirp".to_string())
        );
    }
}
