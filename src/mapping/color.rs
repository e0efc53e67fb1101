//! Phase to color mapping
//!
//! An index is turned into a phase on the color wheel, then the oscillator
//! is sampled at three points 120° apart. Each raw value in `[-1, 1]` maps
//! onto a channel in `[0, 1]`.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::{LinearMapper, Mapper};
use crate::error::{Error, Result};
use crate::synth::Oscillator;

/// Phase offset of the blue channel (240°)
pub const BLUE_OFFSET: f64 = TAU / 3.0 * 2.0;

/// Phase offset of the green channel (120°)
pub const GREEN_OFFSET: f64 = TAU / 3.0;

/// A color with channels nominally in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbColor {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Channels in the order red, blue, green
    ///
    /// This is the order in which the mapper samples the wheel.
    pub fn channels_rbg(&self) -> (f64, f64, f64) {
        (self.red, self.blue, self.green)
    }

    /// True if every channel lies in `[0, 1]`
    pub fn in_gamut(&self) -> bool {
        [self.red, self.green, self.blue]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// Convert to 8-bit channels, saturating out-of-gamut values
    pub fn to_rgb8(&self) -> [u8; 3] {
        // `as` saturates and maps NaN to 0
        let byte = |c: f64| (c * 255.0).round() as u8;
        [byte(self.red), byte(self.green), byte(self.blue)]
    }

    /// Hex notation such as `#ff8000`
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Maps an oscillator onto colors
///
/// By default channels are not clamped: an oscillator that leaves
/// `[-1, 1]` produces channels outside `[0, 1]`. With clamping enabled all
/// three channels are clamped the same way.
#[derive(Debug, Clone)]
pub struct ColorMapper {
    channel: LinearMapper,
}

impl ColorMapper {
    pub fn new() -> Self {
        Self {
            channel: LinearMapper::bipolar_to_unit("channel"),
        }
    }

    /// Set whether to clamp channels to `[0, 1]`
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.channel = self.channel.with_clamp(clamp);
        self
    }

    pub fn is_clamped(&self) -> bool {
        self.channel.is_clamped()
    }

    /// Phase of `index` when `total_samples` indices span one full turn
    pub fn theta(index: usize, total_samples: f64) -> Result<f64> {
        if !(total_samples.is_finite() && total_samples > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "total_samples must be finite and greater than zero, got {}",
                total_samples
            )));
        }
        Ok(index as f64 / total_samples * TAU)
    }

    /// Color for `index` out of `total_samples`
    ///
    /// `total_samples` is the number of indices per revolution and need not
    /// match how many indices the caller iterates.
    pub fn map<O: Oscillator + ?Sized>(
        &self,
        oscillator: &O,
        index: usize,
        total_samples: f64,
    ) -> Result<RgbColor> {
        let theta = Self::theta(index, total_samples)?;

        let red = self.channel.map(oscillator.eval(theta));
        let blue = self.channel.map(oscillator.eval(theta + BLUE_OFFSET));
        let green = self.channel.map(oscillator.eval(theta + GREEN_OFFSET));

        Ok(RgbColor::new(red, green, blue))
    }
}

impl Default for ColorMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Color for `index` out of `total_samples`, without clamping
pub fn map_to_color<O: Oscillator + ?Sized>(
    oscillator: &O,
    index: usize,
    total_samples: f64,
) -> Result<RgbColor> {
    ColorMapper::new().map(oscillator, index, total_samples)
}
