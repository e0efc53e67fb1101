//! Linear mapper implementation

use super::Mapper;

/// Linear interpolation between an input range and an output range
#[derive(Debug, Clone, PartialEq)]
pub struct LinearMapper {
    name: String,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    clamp: bool,
}

impl LinearMapper {
    /// Create a new linear mapper; output is not clamped
    pub fn new(
        name: impl Into<String>,
        in_min: f64,
        in_max: f64,
        out_min: f64,
        out_max: f64,
    ) -> Self {
        Self {
            name: name.into(),
            in_min,
            in_max,
            out_min,
            out_max,
            clamp: false,
        }
    }

    /// Map a bipolar signal in `[-1, 1]` to `[0, 1]`, i.e. `(x + 1) / 2`
    pub fn bipolar_to_unit(name: impl Into<String>) -> Self {
        Self::new(name, -1.0, 1.0, 0.0, 1.0)
    }

    /// Set whether to clamp output to range
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Whether output is clamped to the output range
    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    /// Check whether a value falls inside the output range
    pub fn in_output_range(&self, value: f64) -> bool {
        let lo = self.out_min.min(self.out_max);
        let hi = self.out_min.max(self.out_max);
        (lo..=hi).contains(&value)
    }
}

impl Mapper for LinearMapper {
    fn name(&self) -> &str {
        &self.name
    }

    fn map(&self, input: f64) -> f64 {
        // Normalize input to 0..1
        let in_range = self.in_max - self.in_min;
        let normalized = if in_range.abs() < f64::EPSILON {
            0.5
        } else {
            (input - self.in_min) / in_range
        };

        let out_range = self.out_max - self.out_min;
        let output = self.out_min + normalized * out_range;

        if self.clamp {
            output.clamp(self.out_min.min(self.out_max), self.out_min.max(self.out_max))
        } else {
            output
        }
    }
}
