use crate::error::{SpiralineError, SpiralineResult};

/// Immutable configuration for one render.
///
/// A render is a pure function of `(SourceImage, SpiralParams)`; changing any
/// field means re-rendering from scratch. The core never validates these —
/// degenerate values (for example `turns = 0`) produce a near-empty drawing,
/// not an error. Callers that accept user input should run [`validate`]
/// (`SpiralParams::validate`) at the boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpiralParams {
    /// Requested number of full revolutions (upper bound; the canvas edge wins).
    pub turns: u32,
    /// Radial distance in pixels between successive spiral arms.
    pub line_spacing: f64,
    /// Stroke width drawn over pure white (shade 0).
    pub min_width: f64,
    /// Stroke width drawn over pure black (shade 1).
    pub max_width: f64,
    /// Tone curve exponent applied after normalization and inversion.
    pub gamma: f64,
    /// Invert luminance before the tone curve.
    pub invert: bool,
    /// Clip the stroke to a centered circle of radius `resolution/2 - max_width`.
    pub crop_to_circle: bool,
    /// Output side length in pixels (square canvas).
    pub resolution: u32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            turns: 140,
            line_spacing: 3.0,
            min_width: 0.6,
            max_width: 4.2,
            gamma: 1.15,
            invert: false,
            crop_to_circle: true,
            resolution: 2048,
        }
    }
}

impl SpiralParams {
    pub fn validate(&self) -> SpiralineResult<()> {
        if self.resolution == 0 {
            return Err(SpiralineError::validation("resolution must be > 0"));
        }
        for (name, v) in [
            ("line_spacing", self.line_spacing),
            ("min_width", self.min_width),
            ("max_width", self.max_width),
            ("gamma", self.gamma),
        ] {
            if !v.is_finite() {
                return Err(SpiralineError::validation(format!(
                    "{name} must be a finite number"
                )));
            }
        }
        if self.min_width < 0.0 || self.max_width < 0.0 {
            return Err(SpiralineError::validation(
                "stroke widths must be >= 0",
            ));
        }
        if self.min_width > self.max_width {
            return Err(SpiralineError::validation(
                "min_width must be <= max_width",
            ));
        }
        if self.gamma <= 0.0 {
            return Err(SpiralineError::validation("gamma must be > 0"));
        }
        if self.line_spacing < 0.0 {
            return Err(SpiralineError::validation("line_spacing must be >= 0"));
        }
        Ok(())
    }
}
