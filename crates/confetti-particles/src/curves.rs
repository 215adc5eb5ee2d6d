//! Interpolation helpers and opacity curves for fading particles

use confetti_core::{ConfettiError, Color, Result};

/// Linear interpolation between two floats
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation between two RGBA colors
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        lerp_f32(a.r, b.r, t),
        lerp_f32(a.g, b.g, t),
        lerp_f32(a.b, b.b, t),
        lerp_f32(a.a, b.a, t),
    )
}

/// Maps lifetime progress in [0, 1] to opacity in [0, 1]
#[derive(Clone, Copy, Debug)]
pub enum FadeCurve {
    /// Fully opaque until 90% of the lifetime, then a linear ramp to 0
    Default,
    /// `1 - p`
    Linear,
    /// `1 - p²`, holds opacity longer before dropping
    EaseOut,
    Custom(fn(f32) -> f32),
}

impl FadeCurve {
    pub const NAMES: [&'static str; 3] = ["default", "linear", "ease_out"];

    /// Opacity for the given progress; input and output are clamped to [0, 1]
    pub fn evaluate(&self, progress: f32) -> f32 {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let alpha = match self {
            FadeCurve::Default => {
                if p >= 0.9 {
                    1.0 - (p - 0.9) * 10.0
                } else {
                    1.0
                }
            }
            FadeCurve::Linear => 1.0 - p,
            FadeCurve::EaseOut => 1.0 - p * p,
            FadeCurve::Custom(f) => f(p),
        };
        alpha.clamp(0.0, 1.0)
    }

    /// Look up a named curve (as used in TOML configs)
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "default" => Ok(FadeCurve::Default),
            "linear" => Ok(FadeCurve::Linear),
            "ease_out" => Ok(FadeCurve::EaseOut),
            other => Err(ConfettiError::InvalidEnumValue {
                value: other.to_string(),
                allowed: Self::NAMES.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}
