//! Stock confetto payloads: flat shapes, textures and shimmering shapes

use crate::curves::lerp_color;
use crate::particle::Payload;
use confetti_core::Color;

/// Outline of a flat confetto
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

    /// Variant code used in packed instance data
    pub fn code(&self) -> u32 {
        match self {
            ShapeKind::Circle => 1,
            ShapeKind::Square => 2,
            ShapeKind::Triangle => 3,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    /// Single-character glyph, handy for text renderers
    pub fn glyph(&self) -> char {
        match self {
            ShapeKind::Circle => 'o',
            ShapeKind::Square => '#',
            ShapeKind::Triangle => '^',
        }
    }
}

/// Variant code of textured payloads
pub const TEXTURED_VARIANT: u32 = 4;

/// Visual payload of a stock confetto
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Single-color shape
    Flat {
        kind: ShapeKind,
        size: f32,
        color: Color,
    },
    /// Image looked up by name in the renderer's texture cache
    Textured {
        texture: String,
        width: f32,
        height: f32,
    },
    /// Shape whose color oscillates between two colors
    Shimmering {
        kind: ShapeKind,
        size: f32,
        from: Color,
        to: Color,
        period_ms: f32,
        /// Offset into the period so neighbours don't shimmer in sync
        phase_ms: f32,
    },
}

impl Shape {
    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Shape::Flat { kind, .. } | Shape::Shimmering { kind, .. } => Some(*kind),
            Shape::Textured { .. } => None,
        }
    }
}

impl Payload for Shape {
    fn width(&self) -> f32 {
        match self {
            Shape::Flat { size, .. } | Shape::Shimmering { size, .. } => *size,
            Shape::Textured { width, .. } => *width,
        }
    }

    fn height(&self) -> f32 {
        match self {
            Shape::Flat { size, .. } | Shape::Shimmering { size, .. } => *size,
            Shape::Textured { height, .. } => *height,
        }
    }

    fn variant(&self) -> u32 {
        match self {
            Shape::Flat { kind, .. } | Shape::Shimmering { kind, .. } => kind.code(),
            Shape::Textured { .. } => TEXTURED_VARIANT,
        }
    }

    fn color_at(&self, t_ms: f32) -> Color {
        match self {
            Shape::Flat { color, .. } => *color,
            Shape::Textured { .. } => Color::WHITE,
            Shape::Shimmering {
                from,
                to,
                period_ms,
                phase_ms,
                ..
            } => {
                if *period_ms <= 0.0 {
                    return *from;
                }
                // Triangle wave: from → to → from over one period
                let phase = ((t_ms + phase_ms) / period_ms).rem_euclid(1.0);
                let t = 1.0 - (2.0 * phase - 1.0).abs();
                lerp_color(*from, *to, t)
            }
        }
    }
}
