//! Factories producing the payload of newly created particles

use crate::particle::Payload;
use crate::rand::ParticleRng;
use crate::shape::{Shape, ShapeKind};
use confetti_core::Color;

/// Produces the visual payload for a particle the pool could not supply.
///
/// The manager never inspects the concrete payload; it only relies on the
/// `Payload` contract. Any `FnMut(&mut ParticleRng) -> P` closure is a factory.
pub trait ParticleFactory {
    type Payload: Payload;

    fn create(&mut self, rng: &mut ParticleRng) -> Self::Payload;
}

impl<P, F> ParticleFactory for F
where
    P: Payload,
    F: FnMut(&mut ParticleRng) -> P,
{
    type Payload = P;

    fn create(&mut self, rng: &mut ParticleRng) -> P {
        self(rng)
    }
}

/// What a `ShapeFactory` produces
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeStyle {
    /// Random kind, random color from the palette
    Flat { palette: Vec<Color> },
    /// Random kind, random phase
    Shimmering {
        from: Color,
        to: Color,
        period_ms: f32,
    },
    /// Random texture from the list
    Textured { textures: Vec<String>, height: f32 },
}

/// Stock factory for `Shape` payloads
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeFactory {
    pub kinds: Vec<ShapeKind>,
    pub size: f32,
    pub style: ShapeStyle,
}

impl ShapeFactory {
    /// Flat circles, squares and triangles in the given colors
    pub fn flat(palette: Vec<Color>, size: f32) -> Self {
        Self {
            kinds: ShapeKind::ALL.to_vec(),
            size,
            style: ShapeStyle::Flat { palette },
        }
    }

    /// Shapes shimmering between two colors over `period_ms`
    pub fn shimmering(from: Color, to: Color, period_ms: f32, size: f32) -> Self {
        Self {
            kinds: ShapeKind::ALL.to_vec(),
            size,
            style: ShapeStyle::Shimmering {
                from,
                to,
                period_ms,
            },
        }
    }

    /// Square textured confetti, e.g. snowflakes
    pub fn textured(texture: impl Into<String>, size: f32) -> Self {
        Self {
            kinds: Vec::new(),
            size,
            style: ShapeStyle::Textured {
                textures: vec![texture.into()],
                height: size,
            },
        }
    }

    fn pick_kind(&self, rng: &mut ParticleRng) -> ShapeKind {
        if self.kinds.is_empty() {
            ShapeKind::Square
        } else {
            self.kinds[rng.index(self.kinds.len())]
        }
    }
}

impl ParticleFactory for ShapeFactory {
    type Payload = Shape;

    fn create(&mut self, rng: &mut ParticleRng) -> Shape {
        match &self.style {
            ShapeStyle::Flat { palette } => {
                let kind = self.pick_kind(rng);
                let color = if palette.is_empty() {
                    Color::WHITE
                } else {
                    palette[rng.index(palette.len())]
                };
                Shape::Flat {
                    kind,
                    size: self.size,
                    color,
                }
            }
            ShapeStyle::Shimmering {
                from,
                to,
                period_ms,
            } => {
                let kind = self.pick_kind(rng);
                Shape::Shimmering {
                    kind,
                    size: self.size,
                    from: *from,
                    to: *to,
                    period_ms: *period_ms,
                    phase_ms: rng.range(0.0, period_ms.max(0.0)),
                }
            }
            ShapeStyle::Textured { textures, height } => {
                let texture = if textures.is_empty() {
                    String::new()
                } else {
                    textures[rng.index(textures.len())].clone()
                };
                Shape::Textured {
                    texture,
                    width: self.size,
                    height: *height,
                }
            }
        }
    }
}
