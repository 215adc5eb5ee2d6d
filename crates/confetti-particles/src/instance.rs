//! Packed per-particle records for renderers

use crate::particle::{Particle, Payload};
use bytemuck::{Pod, Zeroable};

/// Instance data for one visible particle.
/// 48 bytes, 16-byte rows so it can be uploaded as three vec4s.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub pos_size: [f32; 4],         // xy = top-left, zw = width/height
    pub color: [f32; 4],            // rgba, alpha already scaled by opacity
    pub rotation_opacity: [f32; 4], // x = rotation (deg), y = opacity, z = visible, w = variant
}

impl ParticleInstance {
    pub fn from_particle<P: Payload>(p: &Particle<P>) -> Self {
        let state = p.render_state();
        let payload = p.payload();
        let [r, g, b, a] = p.color().to_array();
        Self {
            pos_size: [
                state.position.x,
                state.position.y,
                payload.width(),
                payload.height(),
            ],
            color: [r, g, b, a * state.opacity],
            rotation_opacity: [
                state.rotation,
                state.opacity,
                if state.visible { 1.0 } else { 0.0 },
                payload.variant() as f32,
            ],
        }
    }

    pub fn position(&self) -> [f32; 2] {
        [self.pos_size[0], self.pos_size[1]]
    }

    pub fn opacity(&self) -> f32 {
        self.rotation_opacity[1]
    }

    pub fn variant(&self) -> u32 {
        self.rotation_opacity[3] as u32
    }
}
