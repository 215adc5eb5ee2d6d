//! Ready-made confetti animations

use crate::config::ManagerConfig;
use crate::curves::FadeCurve;
use crate::factory::ShapeFactory;
use crate::manager::ParticleManager;
use crate::source::ParticleSource;
use confetti_core::{Color, ConfettiError, Rect};
use confetti_runtime::INFINITE_DURATION;
use std::str::FromStr;

/// Sizing and speed constants shared by the presets.
/// Built once by the host and passed by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Edge of a regular confetto in px
    pub particle_size: f32,
    /// Edge of a large textured flake in px
    pub big_particle_size: f32,
    /// px/s
    pub velocity_slow: f32,
    pub velocity_normal: f32,
    pub velocity_fast: f32,
    /// Half-extent of the explosion bound in px
    pub explosion_radius: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            particle_size: 12.0,
            big_particle_size: 32.0,
            velocity_slow: 60.0,
            velocity_normal: 120.0,
            velocity_fast: 240.0,
            explosion_radius: 150.0,
        }
    }
}

impl Dimensions {
    /// Scale every length and speed by a display density factor
    pub fn scaled(&self, density: f32) -> Self {
        Self {
            particle_size: self.particle_size * density,
            big_particle_size: self.big_particle_size * density,
            velocity_slow: self.velocity_slow * density,
            velocity_normal: self.velocity_normal * density,
            velocity_fast: self.velocity_fast * density,
            explosion_radius: self.explosion_radius * density,
        }
    }
}

/// Named presets, as used on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Raining,
    FallingFromPoint,
    Explosion,
    Shimmering,
    Touch,
}

impl PresetKind {
    pub const NAMES: [&'static str; 5] = [
        "raining",
        "falling-from-point",
        "explosion",
        "shimmering",
        "touch",
    ];

    /// Build the preset for a surface; explosions go off at its center
    pub fn build(self, surface: Rect, colors: &[Color], dims: &Dimensions) -> Preset {
        match self {
            PresetKind::Raining => Preset::raining(surface, colors, dims),
            PresetKind::FallingFromPoint => Preset::falling_from_point(surface, colors, dims),
            PresetKind::Explosion => {
                let x = (surface.left + surface.right) / 2.0;
                let y = (surface.top + surface.bottom) / 2.0;
                Preset::explosion(x, y, surface, colors, dims)
            }
            PresetKind::Shimmering => Preset::shimmering(surface, dims),
            PresetKind::Touch => Preset::falling_with_touch(surface, dims),
        }
    }
}

impl FromStr for PresetKind {
    type Err = ConfettiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "raining" => Ok(PresetKind::Raining),
            "falling-from-point" => Ok(PresetKind::FallingFromPoint),
            "explosion" => Ok(PresetKind::Explosion),
            "shimmering" => Ok(PresetKind::Shimmering),
            "touch" | "falling-with-touch" => Ok(PresetKind::Touch),
            _ => Err(ConfettiError::UnknownPreset(s.to_string())),
        }
    }
}

/// A configured animation waiting for a mode (`one_shot`, `stream`,
/// `infinite`) and a manager
#[derive(Debug, Clone)]
pub struct Preset {
    /// Host surface the preset was laid out for
    pub surface: Rect,
    pub config: ManagerConfig,
    pub source: ParticleSource,
    pub factory: ShapeFactory,
    /// Particles emitted at once by `one_shot`
    pub burst_count: usize,
    /// Particles per second for `stream` and `infinite`
    pub stream_rate: f32,
}

impl Preset {
    fn new(
        surface: Rect,
        config: ManagerConfig,
        source: ParticleSource,
        factory: ShapeFactory,
    ) -> Self {
        Self {
            surface,
            config,
            source,
            factory,
            burst_count: 100,
            stream_rate: 50.0,
        }
    }

    /// Confetti falling from just above the top edge of the surface
    pub fn raining(surface: Rect, colors: &[Color], dims: &Dimensions) -> Self {
        let y = surface.top - dims.particle_size;
        let source = ParticleSource::range(surface.left, y, surface.right, y);
        Self::raining_from(source, surface, colors, dims)
    }

    /// Confetti falling from a custom source
    pub fn raining_from(
        source: ParticleSource,
        surface: Rect,
        colors: &[Color],
        dims: &Dimensions,
    ) -> Self {
        let config = ManagerConfig::new(surface)
            .with_velocity_x(0.0, dims.velocity_slow)
            .with_velocity_y(dims.velocity_normal, dims.velocity_slow)
            .with_rotation(180.0, 180.0)
            .with_rotational_acceleration(360.0, 180.0)
            .with_target_rotational_velocity(360.0, 0.0);
        Self::new(
            surface,
            config,
            source,
            ShapeFactory::flat(colors.to_vec(), dims.particle_size),
        )
    }

    /// Confetti thrown sideways from the top-left corner, drifting to a stop
    /// horizontally while falling
    pub fn falling_from_point(surface: Rect, colors: &[Color], dims: &Dimensions) -> Self {
        let size = dims.particle_size;
        let mut preset = Self::raining_from(
            ParticleSource::point(surface.left - size, surface.top - size),
            surface,
            colors,
            dims,
        );
        preset.config = preset
            .config
            .with_velocity_x(dims.velocity_fast, dims.velocity_normal)
            .with_acceleration_x(-dims.velocity_normal, dims.velocity_slow)
            .with_target_velocity_x(0.0, dims.velocity_slow / 2.0)
            .with_velocity_y(dims.velocity_normal, dims.velocity_slow);
        preset
    }

    /// Confetti bursting out of `(x, y)` in all directions, fading within a
    /// second and clipped to a square around the point
    pub fn explosion(x: f32, y: f32, surface: Rect, colors: &[Color], dims: &Dimensions) -> Self {
        let config = ManagerConfig::new(surface)
            .with_ttl(1000)
            .with_bound(Rect::around(x, y, dims.explosion_radius))
            .with_velocity_x(0.0, dims.velocity_fast)
            .with_velocity_y(0.0, dims.velocity_fast)
            .with_fade_out(FadeCurve::Default)
            .with_rotation(180.0, 180.0)
            .with_rotational_acceleration(360.0, 180.0)
            .with_target_rotational_velocity(360.0, 0.0);
        Self::new(
            surface,
            config,
            ParticleSource::point(x, y),
            ShapeFactory::flat(colors.to_vec(), dims.particle_size),
        )
    }

    /// Raining confetti shimmering between two golds
    pub fn shimmering(surface: Rect, dims: &Dimensions) -> Self {
        let mut preset = Self::raining(surface, &[], dims);
        preset.factory = ShapeFactory::shimmering(
            Color::GOLD_LIGHT,
            Color::GOLD_DARK,
            1000.0,
            dims.particle_size,
        );
        preset
    }

    /// Large snowflakes that can be grabbed and flung
    pub fn falling_with_touch(surface: Rect, dims: &Dimensions) -> Self {
        let size = dims.big_particle_size;
        let y = surface.top - size;
        let config = ManagerConfig::new(surface)
            .with_velocity_x(0.0, dims.velocity_slow)
            .with_velocity_y(dims.velocity_normal, dims.velocity_slow)
            .with_rotational_velocity(180.0, 90.0)
            .with_touch_enabled(true);
        Self {
            burst_count: 20,
            stream_rate: 20.0,
            ..Self::new(
                surface,
                config,
                ParticleSource::range(surface.left, y, surface.right, y),
                ShapeFactory::textured("snowflake", size),
            )
        }
    }

    /// Everything at once, no further emission
    pub fn one_shot(mut self) -> Self {
        self.config = self
            .config
            .with_initial_count(self.burst_count)
            .with_emission_duration(0);
        self
    }

    /// Emit for `duration_ms`
    pub fn stream(mut self, duration_ms: u64) -> Self {
        self.config = self
            .config
            .with_initial_count(0)
            .with_emission_duration(duration_ms)
            .with_emission_rate(self.stream_rate);
        self
    }

    /// Emit until terminated
    pub fn infinite(self) -> Self {
        self.stream(INFINITE_DURATION)
    }

    pub fn into_manager(self) -> ParticleManager<ShapeFactory> {
        ParticleManager::new(self.factory, self.source, self.surface).with_config(self.config)
    }
}
