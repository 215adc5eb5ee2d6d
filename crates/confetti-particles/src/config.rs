//! Run configuration for a particle manager
//!
//! Public setters take per-second units (px/s, px/s², particles/s, deg/s)
//! and rescale once; everything stored here is per millisecond.

use crate::curves::FadeCurve;
use crate::particle::SpawnParams;
use crate::rand::ParticleRng;
use crate::source::ParticleSource;
use confetti_core::{ConfettiError, Rect, Result};
use confetti_runtime::INFINITE_DURATION;

const PER_SECOND: f32 = 1000.0;
const PER_SECOND_SQUARED: f32 = 1_000_000.0;

/// A base value with a symmetric random deviation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spread {
    pub base: f32,
    pub deviation: f32,
}

impl Spread {
    pub const ZERO: Self = Self {
        base: 0.0,
        deviation: 0.0,
    };

    pub const fn new(base: f32, deviation: f32) -> Self {
        Self { base, deviation }
    }

    pub const fn fixed(base: f32) -> Self {
        Self::new(base, 0.0)
    }

    fn scaled(self, divisor: f32) -> Self {
        Self::new(self.base / divisor, self.deviation / divisor)
    }

    /// `base + deviation · (2u - 1)` for one uniform draw `u`
    pub fn sample(&self, rng: &mut ParticleRng) -> f32 {
        rng.variance(self.base, self.deviation)
    }
}

/// Tunables of one animation run. Mutable between runs only.
#[derive(Clone, Debug)]
pub struct ManagerConfig {
    /// Particles emitted at elapsed time 0
    pub initial_count: usize,
    /// Emission window in ms; `INFINITE_DURATION` never closes
    pub emission_duration: u64,
    /// Particles per ms
    pub emission_rate: f32,
    /// px/ms
    pub velocity_x: Spread,
    pub velocity_y: Spread,
    /// px/ms²
    pub acceleration_x: Spread,
    pub acceleration_y: Spread,
    pub target_velocity_x: Option<Spread>,
    pub target_velocity_y: Option<Spread>,
    /// Degrees
    pub rotation: Spread,
    /// deg/ms
    pub rotational_velocity: Spread,
    /// deg/ms²
    pub rotational_acceleration: Spread,
    pub target_rotational_velocity: Option<Spread>,
    /// Clipping rectangle in global coordinates
    pub bound: Rect,
    /// `None` expires particles by leaving the bound
    pub ttl: Option<u64>,
    pub fade_out: Option<FadeCurve>,
    pub touch_enabled: bool,
}

impl ManagerConfig {
    /// Defaults with the surface's full area as the bound
    pub fn new(surface: Rect) -> Self {
        Self {
            initial_count: 0,
            emission_duration: 0,
            emission_rate: 0.0,
            velocity_x: Spread::ZERO,
            velocity_y: Spread::ZERO,
            acceleration_x: Spread::ZERO,
            acceleration_y: Spread::ZERO,
            target_velocity_x: None,
            target_velocity_y: None,
            rotation: Spread::ZERO,
            rotational_velocity: Spread::ZERO,
            rotational_acceleration: Spread::ZERO,
            target_rotational_velocity: None,
            bound: surface,
            ttl: None,
            fade_out: None,
            touch_enabled: false,
        }
    }

    pub fn with_initial_count(mut self, count: usize) -> Self {
        self.initial_count = count;
        self
    }

    /// Emission window in ms, or `INFINITE_DURATION`
    pub fn with_emission_duration(mut self, duration_ms: u64) -> Self {
        self.emission_duration = duration_ms;
        self
    }

    /// Particles per second
    pub fn with_emission_rate(mut self, per_second: f32) -> Self {
        self.emission_rate = per_second / PER_SECOND;
        self
    }

    /// px/s
    pub fn with_velocity_x(mut self, base: f32, deviation: f32) -> Self {
        self.velocity_x = Spread::new(base, deviation).scaled(PER_SECOND);
        self
    }

    /// px/s, positive is downwards
    pub fn with_velocity_y(mut self, base: f32, deviation: f32) -> Self {
        self.velocity_y = Spread::new(base, deviation).scaled(PER_SECOND);
        self
    }

    /// px/s²
    pub fn with_acceleration_x(mut self, base: f32, deviation: f32) -> Self {
        self.acceleration_x = Spread::new(base, deviation).scaled(PER_SECOND_SQUARED);
        self
    }

    /// px/s²
    pub fn with_acceleration_y(mut self, base: f32, deviation: f32) -> Self {
        self.acceleration_y = Spread::new(base, deviation).scaled(PER_SECOND_SQUARED);
        self
    }

    /// px/s
    pub fn with_target_velocity_x(mut self, base: f32, deviation: f32) -> Self {
        self.target_velocity_x = Some(Spread::new(base, deviation).scaled(PER_SECOND));
        self
    }

    /// px/s
    pub fn with_target_velocity_y(mut self, base: f32, deviation: f32) -> Self {
        self.target_velocity_y = Some(Spread::new(base, deviation).scaled(PER_SECOND));
        self
    }

    /// Degrees
    pub fn with_rotation(mut self, base: f32, deviation: f32) -> Self {
        self.rotation = Spread::new(base, deviation);
        self
    }

    /// deg/s
    pub fn with_rotational_velocity(mut self, base: f32, deviation: f32) -> Self {
        self.rotational_velocity = Spread::new(base, deviation).scaled(PER_SECOND);
        self
    }

    /// deg/s²
    pub fn with_rotational_acceleration(mut self, base: f32, deviation: f32) -> Self {
        self.rotational_acceleration =
            Spread::new(base, deviation).scaled(PER_SECOND_SQUARED);
        self
    }

    /// deg/s
    pub fn with_target_rotational_velocity(mut self, base: f32, deviation: f32) -> Self {
        self.target_rotational_velocity = Some(Spread::new(base, deviation).scaled(PER_SECOND));
        self
    }

    pub fn with_bound(mut self, bound: Rect) -> Self {
        self.bound = bound;
        self
    }

    /// Lifetime in ms after the initial delay
    pub fn with_ttl(mut self, ttl_ms: u64) -> Self {
        self.ttl = Some(ttl_ms);
        self
    }

    /// Expire by leaving the bound instead of by time
    pub fn without_ttl(mut self) -> Self {
        self.ttl = None;
        self
    }

    pub fn with_fade_out(mut self, curve: FadeCurve) -> Self {
        self.fade_out = Some(curve);
        self
    }

    pub fn without_fade_out(mut self) -> Self {
        self.fade_out = None;
        self
    }

    pub fn with_touch_enabled(mut self, enabled: bool) -> Self {
        self.touch_enabled = enabled;
        self
    }

    /// Check the configuration before a run starts
    pub fn validate(&self) -> Result<()> {
        if !self.emission_rate.is_finite() || self.emission_rate < 0.0 {
            return Err(ConfettiError::configuration(
                "emission_rate",
                "must be finite and non-negative",
            ));
        }
        if self.emission_duration > 0 && self.emission_rate == 0.0 {
            return Err(ConfettiError::configuration(
                "emission_rate",
                "must be positive when emission_duration is non-zero",
            ));
        }

        let spreads = [
            ("velocity_x", Some(self.velocity_x)),
            ("velocity_y", Some(self.velocity_y)),
            ("acceleration_x", Some(self.acceleration_x)),
            ("acceleration_y", Some(self.acceleration_y)),
            ("target_velocity_x", self.target_velocity_x),
            ("target_velocity_y", self.target_velocity_y),
            ("rotation", Some(self.rotation)),
            ("rotational_velocity", Some(self.rotational_velocity)),
            ("rotational_acceleration", Some(self.rotational_acceleration)),
            ("target_rotational_velocity", self.target_rotational_velocity),
        ];
        for (field, spread) in spreads {
            let Some(spread) = spread else { continue };
            if !spread.base.is_finite() {
                return Err(ConfettiError::configuration(field, "base must be finite"));
            }
            if !spread.deviation.is_finite() || spread.deviation < 0.0 {
                return Err(ConfettiError::configuration(
                    field,
                    "deviation must be finite and non-negative",
                ));
            }
        }

        let b = &self.bound;
        if !(b.right >= b.left && b.bottom >= b.top) {
            return Err(ConfettiError::configuration(
                "bound",
                format!(
                    "[{}, {}, {}, {}] is inverted",
                    b.left, b.top, b.right, b.bottom
                ),
            ));
        }
        Ok(())
    }

    /// Draw the spawn state of one particle.
    ///
    /// Draw order is fixed so a seed reproduces a run: x, y, then each
    /// kinematic parameter, optional targets only when configured.
    pub fn spawn_params(
        &self,
        source: &ParticleSource,
        rng: &mut ParticleRng,
        initial_delay: u64,
    ) -> SpawnParams {
        let x = source.sample_x(rng.next_f32());
        let y = source.sample_y(rng.next_f32());
        let velocity_x = self.velocity_x.sample(rng);
        let velocity_y = self.velocity_y.sample(rng);
        let acceleration_x = self.acceleration_x.sample(rng);
        let acceleration_y = self.acceleration_y.sample(rng);
        let target_velocity_x = self.target_velocity_x.map(|s| s.sample(rng));
        let target_velocity_y = self.target_velocity_y.map(|s| s.sample(rng));
        let rotation = self.rotation.sample(rng);
        let rotational_velocity = self.rotational_velocity.sample(rng);
        let rotational_acceleration = self.rotational_acceleration.sample(rng);
        let target_rotational_velocity = self.target_rotational_velocity.map(|s| s.sample(rng));

        SpawnParams {
            initial_delay,
            x,
            y,
            velocity_x,
            velocity_y,
            acceleration_x,
            acceleration_y,
            target_velocity_x,
            target_velocity_y,
            rotation,
            rotational_velocity,
            rotational_acceleration,
            target_rotational_velocity,
            ttl: self.ttl,
            fade_out: self.fade_out,
        }
    }

    /// Parse a config table; values are in per-second units.
    ///
    /// Spreads are `[base, deviation]` or a bare base. Unknown keys are ignored.
    pub fn from_toml(table: &toml::value::Table, surface: Rect) -> Result<Self> {
        let mut config = Self::new(surface);

        if let Some(v) = table.get("initial_count") {
            let n = toml_int(v, "initial_count")?;
            config.initial_count = usize::try_from(n).map_err(|_| {
                ConfettiError::configuration("initial_count", "must be non-negative")
            })?;
        }
        if let Some(v) = table.get("emission_duration") {
            config.emission_duration = match v.as_str() {
                Some("infinite") => INFINITE_DURATION,
                Some(other) => {
                    return Err(ConfettiError::ParseError(format!(
                        "emission_duration: expected milliseconds or \"infinite\", got \"{other}\""
                    )))
                }
                None => u64::try_from(toml_int(v, "emission_duration")?).map_err(|_| {
                    ConfettiError::configuration("emission_duration", "must be non-negative")
                })?,
            };
        }
        if let Some(v) = table.get("emission_rate") {
            config = config.with_emission_rate(toml_f32(v, "emission_rate")?);
        }

        if let Some((b, d)) = spread_entry(table, "velocity_x")? {
            config = config.with_velocity_x(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "velocity_y")? {
            config = config.with_velocity_y(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "acceleration_x")? {
            config = config.with_acceleration_x(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "acceleration_y")? {
            config = config.with_acceleration_y(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "target_velocity_x")? {
            config = config.with_target_velocity_x(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "target_velocity_y")? {
            config = config.with_target_velocity_y(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "rotation")? {
            config = config.with_rotation(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "rotational_velocity")? {
            config = config.with_rotational_velocity(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "rotational_acceleration")? {
            config = config.with_rotational_acceleration(b, d);
        }
        if let Some((b, d)) = spread_entry(table, "target_rotational_velocity")? {
            config = config.with_target_rotational_velocity(b, d);
        }

        if let Some(v) = table.get("bound") {
            let [l, t, r, b] = toml_vec4(v, "bound")?;
            config.bound = Rect::new(l, t, r, b);
        }
        if let Some(v) = table.get("ttl") {
            let ttl = toml_int(v, "ttl")?;
            config.ttl = if ttl < 0 { None } else { Some(ttl as u64) };
        }
        if let Some(v) = table.get("fade_out") {
            let name = v
                .as_str()
                .ok_or_else(|| ConfettiError::ParseError("fade_out must be a string".into()))?;
            config.fade_out = match name {
                "none" => None,
                other => Some(FadeCurve::from_name(other)?),
            };
        }
        if let Some(v) = table.get("touch_enabled") {
            config.touch_enabled = v
                .as_bool()
                .ok_or_else(|| ConfettiError::ParseError("touch_enabled must be a boolean".into()))?;
        }

        Ok(config)
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, field: &str) -> Result<f32> {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .ok_or_else(|| ConfettiError::ParseError(format!("{field}: expected a number, got {v}")))
}

fn toml_int(v: &toml::Value, field: &str) -> Result<i64> {
    v.as_integer()
        .ok_or_else(|| ConfettiError::ParseError(format!("{field}: expected an integer, got {v}")))
}

fn toml_vec4(v: &toml::Value, field: &str) -> Result<[f32; 4]> {
    match v.as_array().map(Vec::as_slice) {
        Some([a, b, c, d]) => Ok([
            toml_f32(a, field)?,
            toml_f32(b, field)?,
            toml_f32(c, field)?,
            toml_f32(d, field)?,
        ]),
        _ => Err(ConfettiError::ParseError(format!(
            "{field}: expected an array of 4 numbers"
        ))),
    }
}

/// `key = base` or `key = [base, deviation]`
fn spread_entry(table: &toml::value::Table, key: &str) -> Result<Option<(f32, f32)>> {
    let Some(v) = table.get(key) else {
        return Ok(None);
    };
    match v.as_array().map(Vec::as_slice) {
        Some([base, deviation]) => Ok(Some((toml_f32(base, key)?, toml_f32(deviation, key)?))),
        Some(_) => Err(ConfettiError::ParseError(format!(
            "{key}: expected [base, deviation]"
        ))),
        None => Ok(Some((toml_f32(v, key)?, 0.0))),
    }
}
