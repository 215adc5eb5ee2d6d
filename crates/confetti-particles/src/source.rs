//! Spawn regions: a fixed point or a uniformly sampled rectangle

use confetti_core::{ConfettiError, Result};

/// Where new particles appear.
///
/// Sampling takes a uniform draw `u` in [0, 1) per coordinate; the caller
/// draws it from the manager's random stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleSource {
    /// Every particle starts at `(x, y)`
    Point { x: f32, y: f32 },
    /// x uniform in `[x0, x1]`, y uniform in `[y0, y1]`
    Range { x0: f32, y0: f32, x1: f32, y1: f32 },
}

impl ParticleSource {
    pub fn point(x: f32, y: f32) -> Self {
        ParticleSource::Point { x, y }
    }

    pub fn range(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        ParticleSource::Range { x0, y0, x1, y1 }
    }

    pub fn sample_x(&self, u: f32) -> f32 {
        match *self {
            ParticleSource::Point { x, .. } => x,
            ParticleSource::Range { x0, x1, .. } => x0 + u * (x1 - x0),
        }
    }

    pub fn sample_y(&self, u: f32) -> f32 {
        match *self {
            ParticleSource::Point { y, .. } => y,
            ParticleSource::Range { y0, y1, .. } => y0 + u * (y1 - y0),
        }
    }

    /// Parse `[x, y]` or `[x0, y0, x1, y1]`
    pub fn from_toml(value: &toml::Value) -> Result<Self> {
        let coords: Vec<f32> = value
            .as_array()
            .ok_or_else(|| ConfettiError::ParseError("source must be an array".into()))?
            .iter()
            .map(|v| {
                v.as_float()
                    .map(|f| f as f32)
                    .or_else(|| v.as_integer().map(|i| i as f32))
                    .ok_or_else(|| ConfettiError::ParseError(format!("non-numeric source coordinate: {v}")))
            })
            .collect::<Result<_>>()?;

        match coords.as_slice() {
            [x, y] => Ok(Self::point(*x, *y)),
            [x0, y0, x1, y1] => Ok(Self::range(*x0, *y0, *x1, *y1)),
            other => Err(ConfettiError::ParseError(format!(
                "source needs 2 or 4 coordinates, got {}",
                other.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ignores_draw() {
        let source = ParticleSource::point(3.0, 4.0);
        assert_eq!(source.sample_x(0.9), 3.0);
        assert_eq!(source.sample_y(0.1), 4.0);
    }

    #[test]
    fn range_interpolates() {
        let source = ParticleSource::range(0.0, 0.0, 100.0, 0.0);
        assert_eq!(source.sample_x(0.25), 25.0);
        assert_eq!(source.sample_y(0.25), 0.0);

        let source = ParticleSource::range(-10.0, 20.0, 10.0, 40.0);
        assert_eq!(source.sample_x(0.5), 0.0);
        assert_eq!(source.sample_y(0.5), 30.0);
    }

    #[test]
    fn parse_from_toml() {
        let table: toml::value::Table = toml::from_str("a = [1, 2.5]\nb = [0, -12, 320, -12]").unwrap();
        assert_eq!(
            ParticleSource::from_toml(&table["a"]).unwrap(),
            ParticleSource::point(1.0, 2.5)
        );
        assert_eq!(
            ParticleSource::from_toml(&table["b"]).unwrap(),
            ParticleSource::range(0.0, -12.0, 320.0, -12.0)
        );
    }

    #[test]
    fn parse_rejects_bad_arity() {
        let table: toml::value::Table = toml::from_str("a = [1, 2, 3]\nb = 4\nc = [1, \"x\"]").unwrap();
        assert!(ParticleSource::from_toml(&table["a"]).is_err());
        assert!(ParticleSource::from_toml(&table["b"]).is_err());
        assert!(ParticleSource::from_toml(&table["c"]).is_err());
    }
}
