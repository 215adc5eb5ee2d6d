//! Closed-form motion along a single axis

/// Motion along one axis (x, y or rotation) evaluated in closed form from
/// the spawn state. Units are per millisecond.
///
/// With a target velocity, the velocity ramps `v0 + a·t` until it reaches the
/// target and is pinned there for the rest of the run. A target already on
/// the far side of `v0` relative to the acceleration pins immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisMotion {
    pub initial: f32,
    pub velocity: f32,
    pub acceleration: f32,
    pub target_velocity: Option<f32>,
    /// Milliseconds until the target velocity is reached, if ever
    time_to_target: Option<f32>,
}

impl AxisMotion {
    pub fn new(initial: f32, velocity: f32, acceleration: f32, target_velocity: Option<f32>) -> Self {
        let time_to_target = target_velocity.and_then(|target| {
            if acceleration != 0.0 {
                Some(((target - velocity) / acceleration).max(0.0))
            } else {
                None
            }
        });
        Self {
            initial,
            velocity,
            acceleration,
            target_velocity,
            time_to_target,
        }
    }

    /// Motion that stays at `initial` forever
    pub fn fixed(initial: f32) -> Self {
        Self::new(initial, 0.0, 0.0, None)
    }

    pub fn time_to_target(&self) -> Option<f32> {
        self.time_to_target
    }

    /// Position at effective time `t` (ms)
    pub fn position_at(&self, t: f32) -> f32 {
        match (self.time_to_target, self.target_velocity) {
            (Some(tm), Some(target)) if t >= tm => {
                self.initial
                    + self.velocity * tm
                    + 0.5 * self.acceleration * tm * tm
                    + target * (t - tm)
            }
            _ => self.initial + self.velocity * t + 0.5 * self.acceleration * t * t,
        }
    }

    /// Velocity at effective time `t` (ms)
    pub fn velocity_at(&self, t: f32) -> f32 {
        match (self.time_to_target, self.target_velocity) {
            (Some(tm), Some(target)) if t >= tm => target,
            _ => self.velocity + self.acceleration * t,
        }
    }

    /// Earliest time the position leaves `[min, max]` through the edge it is
    /// travelling towards. `None` if the trajectory never does.
    pub fn time_to_exit(&self, min: f32, max: f32) -> Option<f32> {
        let ramp_end = self.time_to_target.unwrap_or(f32::INFINITY);
        let mut best = None;

        for (edge, outward) in [(min, -1.0f32), (max, 1.0f32)] {
            let roots = solve_quadratic(
                0.5 * self.acceleration,
                self.velocity,
                self.initial - edge,
            );
            for t in roots.into_iter().flatten() {
                if t <= ramp_end && self.velocity_at(t) * outward > 0.0 {
                    keep_earliest(&mut best, t);
                }
            }
        }

        if let (Some(tm), Some(target)) = (self.time_to_target, self.target_velocity) {
            let edge = if target > 0.0 {
                max
            } else if target < 0.0 {
                min
            } else {
                return best;
            };
            let t = tm + (edge - self.position_at(tm)) / target;
            if t >= tm {
                keep_earliest(&mut best, t);
            }
        }

        best
    }
}

fn keep_earliest(best: &mut Option<f32>, t: f32) {
    if t > 0.0 && t.is_finite() {
        *best = Some(best.map_or(t, |b: f32| b.min(t)));
    }
}

/// Real roots of `a·t² + b·t + c = 0`
fn solve_quadratic(a: f32, b: f32, c: f32) -> [Option<f32>; 2] {
    if a == 0.0 {
        if b == 0.0 {
            return [None, None];
        }
        return [Some(-c / b), None];
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return [None, None];
    }
    let root = discriminant.sqrt();
    [Some((-b - root) / (2.0 * a)), Some((-b + root) / (2.0 * a))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_acceleration() {
        let m = AxisMotion::new(10.0, 2.0, 0.5, None);
        assert!((m.position_at(4.0) - (10.0 + 8.0 + 4.0)).abs() < 1e-5);
        assert!((m.velocity_at(4.0) - 4.0).abs() < 1e-6);
    }

    #[test]
    fn target_velocity_clamps_exactly() {
        let m = AxisMotion::new(0.0, 0.0, 100.0, Some(50.0));
        assert_eq!(m.time_to_target(), Some(0.5));
        assert_eq!(m.velocity_at(1.0), 50.0);
        // 0.5·100·0.25 while ramping, then 50·0.5 at the target
        assert!((m.position_at(1.0) - 37.5).abs() < 1e-5);
    }

    #[test]
    fn target_velocity_with_negative_acceleration() {
        let m = AxisMotion::new(0.0, 10.0, -2.0, Some(0.0));
        assert_eq!(m.time_to_target(), Some(5.0));
        assert_eq!(m.velocity_at(100.0), 0.0);
        assert!((m.position_at(100.0) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn target_behind_acceleration_pins_immediately() {
        let m = AxisMotion::new(0.0, 10.0, 1.0, Some(5.0));
        assert_eq!(m.time_to_target(), Some(0.0));
        assert_eq!(m.velocity_at(0.0), 5.0);
        assert!((m.position_at(2.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn target_without_acceleration_is_never_reached() {
        let m = AxisMotion::new(0.0, 3.0, 0.0, Some(10.0));
        assert_eq!(m.time_to_target(), None);
        assert_eq!(m.velocity_at(50.0), 3.0);
    }

    #[test]
    fn exit_time_constant_velocity() {
        let m = AxisMotion::new(0.0, 0.1, 0.0, None);
        let t = m.time_to_exit(-10.0, 100.0).unwrap();
        assert!((t - 1000.0).abs() < 1e-2);
        assert_eq!(AxisMotion::fixed(5.0).time_to_exit(0.0, 10.0), None);
    }

    #[test]
    fn exit_time_under_gravity_uses_leading_edge() {
        // Thrown upwards inside a tall bound, it falls back and exits at the bottom
        let m = AxisMotion::new(50.0, -1.0, 0.01, None);
        let t = m.time_to_exit(-1000.0, 100.0).unwrap();
        assert!((m.position_at(t) - 100.0).abs() < 1e-2);
        assert!(m.velocity_at(t) > 0.0);
    }

    #[test]
    fn exit_time_after_target_is_reached() {
        let m = AxisMotion::new(0.0, 0.0, 1.0, Some(1.0));
        // 0.5 covered while ramping for 1ms, the remaining 99.5 at 1px/ms
        let t = m.time_to_exit(-10.0, 100.0).unwrap();
        assert!((t - 100.5).abs() < 1e-3);
    }
}
