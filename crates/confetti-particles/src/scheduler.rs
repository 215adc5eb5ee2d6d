//! Decides how many particles to emit on each tick

use crate::rand::ParticleRng;

/// Randomized, rate-limited emission counter.
///
/// Each tick draws `r` in [0, 1) and emits `floor(r · rate · dt)` particles,
/// where `dt` is the time since the last accounted emission. Bursty per tick,
/// but the average converges to `rate` over many ticks.
#[derive(Debug, Clone)]
pub struct EmissionScheduler {
    /// Particles per millisecond
    rate: f32,
    /// Milliseconds per particle
    rate_inverse: f32,
    /// Emission window in ms, `INFINITE_DURATION` for no end
    duration: u64,
    /// 0 until the first tick inside the window sets the baseline
    last_emission: u64,
}

impl EmissionScheduler {
    /// `rate` is in particles per millisecond
    pub fn new(rate: f32, duration: u64) -> Self {
        let rate_inverse = if rate > 0.0 { 1.0 / rate } else { f32::INFINITY };
        Self {
            rate,
            rate_inverse,
            duration,
            last_emission: 0,
        }
    }

    pub fn is_window_closed(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.duration
    }

    pub fn last_emission(&self) -> u64 {
        self.last_emission
    }

    /// Number of particles to spawn at `elapsed_ms`
    pub fn schedule(&mut self, elapsed_ms: u64, rng: &mut ParticleRng) -> usize {
        if self.is_window_closed(elapsed_ms) || self.rate <= 0.0 {
            return 0;
        }
        if self.last_emission == 0 {
            self.last_emission = elapsed_ms;
            return 0;
        }

        let since_last = elapsed_ms.saturating_sub(self.last_emission) as f32;
        let count = (rng.next_f32() * self.rate * since_last) as usize;
        if count > 0 {
            self.last_emission += (self.rate_inverse * count as f32).round() as u64;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confetti_runtime::INFINITE_DURATION;

    #[test]
    fn first_tick_sets_baseline() {
        let mut scheduler = EmissionScheduler::new(1.0, 10_000);
        let mut rng = ParticleRng::new(1);
        assert_eq!(scheduler.schedule(16, &mut rng), 0);
        assert_eq!(scheduler.last_emission(), 16);
    }

    #[test]
    fn closed_window_emits_nothing() {
        let mut scheduler = EmissionScheduler::new(1.0, 100);
        let mut rng = ParticleRng::new(1);
        scheduler.schedule(16, &mut rng);
        assert_eq!(scheduler.schedule(100, &mut rng), 0);
        assert_eq!(scheduler.schedule(5000, &mut rng), 0);
    }

    #[test]
    fn zero_duration_never_emits() {
        let mut scheduler = EmissionScheduler::new(1.0, 0);
        let mut rng = ParticleRng::new(1);
        for t in [0, 16, 32, 1000] {
            assert_eq!(scheduler.schedule(t, &mut rng), 0);
        }
    }

    #[test]
    fn average_rate_converges() {
        // 100 particles per second for 10 seconds at ~60fps
        let rate = 100.0 / 1000.0;
        let mut scheduler = EmissionScheduler::new(rate, 10_000);
        let mut rng = ParticleRng::new(2024);
        let mut total = 0;
        let mut t = 0;
        while t < 10_000 {
            total += scheduler.schedule(t, &mut rng);
            t += 16;
        }
        assert!((950..=1000).contains(&total), "emitted {total}");
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let run = |seed| {
            let mut scheduler = EmissionScheduler::new(0.05, INFINITE_DURATION);
            let mut rng = ParticleRng::new(seed);
            (1..500u64).map(|i| scheduler.schedule(i * 16, &mut rng)).sum::<usize>()
        };
        assert_eq!(run(77), run(77));
    }
}
