//! Tick sources delivering elapsed milliseconds to an animation run

use std::time::Instant;

/// Reserved duration meaning "never ends". Tick sources saturate at this
/// value instead of overflowing.
pub const INFINITE_DURATION: u64 = u64::MAX;

/// One frame callback: the elapsed time of a run, stamped with the run's
/// generation so callbacks from a superseded run can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub elapsed_ms: u64,
}

/// A periodic source of elapsed-time ticks (conceptually a display refresh).
///
/// Each `start` begins a new generation; ticks carry the generation they were
/// produced for and elapsed values never decrease within one generation.
pub trait TickSource {
    /// Begin a new run at elapsed time 0, superseding any previous one.
    /// Returns the new generation.
    fn start(&mut self) -> u64;

    /// Stop delivering ticks until the next `start`
    fn cancel(&mut self);

    /// Whether ticks are currently being delivered
    fn is_running(&self) -> bool;

    /// The next tick of the current run, or `None` when cancelled
    fn next_tick(&mut self) -> Option<Tick>;
}

/// Wall-clock tick source: elapsed time is measured from `start`
pub struct FrameClock {
    /// Generation of the current (or last) run
    generation: u64,
    /// Instant the current run started
    started_at: Instant,
    /// Last elapsed value handed out, keeps ticks monotonic
    last_elapsed: u64,
    running: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            generation: 0,
            started_at: Instant::now(),
            last_elapsed: 0,
            running: false,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickSource for FrameClock {
    fn start(&mut self) -> u64 {
        self.generation += 1;
        self.started_at = Instant::now();
        self.last_elapsed = 0;
        self.running = true;
        self.generation
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn next_tick(&mut self) -> Option<Tick> {
        if !self.running {
            return None;
        }
        let elapsed = u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(INFINITE_DURATION);
        self.last_elapsed = self.last_elapsed.max(elapsed);
        Some(Tick {
            generation: self.generation,
            elapsed_ms: self.last_elapsed,
        })
    }
}

/// Deterministic tick source advancing a fixed step per tick.
///
/// The first tick of a run reports 0 ms; every following tick adds
/// `step_ms`. Used for headless simulation and tests.
pub struct FixedStepClock {
    pub step_ms: u64,
    generation: u64,
    elapsed: u64,
    first_tick: bool,
    running: bool,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(16)
    }
}

impl FixedStepClock {
    /// Create a clock with the given step in milliseconds
    pub fn new(step_ms: u64) -> Self {
        Self {
            step_ms,
            generation: 0,
            elapsed: 0,
            first_tick: true,
            running: false,
        }
    }

    /// Elapsed time of the last delivered tick
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed
    }
}

impl TickSource for FixedStepClock {
    fn start(&mut self) -> u64 {
        self.generation += 1;
        self.elapsed = 0;
        self.first_tick = true;
        self.running = true;
        self.generation
    }

    fn cancel(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn next_tick(&mut self) -> Option<Tick> {
        if !self.running {
            return None;
        }
        if self.first_tick {
            self.first_tick = false;
        } else {
            self.elapsed = self.elapsed.saturating_add(self.step_ms);
        }
        Some(Tick {
            generation: self.generation,
            elapsed_ms: self.elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_sequence() {
        let mut clock = FixedStepClock::new(16);
        assert!(clock.next_tick().is_none());

        let generation = clock.start();
        let elapsed: Vec<u64> = (0..4)
            .map(|_| clock.next_tick().unwrap().elapsed_ms)
            .collect();
        assert_eq!(elapsed, vec![0, 16, 32, 48]);
        assert_eq!(clock.next_tick().unwrap().generation, generation);
    }

    #[test]
    fn test_restart_bumps_generation_and_resets_time() {
        let mut clock = FixedStepClock::new(10);
        let first = clock.start();
        clock.next_tick();
        clock.next_tick();
        let second = clock.start();
        assert!(second > first);
        let tick = clock.next_tick().unwrap();
        assert_eq!(tick.elapsed_ms, 0);
        assert_eq!(tick.generation, second);
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut clock = FixedStepClock::new(16);
        clock.start();
        assert!(clock.is_running());
        clock.cancel();
        assert!(!clock.is_running());
        assert!(clock.next_tick().is_none());
    }

    #[test]
    fn test_fixed_step_saturates() {
        let mut clock = FixedStepClock::new(INFINITE_DURATION / 2 + 1);
        clock.start();
        clock.next_tick();
        clock.next_tick();
        assert_eq!(clock.next_tick().unwrap().elapsed_ms, INFINITE_DURATION);
    }

    #[test]
    fn test_frame_clock_monotonic() {
        let mut clock = FrameClock::new();
        assert!(clock.next_tick().is_none());
        let generation = clock.start();
        let a = clock.next_tick().unwrap();
        let b = clock.next_tick().unwrap();
        assert_eq!(a.generation, generation);
        assert!(b.elapsed_ms >= a.elapsed_ms);
        clock.cancel();
        assert!(clock.next_tick().is_none());
    }
}
