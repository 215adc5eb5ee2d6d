//! Drives an animation run: emission, per-tick updates, expiry and recycling

use crate::config::ManagerConfig;
use crate::factory::ParticleFactory;
use crate::instance::ParticleInstance;
use crate::observer::{AnimationObserver, RunInfo};
use crate::particle::Particle;
use crate::pool::RecyclePool;
use crate::rand::ParticleRng;
use crate::scheduler::EmissionScheduler;
use crate::source::ParticleSource;
use confetti_core::{ParticleId, Rect, Result};
use confetti_runtime::{FrameClock, Tick, TickSource, TouchAction, TouchEvent};

/// Run state of a manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Never animated
    Idle,
    Running,
    /// Run ended or was terminated; `animate` starts a fresh one
    Terminated,
}

/// What the host should do after delivering a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale generation or no run in progress; nothing changed
    Ignored,
    /// State changed, redraw the surface and keep ticking
    Redraw,
    /// The run ended on this tick
    Finished,
}

/// Owns the active set and the recycle pool of one animation.
///
/// Every particle is in exactly one of the active set or the pool once
/// created. All randomness flows from the manager's own `ParticleRng`.
pub struct ParticleManager<F: ParticleFactory> {
    factory: F,
    source: ParticleSource,
    /// Full area of the host surface
    surface: Rect,
    config: ManagerConfig,
    rng: ParticleRng,
    clock: Box<dyn TickSource>,
    scheduler: EmissionScheduler,

    active: Vec<Particle<F::Payload>>,
    pool: RecyclePool<Particle<F::Payload>>,
    observer: Option<Box<dyn AnimationObserver<F::Payload>>>,

    state: AnimationState,
    generation: u64,
    elapsed_ms: u64,
    next_id: ParticleId,
    created: usize,
    /// Particle currently held by a touch gesture
    grabbed: Option<ParticleId>,
    /// Reused render buffer
    instances: Vec<ParticleInstance>,
}

impl<F: ParticleFactory> ParticleManager<F> {
    /// Manager with default configuration clipped to `surface`, a wall-clock
    /// tick source and an entropy-seeded random stream
    pub fn new(factory: F, source: ParticleSource, surface: Rect) -> Self {
        Self {
            factory,
            source,
            surface,
            config: ManagerConfig::new(surface),
            rng: ParticleRng::from_entropy(),
            clock: Box::new(FrameClock::new()),
            scheduler: EmissionScheduler::new(0.0, 0),
            active: Vec::with_capacity(300),
            pool: RecyclePool::with_capacity(300),
            observer: None,
            state: AnimationState::Idle,
            generation: 0,
            elapsed_ms: 0,
            next_id: ParticleId::from_raw(0),
            created: 0,
            grabbed: None,
            instances: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ParticleRng::new(seed);
        self
    }

    pub fn with_tick_source(mut self, clock: impl TickSource + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Takes effect on the next `animate`
    pub fn set_config(&mut self, config: ManagerConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Takes effect on the next `animate`
    pub fn config_mut(&mut self) -> &mut ManagerConfig {
        &mut self.config
    }

    pub fn set_observer(&mut self, observer: impl AnimationObserver<F::Payload> + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Start a fresh run, cancelling any run in progress.
    ///
    /// The configuration is validated first; on error nothing changes.
    pub fn animate(&mut self) -> Result<()> {
        if let Err(err) = self.config.validate() {
            log::warn!("Rejected particle configuration: {}", err);
            return Err(err);
        }

        if self.state == AnimationState::Running {
            log::debug!("Cancelling run {} at {}ms", self.generation, self.elapsed_ms);
        }
        self.clock.cancel();
        self.flush();
        self.grabbed = None;

        self.scheduler =
            EmissionScheduler::new(self.config.emission_rate, self.config.emission_duration);
        self.generation = self.clock.start();
        self.elapsed_ms = 0;
        self.state = AnimationState::Running;

        log::debug!(
            "Starting run {} with {} initial particles",
            self.generation,
            self.config.initial_count
        );
        let run = self.run_info();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_animation_start(&run);
        }

        self.spawn(self.config.initial_count, 0);
        Ok(())
    }

    /// Process one tick: spawn, update, reap, then check for the end of the run
    pub fn on_tick(&mut self, tick: Tick) -> TickOutcome {
        if self.state != AnimationState::Running || tick.generation != self.generation {
            log::trace!(
                "Ignoring tick of generation {} (current {})",
                tick.generation,
                self.generation
            );
            return TickOutcome::Ignored;
        }
        self.elapsed_ms = tick.elapsed_ms;

        let count = self.scheduler.schedule(tick.elapsed_ms, &mut self.rng);
        if count > 0 {
            log::trace!("Emitting {} particles at {}ms", count, tick.elapsed_ms);
            self.spawn(count, tick.elapsed_ms);
        }

        self.update_and_compact(tick.elapsed_ms);

        if self.active.is_empty() && self.scheduler.is_window_closed(tick.elapsed_ms) {
            self.finish();
            TickOutcome::Finished
        } else {
            TickOutcome::Redraw
        }
    }

    /// Pull the next tick from the tick source and process it.
    /// `None` once the source has stopped.
    pub fn advance(&mut self) -> Option<TickOutcome> {
        let tick = self.clock.next_tick()?;
        Some(self.on_tick(tick))
    }

    /// Stop the run now, returning every active particle to the pool.
    /// Does nothing unless a run is in progress.
    pub fn terminate(&mut self) {
        if self.state != AnimationState::Running {
            return;
        }
        log::debug!("Terminating run {} at {}ms", self.generation, self.elapsed_ms);
        self.clock.cancel();
        self.flush();
        self.grabbed = None;
        self.end_run();
    }

    /// The host surface went away
    pub fn on_surface_detached(&mut self) {
        self.terminate();
    }

    /// Feed a touch event. Returns whether it was consumed.
    pub fn on_touch(&mut self, event: TouchEvent) -> bool {
        if !self.config.touch_enabled || self.state != AnimationState::Running {
            return false;
        }
        let point = event.position();

        match event.action {
            TouchAction::Down => {
                // A new gesture without an Up first lets go of the old grab
                if let Some(held) = self.grabbed_mut() {
                    held.release();
                }
                self.grabbed = None;

                let hit = self.active.iter_mut().find(|p| p.hit_test(point));
                match hit {
                    Some(particle) => {
                        particle.begin_drag(point, event.time_ms);
                        self.grabbed = Some(particle.id());
                        true
                    }
                    None => false,
                }
            }
            TouchAction::Move => match self.grabbed_mut() {
                Some(particle) => {
                    particle.drag_to(point, event.time_ms);
                    true
                }
                None => false,
            },
            TouchAction::Up | TouchAction::Cancel => {
                let released = match self.grabbed_mut() {
                    Some(particle) => {
                        particle.release();
                        true
                    }
                    None => false,
                };
                self.grabbed = None;
                released
            }
        }
    }

    /// Pack every active particle into the reused instance buffer
    pub fn pack_instances(&mut self) -> &[ParticleInstance] {
        self.instances.clear();
        self.instances
            .extend(self.active.iter().map(ParticleInstance::from_particle));
        &self.instances
    }

    // ── Accessors ──

    /// Active particles for read-only iteration by a renderer
    pub fn particles(&self) -> &[Particle<F::Payload>] {
        &self.active
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn pooled_count(&self) -> usize {
        self.pool.len()
    }

    /// Particles ever built by the factory
    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Elapsed time of the last processed tick
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn source(&self) -> &ParticleSource {
        &self.source
    }

    /// Host surface area; the clip bound may be smaller
    pub fn surface(&self) -> Rect {
        self.surface
    }

    pub fn run_info(&self) -> RunInfo {
        RunInfo {
            generation: self.generation,
            elapsed_ms: self.elapsed_ms,
            active: self.active.len(),
            pooled: self.pool.len(),
            created: self.created,
        }
    }

    // ── Internals ──

    fn spawn(&mut self, count: usize, initial_delay: u64) {
        for _ in 0..count {
            let mut particle = match self.pool.acquire() {
                Some(particle) => particle,
                None => {
                    let payload = self.factory.create(&mut self.rng);
                    let id = self.next_id;
                    self.next_id = id.next();
                    self.created += 1;
                    Particle::new(id, payload)
                }
            };

            particle.reset();
            let params = self
                .config
                .spawn_params(&self.source, &mut self.rng, initial_delay);
            particle.configure(params);
            particle.prepare(self.config.bound);

            if let Some(observer) = self.observer.as_mut() {
                observer.on_particle_enter(&particle);
            }
            self.active.push(particle);
        }
    }

    /// Update every active particle, moving expired ones to the pool via
    /// swap-remove
    fn update_and_compact(&mut self, elapsed_ms: u64) {
        let mut i = 0;
        while i < self.active.len() {
            if self.active[i].update(elapsed_ms) {
                i += 1;
            } else {
                // Don't increment i, the swapped-in particle needs checking
                let particle = self.active.swap_remove(i);
                if let Some(observer) = self.observer.as_mut() {
                    observer.on_particle_exit(&particle);
                }
                self.pool.release(particle);
            }
        }
    }

    /// Move every active particle to the pool with an exit notification
    fn flush(&mut self) {
        for particle in self.active.drain(..) {
            if let Some(observer) = self.observer.as_mut() {
                observer.on_particle_exit(&particle);
            }
            self.pool.release(particle);
        }
    }

    fn finish(&mut self) {
        log::debug!("Run {} finished at {}ms", self.generation, self.elapsed_ms);
        self.clock.cancel();
        self.end_run();
    }

    fn end_run(&mut self) {
        self.state = AnimationState::Terminated;
        let run = self.run_info();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_animation_end(&run);
        }
    }

    fn grabbed_mut(&mut self) -> Option<&mut Particle<F::Payload>> {
        let id = self.grabbed?;
        self.active.iter_mut().find(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::FadeCurve;
    use crate::factory::ShapeFactory;
    use crate::observer::EventRecorder;
    use crate::shape::Shape;
    use confetti_core::{Color, ConfettiError, Point};
    use confetti_runtime::{AnimationEvent, FixedStepClock, INFINITE_DURATION};

    fn screen() -> Rect {
        Rect::from_size(1000.0, 1000.0)
    }

    fn manager(config: ManagerConfig, step_ms: u64) -> ParticleManager<ShapeFactory> {
        ParticleManager::new(
            ShapeFactory::flat(Color::gold_palette(), 10.0),
            ParticleSource::point(0.0, 0.0),
            screen(),
        )
        .with_seed(42)
        .with_tick_source(FixedStepClock::new(step_ms))
        .with_config(config)
    }

    fn run_to_end(m: &mut ParticleManager<ShapeFactory>, max_ticks: usize) -> usize {
        for n in 1..=max_ticks {
            match m.advance() {
                Some(TickOutcome::Finished) => return n,
                Some(_) => {}
                None => panic!("tick source stopped before the run finished"),
            }
        }
        panic!("run did not finish within {max_ticks} ticks");
    }

    #[test]
    fn one_shot_run_ends_after_ttl() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(5)
            .with_ttl(100);
        let mut m = manager(config, 16);
        m.animate().unwrap();
        assert_eq!(m.active_count(), 5);
        assert_eq!(m.state(), AnimationState::Running);

        // Ticks at 0, 16, ... 96 keep them alive; 112 reaps all
        let ticks = run_to_end(&mut m, 100);
        assert_eq!(ticks, 8);
        assert_eq!(m.elapsed_ms(), 112);
        assert_eq!(m.state(), AnimationState::Terminated);
        assert_eq!(m.active_count(), 0);
        assert_eq!(m.pooled_count(), 5);
        assert!(m.advance().is_none());
    }

    #[test]
    fn single_particle_one_shot_events() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(1)
            .with_ttl(40);
        let mut m = manager(config, 16);
        let recorder = EventRecorder::new();
        let bus = recorder.bus();
        m.set_observer(recorder);
        m.animate().unwrap();

        run_to_end(&mut m, 10);
        let generation = m.generation();
        let id = ParticleId::from_raw(0);
        assert_eq!(
            bus.borrow_mut().drain(),
            vec![
                AnimationEvent::Started { generation },
                AnimationEvent::ParticleEntered { id },
                AnimationEvent::ParticleExited { id },
                AnimationEvent::Ended { generation },
            ]
        );
        assert_eq!(m.elapsed_ms(), 48);
    }

    #[test]
    fn falling_particle_follows_velocity() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(1)
            .with_velocity_y(100.0, 0.0)
            .with_ttl(1000);
        let mut m = manager(config, 100);
        m.animate().unwrap();

        for _ in 0..6 {
            assert_eq!(m.advance(), Some(TickOutcome::Redraw));
        }
        assert_eq!(m.elapsed_ms(), 500);
        let y = m.particles()[0].position().y;
        assert!((y - 50.0).abs() < 1e-3, "y = {y}");

        for _ in 0..4 {
            assert_eq!(m.advance(), Some(TickOutcome::Redraw));
        }
        assert_eq!(m.advance(), Some(TickOutcome::Finished));
        assert_eq!(m.elapsed_ms(), 1000);
    }

    #[test]
    fn pool_and_active_set_partition_created_particles() {
        let config = ManagerConfig::new(screen())
            .with_emission_duration(1000)
            .with_emission_rate(100.0)
            .with_velocity_y(200.0, 50.0)
            .with_ttl(200);
        let mut m = manager(config, 16);
        let recorder = EventRecorder::new();
        let bus = recorder.bus();
        m.set_observer(recorder);
        m.animate().unwrap();

        let mut peak = 0;
        loop {
            let outcome = m.advance().unwrap();
            assert_eq!(m.active_count() + m.pooled_count(), m.created_count());
            peak = peak.max(m.active_count());
            if outcome == TickOutcome::Finished {
                break;
            }
            assert!(m.elapsed_ms() < 2000);
        }
        assert!(peak > 0);
        // Expired particles are reused, so far fewer are built than emitted
        let entered = bus
            .borrow()
            .count(|e| matches!(e, AnimationEvent::ParticleEntered { .. }));
        assert!(entered > 50, "entered {entered}");
        assert!(m.created_count() < entered);
        assert_eq!(m.pooled_count(), m.created_count());
    }

    #[test]
    fn infinite_emission_keeps_running() {
        let config = ManagerConfig::new(screen())
            .with_emission_duration(INFINITE_DURATION)
            .with_emission_rate(50.0)
            .with_ttl(100);
        let mut m = manager(config, 16);
        m.animate().unwrap();
        for _ in 0..1000 {
            assert_eq!(m.advance(), Some(TickOutcome::Redraw));
        }
        assert!(m.is_running());
    }

    #[test]
    fn stale_generation_ticks_are_ignored() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(2)
            .with_ttl(50);
        let mut m = manager(config, 16);
        m.animate().unwrap();
        let old = m.generation();
        m.animate().unwrap();
        assert!(m.generation() > old);

        let stale = Tick {
            generation: old,
            elapsed_ms: 10_000,
        };
        assert_eq!(m.on_tick(stale), TickOutcome::Ignored);
        assert_eq!(m.active_count(), 2);
        assert_eq!(m.elapsed_ms(), 0);
    }

    #[test]
    fn ticks_after_terminate_are_ignored() {
        let config = ManagerConfig::new(screen()).with_initial_count(1);
        let mut m = manager(config, 16);
        m.animate().unwrap();
        let generation = m.generation();
        m.terminate();
        let tick = Tick {
            generation,
            elapsed_ms: 16,
        };
        assert_eq!(m.on_tick(tick), TickOutcome::Ignored);
        assert!(m.advance().is_none());
    }

    #[test]
    fn reanimate_flushes_previous_run() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(3)
            .with_ttl(1000);
        let mut m = manager(config, 16);
        let recorder = EventRecorder::new();
        let bus = recorder.bus();
        m.set_observer(recorder);

        m.animate().unwrap();
        let first = m.generation();
        m.advance();
        m.animate().unwrap();
        let second = m.generation();

        // The three flushed particles are reused for the new run
        assert_eq!(m.created_count(), 3);
        assert_eq!(m.active_count(), 3);
        assert_eq!(m.pooled_count(), 0);

        let events = bus.borrow_mut().drain();
        assert_eq!(events.len(), 1 + 3 + 3 + 1 + 3);
        assert_eq!(events[0], AnimationEvent::Started { generation: first });
        assert!(events[4..7]
            .iter()
            .all(|e| matches!(e, AnimationEvent::ParticleExited { .. })));
        assert_eq!(events[7], AnimationEvent::Started { generation: second });
        assert!(!events.contains(&AnimationEvent::Ended { generation: first }));
    }

    #[test]
    fn terminate_is_idempotent() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(4)
            .with_ttl(1000);
        let mut m = manager(config, 16);
        let recorder = EventRecorder::new();
        let bus = recorder.bus();
        m.set_observer(recorder);

        // No run yet: nothing happens
        m.terminate();
        assert_eq!(m.state(), AnimationState::Idle);
        assert!(bus.borrow().is_empty());

        m.animate().unwrap();
        m.advance();
        m.terminate();
        m.terminate();

        assert_eq!(m.state(), AnimationState::Terminated);
        assert_eq!(m.active_count(), 0);
        assert_eq!(m.pooled_count(), 4);
        let bus = bus.borrow();
        assert_eq!(
            bus.count(|e| matches!(e, AnimationEvent::Ended { .. })),
            1
        );
        assert_eq!(
            bus.count(|e| matches!(e, AnimationEvent::ParticleExited { .. })),
            4
        );
    }

    #[test]
    fn surface_detach_terminates() {
        let config = ManagerConfig::new(screen()).with_initial_count(1);
        let mut m = manager(config, 16);
        m.animate().unwrap();
        m.on_surface_detached();
        assert_eq!(m.state(), AnimationState::Terminated);
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let config = ManagerConfig::new(screen()).with_emission_duration(1000);
        let mut m = manager(config, 16);
        match m.animate() {
            Err(ConfettiError::Configuration { field, .. }) => assert_eq!(field, "emission_rate"),
            other => panic!("expected configuration error, got {other:?}"),
        }
        assert_eq!(m.state(), AnimationState::Idle);
        assert!(m.advance().is_none());
    }

    #[test]
    fn particle_outside_bound_expires_on_first_tick() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(1)
            .with_velocity_x(-100.0, 0.0);
        let mut m = ParticleManager::new(
            ShapeFactory::flat(Color::gold_palette(), 10.0),
            ParticleSource::point(-50.0, 10.0),
            screen(),
        )
        .with_seed(1)
        .with_tick_source(FixedStepClock::new(16))
        .with_config(config);
        m.animate().unwrap();
        assert_eq!(m.advance(), Some(TickOutcome::Finished));
        assert_eq!(m.elapsed_ms(), 0);
    }

    #[test]
    fn same_seed_reproduces_a_run() {
        let run = || {
            let config = ManagerConfig::new(screen())
                .with_emission_duration(500)
                .with_emission_rate(200.0)
                .with_velocity_x(0.0, 300.0)
                .with_velocity_y(300.0, 100.0);
            let mut m = ParticleManager::new(
                ShapeFactory::flat(Color::gold_palette(), 10.0),
                ParticleSource::range(0.0, 0.0, 1000.0, 0.0),
                screen(),
            )
            .with_seed(99)
            .with_tick_source(FixedStepClock::new(16))
            .with_config(config);
            m.animate().unwrap();
            for _ in 0..20 {
                m.advance();
            }
            m.particles()
                .iter()
                .map(|p| (p.position().x, p.position().y))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn touch_drag_and_fling() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(1)
            .with_touch_enabled(true);
        let mut m = ParticleManager::new(
            ShapeFactory::flat(vec![Color::GOLD], 10.0),
            ParticleSource::point(100.0, 100.0),
            screen(),
        )
        .with_seed(5)
        .with_tick_source(FixedStepClock::new(16))
        .with_config(config);
        m.animate().unwrap();
        m.advance();

        // Missing the particle does nothing
        assert!(!m.on_touch(TouchEvent::new(TouchAction::Down, 500.0, 500.0, 0)));
        assert!(m.on_touch(TouchEvent::new(TouchAction::Down, 105.0, 105.0, 0)));
        assert!(m.on_touch(TouchEvent::new(TouchAction::Move, 205.0, 105.0, 10)));
        assert!(m.on_touch(TouchEvent::new(TouchAction::Move, 225.0, 105.0, 20)));
        assert_eq!(m.particles()[0].position(), Point::new(220.0, 100.0));
        assert!(m.particles()[0].is_dragged());

        assert!(m.on_touch(TouchEvent::new(TouchAction::Up, 225.0, 105.0, 20)));
        assert!(!m.particles()[0].is_dragged());
        assert!(!m.on_touch(TouchEvent::new(TouchAction::Move, 0.0, 0.0, 30)));

        // Time origin restarts at 16; flung at 2px/ms afterwards
        m.advance();
        assert_eq!(m.particles()[0].position(), Point::new(220.0, 100.0));
        m.advance();
        let x = m.particles()[0].position().x;
        assert!((x - 252.0).abs() < 1e-3, "x = {x}");
    }

    #[test]
    fn second_down_releases_previous_grab() {
        let config = ManagerConfig::new(screen())
            .with_initial_count(2)
            .with_ttl(100)
            .with_touch_enabled(true);
        let mut m = ParticleManager::new(
            ShapeFactory::flat(vec![Color::GOLD], 10.0),
            ParticleSource::point(100.0, 100.0),
            screen(),
        )
        .with_tick_source(FixedStepClock::new(16))
        .with_config(config);
        m.animate().unwrap();
        m.advance();

        assert!(m.on_touch(TouchEvent::new(TouchAction::Down, 105.0, 105.0, 0)));
        assert!(m.on_touch(TouchEvent::new(TouchAction::Move, 505.0, 505.0, 10)));
        // The first particle moved away, so this grabs the other one
        assert!(m.on_touch(TouchEvent::new(TouchAction::Down, 105.0, 105.0, 20)));
        assert_eq!(m.particles().iter().filter(|p| p.is_dragged()).count(), 1);
        assert!(m.on_touch(TouchEvent::new(TouchAction::Up, 105.0, 105.0, 30)));
        assert!(m.particles().iter().all(|p| !p.is_dragged()));

        run_to_end(&mut m, 100);
        assert_eq!(m.state(), AnimationState::Terminated);
        assert_eq!(m.active_count(), 0);
    }

    #[test]
    fn touch_ignored_when_disabled() {
        let config = ManagerConfig::new(screen()).with_initial_count(1);
        let mut m = ParticleManager::new(
            ShapeFactory::flat(vec![Color::GOLD], 10.0),
            ParticleSource::point(100.0, 100.0),
            screen(),
        )
        .with_tick_source(FixedStepClock::new(16))
        .with_config(config);
        m.animate().unwrap();
        m.advance();
        assert!(!m.on_touch(TouchEvent::new(TouchAction::Down, 105.0, 105.0, 0)));
    }

    #[test]
    fn closure_factory_and_instance_packing() {
        let factory = |rng: &mut ParticleRng| Shape::Flat {
            kind: crate::shape::ShapeKind::Square,
            size: 4.0 + rng.next_f32(),
            color: Color::WHITE,
        };
        let config = ManagerConfig::new(screen())
            .with_initial_count(3)
            .with_ttl(1000)
            .with_fade_out(FadeCurve::Linear);
        let mut m = ParticleManager::new(factory, ParticleSource::point(10.0, 10.0), screen())
            .with_seed(8)
            .with_tick_source(FixedStepClock::new(250))
            .with_config(config);
        m.animate().unwrap();
        m.advance();
        m.advance();

        let instances = m.pack_instances();
        assert_eq!(instances.len(), 3);
        for instance in instances {
            assert!((instance.opacity() - 0.75).abs() < 1e-5);
            assert_eq!(instance.position(), [10.0, 10.0]);
        }
    }
}
