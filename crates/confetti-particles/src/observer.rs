//! Lifecycle callbacks of a particle manager

use crate::particle::{Particle, Payload};
use confetti_runtime::{AnimationEvent, EventBus};
use std::cell::RefCell;
use std::rc::Rc;

/// Snapshot of the manager handed to run start/end callbacks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunInfo {
    pub generation: u64,
    /// Elapsed time of the last processed tick
    pub elapsed_ms: u64,
    pub active: usize,
    pub pooled: usize,
    /// Particles ever built by the factory
    pub created: usize,
}

/// Receives lifecycle notifications synchronously from inside the manager.
/// Every method defaults to a no-op.
pub trait AnimationObserver<P> {
    fn on_animation_start(&mut self, _run: &RunInfo) {}
    fn on_animation_end(&mut self, _run: &RunInfo) {}
    fn on_particle_enter(&mut self, _particle: &Particle<P>) {}
    fn on_particle_exit(&mut self, _particle: &Particle<P>) {}
}

/// Observer that records every notification onto a shared `EventBus`
#[derive(Clone, Default)]
pub struct EventRecorder {
    bus: Rc<RefCell<EventBus>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded events
    pub fn bus(&self) -> Rc<RefCell<EventBus>> {
        Rc::clone(&self.bus)
    }
}

impl<P: Payload> AnimationObserver<P> for EventRecorder {
    fn on_animation_start(&mut self, run: &RunInfo) {
        self.bus.borrow_mut().push(AnimationEvent::Started {
            generation: run.generation,
        });
    }

    fn on_animation_end(&mut self, run: &RunInfo) {
        self.bus.borrow_mut().push(AnimationEvent::Ended {
            generation: run.generation,
        });
    }

    fn on_particle_enter(&mut self, particle: &Particle<P>) {
        self.bus
            .borrow_mut()
            .push(AnimationEvent::ParticleEntered { id: particle.id() });
    }

    fn on_particle_exit(&mut self, particle: &Particle<P>) {
        self.bus
            .borrow_mut()
            .push(AnimationEvent::ParticleExited { id: particle.id() });
    }
}
