//! Event bus for animation lifecycle notifications

use confetti_core::ParticleId;

/// Lifecycle notification emitted by a particle manager
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    Started { generation: u64 },
    Ended { generation: u64 },
    ParticleEntered { id: ParticleId },
    ParticleExited { id: ParticleId },
}

/// A simple event queue that observers push to and consumers drain
pub struct EventBus {
    events: Vec<AnimationEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event onto the bus
    pub fn push(&mut self, event: AnimationEvent) {
        self.events.push(event);
    }

    /// Drain all events from the bus, returning them
    pub fn drain(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Count pending events matching a predicate
    pub fn count(&self, predicate: impl Fn(&AnimationEvent) -> bool) -> usize {
        self.events.iter().filter(|e| predicate(e)).count()
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
