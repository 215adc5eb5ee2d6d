//! Confetti Runtime - Frame loop infrastructure
//!
//! Provides the collaborators the particle engine is driven by:
//! - `TickSource` - start/cancel contract for periodic elapsed-time ticks,
//!   with `FrameClock` (wall clock) and `FixedStepClock` (deterministic)
//! - `TouchEvent` / `DragTracker` - minimal down/move/up/cancel input contract
//! - `AnimationEvent` / `EventBus` - queue of lifecycle notifications

mod clock;
mod event_bus;
mod input;

pub use clock::{FixedStepClock, FrameClock, Tick, TickSource, INFINITE_DURATION};
pub use event_bus::{AnimationEvent, EventBus};
pub use input::{DragTracker, TouchAction, TouchEvent};
