//! Touch input contract and drag velocity tracking

use confetti_core::Point;

/// Kind of pointer event delivered by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer event in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
    /// Host timestamp in milliseconds, only used to derive fling velocity
    pub time_ms: u64,
}

impl TouchEvent {
    pub fn new(action: TouchAction, x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            action,
            x,
            y,
            time_ms,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Tracks the last two pointer samples of a drag to estimate its velocity
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    previous: Option<(Point, u64)>,
    latest: Option<(Point, u64)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer sample
    pub fn push(&mut self, position: Point, time_ms: u64) {
        self.previous = self.latest;
        self.latest = Some((position, time_ms));
    }

    /// Velocity of the last observed delta in px/ms, zero when unknown
    pub fn velocity(&self) -> Point {
        match (self.previous, self.latest) {
            (Some((p0, t0)), Some((p1, t1))) if t1 > t0 => {
                let dt = (t1 - t0) as f32;
                Point::new((p1.x - p0.x) / dt, (p1.y - p0.y) / dt)
            }
            _ => Point::ZERO,
        }
    }
}
