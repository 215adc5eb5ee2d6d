//! A single confetto: kinematic state, expiry rules and touch handling

use crate::curves::FadeCurve;
use crate::kinematics::AxisMotion;
use confetti_core::{Color, ParticleId, Point, Rect};
use confetti_runtime::DragTracker;

/// Visual payload carried by a particle.
///
/// The engine only needs the payload's extent (for bounds and hit tests) and
/// its color over time; how it is drawn is up to the renderer.
pub trait Payload {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Base color at effective time `t_ms` since the particle became active
    fn color_at(&self, _t_ms: f32) -> Color {
        Color::WHITE
    }

    /// Renderer-defined variant code carried in packed instance data
    fn variant(&self) -> u32 {
        0
    }
}

/// Everything a particle needs to start a run, already in per-ms units
#[derive(Clone, Copy, Debug, Default)]
pub struct SpawnParams {
    pub initial_delay: u64,
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub acceleration_x: f32,
    pub acceleration_y: f32,
    pub target_velocity_x: Option<f32>,
    pub target_velocity_y: Option<f32>,
    pub rotation: f32,
    pub rotational_velocity: f32,
    pub rotational_acceleration: f32,
    pub target_rotational_velocity: Option<f32>,
    /// `None` means the particle expires by leaving its bound
    pub ttl: Option<u64>,
    pub fade_out: Option<FadeCurve>,
}

/// Snapshot read by the rendering collaborator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub position: Point,
    /// Degrees in [0, 360)
    pub rotation: f32,
    pub opacity: f32,
    pub visible: bool,
}

#[derive(Clone, Debug)]
struct Drag {
    /// Particle origin relative to the pointer
    offset: Point,
    tracker: DragTracker,
}

/// One physics-and-appearance unit of an animation
pub struct Particle<P> {
    id: ParticleId,
    payload: P,

    initial_delay: u64,
    x: AxisMotion,
    y: AxisMotion,
    rotation: AxisMotion,
    ttl: Option<u64>,
    fade_out: Option<FadeCurve>,
    bound: Rect,
    time_to_exit: Option<f32>,

    // Last integrated state
    elapsed: f32,
    position: Point,
    velocity: Point,
    current_rotation: f32,
    opacity: f32,
    visible: bool,

    drag: Option<Drag>,
    /// Set on release: the next update restarts the time origin
    rebase_pending: bool,
}

impl<P: Payload> Particle<P> {
    pub fn new(id: ParticleId, payload: P) -> Self {
        let mut particle = Self {
            id,
            payload,
            initial_delay: 0,
            x: AxisMotion::default(),
            y: AxisMotion::default(),
            rotation: AxisMotion::default(),
            ttl: None,
            fade_out: None,
            bound: Rect::default(),
            time_to_exit: None,
            elapsed: 0.0,
            position: Point::ZERO,
            velocity: Point::ZERO,
            current_rotation: 0.0,
            opacity: 1.0,
            visible: false,
            drag: None,
            rebase_pending: false,
        };
        particle.reset();
        particle
    }

    /// Clear all transient state; the id and payload are kept
    pub fn reset(&mut self) {
        self.initial_delay = 0;
        self.x = AxisMotion::default();
        self.y = AxisMotion::default();
        self.rotation = AxisMotion::default();
        self.ttl = None;
        self.fade_out = None;
        self.bound = Rect::default();
        self.time_to_exit = None;
        self.elapsed = 0.0;
        self.position = Point::ZERO;
        self.velocity = Point::ZERO;
        self.current_rotation = 0.0;
        self.opacity = 1.0;
        self.visible = false;
        self.drag = None;
        self.rebase_pending = false;
    }

    /// Set the spawn state of the next run
    pub fn configure(&mut self, params: SpawnParams) {
        self.initial_delay = params.initial_delay;
        self.x = AxisMotion::new(
            params.x,
            params.velocity_x,
            params.acceleration_x,
            params.target_velocity_x,
        );
        self.y = AxisMotion::new(
            params.y,
            params.velocity_y,
            params.acceleration_y,
            params.target_velocity_y,
        );
        self.rotation = AxisMotion::new(
            params.rotation,
            params.rotational_velocity,
            params.rotational_acceleration,
            params.target_rotational_velocity,
        );
        self.ttl = params.ttl;
        self.fade_out = params.fade_out;
        self.position = Point::new(params.x, params.y);
        self.velocity = Point::new(params.velocity_x, params.velocity_y);
        self.current_rotation = params.rotation.rem_euclid(360.0);
    }

    /// Store the clipping bound and estimate when the trajectory leaves it
    pub fn prepare(&mut self, bound: Rect) {
        self.bound = bound;
        let exit_x = self
            .x
            .time_to_exit(bound.left - self.payload.width(), bound.right);
        let exit_y = self
            .y
            .time_to_exit(bound.top - self.payload.height(), bound.bottom);
        self.time_to_exit = match (exit_x, exit_y) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    /// Integrate to `elapsed_ms` (time since the run started).
    /// Returns whether the particle is still alive.
    pub fn update(&mut self, elapsed_ms: u64) -> bool {
        if self.rebase_pending {
            self.rebase_pending = false;
            self.initial_delay = elapsed_ms;
        }
        if elapsed_ms < self.initial_delay {
            self.visible = false;
            return true;
        }

        let since_start = elapsed_ms - self.initial_delay;
        let t = since_start as f32;
        self.elapsed = t;
        self.visible = true;

        if self.drag.is_some() {
            self.velocity = Point::ZERO;
            return true;
        }

        self.position = Point::new(self.x.position_at(t), self.y.position_at(t));
        self.velocity = Point::new(self.x.velocity_at(t), self.y.velocity_at(t));
        self.current_rotation = self.rotation.position_at(t).rem_euclid(360.0);
        self.opacity = match self.fade_out {
            Some(curve) => curve.evaluate(self.progress(t)),
            None => 1.0,
        };

        match self.ttl {
            Some(ttl) => since_start < ttl,
            None => !self.has_left_bound(),
        }
    }

    /// Lifetime progress in [0, 1] used for fading
    fn progress(&self, t: f32) -> f32 {
        match (self.ttl, self.time_to_exit) {
            (Some(0), _) => 1.0,
            (Some(ttl), _) => t / ttl as f32,
            (None, Some(exit)) if exit > 0.0 => t / exit,
            (None, _) => 0.0,
        }
    }

    /// True once the particle is fully outside its bound on the side it is
    /// moving towards
    fn has_left_bound(&self) -> bool {
        let (w, h) = (self.payload.width(), self.payload.height());
        let b = &self.bound;
        let p = self.position;
        let v = self.velocity;

        (v.x > 0.0 && p.x >= b.right)
            || (v.x < 0.0 && p.x + w <= b.left)
            || (v.y > 0.0 && p.y >= b.bottom)
            || (v.y < 0.0 && p.y + h <= b.top)
    }

    // ── Touch ──

    /// Whether `point` lands on this particle's box
    pub fn hit_test(&self, point: Point) -> bool {
        self.visible
            && point.x >= self.position.x
            && point.x < self.position.x + self.payload.width()
            && point.y >= self.position.y
            && point.y < self.position.y + self.payload.height()
    }

    /// Grab the particle; physics stops until `release`
    pub fn begin_drag(&mut self, point: Point, time_ms: u64) {
        let mut tracker = DragTracker::new();
        tracker.push(point, time_ms);
        self.drag = Some(Drag {
            offset: self.position - point,
            tracker,
        });
        self.velocity = Point::ZERO;
    }

    /// Move a grabbed particle with the pointer
    pub fn drag_to(&mut self, point: Point, time_ms: u64) {
        if let Some(drag) = self.drag.as_mut() {
            drag.tracker.push(point, time_ms);
            self.position = point + drag.offset;
        }
    }

    /// Let go: resume physics from the dragged position, flung with the
    /// velocity of the last drag delta. The time origin restarts at the
    /// next update.
    pub fn release(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let fling = drag.tracker.velocity();
        self.x = AxisMotion::new(
            self.position.x,
            fling.x,
            self.x.acceleration,
            self.x.target_velocity,
        );
        self.y = AxisMotion::new(
            self.position.y,
            fling.y,
            self.y.acceleration,
            self.y.target_velocity,
        );
        self.rotation = AxisMotion::new(
            self.current_rotation,
            self.rotation.velocity_at(self.elapsed),
            self.rotation.acceleration,
            self.rotation.target_velocity,
        );
        self.velocity = fling;
        self.rebase_pending = true;
        self.prepare(self.bound);
    }

    // ── Accessors ──

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Current velocity in px/ms
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn rotation(&self) -> f32 {
        self.current_rotation
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_dragged(&self) -> bool {
        self.drag.is_some()
    }

    pub fn initial_delay(&self) -> u64 {
        self.initial_delay
    }

    pub fn ttl(&self) -> Option<u64> {
        self.ttl
    }

    pub fn bound(&self) -> Rect {
        self.bound
    }

    /// Estimated ms until the particle leaves its bound, if it ever does
    pub fn time_to_exit(&self) -> Option<f32> {
        self.time_to_exit
    }

    /// Payload color at the current effective time
    pub fn color(&self) -> Color {
        self.payload.color_at(self.elapsed)
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            position: self.position,
            rotation: self.current_rotation,
            opacity: self.opacity,
            visible: self.visible,
        }
    }
}
