//! Confetti Particles - pooled 2D particle engine
//!
//! Provides the particle lifecycle driven by a tick source:
//! - Closed-form kinematics with target-velocity clamping
//! - Randomized rate-limited emission from a point or range source
//! - TTL or out-of-bounds expiry with fade-out curves
//! - FIFO recycle pool so steady-state runs don't allocate
//! - Touch drag and fling of individual particles
//! - Instance packing for renderers

pub mod config;
pub mod curves;
pub mod factory;
pub mod instance;
pub mod kinematics;
pub mod manager;
pub mod observer;
pub mod particle;
pub mod pool;
pub mod presets;
pub mod rand;
pub mod scheduler;
pub mod shape;
pub mod source;

pub use config::{ManagerConfig, Spread};
pub use curves::FadeCurve;
pub use factory::{ParticleFactory, ShapeFactory, ShapeStyle};
pub use instance::ParticleInstance;
pub use manager::{AnimationState, ParticleManager, TickOutcome};
pub use observer::{AnimationObserver, EventRecorder, RunInfo};
pub use particle::{Particle, Payload, RenderState, SpawnParams};
pub use pool::RecyclePool;
pub use presets::{Dimensions, Preset, PresetKind};
pub use crate::rand::ParticleRng;
pub use scheduler::EmissionScheduler;
pub use shape::{Shape, ShapeKind, TEXTURED_VARIANT};
pub use source::ParticleSource;
