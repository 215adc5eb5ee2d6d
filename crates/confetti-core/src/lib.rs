//! Confetti Core - Foundational types for the confetti particle engine
//!
//! This crate provides the core types that all other confetti crates depend on:
//! - `ParticleId` - Stable particle identifiers that survive recycling
//! - `Point`, `Rect` - Screen-space geometry
//! - `Color` - RGBA color
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{ConfettiError, Result};
pub use id::ParticleId;
pub use types::{Color, Point, Rect};
