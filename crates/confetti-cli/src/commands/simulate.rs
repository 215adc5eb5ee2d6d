//! Run a particle configuration file headlessly

use crate::runner;
use anyhow::{Context, Result};
use confetti_core::{Color, Rect};
use confetti_particles::{
    Dimensions, ManagerConfig, ParticleManager, ParticleSource, ShapeFactory,
};
use confetti_runtime::FixedStepClock;

pub struct SimulateArgs {
    pub config: String,
    pub frames: usize,
    pub step_ms: u64,
    pub seed: Option<u64>,
    pub width: f32,
    pub height: f32,
    pub format: String,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read {}", args.config))?;
    let table: toml::value::Table =
        toml::from_str(&text).with_context(|| format!("failed to parse {}", args.config))?;

    let surface = Rect::from_size(args.width, args.height);
    let mut manager = build_manager(&table, surface)
        .with_context(|| format!("invalid configuration in {}", args.config))?
        .with_tick_source(FixedStepClock::new(args.step_ms));
    if let Some(seed) = args.seed {
        manager = manager.with_seed(seed);
    }

    let summary = runner::drive(&mut manager, args.frames, |_, _| {})?;
    summary.print(&args.format)
}

/// Manager for a config table. Besides the run settings the table may
/// carry `source`, `colors` (hex strings) and `size`.
fn build_manager(
    table: &toml::value::Table,
    surface: Rect,
) -> Result<ParticleManager<ShapeFactory>> {
    let dims = Dimensions::default();
    let config = ManagerConfig::from_toml(table, surface)?;

    let size = match table.get("size") {
        Some(v) => v
            .as_float()
            .or_else(|| v.as_integer().map(|i| i as f64))
            .context("size must be a number")? as f32,
        None => dims.particle_size,
    };

    let source = match table.get("source") {
        Some(v) => ParticleSource::from_toml(v)?,
        None => {
            let y = surface.top - size;
            ParticleSource::range(surface.left, y, surface.right, y)
        }
    };

    let palette = match table.get("colors").and_then(|v| v.as_array()) {
        Some(colors) => colors
            .iter()
            .map(|c| {
                c.as_str()
                    .and_then(Color::parse_hex)
                    .with_context(|| format!("invalid color {c}"))
            })
            .collect::<Result<Vec<_>>>()?,
        None => Color::gold_palette(),
    };

    Ok(ParticleManager::new(ShapeFactory::flat(palette, size), source, surface).with_config(config))
}
