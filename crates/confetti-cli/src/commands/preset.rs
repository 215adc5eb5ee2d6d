//! Run a built-in animation

use crate::canvas::AsciiCanvas;
use crate::runner;
use anyhow::{bail, Result};
use confetti_core::{Color, Rect};
use confetti_particles::{Dimensions, Preset, PresetKind};
use confetti_runtime::FixedStepClock;

const CANVAS_COLS: usize = 60;
const CANVAS_ROWS: usize = 24;

pub struct PresetArgs {
    pub name: String,
    pub mode: String,
    pub duration: u64,
    pub frames: usize,
    pub step_ms: u64,
    pub seed: Option<u64>,
    pub width: f32,
    pub height: f32,
    pub render: bool,
    pub every: usize,
    pub format: String,
}

pub fn run(args: PresetArgs) -> Result<()> {
    let kind: PresetKind = args.name.parse()?;
    let surface = Rect::from_size(args.width, args.height);
    let preset = kind.build(surface, &Color::gold_palette(), &Dimensions::default());
    let preset = apply_mode(preset, &args.mode, args.duration)?;

    log::info!("Running preset '{}' in {} mode", args.name, args.mode);

    let mut manager = preset
        .into_manager()
        .with_tick_source(FixedStepClock::new(args.step_ms));
    if let Some(seed) = args.seed {
        manager = manager.with_seed(seed);
    }

    let canvas = AsciiCanvas::new(CANVAS_COLS, CANVAS_ROWS, manager.surface());
    let every = args.every.max(1);
    let summary = runner::drive(&mut manager, args.frames, |frame, manager| {
        if args.render && frame % every == 0 {
            let elapsed = manager.elapsed_ms();
            let active = manager.active_count();
            println!("frame {frame} @ {elapsed} ms, {active} active");
            println!("{}", canvas.render(manager.pack_instances()));
        }
    })?;
    summary.print(&args.format)
}

fn apply_mode(preset: Preset, mode: &str, duration: u64) -> Result<Preset> {
    Ok(match mode {
        "once" => preset.one_shot(),
        "stream" => preset.stream(duration),
        "infinite" => preset.infinite(),
        other => bail!("unknown mode '{}'; valid values: once, stream, infinite", other),
    })
}
