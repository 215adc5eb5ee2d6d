//! Confetti CLI - headless driver for the confetti particle engine

mod canvas;
mod commands;
mod runner;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{preset, simulate};

#[derive(Parser)]
#[command(name = "confetti")]
#[command(about = "Simulate confetti particle animations without a display", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a particle configuration file
    Simulate {
        /// Path to a TOML configuration
        config: String,

        /// Maximum number of frames to run
        #[arg(long, default_value = "600")]
        frames: usize,

        /// Milliseconds per frame
        #[arg(long, default_value = "16")]
        step_ms: u64,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Surface width in pixels
        #[arg(long, default_value = "1080")]
        width: f32,

        /// Surface height in pixels
        #[arg(long, default_value = "1920")]
        height: f32,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Run one of the built-in animations
    Preset {
        /// Preset name
        #[arg(value_parser = parse_preset)]
        name: String,

        /// Emission mode
        #[arg(long, default_value = "once", value_parser = ["once", "stream", "infinite"])]
        mode: String,

        /// Emission window in ms for stream mode
        #[arg(long, default_value = "3000")]
        duration: u64,

        /// Maximum number of frames to run
        #[arg(long, default_value = "600")]
        frames: usize,

        /// Milliseconds per frame
        #[arg(long, default_value = "16")]
        step_ms: u64,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Surface width in pixels
        #[arg(long, default_value = "1080")]
        width: f32,

        /// Surface height in pixels
        #[arg(long, default_value = "1920")]
        height: f32,

        /// Print ASCII frames while running
        #[arg(long)]
        render: bool,

        /// Print every Nth frame when rendering
        #[arg(long, default_value = "10")]
        every: usize,

        /// Output format
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

fn parse_preset(s: &str) -> Result<String, String> {
    s.parse::<confetti_particles::PresetKind>()
        .map(|_| s.to_string())
        .map_err(|_| {
            format!(
                "unknown preset '{}'; valid values: {}",
                s,
                confetti_particles::PresetKind::NAMES.join(", ")
            )
        })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            config,
            frames,
            step_ms,
            seed,
            width,
            height,
            format,
        } => simulate::run(simulate::SimulateArgs {
            config,
            frames,
            step_ms,
            seed,
            width,
            height,
            format,
        }),
        Commands::Preset {
            name,
            mode,
            duration,
            frames,
            step_ms,
            seed,
            width,
            height,
            render,
            every,
            format,
        } => preset::run(preset::PresetArgs {
            name,
            mode,
            duration,
            frames,
            step_ms,
            seed,
            width,
            height,
            render,
            every,
            format,
        }),
    }
}
