//! Drives a manager headlessly and summarizes the run

use anyhow::{Context, Result};
use confetti_particles::{EventRecorder, ParticleManager, ShapeFactory, TickOutcome};
use confetti_runtime::AnimationEvent;
use serde::Serialize;

/// Totals of one headless run
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub generation: u64,
    pub frames: usize,
    pub elapsed_ms: u64,
    pub finished: bool,
    pub created: usize,
    pub peak_active: usize,
    pub active: usize,
    pub pooled: usize,
    pub entered: usize,
    pub exited: usize,
}

impl RunSummary {
    pub fn print(&self, format: &str) -> Result<()> {
        match format {
            "json" => {
                let json = serde_json::to_string_pretty(self).context("failed to encode summary")?;
                println!("{json}");
            }
            _ => {
                if self.finished {
                    println!(
                        "Run {} finished after {} frame(s) ({} ms)",
                        self.generation, self.frames, self.elapsed_ms
                    );
                } else {
                    println!(
                        "Run {} still running after {} frame(s) ({} ms)",
                        self.generation, self.frames, self.elapsed_ms
                    );
                }
                println!(
                    "  created {} particle(s), peak {} active",
                    self.created, self.peak_active
                );
                println!(
                    "  entered {}, exited {}, {} active, {} pooled",
                    self.entered, self.exited, self.active, self.pooled
                );
            }
        }
        Ok(())
    }
}

/// Start the manager and tick it until the run ends or `max_frames` pass.
/// `on_frame` sees the manager after every processed tick.
pub fn drive(
    manager: &mut ParticleManager<ShapeFactory>,
    max_frames: usize,
    mut on_frame: impl FnMut(usize, &mut ParticleManager<ShapeFactory>),
) -> Result<RunSummary> {
    let recorder = EventRecorder::new();
    let bus = recorder.bus();
    manager.set_observer(recorder);
    manager.animate().context("failed to start animation")?;

    let mut summary = RunSummary {
        generation: manager.generation(),
        ..Default::default()
    };

    while summary.frames < max_frames {
        let Some(outcome) = manager.advance() else {
            break;
        };
        summary.frames += 1;
        summary.peak_active = summary.peak_active.max(manager.active_count());
        on_frame(summary.frames, manager);
        if outcome == TickOutcome::Finished {
            summary.finished = true;
            break;
        }
    }
    manager.clear_observer();

    let bus = bus.borrow();
    summary.entered = bus.count(|e| matches!(e, AnimationEvent::ParticleEntered { .. }));
    summary.exited = bus.count(|e| matches!(e, AnimationEvent::ParticleExited { .. }));
    summary.elapsed_ms = manager.elapsed_ms();
    summary.created = manager.created_count();
    summary.active = manager.active_count();
    summary.pooled = manager.pooled_count();
    log::debug!("Recorded {} lifecycle events", bus.len());
    Ok(summary)
}
