//! Fixed-cadence driver loop.
//!
//! The scheduler owns timing and cancellation only. Each tick it asks the
//! [`StepController`] for one generation, folds the transitions into a
//! [`DisplayMap`], and hands the frame to a [`Renderer`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{info, trace};

use crate::automaton::controller::StepController;
use crate::automaton::grid::Grid;
use crate::automaton::stepping::Transition;
use crate::config::LifeConfig;
use crate::display::DisplayMap;
use crate::error::Result;

/// Longest uninterrupted sleep; bounds how late a cancellation is noticed.
const CANCEL_POLL: Duration = Duration::from_millis(10);

/// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Everything a renderer needs to draw one generation.
pub struct Frame<'a> {
    pub generation: u64,
    pub grid: &'a Grid,
    pub display: &'a DisplayMap,
    /// Cells whose display category changed since the previous frame.
    pub changed: &'a [usize],
    pub transitions: &'a [Transition],
}

/// Presentation surface driven by the scheduler.
pub trait Renderer {
    /// Draw the seeded grid before the first step.
    fn begin(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Draw the result of one step.
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Called once after the loop ends.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Cancelled,
    GenerationLimit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations stepped during this run.
    pub steps: u64,
    pub stop_reason: StopReason,
}

pub struct Scheduler {
    interval: Duration,
    max_generations: Option<u64>,
    cancel: CancelToken,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Scheduler {
            interval,
            max_generations: None,
            cancel: CancelToken::new(),
        }
    }

    pub fn from_config(config: &LifeConfig) -> Self {
        Scheduler {
            interval: config.tick_interval,
            max_generations: config.max_generations,
            cancel: CancelToken::new(),
        }
    }

    /// Stop after `steps` generations.
    pub fn with_max_generations(mut self, steps: u64) -> Self {
        self.max_generations = Some(steps);
        self
    }

    /// A handle that stops the loop from anywhere, including another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Sleep until `deadline`, waking early if cancelled. Returns false on cancellation.
    fn wait_until(&self, deadline: Instant) -> bool {
        loop {
            if self.cancel.is_cancelled() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep((deadline - now).min(CANCEL_POLL));
        }
    }

    /// Run until cancelled or the generation limit is reached.
    ///
    /// The seeded grid is drawn first and the first generation is stepped
    /// straight away; after that one generation is stepped and drawn every
    /// `interval`. A tick that overruns its slot pushes the schedule back
    /// rather than firing a burst of catch-up steps.
    ///
    /// `Renderer::finish` runs on every exit, including a failed frame. The
    /// first error wins.
    pub fn run<R: Renderer + ?Sized>(
        &self,
        controller: &mut StepController,
        renderer: &mut R,
    ) -> Result<RunSummary> {
        let mut steps = 0u64;
        let outcome = self.drive(controller, renderer, &mut steps);
        let finished = renderer.finish();

        let stop_reason = outcome?;
        finished?;
        info!(
            "scheduler stopped after {} generation(s): {:?}",
            steps, stop_reason
        );

        Ok(RunSummary { steps, stop_reason })
    }

    fn drive<R: Renderer + ?Sized>(
        &self,
        controller: &mut StepController,
        renderer: &mut R,
        steps: &mut u64,
    ) -> Result<StopReason> {
        let mut display = DisplayMap::new(controller.grid());
        renderer.begin(&Frame {
            generation: controller.generation(),
            grid: controller.grid(),
            display: &display,
            changed: &[],
            transitions: &[],
        })?;

        info!(
            "scheduler started: {}x{} grid, {:?} per generation",
            controller.grid().rows(),
            controller.grid().cols(),
            self.interval
        );

        let mut next_tick = Instant::now();
        loop {
            if self.max_generations.is_some_and(|max| *steps >= max) {
                return Ok(StopReason::GenerationLimit);
            }
            if !self.wait_until(next_tick) {
                return Ok(StopReason::Cancelled);
            }

            let started = Instant::now();
            let transitions = controller.step();
            let changed = display.apply(transitions);
            renderer.render(&Frame {
                generation: controller.generation(),
                grid: controller.grid(),
                display: &display,
                changed: &changed,
                transitions: controller.last_transitions(),
            })?;
            *steps += 1;

            let finished = Instant::now();
            trace!("tick {} took {:?}", steps, finished - started);

            next_tick += self.interval;
            if next_tick < finished {
                next_tick = finished + self.interval;
            }
        }
    }
}
