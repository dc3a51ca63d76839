//! Terminal driver: seeds a grid sized to the terminal (or the configured viewport) and animates it.
//!
//! Settings come from `LIFE_*` environment variables (see `life_automata::config`);
//! log output goes to stderr and is filtered with `RUST_LOG`.

use std::io;

use log::info;

use life_automata::automaton::{random_grid, StepController};
use life_automata::config::LifeConfig;
use life_automata::scheduler::Scheduler;
use life_automata::terminal::TerminalRenderer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = LifeConfig::from_env()?;
    let (rows, cols) = config.grid_dimensions()?;
    info!(
        "{}x{} px viewport at {} px per cell -> {}x{} grid",
        config.viewport.width_px, config.viewport.height_px, config.cell_size_px, rows, cols
    );

    let grid = random_grid(rows, cols, config.alive_probability, config.seed)?;
    let mut controller = StepController::new(grid, config.threads)?;
    let scheduler = Scheduler::from_config(&config);

    let stdout = io::stdout();
    let mut renderer = TerminalRenderer::new(stdout.lock());
    let summary = scheduler.run(&mut controller, &mut renderer)?;

    info!(
        "finished at generation {} ({:?})",
        controller.generation(),
        summary.stop_reason
    );
    Ok(())
}
