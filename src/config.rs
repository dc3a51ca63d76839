//! Configuration for a simulation run.
//!
//! Every setting has a default. Each can be overridden through a `LIFE_*`
//! environment variable:
//! - `LIFE_VIEWPORT_WIDTH` / `LIFE_VIEWPORT_HEIGHT` -- surface size in px (default: the
//!   attached terminal, or 800x600 when there is none)
//! - `LIFE_CELL_SIZE` -- cell edge in px (default 10)
//! - `LIFE_ALIVE_PROBABILITY` -- initial density (default 0.3)
//! - `LIFE_SEED` -- RNG seed; unset means OS entropy
//! - `LIFE_TICK_MS` -- milliseconds between generations (default 200)
//! - `LIFE_THREADS` -- step worker threads (default 1)
//! - `LIFE_MAX_GENERATIONS` -- stop after this many steps; unset runs until cancelled

use std::str::FromStr;
use std::time::Duration;

use log::debug;

use crate::automaton::seeding::{check_probability, DEFAULT_ALIVE_PROBABILITY};
use crate::error::{LifeError, Result};
use crate::terminal::terminal_viewport;
use crate::viewport::{Viewport, DEFAULT_CELL_SIZE_PX};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width_px: 800,
    height_px: 600,
};

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub viewport: Viewport,
    pub cell_size_px: u32,
    pub alive_probability: f64,
    pub seed: Option<u64>,
    pub tick_interval: Duration,
    pub threads: usize,
    pub max_generations: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            seed: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
            threads: 1,
            max_generations: None,
        }
    }
}

impl LifeConfig {
    /// Defaults overridden by any `LIFE_*` variables present in the process environment.
    ///
    /// An unset viewport dimension is taken from the attached terminal when there is one.
    pub fn from_env() -> Result<Self> {
        Self::from_sources(|name| std::env::var(name).ok(), terminal_viewport)
    }

    /// Defaults overridden by whatever `lookup` returns for each `LIFE_*` name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(lookup, |_| None)
    }

    /// Like [`from_lookup`](Self::from_lookup), with `surface` supplying the viewport
    /// for any dimension `lookup` leaves unset. `surface` receives the cell size.
    pub fn from_sources<F, S>(lookup: F, surface: S) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        S: FnOnce(u32) -> Option<Viewport>,
    {
        let defaults = Self::default();
        let cell_size_px = parse_or(&lookup, "LIFE_CELL_SIZE", defaults.cell_size_px)?;

        let width_px: Option<u32> = parse_opt(&lookup, "LIFE_VIEWPORT_WIDTH")?;
        let height_px: Option<u32> = parse_opt(&lookup, "LIFE_VIEWPORT_HEIGHT")?;
        let fallback = match (width_px, height_px) {
            (Some(_), Some(_)) => defaults.viewport,
            _ => surface(cell_size_px).unwrap_or(defaults.viewport),
        };

        let config = Self {
            viewport: Viewport {
                width_px: width_px.unwrap_or(fallback.width_px),
                height_px: height_px.unwrap_or(fallback.height_px),
            },
            cell_size_px,
            alive_probability: parse_or(
                &lookup,
                "LIFE_ALIVE_PROBABILITY",
                defaults.alive_probability,
            )?,
            seed: parse_opt(&lookup, "LIFE_SEED")?,
            tick_interval: Duration::from_millis(parse_or(
                &lookup,
                "LIFE_TICK_MS",
                defaults.tick_interval.as_millis() as u64,
            )?),
            threads: parse_or(&lookup, "LIFE_THREADS", defaults.threads)?,
            max_generations: parse_opt(&lookup, "LIFE_MAX_GENERATIONS")?,
        };

        config.validate()?;
        debug!("loaded config: {:?}", config);
        Ok(config)
    }

    /// Check ranges that the types alone do not enforce.
    pub fn validate(&self) -> Result<()> {
        check_probability(self.alive_probability)?;
        if self.threads == 0 {
            return Err(LifeError::InvalidConfig(
                "LIFE_THREADS must be at least 1".to_string(),
            ));
        }
        // Sizing errors (zero cell size, viewport smaller than a cell) surface here too.
        self.grid_dimensions()?;
        Ok(())
    }

    /// `(rows, cols)` of the grid this configuration produces.
    pub fn grid_dimensions(&self) -> Result<(usize, usize)> {
        self.viewport.grid_dimensions(self.cell_size_px)
    }
}

fn parse_opt<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| LifeError::InvalidConfig(format!("invalid {name}={raw:?}: {e}"))),
        None => Ok(None),
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_opt(lookup, name)?.unwrap_or(default))
}
