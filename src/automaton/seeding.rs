//! Random initial population.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::grid::Grid;
use crate::error::{LifeError, Result};

/// Chance that any given cell starts alive.
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

pub type SeedRng = StdRng;

/// Build a reproducible RNG from `seed`, or an entropy-seeded one when `None`.
pub fn seed_rng(seed: Option<u64>) -> SeedRng {
    match seed {
        Some(seed) => SeedRng::seed_from_u64(seed),
        None => SeedRng::from_entropy(),
    }
}

/// Reject probabilities outside `[0, 1]` (including NaN).
pub fn check_probability(probability: f64) -> Result<()> {
    if (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(LifeError::InvalidProbability(probability))
    }
}

/// Overwrite every cell with an independent draw: alive with `probability`.
pub fn populate<R: Rng + ?Sized>(grid: &mut Grid, probability: f64, rng: &mut R) -> Result<()> {
    check_probability(probability)?;

    for cell in grid.cells_mut() {
        *cell = rng.gen_bool(probability);
    }

    debug!(
        "seeded {}x{} grid at p={}: {} alive",
        grid.rows(),
        grid.cols(),
        probability,
        grid.population()
    );
    Ok(())
}

/// Create a `rows` x `cols` grid seeded with `probability`, using `seed` if given.
pub fn random_grid(rows: usize, cols: usize, probability: f64, seed: Option<u64>) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols);
    let mut rng = seed_rng(seed);
    populate(&mut grid, probability, &mut rng)?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let a = random_grid(20, 30, DEFAULT_ALIVE_PROBABILITY, Some(7)).unwrap();
        let b = random_grid(20, 30, DEFAULT_ALIVE_PROBABILITY, Some(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 600);
    }

    #[test]
    fn test_probability_extremes() {
        let none = random_grid(10, 10, 0.0, Some(1)).unwrap();
        assert_eq!(none.population(), 0);

        let all = random_grid(10, 10, 1.0, Some(1)).unwrap();
        assert_eq!(all.population(), 100);
    }

    #[test]
    fn test_density_near_probability() {
        let grid = random_grid(100, 100, DEFAULT_ALIVE_PROBABILITY, Some(2024)).unwrap();
        let density = grid.population() as f64 / grid.len() as f64;
        assert!(
            (density - DEFAULT_ALIVE_PROBABILITY).abs() < 0.03,
            "density {} too far from {}",
            density,
            DEFAULT_ALIVE_PROBABILITY
        );
    }

    #[test]
    fn test_invalid_probability() {
        assert_eq!(
            random_grid(2, 2, 1.5, None).unwrap_err(),
            LifeError::InvalidProbability(1.5)
        );
        assert!(random_grid(2, 2, -0.1, None).is_err());
        assert!(check_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_empty_grid_seeds_fine() {
        let grid = random_grid(0, 12, 0.5, None).unwrap();
        assert!(grid.is_empty());
    }
}
