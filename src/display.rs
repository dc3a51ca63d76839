//! Display categories for rendering hosts.
//!
//! The engine reports only life-states and transitions. This module turns
//! those into the four visual categories, treating BORN and DYING as one-tick
//! markers: on the following step they settle to ALIVE and DEAD unless the
//! cell flips again.

use crate::automaton::grid::Grid;
use crate::automaton::stepping::Transition;

/// Visual category of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DisplayCategory {
    Dead = 0,
    Dying = 1,
    Alive = 2,
    Born = 3,
}

impl DisplayCategory {
    /// Steady category for a life-state.
    pub fn steady(alive: bool) -> Self {
        if alive {
            DisplayCategory::Alive
        } else {
            DisplayCategory::Dead
        }
    }

    /// Category for a cell that went from `was_alive` to `is_alive` this step.
    pub fn from_change(was_alive: bool, is_alive: bool) -> Self {
        match (was_alive, is_alive) {
            (false, true) => DisplayCategory::Born,
            (true, false) => DisplayCategory::Dying,
            (_, alive) => DisplayCategory::steady(alive),
        }
    }

    /// Category for a transition record.
    pub fn from_transition(transition: &Transition) -> Self {
        DisplayCategory::from_change(!transition.became_alive, transition.became_alive)
    }

    /// The category a transient marker falls back to one step later.
    pub fn settled(self) -> Self {
        match self {
            DisplayCategory::Born => DisplayCategory::Alive,
            DisplayCategory::Dying => DisplayCategory::Dead,
            steady => steady,
        }
    }

    pub fn is_transient(self) -> bool {
        matches!(self, DisplayCategory::Born | DisplayCategory::Dying)
    }

    /// Whether the cell is alive in the simulation.
    pub fn is_alive(self) -> bool {
        matches!(self, DisplayCategory::Alive | DisplayCategory::Born)
    }

    /// Stylesheet class used by web hosts.
    pub fn class_name(self) -> &'static str {
        match self {
            DisplayCategory::Dead => "level-0",
            DisplayCategory::Dying => "level-1",
            DisplayCategory::Alive => "level-2",
            DisplayCategory::Born => "level-3",
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Per-cell display categories, kept in step with a simulation by feeding it transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayMap {
    categories: Vec<DisplayCategory>,
    /// Cells showing BORN or DYING, to be settled on the next apply.
    transient: Vec<usize>,
}

impl DisplayMap {
    /// Steady ALIVE/DEAD categories for every cell of `grid`.
    pub fn new(grid: &Grid) -> Self {
        DisplayMap {
            categories: grid.cells().iter().map(|&a| DisplayCategory::steady(a)).collect(),
            transient: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<DisplayCategory> {
        self.categories.get(index).copied()
    }

    pub fn categories(&self) -> &[DisplayCategory] {
        &self.categories
    }

    /// Apply one step's transitions.
    ///
    /// Returns the indices whose category changed, so a renderer can redraw
    /// only those cells. Last step's markers settle first; a cell that flips
    /// again this step gets a fresh marker instead.
    pub fn apply(&mut self, transitions: &[Transition]) -> Vec<usize> {
        let mut changed = Vec::with_capacity(self.transient.len() + transitions.len());

        for index in self.transient.drain(..) {
            let category = &mut self.categories[index];
            *category = category.settled();
            changed.push(index);
        }

        for transition in transitions {
            if let Some(category) = self.categories.get_mut(transition.index) {
                *category = DisplayCategory::from_transition(transition);
                self.transient.push(transition.index);
                changed.push(transition.index);
            }
        }

        changed.sort_unstable();
        changed.dedup();
        changed
    }

    /// Force the given cells back to the steady category for their life-state in `grid`.
    pub fn resync(&mut self, grid: &Grid, indices: impl IntoIterator<Item = usize>) {
        for index in indices {
            if let Some(category) = self.categories.get_mut(index) {
                *category = DisplayCategory::steady(grid.get(index));
            }
        }
        self.transient.retain(|&i| self.categories[i].is_transient());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Simulation;

    #[test]
    fn test_class_names_and_codes() {
        assert_eq!(DisplayCategory::Dead.class_name(), "level-0");
        assert_eq!(DisplayCategory::Dying.class_name(), "level-1");
        assert_eq!(DisplayCategory::Alive.class_name(), "level-2");
        assert_eq!(DisplayCategory::Born.class_name(), "level-3");
        assert_eq!(DisplayCategory::Born.code(), 3);
    }

    #[test]
    fn test_from_change() {
        assert_eq!(DisplayCategory::from_change(false, false), DisplayCategory::Dead);
        assert_eq!(DisplayCategory::from_change(false, true), DisplayCategory::Born);
        assert_eq!(DisplayCategory::from_change(true, true), DisplayCategory::Alive);
        assert_eq!(DisplayCategory::from_change(true, false), DisplayCategory::Dying);
    }

    #[test]
    fn test_initial_map_is_steady() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, true);
        let map = DisplayMap::new(&grid);
        assert_eq!(
            map.categories(),
            &[
                DisplayCategory::Dead,
                DisplayCategory::Alive,
                DisplayCategory::Dead,
                DisplayCategory::Dead
            ]
        );
    }

    #[test]
    fn test_markers_settle_next_step() {
        // Block on 4x4 plus one stray cell far enough away to die alone.
        let mut grid = Grid::new(4, 6);
        for i in [0, 1, 6, 7, 11] {
            grid.set(i, true);
        }
        let mut sim = Simulation::new(grid);
        let mut map = DisplayMap::new(&sim.grid);

        let transitions = sim.step();
        let changed = map.apply(&transitions);
        assert_eq!(changed, vec![11]);
        assert_eq!(map.get(11), Some(DisplayCategory::Dying));
        assert_eq!(map.get(0), Some(DisplayCategory::Alive));

        let transitions = sim.step();
        assert!(transitions.is_empty());
        let changed = map.apply(&transitions);
        assert_eq!(changed, vec![11]);
        assert_eq!(map.get(11), Some(DisplayCategory::Dead));

        let changed = map.apply(&[]);
        assert!(changed.is_empty());
    }

    #[test]
    fn test_born_then_survives_shows_alive() {
        // Blinker: centre stays alive, ends flip every step.
        let mut grid = Grid::new(5, 5);
        for i in [11, 12, 13] {
            grid.set(i, true);
        }
        let mut sim = Simulation::new(grid);
        let mut map = DisplayMap::new(&sim.grid);

        map.apply(&sim.step());
        assert_eq!(map.get(7), Some(DisplayCategory::Born));
        assert_eq!(map.get(11), Some(DisplayCategory::Dying));
        assert_eq!(map.get(12), Some(DisplayCategory::Alive));

        map.apply(&sim.step());
        // 7 was born last step and dies now: a fresh DYING, not a stale BORN.
        assert_eq!(map.get(7), Some(DisplayCategory::Dying));
        assert_eq!(map.get(11), Some(DisplayCategory::Born));
        assert_eq!(map.get(12), Some(DisplayCategory::Alive));
    }

    #[test]
    fn test_categories_track_life_state() {
        let mut grid = Grid::new(6, 6);
        for i in [7, 8, 13, 20, 26, 27, 33] {
            grid.set(i, true);
        }
        let mut sim = Simulation::new(grid);
        let mut map = DisplayMap::new(&sim.grid);

        for _ in 0..6 {
            map.apply(&sim.step());
            for (i, category) in map.categories().iter().enumerate() {
                assert_eq!(category.is_alive(), sim.grid.get(i), "cell {}", i);
            }
        }
    }

    #[test]
    fn test_resync() {
        let mut grid = Grid::new(1, 3);
        grid.set(0, true);
        let mut map = DisplayMap::new(&grid);
        map.apply(&[Transition {
            index: 2,
            became_alive: true,
        }]);
        grid.set(2, true);

        map.resync(&grid, [2]);
        assert_eq!(map.get(2), Some(DisplayCategory::Alive));
        assert!(map.apply(&[]).is_empty());
    }
}
