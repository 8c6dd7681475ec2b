//! Generation transitions
//!
//! The engine reads every neighbor count from the unmodified input grid and writes the
//! results into a fresh buffer, so no cell ever observes a partially updated generation.

use crate::grid::{CellState, Grid};
use serde::Deserialize;
use std::fmt;
use tracing::trace;

/// Which cells count as neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Neighborhood {
    /// Left, right, top and bottom only
    #[default]
    VonNeumann,
    /// All eight surrounding cells, as in classic Life
    Moore,
}

const VON_NEUMANN: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
#[rustfmt::skip]
const MOORE: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Neighborhood {
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Neighborhood::VonNeumann => &VON_NEUMANN,
            Neighborhood::Moore => &MOORE,
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Neighborhood::VonNeumann => f.write_str("von-neumann"),
            Neighborhood::Moore => f.write_str("moore"),
        }
    }
}

/// Row of the rule table that applies to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Reproduction,
    StaysOff,
    Solitude,
    Stable,
    Overpopulation,
}

impl Transition {
    pub fn classify(state: CellState, neighbors: u8) -> Self {
        match (state, neighbors) {
            (CellState::Off, 3) => Transition::Reproduction,
            (CellState::Off, _) => Transition::StaysOff,
            (CellState::On, 0..=1) => Transition::Solitude,
            (CellState::On, 2..=3) => Transition::Stable,
            (CellState::On, _) => Transition::Overpopulation,
        }
    }

    pub fn next_state(self) -> CellState {
        match self {
            Transition::Reproduction | Transition::Stable => CellState::On,
            Transition::StaysOff | Transition::Solitude | Transition::Overpopulation => CellState::Off,
        }
    }
}

/// Per-step statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSummary {
    pub population: usize,
    pub births: usize,
    pub deaths: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionEngine {
    neighborhood: Neighborhood,
}

impl TransitionEngine {
    pub fn new(neighborhood: Neighborhood) -> Self {
        Self { neighborhood }
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// ON neighbors of `(x, y)`. Neighbors off the board contribute nothing,
    /// including ones whose coordinates would overflow `i64`.
    #[inline]
    pub fn neighbor_count(&self, grid: &Grid, x: i64, y: i64) -> u8 {
        self.neighborhood
            .offsets()
            .iter()
            .filter(|(dx, dy)| {
                x.checked_add(*dx)
                    .zip(y.checked_add(*dy))
                    .is_some_and(|(nx, ny)| grid.get(nx, ny).is_on())
            })
            .count() as u8
    }

    pub fn transition(&self, grid: &Grid, x: i64, y: i64) -> Transition {
        Transition::classify(grid.get(x, y), self.neighbor_count(grid, x, y))
    }

    /// Compute the next generation. `grid` is only read.
    pub fn step(&self, grid: &Grid) -> Grid {
        let (w, h) = grid.dimensions();
        Grid::from_fn(w, h, |x, y| self.transition(grid, x as i64, y as i64).next_state())
    }

    /// Like [`TransitionEngine::step`], also counting births and deaths
    pub fn step_with_summary(&self, grid: &Grid) -> (Grid, StepSummary) {
        let mut summary = StepSummary::default();
        let (w, h) = grid.dimensions();
        let next = Grid::from_fn(w, h, |x, y| {
            let transition = self.transition(grid, x as i64, y as i64);
            match transition {
                Transition::Reproduction => summary.births += 1,
                Transition::Solitude | Transition::Overpopulation => summary.deaths += 1,
                Transition::Stable | Transition::StaysOff => {}
            }
            transition.next_state()
        });
        summary.population = next.population();
        trace!(births = summary.births, deaths = summary.deaths, population = summary.population, "step");
        (next, summary)
    }

    /// Advance `generations` steps
    pub fn run(&self, grid: &Grid, generations: u64) -> Grid {
        let mut current = grid.clone();
        for _ in 0..generations {
            current = self.step(&current);
        }
        current
    }
}
