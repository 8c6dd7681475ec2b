//! The generation loop: step, render, wait, repeat

use crate::engine::TransitionEngine;
use crate::grid::Grid;
use crate::render::Renderer;
use std::io;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    UserQuit,
}

pub struct Scheduler<R: Renderer> {
    grid: Grid,
    generation: u64,
    engine: TransitionEngine,
    renderer: R,
    interval: Duration,
    limit: Option<u64>,
}

impl<R: Renderer> Scheduler<R> {
    pub fn new(grid: Grid, engine: TransitionEngine, renderer: R, interval: Duration) -> Self {
        Self {
            grid,
            generation: 0,
            engine,
            renderer,
            interval,
            limit: None,
        }
    }

    /// Stop after `generations` steps instead of running until interrupted
    pub fn with_limit(mut self, generations: Option<u64>) -> Self {
        self.limit = generations;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Advance one generation, replacing the current board
    pub fn tick(&mut self) -> io::Result<()> {
        let (next, summary) = self.engine.step_with_summary(&self.grid);
        let was_alive = self.grid.population() > 0;
        self.grid = next;
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = summary.population,
            births = summary.births,
            deaths = summary.deaths,
            "generation"
        );
        if was_alive && summary.population == 0 {
            info!(generation = self.generation, "board died out");
        }
        self.renderer.render(&self.grid, self.generation)
    }

    /// Render the starting board, then loop until the limit or the viewer stops it
    pub fn run(&mut self) -> io::Result<StopReason> {
        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            neighborhood = %self.engine.neighborhood(),
            interval = ?self.interval,
            limit = ?self.limit,
            "simulation starting"
        );
        self.renderer.render(&self.grid, self.generation)?;

        loop {
            if self.limit.is_some_and(|limit| self.generation >= limit) {
                info!(generation = self.generation, "generation limit reached");
                return Ok(StopReason::GenerationLimit);
            }
            if !self.renderer.wait(self.interval)? {
                info!(generation = self.generation, "stopped by user");
                return Ok(StopReason::UserQuit);
            }
            self.tick()?;
        }
    }
}
