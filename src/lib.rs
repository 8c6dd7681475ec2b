//! Two-dimensional binary cellular automaton with a bounded von Neumann neighborhood.
//!
//! [`grid::Grid`] values flow from a [`seeder::Seeder`] through the
//! [`engine::TransitionEngine`] to a [`render::Renderer`], driven by a
//! [`scheduler::Scheduler`].

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod render;
pub mod scheduler;
pub mod seeder;
pub mod settings;
pub mod terminal;

pub use config::LifeConfig;
pub use engine::{Neighborhood, TransitionEngine};
pub use error::{Error, Result};
pub use grid::{CellState, Grid};
