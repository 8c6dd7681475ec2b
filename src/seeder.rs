//! Random starting boards

use crate::config::LifeConfig;
use crate::error::ConfigError;
use crate::grid::{CellState, Grid};
use rand::prelude::*;
use tracing::info;

pub struct Seeder {
    min_size: usize,
    max_size: usize,
    on_probability: f64,
    dimensions: Option<(usize, usize)>,
    rng: StdRng,
}

impl Seeder {
    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            min_size: config.min_size,
            max_size: config.max_size,
            on_probability: config.on_probability,
            dimensions: config.dimensions,
            rng,
        })
    }

    /// A square board with a random side in `[min_size, max_size]`,
    /// or the configured fixed dimensions when set
    pub fn seed(&mut self) -> Grid {
        let (width, height) = match self.dimensions {
            Some(d) => d,
            None => {
                let side = self.rng.gen_range(self.min_size..=self.max_size);
                (side, side)
            }
        };
        self.seed_with_size(width, height)
    }

    pub fn seed_with_size(&mut self, width: usize, height: usize) -> Grid {
        let p = self.on_probability;
        let rng = &mut self.rng;
        let grid = Grid::from_fn(width, height, |_, _| CellState::from(rng.gen_bool(p)));
        info!(width, height, population = grid.population(), "seeded board");
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> LifeConfig {
        LifeConfig { seed: Some(seed), ..LifeConfig::default() }
    }

    #[test]
    fn board_is_square_and_within_bounds() {
        let mut seeder = Seeder::from_config(&seeded(3)).unwrap();
        for _ in 0..50 {
            let (w, h) = seeder.seed().dimensions();
            assert_eq!(w, h);
            assert!((6..=30).contains(&w), "side {w}");
        }
    }

    #[test]
    fn same_seed_same_board() {
        let a = Seeder::from_config(&seeded(42)).unwrap().seed();
        let b = Seeder::from_config(&seeded(42)).unwrap().seed();
        assert_eq!(a, b);
    }

    #[test]
    fn probability_extremes() {
        let mut config = seeded(9);
        config.on_probability = 0.0;
        assert_eq!(Seeder::from_config(&config).unwrap().seed().population(), 0);

        config.on_probability = 1.0;
        let grid = Seeder::from_config(&config).unwrap().seed();
        assert_eq!(grid.population(), grid.width() * grid.height());
    }

    #[test]
    fn fixed_bounds_give_fixed_size() {
        let config = LifeConfig { min_size: 11, max_size: 11, ..seeded(1) };
        assert_eq!(Seeder::from_config(&config).unwrap().seed().dimensions(), (11, 11));
    }

    #[test]
    fn explicit_dimensions_override_random_side() {
        let config = LifeConfig { dimensions: Some((40, 3)), ..seeded(1) };
        assert_eq!(Seeder::from_config(&config).unwrap().seed().dimensions(), (40, 3));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = LifeConfig { min_size: 0, ..LifeConfig::default() };
        assert!(Seeder::from_config(&config).is_err());
    }
}
