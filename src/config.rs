use crate::engine::Neighborhood;
use crate::error::ConfigError;
use serde::Deserialize;
use std::time::Duration;

pub const MINIMUM_BOARD_SIZE: usize = 6;
pub const MAXIMUM_BOARD_SIZE: usize = 30;
pub const DEFAULT_ON_PROBABILITY: f64 = 0.5;
pub const DEFAULT_STEP_INTERVAL_SECONDS: f64 = 2.0;
/// Largest board the seeder will allocate
pub const MAX_BOARD_CELLS: usize = 1 << 24;

/// Unvalidated options from a settings file or the command line.
///
/// Sizes are signed so that a negative value is reported as a configuration error
/// instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub min_size: Option<i64>,
    pub max_size: Option<i64>,
    pub on_probability: Option<f64>,
    pub step_interval_seconds: Option<f64>,
    pub seed: Option<u64>,
    pub generations: Option<u64>,
    pub neighborhood: Option<Neighborhood>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl ConfigOverrides {
    /// Layer `other` on top of `self`; values set in `other` win
    pub fn merge(self, other: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            min_size: other.min_size.or(self.min_size),
            max_size: other.max_size.or(self.max_size),
            on_probability: other.on_probability.or(self.on_probability),
            step_interval_seconds: other.step_interval_seconds.or(self.step_interval_seconds),
            seed: other.seed.or(self.seed),
            generations: other.generations.or(self.generations),
            neighborhood: other.neighborhood.or(self.neighborhood),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }
}

/// Validated simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub min_size: usize,
    pub max_size: usize,
    pub on_probability: f64,
    pub step_interval_seconds: f64,
    pub seed: Option<u64>,
    /// Stop after this many generations; `None` runs until interrupted
    pub generations: Option<u64>,
    pub neighborhood: Neighborhood,
    /// Fixed board size, bypassing the random square size
    pub dimensions: Option<(usize, usize)>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            min_size: MINIMUM_BOARD_SIZE,
            max_size: MAXIMUM_BOARD_SIZE,
            on_probability: DEFAULT_ON_PROBABILITY,
            step_interval_seconds: DEFAULT_STEP_INTERVAL_SECONDS,
            seed: None,
            generations: None,
            neighborhood: Neighborhood::default(),
            dimensions: None,
        }
    }
}

fn positive(name: &'static str, value: i64) -> Result<usize, ConfigError> {
    if value < 1 {
        return Err(ConfigError::NonPositiveSize { name, value });
    }
    Ok(value as usize)
}

fn check_cells(width: usize, height: usize) -> Result<(), ConfigError> {
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_BOARD_CELLS => Ok(()),
        _ => Err(ConfigError::BoardTooLarge { width, height, limit: MAX_BOARD_CELLS }),
    }
}

impl LifeConfig {
    /// Apply overrides to the defaults and validate the result
    pub fn from_overrides(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let min_size = match overrides.min_size {
            Some(v) => positive("minSize", v)?,
            None => defaults.min_size,
        };
        let max_size = match overrides.max_size {
            Some(v) => positive("maxSize", v)?,
            None => defaults.max_size,
        };
        let dimensions = match (overrides.width, overrides.height) {
            (Some(w), Some(h)) => Some((positive("width", w)?, positive("height", h)?)),
            (None, None) => None,
            _ => return Err(ConfigError::PartialDimensions),
        };

        let config = Self {
            min_size,
            max_size,
            on_probability: overrides.on_probability.unwrap_or(defaults.on_probability),
            step_interval_seconds: overrides
                .step_interval_seconds
                .unwrap_or(defaults.step_interval_seconds),
            seed: overrides.seed,
            generations: overrides.generations,
            neighborhood: overrides.neighborhood.unwrap_or(defaults.neighborhood),
            dimensions,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size == 0 {
            return Err(ConfigError::NonPositiveSize { name: "minSize", value: 0 });
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::SizeRange { min: self.min_size, max: self.max_size });
        }
        if !(0.0..=1.0).contains(&self.on_probability) {
            return Err(ConfigError::Probability(self.on_probability));
        }
        if !self.step_interval_seconds.is_finite() || self.step_interval_seconds < 0.0 {
            return Err(ConfigError::Interval(self.step_interval_seconds));
        }
        if let Some((w, h)) = self.dimensions {
            if w == 0 || h == 0 {
                let (name, value) = if w == 0 { ("width", w) } else { ("height", h) };
                return Err(ConfigError::NonPositiveSize { name, value: value as i64 });
            }
            check_cells(w, h)?;
        } else {
            check_cells(self.max_size, self.max_size)?;
        }
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(self.step_interval_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = LifeConfig::from_overrides(ConfigOverrides::default()).unwrap();
        assert_eq!(config, LifeConfig::default());
        assert_eq!(config.min_size, 6);
        assert_eq!(config.max_size, 30);
        assert_eq!(config.step_interval(), Duration::from_secs(2));
        assert_eq!(config.neighborhood, Neighborhood::VonNeumann);
    }

    #[test]
    fn negative_and_zero_sizes_rejected() {
        let err = LifeConfig::from_overrides(ConfigOverrides { min_size: Some(-4), ..Default::default() });
        assert_eq!(err, Err(ConfigError::NonPositiveSize { name: "minSize", value: -4 }));

        let err = LifeConfig::from_overrides(ConfigOverrides { max_size: Some(0), ..Default::default() });
        assert_eq!(err, Err(ConfigError::NonPositiveSize { name: "maxSize", value: 0 }));
    }

    #[test]
    fn inverted_range_rejected() {
        let overrides = ConfigOverrides { min_size: Some(10), max_size: Some(8), ..Default::default() };
        assert_eq!(
            LifeConfig::from_overrides(overrides),
            Err(ConfigError::SizeRange { min: 10, max: 8 })
        );
    }

    #[test]
    fn probability_out_of_range_rejected() {
        for p in [-0.1, 1.5, f64::NAN] {
            let overrides = ConfigOverrides { on_probability: Some(p), ..Default::default() };
            assert!(matches!(LifeConfig::from_overrides(overrides), Err(ConfigError::Probability(_))));
        }
    }

    #[test]
    fn interval_must_be_finite_and_non_negative() {
        for s in [-1.0, f64::INFINITY, f64::NAN] {
            let overrides = ConfigOverrides { step_interval_seconds: Some(s), ..Default::default() };
            assert!(matches!(LifeConfig::from_overrides(overrides), Err(ConfigError::Interval(_))));
        }
        let overrides = ConfigOverrides { step_interval_seconds: Some(0.0), ..Default::default() };
        assert_eq!(LifeConfig::from_overrides(overrides).unwrap().step_interval(), Duration::ZERO);
    }

    #[test]
    fn dimensions_require_both_sides() {
        let overrides = ConfigOverrides { width: Some(4), ..Default::default() };
        assert_eq!(LifeConfig::from_overrides(overrides), Err(ConfigError::PartialDimensions));

        let overrides = ConfigOverrides { width: Some(4), height: Some(9), ..Default::default() };
        assert_eq!(LifeConfig::from_overrides(overrides).unwrap().dimensions, Some((4, 9)));
    }

    #[test]
    fn oversized_boards_rejected() {
        let overrides = ConfigOverrides { max_size: Some(i64::MAX), ..Default::default() };
        assert!(matches!(
            LifeConfig::from_overrides(overrides),
            Err(ConfigError::BoardTooLarge { limit: MAX_BOARD_CELLS, .. })
        ));

        let overrides = ConfigOverrides { width: Some(1 << 20), height: Some(1 << 20), ..Default::default() };
        assert_eq!(
            LifeConfig::from_overrides(overrides),
            Err(ConfigError::BoardTooLarge { width: 1 << 20, height: 1 << 20, limit: MAX_BOARD_CELLS })
        );

        let overrides = ConfigOverrides { width: Some(1 << 12), height: Some(1 << 12), ..Default::default() };
        assert!(LifeConfig::from_overrides(overrides).is_ok());
    }

    #[test]
    fn later_layer_wins() {
        let file = ConfigOverrides { min_size: Some(8), seed: Some(1), ..Default::default() };
        let cli = ConfigOverrides { seed: Some(2), ..Default::default() };
        let merged = file.merge(cli);
        assert_eq!(merged.min_size, Some(8));
        assert_eq!(merged.seed, Some(2));
    }
}
