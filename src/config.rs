//! Tunable constants for the simulator and its view.
//!
//! Defaults match the shipped behavior; a few values can be overridden
//! through environment variables (see [`Config::from_env`]).

use std::str::FromStr;

use thiserror::Error;

pub const ENV_STEP_INTERVAL: &str = "LIFE_STEP_INTERVAL";
pub const ENV_CELL_SIZE: &str = "LIFE_CELL_SIZE";
pub const ENV_RANDOM_SIZE: &str = "LIFE_RANDOM_SIZE";
pub const ENV_RANDOM_DENSITY: &str = "LIFE_RANDOM_DENSITY";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key}: cannot parse {value:?}")]
    Parse { key: &'static str, value: String },
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange { name: &'static str, value: f32, min: f32, max: f32 },
    #[error("{name}: lower bound {min} exceeds upper bound {max}")]
    InvertedBounds { name: &'static str, min: f32, max: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    /// World units per cell edge
    pub cell_size: f32,
    /// Zoom change per wheel notch; also the minimum zoom
    pub zoom_increment: f32,
    pub zoom_max: f32,
    /// Seconds between automatic steps
    pub step_interval: f32,
    pub step_adjust: f32,
    pub step_interval_min: f32,
    pub step_interval_max: f32,
    /// Grid lines are skipped when more than this many cells span an axis
    pub grid_line_limit: i32,
    pub grid_line_min_zoom: f32,
    /// Edge length of the square filled by randomize
    pub random_size: i32,
    pub random_density: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 1000.0,
            screen_height: 700.0,
            cell_size: 10.0,
            zoom_increment: 0.125,
            zoom_max: 8.0,
            step_interval: 0.2,
            step_adjust: 0.05,
            step_interval_min: 0.01,
            step_interval_max: 2.0,
            grid_line_limit: 200,
            grid_line_min_zoom: 0.5,
            random_size: 40,
            random_density: 0.3,
        }
    }
}

impl Config {
    /// Defaults with overrides read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, ENV_STEP_INTERVAL)? {
            config.step_interval = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_CELL_SIZE)? {
            config.cell_size = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_RANDOM_SIZE)? {
            config.random_size = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_RANDOM_DENSITY)? {
            config.random_density = v;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bounds("step interval", self.step_interval_min, self.step_interval_max)?;
        check_bounds("zoom", self.zoom_increment, self.zoom_max)?;
        check_range("step interval", self.step_interval, self.step_interval_min, self.step_interval_max)?;
        check_range("cell size", self.cell_size, 1.0, 256.0)?;
        check_range("zoom increment", self.zoom_increment, 0.01, 1.0)?;
        check_range("random size", self.random_size as f32, 1.0, 1000.0)?;
        check_range("random density", self.random_density as f32, 0.0, 1.0)?;
        Ok(())
    }

    /// Clamp a requested step interval into the configured range
    pub fn clamp_step_interval(&self, interval: f32) -> f32 {
        interval.clamp(self.step_interval_min, self.step_interval_max)
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.screen_width, self.screen_height)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse { key, value: raw }),
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value, min, max })
    }
}

fn check_bounds(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedBounds { name, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.step_interval, 0.2);
        assert_eq!(config.zoom_max, 8.0);
        assert_eq!(config.grid_line_limit, 200);
    }

    #[test]
    fn test_no_overrides_yields_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Ok(Config::default()));
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_STEP_INTERVAL, "0.5"),
            (ENV_CELL_SIZE, " 16 "),
            (ENV_RANDOM_SIZE, "64"),
            (ENV_RANDOM_DENSITY, "0.5"),
        ]))
        .unwrap();
        assert_eq!(config.step_interval, 0.5);
        assert_eq!(config.cell_size, 16.0);
        assert_eq!(config.random_size, 64);
        assert_eq!(config.random_density, 0.5);
    }

    #[test]
    fn test_unparseable_value_rejected() {
        let err = Config::from_lookup(lookup_from(&[(ENV_CELL_SIZE, "huge")])).unwrap_err();
        assert_eq!(err, ConfigError::Parse { key: ENV_CELL_SIZE, value: "huge".to_string() });
    }

    #[test]
    fn test_out_of_range_interval_rejected() {
        let err = Config::from_lookup(lookup_from(&[(ENV_STEP_INTERVAL, "5")])).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { name: "step interval", .. }));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = Config { step_interval_min: 3.0, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvertedBounds { .. })));
    }

    #[test]
    fn test_clamps_saturate() {
        let config = Config::default();
        assert_eq!(config.clamp_step_interval(0.0), 0.01);
        assert_eq!(config.clamp_step_interval(9.0), 2.0);
    }
}
