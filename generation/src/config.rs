use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::factory::Order;
use crate::maze::Algorithm;

pub const DEFAULT_WIDTH: usize = 16;
pub const DEFAULT_HEIGHT: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub algorithm: Algorithm,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            algorithm: Algorithm::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Reads `MAZE_WIDTH`, `MAZE_HEIGHT`, `MAZE_ALGORITHM` and `MAZE_SEED`,
    /// after loading a `.env` file from the working directory if there is one.
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let width = parse(&lookup, "MAZE_WIDTH")?.unwrap_or(defaults.width);
        let height = parse(&lookup, "MAZE_HEIGHT")?.unwrap_or(defaults.height);
        let algorithm = parse(&lookup, "MAZE_ALGORITHM")?.unwrap_or(defaults.algorithm);
        let seed = parse(&lookup, "MAZE_SEED")?;

        for (key, value) in [("MAZE_WIDTH", width), ("MAZE_HEIGHT", height)] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    key,
                    value: value.to_string(),
                });
            }
        }

        Ok(Self {
            width,
            height,
            algorithm,
            seed,
        })
    }

    pub fn order(&self) -> Order {
        let order = Order::new(self.width, self.height).algorithm(self.algorithm);
        match self.seed {
            Some(seed) => order.seed(seed),
            None => order,
        }
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let value = raw.trim().trim_matches('"').trim_matches('\'');
    if value.is_empty() {
        return Ok(None);
    }

    value.parse().map(Some).map_err(|_| ConfigError::Invalid {
        key,
        value: raw.clone(),
    })
}
