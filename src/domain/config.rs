//! Game configuration: roster size, starting cash, seed ranges, and the
//! simulation parameters, with validation of everything read from disk.

use crate::ports::config_port::ConfigPort;

use super::error::GameError;
use super::market::SimulationParams;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub num_companies: usize,
    pub initial_balance: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub min_income: f64,
    pub max_income: f64,
    pub simulation: SimulationParams,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            num_companies: 20,
            initial_balance: 100_000.0,
            min_value: 1_000_000.0,
            max_value: 10_000_000.0,
            min_income: 500_000.0,
            max_income: 2_000_000.0,
            simulation: SimulationParams::default(),
        }
    }
}

impl GameConfig {
    /// Build a config from an INI source, falling back to the defaults for
    /// any key the file leaves out, then validate the result.
    pub fn from_port(config: &dyn ConfigPort) -> Result<Self, GameError> {
        let defaults = GameConfig::default();

        // Checked before the usize cast: a negative file value must fail
        // validation, not wrap around.
        let num_companies =
            config.get_int("game", "num_companies", defaults.num_companies as i64);
        if num_companies < 1 {
            return Err(GameError::ConfigInvalid {
                section: "game".into(),
                key: "num_companies".into(),
                reason: "must be at least 1".into(),
            });
        }

        let built = GameConfig {
            num_companies: num_companies as usize,
            initial_balance: config.get_double(
                "game",
                "initial_balance",
                defaults.initial_balance,
            ),
            min_value: config.get_double("game", "min_value", defaults.min_value),
            max_value: config.get_double("game", "max_value", defaults.max_value),
            min_income: config.get_double("game", "min_income", defaults.min_income),
            max_income: config.get_double("game", "max_income", defaults.max_income),
            simulation: SimulationParams {
                value_swing: config.get_double(
                    "simulation",
                    "value_swing",
                    defaults.simulation.value_swing,
                ),
                income_swing: config.get_double(
                    "simulation",
                    "income_swing",
                    defaults.simulation.income_swing,
                ),
                news_probability: config.get_double(
                    "simulation",
                    "news_probability",
                    defaults.simulation.news_probability,
                ),
            },
        };
        built.validate()?;
        Ok(built)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        fn invalid(section: &str, key: &str, reason: &str) -> GameError {
            GameError::ConfigInvalid {
                section: section.into(),
                key: key.into(),
                reason: reason.into(),
            }
        }

        if self.num_companies == 0 {
            return Err(invalid("game", "num_companies", "must be at least 1"));
        }
        if self.initial_balance < 0.0 {
            return Err(invalid("game", "initial_balance", "must not be negative"));
        }
        if self.min_value <= 0.0 || self.max_value < self.min_value {
            return Err(invalid(
                "game",
                "min_value/max_value",
                "need 0 < min_value <= max_value",
            ));
        }
        if self.min_income <= 0.0 || self.max_income < self.min_income {
            return Err(invalid(
                "game",
                "min_income/max_income",
                "need 0 < min_income <= max_income",
            ));
        }
        if self.simulation.value_swing <= 0.0 || self.simulation.value_swing > 1.0 {
            return Err(invalid(
                "simulation",
                "value_swing",
                "must be in (0, 1]",
            ));
        }
        if self.simulation.income_swing <= 0.0 || self.simulation.income_swing > 1.0 {
            return Err(invalid(
                "simulation",
                "income_swing",
                "must be in (0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.simulation.news_probability) {
            return Err(invalid(
                "simulation",
                "news_probability",
                "must be in [0, 1]",
            ));
        }
        Ok(())
    }
}
