//! Company entity: market value, period income, and the news log.

use rand::Rng;

use super::error::GameError;

/// Default per-tick swing for company value: rates drawn from [-0.20, 0.20].
pub const DEFAULT_VALUE_SWING: f64 = 0.20;

/// Default per-tick swing for company income: rates drawn from [-0.10, 0.10].
pub const DEFAULT_INCOME_SWING: f64 = 0.10;

/// Direction of the last income move, for the standings display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeDirection {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    name: String,
    value: f64,
    income: f64,
    previous_income: f64,
    news: Vec<String>,
}

impl Company {
    /// Create a company with its initial market value and period income.
    /// Seed values are expected to be positive; a negative seed value is
    /// rejected the same way as any other negative assignment.
    pub fn new(name: impl Into<String>, value: f64, income: f64) -> Result<Self, GameError> {
        let name = name.into();
        if value < 0.0 {
            return Err(GameError::NegativeValue {
                company: name,
                value,
            });
        }
        Ok(Company {
            name,
            value,
            income,
            previous_income: income,
            news: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn previous_income(&self) -> f64 {
        self.previous_income
    }

    pub fn news(&self) -> &[String] {
        &self.news
    }

    /// Guarded setter: market value must never go negative.
    pub fn set_value(&mut self, value: f64) -> Result<(), GameError> {
        if value < 0.0 {
            return Err(GameError::NegativeValue {
                company: self.name.clone(),
                value,
            });
        }
        self.value = value;
        Ok(())
    }

    /// Draw a growth rate uniformly from `[-swing, swing]` and apply it to
    /// the market value through the guarded setter. Returns the drawn rate
    /// so position accrual can reuse it.
    ///
    /// The guard cannot fire for any rate above -1.0, which every swing in
    /// (0, 1] guarantees, but it stays in the path so a bad caller fails
    /// loudly instead of corrupting state.
    pub fn simulate_value_change<R: Rng>(
        &mut self,
        rng: &mut R,
        swing: f64,
    ) -> Result<f64, GameError> {
        let growth_rate = rng.gen_range(-swing..=swing);
        self.set_value(self.value + self.value * growth_rate)?;
        Ok(growth_rate)
    }

    /// Draw an income rate uniformly from `[-swing, swing]`, snapshot the
    /// current income for direction display, then apply the rate. Income
    /// carries no sign constraint.
    pub fn simulate_income_change<R: Rng>(&mut self, rng: &mut R, swing: f64) {
        let rate = rng.gen_range(-swing..=swing);
        self.previous_income = self.income;
        self.income += self.income * rate;
    }

    /// Append a headline to the news log. The log is unbounded; readers
    /// truncate to the suffix they care about.
    pub fn add_news(&mut self, headline: impl Into<String>) {
        self.news.push(headline.into());
    }

    pub fn income_direction(&self) -> IncomeDirection {
        if self.income > self.previous_income {
            IncomeDirection::Up
        } else if self.income < self.previous_income {
            IncomeDirection::Down
        } else {
            IncomeDirection::Flat
        }
    }
}
