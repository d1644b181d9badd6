//! Market simulator: advances every company by one tick and propagates
//! value changes into open positions.

use rand::Rng;
use std::cmp::Ordering;

use super::company::Company;
use super::error::GameError;
use super::portfolio::Portfolio;

/// Tunable simulation parameters, normally read from the `[simulation]`
/// config section.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    /// Half-width of the uniform value growth draw.
    pub value_swing: f64,
    /// Half-width of the uniform income growth draw.
    pub income_swing: f64,
    /// Per-company chance of a headline on each tick.
    pub news_probability: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            value_swing: super::company::DEFAULT_VALUE_SWING,
            income_swing: super::company::DEFAULT_INCOME_SWING,
            news_probability: 0.5,
        }
    }
}

/// What one tick did to one company, reported back to the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct TickEvent {
    pub company: String,
    pub growth_rate: f64,
}

const HEADLINES: &[&str] = &[
    "has implemented a new strategy!",
    "announced quarterly earnings ahead of expectations.",
    "is restructuring its leadership team.",
    "unveiled a new product line.",
    "is expanding into new markets.",
];

/// Advance every company by one tick. The drawn value growth rate is
/// accrued against the principal of any open position in that company, so
/// profit/loss accumulates additively relative to principal across ticks.
pub fn simulate<R: Rng>(
    companies: &mut [Company],
    portfolio: &mut Portfolio,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<Vec<TickEvent>, GameError> {
    let mut events = Vec::with_capacity(companies.len());

    for company in companies.iter_mut() {
        let growth_rate = company.simulate_value_change(rng, params.value_swing)?;
        company.simulate_income_change(rng, params.income_swing);

        if let Some(position) = portfolio.position_mut(company.name()) {
            position.accrue(growth_rate);
        }

        if rng.gen_bool(params.news_probability) {
            let headline = HEADLINES[rng.gen_range(0..HEADLINES.len())];
            company.add_news(format!("{} {}", company.name(), headline));
        }

        events.push(TickEvent {
            company: company.name().to_string(),
            growth_rate,
        });
    }

    Ok(events)
}

/// Most recent headlines, capped at `limit`. Companies are walked in
/// standings order (value, highest first) and each contributes the tail of
/// its own log, so the feed reads the way the standings display does.
pub fn recent_news(companies: &[Company], limit: usize) -> Vec<String> {
    let mut by_value: Vec<&Company> = companies.iter().collect();
    by_value.sort_by(|a, b| {
        b.value()
            .partial_cmp(&a.value())
            .unwrap_or(Ordering::Equal)
    });

    let mut feed: Vec<String> = Vec::new();
    for company in by_value {
        let tail = company.news().len().saturating_sub(limit);
        feed.extend(company.news()[tail..].iter().cloned());
    }
    let start = feed.len().saturating_sub(limit);
    feed.split_off(start)
}
