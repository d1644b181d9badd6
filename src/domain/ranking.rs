//! Standings by market value, with rank movement tracked across ticks.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::company::{Company, IncomeDirection};

/// Movement of a company relative to the previous standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDelta {
    Up,
    Down,
    Flat,
    /// First appearance, nothing to compare against.
    New,
}

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct StandingRow {
    /// 1-based rank.
    pub rank: usize,
    pub company: String,
    pub value: f64,
    pub income: f64,
    pub income_direction: IncomeDirection,
    pub delta: RankDelta,
}

/// Rank tracker keyed by company name, so movement survives re-sorting
/// without relying on entity identity.
#[derive(Debug, Default)]
pub struct Standings {
    previous: HashMap<String, usize>,
}

impl Standings {
    pub fn new() -> Self {
        Standings::default()
    }

    /// Sort companies by value, highest first, and compare each company's
    /// new rank against where it stood after the last call.
    pub fn update(&mut self, companies: &[Company]) -> Vec<StandingRow> {
        let mut sorted: Vec<&Company> = companies.iter().collect();
        sorted.sort_by(|a, b| {
            b.value()
                .partial_cmp(&a.value())
                .unwrap_or(Ordering::Equal)
        });

        let rows: Vec<StandingRow> = sorted
            .iter()
            .enumerate()
            .map(|(idx, company)| {
                let delta = match self.previous.get(company.name()) {
                    None => RankDelta::New,
                    Some(&prev) if prev == idx => RankDelta::Flat,
                    Some(&prev) if prev > idx => RankDelta::Up,
                    Some(_) => RankDelta::Down,
                };
                StandingRow {
                    rank: idx + 1,
                    company: company.name().to_string(),
                    value: company.value(),
                    income: company.income(),
                    income_direction: company.income_direction(),
                    delta,
                }
            })
            .collect();

        self.previous = rows
            .iter()
            .map(|row| (row.company.clone(), row.rank - 1))
            .collect();

        rows
    }
}
