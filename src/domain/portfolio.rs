//! Portfolio state: uninvested cash, open positions keyed by company name,
//! and the running invested/realized aggregates.

use std::collections::HashMap;

use super::error::{GameError, TradeError};
use super::position::Position;

/// Outcome of a successful withdrawal.
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    /// Cash returned to the balance.
    pub amount: f64,
    /// Profit/loss realized by this withdrawal.
    pub realized_profit_loss: f64,
    /// Balance after the withdrawal.
    pub new_balance: f64,
    /// Whether the position was closed entirely.
    pub closed: bool,
}

/// One row of the investment summary.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingSummary {
    pub company: String,
    pub invested: f64,
    pub current_value: f64,
    pub profit_loss: f64,
}

/// Read-only snapshot of the open positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSummary {
    pub holdings: Vec<HoldingSummary>,
    pub total_value: f64,
    pub total_realized_profit_loss: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    balance: f64,
    investments: HashMap<String, Position>,
    total_invested: f64,
    total_profit_loss: f64,
}

impl Portfolio {
    pub fn new(initial_balance: f64) -> Result<Self, GameError> {
        if initial_balance < 0.0 {
            return Err(GameError::NegativeBalance {
                balance: initial_balance,
            });
        }
        Ok(Portfolio {
            balance: initial_balance,
            investments: HashMap::new(),
            total_invested: 0.0,
            total_profit_loss: 0.0,
        })
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Guarded setter: cash balance must never go negative.
    pub fn set_balance(&mut self, balance: f64) -> Result<(), GameError> {
        if balance < 0.0 {
            return Err(GameError::NegativeBalance { balance });
        }
        self.balance = balance;
        Ok(())
    }

    pub fn investments(&self) -> &HashMap<String, Position> {
        &self.investments
    }

    pub fn position(&self, company: &str) -> Option<&Position> {
        self.investments.get(company)
    }

    pub fn position_mut(&mut self, company: &str) -> Option<&mut Position> {
        self.investments.get_mut(company)
    }

    pub fn has_position(&self, company: &str) -> bool {
        self.investments.contains_key(company)
    }

    /// Sum of principal across open positions.
    pub fn total_invested(&self) -> f64 {
        self.total_invested
    }

    /// Profit/loss realized through withdrawals, accumulated for the whole
    /// run and never reset.
    pub fn total_profit_loss(&self) -> f64 {
        self.total_profit_loss
    }

    /// Commit `amount` of cash to a position in `company`. Creates the
    /// position or tops up the principal of an existing one; profit/loss is
    /// untouched either way. Returns the new balance.
    pub fn invest(&mut self, company: &str, amount: f64) -> Result<f64, TradeError> {
        if amount <= 0.0 {
            return Err(TradeError::InvalidAmount { amount });
        }
        if amount > self.balance {
            return Err(TradeError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }

        // amount <= balance, so the balance invariant holds.
        self.balance -= amount;
        self.total_invested += amount;
        self.investments
            .entry(company.to_string())
            .and_modify(|pos| pos.amount += amount)
            .or_insert_with(|| Position::new(amount));

        Ok(self.balance)
    }

    /// Withdraw cash from the position in `company`. `None` or a request
    /// above the position's current value means a full withdrawal. A partial
    /// withdrawal scales principal and profit/loss down by the withdrawn
    /// fraction of current value, so the remaining position keeps the same
    /// profit-to-principal mix.
    ///
    /// A position worth exactly zero can only be closed in full (no cash
    /// moves); one worth less than zero cannot be withdrawn from at all,
    /// since paying out negative cash would breach the balance invariant.
    pub fn withdraw(
        &mut self,
        company: &str,
        requested: Option<f64>,
    ) -> Result<Withdrawal, TradeError> {
        let pos = *self
            .investments
            .get(company)
            .ok_or_else(|| TradeError::NoPosition {
                company: company.to_string(),
            })?;

        if let Some(amount) = requested {
            if amount <= 0.0 {
                return Err(TradeError::InvalidAmount { amount });
            }
        }

        let current_value = pos.current_value();
        if current_value < 0.0 {
            return Err(TradeError::UnderwaterPosition {
                company: company.to_string(),
                current_value,
            });
        }
        if current_value == 0.0 {
            if requested.is_some() {
                return Err(TradeError::WorthlessPosition {
                    company: company.to_string(),
                });
            }
            // Full close of a worthless position: no cash moves, the
            // aggregates settle the principal against the offsetting loss.
            self.investments.remove(company);
            self.total_invested -= pos.amount;
            self.total_profit_loss += pos.profit_loss;
            return Ok(Withdrawal {
                amount: 0.0,
                realized_profit_loss: pos.profit_loss,
                new_balance: self.balance,
                closed: true,
            });
        }

        let amount = match requested {
            Some(a) if a < current_value => a,
            _ => current_value,
        };
        let ratio = amount / current_value;

        // amount > 0, so the balance invariant holds.
        self.balance += amount;
        self.total_invested -= pos.amount * ratio;
        self.total_profit_loss += pos.profit_loss * ratio;

        let closed = amount == current_value;
        if closed {
            self.investments.remove(company);
        } else if let Some(open) = self.investments.get_mut(company) {
            open.amount -= pos.amount * ratio;
            open.profit_loss -= pos.profit_loss * ratio;
        }

        Ok(Withdrawal {
            amount,
            realized_profit_loss: pos.profit_loss * ratio,
            new_balance: self.balance,
            closed,
        })
    }

    /// Read-only summary of the open positions, sorted by company name for
    /// stable display. Calling it twice without an intervening mutation
    /// yields identical results.
    pub fn summary(&self) -> PortfolioSummary {
        let mut holdings: Vec<HoldingSummary> = self
            .investments
            .iter()
            .map(|(company, pos)| HoldingSummary {
                company: company.clone(),
                invested: pos.amount,
                current_value: pos.current_value(),
                profit_loss: pos.profit_loss,
            })
            .collect();
        holdings.sort_by(|a, b| a.company.cmp(&b.company));

        let total_value = holdings.iter().map(|h| h.current_value).sum();

        PortfolioSummary {
            holdings,
            total_value,
            total_realized_profit_loss: self.total_profit_loss,
        }
    }
}
