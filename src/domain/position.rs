//! Position record: principal committed to one company plus accumulated
//! unrealized profit/loss.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Principal currently attributed to the company, excluding profit/loss.
    pub amount: f64,
    /// Accumulated unrealized gain or loss on the position.
    pub profit_loss: f64,
}

impl Position {
    pub fn new(amount: f64) -> Self {
        Position {
            amount,
            profit_loss: 0.0,
        }
    }

    /// Principal plus unrealized profit/loss.
    pub fn current_value(&self) -> f64 {
        self.amount + self.profit_loss
    }

    /// Accrue one tick of market movement against the original principal,
    /// not the adjusted value: repeated ticks accumulate additively
    /// relative to principal rather than compounding.
    pub fn accrue(&mut self, growth_rate: f64) {
        self.profit_loss += self.amount * growth_rate;
    }
}
