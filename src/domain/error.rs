//! Domain error types.
//!
//! Two classes with different propagation rules: [`GameError`] covers
//! invariant violations and environment faults that abort the attempted
//! operation, while [`TradeError`] covers user-shaped precondition failures
//! that the driver reports and moves past without any state change.

/// Hard error: broken numeric invariant, bad configuration, or I/O fault.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("company value for {company} cannot go negative (got {value:.2})")]
    NegativeValue { company: String, value: f64 },

    #[error("balance cannot go negative (got {balance:.2})")]
    NegativeBalance { balance: f64 },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&GameError> for std::process::ExitCode {
    fn from(err: &GameError) -> Self {
        let code: u8 = match err {
            GameError::Io(_) => 1,
            GameError::ConfigParse { .. }
            | GameError::ConfigMissing { .. }
            | GameError::ConfigInvalid { .. } => 2,
            GameError::NegativeValue { .. } | GameError::NegativeBalance { .. } => 3,
        };
        std::process::ExitCode::from(code)
    }
}

/// Recoverable failure: the operation was refused and performed no state
/// change. Callers render these and keep the game running.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TradeError {
    #[error("insufficient funds: requested {requested:.2}, balance {balance:.2}")]
    InsufficientFunds { requested: f64, balance: f64 },

    #[error("no open position in {company}")]
    NoPosition { company: String },

    #[error("amount must be positive (got {amount:.2})")]
    InvalidAmount { amount: f64 },

    #[error("position in {company} is worth nothing; only a full withdrawal can close it")]
    WorthlessPosition { company: String },

    #[error("position in {company} is underwater ({current_value:.2}); nothing to withdraw")]
    UnderwaterPosition { company: String, current_value: f64 },
}
