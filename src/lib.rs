//! profitplay — terminal investment simulation game.
//!
//! Hexagonal architecture: game logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
