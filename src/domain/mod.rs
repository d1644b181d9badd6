//! Core game logic: entities, market simulation, and accounting rules.

pub mod company;
pub mod config;
pub mod error;
pub mod market;
pub mod portfolio;
pub mod position;
pub mod ranking;
