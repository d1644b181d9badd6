//! Concrete implementations of the ports plus terminal rendering.

pub mod console;
pub mod file_config_adapter;
pub mod name_gen_adapter;
