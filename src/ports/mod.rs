pub mod config_port;
pub mod name_port;
