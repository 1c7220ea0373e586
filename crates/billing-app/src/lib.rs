//! Application service layer - session state, config, export dispatch

pub mod config;
pub mod constants;
pub mod session;
