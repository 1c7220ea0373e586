//! Domain services

pub mod aggregator;
pub mod cost_calculator;

pub use aggregator::{parse_expense, summarize};
pub use cost_calculator::{round_to_cents, trip_cost};
