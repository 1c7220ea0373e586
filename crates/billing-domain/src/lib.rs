//! Trip billing domain: records, form validation, ledger and totals

pub mod export;
pub mod model;
pub mod service;
