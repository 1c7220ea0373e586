//! Constants for the entry form

pub mod presets;

pub use presets::{rate_choices, weight_choices};
