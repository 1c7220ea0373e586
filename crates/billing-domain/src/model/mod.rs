//! Domain model types

pub mod ledger;
pub mod trip;
pub mod trip_form;

pub use ledger::Ledger;
pub use trip::{TripDetails, TripRecord};
pub use trip_form::TripForm;
