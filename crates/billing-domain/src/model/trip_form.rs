//! Form state for entering a trip

use billing_types::{Error, Result, TripType};

use super::trip::{TripDetails, TripRecord};

/// Raw values of the trip entry form.
///
/// Text fields are accepted as-is. Weight and rate stay as text until
/// submission so the user can correct them after a failed attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub date: String,
    pub trip_type: TripType,
    pub truck_no: String,
    pub driver: String,
    pub from: String,
    pub to: String,
    pub product: String,
    pub weight_kg: String,
    pub rate_per_tonne: String,
}

impl TripForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from the current values.
    ///
    /// Fails if weight or rate is not a number. The form is left untouched
    /// either way; callers clear it only after the record is stored.
    pub fn to_record(&self) -> Result<TripRecord> {
        let weight_kg = parse_required("Weight (Kg)", &self.weight_kg)?;
        let rate_per_tonne = parse_required("Rate Per Tonne", &self.rate_per_tonne)?;

        let details = TripDetails {
            date: self.date.clone(),
            trip_type: self.trip_type,
            truck_no: self.truck_no.clone(),
            driver: self.driver.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
            product: self.product.clone(),
        };

        Ok(TripRecord::new(details, weight_kg, rate_per_tonne))
    }

    /// Reset every field, trip type back to Go
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn parse_required(field: &'static str, text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
        field,
        value: text.to_string(),
    })
}
