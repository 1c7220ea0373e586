//! Trip record type definitions

use billing_types::{format_number, TripType};
use serde::Serialize;

use crate::service::trip_cost;

/// One submitted trip. `total_cost` is derived at construction and never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    date: String,
    trip_type: TripType,
    truck_no: String,
    driver: String,
    from: String,
    to: String,
    product: String,
    weight_kg: f64,
    rate_per_tonne: f64,
    total_cost: f64,
}

/// Free-text part of a trip, passed through unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripDetails {
    pub date: String,
    pub trip_type: TripType,
    pub truck_no: String,
    pub driver: String,
    pub from: String,
    pub to: String,
    pub product: String,
}

impl TripRecord {
    pub fn new(details: TripDetails, weight_kg: f64, rate_per_tonne: f64) -> Self {
        let TripDetails {
            date,
            trip_type,
            truck_no,
            driver,
            from,
            to,
            product,
        } = details;

        Self {
            date,
            trip_type,
            truck_no,
            driver,
            from,
            to,
            product,
            weight_kg,
            rate_per_tonne,
            total_cost: trip_cost(weight_kg, rate_per_tonne),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    pub fn truck_no(&self) -> &str {
        &self.truck_no
    }

    pub fn driver(&self) -> &str {
        &self.driver
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn rate_per_tonne(&self) -> f64 {
        self.rate_per_tonne
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Cell text for each column, in `COLUMN_HEADERS` order
    pub fn display_cells(&self) -> [String; 10] {
        [
            self.date.clone(),
            self.trip_type.to_string(),
            self.truck_no.clone(),
            self.driver.clone(),
            self.from.clone(),
            self.to.clone(),
            self.product.clone(),
            format_number(self.weight_kg),
            format_number(self.rate_per_tonne),
            format_number(self.total_cost),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(trip_type: TripType) -> TripDetails {
        TripDetails {
            date: "01-04-2024".to_string(),
            trip_type,
            truck_no: "MH12AB1234".to_string(),
            driver: "Ramesh".to_string(),
            from: "Pune".to_string(),
            to: "Nashik".to_string(),
            product: "Cement".to_string(),
        }
    }

    #[test]
    fn test_total_cost_is_derived() {
        let record = TripRecord::new(details(TripType::Go), 10000.0, 2000.0);
        assert_eq!(record.total_cost(), 20000.0);
    }

    #[test]
    fn test_display_cells() {
        let record = TripRecord::new(details(TripType::Return), 15000.0, 1500.0);
        let cells = record.display_cells();
        assert_eq!(cells[0], "01-04-2024");
        assert_eq!(cells[1], "Return");
        assert_eq!(cells[6], "Cement");
        assert_eq!(cells[7], "15000.0");
        assert_eq!(cells[8], "1500.0");
        assert_eq!(cells[9], "22500.0");
    }
}
