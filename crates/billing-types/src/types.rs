//! Shared value types for trip billing

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Column headers in record-definition order
pub const COLUMN_HEADERS: [&str; 10] = [
    "Date",
    "Trip Type",
    "Truck No",
    "Driver",
    "From",
    "To",
    "Product",
    "Weight (Kg)",
    "Rate Per Tonne",
    "Total Cost",
];

/// Direction of a truck journey
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripType {
    /// Outbound leg
    #[default]
    Go,
    /// Inbound leg
    Return,
}

impl TripType {
    pub const ALL: [TripType; 2] = [TripType::Go, TripType::Return];

    pub fn label(&self) -> &'static str {
        match self {
            TripType::Go => "Go",
            TripType::Return => "Return",
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TripType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "go" => Ok(TripType::Go),
            "return" => Ok(TripType::Return),
            other => Err(format!("unknown trip type {:?} (expected Go or Return)", other)),
        }
    }
}

/// Aggregated totals over the ledger and the session expenses
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub go_total: f64,
    pub return_total: f64,
    pub grand_total: f64,
    pub profit: f64,
}

/// Render a float the way the trip table shows it.
///
/// Whole numbers keep a single decimal (`10000.0`), everything else uses
/// the shortest representation that round-trips (`20.5`). Magnitudes from
/// `1e16` up or below `1e-4` switch to exponent form with a signed,
/// two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() || value == 0.0 {
        return format!("{:.1}", value);
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Currency label used by the summary panel, e.g. `₹ 20.00`
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{} {:.2}", symbol, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_type_default_is_go() {
        assert_eq!(TripType::default(), TripType::Go);
    }

    #[test]
    fn test_trip_type_from_str() {
        assert_eq!("Go".parse::<TripType>().unwrap(), TripType::Go);
        assert_eq!(" return ".parse::<TripType>().unwrap(), TripType::Return);
        assert!("Back".parse::<TripType>().is_err());
    }

    #[test]
    fn test_format_number_whole() {
        assert_eq!(format_number(10000.0), "10000.0");
        assert_eq!(format_number(20.0), "20.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(20.5), "20.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.0001), "0.0001");
    }

    #[test]
    fn test_format_number_exponent_form() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e20), "1.5e+20");
        assert_eq!(format_number(1e-5), "1e-05");
        assert_eq!(format_number(-2.5e-7), "-2.5e-07");
        assert_eq!(format_number(1e100), "1e+100");
        assert_eq!(format_number(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", 20.0), "₹ 20.00");
        assert_eq!(format_currency("₹", -3.456), "₹ -3.46");
    }

    #[test]
    fn test_headers_order() {
        assert_eq!(COLUMN_HEADERS.len(), 10);
        assert_eq!(COLUMN_HEADERS[0], "Date");
        assert_eq!(COLUMN_HEADERS[9], "Total Cost");
    }
}
