//! Per-trip cost calculation

/// Round to two decimal places.
///
/// Decided on the exact binary value with ties going to the even digit,
/// so `0.125` becomes `0.12` while `5.005` (stored just below) becomes `5.0`.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Cost of carrying `weight_kg` at `rate_per_tonne`, rounded to cents
pub fn trip_cost(weight_kg: f64, rate_per_tonne: f64) -> f64 {
    round_to_cents((weight_kg / 1000.0) * rate_per_tonne)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_cost_whole_tonnes() {
        let cost = trip_cost(10000.0, 2000.0);
        assert!((cost - 20000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trip_cost_small_values() {
        // 10 kg at 2000/t
        assert!((trip_cost(10.0, 2000.0) - 20.0).abs() < f64::EPSILON);
        // 7.5 kg at 2000/t
        assert!((trip_cost(7.5, 2000.0) - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trip_cost_rounds_to_cents() {
        // 1234 kg * 3.333/t = 4.112922
        assert_eq!(trip_cost(1234.0, 3.333), 4.11);
        // 1 kg * 7/t = 0.007
        assert_eq!(trip_cost(1.0, 7.0), 0.01);
    }

    #[test]
    fn test_trip_cost_ties_round_half_even() {
        // 0.125 is exact, the tie goes to the even digit
        assert_eq!(trip_cost(1.0, 125.0), 0.12);
        assert_eq!(trip_cost(1.0, 375.0), 0.38);
        // 5.005 and 11.725 are stored just below the tie
        assert_eq!(trip_cost(5.0, 1001.0), 5.0);
        assert_eq!(trip_cost(5.0, 2345.0), 11.72);
    }

    #[test]
    fn test_round_to_cents_decides_on_stored_value() {
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(1.005), 1.0);
        assert_eq!(round_to_cents(-0.125), -0.12);
        assert_eq!(round_to_cents(20.0), 20.0);
    }

    #[test]
    fn test_trip_cost_zero() {
        assert_eq!(trip_cost(0.0, 5000.0), 0.0);
        assert_eq!(trip_cost(55000.0, 0.0), 0.0);
    }

    #[test]
    fn test_cost_matches_formula_over_presets() {
        for w in (10000..=55000).step_by(5000) {
            for r in (1000..=5000).step_by(500) {
                let (w, r) = (w as f64, r as f64);
                // Whole tonnes at whole rates need no rounding
                assert_eq!(trip_cost(w, r), (w / 1000.0) * r);
            }
        }
    }
}
