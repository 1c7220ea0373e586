//! Dropdown presets for the weight and rate inputs

/// Weight presets in kg: 10000 to 55000
pub const WEIGHT_PRESETS_KG: (u32, u32, usize) = (10_000, 55_000, 5_000);

/// Rate presets per tonne: 1000 to 5000
pub const RATE_PRESETS: (u32, u32, usize) = (1_000, 5_000, 500);

fn choices((start, end, step): (u32, u32, usize)) -> Vec<String> {
    (start..=end).step_by(step).map(|v| v.to_string()).collect()
}

/// Weight dropdown values
pub fn weight_choices() -> Vec<String> {
    choices(WEIGHT_PRESETS_KG)
}

/// Rate dropdown values
pub fn rate_choices() -> Vec<String> {
    choices(RATE_PRESETS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_choices() {
        let weights = weight_choices();
        assert_eq!(weights.len(), 10);
        assert_eq!(weights.first().map(String::as_str), Some("10000"));
        assert_eq!(weights.last().map(String::as_str), Some("55000"));
    }

    #[test]
    fn test_rate_choices() {
        let rates = rate_choices();
        assert_eq!(rates.len(), 9);
        assert_eq!(rates[1], "1500");
        assert_eq!(rates.last().map(String::as_str), Some("5000"));
    }
}
