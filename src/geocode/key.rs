//! Cache key normalization and coordinate parsing.

use crate::error::{GeoError, Result};

/// Normalizes an address into its forward cache key.
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_address(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Builds the reverse cache key with six decimal places per axis.
pub fn coordinate_key(lat: f64, lng: f64) -> String {
    format!("{:.6},{:.6}", round_micro(lat), round_micro(lng))
}

/// Rounds to six decimals; adding 0.0 folds -0.0 into 0.0 so values that
/// round to zero from either side format identically.
fn round_micro(value: f64) -> f64 {
    (value * 1e6).round() / 1e6 + 0.0
}

/// Parses a coordinate query parameter.
///
/// Missing, unparseable and non-finite values are validation errors.
pub fn parse_coordinate(name: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GeoError::Validation(format!("Parameter '{}' is required", name)))?;

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GeoError::Validation(format!(
            "Parameter '{}' must be a finite number, got '{}'",
            name, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(
            normalize_address("  Av. San Martín 1234, RECONQUISTA \t").as_deref(),
            Some("av. san martín 1234, reconquista")
        );
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert!(normalize_address("").is_none());
        assert!(normalize_address("   \n").is_none());
    }

    #[test]
    fn test_coordinate_key_precision() {
        assert_eq!(coordinate_key(-29.15, -59.65), "-29.150000,-59.650000");
        assert_eq!(
            coordinate_key(-29.1500001, -59.6499999),
            coordinate_key(-29.15, -59.65)
        );
    }

    #[test]
    fn test_coordinate_key_negative_zero() {
        assert_eq!(coordinate_key(-0.0, 0.0), coordinate_key(0.0, -0.0));
        assert_eq!(coordinate_key(-0.00000004, 0.0), "0.000000,0.000000");
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("lat", Some(" -29.15 ")).unwrap(), -29.15);
    }

    #[test]
    fn test_parse_coordinate_rejects_invalid() {
        for raw in [None, Some(""), Some("abc"), Some("NaN"), Some("inf"), Some("1,5")] {
            let result = parse_coordinate("lat", raw);
            assert!(
                matches!(result, Err(GeoError::Validation(_))),
                "expected validation error for {:?}",
                raw
            );
        }
    }
}
