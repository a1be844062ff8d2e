use crate::utils::error::{BetError, Result};
use std::collections::HashSet;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns `true` when no two items compare equal.
///
/// Builds a set from the items and compares its size with the item count,
/// so a single repeated value anywhere makes the check fail.
pub fn all_unique<I>(items: I) -> bool
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut count = 0;
    let seen: HashSet<I::Item> = items.into_iter().inspect(|_| count += 1).collect();
    seen.len() == count
}

pub fn validate_unique<I>(field_name: &str, items: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: Eq + Hash + std::fmt::Display,
{
    let values: Vec<I::Item> = items.into_iter().collect();
    let mut seen = HashSet::new();
    for value in &values {
        if !seen.insert(value) {
            return Err(BetError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Value appears more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so reject it explicitly
    if value.partial_cmp(&min).is_none() || value < min || value > max {
        return Err(BetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_unique() {
        assert!(all_unique(Vec::<&str>::new()));
        assert!(all_unique(["VER", "LEC", "HAM"]));
        assert!(!all_unique(["VER", "LEC", "VER"]));
    }

    #[test]
    fn test_validate_unique_reports_repeated_value() {
        let err = validate_unique("teams.MER", ["HAM", "HAM"]).unwrap_err();
        match err {
            BetError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "teams.MER");
                assert_eq!(value, "HAM");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("drivers.range", 20, 1).is_ok());
        assert!(validate_positive_number("drivers.range", 0, 1).is_err());
    }

    #[test]
    fn test_validate_range_rejects_nan() {
        assert!(validate_range("race.exact_hit", 1.0, 0.0, 100.0).is_ok());
        assert!(validate_range("race.exact_hit", -0.5, 0.0, 100.0).is_err());
        assert!(validate_range("race.exact_hit", f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty_string("teams.MER", "MER").is_ok());
        assert!(validate_non_empty_string("teams.MER", "  ").is_err());
    }
}
