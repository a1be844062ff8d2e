use crate::domain::model::{PodiumPosition, Submission};
use crate::domain::ports::FormSource;
use crate::utils::error::{BetError, Result};
use crate::utils::validation::{all_unique, Validate};

/// Checks that the filled podium picks name three different drivers.
///
/// Stateless; every call stands on its own and yields the same answer for
/// the same submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct PodiumValidator;

impl PodiumValidator {
    pub fn new() -> Self {
        Self
    }

    /// Rejects the submission with [`BetError::DuplicatePodiumEntry`] when two
    /// filled picks coincide. Empty picks are ignored.
    pub fn validate(&self, submission: &Submission) -> Result<()> {
        if all_unique(submission.filled_picks()) {
            tracing::debug!(
                filled = submission.filled_picks().count(),
                "podium picks accepted"
            );
            Ok(())
        } else {
            tracing::warn!("podium tip rejected: duplicate pick");
            Err(BetError::DuplicatePodiumEntry)
        }
    }

    /// Reads `first`, `second` and `third` from the form and validates them.
    pub fn validate_form<F: FormSource + ?Sized>(&self, form: &F) -> Result<Submission> {
        let submission = submission_from_form(form);
        self.validate(&submission)?;
        Ok(submission)
    }
}

pub fn submission_from_form<F: FormSource + ?Sized>(form: &F) -> Submission {
    let pick = |position: PodiumPosition| form.get(position.field_name());
    Submission::new(
        pick(PodiumPosition::First),
        pick(PodiumPosition::Second),
        pick(PodiumPosition::Third),
    )
}

impl Validate for Submission {
    fn validate(&self) -> Result<()> {
        PodiumValidator.validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn submission(first: &str, second: &str, third: &str) -> Submission {
        Submission::new(Some(first), Some(second), Some(third))
    }

    #[test]
    fn test_all_empty_is_valid() {
        assert!(PodiumValidator.validate(&Submission::default()).is_ok());
        assert!(PodiumValidator.validate(&submission("", "", "")).is_ok());
    }

    #[test]
    fn test_single_pick_is_valid() {
        assert!(PodiumValidator.validate(&submission("", "B", "")).is_ok());
    }

    #[test]
    fn test_distinct_picks_are_valid() {
        assert!(PodiumValidator.validate(&submission("A", "B", "C")).is_ok());
    }

    #[test]
    fn test_two_identical_picks_fail() {
        let result = PodiumValidator.validate(&submission("A", "A", ""));
        assert!(matches!(result, Err(BetError::DuplicatePodiumEntry)));
    }

    #[test]
    fn test_duplicate_across_gap_fails() {
        let result = PodiumValidator.validate(&submission("A", "", "A"));
        assert!(matches!(result, Err(BetError::DuplicatePodiumEntry)));
    }

    #[test]
    fn test_three_filled_two_identical_fails() {
        let result = PodiumValidator.validate(&submission("A", "A", "C"));
        assert!(matches!(result, Err(BetError::DuplicatePodiumEntry)));
        let result = PodiumValidator.validate(&submission("A", "C", "C"));
        assert!(matches!(result, Err(BetError::DuplicatePodiumEntry)));
    }

    #[test]
    fn test_validate_form_reads_named_fields() {
        let mut form = HashMap::new();
        form.insert("first".to_string(), "VER".to_string());
        form.insert("second".to_string(), String::new());
        form.insert("third".to_string(), "LEC".to_string());
        form.insert("fastest_lap".to_string(), "VER".to_string());

        let submission = PodiumValidator.validate_form(&form).unwrap();
        assert_eq!(submission.first.as_deref(), Some("VER"));
        assert_eq!(submission.second, None);
        assert_eq!(submission.third.as_deref(), Some("LEC"));
    }

    #[test]
    fn test_validate_trait_delegates() {
        assert!(submission("A", "B", "A").validate().is_err());
        assert!(submission("A", "B", "C").validate().is_ok());
    }
}
