//! Pure validation for cycle drafts.

use thiserror::Error;

use super::CycleDraft;

/// Constraint violations on a cycle draft.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("month label must not be empty")]
    EmptyMonth,
    #[error("period length must be at least 1 day")]
    PeriodLengthZero,
    #[error("cycle length must be at least 1 day")]
    CycleLengthZero,
    #[error("period length ({period}) exceeds cycle length ({cycle})")]
    PeriodExceedsCycle { period: u32, cycle: u32 },
    #[error("{range} dates are not in ascending order")]
    UnorderedRange { range: &'static str },
}

/// Validates a draft against the cycle invariants.
///
/// Checked in order: non-empty month label, positive period and cycle
/// lengths, period within the cycle, and each date range ordered
/// (non-decreasing).
pub fn validate_draft(draft: &CycleDraft) -> Result<(), ValidationError> {
    if draft.month.trim().is_empty() {
        return Err(ValidationError::EmptyMonth);
    }
    if draft.period_length == 0 {
        return Err(ValidationError::PeriodLengthZero);
    }
    if draft.cycle_length == 0 {
        return Err(ValidationError::CycleLengthZero);
    }
    if draft.period_length > draft.cycle_length {
        return Err(ValidationError::PeriodExceedsCycle {
            period: draft.period_length,
            cycle: draft.cycle_length,
        });
    }

    for (name, range) in [
        ("period_range", &draft.period_range),
        ("ovulation_range", &draft.ovulation_range),
        ("unsafe_range", &draft.unsafe_range),
    ] {
        if range.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ValidationError::UnorderedRange { range: name });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn valid_draft() -> CycleDraft {
        CycleDraft::new("Jan", 5, 28, date(1))
    }

    #[test]
    fn test_valid_draft_passes() {
        assert_eq!(validate_draft(&valid_draft()), Ok(()));
    }

    #[test]
    fn test_empty_month_rejected() {
        let mut draft = valid_draft();
        draft.month = "  ".to_string();
        assert_eq!(validate_draft(&draft), Err(ValidationError::EmptyMonth));
    }

    #[test]
    fn test_zero_period_length_rejected() {
        let mut draft = valid_draft();
        draft.period_length = 0;
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::PeriodLengthZero)
        );
    }

    #[test]
    fn test_zero_cycle_length_rejected() {
        let mut draft = valid_draft();
        draft.cycle_length = 0;
        assert_eq!(validate_draft(&draft), Err(ValidationError::CycleLengthZero));
    }

    #[test]
    fn test_period_longer_than_cycle_rejected() {
        let mut draft = valid_draft();
        draft.period_length = 30;
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::PeriodExceedsCycle {
                period: 30,
                cycle: 28
            })
        );
    }

    #[test]
    fn test_period_equal_to_cycle_allowed() {
        let mut draft = valid_draft();
        draft.period_length = 28;
        assert_eq!(validate_draft(&draft), Ok(()));
    }

    #[test]
    fn test_unordered_range_rejected() {
        let draft = valid_draft().with_ovulation_range(vec![date(14), date(12)]);
        assert_eq!(
            validate_draft(&draft),
            Err(ValidationError::UnorderedRange {
                range: "ovulation_range"
            })
        );
    }

    #[test]
    fn test_ordered_ranges_pass() {
        let draft = valid_draft()
            .with_period_range(vec![date(1), date(2), date(3), date(4), date(5)])
            .with_ovulation_range(vec![date(12), date(13), date(14)])
            .with_unsafe_range(vec![date(10), date(10), date(16)]);
        assert_eq!(validate_draft(&draft), Ok(()));
    }
}
