use crate::core::setting::dominant;
use crate::core::{get_consistency, Accumulator, StyleSetting};
use serde::{Deserialize, Serialize};

/// Counts for a binary style choice such as `var` versus an explicit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BooleanData {
    pub total_occurrences: u64,
    pub true_count: u64,
    pub false_count: u64,
}

impl BooleanData {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(total_occurrences: u64, true_count: u64, false_count: u64) -> Self {
        Self {
            total_occurrences,
            true_count,
            false_count,
        }
    }

    /// Record one observation of the choice.
    #[must_use]
    pub fn update(&self, value: bool) -> Self {
        let (true_step, false_step) = if value { (1, 0) } else { (0, 1) };
        Self::new(
            self.total_occurrences + 1,
            self.true_count + true_step,
            self.false_count + false_step,
        )
    }
}

impl Accumulator for BooleanData {
    fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.total_occurrences + other.total_occurrences,
            self.true_count + other.true_count,
            self.false_count + other.false_count,
        )
    }
}

impl StyleSetting for BooleanData {
    fn value(&self) -> Option<String> {
        self.has_evidence().then(|| {
            dominant(("true", self.true_count), ("false", self.false_count), "true").to_string()
        })
    }

    fn consistency(&self) -> f64 {
        get_consistency(&[self.true_count, self.false_count], self.total_occurrences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_update_increments_true() {
        assert_eq!(BooleanData::new(3, 1, 2).update(true), BooleanData::new(4, 2, 2));
    }

    #[test]
    fn test_update_increments_false() {
        assert_eq!(BooleanData::new(3, 1, 2).update(false), BooleanData::new(4, 1, 3));
    }

    #[test]
    fn test_consistency() {
        assert_eq!(BooleanData::new(100, 75, 25).consistency(), 0.5);
    }

    #[test]
    fn test_tie_prefers_true() {
        assert_eq!(
            BooleanData::new(4, 2, 2).get_setting("x", Severity::Warning),
            "x = true:warning"
        );
    }

    #[test]
    fn test_majority_false() {
        assert_eq!(
            BooleanData::new(4, 1, 3).get_setting("x", Severity::None),
            "x = false:none"
        );
    }

    #[test]
    fn test_no_evidence_is_empty() {
        assert_eq!(BooleanData::ZERO.get_setting("x", Severity::Error), "");
    }
}
