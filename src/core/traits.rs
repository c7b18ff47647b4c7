//! Core trait definitions shared by every style accumulator.

use super::errors::{Error, Result};
use super::severity::Severity;

/// Immutable counter record for one style dimension.
///
/// `Default` is the all-zero accumulator and the identity of `merge`.
pub trait Accumulator: Sized + Default + Clone + PartialEq {
    /// Number of observations recorded across every update and merge.
    fn total_occurrences(&self) -> u64;

    /// Componentwise sum of both accumulators. Commutative and associative.
    fn merge(&self, other: &Self) -> Self;

    /// Merge against an optional accumulator, rejecting a missing one.
    fn try_merge(&self, other: Option<&Self>) -> Result<Self> {
        other.map(|other| self.merge(other)).ok_or_else(|| {
            Error::invalid_argument(format!(
                "cannot merge {} with a missing accumulator",
                std::any::type_name::<Self>()
            ))
        })
    }

    /// Whether any observation has been recorded.
    fn has_evidence(&self) -> bool {
        self.total_occurrences() > 0
    }
}

/// Decision rules turning accumulated counts into a directive.
pub trait StyleSetting: Accumulator {
    /// Directive value chosen by this dimension's rule table, or `None`
    /// without evidence.
    fn value(&self) -> Option<String>;

    /// Secondary confidence signal in `[0, 1]`.
    fn consistency(&self) -> f64;

    /// `"{name} = {value}:{severity}"`, or an empty string without evidence.
    fn get_setting(&self, name: &str, severity: Severity) -> String {
        self.value()
            .map(|value| super::setting::format_setting(name, &value, severity))
            .unwrap_or_default()
    }
}
