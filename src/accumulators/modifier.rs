//! Modifier keyword statistics for `csharp_preferred_modifier_order`.
//!
//! Each keyword tracks a `(weight, frequency)` pair. Frequency counts the
//! members carrying the keyword; weight sums the keyword's 1-based position
//! in those members' modifier lists, so `weight / frequency` is its average
//! position.

use crate::core::setting::format_setting;
use crate::core::{get_consistency, Accumulator, Severity};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Modifier keywords, visibility keywords first, in vocabulary order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Internal,
    Static,
    Extern,
    New,
    Virtual,
    Abstract,
    Sealed,
    Override,
    Readonly,
    Unsafe,
    Volatile,
    Async,
}

const VISIBILITY_SLOTS: usize = 4;
const OTHER_SLOTS: usize = 11;

impl Modifier {
    pub const ALL: [Modifier; VISIBILITY_SLOTS + OTHER_SLOTS] = [
        Modifier::Public,
        Modifier::Private,
        Modifier::Protected,
        Modifier::Internal,
        Modifier::Static,
        Modifier::Extern,
        Modifier::New,
        Modifier::Virtual,
        Modifier::Abstract,
        Modifier::Sealed,
        Modifier::Override,
        Modifier::Readonly,
        Modifier::Unsafe,
        Modifier::Volatile,
        Modifier::Async,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Internal => "internal",
            Modifier::Static => "static",
            Modifier::Extern => "extern",
            Modifier::New => "new",
            Modifier::Virtual => "virtual",
            Modifier::Abstract => "abstract",
            Modifier::Sealed => "sealed",
            Modifier::Override => "override",
            Modifier::Readonly => "readonly",
            Modifier::Unsafe => "unsafe",
            Modifier::Volatile => "volatile",
            Modifier::Async => "async",
        }
    }

    pub const fn is_visibility(self) -> bool {
        matches!(
            self,
            Modifier::Public | Modifier::Private | Modifier::Protected | Modifier::Internal
        )
    }

    /// Index in [`Modifier::ALL`].
    const fn index(self) -> usize {
        self as usize
    }
}

/// Accumulated `(weight, frequency)` for one keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct KeywordStats {
    pub weight: u64,
    pub frequency: u64,
}

impl KeywordStats {
    pub const fn new(weight: u64, frequency: u64) -> Self {
        Self { weight, frequency }
    }

    fn merge(self, other: Self) -> Self {
        Self::new(self.weight + other.weight, self.frequency + other.frequency)
    }

    /// Compare average positions without leaving integer arithmetic.
    fn cmp_average_position(&self, other: &Self) -> Ordering {
        (u128::from(self.weight) * u128::from(other.frequency))
            .cmp(&(u128::from(other.weight) * u128::from(self.frequency)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierData {
    pub total_occurrences: u64,
    visibility: [KeywordStats; VISIBILITY_SLOTS],
    other: [KeywordStats; OTHER_SLOTS],
}

impl ModifierData {
    pub const ZERO: Self = Self {
        total_occurrences: 0,
        visibility: [KeywordStats::new(0, 0); VISIBILITY_SLOTS],
        other: [KeywordStats::new(0, 0); OTHER_SLOTS],
    };

    /// Record the modifier list of one member, in source order.
    #[must_use]
    pub fn update(&self, keywords: &[Modifier]) -> Self {
        let mut next = Self {
            total_occurrences: self.total_occurrences + 1,
            ..*self
        };
        for (position, &keyword) in keywords.iter().enumerate() {
            let slot = next.slot_mut(keyword);
            *slot = slot.merge(KeywordStats::new(position as u64 + 1, 1));
        }
        next
    }

    pub fn stats(&self, keyword: Modifier) -> KeywordStats {
        let index = keyword.index();
        if keyword.is_visibility() {
            self.visibility[index]
        } else {
            self.other[index - VISIBILITY_SLOTS]
        }
    }

    fn slot_mut(&mut self, keyword: Modifier) -> &mut KeywordStats {
        let index = keyword.index();
        if keyword.is_visibility() {
            &mut self.visibility[index]
        } else {
            &mut self.other[index - VISIBILITY_SLOTS]
        }
    }

    pub fn weight(&self, keyword: Modifier) -> u64 {
        self.stats(keyword).weight
    }

    pub fn frequency(&self, keyword: Modifier) -> u64 {
        self.stats(keyword).frequency
    }

    /// All keywords ranked by observed average position; keywords never seen
    /// keep vocabulary order after the observed ones.
    pub fn preferred_order(&self) -> Vec<Modifier> {
        let mut order = Modifier::ALL.to_vec();
        order.sort_by(|a, b| {
            let (sa, sb) = (self.stats(*a), self.stats(*b));
            match (sa.frequency > 0, sb.frequency > 0) {
                (true, true) => sa.cmp_average_position(&sb).then(a.cmp(b)),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => a.cmp(b),
            }
        });
        order
    }

    /// Directive listing [`Self::preferred_order`], empty without evidence.
    pub fn get_order_setting(&self, name: &str, severity: Severity) -> String {
        if !self.has_evidence() {
            return String::new();
        }
        let order = self
            .preferred_order()
            .into_iter()
            .map(Modifier::keyword)
            .collect::<Vec<_>>()
            .join(",");
        format_setting(name, &order, severity)
    }

    pub fn consistency(&self) -> f64 {
        let frequencies: Vec<u64> = Modifier::ALL
            .into_iter()
            .map(|keyword| self.frequency(keyword))
            .collect();
        get_consistency(&frequencies, self.total_occurrences)
    }
}

impl Accumulator for ModifierData {
    fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    fn merge(&self, other: &Self) -> Self {
        let mut merged = Self {
            total_occurrences: self.total_occurrences + other.total_occurrences,
            ..*self
        };
        for keyword in Modifier::ALL {
            let slot = merged.slot_mut(keyword);
            *slot = slot.merge(other.stats(keyword));
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_counts_present_keywords_only() {
        let data = ModifierData::ZERO.update(&[Modifier::Public, Modifier::Static]);
        assert_eq!(data.total_occurrences, 1);
        assert_eq!(data.stats(Modifier::Public), KeywordStats::new(1, 1));
        assert_eq!(data.stats(Modifier::Static), KeywordStats::new(2, 1));
        assert_eq!(data.stats(Modifier::Private), KeywordStats::default());
    }

    #[test]
    fn test_single_keyword_weight_tracks_frequency() {
        let data = ModifierData::ZERO
            .update(&[Modifier::Async])
            .update(&[Modifier::Async]);
        assert_eq!(data.weight(Modifier::Async), 2);
        assert_eq!(data.frequency(Modifier::Async), 2);
    }

    #[test]
    fn test_preferred_order_follows_observed_positions() {
        let data = ModifierData::ZERO
            .update(&[Modifier::Static, Modifier::Public])
            .update(&[Modifier::Static, Modifier::Readonly]);
        let order = data.preferred_order();
        assert_eq!(&order[..3], &[Modifier::Static, Modifier::Public, Modifier::Readonly]);
        assert_eq!(order[3], Modifier::Private);
        assert_eq!(order.len(), Modifier::ALL.len());
    }

    #[test]
    fn test_merge_is_key_wise() {
        let left = ModifierData::ZERO.update(&[Modifier::Public]);
        let right = ModifierData::ZERO.update(&[Modifier::Private, Modifier::Public]);
        let merged = left.merge(&right);
        assert_eq!(merged.total_occurrences, 2);
        assert_eq!(merged.stats(Modifier::Public), KeywordStats::new(3, 2));
        assert_eq!(merged.stats(Modifier::Private), KeywordStats::new(1, 1));
    }

    #[test]
    fn test_order_setting_empty_without_evidence() {
        assert_eq!(ModifierData::ZERO.get_order_setting("x", Severity::Error), "");
    }
}
