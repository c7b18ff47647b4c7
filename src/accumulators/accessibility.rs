use crate::core::{get_consistency, Accumulator, StyleSetting};
use serde::{Deserialize, Serialize};

/// How a member's accessibility modifier was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityCategory {
    /// No modifier written.
    NotProvided,
    /// Modifier written and equal to the language default.
    ProvidedDefault,
    /// Modifier written and different from the language default.
    ProvidedNotDefault,
}

/// Counts deciding `dotnet_style_require_accessibility_modifiers`.
///
/// The two interface counters are a subset view of the three main ones:
/// every interface member also lands in exactly one main category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AccessibilityModifierData {
    pub total_occurrences: u64,
    pub not_provided: u64,
    pub provided_default: u64,
    pub provided_not_default: u64,
    pub not_provided_for_interface_members: u64,
    pub provided_for_interface_members: u64,
}

impl AccessibilityModifierData {
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0);

    pub const fn new(
        total_occurrences: u64,
        not_provided: u64,
        provided_default: u64,
        provided_not_default: u64,
        not_provided_for_interface_members: u64,
        provided_for_interface_members: u64,
    ) -> Self {
        Self {
            total_occurrences,
            not_provided,
            provided_default,
            provided_not_default,
            not_provided_for_interface_members,
            provided_for_interface_members,
        }
    }

    #[must_use]
    pub fn update(&self, category: AccessibilityCategory, is_interface_member: bool) -> Self {
        let mut next = Self {
            total_occurrences: self.total_occurrences + 1,
            ..*self
        };
        match category {
            AccessibilityCategory::NotProvided => next.not_provided += 1,
            AccessibilityCategory::ProvidedDefault => next.provided_default += 1,
            AccessibilityCategory::ProvidedNotDefault => next.provided_not_default += 1,
        }
        if is_interface_member {
            if category == AccessibilityCategory::NotProvided {
                next.not_provided_for_interface_members += 1;
            } else {
                next.provided_for_interface_members += 1;
            }
        }
        next
    }

    pub fn provided(&self) -> u64 {
        self.provided_default + self.provided_not_default
    }
}

impl Accumulator for AccessibilityModifierData {
    fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.total_occurrences + other.total_occurrences,
            self.not_provided + other.not_provided,
            self.provided_default + other.provided_default,
            self.provided_not_default + other.provided_not_default,
            self.not_provided_for_interface_members + other.not_provided_for_interface_members,
            self.provided_for_interface_members + other.provided_for_interface_members,
        )
    }
}

impl StyleSetting for AccessibilityModifierData {
    /// Rules in priority order:
    ///
    /// 1. omitted more often than written at all: `never`
    /// 2. omitted more often than written as the default: `omit_if_default`
    /// 3. interface members mostly omit it: `for_non_interface_members`
    /// 4. `always`
    fn value(&self) -> Option<String> {
        if !self.has_evidence() {
            return None;
        }
        let value = if self.not_provided > self.provided() {
            "never"
        } else if self.not_provided > self.provided_default {
            "omit_if_default"
        } else if self.not_provided_for_interface_members > self.provided_for_interface_members
        {
            "for_non_interface_members"
        } else {
            "always"
        };
        Some(value.to_string())
    }

    fn consistency(&self) -> f64 {
        get_consistency(
            &[
                self.not_provided,
                self.not_provided_for_interface_members,
                self.provided(),
            ],
            self.total_occurrences,
        )
    }
}
