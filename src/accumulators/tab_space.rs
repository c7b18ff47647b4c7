use crate::core::setting::dominant;
use crate::core::{get_consistency, Accumulator, StyleSetting};
use serde::{Deserialize, Serialize};

/// Leading whitespace used to indent a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndentStyle {
    Tab,
    Space,
}

/// Counts of tab versus space indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TabSpaceData {
    pub total_occurrences: u64,
    pub tab_count: u64,
    pub space_count: u64,
}

impl TabSpaceData {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(total_occurrences: u64, tab_count: u64, space_count: u64) -> Self {
        Self {
            total_occurrences,
            tab_count,
            space_count,
        }
    }

    #[must_use]
    pub fn update(&self, style: IndentStyle) -> Self {
        match style {
            IndentStyle::Tab => Self::new(
                self.total_occurrences + 1,
                self.tab_count + 1,
                self.space_count,
            ),
            IndentStyle::Space => Self::new(
                self.total_occurrences + 1,
                self.tab_count,
                self.space_count + 1,
            ),
        }
    }
}

impl Accumulator for TabSpaceData {
    fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.total_occurrences + other.total_occurrences,
            self.tab_count + other.tab_count,
            self.space_count + other.space_count,
        )
    }
}

impl StyleSetting for TabSpaceData {
    fn value(&self) -> Option<String> {
        self.has_evidence().then(|| {
            dominant(("tab", self.tab_count), ("space", self.space_count), "space").to_string()
        })
    }

    fn consistency(&self) -> f64 {
        get_consistency(&[self.tab_count, self.space_count], self.total_occurrences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_update_tab() {
        assert_eq!(
            TabSpaceData::ZERO.update(IndentStyle::Tab),
            TabSpaceData::new(1, 1, 0)
        );
    }

    #[test]
    fn test_tab_majority() {
        assert_eq!(
            TabSpaceData::new(5, 3, 2).get_setting("indent_style", Severity::Warning),
            "indent_style = tab:warning"
        );
    }

    #[test]
    fn test_tie_prefers_space() {
        assert_eq!(
            TabSpaceData::new(4, 2, 2).get_setting("indent_style", Severity::Warning),
            "indent_style = space:warning"
        );
    }
}
