use crate::core::setting::{dominant, format_setting};
use crate::core::{get_consistency, Accumulator, Severity, StyleSetting};
use serde::{Deserialize, Serialize};

/// Construct whose parentheses are being spaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParenthesesAxis {
    /// `if (x)`, `while (x)`, ...
    ControlFlow,
    /// `(a + b) * c`
    Expression,
    /// `(int)x`
    TypeCast,
}

impl ParenthesesAxis {
    pub const ALL: [ParenthesesAxis; 3] = [
        ParenthesesAxis::ControlFlow,
        ParenthesesAxis::Expression,
        ParenthesesAxis::TypeCast,
    ];

    /// Editorconfig value naming this axis.
    pub const fn setting_value(self) -> &'static str {
        match self {
            ParenthesesAxis::ControlFlow => "control_flow_statements",
            ParenthesesAxis::Expression => "expressions",
            ParenthesesAxis::TypeCast => "type_casts",
        }
    }
}

/// Three independent space-inside-parentheses choices sharing one total.
///
/// `total_occurrences` counts axis observations overall and need not equal
/// the sum of any single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ParenthesesSpaceData {
    pub total_occurrences: u64,
    pub control_flow_no_space: u64,
    pub control_flow_space: u64,
    pub expression_no_space: u64,
    pub expression_space: u64,
    pub type_cast_no_space: u64,
    pub type_cast_space: u64,
}

impl ParenthesesSpaceData {
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        total_occurrences: u64,
        control_flow_no_space: u64,
        control_flow_space: u64,
        expression_no_space: u64,
        expression_space: u64,
        type_cast_no_space: u64,
        type_cast_space: u64,
    ) -> Self {
        Self {
            total_occurrences,
            control_flow_no_space,
            control_flow_space,
            expression_no_space,
            expression_space,
            type_cast_no_space,
            type_cast_space,
        }
    }

    /// Record whether one pair of parentheses on `axis` had inner spaces.
    #[must_use]
    pub fn update(&self, axis: ParenthesesAxis, space: bool) -> Self {
        let mut next = Self {
            total_occurrences: self.total_occurrences + 1,
            ..*self
        };
        let slot = match (axis, space) {
            (ParenthesesAxis::ControlFlow, false) => &mut next.control_flow_no_space,
            (ParenthesesAxis::ControlFlow, true) => &mut next.control_flow_space,
            (ParenthesesAxis::Expression, false) => &mut next.expression_no_space,
            (ParenthesesAxis::Expression, true) => &mut next.expression_space,
            (ParenthesesAxis::TypeCast, false) => &mut next.type_cast_no_space,
            (ParenthesesAxis::TypeCast, true) => &mut next.type_cast_space,
        };
        *slot += 1;
        next
    }

    #[must_use]
    pub fn update_control_flow(&self, space: bool) -> Self {
        self.update(ParenthesesAxis::ControlFlow, space)
    }

    #[must_use]
    pub fn update_expression(&self, space: bool) -> Self {
        self.update(ParenthesesAxis::Expression, space)
    }

    #[must_use]
    pub fn update_type_cast(&self, space: bool) -> Self {
        self.update(ParenthesesAxis::TypeCast, space)
    }

    /// `(no_space, space)` counts for one axis.
    pub fn axis_counts(&self, axis: ParenthesesAxis) -> (u64, u64) {
        match axis {
            ParenthesesAxis::ControlFlow => (self.control_flow_no_space, self.control_flow_space),
            ParenthesesAxis::Expression => (self.expression_no_space, self.expression_space),
            ParenthesesAxis::TypeCast => (self.type_cast_no_space, self.type_cast_space),
        }
    }

    /// Whether `axis` prefers spaces, or `None` without evidence on that axis.
    pub fn axis_prefers_space(&self, axis: ParenthesesAxis) -> Option<bool> {
        let (no_space, space) = self.axis_counts(axis);
        (no_space + space > 0)
            .then(|| dominant(("true", space), ("false", no_space), "false") == "true")
    }

    pub fn axis_consistency(&self, axis: ParenthesesAxis) -> f64 {
        let (no_space, space) = self.axis_counts(axis);
        get_consistency(&[no_space, space], no_space + space)
    }

    /// Single-axis directive with a `true`/`false` value.
    pub fn get_axis_setting(&self, axis: ParenthesesAxis, name: &str, severity: Severity) -> String {
        self.axis_prefers_space(axis)
            .map(|space| format_setting(name, if space { "true" } else { "false" }, severity))
            .unwrap_or_default()
    }
}

impl Accumulator for ParenthesesSpaceData {
    fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.total_occurrences + other.total_occurrences,
            self.control_flow_no_space + other.control_flow_no_space,
            self.control_flow_space + other.control_flow_space,
            self.expression_no_space + other.expression_no_space,
            self.expression_space + other.expression_space,
            self.type_cast_no_space + other.type_cast_no_space,
            self.type_cast_space + other.type_cast_space,
        )
    }
}

impl StyleSetting for ParenthesesSpaceData {
    fn value(&self) -> Option<String> {
        if !self.has_evidence() {
            return None;
        }
        let decisions: Vec<(ParenthesesAxis, bool)> = ParenthesesAxis::ALL
            .into_iter()
            .filter_map(|axis| self.axis_prefers_space(axis).map(|space| (axis, space)))
            .collect();
        if decisions.is_empty() {
            return None;
        }

        let spaced: Vec<&str> = decisions
            .iter()
            .filter(|(_, space)| *space)
            .map(|(axis, _)| axis.setting_value())
            .collect();
        Some(if spaced.is_empty() {
            "false".to_string()
        } else {
            spaced.join(",")
        })
    }

    fn consistency(&self) -> f64 {
        let (no_space, space) = ParenthesesAxis::ALL
            .into_iter()
            .map(|axis| self.axis_counts(axis))
            .fold((0, 0), |(n, s), (axis_n, axis_s)| (n + axis_n, s + axis_s));
        get_consistency(&[no_space, space], self.total_occurrences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_control_flow_only_touches_its_axis() {
        let data = ParenthesesSpaceData::new(21, 1, 2, 3, 4, 5, 6).update_control_flow(true);
        assert_eq!(data, ParenthesesSpaceData::new(22, 1, 3, 3, 4, 5, 6));
    }

    #[test]
    fn test_update_type_cast_no_space() {
        let data = ParenthesesSpaceData::ZERO.update_type_cast(false);
        assert_eq!(data, ParenthesesSpaceData::new(1, 0, 0, 0, 0, 1, 0));
    }

    #[test]
    fn test_axes_are_gated_independently() {
        let data = ParenthesesSpaceData::ZERO.update_expression(true);
        assert_eq!(
            data.get_axis_setting(ParenthesesAxis::Expression, "x", Severity::Warning),
            "x = true:warning"
        );
        assert_eq!(
            data.get_axis_setting(ParenthesesAxis::ControlFlow, "x", Severity::Warning),
            ""
        );
    }

    #[test]
    fn test_combined_setting_lists_spaced_axes() {
        let data = ParenthesesSpaceData::new(10, 1, 3, 4, 0, 0, 2);
        assert_eq!(
            data.get_setting("x", Severity::Suggestion),
            "x = control_flow_statements,type_casts:suggestion"
        );
    }

    #[test]
    fn test_combined_setting_false_when_no_axis_spaced() {
        let data = ParenthesesSpaceData::new(4, 2, 1, 1, 0, 0, 0);
        assert_eq!(data.get_setting("x", Severity::Error), "x = false:error");
    }

    #[test]
    fn test_axis_tie_prefers_no_space() {
        let data = ParenthesesSpaceData::new(2, 1, 1, 0, 0, 0, 0);
        assert_eq!(data.axis_prefers_space(ParenthesesAxis::ControlFlow), Some(false));
    }

    #[test]
    fn test_no_evidence_is_empty() {
        assert_eq!(ParenthesesSpaceData::ZERO.get_setting("x", Severity::Error), "");
    }
}
