//! Expression-bodied member statistics.
//!
//! A classifier reports each member either as an already-folded [`BodyStyle`]
//! or as a [`MemberShape`], which [`MemberExamination::examine`] expands into
//! the finer single-line/multi-line breakdown. Both block forms collapse into
//! a single `block` count once folded into [`ExpressionBodiedData`].

use crate::core::{get_consistency, Accumulator, StyleSetting};
use serde::{Deserialize, Serialize};

/// Folded body form of one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyStyle {
    ArrowSingleLine,
    ArrowMultiLine,
    Block,
}

/// Member classified by kind, before examination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberShape {
    /// `=> expr;`
    ExpressionBody { multi_line: bool },
    /// `{ ... }`
    BlockBody { multi_line: bool },
    /// Abstract, extern, or otherwise bodiless members.
    NoBody,
}

/// Per-member breakdown with block bodies still split by line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MemberExamination {
    pub total_occurrences: u64,
    pub arrow_single_line: u64,
    pub arrow_multi_line: u64,
    pub block_single_line: u64,
    pub block_multi_line: u64,
}

impl MemberExamination {
    pub const ZERO: Self = Self {
        total_occurrences: 0,
        arrow_single_line: 0,
        arrow_multi_line: 0,
        block_single_line: 0,
        block_multi_line: 0,
    };

    /// Examine one member. Bodiless members contribute no evidence.
    pub fn examine(shape: MemberShape) -> Self {
        let counted = Self {
            total_occurrences: 1,
            ..Self::ZERO
        };
        match shape {
            MemberShape::ExpressionBody { multi_line: false } => Self {
                arrow_single_line: 1,
                ..counted
            },
            MemberShape::ExpressionBody { multi_line: true } => Self {
                arrow_multi_line: 1,
                ..counted
            },
            MemberShape::BlockBody { multi_line: false } => Self {
                block_single_line: 1,
                ..counted
            },
            MemberShape::BlockBody { multi_line: true } => Self {
                block_multi_line: 1,
                ..counted
            },
            MemberShape::NoBody => Self::ZERO,
        }
    }

    pub fn single_line(&self) -> u64 {
        self.arrow_single_line + self.block_single_line
    }

    pub fn multi_line(&self) -> u64 {
        self.arrow_multi_line + self.block_multi_line
    }
}

impl Accumulator for MemberExamination {
    fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    fn merge(&self, other: &Self) -> Self {
        Self {
            total_occurrences: self.total_occurrences + other.total_occurrences,
            arrow_single_line: self.arrow_single_line + other.arrow_single_line,
            arrow_multi_line: self.arrow_multi_line + other.arrow_multi_line,
            block_single_line: self.block_single_line + other.block_single_line,
            block_multi_line: self.block_multi_line + other.block_multi_line,
        }
    }
}

/// Aggregate counts deciding `csharp_style_expression_bodied_*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExpressionBodiedData {
    pub total_occurrences: u64,
    pub arrow_single_line: u64,
    pub arrow_multi_line: u64,
    pub block: u64,
}

impl ExpressionBodiedData {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(
        total_occurrences: u64,
        arrow_single_line: u64,
        arrow_multi_line: u64,
        block: u64,
    ) -> Self {
        Self {
            total_occurrences,
            arrow_single_line,
            arrow_multi_line,
            block,
        }
    }

    #[must_use]
    pub fn update(&self, style: BodyStyle) -> Self {
        let step = match style {
            BodyStyle::ArrowSingleLine => Self::new(1, 1, 0, 0),
            BodyStyle::ArrowMultiLine => Self::new(1, 0, 1, 0),
            BodyStyle::Block => Self::new(1, 0, 0, 1),
        };
        self.merge(&step)
    }

    /// Fold a finer member examination into the aggregate.
    #[must_use]
    pub fn absorb(&self, examination: &MemberExamination) -> Self {
        self.merge(&Self::from(*examination))
    }

    pub fn arrow(&self) -> u64 {
        self.arrow_single_line + self.arrow_multi_line
    }
}

impl From<MemberExamination> for ExpressionBodiedData {
    fn from(examination: MemberExamination) -> Self {
        Self::new(
            examination.total_occurrences,
            examination.arrow_single_line,
            examination.arrow_multi_line,
            examination.block_single_line + examination.block_multi_line,
        )
    }
}

impl Accumulator for ExpressionBodiedData {
    fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    fn merge(&self, other: &Self) -> Self {
        Self::new(
            self.total_occurrences + other.total_occurrences,
            self.arrow_single_line + other.arrow_single_line,
            self.arrow_multi_line + other.arrow_multi_line,
            self.block + other.block,
        )
    }
}

impl StyleSetting for ExpressionBodiedData {
    fn value(&self) -> Option<String> {
        if !self.has_evidence() {
            return None;
        }
        let value = if self.block > self.arrow() {
            "false"
        } else if self.arrow_multi_line > self.arrow_single_line + self.block {
            "true"
        } else {
            "when_on_single_line"
        };
        Some(value.to_string())
    }

    fn consistency(&self) -> f64 {
        get_consistency(&[self.arrow(), self.block], self.total_occurrences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_examine_block_multi_line() {
        let examination = MemberExamination::examine(MemberShape::BlockBody { multi_line: true });
        assert_eq!(examination.total_occurrences, 1);
        assert_eq!(examination.block_multi_line, 1);
        assert_eq!(examination.multi_line(), 1);
        assert_eq!(examination.single_line(), 0);
    }

    #[test]
    fn test_examine_no_body_is_zero() {
        assert_eq!(
            MemberExamination::examine(MemberShape::NoBody),
            MemberExamination::ZERO
        );
    }

    #[test]
    fn test_absorb_collapses_block_forms() {
        let examination = MemberExamination::examine(MemberShape::BlockBody { multi_line: false })
            .merge(&MemberExamination::examine(MemberShape::BlockBody {
                multi_line: true,
            }))
            .merge(&MemberExamination::examine(MemberShape::ExpressionBody {
                multi_line: false,
            }));
        assert_eq!(
            ExpressionBodiedData::ZERO.absorb(&examination),
            ExpressionBodiedData::new(3, 1, 0, 2)
        );
    }

    #[test]
    fn test_consistency() {
        let consistency = ExpressionBodiedData::new(100, 70, 20, 10).consistency();
        assert!((consistency - 0.800000012).abs() < 1e-6);
    }

    #[test]
    fn test_mixed_arrows_prefer_single_line() {
        assert_eq!(
            ExpressionBodiedData::new(4, 1, 2, 1).get_setting("x", Severity::Error),
            "x = when_on_single_line:error"
        );
    }

    #[test]
    fn test_block_dominates() {
        assert_eq!(
            ExpressionBodiedData::new(5, 1, 1, 3).get_setting("x", Severity::Error),
            "x = false:error"
        );
    }

    #[test]
    fn test_multi_line_arrow_dominates() {
        assert_eq!(
            ExpressionBodiedData::new(5, 1, 3, 1).get_setting("x", Severity::Error),
            "x = true:error"
        );
    }

    #[test]
    fn test_tie_between_arrow_and_block_favors_arrow() {
        assert_eq!(
            ExpressionBodiedData::new(4, 2, 0, 2).get_setting("x", Severity::Error),
            "x = when_on_single_line:error"
        );
    }
}
