use super::dimension::DimensionId;
use crate::accumulators::{
    AccessibilityCategory, BodyStyle, IndentStyle, MemberShape, Modifier, ParenthesesAxis,
};
use serde::{Deserialize, Serialize};

/// One classified construct, as reported by an external classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Observation {
    Flag {
        value: bool,
    },
    Indentation {
        style: IndentStyle,
    },
    Body {
        style: BodyStyle,
    },
    Member {
        shape: MemberShape,
    },
    Accessibility {
        category: AccessibilityCategory,
        #[serde(default)]
        is_interface_member: bool,
    },
    Parentheses {
        axis: ParenthesesAxis,
        space: bool,
    },
    Modifiers {
        keywords: Vec<Modifier>,
    },
}

impl Observation {
    pub fn kind(&self) -> &'static str {
        match self {
            Observation::Flag { .. } => "flag",
            Observation::Indentation { .. } => "indentation",
            Observation::Body { .. } => "body",
            Observation::Member { .. } => "member",
            Observation::Accessibility { .. } => "accessibility",
            Observation::Parentheses { .. } => "parentheses",
            Observation::Modifiers { .. } => "modifiers",
        }
    }
}

/// A dimension paired with its observation; one JSON line of input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub dimension: DimensionId,
    #[serde(flatten)]
    pub observation: Observation,
}
