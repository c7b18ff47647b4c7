//! Immutable per-dimension counters.
//!
//! Every accumulator starts at its zero value, grows through `update` while a
//! unit is analyzed, and is combined with other units through
//! [`Accumulator::merge`](crate::core::Accumulator::merge).

pub mod accessibility;
pub mod boolean;
pub mod expression_bodied;
pub mod modifier;
pub mod parentheses;
pub mod tab_space;

pub use accessibility::{AccessibilityCategory, AccessibilityModifierData};
pub use boolean::BooleanData;
pub use expression_bodied::{BodyStyle, ExpressionBodiedData, MemberExamination, MemberShape};
pub use modifier::{KeywordStats, Modifier, ModifierData};
pub use parentheses::{ParenthesesAxis, ParenthesesSpaceData};
pub use tab_space::{IndentStyle, TabSpaceData};
