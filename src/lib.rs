// Export modules for library usage
pub mod accumulators;
pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod registry;

// Re-export commonly used types
pub use crate::accumulators::{
    AccessibilityCategory, AccessibilityModifierData, BodyStyle, BooleanData,
    ExpressionBodiedData, IndentStyle, KeywordStats, MemberExamination, MemberShape, Modifier,
    ModifierData, ParenthesesAxis, ParenthesesSpaceData, TabSpaceData,
};

pub use crate::core::{
    format_setting, get_consistency, Accumulator, Consistency, Error, Result, Severity,
    StyleSetting,
};

pub use crate::registry::{
    BodyDimension, DimensionId, FlagDimension, Observation, ObservationRecord, StyleRegistry,
};

pub use crate::aggregation::{aggregate_units, merge_registries, Aggregate};

pub use crate::io::{OutputFormat, StyleReport};
