//! Aggregate registry holding one accumulator per style dimension.
//!
//! A registry is an immutable value: `update` and `merge` return new
//! registries. The per-kind tables are persistent maps, so recording an
//! observation shares every untouched accumulator with the previous value.
//!
//! ```rust
//! use stylemap::core::Severity;
//! use stylemap::registry::{DimensionId, Observation, StyleRegistry};
//!
//! let unit = StyleRegistry::new()
//!     .update(DimensionId::Indentation, &Observation::Indentation {
//!         style: stylemap::accumulators::IndentStyle::Tab,
//!     })
//!     .unwrap();
//! let corpus = StyleRegistry::new().merge(&unit);
//! assert_eq!(
//!     corpus.get_setting(DimensionId::Indentation, Severity::Warning),
//!     "indent_style = tab:warning"
//! );
//! ```

pub mod dimension;
pub mod observation;

pub use dimension::{BodyDimension, DimensionId, FlagDimension};
pub use observation::{Observation, ObservationRecord};

use crate::accumulators::{
    AccessibilityModifierData, BooleanData, ExpressionBodiedData, MemberExamination,
    ModifierData, ParenthesesSpaceData, TabSpaceData,
};
use crate::core::{Accumulator, Error, Result, Severity, StyleSetting};
use im::OrdMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleRegistry {
    flags: OrdMap<FlagDimension, BooleanData>,
    bodies: OrdMap<BodyDimension, ExpressionBodiedData>,
    indentation: TabSpaceData,
    accessibility: AccessibilityModifierData,
    parentheses: ParenthesesSpaceData,
    modifiers: ModifierData,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    /// Registry with every recognized dimension at its zero value.
    pub fn new() -> Self {
        Self {
            flags: FlagDimension::ALL
                .into_iter()
                .map(|dimension| (dimension, BooleanData::ZERO))
                .collect(),
            bodies: BodyDimension::ALL
                .into_iter()
                .map(|dimension| (dimension, ExpressionBodiedData::ZERO))
                .collect(),
            indentation: TabSpaceData::ZERO,
            accessibility: AccessibilityModifierData::ZERO,
            parentheses: ParenthesesSpaceData::ZERO,
            modifiers: ModifierData::ZERO,
        }
    }

    /// Build a registry from a stream of classified records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ObservationRecord>) -> Result<Self> {
        records.into_iter().try_fold(Self::new(), |registry, record| {
            registry.update(record.dimension, &record.observation)
        })
    }

    /// Route one observation to the accumulator of `dimension`.
    ///
    /// Fails with [`Error::InvalidArgument`] when the observation's shape does
    /// not belong to the dimension.
    pub fn update(&self, dimension: DimensionId, observation: &Observation) -> Result<Self> {
        let mut next = self.clone();
        match (dimension, observation) {
            (DimensionId::Flag(flag), Observation::Flag { value }) => {
                next.flags = self.flags.update(flag, self.flag(flag).update(*value));
            }
            (DimensionId::Body(body), Observation::Body { style }) => {
                next.bodies = self.bodies.update(body, self.body(body).update(*style));
            }
            (DimensionId::Body(body), Observation::Member { shape }) => {
                let examination = MemberExamination::examine(*shape);
                next.bodies = self
                    .bodies
                    .update(body, self.body(body).absorb(&examination));
            }
            (DimensionId::Indentation, Observation::Indentation { style }) => {
                next.indentation = self.indentation.update(*style);
            }
            (
                DimensionId::AccessibilityModifiers,
                Observation::Accessibility {
                    category,
                    is_interface_member,
                },
            ) => {
                next.accessibility = self.accessibility.update(*category, *is_interface_member);
            }
            (DimensionId::ParenthesesSpacing, Observation::Parentheses { axis, space }) => {
                next.parentheses = self.parentheses.update(*axis, *space);
            }
            (DimensionId::ModifierOrder, Observation::Modifiers { keywords }) => {
                next.modifiers = self.modifiers.update(keywords);
            }
            (dimension, observation) => {
                return Err(Error::invalid_argument(format!(
                    "{} observation does not apply to {}",
                    observation.kind(),
                    dimension
                )));
            }
        }
        Ok(next)
    }

    /// Merge every accumulator pairwise with `other`.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            flags: self
                .flags
                .clone()
                .union_with(other.flags.clone(), |a, b| a.merge(&b)),
            bodies: self
                .bodies
                .clone()
                .union_with(other.bodies.clone(), |a, b| a.merge(&b)),
            indentation: self.indentation.merge(&other.indentation),
            accessibility: self.accessibility.merge(&other.accessibility),
            parentheses: self.parentheses.merge(&other.parentheses),
            modifiers: self.modifiers.merge(&other.modifiers),
        }
    }

    pub fn flag(&self, dimension: FlagDimension) -> BooleanData {
        self.flags.get(&dimension).copied().unwrap_or_default()
    }

    pub fn body(&self, dimension: BodyDimension) -> ExpressionBodiedData {
        self.bodies.get(&dimension).copied().unwrap_or_default()
    }

    pub fn indentation(&self) -> TabSpaceData {
        self.indentation
    }

    pub fn accessibility(&self) -> AccessibilityModifierData {
        self.accessibility
    }

    pub fn parentheses(&self) -> ParenthesesSpaceData {
        self.parentheses
    }

    pub fn modifiers(&self) -> ModifierData {
        self.modifiers
    }

    pub fn total_occurrences(&self, dimension: DimensionId) -> u64 {
        match dimension {
            DimensionId::Flag(flag) => self.flag(flag).total_occurrences(),
            DimensionId::Body(body) => self.body(body).total_occurrences(),
            DimensionId::Indentation => self.indentation.total_occurrences(),
            DimensionId::AccessibilityModifiers => self.accessibility.total_occurrences(),
            DimensionId::ParenthesesSpacing => self.parentheses.total_occurrences(),
            DimensionId::ModifierOrder => self.modifiers.total_occurrences(),
        }
    }

    pub fn consistency(&self, dimension: DimensionId) -> f64 {
        match dimension {
            DimensionId::Flag(flag) => self.flag(flag).consistency(),
            DimensionId::Body(body) => self.body(body).consistency(),
            DimensionId::Indentation => self.indentation.consistency(),
            DimensionId::AccessibilityModifiers => self.accessibility.consistency(),
            DimensionId::ParenthesesSpacing => self.parentheses.consistency(),
            DimensionId::ModifierOrder => self.modifiers.consistency(),
        }
    }

    /// Directive for `dimension` under its editorconfig key, or `""`.
    pub fn get_setting(&self, dimension: DimensionId, severity: Severity) -> String {
        let name = dimension.key();
        match dimension {
            DimensionId::Flag(flag) => self.flag(flag).get_setting(name, severity),
            DimensionId::Body(body) => self.body(body).get_setting(name, severity),
            DimensionId::Indentation => self.indentation.get_setting(name, severity),
            DimensionId::AccessibilityModifiers => self.accessibility.get_setting(name, severity),
            DimensionId::ParenthesesSpacing => self.parentheses.get_setting(name, severity),
            DimensionId::ModifierOrder => self.modifiers.get_order_setting(name, severity),
        }
    }
}
