use crate::core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary style choices tracked by [`BooleanData`](crate::accumulators::BooleanData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlagDimension {
    VarForBuiltInTypes,
    VarWhenTypeIsApparent,
    VarElsewhere,
    PredefinedTypeForLocalsParametersMembers,
    PredefinedTypeForMemberAccess,
    QualificationForField,
    QualificationForProperty,
    QualificationForMethod,
    QualificationForEvent,
    PreferBraces,
    SpaceAfterCast,
    SpaceAfterKeywordsInControlFlowStatements,
}

impl FlagDimension {
    pub const ALL: [FlagDimension; 12] = [
        FlagDimension::VarForBuiltInTypes,
        FlagDimension::VarWhenTypeIsApparent,
        FlagDimension::VarElsewhere,
        FlagDimension::PredefinedTypeForLocalsParametersMembers,
        FlagDimension::PredefinedTypeForMemberAccess,
        FlagDimension::QualificationForField,
        FlagDimension::QualificationForProperty,
        FlagDimension::QualificationForMethod,
        FlagDimension::QualificationForEvent,
        FlagDimension::PreferBraces,
        FlagDimension::SpaceAfterCast,
        FlagDimension::SpaceAfterKeywordsInControlFlowStatements,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::VarForBuiltInTypes => "csharp_style_var_for_built_in_types",
            Self::VarWhenTypeIsApparent => "csharp_style_var_when_type_is_apparent",
            Self::VarElsewhere => "csharp_style_var_elsewhere",
            Self::PredefinedTypeForLocalsParametersMembers => {
                "dotnet_style_predefined_type_for_locals_parameters_members"
            }
            Self::PredefinedTypeForMemberAccess => "dotnet_style_predefined_type_for_member_access",
            Self::QualificationForField => "dotnet_style_qualification_for_field",
            Self::QualificationForProperty => "dotnet_style_qualification_for_property",
            Self::QualificationForMethod => "dotnet_style_qualification_for_method",
            Self::QualificationForEvent => "dotnet_style_qualification_for_event",
            Self::PreferBraces => "csharp_prefer_braces",
            Self::SpaceAfterCast => "csharp_space_after_cast",
            Self::SpaceAfterKeywordsInControlFlowStatements => {
                "csharp_space_after_keywords_in_control_flow_statements"
            }
        }
    }
}

/// Member kinds tracked by [`ExpressionBodiedData`](crate::accumulators::ExpressionBodiedData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyDimension {
    Methods,
    Constructors,
    Operators,
    Properties,
    Indexers,
    Accessors,
    Lambdas,
    LocalFunctions,
}

impl BodyDimension {
    pub const ALL: [BodyDimension; 8] = [
        BodyDimension::Methods,
        BodyDimension::Constructors,
        BodyDimension::Operators,
        BodyDimension::Properties,
        BodyDimension::Indexers,
        BodyDimension::Accessors,
        BodyDimension::Lambdas,
        BodyDimension::LocalFunctions,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Methods => "csharp_style_expression_bodied_methods",
            Self::Constructors => "csharp_style_expression_bodied_constructors",
            Self::Operators => "csharp_style_expression_bodied_operators",
            Self::Properties => "csharp_style_expression_bodied_properties",
            Self::Indexers => "csharp_style_expression_bodied_indexers",
            Self::Accessors => "csharp_style_expression_bodied_accessors",
            Self::Lambdas => "csharp_style_expression_bodied_lambdas",
            Self::LocalFunctions => "csharp_style_expression_bodied_local_functions",
        }
    }
}

/// Every recognized style dimension, named on the wire by its editorconfig key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DimensionId {
    Flag(FlagDimension),
    Body(BodyDimension),
    Indentation,
    AccessibilityModifiers,
    ParenthesesSpacing,
    ModifierOrder,
}

impl DimensionId {
    /// All dimensions in report order.
    pub fn all() -> impl Iterator<Item = DimensionId> {
        [DimensionId::Indentation]
            .into_iter()
            .chain(FlagDimension::ALL.into_iter().map(DimensionId::Flag))
            .chain(BodyDimension::ALL.into_iter().map(DimensionId::Body))
            .chain([
                DimensionId::AccessibilityModifiers,
                DimensionId::ParenthesesSpacing,
                DimensionId::ModifierOrder,
            ])
    }

    pub const fn key(self) -> &'static str {
        match self {
            DimensionId::Flag(flag) => flag.key(),
            DimensionId::Body(body) => body.key(),
            DimensionId::Indentation => "indent_style",
            DimensionId::AccessibilityModifiers => "dotnet_style_require_accessibility_modifiers",
            DimensionId::ParenthesesSpacing => "csharp_space_between_parentheses",
            DimensionId::ModifierOrder => "csharp_preferred_modifier_order",
        }
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DimensionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionId::all()
            .find(|dimension| dimension.key() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown style dimension '{s}'")))
    }
}

impl TryFrom<String> for DimensionId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DimensionId> for String {
    fn from(dimension: DimensionId) -> Self {
        dimension.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = DimensionId::all().map(DimensionId::key).collect();
        assert_eq!(keys.len(), DimensionId::all().count());
    }

    #[test]
    fn test_parse_round_trip() {
        for dimension in DimensionId::all() {
            assert_eq!(dimension.key().parse::<DimensionId>().unwrap(), dimension);
        }
    }

    #[test]
    fn test_unknown_key_is_invalid_argument() {
        let err = "csharp_style_unknown".parse::<DimensionId>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&DimensionId::Indentation).unwrap();
        assert_eq!(json, "\"indent_style\"");
        let parsed: DimensionId =
            serde_json::from_str("\"csharp_style_expression_bodied_methods\"").unwrap();
        assert_eq!(parsed, DimensionId::Body(BodyDimension::Methods));
    }
}
