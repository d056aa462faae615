//! Filter type definitions
//!
//! Defines the clause model and the operator enumeration used by the filter panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Comparison operator of a filter clause
///
/// Serialized with canonical camelCase names. Deserialization also accepts
/// the short names older panels emitted (`nl`, `ne`, `gt`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    #[default]
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "doesNotContain", alias = "doesNotContains")]
    DoesNotContain,
    #[serde(rename = "matches")]
    Matches,
    #[serde(rename = "doesNotMatch", alias = "nl")]
    DoesNotMatch,
    #[serde(rename = "equals")]
    Equals,
    #[serde(rename = "notEquals", alias = "ne")]
    NotEquals,
    #[serde(rename = "isEmpty")]
    IsEmpty,
    #[serde(rename = "isNotEmpty")]
    IsNotEmpty,
    #[serde(rename = "greaterThan", alias = "gt")]
    GreaterThan,
    #[serde(rename = "lessThan", alias = "lt")]
    LessThan,
    #[serde(rename = "greaterOrEqual", alias = "gte")]
    GreaterOrEqual,
    #[serde(rename = "lessOrEqual", alias = "lte")]
    LessOrEqual,
}

impl OperatorKind {
    /// All operators in display order
    pub const ALL: [OperatorKind; 12] = [
        Self::Contains,
        Self::DoesNotContain,
        Self::Matches,
        Self::DoesNotMatch,
        Self::Equals,
        Self::NotEquals,
        Self::IsEmpty,
        Self::IsNotEmpty,
        Self::GreaterThan,
        Self::LessThan,
        Self::GreaterOrEqual,
        Self::LessOrEqual,
    ];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::DoesNotContain => "doesNotContain",
            Self::Matches => "matches",
            Self::DoesNotMatch => "doesNotMatch",
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
            Self::IsEmpty => "isEmpty",
            Self::IsNotEmpty => "isNotEmpty",
            Self::GreaterThan => "greaterThan",
            Self::LessThan => "lessThan",
            Self::GreaterOrEqual => "greaterOrEqual",
            Self::LessOrEqual => "lessOrEqual",
        }
    }

    /// Human-readable label shown in the operator picker
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::DoesNotContain => "does not contain",
            Self::Matches => "matches",
            Self::DoesNotMatch => "does not match",
            Self::Equals => "equals",
            Self::NotEquals => "does not equal",
            Self::IsEmpty => "is empty",
            Self::IsNotEmpty => "is not empty",
            Self::GreaterThan => "greater than",
            Self::LessThan => "less than",
            Self::GreaterOrEqual => "greater than or equals",
            Self::LessOrEqual => "less than or equals",
        }
    }

    /// Unary operators ignore the clause value; value entry is hidden for them
    pub fn is_unary(&self) -> bool {
        matches!(self, Self::IsEmpty | Self::IsNotEmpty)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "contains" => Self::Contains,
            "doesNotContain" | "doesNotContains" => Self::DoesNotContain,
            "matches" => Self::Matches,
            "doesNotMatch" | "nl" => Self::DoesNotMatch,
            "equals" => Self::Equals,
            "notEquals" | "ne" => Self::NotEquals,
            "isEmpty" => Self::IsEmpty,
            "isNotEmpty" => Self::IsNotEmpty,
            "greaterThan" | "gt" => Self::GreaterThan,
            "lessThan" | "lt" => Self::LessThan,
            "greaterOrEqual" | "gte" => Self::GreaterOrEqual,
            "lessOrEqual" | "lte" => Self::LessOrEqual,
            _ => return Err(FilterError::invalid_operator(s)),
        };
        Ok(op)
    }
}

/// One column/operator/value predicate of the conjunction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterClause {
    /// Target column; empty means the clause is not yet usable
    pub column_id: String,
    pub operation: OperatorKind,
    /// Operand, retained even while the operator is unary
    pub value: String,
}

impl FilterClause {
    pub fn new(
        column_id: impl Into<String>,
        operation: OperatorKind,
        value: impl Into<String>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            operation,
            value: value.into(),
        }
    }

    /// A clause is active once a column is selected
    pub fn is_active(&self) -> bool {
        !self.column_id.is_empty()
    }

    /// Operand as consumers should see it: `None` while the operator is unary
    pub fn operand(&self) -> Option<&str> {
        if self.operation.is_unary() {
            None
        } else {
            Some(&self.value)
        }
    }

    /// Borrowed predicate view with the operand suppressed for unary operators
    pub fn predicate(&self) -> Predicate<'_> {
        Predicate {
            column: &self.column_id,
            operation: self.operation,
            value: self.operand(),
        }
    }
}

/// Predicate shape handed to a filtering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Predicate<'a> {
    pub column: &'a str,
    pub operation: OperatorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
}

/// Word joining a clause to the ones before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Where,
    And,
}

impl Connector {
    pub fn for_index(index: usize) -> Self {
        if index == 0 { Self::Where } else { Self::And }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connector::Where => write!(f, "where"),
            Connector::And => write!(f, "and"),
        }
    }
}
