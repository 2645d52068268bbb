//! Transactions filter of transaction-search interchain queries.
use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_primitives::prelude::*;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InterchainQueryError;
use crate::TxEventAttribute;

/// Comparison applied by a filter condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }
}

/// One condition of a transactions filter: the event attribute `field` of a
/// transaction compared against `value`.
///
/// Ordering operators compare the attribute and the value as decimal
/// integers; `eq` compares them as strings. The value may be given as a JSON
/// string or integer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub field: String,
    pub op: FilterOp,
    #[serde(deserialize_with = "string_or_integer")]
    pub value: String,
}

fn string_or_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct ValueVisitor;

    impl<'de> Visitor<'de> for ValueVisitor {
        type Value = String;

        fn expecting(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
            f.write_str("a string or an integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(ValueVisitor)
}

impl FilterCondition {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    fn is_satisfied_by(&self, attribute_value: &str) -> bool {
        if self.op == FilterOp::Eq {
            return attribute_value == self.value;
        }
        let (Ok(lhs), Ok(rhs)) = (
            attribute_value.parse::<i128>(),
            self.value.parse::<i128>(),
        ) else {
            return false;
        };
        match self.op {
            FilterOp::Gt => lhs > rhs,
            FilterOp::Gte => lhs >= rhs,
            FilterOp::Lt => lhs < rhs,
            FilterOp::Lte => lhs <= rhs,
            FilterOp::Eq => lhs == rhs,
        }
    }
}

/// The conditions a transaction must satisfy to be part of a
/// transaction-search query result.
///
/// Encoded as a JSON array of `{"field", "op", "value"}` objects. A
/// transaction matches when every condition is satisfied by at least one
/// of its event attributes with the condition's field as key.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionsFilter(Vec<FilterCondition>);

impl TransactionsFilter {
    pub fn new(conditions: Vec<FilterCondition>) -> Self {
        Self(conditions)
    }

    /// Parses and validates a JSON encoded filter holding at most
    /// `max_conditions` conditions.
    pub fn parse(raw: &str, max_conditions: u64) -> Result<Self, InterchainQueryError> {
        let conditions: Vec<FilterCondition> =
            serde_json::from_str(raw).map_err(|e| InterchainQueryError::InvalidTransactionsFilter {
                reason: format!("malformed filter `{raw}`: {e}"),
            })?;
        let filter = Self(conditions);
        filter.validate_basic(max_conditions)?;
        Ok(filter)
    }

    pub fn validate_basic(&self, max_conditions: u64) -> Result<(), InterchainQueryError> {
        if self.0.is_empty() {
            return Err(InterchainQueryError::InvalidTransactionsFilter {
                reason: "filter must hold at least one condition".to_string(),
            });
        }
        if self.0.len() as u64 > max_conditions {
            return Err(InterchainQueryError::InvalidTransactionsFilter {
                reason: format!(
                    "filter holds {} conditions, at most {max_conditions} are allowed",
                    self.0.len()
                ),
            });
        }
        if let Some(condition) = self.0.iter().find(|c| c.field.is_empty()) {
            return Err(InterchainQueryError::InvalidTransactionsFilter {
                reason: format!("condition on value `{}` has an empty field", condition.value),
            });
        }
        Ok(())
    }

    pub fn conditions(&self) -> &[FilterCondition] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, attributes: &[TxEventAttribute]) -> bool {
        self.0.iter().all(|condition| {
            attributes
                .iter()
                .filter(|attr| attr.key == condition.field)
                .any(|attr| condition.is_satisfied_by(&attr.value))
        })
    }

    pub fn to_json(&self) -> Result<String, InterchainQueryError> {
        serde_json::to_string(&self.0).map_err(|e| InterchainQueryError::Internal(e.to_string()))
    }
}

impl Display for TransactionsFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{} {} {}", c.field, c.op.as_str(), c.value)?;
        }
        Ok(())
    }
}
