//! Doc values representations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::field_value::ValueKind;

/// How a field's value is persisted into the per-document columnar store.
///
/// Doc values are strongly typed: a field name cannot use different types
/// across documents of the same index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DocValuesType {
    /// No doc values for this field.
    #[default]
    None,

    /// A per-document 64-bit signed integer.
    Numeric,

    /// A per-document byte blob, stored without sharing.
    Binary,
}

impl DocValuesType {
    /// The value kind a field of this type must hold, if constrained.
    pub fn value_kind(self) -> Option<ValueKind> {
        match self {
            DocValuesType::None => None,
            DocValuesType::Numeric => Some(ValueKind::Int64),
            DocValuesType::Binary => Some(ValueKind::Bytes),
        }
    }

    /// Check if values of this type go to the columnar store.
    pub fn has_doc_values(self) -> bool {
        self != DocValuesType::None
    }
}

impl fmt::Display for DocValuesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocValuesType::None => "NONE",
            DocValuesType::Numeric => "NUMERIC",
            DocValuesType::Binary => "BINARY",
        };
        f.write_str(name)
    }
}
