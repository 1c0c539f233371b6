//! Canonical in-memory field values.
//!
//! Whatever width or wrapper the caller used, a field value ends up in one of
//! two canonical representations: a [`ByteSpan`] blob or a 64-bit integer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::bytes::ByteSpan;

/// The value held in a field's value slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldValue {
    /// Binary data
    Bytes(ByteSpan),
    /// 64-bit signed integer
    Int64(i64),
}

/// The tag of a [`FieldValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// [`FieldValue::Bytes`]
    Bytes,
    /// [`FieldValue::Int64`]
    Int64,
}

impl FieldValue {
    /// Get the tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Bytes(_) => ValueKind::Bytes,
            FieldValue::Int64(_) => ValueKind::Int64,
        }
    }

    /// Get the value as binary data, if possible.
    pub fn as_bytes(&self) -> Option<&ByteSpan> {
        match self {
            FieldValue::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Get the value as a 64-bit integer, if possible.
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            FieldValue::Int64(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<ByteSpan> for FieldValue {
    fn from(bytes: ByteSpan) -> Self {
        FieldValue::Bytes(bytes)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int64(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int64(i64::from(value))
    }
}

impl From<i16> for FieldValue {
    fn from(value: i16) -> Self {
        FieldValue::Int64(i64::from(value))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Bytes => f.write_str("Bytes"),
            ValueKind::Int64 => f.write_str("Int64"),
        }
    }
}
