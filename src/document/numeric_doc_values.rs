//! Per-document numeric doc values.
//!
//! Every numeric value is held as one canonical `i64`. The 16- and 32-bit
//! entry points sign-extend their argument and delegate to the 64-bit setter,
//! so the narrow API never loses information on the way in. Reading a narrow
//! width back is only meaningful while the stored value fits that width.

use std::ops::Deref;
use std::sync::LazyLock;

use crate::document::doc_values_type::DocValuesType;
use crate::document::field::Field;
use crate::document::field_type::{FieldType, FrozenFieldType};
use crate::document::field_value::FieldValue;
use crate::error::Result;

/// The field type shared by every [`NumericDocValuesField`].
pub static NUMERIC_DOC_VALUES_FIELD_TYPE: LazyLock<FrozenFieldType> =
    LazyLock::new(|| FieldType::with_doc_values_type(DocValuesType::Numeric).into_frozen());

/// A field that stores a per-document integer for scoring, sorting or value
/// retrieval.
///
/// # Examples
///
/// ```
/// use sarissa_docvalues::document::numeric_doc_values::NumericDocValuesField;
///
/// let mut field = NumericDocValuesField::new("year", 2024i64).unwrap();
/// assert_eq!(field.int64_value(), 2024);
///
/// field.set_int16_value(-3);
/// assert_eq!(field.int64_value(), -3);
/// assert_eq!(field.int16_value(), Some(-3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericDocValuesField {
    field: Field,
}

impl NumericDocValuesField {
    /// Create a new numeric doc values field from any signed width up to 64 bits.
    ///
    /// Fails with [`SarissaError::InvalidArgument`](crate::error::SarissaError::InvalidArgument)
    /// if `name` is empty.
    pub fn new<S: Into<String>, V: Into<i64>>(name: S, value: V) -> Result<Self> {
        let mut field = Field::new(name, NUMERIC_DOC_VALUES_FIELD_TYPE.clone())?;
        field.replace_value(FieldValue::Int64(value.into()));
        Ok(NumericDocValuesField { field })
    }

    /// Replace the stored value. Any `i64` is accepted.
    pub fn set_int64_value(&mut self, value: i64) {
        self.field.replace_value(FieldValue::Int64(value));
    }

    /// Widen a 32-bit value and store it.
    pub fn set_int32_value(&mut self, value: i32) {
        self.set_int64_value(i64::from(value));
    }

    /// Widen a 16-bit value and store it.
    pub fn set_int16_value(&mut self, value: i16) {
        self.set_int64_value(i64::from(value));
    }

    /// Get the canonical stored value.
    pub fn int64_value(&self) -> i64 {
        match self.field.value() {
            Some(FieldValue::Int64(value)) => *value,
            _ => unreachable!("numeric doc values field always holds an i64"),
        }
    }

    /// Get the stored value if it fits in 32 bits.
    pub fn int32_value(&self) -> Option<i32> {
        i32::try_from(self.int64_value()).ok()
    }

    /// Get the stored value if it fits in 16 bits.
    pub fn int16_value(&self) -> Option<i16> {
        i16::try_from(self.int64_value()).ok()
    }

    /// Get the underlying field.
    pub fn as_field(&self) -> &Field {
        &self.field
    }

    /// Convert into the underlying field.
    pub fn into_field(self) -> Field {
        self.field
    }
}

impl Deref for NumericDocValuesField {
    type Target = Field;

    fn deref(&self) -> &Field {
        &self.field
    }
}

impl From<NumericDocValuesField> for Field {
    fn from(field: NumericDocValuesField) -> Self {
        field.field
    }
}
