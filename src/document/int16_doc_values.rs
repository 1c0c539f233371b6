//! 16-bit numeric doc values, kept for older callers.

#![allow(deprecated)]

use std::ops::Deref;

use crate::document::field::Field;
use crate::document::numeric_doc_values::NumericDocValuesField;
use crate::error::Result;

/// A field that stores a per-document `i16` value.
///
/// This is a thin adapter over [`NumericDocValuesField`]: the value is widened
/// on the way in and held as the numeric field's canonical `i64`.
///
/// ```
/// #![allow(deprecated)]
/// use sarissa_docvalues::document::int16_doc_values::Int16DocValuesField;
///
/// let field = Int16DocValuesField::new("rank", 22).unwrap();
/// assert_eq!(field.as_numeric().int64_value(), 22);
/// assert_eq!(field.int16_value(), Some(22));
/// ```
#[deprecated(note = "use NumericDocValuesField instead")]
#[derive(Debug, Clone, PartialEq)]
pub struct Int16DocValuesField {
    inner: NumericDocValuesField,
}

impl Int16DocValuesField {
    /// Create a new field from a 16-bit value.
    pub fn new<S: Into<String>>(name: S, value: i16) -> Result<Self> {
        Ok(Int16DocValuesField {
            inner: NumericDocValuesField::new(name, value)?,
        })
    }

    /// Widen and store a 16-bit value.
    pub fn set_int16_value(&mut self, value: i16) {
        self.inner.set_int64_value(i64::from(value));
    }

    /// Get the stored value if it fits in 16 bits.
    pub fn int16_value(&self) -> Option<i16> {
        self.inner.int16_value()
    }

    /// Get the wrapped numeric field.
    pub fn as_numeric(&self) -> &NumericDocValuesField {
        &self.inner
    }

    /// Convert into the wrapped numeric field.
    pub fn into_numeric(self) -> NumericDocValuesField {
        self.inner
    }
}

impl Deref for Int16DocValuesField {
    type Target = Field;

    fn deref(&self) -> &Field {
        self.inner.as_field()
    }
}

impl From<Int16DocValuesField> for NumericDocValuesField {
    fn from(field: Int16DocValuesField) -> Self {
        field.inner
    }
}

impl From<Int16DocValuesField> for Field {
    fn from(field: Int16DocValuesField) -> Self {
        field.inner.into_field()
    }
}
