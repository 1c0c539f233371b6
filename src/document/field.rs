//! The generic doc-values field.
//!
//! A [`Field`] pairs a name, a shared [`FrozenFieldType`] and one value slot.
//! The slot's kind always agrees with the field type's doc values type:
//! BINARY fields hold bytes, NUMERIC fields hold a 64-bit integer. Fields
//! without doc values may hold either kind, but never switch kinds once set.
//!
//! The indexing pipeline reads `(name, doc_values_type, value)` from a field
//! to decide how to persist it.

use std::fmt;

use crate::document::doc_values_type::DocValuesType;
use crate::document::field_type::{FieldType, FrozenFieldType};
use crate::document::field_value::{FieldValue, ValueKind};
use crate::error::{Result, SarissaError};
use crate::util::bytes::ByteSpan;

/// A named value bound to a shared, frozen field type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    field_type: FrozenFieldType,
    value: Option<FieldValue>,
}

impl Field {
    /// Create a field with an empty value slot.
    ///
    /// Fails with [`SarissaError::InvalidArgument`] if `name` is empty.
    pub fn new<S: Into<String>>(name: S, field_type: FrozenFieldType) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SarissaError::invalid_argument("field name must not be empty"));
        }

        Ok(Field {
            name,
            field_type,
            value: None,
        })
    }

    /// Create a field and assign its first value.
    pub fn with_value<S: Into<String>>(
        name: S,
        field_type: FrozenFieldType,
        value: FieldValue,
    ) -> Result<Self> {
        let mut field = Self::new(name, field_type)?;
        field.set_value(value)?;
        Ok(field)
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the shared field type.
    pub fn field_type(&self) -> &FrozenFieldType {
        &self.field_type
    }

    /// Get the doc values representation declared by the field type.
    pub fn doc_values_type(&self) -> DocValuesType {
        self.field_type.doc_values_type()
    }

    /// Get the current value, if one has been assigned.
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Get the binary value.
    ///
    /// Fails with [`SarissaError::TypeMismatch`] if this field cannot hold bytes.
    pub fn binary_value(&self) -> Result<Option<&ByteSpan>> {
        self.check_kind(ValueKind::Bytes)?;
        Ok(self.value.as_ref().and_then(FieldValue::as_bytes))
    }

    /// Get the numeric value.
    ///
    /// Fails with [`SarissaError::TypeMismatch`] if this field cannot hold an integer.
    pub fn numeric_value(&self) -> Result<Option<i64>> {
        self.check_kind(ValueKind::Int64)?;
        Ok(self.value.as_ref().and_then(FieldValue::as_int64))
    }

    /// Replace the value.
    ///
    /// Fails with [`SarissaError::TypeMismatch`] if the value's kind disagrees
    /// with the doc values type or with the kind already held.
    pub fn set_value(&mut self, value: FieldValue) -> Result<()> {
        self.check_kind(value.kind())?;
        self.value = Some(value);
        Ok(())
    }

    /// Replace the value with bytes.
    pub fn set_bytes_value(&mut self, value: ByteSpan) -> Result<()> {
        self.set_value(FieldValue::Bytes(value))
    }

    /// Replace the value with a 64-bit integer.
    pub fn set_int64_value(&mut self, value: i64) -> Result<()> {
        self.set_value(FieldValue::Int64(value))
    }

    /// Replace the value without checking its kind.
    ///
    /// Only for the typed fields, whose field type fixes the kind.
    pub(crate) fn replace_value(&mut self, value: FieldValue) {
        debug_assert!(
            self.doc_values_type()
                .value_kind()
                .is_none_or(|kind| kind == value.kind())
        );
        self.value = Some(value);
    }

    fn check_kind(&self, requested: ValueKind) -> Result<()> {
        if let Some(expected) = self.doc_values_type().value_kind() {
            if expected != requested {
                return Err(SarissaError::type_mismatch(format!(
                    "field \"{}\" has doc values type {} and holds {expected} values, \
                     not {requested}",
                    self.name,
                    self.doc_values_type()
                )));
            }
        }
        if let Some(current) = &self.value {
            if current.kind() != requested {
                return Err(SarissaError::type_mismatch(format!(
                    "field \"{}\" holds a {} value, not {requested}",
                    self.name,
                    current.kind()
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field_type: &FieldType = &self.field_type;
        write!(f, "{field_type}<{}:", self.name)?;
        match &self.value {
            Some(FieldValue::Bytes(bytes)) => write!(f, "{bytes}")?,
            Some(FieldValue::Int64(value)) => write!(f, "{value}")?,
            None => {}
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen(doc_values_type: DocValuesType) -> FrozenFieldType {
        FieldType::with_doc_values_type(doc_values_type).into_frozen()
    }

    #[test]
    fn test_new_field() {
        let field = Field::new("title", frozen(DocValuesType::Binary)).unwrap();
        assert_eq!(field.name(), "title");
        assert_eq!(field.doc_values_type(), DocValuesType::Binary);
        assert!(field.value().is_none());
        assert_eq!(field.binary_value().unwrap(), None);
    }

    #[test]
    fn test_empty_name() {
        let result = Field::new("", frozen(DocValuesType::Numeric));
        assert!(matches!(result, Err(SarissaError::InvalidArgument(_))));

        let result =
            Field::with_value(String::new(), frozen(DocValuesType::Numeric), 1i64.into());
        assert!(matches!(result, Err(SarissaError::InvalidArgument(_))));
    }

    #[test]
    fn test_set_value_matching_kind() {
        let mut field = Field::new("price", frozen(DocValuesType::Numeric)).unwrap();
        field.set_int64_value(42).unwrap();
        assert_eq!(field.numeric_value().unwrap(), Some(42));

        field.set_value(FieldValue::Int64(-1)).unwrap();
        assert_eq!(field.value(), Some(&FieldValue::Int64(-1)));
    }

    #[test]
    fn test_set_value_kind_mismatch() {
        let mut field = Field::new("price", frozen(DocValuesType::Numeric)).unwrap();
        let result = field.set_bytes_value(ByteSpan::from("42"));
        assert!(matches!(result, Err(SarissaError::TypeMismatch(_))));
        assert!(field.value().is_none());

        let mut field = Field::new("title", frozen(DocValuesType::Binary)).unwrap();
        let result = field.set_int64_value(42);
        assert!(matches!(result, Err(SarissaError::TypeMismatch(_))));
    }

    #[test]
    fn test_get_value_kind_mismatch() {
        let field = Field::with_value(
            "title",
            frozen(DocValuesType::Binary),
            ByteSpan::from("x").into(),
        )
        .unwrap();
        assert!(matches!(
            field.numeric_value(),
            Err(SarissaError::TypeMismatch(_))
        ));

        let field =
            Field::with_value("count", frozen(DocValuesType::Numeric), 3i64.into()).unwrap();
        assert!(matches!(
            field.binary_value(),
            Err(SarissaError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_no_doc_values_field_keeps_its_kind() {
        let mut field = Field::new("body", frozen(DocValuesType::None)).unwrap();
        assert_eq!(field.numeric_value().unwrap(), None);
        assert_eq!(field.binary_value().unwrap(), None);

        field.set_bytes_value(ByteSpan::from("first")).unwrap();
        field.set_bytes_value(ByteSpan::from("second")).unwrap();
        assert_eq!(
            field.binary_value().unwrap(),
            Some(&ByteSpan::from("second"))
        );

        assert!(matches!(
            field.set_int64_value(1),
            Err(SarissaError::TypeMismatch(_))
        ));
        assert!(matches!(
            field.numeric_value(),
            Err(SarissaError::TypeMismatch(_))
        ));
    }

    #[test]
    fn test_display() {
        let mut field_type = FieldType::new();
        field_type.set_stored(true).unwrap();
        field_type
            .set_doc_values_type(DocValuesType::Numeric)
            .unwrap();
        let field = Field::with_value("year", field_type.into_frozen(), 2024i64.into()).unwrap();
        assert_eq!(field.to_string(), "stored,doc_values_type=NUMERIC<year:2024>");
    }
}
