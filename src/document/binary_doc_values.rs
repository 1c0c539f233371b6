//! Per-document binary doc values.

use std::ops::Deref;
use std::sync::LazyLock;

use crate::document::doc_values_type::DocValuesType;
use crate::document::field::Field;
use crate::document::field_type::{FieldType, FrozenFieldType};
use crate::document::field_value::FieldValue;
use crate::error::Result;
use crate::util::bytes::ByteSpan;

/// The field type shared by every [`BinaryDocValuesField`].
pub static BINARY_DOC_VALUES_FIELD_TYPE: LazyLock<FrozenFieldType> =
    LazyLock::new(|| FieldType::with_doc_values_type(DocValuesType::Binary).into_frozen());

/// A field that stores a per-document [`ByteSpan`] value.
///
/// Values are stored directly, with no sharing between documents. This fits
/// fields that rarely repeat a value, such as a title. If you also need to
/// retrieve the value, add a separate stored field.
///
/// # Examples
///
/// ```
/// use sarissa_docvalues::document::binary_doc_values::BinaryDocValuesField;
/// use sarissa_docvalues::document::doc_values_type::DocValuesType;
/// use sarissa_docvalues::util::bytes::ByteSpan;
///
/// let field = BinaryDocValuesField::new("title", ByteSpan::from("hello")).unwrap();
/// assert_eq!(field.doc_values_type(), DocValuesType::Binary);
/// assert_eq!(field.bytes_value().as_slice(), b"hello");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryDocValuesField {
    field: Field,
}

impl BinaryDocValuesField {
    /// Create a new binary doc values field.
    ///
    /// Fails with [`SarissaError::InvalidArgument`](crate::error::SarissaError::InvalidArgument)
    /// if `name` is empty.
    pub fn new<S: Into<String>>(name: S, value: ByteSpan) -> Result<Self> {
        let mut field = Field::new(name, BINARY_DOC_VALUES_FIELD_TYPE.clone())?;
        field.replace_value(FieldValue::Bytes(value));
        Ok(BinaryDocValuesField { field })
    }

    /// Get the stored bytes.
    pub fn bytes_value(&self) -> &ByteSpan {
        match self.field.value() {
            Some(FieldValue::Bytes(bytes)) => bytes,
            _ => unreachable!("binary doc values field always holds bytes"),
        }
    }

    /// Replace the stored bytes.
    pub fn set_bytes_value(&mut self, value: ByteSpan) {
        self.field.replace_value(FieldValue::Bytes(value));
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

impl Deref for BinaryDocValuesField {
    type Target = Field;

    fn deref(&self) -> &Field {
        &self.field
    }
}

impl From<BinaryDocValuesField> for Field {
    fn from(field: BinaryDocValuesField) -> Self {
        field.field
    }
}
