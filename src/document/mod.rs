//! Document fields with typed per-document values.
//!
//! This module provides the doc-values field types: a generic [`Field`] bound
//! to a shared, frozen [`FieldType`], and the specialised binary and numeric
//! fields built on it.

pub mod binary_doc_values;
pub mod doc_values_type;
#[allow(clippy::module_inception)]
pub mod document;
pub mod field;
pub mod field_type;
pub mod field_value;
pub mod int16_doc_values;
pub mod numeric_doc_values;

// Re-export commonly used types
pub use binary_doc_values::{BINARY_DOC_VALUES_FIELD_TYPE, BinaryDocValuesField};
pub use doc_values_type::DocValuesType;
pub use document::Document;
pub use field::Field;
pub use field_type::{FieldType, FrozenFieldType};
pub use field_value::{FieldValue, ValueKind};
#[allow(deprecated)]
pub use int16_doc_values::Int16DocValuesField;
pub use numeric_doc_values::{NUMERIC_DOC_VALUES_FIELD_TYPE, NumericDocValuesField};
