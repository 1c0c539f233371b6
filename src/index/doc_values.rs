//! In-memory doc values columns.
//!
//! DocValues are column-oriented storage for field values, optimized for
//! sorting, faceting and field-based scoring. The [`DocValuesWriter`] is the
//! consumer side of the field contract: it reads `(name, doc_values_type,
//! value)` from every doc-values field of a document and buffers the value in
//! that field's column, keyed by document id.
//!
//! Doc values are strongly typed. Once a field name has been buffered with one
//! doc values type, documents using another type for it are rejected.

use ahash::{AHashMap, AHashSet};

use crate::document::doc_values_type::DocValuesType;
use crate::document::document::Document;
use crate::document::field_value::FieldValue;
use crate::error::{Result, SarissaError};
use crate::util::bytes::ByteSpan;

/// Highest document id a [`DocValuesWriter`] accepts.
pub const MAX_DOC_ID: u64 = i32::MAX as u64;

/// DocValues for a single field.
/// Stores a mapping from document ID to field value.
#[derive(Debug, Clone)]
pub struct FieldDocValues {
    /// Field name
    pub field_name: String,
    doc_values_type: DocValuesType,
    /// Sparse storage, None for documents without a value
    values: Vec<Option<FieldValue>>,
}

impl FieldDocValues {
    /// Create an empty column.
    pub fn new(field_name: String, doc_values_type: DocValuesType) -> Self {
        FieldDocValues {
            field_name,
            doc_values_type,
            values: Vec::new(),
        }
    }

    fn set(&mut self, doc_id: usize, value: FieldValue) {
        if doc_id >= self.values.len() {
            self.values.resize(doc_id + 1, None);
        }
        self.values[doc_id] = Some(value);
    }

    /// Get the value for a document
    pub fn get(&self, doc_id: u64) -> Option<&FieldValue> {
        let doc_id = usize::try_from(doc_id).ok()?;
        self.values.get(doc_id).and_then(Option::as_ref)
    }

    /// Get the doc values type of this column.
    pub fn doc_values_type(&self) -> DocValuesType {
        self.doc_values_type
    }

    /// Number of documents holding a value.
    pub fn num_values(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    /// Get the column length (highest doc id + 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Buffers doc values for the documents of one segment.
#[derive(Debug, Default)]
pub struct DocValuesWriter {
    /// Field DocValues being built (field_name -> FieldDocValues)
    fields: AHashMap<String, FieldDocValues>,
}

impl DocValuesWriter {
    /// Create a new DocValuesWriter
    pub fn new() -> Self {
        DocValuesWriter {
            fields: AHashMap::new(),
        }
    }

    /// Buffer the doc values of a document.
    ///
    /// The whole document is validated before any value is buffered, so a
    /// rejected document leaves the writer unchanged.
    pub fn add_document(&mut self, doc_id: u64, doc: &Document) -> Result<()> {
        if doc_id > MAX_DOC_ID {
            return Err(reject(
                doc_id,
                SarissaError::invalid_argument(format!(
                    "doc id {doc_id} exceeds the maximum of {MAX_DOC_ID}"
                )),
            ));
        }
        let slot = usize::try_from(doc_id).map_err(|_| {
            SarissaError::invalid_argument(format!("doc id {doc_id} does not fit in memory"))
        })?;

        let mut seen = AHashSet::new();
        let mut pending = Vec::new();

        for field in doc.doc_values_fields() {
            let name = field.name();
            let doc_values_type = field.doc_values_type();

            if !seen.insert(name) {
                return Err(reject(
                    doc_id,
                    SarissaError::invalid_argument(format!(
                        "doc values field \"{name}\" appears more than once in this document \
                         (only one value is allowed per field)"
                    )),
                ));
            }

            if let Some(existing) = self.fields.get(name) {
                if existing.doc_values_type() != doc_values_type {
                    return Err(reject(
                        doc_id,
                        SarissaError::type_mismatch(format!(
                            "cannot change doc values type from {} to {doc_values_type} \
                             for field \"{name}\"",
                            existing.doc_values_type()
                        )),
                    ));
                }
            }

            let value = field.value().cloned().ok_or_else(|| {
                reject(
                    doc_id,
                    SarissaError::invalid_argument(format!(
                        "doc values field \"{name}\" has no value"
                    )),
                )
            })?;

            pending.push((name, doc_values_type, value));
        }

        for (name, doc_values_type, value) in pending {
            self.fields
                .entry(name.to_string())
                .or_insert_with(|| {
                    log::trace!("creating {doc_values_type} doc values column for \"{name}\"");
                    FieldDocValues::new(name.to_string(), doc_values_type)
                })
                .set(slot, value);
        }

        Ok(())
    }

    /// Get DocValues for a field
    pub fn get_field(&self, field_name: &str) -> Option<&FieldDocValues> {
        self.fields.get(field_name)
    }

    /// Get the doc values type buffered for a field.
    pub fn doc_values_type(&self, field_name: &str) -> Option<DocValuesType> {
        self.fields.get(field_name).map(FieldDocValues::doc_values_type)
    }

    /// Get the binary value of a document.
    pub fn get_binary(&self, field_name: &str, doc_id: u64) -> Option<&ByteSpan> {
        self.fields
            .get(field_name)
            .and_then(|dv| dv.get(doc_id))
            .and_then(FieldValue::as_bytes)
    }

    /// Get the numeric value of a document.
    pub fn get_numeric(&self, field_name: &str, doc_id: u64) -> Option<i64> {
        self.fields
            .get(field_name)
            .and_then(|dv| dv.get(doc_id))
            .and_then(FieldValue::as_int64)
    }

    /// Check if a field has DocValues
    pub fn has_field(&self, field_name: &str) -> bool {
        self.fields.contains_key(field_name)
    }

    /// Get all field names with DocValues, sorted.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.keys().cloned().collect();
        names.sort();
        names
    }
}

fn reject(doc_id: u64, error: SarissaError) -> SarissaError {
    log::warn!("rejecting document {doc_id}: {error}");
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::document::binary_doc_values::BinaryDocValuesField;
    use crate::document::field::Field;
    use crate::document::field_type::FieldType;
    use crate::document::numeric_doc_values::NumericDocValuesField;

    #[test]
    fn test_field_doc_values() {
        let mut dv = FieldDocValues::new("year".to_string(), DocValuesType::Numeric);

        dv.set(0, FieldValue::Int64(100));
        dv.set(5, FieldValue::Int64(3));

        assert_eq!(dv.get(0), Some(&FieldValue::Int64(100)));
        assert_eq!(dv.get(2), None);
        assert_eq!(dv.get(5), Some(&FieldValue::Int64(3)));
        assert_eq!(dv.get(6), None);
        assert_eq!(dv.len(), 6);
        assert_eq!(dv.num_values(), 2);
    }

    #[test]
    fn test_doc_values_write_read() {
        let mut writer = DocValuesWriter::new();

        let doc0 = Document::new()
            .with(NumericDocValuesField::new("year", 2023i64).unwrap())
            .with(BinaryDocValuesField::new("title", ByteSpan::from("first")).unwrap());
        let doc1 = Document::new().with(NumericDocValuesField::new("year", 2024i64).unwrap());

        writer.add_document(0, &doc0).unwrap();
        writer.add_document(1, &doc1).unwrap();

        assert!(writer.has_field("year"));
        assert!(writer.has_field("title"));
        assert!(!writer.has_field("unknown"));
        assert_eq!(writer.field_names(), vec!["title", "year"]);

        assert_eq!(writer.get_numeric("year", 0), Some(2023));
        assert_eq!(writer.get_numeric("year", 1), Some(2024));
        assert_eq!(writer.get_binary("title", 0), Some(&ByteSpan::from("first")));
        assert_eq!(writer.get_binary("title", 1), None);
        assert_eq!(writer.doc_values_type("title"), Some(DocValuesType::Binary));
        assert_eq!(writer.get_field("year").unwrap().num_values(), 2);
    }

    #[test]
    fn test_fields_without_doc_values_are_skipped() {
        let mut writer = DocValuesWriter::new();
        let mut body = Field::new("body", FieldType::new().into_frozen()).unwrap();
        body.set_bytes_value(ByteSpan::from("text")).unwrap();

        writer.add_document(0, &Document::new().with(body)).unwrap();
        assert!(!writer.has_field("body"));
    }

    #[test]
    fn test_type_change_rejected() {
        let mut writer = DocValuesWriter::new();
        writer
            .add_document(0, &Document::new().with(NumericDocValuesField::new("f", 1i64).unwrap()))
            .unwrap();

        let doc = Document::new()
            .with(NumericDocValuesField::new("ok", 7i64).unwrap())
            .with(BinaryDocValuesField::new("f", ByteSpan::from("x")).unwrap());
        let result = writer.add_document(1, &doc);
        assert!(matches!(result, Err(SarissaError::TypeMismatch(_))));

        // Nothing from the rejected document was buffered.
        assert!(!writer.has_field("ok"));
        assert_eq!(writer.doc_values_type("f"), Some(DocValuesType::Numeric));
    }

    #[test]
    fn test_repeated_field_rejected() {
        let mut writer = DocValuesWriter::new();
        let doc = Document::new()
            .with(NumericDocValuesField::new("f", 1i64).unwrap())
            .with(NumericDocValuesField::new("f", 2i64).unwrap());

        let result = writer.add_document(0, &doc);
        assert!(matches!(result, Err(SarissaError::InvalidArgument(_))));
        assert!(!writer.has_field("f"));
    }

    #[test]
    fn test_missing_value_rejected() {
        let mut writer = DocValuesWriter::new();
        let field_type = FieldType::with_doc_values_type(DocValuesType::Binary).into_frozen();
        let empty = Field::new("blob", field_type).unwrap();

        let result = writer.add_document(0, &Document::new().with(empty));
        assert!(matches!(result, Err(SarissaError::InvalidArgument(_))));
    }

    #[test]
    fn test_doc_id_above_maximum_rejected() {
        let mut writer = DocValuesWriter::new();
        let doc = Document::new().with(NumericDocValuesField::new("f", 1i64).unwrap());

        for doc_id in [MAX_DOC_ID + 1, 1 << 40, u64::MAX] {
            let result = writer.add_document(doc_id, &doc);
            assert!(matches!(result, Err(SarissaError::InvalidArgument(_))));
        }
        assert!(!writer.has_field("f"));
        assert!(writer.field_names().is_empty());

        writer.add_document(1_000, &doc).unwrap();
        assert_eq!(writer.get_numeric("f", 1_000), Some(1));
    }
}
