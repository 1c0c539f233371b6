//! Document container for doc-values fields.

use crate::document::field::Field;
use crate::document::field_value::FieldValue;
use crate::util::bytes::ByteSpan;

/// A document represents a single item to be indexed.
///
/// Fields are kept in insertion order. The same name may appear more than
/// once; the doc-values buffer rejects repeated doc-values fields when the
/// document is added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Vec<Field>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document { fields: Vec::new() }
    }

    /// Add a field to the document.
    pub fn add<F: Into<Field>>(&mut self, field: F) {
        self.fields.push(field.into());
    }

    /// Add a field and return the document, for chaining.
    pub fn with<F: Into<Field>>(mut self, field: F) -> Self {
        self.add(field);
        self
    }

    /// Get the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Get every field with the given name.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields.iter().filter(move |field| field.name() == name)
    }

    /// Remove every field with the given name, returning how many were removed.
    pub fn remove_fields(&mut self, name: &str) -> usize {
        let before = self.fields.len();
        self.fields.retain(|field| field.name() != name);
        before - self.fields.len()
    }

    /// Get the bytes of the first field with the given name holding bytes.
    pub fn get_binary_value(&self, name: &str) -> Option<&ByteSpan> {
        self.fields
            .iter()
            .filter(|field| field.name() == name)
            .find_map(|field| field.value().and_then(FieldValue::as_bytes))
    }

    /// Get the integer of the first field with the given name holding one.
    pub fn get_numeric_value(&self, name: &str) -> Option<i64> {
        self.fields
            .iter()
            .filter(|field| field.name() == name)
            .find_map(|field| field.value().and_then(FieldValue::as_int64))
    }

    /// Iterate over the fields that carry doc values.
    pub fn doc_values_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|field| field.doc_values_type().has_doc_values())
    }

    /// Get all fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::document::binary_doc_values::BinaryDocValuesField;
    use crate::document::field_type::FieldType;
    use crate::document::numeric_doc_values::NumericDocValuesField;

    #[test]
    fn test_document_fields() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        doc.add(BinaryDocValuesField::new("title", ByteSpan::from("hello")).unwrap());
        doc.add(NumericDocValuesField::new("year", 2024i64).unwrap());

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("title").map(Field::name), Some("title"));
        assert_eq!(doc.get_binary_value("title"), Some(&ByteSpan::from("hello")));
        assert_eq!(doc.get_numeric_value("year"), Some(2024));
        assert_eq!(doc.get_numeric_value("title"), None);
        assert!(doc.get("missing").is_none());
    }

    #[test]
    fn test_repeated_names_and_removal() {
        let mut doc = Document::new()
            .with(NumericDocValuesField::new("tag", 1i64).unwrap())
            .with(NumericDocValuesField::new("tag", 2i64).unwrap())
            .with(NumericDocValuesField::new("other", 3i64).unwrap());

        assert_eq!(doc.get_all("tag").count(), 2);
        assert_eq!(doc.get_numeric_value("tag"), Some(1));
        assert_eq!(doc.get_binary_value("tag"), None);

        assert_eq!(doc.remove_fields("tag"), 2);
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.remove_fields("tag"), 0);
    }

    #[test]
    fn test_doc_values_fields() {
        let mut plain = Field::new("body", FieldType::new().into_frozen()).unwrap();
        plain.set_bytes_value(ByteSpan::from("text")).unwrap();

        let doc = Document::new()
            .with(plain)
            .with(BinaryDocValuesField::new("title", ByteSpan::from("t")).unwrap());

        let names: Vec<&str> = doc.doc_values_fields().map(Field::name).collect();
        assert_eq!(names, vec!["title"]);
    }

    #[test]
    fn test_binary_value_outlives_name() {
        let doc = Document::new()
            .with(NumericDocValuesField::new("payload", 1i64).unwrap())
            .with(BinaryDocValuesField::new("payload", ByteSpan::from("bytes")).unwrap());

        let value = {
            let name = String::from("payload");
            doc.get_binary_value(&name)
        };
        assert_eq!(value, Some(&ByteSpan::from("bytes")));
    }
}
