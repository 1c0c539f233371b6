//! Consumers of document fields on the indexing side.

pub mod doc_values;

pub use doc_values::{DocValuesWriter, FieldDocValues};
