//! # Sarissa doc values
//!
//! Typed per-document value fields for the sarissa search library.
//!
//! ## Features
//!
//! - Field types that are configured once, frozen, then shared by reference
//! - Binary doc values fields holding a shared byte span
//! - Numeric doc values fields holding one canonical `i64`, with loss-free
//!   16- and 32-bit entry points
//! - An in-memory doc values buffer consuming documents of such fields
//!
//! ```
//! use sarissa_docvalues::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.add(BinaryDocValuesField::new("title", ByteSpan::from("hello")).unwrap());
//! doc.add(NumericDocValuesField::new("year", 2024i64).unwrap());
//!
//! let mut writer = DocValuesWriter::new();
//! writer.add_document(0, &doc).unwrap();
//! assert_eq!(writer.get_numeric("year", 0), Some(2024));
//! ```

pub mod document;
pub mod error;
pub mod index;
pub mod util;

pub mod prelude {
    pub use crate::document::{
        BinaryDocValuesField, DocValuesType, Document, Field, FieldType, FieldValue,
        FrozenFieldType, NumericDocValuesField,
    };
    pub use crate::error::{Result, SarissaError};
    pub use crate::index::DocValuesWriter;
    pub use crate::util::bytes::ByteSpan;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
