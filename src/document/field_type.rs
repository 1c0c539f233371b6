//! Field type descriptors.
//!
//! A [`FieldType`] describes how the indexing pipeline treats a field: whether
//! it is stored or indexed, and which doc values representation applies. Field
//! types are configured while mutable, then frozen. Once frozen, every setter
//! fails with [`SarissaError::FrozenConfiguration`].
//!
//! Fields never hold a bare `FieldType`. They hold a [`FrozenFieldType`], which
//! can only be obtained through [`FieldType::into_frozen`], so a descriptor
//! referenced by a field cannot change underneath it.
//!
//! ```
//! use sarissa_docvalues::document::doc_values_type::DocValuesType;
//! use sarissa_docvalues::document::field_type::FieldType;
//!
//! let mut field_type = FieldType::new();
//! field_type.set_stored(true).unwrap();
//! field_type.set_doc_values_type(DocValuesType::Binary).unwrap();
//!
//! let shared = field_type.into_frozen();
//! assert!(shared.is_frozen());
//! assert_eq!(shared.doc_values_type(), DocValuesType::Binary);
//! ```

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::doc_values_type::DocValuesType;
use crate::error::{Result, SarissaError};

/// Describes the indexing properties of a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldType {
    /// Whether the original value is stored.
    #[serde(default)]
    stored: bool,

    /// Whether the field is indexed for search.
    #[serde(default)]
    indexed: bool,

    /// Whether the value is analyzed before indexing.
    #[serde(default = "default_true")]
    tokenized: bool,

    /// Whether term vectors are recorded.
    #[serde(default)]
    store_term_vectors: bool,

    /// Whether length normalization values are omitted.
    #[serde(default)]
    omit_norms: bool,

    /// The doc values representation.
    #[serde(default)]
    doc_values_type: DocValuesType,

    #[serde(skip)]
    frozen: bool,
}

fn default_true() -> bool {
    true
}

impl FieldType {
    /// Create a mutable field type with default settings.
    pub fn new() -> Self {
        FieldType {
            stored: false,
            indexed: false,
            tokenized: true,
            store_term_vectors: false,
            omit_norms: false,
            doc_values_type: DocValuesType::None,
            frozen: false,
        }
    }

    /// Create a mutable field type that only declares a doc values type.
    pub fn with_doc_values_type(doc_values_type: DocValuesType) -> Self {
        FieldType {
            doc_values_type,
            ..Self::new()
        }
    }

    /// Create a mutable copy of `other`, whether or not it is frozen.
    pub fn copy_of(other: &FieldType) -> Self {
        FieldType {
            frozen: false,
            ..other.clone()
        }
    }

    /// Load a mutable field type from its JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Dump this field type as JSON. The frozen state is not included.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn check_if_frozen(&self) -> Result<()> {
        if self.frozen {
            return Err(SarissaError::frozen_configuration(
                "this FieldType is already frozen and cannot be changed",
            ));
        }
        Ok(())
    }

    /// Set whether the original value is stored.
    pub fn set_stored(&mut self, stored: bool) -> Result<()> {
        self.check_if_frozen()?;
        self.stored = stored;
        Ok(())
    }

    /// Set whether the field is indexed.
    pub fn set_indexed(&mut self, indexed: bool) -> Result<()> {
        self.check_if_frozen()?;
        self.indexed = indexed;
        Ok(())
    }

    /// Set whether the value is analyzed.
    pub fn set_tokenized(&mut self, tokenized: bool) -> Result<()> {
        self.check_if_frozen()?;
        self.tokenized = tokenized;
        Ok(())
    }

    /// Set whether term vectors are recorded.
    pub fn set_store_term_vectors(&mut self, store_term_vectors: bool) -> Result<()> {
        self.check_if_frozen()?;
        self.store_term_vectors = store_term_vectors;
        Ok(())
    }

    /// Set whether norms are omitted.
    pub fn set_omit_norms(&mut self, omit_norms: bool) -> Result<()> {
        self.check_if_frozen()?;
        self.omit_norms = omit_norms;
        Ok(())
    }

    /// Set the doc values representation.
    pub fn set_doc_values_type(&mut self, doc_values_type: DocValuesType) -> Result<()> {
        self.check_if_frozen()?;
        self.doc_values_type = doc_values_type;
        Ok(())
    }

    /// Make this field type permanently immutable. Calling it again is a no-op.
    pub fn freeze(&mut self) {
        if !self.frozen {
            log::debug!("freezing field type {{{}}}", self);
            self.frozen = true;
        }
    }

    /// Freeze this field type and publish it for sharing between fields.
    pub fn into_frozen(mut self) -> FrozenFieldType {
        self.freeze();
        FrozenFieldType(Arc::new(self))
    }

    /// Check if this field type has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Check if the original value is stored.
    pub fn stored(&self) -> bool {
        self.stored
    }

    /// Check if the field is indexed.
    pub fn indexed(&self) -> bool {
        self.indexed
    }

    /// Check if the value is analyzed.
    pub fn tokenized(&self) -> bool {
        self.tokenized
    }

    /// Check if term vectors are recorded.
    pub fn store_term_vectors(&self) -> bool {
        self.store_term_vectors
    }

    /// Check if norms are omitted.
    pub fn omit_norms(&self) -> bool {
        self.omit_norms
    }

    /// Get the doc values representation.
    pub fn doc_values_type(&self) -> DocValuesType {
        self.doc_values_type
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::new()
    }
}

// The frozen flag is lifecycle state, not configuration.
impl PartialEq for FieldType {
    fn eq(&self, other: &Self) -> bool {
        self.stored == other.stored
            && self.indexed == other.indexed
            && self.tokenized == other.tokenized
            && self.store_term_vectors == other.store_term_vectors
            && self.omit_norms == other.omit_norms
            && self.doc_values_type == other.doc_values_type
    }
}

impl Eq for FieldType {}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.stored, "stored"),
            (self.indexed, "indexed"),
            (self.indexed && self.tokenized, "tokenized"),
            (self.store_term_vectors, "store_term_vectors"),
            (self.omit_norms, "omit_norms"),
        ];
        let mut parts: Vec<String> = flags
            .iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, name)| name.to_string())
            .collect();
        if self.doc_values_type.has_doc_values() {
            parts.push(format!("doc_values_type={}", self.doc_values_type));
        }
        f.write_str(&parts.join(","))
    }
}

/// A frozen [`FieldType`] shared by reference between fields and threads.
///
/// Cloning is cheap and never copies the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenFieldType(Arc<FieldType>);

impl FrozenFieldType {
    /// Check if two handles point at the same descriptor instance.
    pub fn ptr_eq(&self, other: &FrozenFieldType) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for FrozenFieldType {
    type Target = FieldType;

    fn deref(&self) -> &FieldType {
        &self.0
    }
}

impl AsRef<FieldType> for FrozenFieldType {
    fn as_ref(&self) -> &FieldType {
        &self.0
    }
}

impl From<FieldType> for FrozenFieldType {
    fn from(field_type: FieldType) -> Self {
        field_type.into_frozen()
    }
}
