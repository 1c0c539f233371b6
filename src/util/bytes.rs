//! Shared byte payloads for binary field values.
//!
//! A [`ByteSpan`] is an `(buffer, offset, length)` view over an immutable,
//! reference-counted byte buffer. Cloning a span never copies the bytes, so a
//! binary value can be handed to a field and later to the doc-values buffer
//! without duplicating it.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SarissaError};

/// An immutable view over a shared byte buffer.
///
/// Equality, ordering and hashing are defined on the viewed bytes, not on the
/// backing buffer or offset.
///
/// # Examples
///
/// ```
/// use sarissa_docvalues::util::bytes::ByteSpan;
///
/// let span = ByteSpan::from("hello");
/// assert_eq!(span.as_slice(), b"hello");
/// assert_eq!(span.len(), 5);
/// assert_eq!(span.to_string(), "[68 65 6c 6c 6f]");
/// ```
#[derive(Clone)]
pub struct ByteSpan {
    buffer: Arc<[u8]>,
    offset: usize,
    length: usize,
}

impl ByteSpan {
    /// Create a span covering the whole of `bytes`.
    pub fn new(bytes: Vec<u8>) -> Self {
        let length = bytes.len();
        ByteSpan {
            buffer: bytes.into(),
            offset: 0,
            length,
        }
    }

    /// Create an empty span.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Create a span over `length` bytes of `buffer` starting at `offset`.
    ///
    /// Fails with [`SarissaError::InvalidArgument`] when the range does not
    /// fit inside the buffer.
    pub fn with_range(buffer: Arc<[u8]>, offset: usize, length: usize) -> Result<Self> {
        let end = offset.checked_add(length).ok_or_else(|| {
            SarissaError::invalid_argument(format!(
                "byte range overflows: offset={offset} length={length}"
            ))
        })?;
        if end > buffer.len() {
            return Err(SarissaError::invalid_argument(format!(
                "byte range {offset}..{end} is out of bounds for buffer of length {}",
                buffer.len()
            )));
        }

        Ok(ByteSpan {
            buffer,
            offset,
            length,
        })
    }

    /// The viewed bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[self.offset..self.offset + self.length]
    }

    /// The shared backing buffer.
    pub fn buffer(&self) -> &Arc<[u8]> {
        &self.buffer
    }

    /// Start of the view within the backing buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of viewed bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check if the span views no bytes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Interpret the viewed bytes as UTF-8.
    pub fn utf8_to_string(&self) -> Result<String> {
        std::str::from_utf8(self.as_slice())
            .map(str::to_owned)
            .map_err(|e| SarissaError::invalid_argument(format!("bytes are not valid UTF-8: {e}")))
    }
}

impl Default for ByteSpan {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<u8>> for ByteSpan {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for ByteSpan {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl From<&str> for ByteSpan {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl From<String> for ByteSpan {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl AsRef<[u8]> for ByteSpan {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for ByteSpan {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ByteSpan {}

impl PartialOrd for ByteSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteSpan {
    // Unsigned byte order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl Hash for ByteSpan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for ByteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteSpan")
            .field("offset", &self.offset)
            .field("length", &self.length)
            .field("bytes", &self.as_slice())
            .finish()
    }
}

impl fmt::Display for ByteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, byte) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:x}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for ByteSpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de> Deserialize<'de> for ByteSpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<u8>::deserialize(deserializer).map(ByteSpan::new)
    }
}
