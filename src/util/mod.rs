//! Utility types shared across the crate.

pub mod bytes;
