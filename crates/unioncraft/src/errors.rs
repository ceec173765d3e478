//! Error types for field ingestion and list encodings.

use std::fmt;

use crate::field::MetaKind;

/// Errors produced when converting a loosely typed field record (see
/// [crate::serde::FieldDef]) into a [crate::field::Field].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The record names neither a `type` nor a `meta`.
    MissingKind,
    /// A non-group record has no `offset`.
    MissingOffset,
    /// A `group` record has no `fields`.
    MissingGroupFields,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::MissingKind => f.write_str("field has neither a type nor a meta"),
            ConvertError::MissingOffset => f.write_str("field has no offset"),
            ConvertError::MissingGroupFields => f.write_str("group field has no member fields"),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Errors produced when encoding list layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Lists of this meta kind have no element-size encoding.
    UnsupportedMeta(MetaKind),
    /// Element-size codes are three bits wide.
    InvalidElementSize(u8),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::UnsupportedMeta(meta) => write!(f, "lists of {:?} are not supported", meta),
            ListError::InvalidElementSize(code) => {
                write!(f, "invalid list element size code {:#04x}", code)
            }
        }
    }
}

impl std::error::Error for ListError {}
