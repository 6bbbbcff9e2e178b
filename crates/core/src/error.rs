//! Error types for the freezer codec
//!
//! Every failure the codec, factory, or proxy can surface is a variant of
//! [`FreezerError`]. We use `thiserror` for the `Display` and `Error` impls.
//!
//! ## Propagation
//!
//! All errors are local and recoverable: they go back to the immediate caller
//! and nothing is retried. The one exception is the read-only proxy in silent
//! mode, which absorbs the two mutation-refusal kinds
//! (see [`FreezerError::is_mutation_refusal`]).

use thiserror::Error;

/// Result type alias for freezer operations
pub type FreezerResult<T> = std::result::Result<T, FreezerError>;

/// Error types for snapshot encoding, decoding and access
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FreezerError {
    /// An encoded key has no `name:type` boundary
    #[error("Malformed key: {key:?} has no type suffix")]
    MalformedKey {
        /// The offending encoded key
        key: String,
    },

    /// The type is not a member of the type registry
    #[error("Do not know how to encode or decode type '{type_name}'")]
    UnsupportedType {
        /// The rejected type name
        type_name: String,
    },

    /// The format version marker is missing or not understood
    #[error("Unknown serialization format {}", found.as_deref().unwrap_or("<missing>"))]
    UnknownFormatVersion {
        /// The marker value found in the map, if any
        found: Option<String>,
    },

    /// A type reference could not be resolved to a constructible type
    #[error("Unknown record type '{name}'")]
    UnknownType {
        /// The unresolved reference
        name: String,
    },

    /// A value or record does not satisfy the declared type of its slot
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// What the slot declares
        expected: String,
        /// What was supplied
        actual: String,
    },

    /// A write was attempted against a frozen record
    #[error("can't modify frozen record (attribute '{attribute}')")]
    MutationOnFrozen {
        /// Attribute the write targeted
        attribute: String,
    },

    /// A write was attempted against a record marked read-only
    #[error("{type_name} is marked as readonly")]
    ReadOnlyRecord {
        /// Type name of the record
        type_name: String,
    },

    /// The record does not declare the attribute
    #[error("Unknown attribute '{name}'")]
    UnknownAttribute {
        /// The attribute name
        name: String,
    },

    /// The record does not support the named operation
    #[error("Undefined operation '{name}'")]
    UnknownOperation {
        /// The operation name
        name: String,
    },

    /// Two record types were registered under the same name
    #[error("Record type '{name}' is already registered")]
    DuplicateType {
        /// The canonical type name
        name: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Column payload could not be serialized or deserialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl FreezerError {
    /// Build an `UnsupportedType` error
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        FreezerError::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Build a `TypeMismatch` error
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        FreezerError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Build an `UnknownAttribute` error
    pub fn unknown_attribute(name: impl Into<String>) -> Self {
        FreezerError::UnknownAttribute { name: name.into() }
    }

    /// Build an `UnknownOperation` error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        FreezerError::UnknownOperation { name: name.into() }
    }

    /// True for the failures a silent proxy may swallow
    ///
    /// Only the generic frozen-write failure and the record-specific
    /// read-only failure qualify.
    pub fn is_mutation_refusal(&self) -> bool {
        matches!(
            self,
            FreezerError::MutationOnFrozen { .. } | FreezerError::ReadOnlyRecord { .. }
        )
    }

    /// Stable reason code, suitable for logs and metrics labels
    pub fn reason_code(&self) -> &'static str {
        match self {
            FreezerError::MalformedKey { .. } => "malformed_key",
            FreezerError::UnsupportedType { .. } => "unsupported_type",
            FreezerError::UnknownFormatVersion { .. } => "unknown_format_version",
            FreezerError::UnknownType { .. } => "unknown_type",
            FreezerError::TypeMismatch { .. } => "type_mismatch",
            FreezerError::MutationOnFrozen { .. } => "mutation_on_frozen",
            FreezerError::ReadOnlyRecord { .. } => "readonly_record",
            FreezerError::UnknownAttribute { .. } => "unknown_attribute",
            FreezerError::UnknownOperation { .. } => "unknown_operation",
            FreezerError::DuplicateType { .. } => "duplicate_type",
            FreezerError::Config(_) => "config",
            FreezerError::Serialization(_) => "serialization",
        }
    }
}
