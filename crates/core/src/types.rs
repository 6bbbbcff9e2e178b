//! Core types for the freezer codec
//!
//! This module defines:
//! - TypeTag: the closed type registry of encodable scalar types
//! - AttributeDescriptor: a declared `(name, type)` pair of a record type
//! - AttributeMap / EncodedMap: the flat maps flowing through the codec

use crate::error::{FreezerError, FreezerResult};
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute name to value, in declaration order
pub type AttributeMap = IndexMap<String, Value>;

/// Encoded key to encoded value (or null), in insertion order
///
/// This is the flat form stored in a key-value column. It always carries the
/// format version marker in addition to the attribute entries.
pub type EncodedMap = IndexMap<String, Option<String>>;

/// The type registry: scalar types the value codec is allowed to encode
///
/// Columns may declare other types (a key-value blob column, for instance);
/// those are rejected with `UnsupportedType` rather than passed through.
///
/// ## Canonical Names
///
/// | Tag | Name |
/// |-----|------|
/// | Identifier | `identifier` |
/// | String | `string` |
/// | Text | `text` |
/// | Integer | `integer` |
/// | Float | `float` |
/// | Decimal | `decimal` |
/// | Datetime | `datetime` |
/// | Timestamp | `timestamp` |
/// | Time | `time` |
/// | Date | `date` |
/// | Boolean | `boolean` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// Record identifier (primary or foreign key)
    Identifier,
    /// Short string
    String,
    /// Long text
    Text,
    /// Signed integer
    Integer,
    /// Floating point number
    Float,
    /// Decimal number
    Decimal,
    /// Date and time
    Datetime,
    /// Date and time, stored as a timestamp column
    Timestamp,
    /// Time of day
    Time,
    /// Calendar date
    Date,
    /// Boolean flag
    Boolean,
}

impl TypeTag {
    /// Every registry member, in canonical order
    pub const ALL: [TypeTag; 11] = [
        TypeTag::Identifier,
        TypeTag::String,
        TypeTag::Text,
        TypeTag::Integer,
        TypeTag::Float,
        TypeTag::Decimal,
        TypeTag::Datetime,
        TypeTag::Timestamp,
        TypeTag::Time,
        TypeTag::Date,
        TypeTag::Boolean,
    ];

    /// Canonical string form, used as the key suffix
    pub const fn name(&self) -> &'static str {
        match self {
            TypeTag::Identifier => "identifier",
            TypeTag::String => "string",
            TypeTag::Text => "text",
            TypeTag::Integer => "integer",
            TypeTag::Float => "float",
            TypeTag::Decimal => "decimal",
            TypeTag::Datetime => "datetime",
            TypeTag::Timestamp => "timestamp",
            TypeTag::Time => "time",
            TypeTag::Date => "date",
            TypeTag::Boolean => "boolean",
        }
    }

    /// Look up a registry member by canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        TypeTag::ALL.iter().copied().find(|tag| tag.name() == name)
    }

    /// Resolve a declared type name, rejecting anything outside the registry
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` for unknown names.
    pub fn resolve(name: &str) -> FreezerResult<Self> {
        Self::from_name(name).ok_or_else(|| FreezerError::unsupported_type(name))
    }

    /// Whether `value` can be stored in a slot of this type
    ///
    /// Null fits every slot. Integers are accepted by the decimal and float
    /// slots since they widen without loss of the printable form.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (TypeTag::Identifier | TypeTag::Integer, Value::Int(_)) => true,
            (TypeTag::String | TypeTag::Text, Value::String(_)) => true,
            (TypeTag::Float | TypeTag::Decimal, Value::Float(_) | Value::Int(_)) => true,
            (TypeTag::Datetime | TypeTag::Timestamp, Value::DateTime(_)) => true,
            (TypeTag::Time, Value::Time(_)) => true,
            (TypeTag::Date, Value::Date(_)) => true,
            (TypeTag::Boolean, Value::Bool(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = FreezerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

/// A declared attribute of a record type
///
/// The schema layer owns these; the codec consumes them in order and never
/// infers them. `column_type` is the type as declared by the column, which may
/// name a type outside the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Attribute name
    pub name: String,
    /// Declared column type
    pub column_type: String,
}

impl AttributeDescriptor {
    /// Create a descriptor from any declared type name
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        AttributeDescriptor {
            name: name.into(),
            column_type: column_type.into(),
        }
    }

    /// Create a descriptor for a registry type
    pub fn typed(name: impl Into<String>, tag: TypeTag) -> Self {
        Self::new(name, tag.name())
    }

    /// The registry type of this descriptor
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedType` if the column type is not in the registry.
    pub fn type_tag(&self) -> FreezerResult<TypeTag> {
        TypeTag::resolve(&self.column_type)
    }
}
