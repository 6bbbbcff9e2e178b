//! Value types and the value codec
//!
//! This module defines:
//! - Value: the scalar values a record attribute can hold
//! - encode_value / decode_value: the type-gated string codec
//!
//! ## Canonical String Form
//!
//! | Value | Encoded |
//! |-------|---------|
//! | `Bool(true)` | `true` |
//! | `Int(-1)` | `-1` |
//! | `Float(1.5)` | `1.5` |
//! | `Float(1.0)` | `1.0` |
//! | `String(s)` | `s`, verbatim |
//! | `DateTime(t)` | `2024-01-02 03:04:05 UTC` |
//! | `Date(d)` | `2024-01-02` |
//! | `Time(t)` | `03:04:05` |
//!
//! Decoding is an identity pass-through on that printable form. Turning
//! `"15"` back into an integer is the receiving record's job, not the codec's.

use crate::error::FreezerResult;
use crate::types::TypeTag;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar attribute value
///
/// There are no nested variants: the codec only ever deals with flat scalar
/// attributes of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// UTC date and time
    DateTime(DateTime<Utc>),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
}

impl Value {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::DateTime(_) => "DateTime",
            Value::Date(_) => "Date",
            Value::Time(_) => "Time",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Canonical printable form, `None` for null
    pub fn to_canonical_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            // Whole floats keep a fractional digit so they never read as integers
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
            Value::DateTime(t) => write!(f, "{}", t),
            Value::Date(d) => write!(f, "{}", d),
            Value::Time(t) => write!(f, "{}", t),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::DateTime(t)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Value::Time(t)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

// ============================================================================
// Value codec
// ============================================================================

/// Encode a value for a slot of the given declared type
///
/// # Errors
///
/// Returns `UnsupportedType` when `column_type` is not in the registry, for
/// null and non-null values alike.
pub fn encode_value(column_type: &str, value: &Value) -> FreezerResult<Option<String>> {
    TypeTag::resolve(column_type)?;
    Ok(value.to_canonical_string())
}

/// Decode an encoded value for a slot of the given declared type
///
/// The printable form is returned unchanged.
///
/// # Errors
///
/// Returns `UnsupportedType` when `column_type` is not in the registry.
pub fn decode_value(column_type: &str, value: Option<&str>) -> FreezerResult<Option<String>> {
    TypeTag::resolve(column_type)?;
    Ok(value.map(str::to_string))
}
