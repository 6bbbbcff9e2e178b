//! Core types and codecs for Freezer
//!
//! This crate defines the leaf layer of the snapshot pipeline:
//! - TypeTag: the closed registry of encodable scalar types
//! - Key codec: `(name, type)` <-> flat `escaped-name:type` key
//! - Value codec: type-gated value <-> canonical string
//! - Value: scalar attribute values
//! - Record: the capability the proxy and codecs forward to
//! - FreezerError: error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{FreezerError, FreezerResult};
pub use key::{decode_key, encode_key, KEY_SEPARATOR};
pub use traits::Record;
pub use types::{AttributeDescriptor, AttributeMap, EncodedMap, TypeTag};
pub use value::{decode_value, encode_value, Value};
