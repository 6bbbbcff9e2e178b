//! Snapshot codecs
//!
//! Two storage strategies for a frozen record:
//!
//! | Codec | Column | Stored form |
//! |-------|--------|-------------|
//! | [`FlatMapCodec`] | key-value (hstore-like) | [`EncodedMap`] of encoded strings |
//! | [`SerializedCodec`] | generic serialized text | [`AttributeMap`] of typed values |
//!
//! Choosing one for a given column is the schema layer's job; both decode
//! into a [`FrozenRecord`] through the [`RecordFactory`].
//!
//! [`EncodedMap`]: freezer_core::EncodedMap
//! [`AttributeMap`]: freezer_core::AttributeMap

mod flat_map;
mod serialized;

pub use flat_map::{FlatMapCodec, FORMAT_VERSION};
pub use serialized::SerializedCodec;

use std::fmt;

use freezer_core::{FreezerError, FreezerResult, Record};
use serde::{de::DeserializeOwned, Serialize};

use crate::factory::{RecordFactory, TypeReference};
use crate::proxy::FrozenRecord;

/// Whole-record encode/decode for one column storage strategy
pub trait SnapshotCodec {
    /// What the column stores
    type Stored: Clone + fmt::Debug + Serialize + DeserializeOwned;

    /// The factory decoded snapshots are built with
    fn factory(&self) -> &RecordFactory;

    /// Encode a record using its own declared attributes
    ///
    /// # Errors
    ///
    /// Codec specific; see the implementations.
    fn encode(&self, record: &dyn Record) -> FreezerResult<Self::Stored>;

    /// Rebuild a frozen snapshot of the referenced type
    ///
    /// # Errors
    ///
    /// Codec specific; see the implementations.
    fn decode(
        &self,
        reference: &TypeReference,
        stored: &Self::Stored,
        silent: bool,
    ) -> FreezerResult<FrozenRecord>;
}

/// Render a stored column value as JSON text
///
/// # Errors
///
/// Returns `Serialization` if serde_json rejects the value.
pub fn to_json<T: Serialize>(stored: &T) -> FreezerResult<String> {
    serde_json::to_string(stored).map_err(|e| FreezerError::Serialization(e.to_string()))
}

/// Parse a stored column value from JSON text
///
/// # Errors
///
/// Returns `Serialization` for text that is not valid JSON of the stored shape.
pub fn from_json<T: DeserializeOwned>(text: &str) -> FreezerResult<T> {
    serde_json::from_str(text).map_err(|e| FreezerError::Serialization(e.to_string()))
}
