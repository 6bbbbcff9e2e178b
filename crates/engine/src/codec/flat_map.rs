//! Flat key-value codec
//!
//! Encodes a record into one flat string map: a format version marker plus
//! one `escaped-name:type -> printable value` entry per declared attribute.
//!
//! ```text
//! { ":sv" => "1",
//!   "title:string" => "Hello World!",
//!   "votes_count:integer" => "15",
//!   "editor_id:identifier" => null }
//! ```
//!
//! Only format version "1" exists. There is no migration path yet, so any
//! other marker is rejected.

use std::sync::Arc;

use freezer_core::{
    decode_key, decode_value, encode_key, encode_value, AttributeDescriptor, AttributeMap,
    EncodedMap, FreezerError, FreezerResult, Record, Value,
};
use tracing::{debug, warn};

use super::SnapshotCodec;
use crate::config::FreezerConfig;
use crate::factory::{RecordFactory, TypeReference};
use crate::proxy::FrozenRecord;

/// The format version this codec writes and understands
pub const FORMAT_VERSION: &str = "1";

/// Codec between records and flat encoded maps
#[derive(Debug, Clone)]
pub struct FlatMapCodec {
    factory: Arc<RecordFactory>,
    version_key: String,
}

impl FlatMapCodec {
    /// Create a codec with the default configuration
    pub fn new(factory: Arc<RecordFactory>) -> Self {
        FlatMapCodec {
            factory,
            version_key: FreezerConfig::default().version_key,
        }
    }

    /// Create a codec from a configuration
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration does not validate.
    pub fn with_config(factory: Arc<RecordFactory>, config: &FreezerConfig) -> FreezerResult<Self> {
        config.validate()?;
        Ok(FlatMapCodec {
            factory,
            version_key: config.version_key.clone(),
        })
    }

    /// Key of the reserved format version entry
    pub fn version_key(&self) -> &str {
        &self.version_key
    }

    /// Encode the given attributes of a record
    ///
    /// Entries follow descriptor order, after the version marker.
    ///
    /// # Errors
    ///
    /// `UnsupportedType` for a descriptor outside the type registry,
    /// `UnknownAttribute` for a descriptor the record does not hold.
    pub fn encode_attributes(
        &self,
        record: &dyn Record,
        descriptors: &[AttributeDescriptor],
    ) -> FreezerResult<EncodedMap> {
        let mut encoded = EncodedMap::with_capacity(descriptors.len() + 1);
        encoded.insert(self.version_key.clone(), Some(FORMAT_VERSION.to_string()));

        for descriptor in descriptors {
            let tag = descriptor.type_tag()?;
            let value = record.read_attribute(&descriptor.name)?;
            encoded.insert(
                encode_key(&descriptor.name, tag.name()),
                encode_value(tag.name(), value)?,
            );
        }

        debug!(
            type_name = record.type_name(),
            entries = encoded.len(),
            "encoded record"
        );
        Ok(encoded)
    }

    /// Check the version marker and decode every other entry
    ///
    /// The input map is left untouched. Values stay in their printable form.
    ///
    /// # Errors
    ///
    /// `UnknownFormatVersion` for a missing or unknown marker, `MalformedKey`
    /// and `UnsupportedType` from the key and value codecs.
    pub fn decode_attributes(&self, encoded: &EncodedMap) -> FreezerResult<AttributeMap> {
        match encoded.get(&self.version_key) {
            Some(Some(version)) if version == FORMAT_VERSION => {}
            found => {
                let found = found.cloned().flatten();
                warn!(version = ?found, "rejected unknown serialization format");
                return Err(FreezerError::UnknownFormatVersion { found });
            }
        }

        let mut attributes = AttributeMap::with_capacity(encoded.len().saturating_sub(1));
        for (key, value) in encoded {
            if key == &self.version_key {
                continue;
            }
            let (name, type_tag) = decode_key(key)?;
            let value = decode_value(&type_tag, value.as_deref())?;
            attributes.insert(name, Value::from(value));
        }
        Ok(attributes)
    }
}

impl SnapshotCodec for FlatMapCodec {
    type Stored = EncodedMap;

    fn factory(&self) -> &RecordFactory {
        &self.factory
    }

    /// Encode a record using its declared attributes
    ///
    /// # Errors
    ///
    /// See [`FlatMapCodec::encode_attributes`].
    fn encode(&self, record: &dyn Record) -> FreezerResult<EncodedMap> {
        self.encode_attributes(record, record.descriptors())
    }

    /// Decode a flat map into a frozen snapshot
    ///
    /// # Errors
    ///
    /// See [`FlatMapCodec::decode_attributes`]; `UnknownType` from the
    /// factory.
    fn decode(
        &self,
        reference: &TypeReference,
        stored: &EncodedMap,
        silent: bool,
    ) -> FreezerResult<FrozenRecord> {
        debug!(type_ref = reference.describe(), silent, "decoding flat map");
        let attributes = self.decode_attributes(stored)?;
        self.factory.build(reference.clone(), attributes, silent)
    }
}
