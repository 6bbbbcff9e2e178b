//! Serialized-column codec
//!
//! For columns that store an arbitrary serialized value rather than a flat
//! string map. The record's attributes are copied as they are, typed values
//! included, and handed back to the factory on decode. Use
//! [`to_json`](super::to_json) / [`from_json`](super::from_json) to move the
//! stored form in and out of a text column.

use std::sync::Arc;

use freezer_core::{AttributeMap, FreezerResult, Record};
use tracing::debug;

use super::SnapshotCodec;
use crate::factory::{RecordFactory, TypeReference};
use crate::proxy::FrozenRecord;

/// Codec that stores a copy of the attribute map
#[derive(Debug, Clone)]
pub struct SerializedCodec {
    factory: Arc<RecordFactory>,
}

impl SerializedCodec {
    /// Create a codec
    pub fn new(factory: Arc<RecordFactory>) -> Self {
        SerializedCodec { factory }
    }
}

impl SnapshotCodec for SerializedCodec {
    type Stored = AttributeMap;

    fn factory(&self) -> &RecordFactory {
        &self.factory
    }

    fn encode(&self, record: &dyn Record) -> FreezerResult<AttributeMap> {
        Ok(record.attributes().clone())
    }

    fn decode(
        &self,
        reference: &TypeReference,
        stored: &AttributeMap,
        silent: bool,
    ) -> FreezerResult<FrozenRecord> {
        debug!(type_ref = reference.describe(), silent, "decoding serialized attributes");
        self.factory.build(reference.clone(), stored.clone(), silent)
    }
}
