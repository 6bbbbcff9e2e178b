//! Snapshot engine for Freezer
//!
//! This crate builds on `freezer-core` to turn records into frozen snapshots
//! and back:
//! - FlatMapCodec: record <-> versioned flat string map
//! - SerializedCodec: record <-> copied attribute map, for serialized columns
//! - RecordFactory: type resolution and trusted construction
//! - FrozenRecord: the read-only proxy every decoded snapshot comes back in
//! - FrozenAssociation: owner-side slot with a lazily decoded snapshot
//! - Model: schema-driven stock record
//! - FreezerConfig: TOML configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod association;
pub mod codec;
pub mod config;
pub mod factory;
pub mod model;
pub mod proxy;

pub use association::FrozenAssociation;
pub use codec::{from_json, to_json, FlatMapCodec, SerializedCodec, SnapshotCodec, FORMAT_VERSION};
pub use config::{FreezerConfig, DEFAULT_VERSION_KEY};
pub use factory::{canonical_type_name, RecordFactory, RecordType, TypeHandle, TypeReference};
pub use model::{Model, ModelSchema};
pub use proxy::FrozenRecord;
