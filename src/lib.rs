//! Freezer - frozen, read-only record snapshots
//!
//! Freezer snapshots a typed, mutable record into a flat string map that fits
//! a key-value or text column, and later rebuilds it as a read-only record
//! that behaves like the original except that writes are refused.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use freezer::{
//!     AttributeDescriptor, FlatMapCodec, Model, ModelSchema, RecordFactory, SnapshotCodec,
//!     TypeReference, TypeTag, Value,
//! };
//!
//! let schema = Arc::new(ModelSchema::new(
//!     "Post",
//!     vec![
//!         AttributeDescriptor::typed("title", TypeTag::String),
//!         AttributeDescriptor::typed("votes_count", TypeTag::Integer),
//!     ],
//! ));
//!
//! let mut factory = RecordFactory::new();
//! factory.register(schema.clone()).unwrap();
//! let codec = FlatMapCodec::new(Arc::new(factory));
//!
//! let post = Model::new(schema, [("title", Value::from("Hello")), ("votes_count", Value::Int(15))]).unwrap();
//! let encoded = codec.encode(&post).unwrap();
//! assert_eq!(encoded.get("votes_count:integer"), Some(&Some("15".to_string())));
//!
//! let frozen = codec.decode(&TypeReference::from("post"), &encoded, false).unwrap();
//! assert_eq!(frozen.read("votes_count").unwrap(), &Value::from("15"));
//! ```
//!
//! # Architecture
//!
//! - `freezer-core`: type registry, key and value codecs, errors, the
//!   [`Record`] capability
//! - `freezer-engine`: record codecs, record factory, read-only proxy,
//!   frozen associations, configuration

pub use freezer_core::*;
pub use freezer_engine::*;
