//! Record factory
//!
//! Resolves a type reference to a constructible record type and builds a
//! frozen snapshot from a flat attribute map.
//!
//! Types are registered explicitly with [`RecordFactory::register`]. A name
//! reference may use natural words (`stand_in_model`) or CamelCase
//! (`StandInModel`); both are normalized to CamelCase before lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use freezer_core::{AttributeMap, FreezerError, FreezerResult, Record};
use heck::ToUpperCamelCase;
use tracing::debug;

use crate::proxy::FrozenRecord;

/// A constructible record type
pub trait RecordType: Send + Sync + fmt::Debug {
    /// Type name (CamelCase by convention)
    fn name(&self) -> &str;

    /// Construct an instance from a flat attribute map
    ///
    /// This is the trusted path: mass-assignment and type guards the type
    /// would normally enforce are skipped.
    fn construct_trusted(self: Arc<Self>, attributes: AttributeMap)
        -> FreezerResult<Box<dyn Record>>;
}

/// Shared handle to a record type
pub type TypeHandle = Arc<dyn RecordType>;

/// A reference to a record type, either by name or by handle
#[derive(Debug, Clone)]
pub enum TypeReference {
    /// Natural-words or CamelCase name
    ByName(String),
    /// Direct handle, used as is
    ByHandle(TypeHandle),
}

impl TypeReference {
    /// Human-readable form, for error messages and logs
    pub fn describe(&self) -> &str {
        match self {
            TypeReference::ByName(name) => name,
            TypeReference::ByHandle(handle) => handle.name(),
        }
    }
}

impl From<&str> for TypeReference {
    fn from(name: &str) -> Self {
        TypeReference::ByName(name.to_string())
    }
}

impl From<String> for TypeReference {
    fn from(name: String) -> Self {
        TypeReference::ByName(name)
    }
}

impl From<TypeHandle> for TypeReference {
    fn from(handle: TypeHandle) -> Self {
        TypeReference::ByHandle(handle)
    }
}

impl From<&TypeHandle> for TypeReference {
    fn from(handle: &TypeHandle) -> Self {
        TypeReference::ByHandle(Arc::clone(handle))
    }
}

/// Canonical lookup form of a type name
pub fn canonical_type_name(name: &str) -> String {
    name.to_upper_camel_case()
}

/// Registry of record types and the trusted constructor of snapshots
#[derive(Debug, Default)]
pub struct RecordFactory {
    types: HashMap<String, TypeHandle>,
}

impl RecordFactory {
    /// Create an empty factory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record type under its canonical name
    ///
    /// # Errors
    ///
    /// Returns `DuplicateType` if a type with the same canonical name is
    /// already registered.
    pub fn register(&mut self, handle: TypeHandle) -> FreezerResult<()> {
        let canonical = canonical_type_name(handle.name());
        if self.types.contains_key(&canonical) {
            return Err(FreezerError::DuplicateType { name: canonical });
        }
        debug!(type_name = %canonical, "registered record type");
        self.types.insert(canonical, handle);
        Ok(())
    }

    /// Builder-style [`RecordFactory::register`]
    pub fn with_type(mut self, handle: TypeHandle) -> FreezerResult<Self> {
        self.register(handle)?;
        Ok(self)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether no type is registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a type reference to a handle
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` when a name does not match any registered type.
    pub fn resolve_type(&self, reference: &TypeReference) -> FreezerResult<TypeHandle> {
        match reference {
            TypeReference::ByHandle(handle) => Ok(Arc::clone(handle)),
            TypeReference::ByName(name) => self
                .types
                .get(&canonical_type_name(name))
                .cloned()
                .ok_or_else(|| FreezerError::UnknownType { name: name.clone() }),
        }
    }

    /// Construct a frozen snapshot of the referenced type
    ///
    /// # Errors
    ///
    /// `UnknownType` if the reference does not resolve, or whatever the
    /// type's trusted constructor returns.
    pub fn build(
        &self,
        reference: impl Into<TypeReference>,
        attributes: AttributeMap,
        silent: bool,
    ) -> FreezerResult<FrozenRecord> {
        let reference = reference.into();
        let handle = self.resolve_type(&reference)?;
        debug!(
            type_name = handle.name(),
            attributes = attributes.len(),
            silent,
            "building frozen record"
        );
        let record = handle.construct_trusted(attributes)?;
        Ok(FrozenRecord::new(record, silent))
    }
}
