//! Frozen associations
//!
//! A [`FrozenAssociation`] is the owner-side slot for one snapshot: it holds
//! the raw column value, the codec that reads and writes it, and a cached
//! decoded [`FrozenRecord`].
//!
//! ## Defaults
//!
//! | Option | Default |
//! |--------|---------|
//! | target type | the association name |
//! | column | `frozen_<name>` |
//! | silent | `false` |
//!
//! The cache is per slot. It is filled on the first read and dropped whenever
//! the column changes through [`FrozenAssociation::set`] or
//! [`FrozenAssociation::load`].

use freezer_core::{FreezerError, FreezerResult, Record};
use once_cell::unsync::OnceCell;
use tracing::trace;

use crate::codec::SnapshotCodec;
use crate::config::FreezerConfig;
use crate::factory::{canonical_type_name, TypeReference};
use crate::proxy::FrozenRecord;

/// An owner-side slot holding one frozen snapshot
#[derive(Debug)]
pub struct FrozenAssociation<C: SnapshotCodec> {
    name: String,
    column_name: String,
    target: TypeReference,
    silent: bool,
    codec: C,
    column: Option<C::Stored>,
    cache: OnceCell<Option<FrozenRecord>>,
}

impl<C: SnapshotCodec> FrozenAssociation<C> {
    /// Create an empty slot with default options
    pub fn new(name: impl Into<String>, codec: C) -> Self {
        let name = name.into();
        FrozenAssociation {
            column_name: format!("frozen_{}", name),
            target: TypeReference::ByName(name.clone()),
            silent: false,
            name,
            codec,
            column: None,
            cache: OnceCell::new(),
        }
    }

    /// Create an empty slot taking its silent default from `config`
    pub fn configured(name: impl Into<String>, codec: C, config: &FreezerConfig) -> Self {
        Self::new(name, codec).silent(config.silent)
    }

    /// Set the target record type
    pub fn class_name(mut self, target: impl Into<TypeReference>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the owner column the snapshot is stored in
    pub fn column_name(mut self, column_name: impl Into<String>) -> Self {
        self.column_name = column_name.into();
        self
    }

    /// Set silent mode for decoded snapshots
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Association name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owner column name
    pub fn column(&self) -> &str {
        &self.column_name
    }

    /// Whether decoded snapshots are silent
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Raw column value, for persisting the owner
    pub fn column_value(&self) -> Option<&C::Stored> {
        self.column.as_ref()
    }

    /// Replace the raw column value, e.g. when the owner is loaded
    pub fn load(&mut self, stored: Option<C::Stored>) {
        self.column = stored;
        self.reset();
    }

    /// Drop the cached snapshot
    pub fn reset(&mut self) {
        self.cache = OnceCell::new();
    }

    /// The frozen snapshot, decoded on first access
    ///
    /// # Errors
    ///
    /// Whatever the codec's decode returns. A failed decode is not cached.
    pub fn get(&self) -> FreezerResult<Option<&FrozenRecord>> {
        let cached = self.cache.get_or_try_init(|| self.decode_column())?;
        Ok(cached.as_ref())
    }

    /// Mutable access to the frozen snapshot
    ///
    /// Writes through it are still refused (or absorbed, when silent).
    ///
    /// # Errors
    ///
    /// Whatever the codec's decode returns.
    pub fn get_mut(&mut self) -> FreezerResult<Option<&mut FrozenRecord>> {
        self.get()?;
        Ok(self.cache.get_mut().and_then(Option::as_mut))
    }

    /// Snapshot `record` into the column, or clear it with `None`
    ///
    /// `record` itself is only read; it is neither frozen nor marked
    /// read-only. Returns the new frozen copy.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `record` is not of the target type; codec errors
    /// from encoding or decoding. The slot is unchanged on failure.
    pub fn set(&mut self, record: Option<&dyn Record>) -> FreezerResult<Option<&FrozenRecord>> {
        let (stored, snapshot) = match record {
            Some(record) => {
                self.check_target(record)?;
                let stored = self.codec.encode(record)?;
                let snapshot = self.codec.decode(&self.target, &stored, self.silent)?;
                (Some(stored), Some(snapshot))
            }
            None => (None, None),
        };
        self.column = stored;
        self.cache = OnceCell::new();
        // Freshly emptied, so this cannot be rejected
        let _ = self.cache.set(snapshot);
        Ok(self.cache.get().and_then(Option::as_ref))
    }

    fn check_target(&self, record: &dyn Record) -> FreezerResult<()> {
        let expected = self.codec.factory().resolve_type(&self.target)?;
        let expected = canonical_type_name(expected.name());
        let actual = canonical_type_name(record.type_name());
        if expected != actual {
            return Err(FreezerError::type_mismatch(expected, actual));
        }
        Ok(())
    }

    fn decode_column(&self) -> FreezerResult<Option<FrozenRecord>> {
        trace!(association = %self.name, "frozen association cache miss");
        self.column
            .as_ref()
            .map(|stored| self.codec.decode(&self.target, stored, self.silent))
            .transpose()
    }
}
