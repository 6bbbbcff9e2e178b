//! Read-only record proxy
//!
//! [`FrozenRecord`] takes ownership of a record, marks it read-only and
//! frozen, and forwards everything else to it through the [`Record`]
//! capability. Nobody else holds the record after construction, so there is
//! no handle through which the freeze could be bypassed.
//!
//! ## States
//!
//! ```text
//! Mutable (inside FrozenRecord::new only) ──> Frozen (terminal)
//! ```
//!
//! ## Silent Mode
//!
//! A silent proxy swallows `MutationOnFrozen` and `ReadOnlyRecord` from a
//! forwarded call and leaves the record as it was. Every other failure
//! propagates in both modes.
//!
//! The proxy keeps identity to itself: it does not implement `PartialEq` or
//! `Deref` to the record, and [`FrozenRecord::ptr_eq`] compares proxies by
//! identity.

use std::fmt;

use freezer_core::{AttributeDescriptor, AttributeMap, FreezerResult, Record, Value};
use tracing::debug;

/// A permanently immutable view over an owned record
pub struct FrozenRecord {
    record: Box<dyn Record>,
    silent: bool,
}

impl FrozenRecord {
    /// Take ownership of `record` and freeze it
    pub fn new(mut record: Box<dyn Record>, silent: bool) -> Self {
        record.mark_readonly();
        record.freeze();
        FrozenRecord { record, silent }
    }

    /// [`FrozenRecord::new`] for a concrete record
    pub fn from_record<R: Record + 'static>(record: R, silent: bool) -> Self {
        Self::new(Box::new(record), silent)
    }

    /// Whether mutation failures are absorbed
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Whether the wrapped record reports itself frozen
    pub fn is_frozen(&self) -> bool {
        self.record.is_frozen()
    }

    /// Whether the wrapped record reports itself read-only
    pub fn is_readonly(&self) -> bool {
        self.record.is_readonly()
    }

    /// Type name of the wrapped record
    pub fn type_name(&self) -> &str {
        self.record.type_name()
    }

    /// Declared attributes of the wrapped record
    pub fn descriptors(&self) -> &[AttributeDescriptor] {
        self.record.descriptors()
    }

    /// All attribute values of the wrapped record
    pub fn attributes(&self) -> &AttributeMap {
        self.record.attributes()
    }

    /// The wrapped record, read-only
    pub fn record(&self) -> &dyn Record {
        self.record.as_ref()
    }

    /// Read one attribute
    ///
    /// # Errors
    ///
    /// Whatever the record returns, typically `UnknownAttribute`.
    pub fn read(&self, name: &str) -> FreezerResult<&Value> {
        self.record.read_attribute(name)
    }

    /// Forward a write to the frozen record
    ///
    /// # Errors
    ///
    /// The record's refusal (`MutationOnFrozen`) unless silent; any other
    /// failure of the record in both modes.
    pub fn write(&mut self, name: &str, value: Value) -> FreezerResult<()> {
        let result = self.record.write_attribute(name, value);
        self.absorb(result, || ())
    }

    /// Operation names the wrapped record supports
    pub fn operations(&self) -> &[&'static str] {
        self.record.operations()
    }

    /// Forward a named operation
    ///
    /// When a silent proxy absorbs a mutation refusal the call yields
    /// `Value::Null`.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` for operations the record does not support,
    /// regardless of mode.
    pub fn invoke(&mut self, operation: &str, args: &[Value]) -> FreezerResult<Value> {
        let result = self.record.invoke(operation, args);
        self.absorb(result, || Value::Null)
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &FrozenRecord) -> bool {
        std::ptr::eq(self, other)
    }

    fn absorb<T>(&self, result: FreezerResult<T>, fallback: impl FnOnce() -> T) -> FreezerResult<T> {
        match result {
            Err(err) if self.silent && err.is_mutation_refusal() => {
                debug!(
                    type_name = self.record.type_name(),
                    reason = err.reason_code(),
                    "absorbed write on frozen record"
                );
                Ok(fallback())
            }
            other => other,
        }
    }
}

impl fmt::Debug for FrozenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrozenRecord")
            .field("type_name", &self.record.type_name())
            .field("silent", &self.silent)
            .field("attributes", self.record.attributes())
            .finish()
    }
}
