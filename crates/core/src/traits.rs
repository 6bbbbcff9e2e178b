//! The record capability
//!
//! The read-only proxy and the codecs never see a concrete record type. They
//! work against [`Record`]: read an attribute, write an attribute, enumerate
//! and invoke named operations, and the two one-way latches (read-only and
//! frozen). Anything outside this interface is an explicit
//! `UnknownOperation`, never a catch-all.

use crate::error::{FreezerError, FreezerResult};
use crate::types::{AttributeDescriptor, AttributeMap};
use crate::value::Value;
use std::fmt;

/// A typed, mutable record that can be snapshotted
///
/// Thread safety: implementations must be `Send + Sync` so a frozen snapshot
/// can be read from several threads without locking.
///
/// ## Latches
///
/// `mark_readonly` and `freeze` are one-way. Once frozen, every write must
/// fail with `MutationOnFrozen`; once read-only, every write must fail with
/// `ReadOnlyRecord` (the frozen check wins when both are set). A write to an
/// attribute the record does not have fails with `UnknownAttribute` before
/// either latch is consulted.
pub trait Record: Send + Sync + fmt::Debug {
    /// Name of the record's type, as registered with the model registry
    fn type_name(&self) -> &str;

    /// Declared attributes, in declaration order
    fn descriptors(&self) -> &[AttributeDescriptor];

    /// Current attribute values
    fn attributes(&self) -> &AttributeMap;

    /// Read one attribute
    ///
    /// # Errors
    ///
    /// Returns `UnknownAttribute` if the record does not hold `name`.
    fn read_attribute(&self, name: &str) -> FreezerResult<&Value> {
        self.attributes()
            .get(name)
            .ok_or_else(|| FreezerError::unknown_attribute(name))
    }

    /// Write one attribute
    ///
    /// # Errors
    ///
    /// `MutationOnFrozen` / `ReadOnlyRecord` once latched, `UnknownAttribute`
    /// for undeclared names, `TypeMismatch` for values the slot rejects.
    fn write_attribute(&mut self, name: &str, value: Value) -> FreezerResult<()>;

    /// Names of the operations [`Record::invoke`] understands
    fn operations(&self) -> &[&'static str] {
        &[]
    }

    /// Invoke a named operation
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperation` unless `operation` is listed by
    /// [`Record::operations`].
    fn invoke(&mut self, operation: &str, _args: &[Value]) -> FreezerResult<Value> {
        Err(FreezerError::unknown_operation(operation))
    }

    /// Refuse every further write, permanently
    fn freeze(&mut self);

    /// Whether [`Record::freeze`] has been called
    fn is_frozen(&self) -> bool;

    /// Mark the record read-only, permanently
    fn mark_readonly(&mut self);

    /// Whether [`Record::mark_readonly`] has been called
    fn is_readonly(&self) -> bool;
}
