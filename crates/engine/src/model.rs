//! Schema-driven record
//!
//! [`Model`] is the stock [`Record`] implementation: a type name, an ordered
//! list of declared attributes, and the attribute values. It stands in for an
//! ORM record, which is all the codec ever needs.
//!
//! ## Construction Paths
//!
//! - [`Model::new`] is guarded: undeclared names fail with `UnknownAttribute`
//!   and values the declared type rejects fail with `TypeMismatch`.
//! - [`Model::trusted`] skips both checks. The record factory uses it to
//!   rebuild snapshots, whose values are the printable strings of the codec.

use std::sync::Arc;

use freezer_core::{
    AttributeDescriptor, AttributeMap, FreezerError, FreezerResult, Record, TypeTag, Value,
};
use tracing::trace;

use crate::factory::{RecordType, TypeHandle};

/// Operations a [`Model`] answers through [`Record::invoke`]
const MODEL_OPERATIONS: &[&str] = &[
    "type_name",
    "attribute_count",
    "is_changed",
    "is_frozen",
    "is_readonly",
    "reset",
];

/// Declared shape of a model type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSchema {
    name: String,
    descriptors: Vec<AttributeDescriptor>,
}

impl ModelSchema {
    /// Create a schema
    pub fn new(name: impl Into<String>, descriptors: Vec<AttributeDescriptor>) -> Self {
        ModelSchema {
            name: name.into(),
            descriptors,
        }
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared attributes, in order
    pub fn descriptors(&self) -> &[AttributeDescriptor] {
        &self.descriptors
    }

    /// Look up a declared attribute
    pub fn descriptor(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    /// Wrap this schema in a handle the record factory can register
    pub fn into_handle(self) -> TypeHandle {
        Arc::new(self)
    }
}

impl RecordType for ModelSchema {
    fn name(&self) -> &str {
        &self.name
    }

    fn construct_trusted(
        self: Arc<Self>,
        attributes: AttributeMap,
    ) -> FreezerResult<Box<dyn Record>> {
        Ok(Box::new(Model::trusted(self, attributes)))
    }
}

/// A record whose shape comes from a [`ModelSchema`]
#[derive(Debug, Clone)]
pub struct Model {
    schema: Arc<ModelSchema>,
    attributes: AttributeMap,
    changed: bool,
    readonly: bool,
    frozen: bool,
}

impl Model {
    /// Build a model through the guarded path
    ///
    /// Declared attributes not present in `attributes` start out null.
    ///
    /// # Errors
    ///
    /// `UnknownAttribute` for undeclared names, `TypeMismatch` for values the
    /// declared type rejects. Nothing is returned on failure.
    pub fn new<I, K, V>(schema: Arc<ModelSchema>, attributes: I) -> FreezerResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut model = Self::empty(schema);
        for (name, value) in attributes {
            let name = name.into();
            let value = value.into();
            model.check_assignment(&name, &value)?;
            model.attributes.insert(name, value);
        }
        Ok(model)
    }

    /// Build a model without assignment checks
    ///
    /// Values are taken as given; names the schema does not declare are kept
    /// after the declared ones.
    pub fn trusted(schema: Arc<ModelSchema>, attributes: AttributeMap) -> Self {
        let mut model = Self::empty(schema);
        for (name, value) in attributes {
            model.attributes.insert(name, value);
        }
        trace!(
            type_name = %model.schema.name,
            attributes = model.attributes.len(),
            "built model without protection"
        );
        model
    }

    fn empty(schema: Arc<ModelSchema>) -> Self {
        let attributes = schema
            .descriptors
            .iter()
            .map(|d| (d.name.clone(), Value::Null))
            .collect();
        Model {
            schema,
            attributes,
            changed: false,
            readonly: false,
            frozen: false,
        }
    }

    /// The schema this model was built from
    pub fn schema(&self) -> &Arc<ModelSchema> {
        &self.schema
    }

    /// Whether any attribute was written since construction
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Shorthand for [`Record::read_attribute`] that yields `None` when absent
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    fn check_assignment(&self, name: &str, value: &Value) -> FreezerResult<()> {
        let descriptor = self
            .schema
            .descriptor(name)
            .ok_or_else(|| FreezerError::unknown_attribute(name))?;

        // Columns outside the type registry are not checked here; the codec
        // rejects them when the record is encoded.
        if let Some(tag) = TypeTag::from_name(&descriptor.column_type) {
            if !tag.accepts(value) {
                return Err(FreezerError::type_mismatch(tag.name(), value.type_name()));
            }
        }
        Ok(())
    }

    fn check_writable(&self, attribute: &str) -> FreezerResult<()> {
        if self.frozen {
            return Err(FreezerError::MutationOnFrozen {
                attribute: attribute.to_string(),
            });
        }
        if self.readonly {
            return Err(FreezerError::ReadOnlyRecord {
                type_name: self.schema.name.clone(),
            });
        }
        Ok(())
    }
}

impl Record for Model {
    fn type_name(&self) -> &str {
        &self.schema.name
    }

    fn descriptors(&self) -> &[AttributeDescriptor] {
        &self.schema.descriptors
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn write_attribute(&mut self, name: &str, value: Value) -> FreezerResult<()> {
        // Undeclared extras kept by trusted construction are writable but untyped
        let declared = self.schema.descriptor(name).is_some();
        if !declared && !self.attributes.contains_key(name) {
            return Err(FreezerError::unknown_attribute(name));
        }
        self.check_writable(name)?;
        if declared {
            self.check_assignment(name, &value)?;
        }
        self.attributes.insert(name.to_string(), value);
        self.changed = true;
        Ok(())
    }

    fn operations(&self) -> &[&'static str] {
        MODEL_OPERATIONS
    }

    fn invoke(&mut self, operation: &str, args: &[Value]) -> FreezerResult<Value> {
        match operation {
            "type_name" => Ok(Value::from(self.schema.name.as_str())),
            "attribute_count" => Ok(Value::Int(self.attributes.len() as i64)),
            "is_changed" => Ok(Value::Bool(self.changed)),
            "is_frozen" => Ok(Value::Bool(self.frozen)),
            "is_readonly" => Ok(Value::Bool(self.readonly)),
            "reset" => {
                let name = args
                    .first()
                    .and_then(Value::as_str)
                    .ok_or_else(|| FreezerError::type_mismatch("String", "no argument"))?;
                if !self.attributes.contains_key(name) {
                    return Err(FreezerError::unknown_attribute(name));
                }
                self.check_writable(name)?;
                let previous = self.attributes.insert(name.to_string(), Value::Null);
                self.changed = true;
                Ok(previous.unwrap_or(Value::Null))
            }
            other => Err(FreezerError::unknown_operation(other)),
        }
    }

    fn freeze(&mut self) {
        self.frozen = true;
    }

    fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn mark_readonly(&mut self) {
        self.readonly = true;
    }

    fn is_readonly(&self) -> bool {
        self.readonly
    }
}
