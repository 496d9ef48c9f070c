//! Walk a sample JSON value and build the [`ModelNode`] tree.
//!
//! One depth-first pass. Each object shape becomes a node; object fields and
//! arrays whose first element is an object spawn child nodes.

use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::error::JsonModelGenError;
use crate::json_pointer::JsonPointer;
use crate::model::{ElementType, FieldDef, FieldType, InitStatement, ModelNode, ScalarKind};
use crate::naming::{NameRegistry, check_field_key};
use crate::settings::GenerateSettings;

/// Build the model tree for `value` with `root_name` as the root type name.
///
/// # Errors
///
/// Returns `JsonModelGenError::InvalidTypeName` for an unusable root name,
/// `JsonModelGenError::InvalidFieldKey` when a nested model cannot be named
/// from its key, and `JsonModelGenError::TypeNameCollision` when two nested
/// models derive the same name.
pub fn build_model(
    value: &Value,
    root_name: &str,
    settings: &GenerateSettings,
) -> Result<ModelNode, JsonModelGenError> {
    let mut registry: NameRegistry = NameRegistry::new()?;
    registry.register_root(root_name)?;
    let mut builder: Builder<'_> = Builder {
        settings,
        registry: &mut registry,
    };
    builder.node(value, root_name, JsonPointer::root())
}

struct Builder<'a> {
    settings: &'a GenerateSettings,
    registry: &'a mut NameRegistry,
}

impl Builder<'_> {
    fn node(
        &mut self,
        value: &Value,
        type_name: &str,
        location: JsonPointer,
    ) -> Result<ModelNode, JsonModelGenError> {
        let mut node: ModelNode = ModelNode {
            type_name: type_name.to_string(),
            location,
            fields: Vec::new(),
            initializer: Vec::new(),
            children: Vec::new(),
        };

        match value {
            Value::Array(_) => node.initializer.push(InitStatement::ArrayRootNote),
            Value::Object(object) => self.object_fields(object, &mut node)?,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                node.initializer.push(InitStatement::UnexpectedRootNote);
            }
        }

        debug!(
            type_name = %node.type_name,
            location = %node.location,
            fields = node.fields.len(),
            children = node.children.len(),
            "built model"
        );
        Ok(node)
    }

    fn object_fields(
        &mut self,
        object: &Map<String, Value>,
        node: &mut ModelNode,
    ) -> Result<(), JsonModelGenError> {
        for (key, sub_value) in object {
            let location: JsonPointer = node.location.child(key);
            check_field_key(key, &location)?;
            let field_type: FieldType = match (ScalarKind::of(sub_value), sub_value) {
                (Some(kind), _) => {
                    node.initializer.push(InitStatement::Scalar {
                        key: key.clone(),
                        kind,
                    });
                    FieldType::Scalar(kind)
                }
                (None, Value::Array(items)) => self.array_field(key, items, &location, node)?,
                (None, Value::Object(_)) => {
                    let child_name: String =
                        self.registry.derive(&node.type_name, key, &location)?;
                    let child: ModelNode = self.node(sub_value, &child_name, location)?;
                    node.children.push(child);
                    node.initializer.push(InitStatement::Nested {
                        key: key.clone(),
                        type_name: child_name.clone(),
                    });
                    FieldType::Nested(child_name)
                }
                (None, _) => FieldType::Dynamic,
            };
            trace!(
                model = %node.type_name,
                field = %key,
                field_type = %field_type.declaration(),
                "field"
            );
            node.fields.push(FieldDef {
                name: key.clone(),
                field_type,
            });
        }
        Ok(())
    }

    /// Type an array field. Only the first element is sampled.
    fn array_field(
        &mut self,
        key: &str,
        items: &[Value],
        location: &JsonPointer,
        node: &mut ModelNode,
    ) -> Result<FieldType, JsonModelGenError> {
        let first: Option<&Value> = items.first();
        let Some(first) = first.filter(|_| self.settings.inspect_arrays) else {
            node.initializer.push(InitStatement::PassThrough {
                key: key.to_string(),
            });
            return Ok(FieldType::RawJson);
        };

        if items.iter().skip(1).any(|item| !same_kind(first, item)) {
            warn!(
                model = %node.type_name,
                location = %location,
                "array elements differ in kind; typing from the first element only"
            );
        }

        let element: ElementType = match (ScalarKind::of(first), first) {
            (Some(kind), _) => ElementType::Scalar(kind),
            (None, Value::Array(_)) => ElementType::RawJson,
            (None, Value::Object(_)) => {
                let child_name: String = self.registry.derive(&node.type_name, key, location)?;
                let child: ModelNode = self.node(first, &child_name, location.index(0))?;
                node.children.push(child);
                ElementType::Nested(child_name)
            }
            (None, _) => ElementType::Dynamic,
        };

        node.initializer.push(InitStatement::List {
            key: key.to_string(),
            element: element.clone(),
        });
        Ok(FieldType::List(element))
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}
