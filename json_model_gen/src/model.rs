//! The generated model tree.
//!
//! One [`ModelNode`] per object shape found in the sample. Nodes own their
//! children outright and are never modified after [`crate::build_model`]
//! returns them.

use crate::json_pointer::JsonPointer;

/// JSON kinds that map onto a typed field with a default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
}

impl ScalarKind {
    /// Classify a JSON value. `None` for null, arrays and objects.
    #[must_use]
    pub fn of(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(_) => Some(Self::String),
            serde_json::Value::Number(_) => Some(Self::Number),
            serde_json::Value::Bool(_) => Some(Self::Boolean),
            serde_json::Value::Null
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => None,
        }
    }

    /// Declared type in the generated source.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "NSNumber",
            Self::Boolean => "Bool",
        }
    }

    /// Accessor used to read the value off a `JSONValue`.
    #[must_use]
    pub fn accessor(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "bool",
        }
    }

    /// Literal assigned when the key is missing or has another kind.
    #[must_use]
    pub fn default_literal(self) -> &'static str {
        match self {
            Self::String => "\"\"",
            Self::Number => "0",
            Self::Boolean => "false",
        }
    }
}

/// Declared type of a list field's elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    Scalar(ScalarKind),
    /// Elements are objects with their own generated model.
    Nested(String),
    /// Elements are arrays; kept as raw JSON.
    RawJson,
    /// First element was null.
    Dynamic,
}

impl ElementType {
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Scalar(kind) => kind.type_name(),
            Self::Nested(name) => name.as_str(),
            Self::RawJson => RAW_JSON_TYPE,
            Self::Dynamic => DYNAMIC_TYPE,
        }
    }
}

pub(crate) const RAW_JSON_TYPE: &str = "JSONValue";
pub(crate) const DYNAMIC_TYPE: &str = "AnyObject";

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(ScalarKind),
    /// Array passed through untouched (array inspection off, or empty array).
    RawJson,
    /// Null or otherwise unrecognized value.
    Dynamic,
    Nested(String),
    List(ElementType),
}

impl FieldType {
    /// Type as written in the declaration, e.g. `[OrderItems]`.
    #[must_use]
    pub fn declaration(&self) -> String {
        match self {
            Self::Scalar(kind) => kind.type_name().to_string(),
            Self::RawJson => RAW_JSON_TYPE.to_string(),
            Self::Dynamic => DYNAMIC_TYPE.to_string(),
            Self::Nested(name) => name.clone(),
            Self::List(element) => format!("[{}]", element.type_name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub field_type: FieldType,
}

/// One statement of a model's initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitStatement {
    /// Assign the keyed value when it has the expected kind, else the default.
    Scalar { key: String, kind: ScalarKind },
    /// Assign the keyed JSON value as is.
    PassThrough { key: String },
    /// Construct the nested model from the keyed value.
    Nested { key: String, type_name: String },
    /// Start from an empty list and append one converted element per entry.
    List { key: String, element: ElementType },
    /// The sample root was an array; no fields can be derived from it.
    ArrayRootNote,
    /// The sample root was a scalar or null; no fields can be derived from it.
    UnexpectedRootNote,
}

/// A generated model: declaration, initializer and the nested models it uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNode {
    pub type_name: String,
    /// Where in the sample this shape was found.
    pub location: JsonPointer,
    /// In the key order of the sample object.
    pub fields: Vec<FieldDef>,
    pub initializer: Vec<InitStatement>,
    /// In the order their fields were encountered.
    pub children: Vec<ModelNode>,
}

impl ModelNode {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn child(&self, type_name: &str) -> Option<&ModelNode> {
        self.children.iter().find(|c| c.type_name == type_name)
    }

    /// Number of models below this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Every type name in the tree, depth-first, in rendering order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = vec![self.type_name.as_str()];
        for child in &self.children {
            names.extend(child.type_names());
        }
        names
    }
}
