//! Attribute schemas and argument validation

use serde::Serialize;
use serde_json::{Map, Value};

use crate::diagnostic::Diagnostic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Bool,
    #[serde(rename = "list(string)")]
    StringList,
    #[serde(rename = "map(object)")]
    ObjectMap,
}

impl AttributeType {
    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Bool => value.is_boolean(),
            Self::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            Self::ObjectMap => value
                .as_object()
                .is_some_and(|entries| entries.values().all(Value::is_object)),
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::StringList => "list of string",
            Self::ObjectMap => "map of object",
        }
    }
}

/// Who supplies an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
    /// Supplied by the caller, must be present
    Required,
    /// Supplied by the caller, may be omitted
    Optional,
    /// Filled in by the read
    Computed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub mode: AttributeMode,
    pub description: &'static str,
}

impl Attribute {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: AttributeType::String,
            mode: AttributeMode::Required,
            description,
        }
    }

    pub const fn optional(
        name: &'static str,
        kind: AttributeType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            mode: AttributeMode::Optional,
            description,
        }
    }

    pub const fn computed(
        name: &'static str,
        kind: AttributeType,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind,
            mode: AttributeMode::Computed,
            description,
        }
    }
}

/// The attributes of one data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Check caller arguments against the schema.
    ///
    /// Returns the arguments keyed by name, or every problem found.
    /// `null` counts as not set.
    pub fn validate(&self, arguments: &Value) -> Result<Arguments, Vec<Diagnostic>> {
        let empty = Map::new();
        let object = match arguments {
            Value::Object(object) => object,
            Value::Null => &empty,
            _ => {
                return Err(vec![Diagnostic::incorrect_type("arguments", "object")]);
            }
        };

        let mut diagnostics = Vec::new();
        let mut values = Map::new();

        for (name, value) in object {
            match self.attribute(name) {
                None => diagnostics.push(Diagnostic::unsupported_argument(name)),
                Some(attr) if attr.mode == AttributeMode::Computed => {
                    diagnostics.push(Diagnostic::unsupported_argument(name));
                }
                Some(_) if value.is_null() => {}
                Some(attr) if attr.kind.accepts(value) => {
                    values.insert(name.clone(), value.clone());
                }
                Some(attr) => {
                    diagnostics.push(Diagnostic::incorrect_type(attr.name, attr.kind.noun()));
                }
            }
        }

        for attr in &self.attributes {
            if attr.mode == AttributeMode::Required && !values.contains_key(attr.name) {
                let wrong_type = diagnostics
                    .iter()
                    .any(|d| d.attribute.as_deref() == Some(attr.name));
                if !wrong_type {
                    diagnostics.push(Diagnostic::missing_argument(attr.name));
                }
            }
        }

        if diagnostics.is_empty() {
            Ok(Arguments(values))
        } else {
            Err(diagnostics)
        }
    }
}

/// Validated arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Map<String, Value>);

impl Arguments {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.0.get(name).and_then(Value::as_bool)
    }

    /// A required string argument. Only valid after [`Schema::validate`].
    pub fn required(&self, name: &str) -> Result<&str, Diagnostic> {
        self.get(name)
            .ok_or_else(|| Diagnostic::missing_argument(name))
    }

    /// The arguments as a JSON object, for echoing back in read output.
    pub fn into_object(self) -> Map<String, Value> {
        self.0
    }
}
