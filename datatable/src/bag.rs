//! Style/attribute bags and their application to elements.

use htmldom::{Document, DomError, Element, NodeId};
use serde_json::{Map, Value};

use crate::error::TableError;

/// Property name to value, nested under `style` for inline style fields.
///
/// Top-level entries such as `className` are assigned as-is; entries set
/// through [`style`](Self::style) land in the nested `style` object and are
/// merged field by field when applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag(Map<String, Value>);

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(self, class: impl Into<String>) -> Self {
        self.set("className", Value::String(class.into()))
    }

    /// Set a top-level property.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Set one field of the nested `style` object.
    pub fn style(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let slot = self
            .0
            .entry("style")
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(style) = slot {
            style.insert(name.into(), value.into());
        }
        self
    }

    /// Ensure an (possibly empty) `style` object is present.
    pub fn with_style_block(mut self) -> Self {
        self.0
            .entry("style")
            .or_insert_with(|| Value::Object(Map::new()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn style_field(&self, name: &str) -> Option<&Value> {
        self.0.get("style")?.as_object()?.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Apply to an element.
    ///
    /// Object values are merged into the element's nested property of the
    /// same name, everything else (null included) is assigned directly.
    pub fn apply(&self, element: &mut Element) -> Result<(), DomError> {
        for (name, value) in &self.0 {
            match value {
                Value::Object(entries) => element.merge_property(name, entries)?,
                scalar => element.set_property(name, scalar.clone()),
            }
        }
        Ok(())
    }
}

impl From<Map<String, Value>> for PropertyBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for PropertyBag {
    type Error = TableError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(TableError::InvalidBag("null")),
            Value::Bool(_) => Err(TableError::InvalidBag("boolean")),
            Value::Number(_) => Err(TableError::InvalidBag("number")),
            Value::String(_) => Err(TableError::InvalidBag("string")),
            Value::Array(_) => Err(TableError::InvalidBag("array")),
        }
    }
}

/// Apply `bag` to the element behind `node`.
pub fn apply_bag(doc: &mut Document, node: NodeId, bag: &PropertyBag) -> Result<(), DomError> {
    bag.apply(doc.try_element_mut(node)?)
}
