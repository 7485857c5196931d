use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::DomError;
use crate::event::{EventHandler, EventKind};
use crate::types::CssStyle;

/// Handle to a node owned by a [`Document`](super::Document).
///
/// Two handles are equal exactly when they name the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// An element: tag name, DOM properties, inline style and event handler slots.
#[derive(Clone)]
pub struct Element {
    tag: String,
    properties: Map<String, Value>,
    style: CssStyle,
    handlers: HashMap<EventKind, EventHandler>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut handlers: Vec<_> = self.handlers.keys().map(|k| k.handler_property()).collect();
        handlers.sort_unstable();
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("properties", &self.properties)
            .field("style", &self.style)
            .field("handlers", &handlers)
            .finish()
    }
}

/// Properties that always hold text once assigned.
const STRING_PROPERTIES: &[&str] = &["id", "className", "innerHTML"];

fn is_string_property(name: &str) -> bool {
    STRING_PROPERTIES.contains(&name)
}

/// Non-null scalars become their text form. Null is kept so it still means "unset".
fn to_dom_string(value: Value) -> Value {
    match value {
        Value::Null | Value::String(_) => value,
        other => Value::String(other.to_string()),
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            properties: Map::new(),
            style: CssStyle::new(),
            handlers: HashMap::new(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    // Properties

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Assign a property, replacing whatever it held.
    ///
    /// `style` is special: a string is parsed as CSS text and replaces every
    /// declaration, null clears the block.
    pub fn set_property(&mut self, name: &str, value: Value) {
        if name == "style" {
            match &value {
                Value::Null => self.style = CssStyle::new(),
                Value::String(text) => self.style.set_css_text(text),
                other => self.style.set_css_text(&other.to_string()),
            }
            return;
        }
        let value = if is_string_property(name) {
            to_dom_string(value)
        } else {
            value
        };
        self.properties.insert(name.to_string(), value);
    }

    /// Merge `entries` into the nested object held by `name`.
    ///
    /// `style` merges declaration by declaration. Other names merge into the
    /// object stored under that name, creating it when absent.
    pub fn merge_property(&mut self, name: &str, entries: &Map<String, Value>) -> Result<(), DomError> {
        if name == "style" {
            self.style.merge(entries);
            return Ok(());
        }
        let slot = self
            .properties
            .entry(name.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match slot {
            Value::Object(existing) => {
                for (k, v) in entries {
                    existing.insert(k.clone(), v.clone());
                }
                Ok(())
            }
            _ => Err(DomError::NotAnObject(name.to_string())),
        }
    }

    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.properties.get("id").and_then(Value::as_str)
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.properties.insert("id".into(), Value::String(id.into()));
    }

    pub fn class_name(&self) -> Option<&str> {
        self.properties.get("className").and_then(Value::as_str)
    }

    pub fn set_class_name(&mut self, class: impl Into<String>) {
        self.properties
            .insert("className".into(), Value::String(class.into()));
    }

    pub fn inner_html(&self) -> Option<&str> {
        self.properties.get("innerHTML").and_then(Value::as_str)
    }

    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.properties
            .insert("innerHTML".into(), Value::String(html.into()));
    }

    // Style

    pub fn style(&self) -> &CssStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut CssStyle {
        &mut self.style
    }

    // Handlers

    /// Assign the handler for `kind`, replacing any previous one.
    pub fn set_handler(&mut self, kind: EventKind, handler: EventHandler) {
        self.handlers.insert(kind, handler);
    }

    pub fn clear_handler(&mut self, kind: EventKind) -> Option<EventHandler> {
        self.handlers.remove(&kind)
    }

    pub fn handler(&self, kind: EventKind) -> Option<&EventHandler> {
        self.handlers.get(&kind)
    }

    pub fn has_handler(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }
}
