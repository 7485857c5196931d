use serde_json::{Map, Value};

/// Inline style declaration block of an element.
///
/// Declarations are keyed by their camelCase property name (`backgroundColor`)
/// and kept in the order they were first set. Assigning an empty value
/// removes the declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssStyle {
    declarations: Vec<(String, String)>,
}

impl CssStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a declaration. An empty value removes it.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if value.is_empty() {
            self.remove(&name);
            return;
        }
        match self.declarations.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.declarations.push((name, value)),
        }
    }

    /// Set a declaration from a JSON value. Null and empty strings unset it.
    pub fn set_value(&mut self, name: impl Into<String>, value: &Value) {
        let name = name.into();
        match css_value(value) {
            Some(v) => self.set(name, v),
            None => {
                self.remove(&name);
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.declarations.iter().position(|(k, _)| k == name)?;
        Some(self.declarations.remove(pos).1)
    }

    /// Merge declarations one by one, leaving the others untouched.
    pub fn merge(&mut self, entries: &Map<String, Value>) {
        for (name, value) in entries {
            self.set_value(name.as_str(), value);
        }
    }

    /// Replace every declaration with the ones parsed from `text`.
    ///
    /// Accepts `"color: red; margin-top: 4px"`. Malformed pieces are skipped.
    pub fn set_css_text(&mut self, text: &str) {
        self.declarations.clear();
        for piece in text.split(';') {
            let Some((name, value)) = piece.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            self.set(to_camel_case(name), value.trim());
        }
    }

    /// Serialize as `kebab-case: value;` pairs in declaration order.
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(k, v)| format!("{}: {};", to_kebab_case(k), v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// `backgroundColor` -> `background-color`
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `background-color` -> `backgroundColor`
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
