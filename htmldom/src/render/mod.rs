//! HTML serialization of document subtrees.

use serde_json::Value;

use crate::element::{Document, Element, NodeId};

impl Document {
    /// Serialize `node` and its subtree. A fragment serializes as its children.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    /// Serialize only what is inside `node`.
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_content(node, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let Some(el) = self.element(node) else {
            self.write_content(node, out);
            return;
        };

        out.push('<');
        out.push_str(el.tag_name());
        write_attributes(el, out);
        out.push('>');
        self.write_content(node, out);
        out.push_str("</");
        out.push_str(el.tag_name());
        out.push('>');
    }

    fn write_content(&self, node: NodeId, out: &mut String) {
        // innerHTML is markup already
        if let Some(html) = self.element(node).and_then(Element::inner_html) {
            out.push_str(html);
        }
        for child in self.children(node) {
            self.write_node(*child, out);
        }
    }
}

fn write_attributes(el: &Element, out: &mut String) {
    for (name, value) in el.properties() {
        if name == "innerHTML" {
            continue;
        }
        let attr = attribute_name(name);
        match value {
            Value::Bool(true) => {
                out.push(' ');
                out.push_str(&attr);
            }
            Value::Bool(false) | Value::Null | Value::Object(_) => {}
            Value::String(s) => push_attr(out, &attr, s),
            other => push_attr(out, &attr, &other.to_string()),
        }
    }

    if !el.style().is_empty() {
        push_attr(out, "style", &el.style().css_text());
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape(value));
    out.push('"');
}

/// Map a DOM property name to its content attribute name.
pub fn attribute_name(property: &str) -> String {
    match property {
        "className" => "class".to_string(),
        "htmlFor" => "for".to_string(),
        other => other.to_ascii_lowercase(),
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
