use super::node::{Element, NodeId};
use crate::error::DomError;

#[derive(Debug, Clone)]
enum NodeKind {
    Element(Element),
    Fragment,
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An in-memory document.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Nothing is ever
/// freed: a node removed from the tree stays addressable, only disconnected.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with an empty, connected `body` root.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            body: NodeId(0),
        };
        doc.body = doc.push(NodeKind::Element(Element::new("body")));
        doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.0).ok_or(DomError::NodeNotFound(id))
    }

    // Creation

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(Element::new(tag)))
    }

    pub fn create_document_fragment(&mut self) -> NodeId {
        self.push(NodeKind::Fragment)
    }

    /// Create an element and append it to `parent` in one step.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
        self.node(parent)?;
        let child = self.create_element(tag);
        self.append_child(parent, child)
    }

    // Access

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.nodes.get(id.0)?.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Fragment => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(id.0)?.kind {
            NodeKind::Element(el) => Some(el),
            NodeKind::Fragment => None,
        }
    }

    /// Like [`element_mut`](Self::element_mut) but with a typed error.
    pub fn try_element_mut(&mut self, id: NodeId) -> Result<&mut Element, DomError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element(el) => Ok(el),
            NodeKind::Fragment => Err(DomError::NotAnElement(id)),
        }
    }

    pub fn is_fragment(&self, id: NodeId) -> bool {
        matches!(
            self.nodes.get(id.0).map(|n| &n.kind),
            Some(NodeKind::Fragment)
        )
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Walk from `id` to the root. Includes `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            if !self.contains(node) {
                break;
            }
            path.push(node);
            current = self.parent(node);
        }
        path
    }

    /// Whether the node is reachable from `body`.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.ancestors(id).last() == Some(&self.body)
    }

    // Tree mutation

    /// Append `child` as the last child of `parent`.
    ///
    /// The child is detached from its previous parent first. A fragment
    /// child hands over its children in order and is left empty.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        self.node(parent)?;
        self.node(child)?;

        if self.ancestors(parent).contains(&child) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        if self.is_fragment(child) {
            let moved = std::mem::take(&mut self.node_mut(child)?.children);
            for grandchild in moved {
                self.node_mut(grandchild)?.parent = None;
                self.attach(parent, grandchild)?;
            }
            return Ok(child);
        }

        self.detach(child)?;
        self.attach(parent, child)?;
        Ok(child)
    }

    /// Remove `child` from `parent`. The node stays addressable.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        self.node(child)?;
        let node = self.node_mut(parent)?;
        let Some(pos) = node.children.iter().position(|c| *c == child) else {
            return Err(DomError::NotAChild { parent, child });
        };
        node.children.remove(pos);
        self.node_mut(child)?.parent = None;
        Ok(child)
    }

    fn detach(&mut self, child: NodeId) -> Result<(), DomError> {
        if let Some(old_parent) = self.node(child)?.parent {
            self.node_mut(old_parent)?.children.retain(|c| *c != child);
            self.node_mut(child)?.parent = None;
        }
        Ok(())
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    // Queries

    /// Find a connected element by its `id` property, depth-first.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(self.body, &|el| el.id() == Some(id))
    }

    /// All elements under `root` (excluding `root`) with the given tag, in
    /// document order.
    pub fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_ascii_lowercase();
        let mut found = Vec::new();
        for child in self.children(root) {
            self.collect(*child, &tag, &mut found);
        }
        found
    }

    fn find(&self, node: NodeId, pred: &dyn Fn(&Element) -> bool) -> Option<NodeId> {
        if self.element(node).is_some_and(pred) {
            return Some(node);
        }
        self.children(node)
            .iter()
            .find_map(|child| self.find(*child, pred))
    }

    fn collect(&self, node: NodeId, tag: &str, found: &mut Vec<NodeId>) {
        if self.element(node).is_some_and(|el| el.tag_name() == tag) {
            found.push(node);
        }
        for child in self.children(node) {
            self.collect(*child, tag, found);
        }
    }
}
