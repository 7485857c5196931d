use std::sync::Arc;

use log::trace;

use crate::element::{Document, NodeId};
use crate::error::DomError;

/// Pointer events an element can carry a handler for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DblClick,
    MouseOver,
}

impl EventKind {
    /// DOM event type name.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::DblClick => "dblclick",
            EventKind::MouseOver => "mouseover",
        }
    }

    /// Name of the element property the handler is assigned to.
    pub fn handler_property(self) -> &'static str {
        match self {
            EventKind::Click => "onclick",
            EventKind::DblClick => "ondblclick",
            EventKind::MouseOver => "onmouseover",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "click" => Some(EventKind::Click),
            "dblclick" => Some(EventKind::DblClick),
            "mouseover" => Some(EventKind::MouseOver),
            _ => None,
        }
    }
}

/// An event being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Node the event was dispatched at.
    pub target: NodeId,
    /// Node whose handler is currently running.
    pub current_target: NodeId,
}

/// Handler assigned to an element's `on<event>` slot.
pub type EventHandler = Arc<dyn Fn(&mut Document, &Event) + Send + Sync>;

impl Document {
    /// Assign `handler` to the `kind` slot of an element, replacing any previous one.
    pub fn set_handler<F>(&mut self, node: NodeId, kind: EventKind, handler: F) -> Result<(), DomError>
    where
        F: Fn(&mut Document, &Event) + Send + Sync + 'static,
    {
        self.try_element_mut(node)?
            .set_handler(kind, Arc::new(handler));
        Ok(())
    }

    /// Deliver an event to `target` and bubble it up through its ancestors.
    ///
    /// Each handler is cloned out before it runs so it may freely mutate the
    /// document. Returns how many handlers ran.
    pub fn dispatch(&mut self, target: NodeId, kind: EventKind) -> Result<usize, DomError> {
        if !self.contains(target) {
            return Err(DomError::NodeNotFound(target));
        }

        let mut invoked = 0;
        for current in self.ancestors(target) {
            let Some(handler) = self.element(current).and_then(|el| el.handler(kind)).cloned() else {
                continue;
            };
            trace!("dispatch {} at {} (current {})", kind.name(), target, current);
            let event = Event {
                kind,
                target,
                current_target: current,
            };
            handler(self, &event);
            invoked += 1;
        }
        Ok(invoked)
    }
}
