//! Default interaction behaviors and the state they track.
//!
//! Each interaction kind has at most one row holding it. Moving the state to
//! a new row first clears the marker it left on the previous holder. The
//! three kinds are tracked independently and touch different style fields,
//! so one row can show all three at once.

use std::sync::{Arc, RwLock};

use htmldom::{Document, EventKind, NodeId};
use log::{trace, warn};

/// Background of the hovered row.
pub const HOVER_BACKGROUND: &str = "rgba(232,240,254)";
/// Text color of the clicked row.
pub const CLICK_COLOR: &str = "rgba(25,103,210)";
/// Font weight of the double-clicked row.
pub const DBL_CLICK_WEIGHT: &str = "600";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    Click,
    DblClick,
    Hover,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 3] = [
        InteractionKind::Click,
        InteractionKind::DblClick,
        InteractionKind::Hover,
    ];

    /// DOM event that triggers this interaction on a cell.
    pub fn event(self) -> EventKind {
        match self {
            InteractionKind::Click => EventKind::Click,
            InteractionKind::DblClick => EventKind::DblClick,
            InteractionKind::Hover => EventKind::MouseOver,
        }
    }

    /// Style fields reset on the row losing this state.
    fn cleared_fields(self) -> &'static [&'static str] {
        match self {
            InteractionKind::Click => &["color"],
            InteractionKind::DblClick => &["fontWeight"],
            InteractionKind::Hover => &["color", "backgroundColor"],
        }
    }

    /// Style field and value set on the row gaining this state.
    fn marker(self) -> (&'static str, &'static str) {
        match self {
            InteractionKind::Click => ("color", CLICK_COLOR),
            InteractionKind::DblClick => ("fontWeight", DBL_CLICK_WEIGHT),
            InteractionKind::Hover => ("backgroundColor", HOVER_BACKGROUND),
        }
    }
}

/// Which row currently holds each interaction state. `None` is inert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    clicked: Option<NodeId>,
    double_clicked: Option<NodeId>,
    hovered: Option<NodeId>,
}

/// Interaction state captured by a table's cell handlers.
///
/// Node handles are only meaningful inside one [`Document`], so a shared
/// state should only be handed to tables rendered into the same document.
pub type SharedInteraction = Arc<RwLock<InteractionState>>;

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state behind a lock, ready to hand to handlers.
    pub fn shared() -> SharedInteraction {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn clicked(&self) -> Option<NodeId> {
        self.clicked
    }

    pub fn double_clicked(&self) -> Option<NodeId> {
        self.double_clicked
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    pub fn holder(&self, kind: InteractionKind) -> Option<NodeId> {
        match kind {
            InteractionKind::Click => self.clicked,
            InteractionKind::DblClick => self.double_clicked,
            InteractionKind::Hover => self.hovered,
        }
    }

    fn slot_mut(&mut self, kind: InteractionKind) -> &mut Option<NodeId> {
        match kind {
            InteractionKind::Click => &mut self.clicked,
            InteractionKind::DblClick => &mut self.double_clicked,
            InteractionKind::Hover => &mut self.hovered,
        }
    }
}

/// The built-in behavior for one interaction kind.
///
/// Handed to user handlers so they can still run it.
#[derive(Debug, Clone)]
pub struct DefaultBehavior {
    kind: InteractionKind,
    state: SharedInteraction,
}

impl DefaultBehavior {
    pub fn new(kind: InteractionKind, state: SharedInteraction) -> Self {
        Self { kind, state }
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// Move this kind's state to `row`. No-op when `row` already holds it.
    pub fn apply(&self, doc: &mut Document, row: NodeId) {
        if doc.element(row).is_none() {
            warn!("{:?} default ignored: {} is not an element", self.kind, row);
            return;
        }

        let Ok(mut state) = self.state.write() else {
            warn!("{:?} default ignored: interaction state poisoned", self.kind);
            return;
        };

        let slot = state.slot_mut(self.kind);
        if *slot == Some(row) {
            return;
        }

        if let Some(previous) = slot.replace(row) {
            trace!("{:?}: clearing {}", self.kind, previous);
            if let Some(el) = doc.element_mut(previous) {
                for field in self.kind.cleared_fields() {
                    el.style_mut().remove(field);
                }
            }
        }

        trace!("{:?}: marking {}", self.kind, row);
        let (field, value) = self.kind.marker();
        if let Some(el) = doc.element_mut(row) {
            el.style_mut().set(field, value);
        }
    }
}

/// Hover default: highlight `row`'s background.
pub fn hover_default(doc: &mut Document, state: &SharedInteraction, row: NodeId) {
    DefaultBehavior::new(InteractionKind::Hover, state.clone()).apply(doc, row);
}

/// Click default: accent `row`'s text color.
pub fn click_default(doc: &mut Document, state: &SharedInteraction, row: NodeId) {
    DefaultBehavior::new(InteractionKind::Click, state.clone()).apply(doc, row);
}

/// Double-click default: embolden `row`.
pub fn dbl_click_default(doc: &mut Document, state: &SharedInteraction, row: NodeId) {
    DefaultBehavior::new(InteractionKind::DblClick, state.clone()).apply(doc, row);
}
