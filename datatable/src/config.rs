//! Table configuration.
//!
//! Every extension point is an optional function; leaving it unset selects
//! the matching default from [`renderers`](crate::renderers) or
//! [`behavior`](crate::behavior).

use std::fmt;
use std::sync::Arc;

use htmldom::{Document, NodeId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::bag::PropertyBag;
use crate::behavior::{DefaultBehavior, InteractionKind, SharedInteraction};
use crate::error::TableError;

/// One row of the dataset: column name to displayable value, in key order.
pub type Record = Map<String, Value>;

/// Produces the table element's bag.
pub type TableRenderer = Arc<dyn Fn() -> PropertyBag + Send + Sync>;

/// Produces a header cell or row bag from its index.
pub type IndexRenderer = Arc<dyn Fn(usize) -> PropertyBag + Send + Sync>;

/// Produces a cell bag from `(value, row index, column key)`.
pub type CellRenderer = Arc<dyn Fn(&Value, usize, &str) -> PropertyBag + Send + Sync>;

/// Cell event handler: `(document, row, cell, default behavior)`.
pub type CellHandler = Arc<dyn Fn(&mut Document, NodeId, NodeId, &DefaultBehavior) + Send + Sync>;

fn describe<T>(slot: &Option<T>) -> &'static str {
    if slot.is_some() { "custom" } else { "default" }
}

/// Header section options.
#[derive(Clone, Default)]
pub struct HeaderConfig {
    /// Explicit labels. Defaults to the keys of the first record.
    pub names: Option<Vec<String>>,
    pub renderer: Option<IndexRenderer>,
}

impl fmt::Debug for HeaderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderConfig")
            .field("names", &self.names)
            .field("renderer", &describe(&self.renderer))
            .finish()
    }
}

/// Body row options.
#[derive(Clone, Default)]
pub struct RowConfig {
    pub renderer: Option<IndexRenderer>,
}

impl fmt::Debug for RowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowConfig")
            .field("renderer", &describe(&self.renderer))
            .finish()
    }
}

/// Body cell options.
#[derive(Clone, Default)]
pub struct CellConfig {
    pub renderer: Option<CellRenderer>,
    pub on_click: Option<CellHandler>,
    pub on_dbl_click: Option<CellHandler>,
    pub on_hover: Option<CellHandler>,
}

impl CellConfig {
    /// The user handler for `kind`, if any.
    pub fn handler(&self, kind: InteractionKind) -> Option<&CellHandler> {
        match kind {
            InteractionKind::Click => self.on_click.as_ref(),
            InteractionKind::DblClick => self.on_dbl_click.as_ref(),
            InteractionKind::Hover => self.on_hover.as_ref(),
        }
    }
}

impl fmt::Debug for CellConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellConfig")
            .field("renderer", &describe(&self.renderer))
            .field("on_click", &describe(&self.on_click))
            .field("on_dbl_click", &describe(&self.on_dbl_click))
            .field("on_hover", &describe(&self.on_hover))
            .finish()
    }
}

/// Everything `init` needs to render one table.
#[derive(Clone, Default)]
pub struct TableConfig {
    /// Id of the element the table is appended to.
    pub container: String,
    pub data: Vec<Record>,
    pub table_renderer: Option<TableRenderer>,
    pub headers: HeaderConfig,
    pub rows: RowConfig,
    pub cells: CellConfig,
    /// Interaction state to reuse. A fresh one is created per `init` when unset.
    pub interaction: Option<SharedInteraction>,
}

impl fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("container", &self.container)
            .field("data", &format_args!("[{} records]", self.data.len()))
            .field("table_renderer", &describe(&self.table_renderer))
            .field("headers", &self.headers)
            .field("rows", &self.rows)
            .field("cells", &self.cells)
            .field("interaction", &describe(&self.interaction))
            .finish()
    }
}

impl TableConfig {
    pub fn new(container: impl Into<String>, data: Vec<Record>) -> Self {
        Self {
            container: container.into(),
            data,
            ..Default::default()
        }
    }

    /// Parse the serializable part of a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let options: TableOptions = serde_json::from_str(json)?;
        Ok(options.into())
    }

    pub fn table_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn() -> PropertyBag + Send + Sync + 'static,
    {
        self.table_renderer = Some(Arc::new(renderer));
        self
    }

    pub fn header_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn header_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(usize) -> PropertyBag + Send + Sync + 'static,
    {
        self.headers.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn row_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(usize) -> PropertyBag + Send + Sync + 'static,
    {
        self.rows.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn cell_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&Value, usize, &str) -> PropertyBag + Send + Sync + 'static,
    {
        self.cells.renderer = Some(Arc::new(renderer));
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Document, NodeId, NodeId, &DefaultBehavior) + Send + Sync + 'static,
    {
        self.cells.on_click = Some(Arc::new(handler));
        self
    }

    pub fn on_dbl_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Document, NodeId, NodeId, &DefaultBehavior) + Send + Sync + 'static,
    {
        self.cells.on_dbl_click = Some(Arc::new(handler));
        self
    }

    pub fn on_hover<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Document, NodeId, NodeId, &DefaultBehavior) + Send + Sync + 'static,
    {
        self.cells.on_hover = Some(Arc::new(handler));
        self
    }

    /// Share interaction state with other tables in the same document.
    pub fn interaction(mut self, state: SharedInteraction) -> Self {
        self.interaction = Some(state);
        self
    }
}

/// Serializable subset of [`TableConfig`].
///
/// ```json
/// { "container": "app", "data": [{ "name": "a" }], "headers": { "names": ["Name"] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableOptions {
    #[serde(alias = "div")]
    pub container: String,
    pub data: Vec<Record>,
    #[serde(default)]
    pub headers: HeaderOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
}

impl From<TableOptions> for TableConfig {
    fn from(options: TableOptions) -> Self {
        let mut config = TableConfig::new(options.container, options.data);
        config.headers.names = options.headers.names;
        config
    }
}
