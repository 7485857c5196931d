//! Single-pass table assembly.

use htmldom::{Document, DomError, NodeId};
use log::{debug, warn};
use serde_json::Value;

use crate::bag::{apply_bag, PropertyBag};
use crate::behavior::{DefaultBehavior, InteractionKind, InteractionState, SharedInteraction};
use crate::config::{Record, TableConfig};
use crate::error::TableError;
use crate::renderers;

/// Nodes of a rendered table plus the interaction state its cells share.
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub table: NodeId,
    pub thead: NodeId,
    pub tbody: NodeId,
    pub header_cells: Vec<NodeId>,
    pub rows: Vec<NodeId>,
    pub interaction: SharedInteraction,
}

impl RenderedTable {
    /// Cells of body row `index`, in key order.
    pub fn cells<'d>(&self, doc: &'d Document, index: usize) -> &'d [NodeId] {
        match self.rows.get(index) {
            Some(row) => doc.children(*row),
            None => &[],
        }
    }

    /// Snapshot of which rows hold each interaction state.
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction
            .read()
            .map(|guard| *guard)
            .unwrap_or_default()
    }
}

/// Builds one table from a [`TableConfig`].
pub struct TableBuilder<'a> {
    config: &'a TableConfig,
    interaction: SharedInteraction,
}

impl<'a> TableBuilder<'a> {
    pub fn new(config: &'a TableConfig) -> Self {
        let interaction = config
            .interaction
            .clone()
            .unwrap_or_else(InteractionState::shared);
        Self {
            config,
            interaction,
        }
    }

    /// Assemble the table offscreen and append it to the container.
    ///
    /// The container is untouched unless every step succeeds.
    pub fn init(self, doc: &mut Document) -> Result<RenderedTable, TableError> {
        debug!(
            "Rendering table into '{}' ({} records)",
            self.config.container,
            self.config.data.len()
        );

        let frag = doc.create_document_fragment();
        let table = self.build_table(doc, frag)?;
        let (thead, header_cells) = self.build_header(doc, table)?;
        let (tbody, rows) = self.build_body(doc, table)?;

        let Some(container) = doc.get_element_by_id(&self.config.container) else {
            warn!("Container '{}' not found", self.config.container);
            return Err(TableError::ContainerNotFound(self.config.container.clone()));
        };
        doc.append_child(container, frag)?;

        debug!(
            "Rendered table {}: {} columns, {} rows",
            table,
            header_cells.len(),
            rows.len()
        );

        Ok(RenderedTable {
            table,
            thead,
            tbody,
            header_cells,
            rows,
            interaction: self.interaction,
        })
    }

    fn build_table(&self, doc: &mut Document, frag: NodeId) -> Result<NodeId, DomError> {
        let table = doc.append_element(frag, "table")?;
        let bag = match &self.config.table_renderer {
            Some(renderer) => renderer(),
            None => renderers::table(),
        };
        apply_bag(doc, table, &bag)?;
        Ok(table)
    }

    fn header_names(&self) -> Result<Vec<String>, TableError> {
        if let Some(names) = &self.config.headers.names {
            return Ok(names.clone());
        }
        let first = self.config.data.first().ok_or(TableError::NoHeaderSource)?;
        Ok(first.keys().cloned().collect())
    }

    fn build_header(
        &self,
        doc: &mut Document,
        table: NodeId,
    ) -> Result<(NodeId, Vec<NodeId>), TableError> {
        let names = self.header_names()?;
        let thead = doc.append_element(table, "thead")?;

        let mut cells = Vec::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            let th = doc.append_element(thead, "th")?;
            let bag = match &self.config.headers.renderer {
                Some(renderer) => renderer(index),
                None => renderers::column(),
            };
            doc.try_element_mut(th)?.set_inner_html(name.as_str());
            apply_bag(doc, th, &bag)?;
            cells.push(th);
        }
        Ok((thead, cells))
    }

    fn build_body(
        &self,
        doc: &mut Document,
        table: NodeId,
    ) -> Result<(NodeId, Vec<NodeId>), DomError> {
        let tbody = doc.append_element(table, "tbody")?;

        let mut rows = Vec::with_capacity(self.config.data.len());
        for (index, record) in self.config.data.iter().enumerate() {
            let tr = doc.append_element(tbody, "tr")?;
            let bag = match &self.config.rows.renderer {
                Some(renderer) => renderer(index),
                None => renderers::row(),
            };
            apply_bag(doc, tr, &bag)?;
            self.build_cells(doc, tr, record, index)?;
            rows.push(tr);
        }
        Ok((tbody, rows))
    }

    fn build_cells(
        &self,
        doc: &mut Document,
        tr: NodeId,
        record: &Record,
        index: usize,
    ) -> Result<(), DomError> {
        for (key, value) in record {
            let td = doc.append_element(tr, "td")?;
            let bag = self.cell_bag(value, index, key);
            doc.try_element_mut(td)?.set_inner_html(display_text(value));
            apply_bag(doc, td, &bag)?;
            for kind in InteractionKind::ALL {
                self.wire(doc, tr, td, kind)?;
            }
        }
        Ok(())
    }

    fn cell_bag(&self, value: &Value, index: usize, key: &str) -> PropertyBag {
        match &self.config.cells.renderer {
            Some(renderer) => renderer(value, index, key),
            None => renderers::cell(),
        }
    }

    /// Route `kind` events on `td` to the user handler, or straight to the default.
    fn wire(
        &self,
        doc: &mut Document,
        tr: NodeId,
        td: NodeId,
        kind: InteractionKind,
    ) -> Result<(), DomError> {
        let handler = self.config.cells.handler(kind).cloned();
        let default = DefaultBehavior::new(kind, self.interaction.clone());
        doc.set_handler(td, kind.event(), move |doc, _event| match &handler {
            Some(handler) => handler(doc, tr, td, &default),
            None => default.apply(doc, tr),
        })
    }
}

/// Render a table per `config` into `doc`.
pub fn init(doc: &mut Document, config: &TableConfig) -> Result<RenderedTable, TableError> {
    TableBuilder::new(config).init(doc)
}

/// Text a cell shows for `value`. Strings are used as-is.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
