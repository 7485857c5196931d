use std::sync::{Arc, Mutex};

use datatable::{init, renderers, PropertyBag, TableConfig, TableError};
use htmldom::{Document, EventKind, NodeId};
use serde_json::{json, Value};

fn document_with_container(id: &str) -> (Document, NodeId) {
    let mut doc = Document::new();
    let body = doc.body();
    let container = doc.append_element(body, "div").unwrap();
    doc.element_mut(container).unwrap().set_id(id);
    (doc, container)
}

fn records(value: Value) -> Vec<datatable::Record> {
    serde_json::from_value(value).unwrap()
}

fn text(doc: &Document, node: NodeId) -> &str {
    doc.element(node).unwrap().inner_html().unwrap()
}

// ============================================================================
// Assembly
// ============================================================================

#[test]
fn test_end_to_end_default_table() {
    let (mut doc, container) = document_with_container("app");
    let config = TableConfig::new(
        "app",
        records(json!([{ "name": "a", "qty": 1 }, { "name": "b", "qty": 2 }])),
    );

    let table = init(&mut doc, &config).unwrap();

    assert_eq!(doc.children(container), &[table.table]);
    assert_eq!(doc.children(table.table), &[table.thead, table.tbody]);

    let labels: Vec<_> = table.header_cells.iter().map(|th| text(&doc, *th)).collect();
    assert_eq!(labels, vec!["name", "qty"]);

    assert_eq!(table.rows.len(), 2);
    let row0: Vec<_> = table.cells(&doc, 0).iter().map(|td| text(&doc, *td)).collect();
    let row1: Vec<_> = table.cells(&doc, 1).iter().map(|td| text(&doc, *td)).collect();
    assert_eq!(row0, vec!["a", "1"]);
    assert_eq!(row1, vec!["b", "2"]);
}

#[test]
fn test_explicit_header_names_override_keys() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "name": "a", "qty": 1 }])))
        .header_names(["Name", "Quantity", "Extra"]);

    let table = init(&mut doc, &config).unwrap();

    let labels: Vec<_> = table.header_cells.iter().map(|th| text(&doc, *th)).collect();
    assert_eq!(labels, vec!["Name", "Quantity", "Extra"]);
    assert_eq!(table.cells(&doc, 0).len(), 2);
}

#[test]
fn test_counts_follow_records() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new(
        "app",
        records(json!([
            { "a": 1, "b": 2, "c": 3 },
            { "a": 4, "b": 5 },
            { "a": 6, "b": 7, "c": 8, "d": 9 },
        ])),
    );

    let table = init(&mut doc, &config).unwrap();

    assert_eq!(table.header_cells.len(), 3);
    assert_eq!(doc.children(table.tbody).len(), 3);
    assert_eq!(table.cells(&doc, 0).len(), 3);
    assert_eq!(table.cells(&doc, 1).len(), 2);
    assert_eq!(table.cells(&doc, 2).len(), 4);
}

#[test]
fn test_cells_follow_key_insertion_order() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::from_json(
        r#"{ "container": "app", "data": [{ "zeta": "z", "alpha": "a", "mid": "m" }] }"#,
    )
    .unwrap();

    let table = init(&mut doc, &config).unwrap();

    let labels: Vec<_> = table.header_cells.iter().map(|th| text(&doc, *th)).collect();
    assert_eq!(labels, vec!["zeta", "alpha", "mid"]);
    let cells: Vec<_> = table.cells(&doc, 0).iter().map(|td| text(&doc, *td)).collect();
    assert_eq!(cells, vec!["z", "a", "m"]);
}

#[test]
fn test_appended_as_last_child() {
    let (mut doc, container) = document_with_container("app");
    let existing = doc.append_element(container, "p").unwrap();
    let config = TableConfig::new("app", records(json!([{ "x": 1 }])));

    let first = init(&mut doc, &config).unwrap();
    let second = init(&mut doc, &config).unwrap();

    assert_eq!(doc.children(container), &[existing, first.table, second.table]);
}

#[test]
fn test_default_renderers_applied() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "x": 1 }])));

    let table = init(&mut doc, &config).unwrap();

    let el = doc.element(table.table).unwrap();
    assert_eq!(el.class_name(), Some(renderers::TABLE_CLASS));
    assert_eq!(el.property("cellSpacing"), Some(&json!("0")));
    assert_eq!(el.style().get("fontFamily"), Some("Arial"));
    assert_eq!(el.style().get("fontWeight"), Some("500"));

    let th = doc.element(table.header_cells[0]).unwrap();
    assert_eq!(th.class_name(), Some(renderers::COLUMN_CLASS));
    assert_eq!(th.style().get("textAlign"), Some("center"));

    let tr = doc.element(table.rows[0]).unwrap();
    assert_eq!(tr.class_name(), Some(renderers::ROW_CLASS));
    assert_eq!(tr.style().get("height"), Some("48px"));

    let td = doc.element(table.cells(&doc, 0)[0]).unwrap();
    assert_eq!(td.class_name(), Some(renderers::CELL_CLASS));
    assert!(td.style().is_empty());
}

#[test]
fn test_custom_renderers_receive_context() {
    let (mut doc, _) = document_with_container("app");
    let seen: Arc<Mutex<Vec<(Value, usize, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let cell_seen = seen.clone();

    let config = TableConfig::new(
        "app",
        records(json!([{ "name": "a", "qty": 1 }, { "name": "b", "qty": 2 }])),
    )
    .table_renderer(|| PropertyBag::new().class_name("mine"))
    .header_renderer(|i| PropertyBag::new().set("title", format!("col {i}")))
    .row_renderer(|i| PropertyBag::new().style("color", if i % 2 == 0 { "red" } else { "blue" }))
    .cell_renderer(move |value, row, key| {
        cell_seen
            .lock()
            .unwrap()
            .push((value.clone(), row, key.to_string()));
        PropertyBag::new().set("title", key)
    });

    let table = init(&mut doc, &config).unwrap();

    assert_eq!(doc.element(table.table).unwrap().class_name(), Some("mine"));
    assert!(doc.element(table.table).unwrap().style().is_empty());
    assert_eq!(
        doc.element(table.header_cells[1]).unwrap().property("title"),
        Some(&json!("col 1"))
    );
    assert_eq!(doc.element(table.rows[0]).unwrap().style().get("color"), Some("red"));
    assert_eq!(doc.element(table.rows[1]).unwrap().style().get("color"), Some("blue"));

    let td = table.cells(&doc, 1)[1];
    assert_eq!(doc.element(td).unwrap().property("title"), Some(&json!("qty")));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (json!("a"), 0, "name".to_string()),
            (json!(1), 0, "qty".to_string()),
            (json!("b"), 1, "name".to_string()),
            (json!(2), 1, "qty".to_string()),
        ]
    );
}

#[test]
fn test_cell_renderer_can_override_inner_html() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "qty": 3 }])))
        .cell_renderer(|value, _, _| PropertyBag::new().set("innerHTML", format!("<b>{value}</b>")));

    let table = init(&mut doc, &config).unwrap();
    assert_eq!(text(&doc, table.cells(&doc, 0)[0]), "<b>3</b>");
}

#[test]
fn test_cell_renderer_numeric_inner_html_kept() {
    let (mut doc, container) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "qty": 1 }, { "qty": 2.5 }])))
        .header_renderer(|_| PropertyBag::new())
        .row_renderer(|_| PropertyBag::new())
        .cell_renderer(|value, _, _| PropertyBag::new().set("innerHTML", value.clone()));

    let table = init(&mut doc, &config).unwrap();

    assert_eq!(text(&doc, table.cells(&doc, 0)[0]), "1");
    assert_eq!(text(&doc, table.cells(&doc, 1)[0]), "2.5");
    assert!(doc
        .inner_html(container)
        .contains("<tbody><tr><td>1</td></tr><tr><td>2.5</td></tr></tbody>"));
}

#[test]
fn test_serialized_markup() {
    let (mut doc, container) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "name": "a" }])))
        .table_renderer(PropertyBag::new)
        .header_renderer(|_| PropertyBag::new())
        .row_renderer(|_| PropertyBag::new().class_name("r"))
        .cell_renderer(|_, _, _| PropertyBag::new());

    init(&mut doc, &config).unwrap();

    assert_eq!(
        doc.inner_html(container),
        r#"<table><thead><th>name</th></thead><tbody><tr class="r"><td>a</td></tr></tbody></table>"#
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_container_appends_nothing() {
    let (mut doc, container) = document_with_container("app");
    let config = TableConfig::new("nope", records(json!([{ "x": 1 }])));

    let err = init(&mut doc, &config).unwrap_err();

    assert!(matches!(err, TableError::ContainerNotFound(ref id) if id == "nope"));
    assert!(doc.children(container).is_empty());
    assert!(doc.get_elements_by_tag_name(doc.body(), "table").is_empty());
}

#[test]
fn test_empty_dataset_without_names_fails() {
    let (mut doc, container) = document_with_container("app");
    let config = TableConfig::new("app", Vec::new());

    assert!(matches!(init(&mut doc, &config), Err(TableError::NoHeaderSource)));
    assert!(doc.children(container).is_empty());
}

#[test]
fn test_empty_dataset_with_names_renders_header_only() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", Vec::new()).header_names(["A", "B"]);

    let table = init(&mut doc, &config).unwrap();

    assert_eq!(table.header_cells.len(), 2);
    assert!(table.rows.is_empty());
    assert!(doc.children(table.tbody).is_empty());
}

#[test]
fn test_bag_merge_into_scalar_surfaces_error() {
    let (mut doc, container) = document_with_container("app");
    // innerHTML already holds the cell text when the bag is applied
    let config = TableConfig::new("app", records(json!([{ "x": 1 }])))
        .cell_renderer(|_, _, _| PropertyBag::new().set("innerHTML", json!({ "x": 1 })));

    let err = init(&mut doc, &config).unwrap_err();

    assert!(matches!(
        err,
        TableError::Dom(htmldom::DomError::NotAnObject(ref name)) if name == "innerHTML"
    ));
    assert!(doc.children(container).is_empty());
}

#[test]
fn test_bag_object_creates_missing_nested_property() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "x": 1 }])))
        .cell_renderer(|_, row, key| PropertyBag::new().set("dataset", json!({ "row": row, "key": key })));

    let table = init(&mut doc, &config).unwrap();

    assert_eq!(
        doc.element(table.cells(&doc, 0)[0]).unwrap().property("dataset"),
        Some(&json!({ "row": 0, "key": "x" }))
    );
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_custom_click_replaces_default() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "name": "a", "qty": 1 }])))
        .on_click(|doc, _row, cell, _default| {
            doc.element_mut(cell)
                .unwrap()
                .set_property("dataClicked", json!("yes"));
        });

    let table = init(&mut doc, &config).unwrap();
    let td = table.cells(&doc, 0)[1];
    doc.dispatch(td, EventKind::Click).unwrap();

    assert_eq!(doc.element(td).unwrap().property("dataClicked"), Some(&json!("yes")));
    assert_eq!(doc.element(table.rows[0]).unwrap().style().get("color"), None);
    assert_eq!(table.interaction_state().clicked(), None);
}

#[test]
fn test_custom_handler_can_compose_with_default() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "n": 1 }, { "n": 2 }])))
        .on_hover(|doc, row, cell, default| {
            // only highlight rows whose cell reads "2"
            if doc.element(cell).and_then(|el| el.inner_html()) == Some("2") {
                default.apply(doc, row);
            }
        });

    let table = init(&mut doc, &config).unwrap();
    doc.dispatch(table.cells(&doc, 0)[0], EventKind::MouseOver).unwrap();
    assert_eq!(table.interaction_state().hovered(), None);

    doc.dispatch(table.cells(&doc, 1)[0], EventKind::MouseOver).unwrap();
    assert_eq!(table.interaction_state().hovered(), Some(table.rows[1]));
    assert!(doc.element(table.rows[1]).unwrap().style().get("backgroundColor").is_some());
}

#[test]
fn test_handler_receives_owning_row_and_cell() {
    let (mut doc, _) = document_with_container("app");
    let seen: Arc<Mutex<Vec<(NodeId, NodeId)>>> = Arc::new(Mutex::new(Vec::new()));
    let s = seen.clone();
    let config = TableConfig::new("app", records(json!([{ "a": 1, "b": 2 }])))
        .on_dbl_click(move |_, row, cell, default| {
            assert_eq!(default.kind(), datatable::InteractionKind::DblClick);
            s.lock().unwrap().push((row, cell));
        });

    let table = init(&mut doc, &config).unwrap();
    let td = table.cells(&doc, 0)[1];
    doc.dispatch(td, EventKind::DblClick).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![(table.rows[0], td)]);
}

#[test]
fn test_default_events_style_rows() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "n": 1 }, { "n": 2 }])));

    let table = init(&mut doc, &config).unwrap();
    let (a, b) = (table.rows[0], table.rows[1]);
    let cell_a = table.cells(&doc, 0)[0];
    let cell_b = table.cells(&doc, 1)[0];

    doc.dispatch(cell_a, EventKind::Click).unwrap();
    doc.dispatch(cell_a, EventKind::DblClick).unwrap();
    let style = doc.element(a).unwrap().style();
    assert_eq!(style.get("color"), Some(datatable::behavior::CLICK_COLOR));
    assert_eq!(style.get("fontWeight"), Some(datatable::behavior::DBL_CLICK_WEIGHT));

    doc.dispatch(cell_b, EventKind::Click).unwrap();
    assert_eq!(doc.element(a).unwrap().style().get("color"), None);
    assert_eq!(
        doc.element(a).unwrap().style().get("fontWeight"),
        Some(datatable::behavior::DBL_CLICK_WEIGHT)
    );
    assert_eq!(
        doc.element(b).unwrap().style().get("color"),
        Some(datatable::behavior::CLICK_COLOR)
    );
}

#[test]
fn test_tables_keep_separate_interaction_state() {
    let (mut doc, _) = document_with_container("app");
    let config = TableConfig::new("app", records(json!([{ "n": 1 }])));

    let first = init(&mut doc, &config).unwrap();
    let second = init(&mut doc, &config).unwrap();

    doc.dispatch(first.cells(&doc, 0)[0], EventKind::Click).unwrap();
    doc.dispatch(second.cells(&doc, 0)[0], EventKind::Click).unwrap();

    // each table holds its own clicked row
    assert!(doc.element(first.rows[0]).unwrap().style().get("color").is_some());
    assert!(doc.element(second.rows[0]).unwrap().style().get("color").is_some());
    assert_eq!(first.interaction_state().clicked(), Some(first.rows[0]));
    assert_eq!(second.interaction_state().clicked(), Some(second.rows[0]));
}

#[test]
fn test_shared_interaction_state_spans_tables() {
    let (mut doc, _) = document_with_container("app");
    let shared = datatable::InteractionState::shared();
    let config = TableConfig::new("app", records(json!([{ "n": 1 }]))).interaction(shared.clone());

    let first = init(&mut doc, &config).unwrap();
    let second = init(&mut doc, &config).unwrap();

    doc.dispatch(first.cells(&doc, 0)[0], EventKind::Click).unwrap();
    doc.dispatch(second.cells(&doc, 0)[0], EventKind::Click).unwrap();

    assert_eq!(doc.element(first.rows[0]).unwrap().style().get("color"), None);
    assert!(doc.element(second.rows[0]).unwrap().style().get("color").is_some());
    assert_eq!(shared.read().unwrap().clicked(), Some(second.rows[0]));
}
