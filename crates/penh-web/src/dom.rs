//! [`TableView`] over a live `<table>` element

use penh_app::TableView;
use penh_core::{RowId, TableCell, TableRow};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTableElement, HtmlTableRowElement};

const CHECKBOX_SELECTOR: &str = "input[type=\"checkbox\"]";

/// A permissions table in the page
#[derive(Debug)]
pub struct DomTable {
    document: Document,
    table: HtmlTableElement,
    rows: Vec<HtmlTableRowElement>,
}

impl DomTable {
    /// Snapshot the table's rows in document order
    ///
    /// `HtmlTableElement::rows()` lists head, body and foot sections in that
    /// order regardless of markup, so rows are queried instead. Rows of
    /// nested tables are skipped.
    pub fn new(document: Document, table: HtmlTableElement) -> Self {
        let candidates = match table.query_selector_all("tr") {
            Ok(nodes) => (0..nodes.length())
                .filter_map(|i| nodes.get(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .map(|row| {
                    let owner = row.closest("table").ok().flatten();
                    (row, owner)
                })
                .collect(),
            Err(e) => {
                tracing::warn!("Failed to query table rows: {:?}", e);
                Vec::new()
            }
        };
        let owner: &Element = table.as_ref();
        let rows = owned_by(candidates, owner)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlTableRowElement>().ok())
            .collect();
        Self {
            document,
            table,
            rows,
        }
    }

    pub fn row_element(&self, row: RowId) -> Option<&HtmlTableRowElement> {
        self.rows.get(row.0)
    }

    /// Read the abstract row shapes. Checkbox states are read exactly once, here.
    pub fn read_rows(&self) -> Vec<TableRow> {
        self.rows
            .iter()
            .map(|row| TableRow::new(data_cells(row).iter().map(read_cell).collect()))
            .collect()
    }

    fn header_cell(&self, row: RowId) -> Option<Element> {
        self.row_element(row)
            .and_then(|r| data_cells(r).into_iter().next())
    }

    fn insert_indicator(
        &mut self,
        row: RowId,
        class: &str,
        text: &str,
        at_start: bool,
    ) -> Option<Element> {
        let cell = self.header_cell(row)?;
        let span = self.document.create_element("span").ok()?;
        span.set_class_name(class);
        span.set_text_content(Some(text));
        let inserted = if at_start {
            cell.prepend_with_node_1(&span)
        } else {
            cell.append_with_node_1(&span)
        };
        log_js_error("insert indicator", inserted);
        Some(span)
    }
}

/// Candidates whose nearest enclosing table is `table`, in candidate order
fn owned_by<T: PartialEq>(candidates: Vec<(T, Option<T>)>, table: &T) -> Vec<T> {
    candidates
        .into_iter()
        .filter(|(_, owner)| owner.as_ref() == Some(table))
        .map(|(row, _)| row)
        .collect()
}

/// `<td>` children only; heading cells never count
fn data_cells(row: &HtmlTableRowElement) -> Vec<Element> {
    let cells = row.cells();
    (0..cells.length())
        .filter_map(|i| cells.item(i))
        .filter(|cell| cell.tag_name().eq_ignore_ascii_case("td"))
        .collect()
}

fn read_cell(cell: &Element) -> TableCell {
    let checkboxes = match cell.query_selector_all(CHECKBOX_SELECTOR) {
        Ok(nodes) => (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.checked())
            .collect(),
        Err(_) => Vec::new(),
    };
    TableCell {
        text: cell.text_content().unwrap_or_default(),
        has_colspan: cell.has_attribute("colspan"),
        checkboxes,
    }
}

fn log_js_error(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        tracing::warn!("Failed to {}: {:?}", what, e);
    }
}

impl TableView for DomTable {
    /// `None` when the header row has no data cell to hold the indicator
    type Indicator = Option<Element>;

    fn has_table_class(&self, class: &str) -> bool {
        self.table.class_list().contains(class)
    }

    fn add_table_class(&mut self, class: &str) {
        log_js_error("mark table", self.table.class_list().add_1(class));
    }

    fn add_row_class(&mut self, row: RowId, class: &str) {
        if let Some(el) = self.row_element(row) {
            log_js_error("add row class", el.class_list().add_1(class));
        }
    }

    fn add_cell_class(&mut self, row: RowId, class: &str) {
        if let Some(cell) = self.header_cell(row) {
            log_js_error("add cell class", cell.class_list().add_1(class));
        }
    }

    fn set_row_attribute(&mut self, row: RowId, name: &str, value: &str) {
        if let Some(el) = self.row_element(row) {
            log_js_error("set row attribute", el.set_attribute(name, value));
        }
    }

    fn prepend_indicator(&mut self, row: RowId, class: &str, text: &str) -> Option<Element> {
        self.insert_indicator(row, class, text, true)
    }

    fn append_indicator(&mut self, row: RowId, class: &str, text: &str) -> Option<Element> {
        self.insert_indicator(row, class, text, false)
    }

    fn set_indicator_text(&mut self, indicator: &Option<Element>, text: &str) {
        if let Some(span) = indicator {
            span.set_text_content(Some(text));
        }
    }

    fn set_row_visible(&mut self, row: RowId, visible: bool) {
        let Some(el) = self.row_element(row) else {
            return;
        };
        let style = el.style();
        let result = if visible {
            style.remove_property("display").map(|_| ())
        } else {
            style.set_property("display", "none")
        };
        log_js_error("set row visibility", result);
    }
}
