//! The seam between the controller and the host's table.
//!
//! The controller never touches a concrete UI tree. It talks to a
//! [`TableView`], and every state transition is expressed as a list of
//! [`ViewPatch`] commands applied through it.

use std::collections::{BTreeMap, BTreeSet};

use penh_core::{GroupId, RowId, TableRow};

/// Mutations the controller performs on the host table
#[cfg_attr(test, mockall::automock(type Indicator = usize;))]
pub trait TableView {
    /// Handle to an inserted indicator element
    type Indicator;

    fn has_table_class(&self, class: &str) -> bool;

    fn add_table_class(&mut self, class: &str);

    fn add_row_class(&mut self, row: RowId, class: &str);

    /// Add a class to the first cell of a row
    fn add_cell_class(&mut self, row: RowId, class: &str);

    fn set_row_attribute(&mut self, row: RowId, name: &str, value: &str);

    /// Insert an indicator at the start of the row's first cell
    fn prepend_indicator(&mut self, row: RowId, class: &str, text: &str) -> Self::Indicator;

    /// Insert an indicator at the end of the row's first cell
    fn append_indicator(&mut self, row: RowId, class: &str, text: &str) -> Self::Indicator;

    fn set_indicator_text(&mut self, indicator: &Self::Indicator, text: &str);

    fn set_row_visible(&mut self, row: RowId, visible: bool);
}

/// A single view mutation produced by the update function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPatch {
    AddRowClass { row: RowId, class: &'static str },
    SetRowVisible { row: RowId, visible: bool },
    SetGlyph { group: GroupId, text: String },
    SetAnnotation { group: GroupId, text: String },
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory view
// ─────────────────────────────────────────────────────────────────────────────

/// Where an indicator sits inside its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorPosition {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryIndicator {
    pub row: RowId,
    pub class: String,
    pub text: String,
    pub position: IndicatorPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRow {
    /// Text of the first cell as rendered by the host
    pub text: String,
    pub classes: BTreeSet<String>,
    pub cell_classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub visible: bool,
}

/// Headless [`TableView`] used by the inspector and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    pub table_classes: BTreeSet<String>,
    rows: Vec<MemoryRow>,
    indicators: Vec<MemoryIndicator>,
}

impl MemoryView {
    pub fn from_rows(rows: &[TableRow]) -> Self {
        let rows = rows
            .iter()
            .map(|r| MemoryRow {
                text: r.cells.first().map(|c| c.text.clone()).unwrap_or_default(),
                classes: BTreeSet::new(),
                cell_classes: BTreeSet::new(),
                attributes: BTreeMap::new(),
                visible: true,
            })
            .collect();
        Self {
            table_classes: BTreeSet::new(),
            rows,
            indicators: Vec::new(),
        }
    }

    pub fn row(&self, row: RowId) -> Option<&MemoryRow> {
        self.rows.get(row.0)
    }

    pub fn indicators(&self) -> &[MemoryIndicator] {
        &self.indicators
    }

    pub fn indicator_text(&self, indicator: usize) -> Option<&str> {
        self.indicators.get(indicator).map(|i| i.text.as_str())
    }

    /// Visible text of a header cell: leading indicators, cell text, trailing indicators
    pub fn cell_label(&self, row: RowId) -> String {
        let Some(memory_row) = self.row(row) else {
            return String::new();
        };
        let mut label = String::new();
        for ind in self.indicators_at(row, IndicatorPosition::Start) {
            label.push_str(&ind.text);
        }
        label.push_str(memory_row.text.trim());
        for ind in self.indicators_at(row, IndicatorPosition::End) {
            label.push_str(&ind.text);
        }
        label
    }

    /// Start indicators are prepended, so the most recent one comes first
    fn indicators_at(&self, row: RowId, position: IndicatorPosition) -> Vec<&MemoryIndicator> {
        let mut found: Vec<&MemoryIndicator> = self
            .indicators
            .iter()
            .filter(|i| i.row == row && i.position == position)
            .collect();
        if position == IndicatorPosition::Start {
            found.reverse();
        }
        found
    }

    fn row_mut(&mut self, row: RowId) -> Option<&mut MemoryRow> {
        let found = self.rows.get_mut(row.0);
        if found.is_none() {
            tracing::trace!("{} is outside the table", row);
        }
        found
    }

    fn insert(
        &mut self,
        row: RowId,
        class: &str,
        text: &str,
        position: IndicatorPosition,
    ) -> usize {
        self.indicators.push(MemoryIndicator {
            row,
            class: class.to_string(),
            text: text.to_string(),
            position,
        });
        self.indicators.len() - 1
    }
}

impl TableView for MemoryView {
    type Indicator = usize;

    fn has_table_class(&self, class: &str) -> bool {
        self.table_classes.contains(class)
    }

    fn add_table_class(&mut self, class: &str) {
        self.table_classes.insert(class.to_string());
    }

    fn add_row_class(&mut self, row: RowId, class: &str) {
        if let Some(r) = self.row_mut(row) {
            r.classes.insert(class.to_string());
        }
    }

    fn add_cell_class(&mut self, row: RowId, class: &str) {
        if let Some(r) = self.row_mut(row) {
            r.cell_classes.insert(class.to_string());
        }
    }

    fn set_row_attribute(&mut self, row: RowId, name: &str, value: &str) {
        if let Some(r) = self.row_mut(row) {
            r.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn prepend_indicator(&mut self, row: RowId, class: &str, text: &str) -> usize {
        self.insert(row, class, text, IndicatorPosition::Start)
    }

    fn append_indicator(&mut self, row: RowId, class: &str, text: &str) -> usize {
        self.insert(row, class, text, IndicatorPosition::End)
    }

    fn set_indicator_text(&mut self, indicator: &usize, text: &str) {
        if let Some(ind) = self.indicators.get_mut(*indicator) {
            ind.text = text.to_string();
        }
    }

    fn set_row_visible(&mut self, row: RowId, visible: bool) {
        if let Some(r) = self.row_mut(row) {
            r.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> MemoryView {
        MemoryView::from_rows(&[
            TableRow::header("  Node "),
            TableRow::permission("access content", true),
        ])
    }

    #[test]
    fn test_rows_start_visible_and_untagged() {
        let view = view();
        let row = view.row(RowId(1)).unwrap();
        assert!(row.visible);
        assert!(row.classes.is_empty());
        assert_eq!(row.text, "access content");
    }

    #[test]
    fn test_cell_label_orders_indicators() {
        let mut view = view();
        let glyph = view.prepend_indicator(RowId(0), "toggle", "▼");
        view.append_indicator(RowId(0), "count", " (1/1 active)");

        assert_eq!(view.cell_label(RowId(0)), "▼Node (1/1 active)");

        view.set_indicator_text(&glyph, "▶");
        assert_eq!(view.cell_label(RowId(0)), "▶Node (1/1 active)");
    }

    #[test]
    fn test_out_of_range_rows_are_ignored() {
        let mut view = view();
        view.add_row_class(RowId(9), "x");
        view.set_row_visible(RowId(9), false);
        assert!(view.row(RowId(9)).is_none());
        assert_eq!(view.cell_label(RowId(9)), "");
    }

    #[test]
    fn test_table_classes() {
        let mut view = view();
        assert!(!view.has_table_class("processed"));
        view.add_table_class("processed");
        assert!(view.has_table_class("processed"));
    }
}
