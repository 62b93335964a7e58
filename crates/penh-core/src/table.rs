//! Abstract table shapes and the pure row classifier.
//!
//! Every adapter (browser DOM, saved markup, tests) reduces its table to a
//! sequence of [`TableRow`]s. Only data cells are represented; heading cells
//! never count towards a row's shape.

/// Zero-based document index of a row within its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// A single data cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    /// Text content of the cell, untrimmed
    pub text: String,

    /// Whether the cell carries a `colspan` attribute (any value)
    pub has_colspan: bool,

    /// Checked state of every checkbox control inside the cell, in document order
    pub checkboxes: Vec<bool>,
}

impl TableCell {
    /// Plain text cell
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Cell spanning several columns, as used by module header rows
    pub fn spanning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            has_colspan: true,
            checkboxes: Vec::new(),
        }
    }

    /// Cell holding one checkbox
    pub fn checkbox(checked: bool) -> Self {
        Self {
            checkboxes: vec![checked],
            ..Self::default()
        }
    }
}

/// An ordered sequence of data cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Module header row: one spanning cell
    pub fn header(name: impl Into<String>) -> Self {
        Self::new(vec![TableCell::spanning(name)])
    }

    /// Permission row: description cell followed by a checkbox cell
    pub fn permission(description: impl Into<String>, checked: bool) -> Self {
        Self::new(vec![TableCell::text(description), TableCell::checkbox(checked)])
    }
}

/// Shape-only classification of a row
///
/// Context (whether a module header was seen before) is not part of the
/// shape; the parser applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Single spanning cell. `name` is the trimmed cell text
    Header { name: String },

    /// Two or more cells, exactly one checkbox in the second cell
    Permission { active: bool },

    /// Anything else (separators, malformed rows, multi-checkbox rows)
    Ignored,
}

/// Classify a row by its cell shape
pub fn classify(row: &TableRow) -> RowKind {
    match row.cells.as_slice() {
        [only] if only.has_colspan => RowKind::Header {
            name: only.text.trim().to_string(),
        },
        [_, second, ..] => match second.checkboxes.as_slice() {
            [checked] => RowKind::Permission { active: *checked },
            _ => RowKind::Ignored,
        },
        _ => RowKind::Ignored,
    }
}
