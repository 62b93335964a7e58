//! Loading a permissions table from saved page markup
//!
//! Pages must be well-formed XHTML (as saved by "Save page as... XHTML" or
//! produced by an HTML-to-XHTML cleaner). Only rows that belong directly to
//! the target table are read; rows of nested tables are skipped.

use std::path::Path;

use penh_core::prelude::*;
use penh_core::{TableCell, TableRow};
use roxmltree::{Document, Node, ParsingOptions};

/// Read `path` and extract the rows of the table with id `table_id`
pub fn load_table(path: &Path, table_id: &str) -> Result<Vec<TableRow>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_table_markup(&text, table_id).map_err(|e| match e {
        Error::Markup { message, .. } => Error::markup(path, message),
        other => other,
    })
}

/// Extract the rows of the table with id `table_id` from markup text
pub fn parse_table_markup(text: &str, table_id: &str) -> Result<Vec<TableRow>> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    let document = Document::parse_with_options(text, options)
        .map_err(|e| Error::markup("<input>", e.to_string()))?;

    let table = document
        .descendants()
        .find(|n| {
            is_element_named(*n, "table") && attribute_ci(*n, "id").as_deref() == Some(table_id)
        })
        .ok_or_else(|| Error::table_not_found(table_id))?;

    let rows: Vec<TableRow> = table
        .descendants()
        .filter(|n| is_element_named(*n, "tr") && owning_table(*n) == Some(table))
        .map(read_row)
        .collect();

    debug!("Read {} rows from table #{}", rows.len(), table_id);
    Ok(rows)
}

fn is_element_named(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(name)
}

fn attribute_ci(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attributes()
        .find(|attribute| attribute.name().eq_ignore_ascii_case(name))
        .map(|attribute| attribute.value().to_string())
}

/// Nearest enclosing `<table>`
fn owning_table<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.ancestors().skip(1).find(|a| is_element_named(*a, "table"))
}

fn read_row(row: Node<'_, '_>) -> TableRow {
    TableRow::new(
        row.children()
            .filter(|c| is_element_named(*c, "td"))
            .map(read_cell)
            .collect(),
    )
}

fn read_cell(cell: Node<'_, '_>) -> TableCell {
    let text = cell
        .descendants()
        .filter(|d| d.is_text())
        .filter_map(|d| d.text())
        .collect::<String>();

    let checkboxes = cell
        .descendants()
        .filter(|d| {
            is_element_named(*d, "input")
                && attribute_ci(*d, "type").is_some_and(|t| t.eq_ignore_ascii_case("checkbox"))
        })
        .map(|input| attribute_ci(input, "checked").is_some())
        .collect();

    TableCell {
        text,
        has_colspan: attribute_ci(cell, "colspan").is_some(),
        checkboxes,
    }
}
