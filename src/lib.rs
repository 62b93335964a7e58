//! Permissions Enhancer Library
//!
//! Headless inspector for permissions tables: loads a saved page, runs the
//! same parser and group controller the browser binding uses, and reports
//! what the table would show.

pub mod inspect;
pub mod markup;
pub mod report;

use std::path::Path;

use penh_app::{Enhancer, MemoryView, Settings};
use penh_core::prelude::*;

pub use inspect::{run_actions, Action};
pub use report::{ModuleReport, Report};

/// Load `path`, attach, apply `actions` and build the report
///
/// Returns the report together with any warnings from the actions.
pub fn inspect_file(
    path: &Path,
    settings: Settings,
    actions: &[Action],
) -> Result<(Report, Vec<String>)> {
    let rows = markup::load_table(path, &settings.selectors.table_id)?;
    inspect_rows(&rows, settings, actions)
}

/// Same as [`inspect_file`] over rows that were already read
pub fn inspect_rows(
    rows: &[penh_core::TableRow],
    settings: Settings,
    actions: &[Action],
) -> Result<(Report, Vec<String>)> {
    let table_id = settings.selectors.table_id.clone();
    let mut enhancer = Enhancer::attach(MemoryView::from_rows(rows), rows, settings)
        .ok_or_else(|| Error::already_processed(table_id))?;
    let warnings = run_actions(&mut enhancer, actions);
    Ok((Report::from_enhancer(&enhancer), warnings))
}
