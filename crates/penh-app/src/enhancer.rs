//! Enhancer lifecycle: attach once, then dispatch messages.
//!
//! `attach` is guarded by the processed marker on the table, so running it
//! again over the same table decorates nothing and binds nothing.

use penh_core::prelude::*;
use penh_core::{parse_table, RowId, TableRow};

use crate::config::{Settings, MODULE_ATTRIBUTE};
use crate::handler::{update, UpdateResult};
use crate::message::Message;
use crate::state::EnhancerState;
use crate::view::{TableView, ViewPatch};

/// Indicator handles owned by one group
#[derive(Debug, Clone)]
pub struct GroupIndicators<I> {
    pub glyph: I,
    pub annotation: I,
}

/// The group controller bound to one table
pub struct Enhancer<V: TableView> {
    view: V,
    state: EnhancerState,
    settings: Settings,
    indicators: Vec<GroupIndicators<V::Indicator>>,
}

impl<V: TableView> Enhancer<V> {
    /// Parse, tag and decorate the table behind `view`
    ///
    /// Returns `None` when the table already carries the processed marker.
    pub fn attach(mut view: V, rows: &[TableRow], settings: Settings) -> Option<Self> {
        let marker = settings.classes.processed();
        if view.has_table_class(&marker) {
            debug!("Table already processed, skipping attach");
            return None;
        }
        view.add_table_class(&marker);

        let state = EnhancerState::decorate(parse_table(rows));
        tag_rows(&mut view, &state, &settings);
        let indicators = decorate(&mut view, &state, &settings);

        info!(
            "Attached to table: {} modules, {} permission rows",
            state.groups().len(),
            state.groups().iter().map(|g| g.rows().len()).sum::<usize>()
        );

        Some(Self {
            view,
            state,
            settings,
            indicators,
        })
    }

    /// Run one message through the update function and apply its patches
    pub fn dispatch(&mut self, message: Message) -> UpdateResult {
        let result = update(&mut self.state, message, &self.settings.glyphs);
        for patch in &result.patches {
            self.apply(patch);
        }
        result
    }

    /// Route a click on any row. Only header rows react.
    pub fn click_row(&mut self, row: RowId) -> UpdateResult {
        self.dispatch(Message::HeaderClicked(row))
    }

    pub fn state(&self) -> &EnhancerState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Indicator handles, indexed like the groups
    pub fn indicators(&self) -> &[GroupIndicators<V::Indicator>] {
        &self.indicators
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn apply(&mut self, patch: &ViewPatch) {
        match patch {
            ViewPatch::AddRowClass { row, class } => self.view.add_row_class(*row, class),
            ViewPatch::SetRowVisible { row, visible } => {
                self.view.set_row_visible(*row, *visible)
            }
            ViewPatch::SetGlyph { group, text } => {
                if let Some(ind) = self.indicators.get(group.0) {
                    self.view.set_indicator_text(&ind.glyph, text);
                }
            }
            ViewPatch::SetAnnotation { group, text } => {
                if let Some(ind) = self.indicators.get(group.0) {
                    self.view.set_indicator_text(&ind.annotation, text);
                }
            }
        }
    }
}

impl<V: TableView + std::fmt::Debug> std::fmt::Debug for Enhancer<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enhancer")
            .field("view", &self.view)
            .field("state", &self.state)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Classification tags: header row and cell, permission rows and their owner
fn tag_rows<V: TableView>(view: &mut V, state: &EnhancerState, settings: &Settings) {
    let header_class = settings.classes.module_header();
    let clickable_class = settings.classes.clickable();
    let permission_class = settings.classes.permission_row();

    for group in state.groups() {
        view.add_row_class(group.header(), &header_class);
        view.add_cell_class(group.header(), &clickable_class);
        for perm in group.rows() {
            view.add_row_class(perm.row, &permission_class);
            view.set_row_attribute(perm.row, MODULE_ATTRIBUTE, group.name());
        }
    }
}

/// Insert glyph and count indicators and apply the style class to each header
fn decorate<V: TableView>(
    view: &mut V,
    state: &EnhancerState,
    settings: &Settings,
) -> Vec<GroupIndicators<V::Indicator>> {
    let toggle_class = settings.classes.toggle();
    let count_class = settings.classes.count();

    state
        .groups()
        .iter()
        .map(|group| {
            let glyph = view.prepend_indicator(
                group.header(),
                &toggle_class,
                settings.glyphs.for_state(group.is_collapsed()),
            );
            view.add_row_class(group.header(), group.style().as_class());
            let annotation =
                view.append_indicator(group.header(), &count_class, &group.annotation());
            GroupIndicators { glyph, annotation }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{MemoryView, MockTableView};
    use penh_core::{GroupId, TableCell};

    fn rows() -> Vec<TableRow> {
        vec![
            TableRow::permission("orphan", true),
            TableRow::header("Node"),
            TableRow::permission("access content", true),
            TableRow::permission("administer nodes", false),
            TableRow::header("Empty Module"),
        ]
    }

    fn attach(rows: &[TableRow]) -> Enhancer<MemoryView> {
        Enhancer::attach(MemoryView::from_rows(rows), rows, Settings::default())
            .expect("fresh table should attach")
    }

    #[test]
    fn test_attach_tags_rows() {
        let enhancer = attach(&rows());
        let view = enhancer.view();

        assert!(view.has_table_class("permissions-enhancer-processed"));

        let header = view.row(RowId(1)).unwrap();
        assert!(header.classes.contains("permissions-enhancer-module-header"));
        assert!(header.classes.contains("has-perms"));
        assert!(header
            .cell_classes
            .contains("permissions-enhancer-clickable"));

        let perm = view.row(RowId(2)).unwrap();
        assert!(perm.classes.contains("permissions-enhancer-permission-row"));
        assert_eq!(perm.attributes.get("data-module").map(String::as_str), Some("Node"));

        let orphan = view.row(RowId(0)).unwrap();
        assert!(orphan.classes.is_empty());
        assert!(orphan.attributes.is_empty());
    }

    #[test]
    fn test_attach_decorates_headers() {
        let enhancer = attach(&rows());
        let view = enhancer.view();

        assert_eq!(view.cell_label(RowId(1)), "▼Node (1/2 active)");
        assert_eq!(view.cell_label(RowId(4)), "▼Empty Module (0/0 active)");
        assert!(view
            .row(RowId(4))
            .unwrap()
            .classes
            .contains("no-perms"));
    }

    #[test]
    fn test_attach_is_idempotent() {
        let rows = rows();
        let enhancer = attach(&rows);
        let view = enhancer.view().clone();
        let indicator_count = view.indicators().len();

        assert!(Enhancer::attach(view, &rows, Settings::default()).is_none());
        assert_eq!(enhancer.view().indicators().len(), indicator_count);
    }

    #[test]
    fn test_attach_on_processed_table_touches_nothing() {
        let mut view = MockTableView::new();
        view.expect_has_table_class()
            .withf(|class| class == "permissions-enhancer-processed")
            .times(1)
            .returning(|_| true);

        assert!(Enhancer::attach(view, &rows(), Settings::default()).is_none());
    }

    #[test]
    fn test_attach_marks_table_once() {
        let mut view = MockTableView::new();
        view.expect_has_table_class().returning(|_| false);
        view.expect_add_table_class()
            .withf(|class| class == "permissions-enhancer-processed")
            .times(1)
            .return_const(());
        view.expect_add_row_class().return_const(());
        view.expect_add_cell_class().times(1).return_const(());
        view.expect_set_row_attribute().times(1).return_const(());
        view.expect_prepend_indicator()
            .withf(|row, class, text| {
                *row == RowId(0) && class == "permissions-enhancer-toggle" && text == "▼"
            })
            .times(1)
            .returning(|_, _, _| 0);
        view.expect_append_indicator()
            .withf(|_, class, text| {
                class == "permissions-enhancer-count" && text == " (0/1 active)"
            })
            .times(1)
            .returning(|_, _, _| 1);

        let rows = vec![
            TableRow::header("User"),
            TableRow::permission("administer users", false),
        ];
        assert!(Enhancer::attach(view, &rows, Settings::default()).is_some());
    }

    #[test]
    fn test_header_click_toggles_and_restores() {
        let mut enhancer = attach(&rows());

        enhancer.click_row(RowId(1));
        {
            let view = enhancer.view();
            assert_eq!(view.cell_label(RowId(1)), "▶Node (2 permissions hidden)");
            assert!(!view.row(RowId(2)).unwrap().visible);
            assert!(!view.row(RowId(3)).unwrap().visible);
            assert!(view.row(RowId(2)).unwrap().classes.contains("has-perms"));
            assert!(view.row(RowId(0)).unwrap().visible);
        }

        enhancer.click_row(RowId(1));
        let view = enhancer.view();
        assert_eq!(view.cell_label(RowId(1)), "▼Node (1/2 active)");
        assert!(view.row(RowId(2)).unwrap().visible);
        assert!(view.row(RowId(3)).unwrap().visible);
    }

    #[test]
    fn test_click_on_permission_row_changes_nothing() {
        let mut enhancer = attach(&rows());
        let before = enhancer.view().clone();

        let result = enhancer.click_row(RowId(2));

        assert!(result.is_empty());
        assert_eq!(enhancer.view().indicators(), before.indicators());
    }

    #[test]
    fn test_empty_module_collapses_with_zero_hidden() {
        let mut enhancer = attach(&rows());

        enhancer.dispatch(Message::ToggleGroup(GroupId(1)));

        assert_eq!(
            enhancer.view().cell_label(RowId(4)),
            "▶Empty Module (0 permissions hidden)"
        );
    }

    #[test]
    fn test_counts_survive_collapse_expand_cycle() {
        let mut enhancer = attach(&rows());

        enhancer.dispatch(Message::CollapseAll);
        enhancer.dispatch(Message::ExpandAll);

        let node = enhancer.state().group(GroupId(0)).unwrap();
        assert_eq!(node.counts().active, 1);
        assert_eq!(enhancer.view().cell_label(RowId(1)), "▼Node (1/2 active)");
    }

    #[test]
    fn test_collapse_inactive_through_enhancer() {
        let mut enhancer = attach(&rows());

        enhancer.dispatch(Message::CollapseInactive);

        let view = enhancer.view();
        assert_eq!(view.cell_label(RowId(1)), "▼Node (1/2 active)");
        assert_eq!(
            view.cell_label(RowId(4)),
            "▶Empty Module (0 permissions hidden)"
        );
    }

    #[test]
    fn test_table_without_headers_attaches_empty() {
        let rows = vec![
            TableRow::permission("a", true),
            TableRow::new(vec![TableCell::text("just text")]),
        ];
        let mut enhancer = attach(&rows);

        assert!(enhancer.state().is_empty());
        assert!(enhancer.view().indicators().is_empty());
        assert!(enhancer.dispatch(Message::CollapseAll).is_empty());
    }
}
