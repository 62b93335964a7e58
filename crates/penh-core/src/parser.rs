//! Table parser for permissions tables.
//!
//! Row-at-a-time state machine that tracks the most recently seen module
//! header and assigns each following permission row to it. Rows are fed in
//! document order; the parser never looks back.

use crate::model::{GroupId, ParsedModule, PermissionRow};
use crate::table::{classify, RowId, RowKind, TableRow};

// ─────────────────────────────────────────────────────────────────────────────
// Types
// ─────────────────────────────────────────────────────────────────────────────

/// Result of feeding a row to the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedResult {
    /// Row is a module header; a new group was started
    StartedModule(GroupId),

    /// Row is a permission row and was appended to the given group
    AddedPermission(GroupId),

    /// Row has a permission shape but no header came before it. Dropped
    Orphaned,

    /// Row matches neither shape
    Ignored,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser
// ─────────────────────────────────────────────────────────────────────────────

/// Single-pass parser building module groups from table rows
#[derive(Debug, Default)]
pub struct TableParser {
    /// Modules in table order. The last one is the current module
    modules: Vec<ParsedModule>,

    /// Permission-shaped rows seen before the first header
    orphaned: usize,

    /// Rows matching neither shape
    ignored: usize,
}

impl TableParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next row in document order
    pub fn feed_row(&mut self, id: RowId, row: &TableRow) -> FeedResult {
        match classify(row) {
            RowKind::Header { name } => {
                let group = GroupId(self.modules.len());
                tracing::debug!("{} starts module {:?} as group {}", id, name, group.0);
                self.modules.push(ParsedModule::new(name, id));
                FeedResult::StartedModule(group)
            }
            RowKind::Permission { active } => {
                let group = GroupId(self.modules.len().saturating_sub(1));
                match self.modules.last_mut() {
                    Some(current) => {
                        current.rows.push(PermissionRow {
                            row: id,
                            is_active: active,
                        });
                        FeedResult::AddedPermission(group)
                    }
                    None => {
                        tracing::trace!("{} has no owning module, dropped", id);
                        self.orphaned += 1;
                        FeedResult::Orphaned
                    }
                }
            }
            RowKind::Ignored => {
                tracing::trace!("{} ignored", id);
                self.ignored += 1;
                FeedResult::Ignored
            }
        }
    }

    /// Number of modules started so far
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Consume the parser and return the modules in table order
    pub fn finish(self) -> Vec<ParsedModule> {
        tracing::debug!(
            "Parsed {} modules ({} permission rows, {} orphaned, {} ignored)",
            self.modules.len(),
            self.modules.iter().map(|m| m.rows.len()).sum::<usize>(),
            self.orphaned,
            self.ignored
        );
        self.modules
    }
}

/// Parse a whole table. Row ids are assigned by position.
///
/// A table without any header row yields an empty list; its permission rows
/// are dropped.
pub fn parse_table<'a, I>(rows: I) -> Vec<ParsedModule>
where
    I: IntoIterator<Item = &'a TableRow>,
{
    let mut parser = TableParser::new();
    for (index, row) in rows.into_iter().enumerate() {
        parser.feed_row(RowId(index), row);
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableCell;

    #[test]
    fn test_rows_are_assigned_to_latest_header() {
        let rows = vec![
            TableRow::header("Node"),
            TableRow::permission("access content", true),
            TableRow::permission("administer nodes", false),
            TableRow::header("User"),
            TableRow::permission("administer users", false),
        ];

        let modules = parse_table(&rows);

        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].name, "Node");
        assert_eq!(modules[0].header, RowId(0));
        assert_eq!(
            modules[0].rows,
            vec![
                PermissionRow {
                    row: RowId(1),
                    is_active: true
                },
                PermissionRow {
                    row: RowId(2),
                    is_active: false
                },
            ]
        );
        assert_eq!(modules[1].name, "User");
        assert_eq!(modules[1].rows.len(), 1);
        assert_eq!(modules[1].rows[0].row, RowId(4));
    }

    #[test]
    fn test_rows_before_first_header_are_dropped() {
        let rows = vec![
            TableRow::permission("stray", true),
            TableRow::header("Node"),
            TableRow::permission("access content", false),
        ];

        let modules = parse_table(&rows);

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].rows.len(), 1);
        assert!(modules[0].rows.iter().all(|r| r.row != RowId(0)));
    }

    #[test]
    fn test_table_without_headers_is_empty() {
        let rows = vec![
            TableRow::permission("a", true),
            TableRow::permission("b", false),
        ];
        assert!(parse_table(&rows).is_empty());
    }

    #[test]
    fn test_empty_table_is_empty() {
        assert!(parse_table(&Vec::<TableRow>::new()).is_empty());
    }

    #[test]
    fn test_consecutive_headers_yield_empty_group() {
        let rows = vec![
            TableRow::header("Empty Module"),
            TableRow::header("Node"),
            TableRow::permission("access content", true),
        ];

        let modules = parse_table(&rows);

        assert_eq!(modules.len(), 2);
        assert!(modules[0].rows.is_empty());
        assert_eq!(modules[1].rows.len(), 1);
    }

    #[test]
    fn test_ignored_rows_do_not_end_a_module() {
        let rows = vec![
            TableRow::header("Node"),
            TableRow::permission("a", true),
            TableRow::new(vec![TableCell::text("separator")]),
            TableRow::permission("b", true),
        ];

        let modules = parse_table(&rows);

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].rows.len(), 2);
        assert_eq!(modules[0].rows[1].row, RowId(3));
    }

    #[test]
    fn test_feed_row_results() {
        let mut parser = TableParser::new();

        assert_eq!(
            parser.feed_row(RowId(0), &TableRow::permission("x", true)),
            FeedResult::Orphaned
        );
        assert_eq!(
            parser.feed_row(RowId(1), &TableRow::header("Node")),
            FeedResult::StartedModule(GroupId(0))
        );
        assert_eq!(
            parser.feed_row(RowId(2), &TableRow::permission("y", false)),
            FeedResult::AddedPermission(GroupId(0))
        );
        assert_eq!(
            parser.feed_row(RowId(3), &TableRow::default()),
            FeedResult::Ignored
        );
        assert_eq!(
            parser.feed_row(RowId(4), &TableRow::header("User")),
            FeedResult::StartedModule(GroupId(1))
        );
        assert_eq!(parser.module_count(), 2);
    }

    #[test]
    fn test_row_counts_sum_to_owned_permission_rows() {
        let mut rows = vec![TableRow::permission("orphan", true)];
        let mut owned = 0;
        for h in 0..4 {
            rows.push(TableRow::header(format!("Module {}", h)));
            for p in 0..h {
                rows.push(TableRow::permission(format!("perm {}", p), p % 2 == 0));
                owned += 1;
            }
        }

        let modules = parse_table(&rows);

        assert_eq!(modules.len(), 4);
        assert_eq!(modules.iter().map(|m| m.rows.len()).sum::<usize>(), owned);
    }
}
