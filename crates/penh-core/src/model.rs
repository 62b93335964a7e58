//! # Permissions Table Model
//!
//! Domain types built from a parsed permissions table.
//!
//! The parser produces [`ParsedModule`]s; decoration turns each one into a
//! [`ModuleGroup`] whose counts are frozen at that moment. Only a
//! `ModuleGroup` can be toggled, so counts always exist before the first
//! toggle and are never recomputed afterwards.

use serde::Serialize;

use crate::table::RowId;

// ============================================================================
// Identifiers
// ============================================================================

/// Index of a module group in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

// ============================================================================
// Parser output
// ============================================================================

/// A permission row owned by a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionRow {
    /// Row holding the permission's checkbox
    pub row: RowId,

    /// Checked state of the checkbox when the table was parsed
    pub is_active: bool,
}

/// A module header and the permission rows that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedModule {
    /// Trimmed header cell text. May be empty
    pub name: String,

    /// The header row
    pub header: RowId,

    /// Permission rows in table order
    pub rows: Vec<PermissionRow>,
}

impl ParsedModule {
    pub fn new(name: impl Into<String>, header: RowId) -> Self {
        Self {
            name: name.into(),
            header,
            rows: Vec::new(),
        }
    }
}

// ============================================================================
// Decorated model
// ============================================================================

/// Style class derived from a group's active count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountStyle {
    HasPerms,
    NoPerms,
}

impl CountStyle {
    pub fn from_active(active: usize) -> Self {
        if active > 0 {
            CountStyle::HasPerms
        } else {
            CountStyle::NoPerms
        }
    }

    /// CSS class name
    pub fn as_class(&self) -> &'static str {
        match self {
            CountStyle::HasPerms => "has-perms",
            CountStyle::NoPerms => "no-perms",
        }
    }
}

impl std::fmt::Display for CountStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_class())
    }
}

/// Counts frozen at decoration time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCounts {
    pub total: usize,
    pub active: usize,
}

impl GroupCounts {
    fn from_rows(rows: &[PermissionRow]) -> Self {
        Self {
            total: rows.len(),
            active: rows.iter().filter(|r| r.is_active).count(),
        }
    }

    /// Annotation shown while the group is expanded, e.g. `" (1/2 active)"`
    pub fn active_label(&self) -> String {
        format!(" ({}/{} active)", self.active, self.total)
    }

    /// Annotation shown while the group is collapsed, e.g. `" (2 permissions hidden)"`
    pub fn hidden_label(&self) -> String {
        format!(" ({} permissions hidden)", self.total)
    }
}

/// A decorated module group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGroup {
    name: String,
    header: RowId,
    rows: Vec<PermissionRow>,
    counts: GroupCounts,
    style: CountStyle,
    collapsed: bool,
}

impl ModuleGroup {
    /// Freeze counts and style for a parsed module. Starts expanded.
    pub fn decorate(parsed: ParsedModule) -> Self {
        let counts = GroupCounts::from_rows(&parsed.rows);
        Self {
            name: parsed.name,
            header: parsed.header,
            rows: parsed.rows,
            counts,
            style: CountStyle::from_active(counts.active),
            collapsed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> RowId {
        self.header
    }

    pub fn rows(&self) -> &[PermissionRow] {
        &self.rows
    }

    pub fn counts(&self) -> GroupCounts {
        self.counts
    }

    pub fn style(&self) -> CountStyle {
        self.style
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip the collapsed flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Annotation text for the current collapsed state
    pub fn annotation(&self) -> String {
        if self.collapsed {
            self.counts.hidden_label()
        } else {
            self.counts.active_label()
        }
    }
}
