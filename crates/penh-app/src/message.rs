//! Message types for the group controller (TEA pattern)

use crate::config::ClassSettings;
use penh_core::{GroupId, RowId};

/// All user actions the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Toggle one group
    ToggleGroup(GroupId),

    /// A click landed on a row; toggles its group if the row is a module header
    HeaderClicked(RowId),

    // ─────────────────────────────────────────────────────────
    // Bulk Actions
    // ─────────────────────────────────────────────────────────
    /// Expand every collapsed group
    ExpandAll,
    /// Collapse every expanded group
    CollapseAll,
    /// Collapse every expanded group without active permissions
    CollapseInactive,
}

/// Page-level triggers, found anywhere in the document by class name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    ExpandAll,
    CollapseAll,
    CollapseInactive,
}

impl BulkAction {
    pub const ALL: [BulkAction; 3] = [
        BulkAction::ExpandAll,
        BulkAction::CollapseAll,
        BulkAction::CollapseInactive,
    ];

    pub fn message(&self) -> Message {
        match self {
            BulkAction::ExpandAll => Message::ExpandAll,
            BulkAction::CollapseAll => Message::CollapseAll,
            BulkAction::CollapseInactive => Message::CollapseInactive,
        }
    }

    /// Trigger class under the configured prefix
    pub fn trigger_class(&self, classes: &ClassSettings) -> String {
        match self {
            BulkAction::ExpandAll => classes.expand_all(),
            BulkAction::CollapseAll => classes.collapse_all(),
            BulkAction::CollapseInactive => classes.collapse_inactive(),
        }
    }
}

impl std::str::FromStr for BulkAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expand-all" => Ok(BulkAction::ExpandAll),
            "collapse-all" => Ok(BulkAction::CollapseAll),
            "collapse-inactive" => Ok(BulkAction::CollapseInactive),
            other => Err(format!("unknown bulk action '{}'", other)),
        }
    }
}
