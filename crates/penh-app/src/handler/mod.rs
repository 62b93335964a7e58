//! Handler module - TEA update function
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `toggle`: Single-group toggle and the bulk actions built on it

pub(crate) mod toggle;
pub(crate) mod update;


use crate::view::ViewPatch;
use penh_core::GroupId;

// Re-export main entry point
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    /// View mutations to apply, in order
    pub patches: Vec<ViewPatch>,
    /// Groups whose collapsed flag flipped, in order
    pub toggled: Vec<GroupId>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.toggled.is_empty()
    }

    fn extend(&mut self, other: UpdateResult) {
        self.patches.extend(other.patches);
        self.toggled.extend(other.toggled);
    }
}
