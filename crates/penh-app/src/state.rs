//! Controller state: the decorated table model

use std::collections::HashMap;

use penh_core::{GroupId, ModuleGroup, ParsedModule, RowId};

/// The table model owned by the controller after parsing
#[derive(Debug, Clone, Default)]
pub struct EnhancerState {
    groups: Vec<ModuleGroup>,

    /// Header row -> group, for click routing
    by_header: HashMap<RowId, GroupId>,
}

impl EnhancerState {
    /// Decorate parsed modules. Counts and styles are frozen here.
    pub fn decorate(modules: Vec<ParsedModule>) -> Self {
        let groups: Vec<ModuleGroup> = modules.into_iter().map(ModuleGroup::decorate).collect();
        let by_header = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.header(), GroupId(i)))
            .collect();
        Self { groups, by_header }
    }

    pub fn groups(&self) -> &[ModuleGroup] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&ModuleGroup> {
        self.groups.get(id.0)
    }

    pub(crate) fn group_mut(&mut self, id: GroupId) -> Option<&mut ModuleGroup> {
        self.groups.get_mut(id.0)
    }

    /// Group ids in table order
    pub fn ids(&self) -> impl Iterator<Item = GroupId> {
        (0..self.groups.len()).map(GroupId)
    }

    pub fn group_for_header(&self, row: RowId) -> Option<GroupId> {
        self.by_header.get(&row).copied()
    }

    /// First group with the given name
    pub fn find_group(&self, name: &str) -> Option<GroupId> {
        self.groups
            .iter()
            .position(|g| g.name() == name)
            .map(GroupId)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn collapsed_count(&self) -> usize {
        self.groups.iter().filter(|g| g.is_collapsed()).count()
    }
}
