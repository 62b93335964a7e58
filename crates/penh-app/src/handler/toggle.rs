//! Group toggle and bulk action handlers

use penh_core::GroupId;

use super::UpdateResult;
use crate::config::GlyphSettings;
use crate::state::EnhancerState;
use crate::view::ViewPatch;

/// Flip one group and describe the resulting view changes
///
/// Every owned row gets the group's style class (re-adding is harmless) and
/// is shown or hidden. The annotation uses the counts frozen at decoration.
pub(crate) fn toggle_group(
    state: &mut EnhancerState,
    id: GroupId,
    glyphs: &GlyphSettings,
) -> UpdateResult {
    let Some(group) = state.group_mut(id) else {
        tracing::warn!("Toggle requested for unknown group {}", id.0);
        return UpdateResult::none();
    };

    let collapsed = group.toggle();
    let class = group.style().as_class();

    let mut patches = Vec::with_capacity(group.rows().len() * 2 + 2);
    for perm in group.rows() {
        patches.push(ViewPatch::AddRowClass {
            row: perm.row,
            class,
        });
        patches.push(ViewPatch::SetRowVisible {
            row: perm.row,
            visible: !collapsed,
        });
    }
    patches.push(ViewPatch::SetGlyph {
        group: id,
        text: glyphs.for_state(collapsed).to_string(),
    });
    patches.push(ViewPatch::SetAnnotation {
        group: id,
        text: group.annotation(),
    });

    tracing::debug!(
        "Group {:?} {}",
        group.name(),
        if collapsed { "collapsed" } else { "expanded" }
    );

    UpdateResult {
        patches,
        toggled: vec![id],
    }
}

/// Toggle every group matching `predicate`, in table order
fn toggle_where<F>(
    state: &mut EnhancerState,
    glyphs: &GlyphSettings,
    predicate: F,
) -> UpdateResult
where
    F: Fn(&penh_core::ModuleGroup) -> bool,
{
    let targets: Vec<GroupId> = state
        .ids()
        .filter(|id| state.group(*id).is_some_and(&predicate))
        .collect();

    let mut result = UpdateResult::none();
    for id in targets {
        result.extend(toggle_group(state, id, glyphs));
    }
    result
}

pub(crate) fn expand_all(state: &mut EnhancerState, glyphs: &GlyphSettings) -> UpdateResult {
    toggle_where(state, glyphs, |g| g.is_collapsed())
}

pub(crate) fn collapse_all(state: &mut EnhancerState, glyphs: &GlyphSettings) -> UpdateResult {
    toggle_where(state, glyphs, |g| !g.is_collapsed())
}

/// Groups with at least one active permission are never touched
pub(crate) fn collapse_inactive(
    state: &mut EnhancerState,
    glyphs: &GlyphSettings,
) -> UpdateResult {
    toggle_where(state, glyphs, |g| g.counts().active == 0 && !g.is_collapsed())
}
