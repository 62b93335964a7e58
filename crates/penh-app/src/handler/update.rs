//! Main update function - handles state transitions (TEA pattern)

use crate::config::GlyphSettings;
use crate::message::Message;
use crate::state::EnhancerState;

use super::{toggle, UpdateResult};

/// Process a message and update state
/// Returns the view patches describing the transition
pub fn update(
    state: &mut EnhancerState,
    message: Message,
    glyphs: &GlyphSettings,
) -> UpdateResult {
    match message {
        Message::ToggleGroup(id) => toggle::toggle_group(state, id, glyphs),

        Message::HeaderClicked(row) => match state.group_for_header(row) {
            Some(id) => toggle::toggle_group(state, id, glyphs),
            None => {
                tracing::trace!("Click on {} is not a module header", row);
                UpdateResult::none()
            }
        },

        // ─────────────────────────────────────────────────────────
        // Bulk Actions
        // ─────────────────────────────────────────────────────────
        Message::ExpandAll => toggle::expand_all(state, glyphs),
        Message::CollapseAll => toggle::collapse_all(state, glyphs),
        Message::CollapseInactive => toggle::collapse_inactive(state, glyphs),
    }
}
