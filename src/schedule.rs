use bevy::prelude::*;

use crate::state::ViewState;

/// Per-frame ordering for the globe engine.
///
/// Rotation must be advanced before hit-testing runs so hover results always
/// reflect the current frame's rotation, never the previous one. Hit-testing
/// is deliberately re-run every frame (not only on pointer-move): the globe
/// rotates under a stationary pointer.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FrameSet {
    UserInput,
    Rotate,
    HitTest,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FrameSet::UserInput, FrameSet::Rotate, FrameSet::HitTest)
                .chain()
                .run_if(in_state(ViewState::Mounted)),
        );
    }
}
