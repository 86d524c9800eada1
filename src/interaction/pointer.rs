use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::CursorLeft;
use bevy::window::CursorMoved;

use crate::globe::Orientation;
use crate::schedule::FrameSet;
use crate::viewport::ViewportSize;

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>().add_systems(
            Update,
            (pointer_buttons, pointer_moves, pointer_left)
                .chain()
                .in_set(FrameSet::UserInput),
        );
    }
}

/// Pointer position where no hotspot can ever be hit. Until the pointer
/// actually moves over the surface we must not report spurious hovers.
pub const POINTER_OFFSCREEN: Vec2 = Vec2::new(-10.0, -10.0);

/// Pointer state for the current view: position in normalized device
/// coordinates plus drag bookkeeping.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Normalized device coordinates, [-1, 1] per axis once on-surface.
    pub ndc:      Vec2,
    pub dragging: bool,
    /// Last window-space position seen, the anchor for drag deltas. `None`
    /// until the first move: a press arriving before any movement (window
    /// opens under a stationary cursor) must not produce a delta measured
    /// from an arbitrary origin.
    last_pos:     Option<Vec2>,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            ndc:      POINTER_OFFSCREEN,
            dragging: false,
            last_pos: None,
        }
    }
}

impl PointerState {
    /// Records a new window-space position. Returns the pixel delta since
    /// the previous position when a drag is active and an anchor exists,
    /// `None` otherwise.
    pub fn on_move(&mut self, position: Vec2, viewport: &ViewportSize) -> Option<Vec2> {
        self.ndc = viewport.window_to_ndc(position);
        let delta = self
            .dragging
            .then(|| self.last_pos.map(|last| position - last))
            .flatten();
        self.last_pos = Some(position);
        delta
    }

    pub fn begin_drag(&mut self) { self.dragging = true; }

    pub fn end_drag(&mut self) { self.dragging = false; }
}

fn pointer_moves(
    mut reader: MessageReader<CursorMoved>,
    viewport: Res<ViewportSize>,
    mut pointer: ResMut<PointerState>,
    mut orientation: ResMut<Orientation>,
) {
    for moved in reader.read() {
        if let Some(delta) = pointer.on_move(moved.position, &viewport) {
            orientation.apply_drag(delta);
        }
    }
}

fn pointer_buttons(buttons: Res<ButtonInput<MouseButton>>, mut pointer: ResMut<PointerState>) {
    if buttons.just_pressed(MouseButton::Left) {
        pointer.begin_drag();
    }
    if buttons.just_released(MouseButton::Left) {
        pointer.end_drag();
    }
}

/// Leaving the surface ends a drag even though no button-up arrives.
fn pointer_left(mut reader: MessageReader<CursorLeft>, mut pointer: ResMut<PointerState>) {
    if reader.read().next().is_some() {
        pointer.end_drag();
    }
}
