mod pointer;

use bevy::prelude::*;
use hit_test::HitTestPlugin;
use pointer::PointerPlugin;

pub use hit_test::Hover;
pub use hit_test::HoveredRegion;
pub use pointer::PointerState;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PointerPlugin).add_plugins(HitTestPlugin);
    }
}
