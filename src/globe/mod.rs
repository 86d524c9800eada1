mod camera;
mod constants;
mod geometry;
mod rotation;

use bevy::prelude::*;
use camera::GlobeCameraPlugin;
use geometry::GeometryPlugin;
use rotation::RotationPlugin;

pub use camera::GlobeCamera;
pub use constants::CAMERA_DISTANCE;
pub use constants::GLOBE_RADIUS;
pub use constants::HOTSPOT_HIT_RADIUS;
pub use constants::HOTSPOT_LIFT;
pub use constants::TOOLTIP_OFFSET;
pub use geometry::Hotspot;
pub use rotation::Orientation;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(GlobeCameraPlugin)
            .add_plugins(GeometryPlugin)
            .add_plugins(RotationPlugin);
    }
}

/// The one rotatable node all decoration hangs off. Hotspots are not
/// children of this node.
#[derive(Component)]
pub struct GlobeNode;
