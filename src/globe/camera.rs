use bevy::light::AmbientLight;
use bevy::prelude::*;

use super::constants::CAMERA_DISTANCE;
use super::constants::CAMERA_FOV_DEGREES;

pub struct GlobeCameraPlugin;

impl Plugin for GlobeCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}

/// The single camera looking at the globe. Hit-test rays and tooltip
/// projection both go through this camera.
#[derive(Component)]
pub struct GlobeCamera;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        GlobeCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        // Subtle ambient fill; the globe materials are unlit so lighting
        // only matters if a lit material is ever added.
        AmbientLight {
            color: Color::WHITE,
            brightness: 80.0,
            ..default()
        },
    ));

    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(5.0, 3.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
