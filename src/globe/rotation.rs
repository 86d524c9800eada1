use bevy::prelude::*;

use super::GlobeNode;
use super::constants::AUTO_SPIN_RATE;
use super::constants::DRAG_PITCH_SENSITIVITY;
use super::constants::DRAG_YAW_SENSITIVITY;
use crate::schedule::FrameSet;

pub struct RotationPlugin;

impl Plugin for RotationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Orientation>().add_systems(
            Update,
            (auto_spin, apply_orientation).chain().in_set(FrameSet::Rotate),
        );
    }
}

/// Current rotation of the globe node.
///
/// Auto-rotation and drag both write here, so the two compose additively.
/// Yaw is unbounded. Pitch is deliberately unclamped as well: dragging past
/// a pole flips the globe upside down rather than stopping at the pole.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub yaw:   f32,
    pub pitch: f32,
}

impl Orientation {
    /// Advances the idle spin by `delta_secs` seconds.
    pub fn advance(&mut self, delta_secs: f32) { self.yaw += AUTO_SPIN_RATE * delta_secs; }

    /// Applies a drag delta in pixels.
    pub fn apply_drag(&mut self, delta: Vec2) {
        self.yaw += delta.x * DRAG_YAW_SENSITIVITY;
        self.pitch += delta.y * DRAG_PITCH_SENSITIVITY;
    }

    /// Pitch around X applied before yaw around Y, matching a scene node
    /// rotated by per-axis euler angles.
    pub fn to_quat(self) -> Quat { Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0) }
}

fn auto_spin(time: Res<Time>, mut orientation: ResMut<Orientation>) {
    orientation.advance(time.delta_secs());
}

fn apply_orientation(
    orientation: Res<Orientation>,
    mut globe: Query<&mut Transform, With<GlobeNode>>,
) {
    for mut transform in &mut globe {
        transform.rotation = orientation.to_quat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_spin_accumulates_linearly() {
        let mut orientation = Orientation::default();
        let delta = 1.0 / 60.0;
        for _ in 0..600 {
            orientation.advance(delta);
        }
        let expected = AUTO_SPIN_RATE * 10.0;
        assert!((orientation.yaw - expected).abs() < 1e-4, "{}", orientation.yaw);
        assert_eq!(orientation.pitch, 0.0);
    }

    #[test]
    fn drag_composes_additively_with_spin() {
        let mut orientation = Orientation::default();
        orientation.advance(0.5);
        orientation.apply_drag(Vec2::new(40.0, -20.0));
        orientation.advance(0.5);

        let expected_yaw = AUTO_SPIN_RATE + 40.0 * DRAG_YAW_SENSITIVITY;
        let expected_pitch = -20.0 * DRAG_PITCH_SENSITIVITY;
        assert!((orientation.yaw - expected_yaw).abs() < 1e-6);
        assert!((orientation.pitch - expected_pitch).abs() < 1e-6);
    }

    #[test]
    fn pitch_is_unclamped_past_the_poles() {
        let mut orientation = Orientation::default();
        orientation.apply_drag(Vec2::new(0.0, 2000.0));
        assert!(orientation.pitch > std::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn zero_orientation_is_identity() {
        assert_eq!(Orientation::default().to_quat(), Quat::IDENTITY);
    }
}
