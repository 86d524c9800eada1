use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy::window::WindowResized;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportSize>()
            .add_systems(Startup, init_viewport)
            .add_systems(Update, sync_viewport);
    }
}

/// Logical size of the rendering surface, mirrored from the primary window.
///
/// Camera aspect and the swapchain are resized by Bevy's own window systems;
/// this resource exists so pointer math can convert between window
/// coordinates and normalized device coordinates without touching the
/// window every frame. Updates with a zero dimension are ignored rather
/// than producing a degenerate viewport.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    width:  f32,
    height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width:  1.0,
            height: 1.0,
        }
    }
}

impl ViewportSize {
    pub fn set(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.width = width;
        self.height = height;
    }

    /// Window position (origin top-left, y down) to NDC ([-1, 1], y up).
    pub fn window_to_ndc(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            (position.x / self.width) * 2.0 - 1.0,
            -((position.y / self.height) * 2.0 - 1.0),
        )
    }

    /// NDC back to window coordinates, the inverse of [`Self::window_to_ndc`].
    pub fn ndc_to_window(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) / 2.0 * self.width,
            (1.0 - ndc.y) / 2.0 * self.height,
        )
    }
}

fn init_viewport(
    window: Single<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    viewport.set(window.width(), window.height());
    debug!("viewport initialized at {:?}", *viewport);
}

fn sync_viewport(mut reader: MessageReader<WindowResized>, mut viewport: ResMut<ViewportSize>) {
    for resized in reader.read() {
        viewport.set(resized.width, resized.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f32, height: f32) -> ViewportSize {
        let mut v = ViewportSize::default();
        v.set(width, height);
        v
    }

    #[test]
    fn zero_dimension_is_ignored() {
        let mut v = viewport(800.0, 600.0);
        v.set(0.0, 600.0);
        v.set(800.0, 0.0);
        v.set(-100.0, 600.0);
        assert_eq!(v, viewport(800.0, 600.0));
    }

    #[test]
    fn repeated_identical_sizes_are_idempotent() {
        let mut v = viewport(800.0, 600.0);
        let before = v;
        v.set(800.0, 600.0);
        assert_eq!(v, before);
    }

    #[test]
    fn window_center_is_ndc_origin() {
        let v = viewport(800.0, 600.0);
        assert_eq!(v.window_to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn ndc_y_points_up() {
        let v = viewport(800.0, 600.0);
        // top-left of the window is (-1, 1) in NDC
        assert_eq!(v.window_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn ndc_round_trips_through_window_coordinates() {
        let v = viewport(1024.0, 768.0);
        let pos = Vec2::new(137.0, 616.0);
        let back = v.ndc_to_window(v.window_to_ndc(pos));
        assert!(back.distance(pos) < 1e-3, "{back:?}");
    }
}
