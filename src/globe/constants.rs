use bevy::math::Vec2;

/// Sphere radius everything else is anchored to.
pub const GLOBE_RADIUS: f32 = 2.0;

/// Graticule lines sit just above the shell to avoid z-fighting.
pub const GRATICULE_LIFT: f32 = 0.001;

/// Point cloud sits above the graticule.
pub const POINT_CLOUD_LIFT: f32 = 0.005;

/// Hotspots and region dots sit above all decoration.
pub const HOTSPOT_LIFT: f32 = 0.03;

/// Number of stippled surface points.
pub const POINT_CLOUD_COUNT: usize = 3500;

/// Rendered radius of one surface point.
pub const POINT_CLOUD_DOT_RADIUS: f32 = 0.01;

/// Latitude rings every 20° from -60° to 60°.
pub const LATITUDE_RING_STEP: i32 = 20;
pub const LATITUDE_RING_MAX: i32 = 60;

/// Longitude arcs every 20° across the full circle, spanning ±80° latitude.
pub const LONGITUDE_ARC_STEP: i32 = 20;
pub const LONGITUDE_ARC_LAT_MAX: i32 = 80;

/// Angular sampling step for graticule polylines, in degrees.
pub const GRATICULE_SAMPLE_STEP: i32 = 3;

/// Dash duty cycle for graticule lines: of every [`DASH_PERIOD`] segments,
/// the first [`DASH_FILL`] are drawn.
pub const DASH_PERIOD: usize = 4;
pub const DASH_FILL: usize = 3;

/// Wireframe outline tessellation (sectors × stacks).
pub const WIREFRAME_SECTORS: usize = 32;
pub const WIREFRAME_STACKS: usize = 16;

/// Radius of a region's invisible hit-target.
pub const HOTSPOT_HIT_RADIUS: f32 = 0.09;

/// Radius of a region's visible marker dot.
pub const REGION_DOT_RADIUS: f32 = 0.02;

/// Auto-rotation rate around the vertical axis, radians per second.
pub const AUTO_SPIN_RATE: f32 = 0.02;

/// Drag sensitivity, radians per pixel. Horizontal is deliberately faster
/// than vertical.
pub const DRAG_YAW_SENSITIVITY: f32 = 0.005;
pub const DRAG_PITCH_SENSITIVITY: f32 = 0.003;

/// Camera distance from the globe center and vertical field of view.
pub const CAMERA_DISTANCE: f32 = 6.0;
pub const CAMERA_FOV_DEGREES: f32 = 55.0;

/// Tooltip offset from the projected anchor so it clears the cursor.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(14.0, -10.0);
