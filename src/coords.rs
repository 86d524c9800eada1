use bevy::math::Vec3;

/// Maps a geographic coordinate onto a sphere of the given radius.
///
/// Latitude is the elevation angle (90° = north pole on +Y), longitude the
/// azimuth with 0° facing +X. Longitude is periodic: `lng` and `lng ± 360`
/// land on the same point. At the poles the azimuth terms are multiplied by
/// `sin(0)`, so there is no instability there.
pub fn lat_lng_to_vec3(lat: f32, lng: f32, radius: f32) -> Vec3 {
    let polar = (90.0 - lat).to_radians();
    let azimuth = (lng + 180.0).to_radians();

    Vec3::new(
        -(radius * polar.sin() * azimuth.cos()),
        radius * polar.cos(),
        radius * polar.sin() * azimuth.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn origin_maps_to_reference_direction() {
        let p = lat_lng_to_vec3(0.0, 0.0, 2.0);
        assert!(p.distance(Vec3::new(2.0, 0.0, 0.0)) < TOLERANCE, "{p:?}");
    }

    #[test]
    fn north_pole_collapses_all_longitudes() {
        let reference = lat_lng_to_vec3(90.0, 0.0, 2.0);
        for lng in [-180.0, -73.5, 0.0, 45.0, 179.9] {
            let p = lat_lng_to_vec3(90.0, lng, 2.0);
            assert!(p.distance(reference) < TOLERANCE, "lng {lng}: {p:?}");
        }
        assert!(reference.distance(Vec3::new(0.0, 2.0, 0.0)) < TOLERANCE);
    }

    #[test]
    fn every_point_lies_on_the_sphere() {
        for lat in [-90.0, -60.0, -34.7, 0.0, 12.3, 51.5, 90.0] {
            for lng in [-180.0, -118.2437, -0.1278, 90.0, 179.0] {
                let p = lat_lng_to_vec3(lat, lng, 2.0);
                assert!((p.length() - 2.0).abs() < TOLERANCE, "({lat},{lng})");
            }
        }
    }

    #[test]
    fn longitude_is_periodic() {
        let a = lat_lng_to_vec3(34.0522, -118.2437, 2.0);
        let b = lat_lng_to_vec3(34.0522, -118.2437 + 360.0, 2.0);
        let c = lat_lng_to_vec3(34.0522, -118.2437 - 360.0, 2.0);
        assert!(a.distance(b) < TOLERANCE);
        assert!(a.distance(c) < TOLERANCE);
    }

    #[test]
    fn same_input_same_output() {
        let a = lat_lng_to_vec3(51.5074, -0.1278, 2.03);
        let b = lat_lng_to_vec3(51.5074, -0.1278, 2.03);
        assert_eq!(a, b);
    }
}
