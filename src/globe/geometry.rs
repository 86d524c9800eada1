// These casts are intentional: lattice indices and degree steps are tiny,
// and narrowing f64 lattice math to f32 render coordinates is the point
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use bevy::asset::RenderAssetUsages;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use super::GlobeNode;
use super::constants::*;
use crate::coords::lat_lng_to_vec3;
use crate::regions::RegionRegistry;
use crate::state::ViewScoped;
use crate::state::ViewState;

pub struct GeometryPlugin;

impl Plugin for GeometryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(ViewState::Mounted), spawn_globe);
    }
}

/// Invisible hit-target for one region.
///
/// `region` indexes into [`RegionRegistry`]; that index is the only mapping
/// from a hit back to its region data. Hotspots are intentionally spawned
/// flat in world space rather than as children of [`GlobeNode`], so they do
/// not follow the globe's rotation.
#[derive(Component, Debug)]
pub struct Hotspot {
    pub region: usize,
    pub radius: f32,
}

/// Builds the whole scene for one mounted view: shell, wireframe outline,
/// graticule, point cloud and region dots under a single rotatable node,
/// plus one hotspot per region beside it.
fn spawn_globe(
    mut commands: Commands,
    registry: Res<RegionRegistry>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    debug!("spawning globe scene");

    let shell_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.02, 0.02, 0.02),
        unlit: true,
        ..default()
    });
    let wireframe_material = materials.add(line_material(0.12));
    let graticule_material = materials.add(line_material(0.35));
    let point_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.65),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let dot_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let point_mesh = meshes.add(Sphere::new(POINT_CLOUD_DOT_RADIUS));
    let region_dot_mesh = meshes.add(Sphere::new(REGION_DOT_RADIUS));

    commands
        .spawn((
            GlobeNode,
            ViewScoped,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|globe| {
            // Base shell, present only to occlude geometry behind it.
            globe.spawn((
                Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS))),
                MeshMaterial3d(shell_material),
            ));

            // Coarse triangulated outline rendered as faint line segments.
            globe.spawn((
                Mesh3d(meshes.add(wireframe_mesh(
                    GLOBE_RADIUS,
                    WIREFRAME_SECTORS,
                    WIREFRAME_STACKS,
                ))),
                MeshMaterial3d(wireframe_material),
            ));

            for polyline in graticule_polylines(GLOBE_RADIUS + GRATICULE_LIFT) {
                globe.spawn((
                    Mesh3d(meshes.add(dashed_line_mesh(&polyline))),
                    MeshMaterial3d(graticule_material.clone()),
                ));
            }

            // Stippled surface: one shared tiny mesh, many instances.
            for (lat, lng) in fibonacci_lattice(POINT_CLOUD_COUNT) {
                globe.spawn((
                    Mesh3d(point_mesh.clone()),
                    MeshMaterial3d(point_material.clone()),
                    Transform::from_translation(lat_lng_to_vec3(
                        lat,
                        lng,
                        GLOBE_RADIUS + POINT_CLOUD_LIFT,
                    )),
                ));
            }

            // Visible marker dots rotate with the globe.
            for region in registry.iter() {
                globe.spawn((
                    Mesh3d(region_dot_mesh.clone()),
                    MeshMaterial3d(dot_material.clone()),
                    Transform::from_translation(lat_lng_to_vec3(
                        region.lat,
                        region.lng,
                        GLOBE_RADIUS + HOTSPOT_LIFT,
                    )),
                ));
            }
        });

    // Hit-targets live outside the rotatable node and carry no mesh at all;
    // intersection is analytic, so "invisible" costs nothing to render.
    for (index, region) in registry.iter().enumerate() {
        commands.spawn((
            Hotspot {
                region: index,
                radius: HOTSPOT_HIT_RADIUS,
            },
            ViewScoped,
            Transform::from_translation(lat_lng_to_vec3(
                region.lat,
                region.lng,
                GLOBE_RADIUS + HOTSPOT_LIFT,
            )),
        ));
    }
}

fn line_material(alpha: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, alpha),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

/// Quasi-uniform point distribution over the sphere via a Fibonacci lattice:
/// `lat = asin(2·i/n − 1)`, `lng = (360·i/φ) mod 360 − 180`, φ the golden
/// ratio. Even angular density, no pole clustering. Returns degrees.
pub fn fibonacci_lattice(count: usize) -> Vec<(f32, f32)> {
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f64 / count as f64;
        let lat = (2.0 * t - 1.0).asin().to_degrees();
        let lng = (360.0 * i as f64 / golden_ratio) % 360.0 - 180.0;
        points.push((lat as f32, lng as f32));
    }
    points
}

/// All graticule polylines at the given radius: latitude rings every
/// [`LATITUDE_RING_STEP`]° within ±[`LATITUDE_RING_MAX`]°, longitude arcs
/// every [`LONGITUDE_ARC_STEP`]° spanning ±[`LONGITUDE_ARC_LAT_MAX`]°
/// latitude, each sampled at [`GRATICULE_SAMPLE_STEP`]°.
pub fn graticule_polylines(radius: f32) -> Vec<Vec<Vec3>> {
    let mut polylines = Vec::new();

    let mut lat = -LATITUDE_RING_MAX;
    while lat <= LATITUDE_RING_MAX {
        let samples = (0..=360)
            .step_by(GRATICULE_SAMPLE_STEP as usize)
            .map(|deg| lat_lng_to_vec3(lat as f32, (deg - 180) as f32, radius))
            .collect();
        polylines.push(samples);
        lat += LATITUDE_RING_STEP;
    }

    let mut lng = -180;
    while lng < 180 {
        let samples = (-LONGITUDE_ARC_LAT_MAX..=LONGITUDE_ARC_LAT_MAX)
            .step_by(GRATICULE_SAMPLE_STEP as usize)
            .map(|deg| lat_lng_to_vec3(deg as f32, lng as f32, radius))
            .collect();
        polylines.push(samples);
        lng += LONGITUDE_ARC_STEP;
    }

    polylines
}

/// Connects consecutive samples into a dashed line: of every
/// [`DASH_PERIOD`] segments, the first [`DASH_FILL`] are kept.
pub fn dashed_line_mesh(samples: &[Vec3]) -> Mesh {
    let mut positions: Vec<Vec3> = Vec::new();
    for (i, pair) in samples.windows(2).enumerate() {
        if i % DASH_PERIOD < DASH_FILL {
            positions.push(pair[0]);
            positions.push(pair[1]);
        }
    }
    line_list_mesh(positions)
}

/// Edge lines of a coarse UV sphere: horizontal ring segments plus vertical
/// meridian segments, the "technical" outline under the graticule.
pub fn wireframe_mesh(radius: f32, sectors: usize, stacks: usize) -> Mesh {
    let vertex = |sector: usize, stack: usize| {
        let lat = 90.0 - 180.0 * stack as f32 / stacks as f32;
        let lng = -180.0 + 360.0 * sector as f32 / sectors as f32;
        lat_lng_to_vec3(lat, lng, radius)
    };

    let mut positions: Vec<Vec3> = Vec::new();
    for stack in 0..=stacks {
        for sector in 0..sectors {
            // ring segment (degenerate at the poles, skipped)
            if stack != 0 && stack != stacks {
                positions.push(vertex(sector, stack));
                positions.push(vertex(sector + 1, stack));
            }
            // meridian segment
            if stack < stacks {
                positions.push(vertex(sector, stack));
                positions.push(vertex(sector, stack + 1));
            }
        }
    }

    line_list_mesh(positions)
}

/// Position-only line vertices plus outward normals; the mesh pipeline
/// expects a normal attribute even on unlit line geometry.
fn line_list_mesh(positions: Vec<Vec3>) -> Mesh {
    let normals: Vec<Vec3> = positions.iter().map(|p| p.normalize_or(Vec3::Y)).collect();
    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}
