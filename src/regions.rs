use bevy::platform::collections::HashSet;
use bevy::prelude::*;

pub struct RegionsPlugin;

impl Plugin for RegionsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RegionRegistry::from_slice(REGIONS));
    }
}

/// A named geographic location shown on the globe.
///
/// Adding a region is a data-only change: append to [`REGIONS`].
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id:        &'static str,
    pub lat:       f32,
    pub lng:       f32,
    pub title:     &'static str,
    pub subtitle:  Option<&'static str>,
    pub phone:     Option<&'static str>,
    /// Reserved for future use (e.g. drawing a coverage circle).
    pub radius_km: Option<f32>,
}

pub const REGIONS: &[Region] = &[
    Region {
        id:        "usa-la",
        lat:       34.0522,
        lng:       -118.2437,
        title:     "USA",
        subtitle:  Some("Los Angeles, Beverly Hills 55a"),
        phone:     Some("+1 213-555-0173"),
        radius_km: None,
    },
    Region {
        id:        "uk-lon",
        lat:       51.5074,
        lng:       -0.1278,
        title:     "United Kingdom",
        subtitle:  Some("London, Borton str. 88"),
        phone:     Some("+44 20 7946 0958"),
        radius_km: None,
    },
];

/// Ordered, read-only set of regions, fixed for the lifetime of the app.
///
/// Ids are unique: a later entry reusing an earlier id is dropped at load
/// time so hotspot hit-results always resolve to one well-defined region.
#[derive(Resource, Debug)]
pub struct RegionRegistry {
    regions: Vec<Region>,
}

impl RegionRegistry {
    pub fn from_slice(source: &[Region]) -> Self {
        let mut seen: HashSet<&str> = HashSet::default();
        let mut regions = Vec::with_capacity(source.len());
        for region in source {
            if seen.insert(region.id) {
                debug!("loaded region {:?}", region);
                regions.push(region.clone());
            } else {
                warn!("duplicate region id {:?} dropped", region.id);
            }
        }
        Self { regions }
    }

    pub fn get(&self, index: usize) -> Option<&Region> { self.regions.get(index) }

    pub fn iter(&self) -> impl Iterator<Item = &Region> { self.regions.iter() }

    #[cfg(test)]
    pub fn len(&self) -> usize { self.regions.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUPLICATED: &[Region] = &[
        Region {
            id:        "twin",
            lat:       0.0,
            lng:       0.0,
            title:     "First",
            subtitle:  None,
            phone:     None,
            radius_km: None,
        },
        Region {
            id:        "solo",
            lat:       10.0,
            lng:       10.0,
            title:     "Solo",
            subtitle:  None,
            phone:     None,
            radius_km: None,
        },
        Region {
            id:        "twin",
            lat:       20.0,
            lng:       20.0,
            title:     "Second",
            subtitle:  None,
            phone:     None,
            radius_km: None,
        },
    ];

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let registry = RegionRegistry::from_slice(DUPLICATED);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(0).map(|r| r.title), Some("First"));
        assert_eq!(registry.get(1).map(|r| r.id), Some("solo"));
    }

    #[test]
    fn registry_preserves_source_order() {
        let registry = RegionRegistry::from_slice(REGIONS);
        let ids: Vec<_> = registry.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["usa-la", "uk-lon"]);
    }

    #[test]
    fn empty_source_yields_empty_registry() {
        let registry = RegionRegistry::from_slice(&[]);
        assert_eq!(registry.len(), 0);
        assert!(registry.get(0).is_none());
    }
}
