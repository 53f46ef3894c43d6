//! Map marker styling, projection, and keyed reconciliation.
//!
//! DESIGN
//! ======
//! The map keeps one marker per asset that has a known location. When the
//! asset list changes the registry diffs it against the markers it holds:
//! stale ids are removed, existing ids are updated in place, and new ids are
//! created. A marker whose asset merely moved is never torn down. The actual
//! drawing sits behind `MarkerSurface` so the diff is testable without a
//! browser.

#[cfg(test)]
#[path = "markers_test.rs"]
mod markers_test;

use std::collections::{BTreeMap, HashSet};

use crate::asset::{Asset, AssetStatus, Coordinates, Geofence};

// =============================================================================
// PROJECTION
// =============================================================================

/// Geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Southeast Asia.
pub const MAP_BOUNDS: MapBounds = MapBounds { north: 20.0, south: -10.0, east: 130.0, west: 95.0 };

/// Initial view center (Singapore).
pub const MAP_CENTER: Coordinates = Coordinates { latitude: 1.3521, longitude: 103.8198 };

pub const MAP_ZOOM: u8 = 5;

/// Position inside the map viewport as percentages from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPosition {
    pub x_pct: f64,
    pub y_pct: f64,
}

impl MapBounds {
    /// Equirectangular projection into `0..=100` percent. Points outside the
    /// box are pinned to its edge.
    #[must_use]
    pub fn project(&self, at: Coordinates) -> MapPosition {
        let x = (at.longitude - self.west) / (self.east - self.west) * 100.0;
        let y = (self.north - at.latitude) / (self.north - self.south) * 100.0;
        MapPosition { x_pct: x.clamp(0.0, 100.0), y_pct: y.clamp(0.0, 100.0) }
    }

    #[must_use]
    pub fn contains(&self, at: Coordinates) -> bool {
        (self.south..=self.north).contains(&at.latitude) && (self.west..=self.east).contains(&at.longitude)
    }
}

/// Closed polygon approximating a geofence circle, `points + 1` vertices.
#[must_use]
pub fn geofence_ring(geofence: &Geofence, points: usize) -> Vec<Coordinates> {
    let km = geofence.radius / 1000.0;
    let lat = geofence.center.latitude;
    let lng = geofence.center.longitude;
    let steps = points.max(3);
    (0..=steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let angle = (i as f64 / steps as f64) * std::f64::consts::TAU;
            Coordinates {
                latitude: lat + km * angle.sin() / 110.574,
                longitude: lng + km * angle.cos() / (111.32 * lat.to_radians().cos()),
            }
        })
        .collect()
}

// =============================================================================
// STYLE
// =============================================================================

/// Fill color for an asset marker: maintenance red, inactive gray, moving
/// green, stopped amber.
#[must_use]
pub fn marker_color(status: AssetStatus, speed: f64) -> &'static str {
    match status {
        AssetStatus::Maintenance => "#EF4444",
        AssetStatus::Inactive => "#6B7280",
        AssetStatus::Active if speed > 0.0 => "#10B981",
        AssetStatus::Active => "#F59E0B",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub icon: &'static str,
    /// Draws the pulsing motion badge.
    pub moving: bool,
    /// Draws the status dot under the marker.
    pub active: bool,
    /// Draws the highlight ring.
    pub selected: bool,
}

/// Everything needed to draw or update one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: String,
    pub name: String,
    pub at: Coordinates,
    pub position: MapPosition,
    pub speed: f64,
    pub status: AssetStatus,
    pub address: String,
    pub style: MarkerStyle,
}

impl MarkerSpec {
    /// `None` for assets without a current location.
    #[must_use]
    pub fn for_asset(asset: &Asset, selected: Option<&str>) -> Option<Self> {
        let location = asset.current_location.as_ref()?;
        let at = location.coordinates();
        Some(Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            at,
            position: MAP_BOUNDS.project(at),
            speed: location.speed,
            status: asset.status,
            address: location.address.clone(),
            style: MarkerStyle {
                color: marker_color(asset.status, location.speed),
                icon: asset.kind.icon(),
                moving: location.speed > 0.0,
                active: asset.status == AssetStatus::Active,
                selected: selected == Some(asset.id.as_str()),
            },
        })
    }
}

/// Specs for every placeable asset, in list order.
#[must_use]
pub fn marker_specs(assets: &[Asset], selected: Option<&str>) -> Vec<MarkerSpec> {
    assets.iter().filter_map(|a| MarkerSpec::for_asset(a, selected)).collect()
}

// =============================================================================
// RECONCILIATION
// =============================================================================

/// Drawing backend for markers.
pub trait MarkerSurface {
    type Handle;

    fn create(&mut self, spec: &MarkerSpec) -> Self::Handle;
    fn update(&mut self, handle: &mut Self::Handle, spec: &MarkerSpec);
    fn remove(&mut self, handle: Self::Handle);
}

/// Ids touched by one reconcile pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
}

impl ReconcileReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Asset id to marker handle.
#[derive(Debug)]
pub struct MarkerRegistry<H> {
    markers: BTreeMap<String, H>,
}

impl<H> Default for MarkerRegistry<H> {
    fn default() -> Self {
        Self { markers: BTreeMap::new() }
    }
}

impl<H> MarkerRegistry<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&H> {
        self.markers.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &H)> {
        self.markers.iter().map(|(id, h)| (id.as_str(), h))
    }

    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.markers.keys().cloned().collect()
    }

    /// Removes stale markers, then updates or creates one per spec.
    pub fn reconcile<S>(&mut self, specs: &[MarkerSpec], surface: &mut S) -> ReconcileReport
    where
        S: MarkerSurface<Handle = H>,
    {
        let mut report = ReconcileReport::default();
        let live: HashSet<&str> = specs.iter().map(|s| s.id.as_str()).collect();

        let stale: Vec<String> = self.markers.keys().filter(|id| !live.contains(id.as_str())).cloned().collect();
        for id in stale {
            if let Some(handle) = self.markers.remove(&id) {
                surface.remove(handle);
                report.removed.push(id);
            }
        }

        for spec in specs {
            if let Some(handle) = self.markers.get_mut(&spec.id) {
                surface.update(handle, spec);
                report.updated.push(spec.id.clone());
            } else {
                let handle = surface.create(spec);
                self.markers.insert(spec.id.clone(), handle);
                report.created.push(spec.id.clone());
            }
        }
        report
    }

    /// Removes every marker.
    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: MarkerSurface<Handle = H>,
    {
        for (_, handle) in std::mem::take(&mut self.markers) {
            surface.remove(handle);
        }
    }
}
