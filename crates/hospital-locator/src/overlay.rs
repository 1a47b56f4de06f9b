//! Map overlay model derived from a snapshot.
//!
//! The map view draws a marker for the user, one marker per hospital, and a
//! line from the user to the nearest hospital. This module computes that
//! description; rendering it is the presentation layer's job.

use locator_core::Coordinate;
use serde::Serialize;

use crate::state::LocatorSnapshot;

/// Initial zoom level for the hospital map.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Popup label of the user's own marker.
pub const USER_MARKER_LABEL: &str = "Your Location";

/// What a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    User,
    Hospital,
    NearestHospital,
}

/// One pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: Coordinate,
    pub label: String,
    pub kind: MarkerKind,
}

/// Straight line from the user to the nearest hospital.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLine {
    pub from: Coordinate,
    pub to: Coordinate,
    pub distance_meters: f64,
}

/// Everything the map view needs to draw for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOverlay {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
    pub route: Option<RouteLine>,
}

impl MapOverlay {
    /// Describe the map for `snapshot`.
    pub fn from_snapshot(snapshot: &LocatorSnapshot) -> Self {
        let user = snapshot.current_position();
        let nearest = snapshot.nearest();

        let mut markers = Vec::with_capacity(snapshot.facilities().len() + 1);
        markers.push(MapMarker {
            position: user,
            label: USER_MARKER_LABEL.to_string(),
            kind: MarkerKind::User,
        });

        let nearest_index = snapshot.nearest_index();
        for (index, facility) in snapshot.facilities().iter().enumerate() {
            markers.push(MapMarker {
                position: facility.position,
                label: facility.name.clone(),
                kind: if Some(index) == nearest_index {
                    MarkerKind::NearestHospital
                } else {
                    MarkerKind::Hospital
                },
            });
        }

        let route = nearest
            .zip(snapshot.nearest_distance())
            .map(|(facility, meters)| RouteLine {
                from: user,
                to: facility.position,
                distance_meters: meters.meters(),
            });

        Self {
            center: user,
            zoom: DEFAULT_MAP_ZOOM,
            markers,
            route,
        }
    }
}
