//! Asset, geofence and event model.
//!
//! Enum-keyed presentation data (icons, labels, badge classes) lives here as
//! `match` tables so adding a variant fails to compile until every table
//! covers it. Enums round-trip through their lowercase wire names.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub type Timestamp = i64;

/// A string did not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! wire_enum {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| ParseEnumError { kind: $kind, value: s.to_owned() })
            }
        }
    };
}

// =============================================================================
// ASSET ENUMS
// =============================================================================

/// Vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Truck,
    Van,
    Motorcycle,
    Ship,
    Aircraft,
}

impl AssetType {
    pub const ALL: [Self; 5] = [Self::Truck, Self::Van, Self::Motorcycle, Self::Ship, Self::Aircraft];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Truck => "truck",
            Self::Van => "van",
            Self::Motorcycle => "motorcycle",
            Self::Ship => "ship",
            Self::Aircraft => "aircraft",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Truck => "Truck",
            Self::Van => "Van",
            Self::Motorcycle => "Motorcycle",
            Self::Ship => "Ship",
            Self::Aircraft => "Aircraft",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Truck => "🚛",
            Self::Van => "🚐",
            Self::Motorcycle => "🏍️",
            Self::Ship => "🚢",
            Self::Aircraft => "✈️",
        }
    }
}

wire_enum!(AssetType, "asset type");

/// Operational status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Active,
    Inactive,
    Maintenance,
}

impl AssetStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Maintenance];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Maintenance => "maintenance",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Maintenance => "Maintenance",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge-success",
            Self::Inactive => "badge-ghost",
            Self::Maintenance => "badge-warning",
        }
    }
}

wire_enum!(AssetStatus, "asset status");

// =============================================================================
// ASSET
// =============================================================================

/// Last reported GPS fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub timestamp: Timestamp,
    /// km/h
    pub speed: f64,
    /// Degrees clockwise from north, `0..360`.
    pub heading: f64,
    /// Meters.
    pub accuracy: f64,
}

impl Location {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates { latitude: self.latitude, longitude: self.longitude }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub phone: String,
}

/// Delivery leg in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    /// Percentage in `0..=100`.
    pub progress: f64,
}

/// A tracked vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub status: AssetStatus,
    pub current_location: Option<Location>,
    pub last_update: Timestamp,
    pub driver: Option<Driver>,
    pub route: Option<Route>,
    pub created_at: Timestamp,
}

impl Asset {
    /// Current speed, `0.0` when no fix is known.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.current_location.as_ref().map_or(0.0, |l| l.speed)
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.current_location.as_ref().map(|l| l.address.as_str())
    }

    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.speed() > 0.0
    }
}

// =============================================================================
// GEOFENCES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeofenceKind {
    Warehouse,
    Port,
    Depot,
    Hub,
}

impl GeofenceKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warehouse => "Warehouse",
            Self::Port => "Port",
            Self::Depot => "Depot",
            Self::Hub => "Hub",
        }
    }
}

/// Named circular boundary around a facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geofence {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GeofenceKind,
    pub center: Coordinates,
    /// Meters.
    pub radius: f64,
    pub country: String,
}

// =============================================================================
// EVENTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    GeofenceEntry,
    GeofenceExit,
    SpeedChange,
    StatusChange,
    LocationUpdate,
}

impl EventKind {
    pub const ALL: [Self; 5] =
        [Self::GeofenceEntry, Self::GeofenceExit, Self::SpeedChange, Self::StatusChange, Self::LocationUpdate];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GeofenceEntry => "geofence_entry",
            Self::GeofenceExit => "geofence_exit",
            Self::SpeedChange => "speed_change",
            Self::StatusChange => "status_change",
            Self::LocationUpdate => "location_update",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GeofenceEntry => "Geofence Entry",
            Self::GeofenceExit => "Geofence Exit",
            Self::SpeedChange => "Speed Change",
            Self::StatusChange => "Status Change",
            Self::LocationUpdate => "Location Update",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::GeofenceEntry => "📍",
            Self::GeofenceExit => "📤",
            Self::SpeedChange => "⚡",
            Self::StatusChange => "🔄",
            Self::LocationUpdate => "📌",
        }
    }

    #[must_use]
    pub fn is_geofence(self) -> bool {
        matches!(self, Self::GeofenceEntry | Self::GeofenceExit)
    }
}

wire_enum!(EventKind, "event kind");

/// Something that happened to an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub asset_id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: Timestamp,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Historical GPS trail for one asset, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationHistory {
    pub asset_id: String,
    pub locations: Vec<Location>,
}

/// One point of a speed chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedSample {
    pub timestamp: Timestamp,
    pub speed: f64,
}
