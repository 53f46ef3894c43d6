//! Derived dashboard views: headline stats, action list, route progress,
//! operational snapshot, recent events, the alerts feed, and the geofence
//! summary.
//!
//! Everything here is a pure function of the asset and event lists plus a
//! caller-supplied clock, so the overview and alerts pages can memoize each
//! view separately.

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

use serde::{Deserialize, Serialize};

use crate::asset::{Asset, AssetStatus, Event, EventKind, Geofence, GeofenceKind, Timestamp};

/// Active assets stopped for longer than this need attention.
pub const STALE_STOP_MS: i64 = 10 * 60 * 1000;
pub const ACTION_LIMIT: usize = 5;
pub const ROUTE_LIMIT: usize = 4;
pub const RECENT_EVENT_LIMIT: usize = 6;

// =============================================================================
// HEADLINE STATS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    /// Active and reporting a non-zero speed.
    pub moving: usize,
    /// Assets in maintenance.
    pub alerts: usize,
}

impl DashboardStats {
    #[must_use]
    pub fn from_assets(assets: &[Asset]) -> Self {
        let active = assets.iter().filter(|a| a.status == AssetStatus::Active);
        Self {
            total: assets.len(),
            active: active.clone().count(),
            moving: active.filter(|a| a.is_moving()).count(),
            alerts: assets.iter().filter(|a| a.status == AssetStatus::Maintenance).count(),
        }
    }

    /// Share of the fleet that is active, rounded percent.
    #[must_use]
    pub fn active_rate(&self) -> u32 {
        percent(self.active, self.total)
    }

    /// Share of active assets in motion, rounded percent.
    #[must_use]
    pub fn moving_rate(&self) -> u32 {
        percent(self.moving, self.active)
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

// =============================================================================
// ACTION REQUIRED
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionLabel {
    Maintenance,
    Offline,
    Stopped,
    Monitor,
}

impl ActionLabel {
    #[must_use]
    pub fn for_asset(asset: &Asset) -> Self {
        match asset.status {
            AssetStatus::Maintenance => Self::Maintenance,
            AssetStatus::Inactive => Self::Offline,
            AssetStatus::Active if asset.is_moving() => Self::Monitor,
            AssetStatus::Active => Self::Stopped,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Offline => "Offline",
            Self::Stopped => "Stopped",
            Self::Monitor => "Monitor",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Maintenance => "badge-error",
            Self::Offline => "badge-ghost",
            Self::Stopped => "badge-warning",
            Self::Monitor => "badge-info",
        }
    }
}

/// Attention score: maintenance 3, offline 2, stale stop 1, otherwise none.
#[must_use]
pub fn action_severity(asset: &Asset, now: Timestamp) -> Option<u8> {
    match asset.status {
        AssetStatus::Maintenance => Some(3),
        AssetStatus::Inactive => Some(2),
        AssetStatus::Active if !asset.is_moving() && now - asset.last_update > STALE_STOP_MS => Some(1),
        AssetStatus::Active => None,
    }
}

/// Up to `ACTION_LIMIT` assets needing attention, most severe first.
#[must_use]
pub fn action_required(assets: &[Asset], now: Timestamp) -> Vec<&Asset> {
    let mut scored: Vec<(u8, &Asset)> =
        assets.iter().filter_map(|a| action_severity(a, now).map(|s| (s, a))).collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(ACTION_LIMIT).map(|(_, a)| a).collect()
}

// =============================================================================
// ROUTES AND SNAPSHOT
// =============================================================================

/// Up to `ROUTE_LIMIT` routed assets, furthest along first.
#[must_use]
pub fn route_progress(assets: &[Asset]) -> Vec<&Asset> {
    let mut routed: Vec<&Asset> = assets.iter().filter(|a| a.route.is_some()).collect();
    routed.sort_by(|a, b| {
        let pa = a.route.as_ref().map_or(0.0, |r| r.progress);
        let pb = b.route.as_ref().map_or(0.0, |r| r.progress);
        pb.total_cmp(&pa)
    });
    routed.truncate(ROUTE_LIMIT);
    routed
}

/// Mean speed of moving assets, one decimal, 0 when nothing moves.
#[must_use]
pub fn average_speed(assets: &[Asset]) -> f64 {
    let speeds: Vec<f64> = assets.iter().map(Asset::speed).filter(|s| *s > 0.0).collect();
    if speeds.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let mean = speeds.iter().sum::<f64>() / speeds.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationalSnapshot {
    pub total: usize,
    pub moving: usize,
    pub maintenance: usize,
    pub inactive: usize,
    pub average_speed: f64,
    /// Geofence entries plus exits.
    pub geofence_activity: usize,
}

impl OperationalSnapshot {
    #[must_use]
    pub fn new(assets: &[Asset], events: &[Event]) -> Self {
        let count = |status: AssetStatus| assets.iter().filter(|a| a.status == status).count();
        Self {
            total: assets.len(),
            moving: assets.iter().filter(|a| a.is_moving()).count(),
            maintenance: count(AssetStatus::Maintenance),
            inactive: count(AssetStatus::Inactive),
            average_speed: average_speed(assets),
            geofence_activity: events.iter().filter(|e| e.kind.is_geofence()).count(),
        }
    }
}

/// All events newest first; ties keep input order.
#[must_use]
pub fn events_newest_first(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

#[must_use]
pub fn recent_events(events: &[Event]) -> Vec<&Event> {
    let mut sorted = events_newest_first(events);
    sorted.truncate(RECENT_EVENT_LIMIT);
    sorted
}

// =============================================================================
// ALERTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Info => "badge-info",
            Self::Warning => "badge-warning",
            Self::Critical => "badge-error",
        }
    }
}

/// What raised an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertKind {
    Maintenance,
    Event(EventKind),
}

impl AlertKind {
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Maintenance => Severity::Critical,
            Self::Event(EventKind::GeofenceExit | EventKind::StatusChange) => Severity::Warning,
            Self::Event(EventKind::GeofenceEntry | EventKind::SpeedChange | EventKind::LocationUpdate) => {
                Severity::Info
            }
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Maintenance => "Maintenance",
            Self::Event(kind) => kind.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Open,
    Acknowledged,
}

impl AlertStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Acknowledged => "acknowledged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub kind: AlertKind,
    pub description: String,
    pub timestamp: Timestamp,
    pub severity: Severity,
    pub status: AlertStatus,
}

/// One critical alert per asset in maintenance plus one per event, newest
/// first. Events for unknown assets are labelled with the raw asset id.
#[must_use]
pub fn alerts(assets: &[Asset], events: &[Event]) -> Vec<Alert> {
    let maintenance = assets.iter().filter(|a| a.status == AssetStatus::Maintenance).map(|a| Alert {
        id: format!("{}-maintenance", a.id),
        asset_id: a.id.clone(),
        asset_name: a.name.clone(),
        kind: AlertKind::Maintenance,
        description: "Asset requires maintenance review".to_owned(),
        timestamp: a.last_update,
        severity: Severity::Critical,
        status: AlertStatus::Open,
    });
    let from_events = events.iter().map(|e| {
        let kind = AlertKind::Event(e.kind);
        Alert {
            id: e.id.clone(),
            asset_id: e.asset_id.clone(),
            asset_name: assets
                .iter()
                .find(|a| a.id == e.asset_id)
                .map_or_else(|| e.asset_id.clone(), |a| a.name.clone()),
            kind,
            description: e.description.clone(),
            timestamp: e.timestamp,
            severity: kind.severity(),
            status: AlertStatus::Open,
        }
    });
    let mut rows: Vec<Alert> = maintenance.chain(from_events).collect();
    rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    rows
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl AlertSummary {
    #[must_use]
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        let count = |s: Severity| alerts.iter().filter(|a| a.severity == s).count();
        Self {
            total: alerts.len(),
            critical: count(Severity::Critical),
            warning: count(Severity::Warning),
            info: count(Severity::Info),
        }
    }
}

// =============================================================================
// GEOFENCES
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeofenceSummary {
    pub total: usize,
    pub warehouses: usize,
    pub ports: usize,
    /// Hubs and depots together.
    pub hubs: usize,
}

impl GeofenceSummary {
    #[must_use]
    pub fn from_geofences(geofences: &[Geofence]) -> Self {
        let count = |kinds: &[GeofenceKind]| geofences.iter().filter(|g| kinds.contains(&g.kind)).count();
        Self {
            total: geofences.len(),
            warehouses: count(&[GeofenceKind::Warehouse]),
            ports: count(&[GeofenceKind::Port]),
            hubs: count(&[GeofenceKind::Hub, GeofenceKind::Depot]),
        }
    }
}

// =============================================================================
// TIME
// =============================================================================

/// "Just now", "Nm ago", "Nh ago" or "Nd ago"; "Unknown" without a timestamp.
#[must_use]
pub fn format_relative_time(timestamp: Option<Timestamp>, now: Timestamp) -> String {
    let Some(ts) = timestamp else {
        return "Unknown".to_owned();
    };
    let minutes = (now - ts).div_euclid(60_000);
    if minutes < 1 {
        return "Just now".to_owned();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}
