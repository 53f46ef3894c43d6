//! In-memory fleet data shared by every dashboard page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Assets, events, and geofences are synthesized once in the browser and then
//! advanced by the simulation tick. Nothing is fetched or persisted.
//!
//! TRADE-OFFS
//! ==========
//! Seeding happens after hydration rather than during SSR, so the server
//! renders an empty fleet and relative timestamps never disagree between the
//! two passes.

#[cfg(test)]
#[path = "fleet_test.rs"]
mod fleet_test;

use std::collections::BTreeSet;

use fleet::asset::{Asset, Event, Geofence, Timestamp};
use fleet::insights::{self, Alert, AlertStatus};
use fleet::{seed, simulate};

/// Cap on retained events so a long-open map page does not grow unbounded.
pub const EVENT_LIMIT: usize = 500;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FleetState {
    pub assets: Vec<Asset>,
    pub events: Vec<Event>,
    pub geofences: Vec<Geofence>,
    /// Alert ids the operator has acknowledged.
    pub acknowledged: BTreeSet<String>,
    /// Asset highlighted on the map page.
    pub selected: Option<String>,
    /// Time of the last seed or tick.
    pub clock: Timestamp,
    pub loaded: bool,
}

impl FleetState {
    /// Fresh synthetic fleet anchored at `now`.
    #[must_use]
    pub fn seeded(now: Timestamp) -> Self {
        let assets = seed::assets(now);
        let events = seed::events(&assets, now);
        Self {
            assets,
            events,
            geofences: seed::geofences(),
            acknowledged: BTreeSet::new(),
            selected: None,
            clock: now,
            loaded: true,
        }
    }

    #[must_use]
    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Events for one asset, newest first.
    #[must_use]
    pub fn events_for(&self, asset_id: &str) -> Vec<&Event> {
        insights::events_newest_first(&self.events)
            .into_iter()
            .filter(|e| e.asset_id == asset_id)
            .collect()
    }

    /// Move assets forward to `now`. Returns how many geofence events fired.
    pub fn advance(&mut self, now: Timestamp) -> usize {
        if !self.loaded || now <= self.clock {
            return 0;
        }
        let fired = simulate::tick(&mut self.assets, &self.geofences, now - self.clock, now);
        self.clock = now;
        let count = fired.len();
        self.events.extend(fired);
        if self.events.len() > EVENT_LIMIT {
            let excess = self.events.len() - EVENT_LIMIT;
            self.events.drain(..excess);
            let live: BTreeSet<String> =
                insights::alerts(&self.assets, &self.events).into_iter().map(|a| a.id).collect();
            self.acknowledged.retain(|id| live.contains(id));
        }
        count
    }

    /// Alert feed with acknowledgements applied.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        let mut feed = insights::alerts(&self.assets, &self.events);
        for alert in &mut feed {
            if self.acknowledged.contains(&alert.id) {
                alert.status = AlertStatus::Acknowledged;
            }
        }
        feed
    }

    /// Acknowledge every alert currently in the feed.
    pub fn acknowledge_all(&mut self) {
        let ids: Vec<String> = insights::alerts(&self.assets, &self.events).into_iter().map(|a| a.id).collect();
        self.acknowledged.extend(ids);
    }

    /// Select `id`, or clear the selection when it is already selected.
    pub fn toggle_selected(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_owned());
        }
    }
}
