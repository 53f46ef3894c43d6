//! Overview widget layout engine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overview page shows eight widgets in a grid four units wide. The user
//! can reorder widgets by dragging and can expand any widget to a full row.
//! This module owns the packing of the ordered widget list into rows and the
//! reorder operation applied on drop.
//!
//! PACKING
//! =======
//! Walk the order, accumulating widgets into the current row while the summed
//! weight stays within `ROW_UNITS` (weight 4 when expanded, otherwise 2 for
//! large widgets and 1 for small). A full-width widget always closes its row.
//! Each closed row is then widened to exactly `ROW_UNITS`:
//!
//! - a lone widget takes the whole row;
//! - leftover units are split evenly across the large members, remainder one
//!   unit at a time starting from the first large member;
//! - with no large member, the first member takes all leftover units.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

/// Grid width in layout units.
pub const ROW_UNITS: u8 = 4;

// =============================================================================
// WIDGETS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetId {
    Stats,
    Speed,
    Action,
    Routes,
    Map,
    Snapshot,
    Events,
    Links,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetSize {
    Large,
    Small,
}

impl WidgetSize {
    #[must_use]
    pub fn weight(self) -> u8 {
        match self {
            Self::Large => 2,
            Self::Small => 1,
        }
    }
}

impl WidgetId {
    pub const DEFAULT_ORDER: [Self; 8] =
        [Self::Stats, Self::Speed, Self::Action, Self::Routes, Self::Map, Self::Snapshot, Self::Events, Self::Links];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Speed => "speed",
            Self::Action => "action",
            Self::Routes => "routes",
            Self::Map => "map",
            Self::Snapshot => "snapshot",
            Self::Events => "events",
            Self::Links => "links",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::DEFAULT_ORDER.into_iter().find(|w| w.as_str() == name)
    }

    #[must_use]
    pub fn size(self) -> WidgetSize {
        match self {
            Self::Stats | Self::Speed | Self::Map => WidgetSize::Large,
            Self::Action | Self::Routes | Self::Snapshot | Self::Events | Self::Links => WidgetSize::Small,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Stats => "Key Metrics",
            Self::Speed => "Fleet Speed Trend",
            Self::Action => "Action Required",
            Self::Routes => "Active Routes",
            Self::Map => "Map Overview",
            Self::Snapshot => "Operational Snapshot",
            Self::Events => "Recent Events",
            Self::Links => "Quick Links",
        }
    }

    /// Whether the widget renders inside a titled card. The metrics strip
    /// draws its own tiles.
    #[must_use]
    pub fn framed(self) -> bool {
        !matches!(self, Self::Stats)
    }

    #[must_use]
    pub fn weight(self, expanded: bool) -> u8 {
        if expanded { ROW_UNITS } else { self.size().weight() }
    }
}

// =============================================================================
// PACKING
// =============================================================================

/// Placement of one widget in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: WidgetId,
    /// Columns occupied, `1..=ROW_UNITS`.
    pub span: u8,
    /// 0-based row index.
    pub row: usize,
}

/// Pack `order` into rows of `ROW_UNITS`, in order.
#[must_use]
pub fn compute_layout(order: &[WidgetId], expanded: &[WidgetId]) -> Vec<LayoutItem> {
    let mut items = Vec::with_capacity(order.len());
    let mut row: Vec<(WidgetId, u8)> = Vec::new();
    let mut used: u8 = 0;

    for &id in order {
        let weight = id.weight(expanded.contains(&id));
        if !row.is_empty() && used + weight > ROW_UNITS {
            close_row(&mut items, &mut row);
            used = 0;
        }
        row.push((id, weight));
        used += weight;
        if weight == ROW_UNITS {
            close_row(&mut items, &mut row);
            used = 0;
        }
    }
    close_row(&mut items, &mut row);
    items
}

fn close_row(items: &mut Vec<LayoutItem>, row: &mut Vec<(WidgetId, u8)>) {
    if row.is_empty() {
        return;
    }
    let index = items.last().map_or(0, |last: &LayoutItem| last.row + 1);
    let spans = widen_row(row);
    items.extend(row.drain(..).zip(spans).map(|((id, _), span)| LayoutItem { id, span, row: index }));
}

fn widen_row(row: &[(WidgetId, u8)]) -> Vec<u8> {
    let mut spans: Vec<u8> = row.iter().map(|&(_, w)| w).collect();
    if spans.len() == 1 {
        spans[0] = ROW_UNITS;
        return spans;
    }

    let used: u8 = spans.iter().sum();
    let empty = ROW_UNITS.saturating_sub(used);
    if empty == 0 {
        return spans;
    }

    let larges: Vec<usize> =
        row.iter().enumerate().filter(|(_, (id, _))| id.size() == WidgetSize::Large).map(|(i, _)| i).collect();
    if larges.is_empty() {
        spans[0] += empty;
        return spans;
    }

    let count = u8::try_from(larges.len()).unwrap_or(ROW_UNITS);
    let extra = empty / count;
    let mut remaining = empty % count;
    for i in larges {
        spans[i] += extra;
        if remaining > 0 {
            spans[i] += 1;
            remaining -= 1;
        }
    }
    spans
}

// =============================================================================
// REORDER
// =============================================================================

/// Side of the drop target the dragged widget lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Before,
    After,
}

/// Move `source` next to `target`. `None` when nothing moves: the two ids
/// are equal or either is missing from `order`.
#[must_use]
pub fn reorder(order: &[WidgetId], source: WidgetId, target: WidgetId, placement: Placement) -> Option<Vec<WidgetId>> {
    if source == target || !order.contains(&source) {
        return None;
    }
    let mut next: Vec<WidgetId> = order.iter().copied().filter(|&id| id != source).collect();
    let index = next.iter().position(|&id| id == target)?;
    let at = match placement {
        Placement::Before => index,
        Placement::After => index + 1,
    };
    next.insert(at, source);
    Some(next)
}

/// Known ids from `ids`, first occurrence wins, followed by any default ids
/// that were missing.
#[must_use]
pub fn normalize_order(ids: impl IntoIterator<Item = WidgetId>) -> Vec<WidgetId> {
    let mut order: Vec<WidgetId> = Vec::with_capacity(WidgetId::DEFAULT_ORDER.len());
    for id in ids {
        if !order.contains(&id) {
            order.push(id);
        }
    }
    for id in WidgetId::DEFAULT_ORDER {
        if !order.contains(&id) {
            order.push(id);
        }
    }
    order
}

// =============================================================================
// LAYOUT STATE
// =============================================================================

/// User-arranged widget order plus the expanded set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLayout {
    order: Vec<WidgetId>,
    expanded: Vec<WidgetId>,
}

impl Default for WidgetLayout {
    fn default() -> Self {
        Self { order: WidgetId::DEFAULT_ORDER.to_vec(), expanded: Vec::new() }
    }
}

impl WidgetLayout {
    /// Builds a layout whose order is always a permutation of every widget.
    #[must_use]
    pub fn new(order: impl IntoIterator<Item = WidgetId>, expanded: impl IntoIterator<Item = WidgetId>) -> Self {
        let mut set = Vec::new();
        for id in expanded {
            if !set.contains(&id) {
                set.push(id);
            }
        }
        Self { order: normalize_order(order), expanded: set }
    }

    #[must_use]
    pub fn order(&self) -> &[WidgetId] {
        &self.order
    }

    #[must_use]
    pub fn expanded(&self) -> &[WidgetId] {
        &self.expanded
    }

    #[must_use]
    pub fn is_expanded(&self, id: WidgetId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn toggle_expanded(&mut self, id: WidgetId) {
        if let Some(i) = self.expanded.iter().position(|&e| e == id) {
            self.expanded.remove(i);
        } else {
            self.expanded.push(id);
        }
    }

    /// Applies a drop. Returns whether the order changed.
    pub fn move_widget(&mut self, source: WidgetId, target: WidgetId, placement: Placement) -> bool {
        match reorder(&self.order, source, target, placement) {
            Some(next) if next != self.order => {
                self.order = next;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn items(&self) -> Vec<LayoutItem> {
        compute_layout(&self.order, &self.expanded)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
