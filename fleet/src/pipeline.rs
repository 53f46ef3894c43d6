//! Filter / sort / paginate pipeline over the in-memory asset list.
//!
//! DESIGN
//! ======
//! Each stage is a pure function so the client can memoize them
//! independently: filtering borrows from the source slice and keeps source
//! order, sorting reorders the filtered borrow list (never the source), and
//! pagination slices the sorted list. `AssetQuery::run` chains the three.
//!
//! TRADE-OFFS
//! ==========
//! The requested page is clamped at view time rather than rewritten when a
//! filter shrinks the result set, so widening the filter again returns the
//! user to the page they were on.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::asset::{Asset, AssetStatus, AssetType};

/// Rows per table page.
pub const PAGE_SIZE: usize = 20;

// =============================================================================
// FILTER
// =============================================================================

/// Either every value, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Choice<T> {
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFilter {
    pub status: Choice<AssetStatus>,
    pub kind: Choice<AssetType>,
    pub search: String,
}

impl AssetFilter {
    /// Status AND type AND (id OR name OR address contains the search text,
    /// case-insensitively). Blank search text matches everything.
    #[must_use]
    pub fn matches(&self, asset: &Asset) -> bool {
        self.status.admits(&asset.status) && self.kind.admits(&asset.kind) && search_matches(&self.search, asset)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status == Choice::All && self.kind == Choice::All && self.search.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn search_matches(search: &str, asset: &Asset) -> bool {
    if search.trim().is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    asset.id.to_lowercase().contains(&needle)
        || asset.name.to_lowercase().contains(&needle)
        || asset.address().is_some_and(|a| a.to_lowercase().contains(&needle))
}

/// Assets admitted by `filter`, in source order.
#[must_use]
pub fn filter_assets<'a>(assets: &'a [Asset], filter: &AssetFilter) -> Vec<&'a Asset> {
    assets.iter().filter(|a| filter.matches(a)).collect()
}

// =============================================================================
// SORT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Name,
    Type,
    Status,
    Speed,
    LastUpdate,
}

impl SortField {
    pub const ALL: [Self; 6] = [Self::Id, Self::Name, Self::Type, Self::Status, Self::Speed, Self::LastUpdate];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Type => "Type",
            Self::Status => "Status",
            Self::Speed => "Speed",
            Self::LastUpdate => "Last Update",
        }
    }

    fn compare(self, a: &Asset, b: &Asset) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Type => a.kind.as_str().cmp(b.kind.as_str()),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
            Self::Speed => a.speed().total_cmp(&b.speed()),
            Self::LastUpdate => a.last_update.cmp(&b.last_update),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self { field: SortField::Id, direction: SortDirection::Asc }
    }
}

impl SortState {
    /// Header click: same field flips direction, a new field starts ascending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Arrow to show next to `field`'s header, if it is the active one.
    #[must_use]
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        (self.field == field).then(|| self.direction.arrow())
    }
}

/// Stable sort of the filtered rows; ties keep their filtered order.
pub fn sort_assets(rows: &mut [&Asset], sort: SortState) {
    rows.sort_by(|a, b| {
        let ord = sort.field.compare(a, b);
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

// =============================================================================
// PAGINATE
// =============================================================================

/// Number of pages for `total` rows; an empty set still has one (empty) page.
#[must_use]
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp a 1-based page into `1..=page_count(total)`.
#[must_use]
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, page_count(total))
}

/// Rows of 1-based `page`; the page is clamped first.
#[must_use]
pub fn paginate<'r, 'a>(rows: &'r [&'a Asset], page: usize) -> &'r [&'a Asset] {
    let page = clamp_page(page, rows.len());
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());
    rows.get(start..end).unwrap_or_default()
}

/// Page navigation: returns the new page when `requested` is in range.
#[must_use]
pub fn goto_page(requested: usize, total: usize) -> Option<usize> {
    (1..=page_count(total)).contains(&requested).then_some(requested)
}

// =============================================================================
// QUERY
// =============================================================================

/// Full table query: filter, then sort, then page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetQuery {
    pub filter: AssetFilter,
    pub sort: SortState,
    /// 1-based requested page.
    pub page: usize,
}

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub rows: Vec<&'a Asset>,
    /// Effective (clamped) page.
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

impl PageView<'_> {
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index of the first row on this page, 0 when empty.
    #[must_use]
    pub fn first_row(&self) -> usize {
        if self.rows.is_empty() { 0 } else { (self.page - 1) * PAGE_SIZE + 1 }
    }

    #[must_use]
    pub fn last_row(&self) -> usize {
        if self.rows.is_empty() { 0 } else { self.first_row() + self.rows.len() - 1 }
    }
}

impl AssetQuery {
    #[must_use]
    pub fn run<'a>(&self, assets: &'a [Asset]) -> PageView<'a> {
        let mut rows = filter_assets(assets, &self.filter);
        sort_assets(&mut rows, self.sort);
        let total_matches = rows.len();
        let page = clamp_page(self.page, total_matches);
        PageView { rows: paginate(&rows, page).to_vec(), page, total_pages: page_count(total_matches), total_matches }
    }
}
