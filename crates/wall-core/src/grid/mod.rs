//! The paged slot matrix and the pure half of page reconciliation.

mod reconcile;

use serde::Serialize;
use wall_common::TileId;

pub use reconcile::{plan, Assignment, LiveTile, ReconcilePlan};

/// What one grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    Empty,
    Tile(TileId),
    /// The cell's channel is live in a floating surface; show a placeholder.
    Detached(TileId),
}

impl Slot {
    pub fn tile(&self) -> Option<TileId> {
        match self {
            Slot::Tile(t) => Some(*t),
            _ => None,
        }
    }
}

/// Number of pages for `len` channels, never less than one.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if len == 0 || per_page == 0 {
        return 1;
    }
    len.div_ceil(per_page)
}

/// Clamp a requested page index into `[0, page_count - 1]`.
pub fn clamp_page(requested: i64, len: usize, per_page: usize) -> usize {
    let max_page = page_count(len, per_page) - 1;
    requested.clamp(0, max_page as i64) as usize
}

/// Index range of `page` within a list of `len` channels.
pub fn page_range(page: usize, len: usize, per_page: usize) -> std::ops::Range<usize> {
    let start = (page * per_page).min(len);
    let end = (start + per_page).min(len);
    start..end
}

/// Current slot assignment for one page of a `rows` x `cols` grid.
#[derive(Debug, Clone)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    page: usize,
    page_count: usize,
    slots: Vec<Slot>,
}

impl GridLayout {
    /// An empty single page. Both dimensions are at least one.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            page: 0,
            page_count: 1,
            slots: vec![Slot::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn set_assignment(&mut self, page: usize, page_count: usize, mut slots: Vec<Slot>) {
        slots.resize(self.rows * self.cols, Slot::Empty);
        self.page = page;
        self.page_count = page_count;
        self.slots = slots;
    }

    pub fn index_of(&self, tile: TileId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| matches!(s, Slot::Tile(t) | Slot::Detached(t) if *t == tile))
    }

    /// Live (non-detached) tiles in slot order.
    pub fn tiles(&self) -> impl Iterator<Item = TileId> + '_ {
        self.slots.iter().filter_map(Slot::tile)
    }

    pub fn first_tile(&self) -> Option<TileId> {
        self.tiles().next()
    }

    /// Show a placeholder where `tile` used to be.
    pub fn mark_detached(&mut self, tile: TileId) {
        for slot in &mut self.slots {
            if *slot == Slot::Tile(tile) {
                *slot = Slot::Detached(tile);
            }
        }
    }

    /// Neighbour of `index` one step in `(dx, dy)` direction, clamped to the
    /// matrix edges. Returns the tile there, if any.
    pub fn neighbour(&self, index: usize, dx: i64, dy: i64) -> Option<TileId> {
        let cols = self.cols as i64;
        let rows = self.rows as i64;
        let row = (index as i64 / cols + dy).clamp(0, rows - 1);
        let col = (index as i64 % cols + dx).clamp(0, cols - 1);
        let target = (row * cols + col) as usize;
        self.slots.get(target).and_then(Slot::tile)
    }
}
