//! Read-only snapshots of what the wall shows, and where.

use serde::Serialize;
use wall_common::{GroupFilter, Rect, SurfaceId, TileId};

use crate::detach::DetachedSurface;
use crate::grid::Slot;
use crate::layout::LayoutEngine;
use crate::source::ChannelSource;
use crate::surface::SurfaceHost;

use super::Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PresentationMode {
    Grid,
    Focus,
    /// Grid with at least one tile in a floating surface.
    DetachedOverlay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusView {
    pub main: TileId,
    pub side: Vec<TileId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub mode: PresentationMode,
    pub rows: usize,
    pub cols: usize,
    pub slots: Vec<Slot>,
    pub focus: Option<FocusView>,
    pub detached: Vec<DetachedSurface>,
    pub active: Option<TileId>,
    pub global_mute: bool,
    pub page: usize,
    pub page_count: usize,
    pub filter: GroupFilter,
}

/// Where one tile's surface goes in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePlacement {
    pub tile: TileId,
    pub surface: Option<SurfaceId>,
    pub rect: Rect,
    pub visible: bool,
}

impl<H: SurfaceHost, S: ChannelSource> Wall<H, S> {
    pub fn presentation(&self) -> Presentation {
        Presentation {
            mode: self.mode(),
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            slots: self.grid.slots().to_vec(),
            focus: self.focus.focused().map(|main| FocusView {
                main,
                side: self.focus.side().to_vec(),
            }),
            detached: self.detach.surfaces().to_vec(),
            active: self.activation.active(),
            global_mute: self.activation.global_mute(),
            page: self.grid.page(),
            page_count: self.grid.page_count(),
            filter: self.filter.clone(),
        }
    }

    /// Rect and visibility for every live session's surface.
    ///
    /// Sessions that have no place in the current mode are hidden.
    pub fn surface_layout(&self, viewport: Rect, engine: &LayoutEngine) -> Vec<SurfacePlacement> {
        let mut placed: Vec<(TileId, Rect)> = Vec::new();

        if let Some(main) = self.focus.focused() {
            let (main_rect, side_rect) = engine.focus_regions(viewport);
            placed.push((main, main_rect));
            let side = self.focus.side();
            for (tile, rect) in side.iter().zip(engine.side_list(side_rect, side.len())) {
                placed.push((*tile, rect));
            }
        } else {
            let cells = engine.grid_cells(viewport, self.grid.rows(), self.grid.cols());
            for (slot, rect) in self.grid.slots().iter().zip(cells) {
                if let Slot::Tile(tile) = slot {
                    placed.push((*tile, rect));
                }
            }
        }
        for (i, d) in self.detach.surfaces().iter().enumerate() {
            placed.push((d.tile, engine.floating(viewport, i)));
        }

        self.sessions
            .values()
            .map(|s| {
                let rect = placed
                    .iter()
                    .find(|(t, _)| *t == s.id())
                    .map(|(_, r)| *r);
                SurfacePlacement {
                    tile: s.id(),
                    surface: s.surface(),
                    rect: rect.unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
                    visible: rect.is_some_and(|r| r.width > 0.0 && r.height > 0.0),
                }
            })
            .collect()
    }

    /// Topmost tile under a window point: floating surfaces first.
    pub fn tile_at(&self, viewport: Rect, engine: &LayoutEngine, x: f64, y: f64) -> Option<TileId> {
        self.tile_at_excluding(viewport, engine, x, y, &[])
    }

    /// Like [`tile_at`](Self::tile_at), ignoring `shown_elsewhere`: tiles
    /// whose surface currently lives outside the wall window.
    pub fn tile_at_excluding(
        &self,
        viewport: Rect,
        engine: &LayoutEngine,
        x: f64,
        y: f64,
        shown_elsewhere: &[TileId],
    ) -> Option<TileId> {
        let layout: Vec<SurfacePlacement> = self
            .surface_layout(viewport, engine)
            .into_iter()
            .filter(|p| p.visible && !shown_elsewhere.contains(&p.tile) && p.rect.contains(x, y))
            .collect();
        let floating = self
            .detach
            .surfaces()
            .iter()
            .rev()
            .find(|d| layout.iter().any(|p| p.tile == d.tile))
            .map(|d| d.tile);
        floating.or_else(|| layout.first().map(|p| p.tile))
    }
}
