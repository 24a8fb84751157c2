//! Wall window geometry: viewport, surface placement, and clicks on the wall.

use wall_common::Rect;
use wall_core::WallCommand;

use super::core::NewsWallApp;

impl NewsWallApp {
    /// The window's content area in logical pixels.
    pub(super) fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                Rect::new(0.0, 0.0, size.width, size.height)
            }
            None => Rect::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Push the wall's current layout to the surfaces.
    pub(super) fn sync_surface_bounds(&mut self) {
        let viewport = self.viewport();
        let Some(wall) = self.wall.as_mut() else {
            return;
        };
        let placements = wall.surface_layout(viewport, &self.layout);
        let host = wall.host_mut();
        for placement in placements {
            if self.floats.hosts_tile(placement.tile) {
                continue;
            }
            if let Some(surface) = placement.surface {
                host.place(surface, placement.rect, placement.visible);
            }
        }
    }

    /// A click that reached the window itself, e.g. a tile still loading.
    pub(super) fn handle_click(&mut self) {
        let viewport = self.viewport();
        let (x, y) = self.cursor_pos;
        let elsewhere = self.floats.tiles();
        let tile = self
            .wall
            .as_ref()
            .and_then(|w| w.tile_at_excluding(viewport, &self.layout, x, y, &elsewhere));
        if let Some(tile) = tile {
            self.execute(WallCommand::Activate(tile));
            self.refresh();
        }
    }
}
