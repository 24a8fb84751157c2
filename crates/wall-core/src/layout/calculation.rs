//! Rect computation for grid cells, focus regions and floating surfaces.

use wall_common::Rect;

use super::LayoutEngine;

impl LayoutEngine {
    fn content(&self, viewport: Rect) -> Rect {
        viewport.inset(self.outer_padding as f64)
    }

    /// Row-major cell rects for a `rows` x `cols` grid.
    pub fn grid_cells(&self, viewport: Rect, rows: usize, cols: usize) -> Vec<Rect> {
        let area = self.content(viewport);
        let rows = rows.max(1);
        let cols = cols.max(1);
        let gap = self.gap as f64;
        let cell_w = ((area.width - gap * (cols - 1) as f64) / cols as f64).max(0.0);
        let cell_h = ((area.height - gap * (rows - 1) as f64) / rows as f64).max(0.0);

        let mut cells = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                cells.push(Rect::new(
                    area.x + c as f64 * (cell_w + gap),
                    area.y + r as f64 * (cell_h + gap),
                    cell_w,
                    cell_h,
                ));
            }
        }
        cells
    }

    /// Main region and side list region for focus mode.
    pub fn focus_regions(&self, viewport: Rect) -> (Rect, Rect) {
        let area = self.content(viewport);
        let gap = self.gap as f64;
        let fraction = self.focus_side_fraction.clamp(0.05, 0.5);
        let side_w = ((area.width - gap) * fraction).max(0.0);
        let main_w = (area.width - gap - side_w).max(0.0);
        (
            Rect::new(area.x, area.y, main_w, area.height),
            Rect::new(area.x + main_w + gap, area.y, side_w, area.height),
        )
    }

    /// 16:9 entries stacked top-down inside the side region. Entries that do
    /// not fit are returned with zero height.
    pub fn side_list(&self, side: Rect, count: usize) -> Vec<Rect> {
        let gap = self.gap as f64;
        let entry_h = side.width * 9.0 / 16.0;
        let bottom = side.y + side.height;
        (0..count)
            .map(|i| {
                let y = side.y + i as f64 * (entry_h + gap);
                let h = if y + entry_h <= bottom { entry_h } else { 0.0 };
                Rect::new(side.x, y, side.width, h)
            })
            .collect()
    }

    /// Rect for the `index`-th floating surface, cascading up and left from
    /// the bottom-right corner and kept inside the viewport.
    pub fn floating(&self, viewport: Rect, index: usize) -> Rect {
        let area = self.content(viewport);
        let w = self.detached_width.min(area.width).max(0.0);
        let h = self.detached_height.min(area.height).max(0.0);
        let step = self.cascade_step * index as f64;
        let x = (area.x + area.width - w - step).max(area.x);
        let y = (area.y + area.height - h - step).max(area.y);
        Rect::new(x, y, w, h)
    }
}
