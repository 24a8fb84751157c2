//! Layout engine configuration.

/// Geometry settings for turning the wall's presentation into pixel rects.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between tiles.
    pub gap: u32,
    /// Padding in pixels around the whole wall.
    pub outer_padding: u32,
    /// Share of the width given to the side list in focus mode.
    pub focus_side_fraction: f64,
    /// Size of a floating (detached) surface.
    pub detached_width: f64,
    pub detached_height: f64,
    /// Offset between stacked floating surfaces.
    pub cascade_step: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 6,
            outer_padding: 8,
            focus_side_fraction: 0.22,
            detached_width: 480.0,
            detached_height: 270.0,
            cascade_step: 28.0,
        }
    }
}
