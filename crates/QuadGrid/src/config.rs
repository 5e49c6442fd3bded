//! # Configuration
//!
//! Defines the configurable parameters of the grid canvas, allowing the
//! host application to tweak geometry, timing, and appearance.

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// Configuration settings for the canvas behavior.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of the logical viewbox in grid units (default 20.0).
    ///
    /// The viewbox is square and centered on the origin, so the visible
    /// coordinate range on each axis is half this value in each direction.
    pub grid_size: f64,
    /// Client-space displacement in pixels below which a touch gesture is
    /// still too small to classify as either drag or scroll (default 5.0).
    pub touch_slop: f64,
    /// Duration of the transformation animation in milliseconds
    /// (default 750).
    ///
    /// Hosts that run their own visual interpolation must use the same
    /// duration, so the committed state and the rendered shape land
    /// together.
    pub animation_duration_ms: u64,
    /// Visual styling configuration.
    #[serde(default)]
    pub style: GridStyle,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            touch_slop: 5.0,
            animation_duration_ms: 750,
            style: GridStyle::default(),
        }
    }
}

/// Visual styling for the grid scene. Colors are linear RGBA in
/// `glam::Vec4`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridStyle {
    pub background_color: Vec4,
    pub grid_color: Vec4,
    pub axis_color: Vec4,
    pub shape_fill: Vec4,
    pub shape_stroke: Vec4,
    /// Outline color of the pre-transform ghost shape.
    pub source_color: Vec4,
    pub point_color: Vec4,
    pub highlight_color: Vec4,
    pub label_color: Vec4,
    /// Vertex marker radius in client pixels.
    pub point_radius: f64,
    /// Coordinate label size in client pixels.
    pub label_size: f64,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            background_color: Vec4::new(0.98, 0.98, 0.96, 1.0),
            grid_color: Vec4::new(0.85, 0.85, 0.85, 1.0),
            axis_color: Vec4::new(0.45, 0.45, 0.45, 1.0),
            shape_fill: Vec4::new(0.35, 0.55, 0.9, 0.35),
            shape_stroke: Vec4::new(0.2, 0.4, 0.8, 1.0),
            source_color: Vec4::new(0.6, 0.6, 0.6, 0.8),
            point_color: Vec4::new(0.2, 0.4, 0.8, 1.0),
            highlight_color: Vec4::new(0.95, 0.55, 0.15, 1.0),
            label_color: Vec4::new(0.25, 0.25, 0.25, 1.0),
            point_radius: 5.0,
            label_size: 12.0,
        }
    }
}
