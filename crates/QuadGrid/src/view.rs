//! # Viewport System
//!
//! Handles the coordinate transformation between **Client Space** (pixels
//! inside the host element) and **Grid Space** (logical units on the fixed
//! viewbox).
//!
//! The viewbox is square, centered on the origin, and never pans or zooms.
//! Its vertical axis points up, opposite to the client axis.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::math::Rect;

/// Maps pointer positions onto the logical grid.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GridView {
    /// Side length of the logical viewbox in grid units.
    pub viewbox_size: f64,
    /// Rendered bounding box of the grid element, in client pixels.
    pub bounds: Rect,
}

impl GridView {
    pub fn new(viewbox_size: f64, bounds: Rect) -> Self {
        Self {
            viewbox_size,
            bounds,
        }
    }

    /// Updates the rendered bounding box, e.g. after a host layout change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Converts a point from **Client Space** to **Grid Space**.
    ///
    /// The vertical ratio is inverted so that "up" is positive on the grid.
    pub fn client_to_grid(&self, client_pos: DVec2) -> DVec2 {
        let ratio = (client_pos - self.bounds.min) / self.bounds.size();
        let half = self.viewbox_size / 2.0;
        DVec2::new(
            -half + ratio.x * self.viewbox_size,
            -half + (1.0 - ratio.y) * self.viewbox_size,
        )
    }

    /// Converts a point from **Grid Space** back to **Client Space**.
    pub fn grid_to_client(&self, grid_pos: DVec2) -> DVec2 {
        let half = self.viewbox_size / 2.0;
        let ratio = DVec2::new(
            (grid_pos.x + half) / self.viewbox_size,
            1.0 - (grid_pos.y + half) / self.viewbox_size,
        );
        self.bounds.min + ratio * self.bounds.size()
    }

    /// True when the client position falls inside the rendered bounds.
    pub fn contains_client(&self, client_pos: DVec2) -> bool {
        self.bounds.contains(client_pos)
    }
}
