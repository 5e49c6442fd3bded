//! # Core Data Model
//!
//! Defines the durable state of the board: the committed point set, the
//! transformed preview, and the derivation history.
//!
//! These structs are pure data. They are owned by the host application and
//! mutated exclusively through `GridCanvas` handlers, so the host can
//! persist, inspect, or diff them freely between calls.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;
use crate::math;

/// A reflection axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// A transformation the user can apply to the completed shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Transformation {
    /// Rotation about the origin, counter-clockwise for positive angles.
    Rotate { degrees: f64 },
    /// Reflection across an axis of the grid.
    Reflect { axis: Axis },
    /// Translation by a fixed vector.
    Translate { dx: f64, dy: f64 },
}

/// The complete durable state of the grid board.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardState {
    /// Committed base points, in display order. Length is always 0..=4.
    pub points: Vec<DVec2>,
    /// Result of the most recent committed transformation. While present it
    /// is displayed (and dragged) in place of `points`.
    pub preview: Option<Vec<DVec2>>,
    /// The most recent transformations, newest first, capped at
    /// [`crate::history::HISTORY_CAP`].
    pub history: Vec<HistoryEntry>,
}

impl BoardState {
    /// The point set the user currently sees and drags.
    pub fn displayed(&self) -> &[DVec2] {
        self.preview.as_deref().unwrap_or(&self.points)
    }

    /// Adds a point to the shape under construction.
    ///
    /// A fifth point restarts the shape from scratch, discarding the
    /// preview and the history. Completing the fourth point reorders the
    /// set by angle about its centroid, so the click order cannot produce a
    /// self-intersecting quadrilateral. Points are never reordered again
    /// after that.
    pub fn place_point(&mut self, point: DVec2) {
        if self.points.len() >= 4 {
            self.points.clear();
            self.preview = None;
            self.history.clear();
        }
        self.points.push(point);
        if self.points.len() == 4 {
            math::sort_by_centroid_angle(&mut self.points);
        }
    }

    /// Clears points, preview, and history.
    pub fn clear(&mut self) {
        self.points.clear();
        self.preview = None;
        self.history.clear();
    }
}
