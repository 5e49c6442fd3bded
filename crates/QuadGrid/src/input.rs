//! # Input Protocol
//!
//! Defines the pointer events the host application forwards to the canvas.
//!
//! The canvas never talks to the platform directly. The host owns the event
//! loop, translates its native pointer events into [`PointerInput`], and
//! calls the matching `GridCanvas` handler.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Device class a pointer event originated from.
///
/// Touch gestures go through scroll-vs-drag classification before they move
/// anything; mouse gestures never do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A single pointer event as forwarded by the host.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PointerInput {
    /// Device class of the event.
    pub source: PointerSource,
    /// Position in client pixels, relative to the host viewport.
    ///
    /// `None` when the event carries no usable position, e.g. a touch-end
    /// with zero remaining touch points. Handlers skip position-dependent
    /// work for such events.
    pub position: Option<DVec2>,
}

impl PointerInput {
    /// A mouse event at the given client position.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Mouse,
            position: Some(DVec2::new(x, y)),
        }
    }

    /// A touch event at the given client position.
    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Touch,
            position: Some(DVec2::new(x, y)),
        }
    }

    /// A touch event with no remaining touch points, and so no position.
    pub fn touch_release() -> Self {
        Self {
            source: PointerSource::Touch,
            position: None,
        }
    }
}

/// What a drag gesture grabs: a single vertex or the whole shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragTarget {
    /// One vertex, identified by its index in the displayed point list.
    Point { index: usize },
    /// The entire quadrilateral body.
    Shape,
}
