//! # Rendering Abstraction
//!
//! Defines the display-list protocol. The canvas logic produces abstract
//! [`DrawCommand`]s (or a higher-level [`Scene`] snapshot), which the host
//! application executes with its own graphics backend (SVG, Canvas2D, GPU).
//! The engine itself never draws a pixel.

use glam::{DVec2, Vec4};
use serde::{Deserialize, Serialize};

/// Interpolation data for the in-flight transformation animation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Shape the animation started from.
    pub from: Vec<DVec2>,
    /// Shape the animation lands on.
    pub to: Vec<DVec2>,
    /// Linear progress in `0.0..=1.0`.
    pub progress: f64,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    /// Committed base points.
    pub base: Vec<DVec2>,
    /// Transformed preview, displayed in place of `base` while present.
    pub preview: Option<Vec<DVec2>>,
    /// Live point set of the active drag, overriding both of the above.
    pub live: Option<Vec<DVec2>>,
    /// In-flight animation, if any.
    pub animation: Option<AnimationFrame>,
    /// Index of the highlighted vertex, if any.
    pub highlight: Option<usize>,
    /// True while a transformation animation plays. Hosts disable the
    /// transformation controls while this holds.
    pub is_animating: bool,
}

impl Scene {
    /// The point set to draw the shape from, by display priority: the live
    /// drag first, then the animation's interpolated shape, then the
    /// preview, then the base points.
    pub fn shape_points(&self) -> Vec<DVec2> {
        if let Some(live) = &self.live {
            return live.clone();
        }
        if let Some(anim) = &self.animation {
            return anim
                .from
                .iter()
                .zip(&anim.to)
                .map(|(a, b)| a.lerp(*b, anim.progress))
                .collect();
        }
        if let Some(preview) = &self.preview {
            return preview.clone();
        }
        self.base.clone()
    }
}

/// A single drawing primitive. All coordinates are in **Client Space**.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled rectangle, optionally rounded and stroked. A corner radius
    /// of half the size draws a circle.
    Rect {
        pos: DVec2,
        size: DVec2,
        color: Vec4,
        corner_radius: f64,
        stroke_width: f64,
        stroke_color: Option<Vec4>,
    },
    /// A straight line segment.
    Line {
        start: DVec2,
        end: DVec2,
        color: Vec4,
        width: f64,
    },
    /// A closed polygon with a fill and an optional stroke.
    Polygon {
        points: Vec<DVec2>,
        fill: Vec4,
        stroke_width: f64,
        stroke_color: Option<Vec4>,
    },
    /// Text to be rendered. Font resolution is the host's affair.
    Text {
        pos: DVec2,
        text: String,
        color: Vec4,
        size: f64,
    },
}

/// A list of draw commands representing the current frame.
pub type RenderList = Vec<DrawCommand>;
