use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::model::{Axis, Transformation};

/// An axis-aligned rectangle in client pixels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub min: DVec2,
    pub max: DVec2,
}

impl Rect {
    pub fn new(pos: DVec2, size: DVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Translates every point by `(dx, dy)`.
pub fn translate(points: &[DVec2], dx: f64, dy: f64) -> Vec<DVec2> {
    let delta = DVec2::new(dx, dy);
    points.iter().map(|p| *p + delta).collect()
}

/// Rotates every point about the origin, counter-clockwise for positive
/// angles.
pub fn rotate(points: &[DVec2], degrees: f64) -> Vec<DVec2> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    points
        .iter()
        .map(|p| DVec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos))
        .collect()
}

/// Reflects every point across the given axis.
pub fn reflect(points: &[DVec2], axis: Axis) -> Vec<DVec2> {
    points
        .iter()
        .map(|p| match axis {
            Axis::X => DVec2::new(p.x, -p.y),
            Axis::Y => DVec2::new(-p.x, p.y),
        })
        .collect()
}

/// Applies a transformation to an ordered point list, preserving order and
/// length.
pub fn apply(op: Transformation, points: &[DVec2]) -> Vec<DVec2> {
    match op {
        Transformation::Rotate { degrees } => rotate(points, degrees),
        Transformation::Reflect { axis } => reflect(points, axis),
        Transformation::Translate { dx, dy } => translate(points, dx, dy),
    }
}

/// Rounds both coordinates to the nearest integer grid unit.
pub fn round_to_grid(point: DVec2) -> DVec2 {
    DVec2::new(point.x.round(), point.y.round())
}

/// Reorders the points ascending by angle about their centroid, so that
/// consecutive points trace a simple (non-self-intersecting) polygon.
pub fn sort_by_centroid_angle(points: &mut [DVec2]) {
    if points.len() < 3 {
        return;
    }
    let sum = points.iter().fold(DVec2::ZERO, |acc, p| acc + *p);
    let centroid = sum / points.len() as f64;
    points.sort_by(|a, b| {
        let angle_a = (a.y - centroid.y).atan2(a.x - centroid.x);
        let angle_b = (b.y - centroid.y).atan2(b.x - centroid.x);
        angle_a
            .partial_cmp(&angle_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
