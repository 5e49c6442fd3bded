use glam::DVec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::input::DragTarget;
use crate::model::{Axis, BoardState, Transformation};

/// Number of entries the derivation log retains.
pub const HISTORY_CAP: usize = 2;

/// Record of one committed transformation, as shown in the derivation log.
///
/// Entries are immutable once superseded. The newest entry is the
/// exception: when the user keeps dragging the transformed shape, the drag
/// is folded into it in place instead of creating a new entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stable identity, for hosts that render the log as a keyed list.
    pub id: Uuid,
    /// The transformation that produced this entry.
    pub op: Transformation,
    /// The four source points, in display order.
    pub original: Vec<DVec2>,
    /// The four result points, same order as `original`.
    pub transformed: Vec<DVec2>,
    /// Human-readable summary, e.g. "Reflection across the y-axis".
    pub description: String,
    /// One derivation string per point, same order as `original`.
    pub derivations: Vec<String>,
}

/// Builds the entry for a freshly committed transformation and prepends it,
/// truncating the log to [`HISTORY_CAP`].
pub(crate) fn push_entry(
    board: &mut BoardState,
    op: Transformation,
    original: Vec<DVec2>,
    transformed: Vec<DVec2>,
) {
    let entry = HistoryEntry {
        id: Uuid::new_v4(),
        derivations: derive_all(op, &original),
        description: describe(op),
        op,
        original,
        transformed,
    };
    board.history.insert(0, entry);
    board.history.truncate(HISTORY_CAP);
}

/// Folds a committed drag into the newest entry.
///
/// The dragged preview becomes the entry's result set. A whole-shape drag
/// additionally shifts the entry's source set by the gesture delta, along
/// with the board's base points, which mirror it. Derivations are
/// regenerated from the updated source set; the recorded operation never
/// changes.
pub(crate) fn absorb_drag_commit(board: &mut BoardState, target: DragTarget, delta: DVec2) {
    let Some(preview) = board.preview.clone() else {
        return;
    };
    let Some(entry) = board.history.first_mut() else {
        return;
    };
    entry.transformed = preview;
    if let DragTarget::Shape = target {
        for p in &mut entry.original {
            *p += delta;
        }
        for p in &mut board.points {
            *p += delta;
        }
    }
    entry.derivations = derive_all(entry.op, &entry.original);
}

fn derive_all(op: Transformation, original: &[DVec2]) -> Vec<String> {
    original.iter().map(|p| derive_point(op, *p)).collect()
}

/// Human-readable summary of a transformation.
fn describe(op: Transformation) -> String {
    match op {
        Transformation::Rotate { degrees } => {
            format!("Rotation of {}° about the origin", format_number(degrees))
        }
        Transformation::Reflect { axis: Axis::X } => "Reflection across the x-axis".to_string(),
        Transformation::Reflect { axis: Axis::Y } => "Reflection across the y-axis".to_string(),
        Transformation::Translate { dx, dy } => format!(
            "Translation by ({}, {})",
            format_number(dx),
            format_number(dy)
        ),
    }
}

/// Renders the worked derivation of a single point under `op`.
///
/// Rotations show the rotation matrix applied to the point followed by the
/// two scalar equations with values substituted; reflections and
/// translations show the one-line coordinate mapping.
pub fn derive_point(op: Transformation, p: DVec2) -> String {
    match op {
        Transformation::Rotate { degrees } => {
            let (sin, cos) = degrees.to_radians().sin_cos();
            let result = DVec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
            let mc = format_number(cos);
            let mns = format_number(-sin);
            let ms = format_number(sin);
            let px = format_number(p.x);
            let py = format_number(p.y);
            let x = signed(p.x);
            let y = signed(p.y);
            let fc = signed(cos);
            let fs = signed(sin);
            let rx = format_number(result.x);
            let ry = format_number(result.y);
            format!(
                "[x'; y'] = [{mc}, {mns}; {ms}, {mc}] · [{px}; {py}]\nx' = {x}·{fc} − {y}·{fs} = {rx}\ny' = {x}·{fs} + {y}·{fc} = {ry}"
            )
        }
        Transformation::Reflect { axis } => {
            let (template, result) = match axis {
                Axis::X => ("(x', y') = (x, −y)", DVec2::new(p.x, -p.y)),
                Axis::Y => ("(x', y') = (−x, y)", DVec2::new(-p.x, p.y)),
            };
            format!(
                "{template} = ({}, {})",
                format_number(result.x),
                format_number(result.y)
            )
        }
        Transformation::Translate { dx, dy } => format!(
            "(x', y') = ({} + {}, {} + {}) = ({}, {})",
            format_number(p.x),
            signed(dx),
            format_number(p.y),
            signed(dy),
            format_number(p.x + dx),
            format_number(p.y + dy)
        ),
    }
}

/// Formats a coordinate with at most two decimal places, trailing zeros
/// stripped and negative zero normalized to "0".
pub fn format_number(value: f64) -> String {
    let mut s = format!("{value:.2}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Like [`format_number`], but wraps negative values in parentheses so they
/// read cleanly inside products and sums.
fn signed(value: f64) -> String {
    let s = format_number(value);
    if s.starts_with('-') { format!("({s})") } else { s }
}
