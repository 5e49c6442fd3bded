use glam::DVec2;

use crate::config::GridConfig;
use crate::history;
use crate::input::{DragTarget, PointerInput, PointerSource};
use crate::math;
use crate::model::BoardState;
use crate::view::GridView;

/// Events emitted by the canvas logic to the host application.
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent {
    /// A background click placed a point on the grid.
    PointPlaced { position: DVec2 },
    /// The active drag produced a new candidate point set.
    DragMoved { points: Vec<DVec2> },
    /// A confirmed drag finished and the board was updated.
    DragCommitted { points: Vec<DVec2> },
    /// A touch gesture was classified as a scroll and abandoned.
    DragAborted,
    /// A transformation animation started playing.
    AnimationStarted,
    /// The animation completed and its result entered the history.
    AnimationFinished,
    /// The visual state changed, requiring a repaint.
    RepaintNeeded,
}

/// Transient state of a single drag gesture.
///
/// Created on drag start and destroyed on every exit path: commit,
/// unconfirmed release, scroll abort, reset. Its existence is also the
/// host's cue to forward global pointer move/up events.
#[derive(Clone, Debug)]
pub struct DragSession {
    /// What the gesture grabbed.
    pub target: DragTarget,
    /// Grid position at gesture start. Move deltas are measured from here.
    pub anchor: DVec2,
    /// Snapshot of the displayed point set at gesture start. Every move
    /// applies its delta to this fixed reference, never to live state, so a
    /// long drag cannot accumulate drift.
    pub baseline: Vec<DVec2>,
    /// Grid-space displacement of the pointer since `anchor`, as of the
    /// latest processed move.
    pub delta: DVec2,
    /// Raw client position at touch start. Only used to classify the
    /// gesture as drag or scroll; `None` for mouse gestures.
    pub touch_origin: Option<DVec2>,
    /// Whether movement has been classified as an intentional drag.
    pub confirmed: bool,
    /// Latest candidate point set (equals `baseline` until the first
    /// confirmed move).
    pub live: Vec<DVec2>,
}

/// Verdict on a pointer move while the gesture is still unclassified.
enum Classification {
    /// Displacement below the slop; keep waiting.
    Pending,
    /// Vertical movement dominates; the user is scrolling the page.
    Scroll,
    /// Horizontal movement dominates (or the device is a mouse); drag.
    Drag,
}

fn classify(session: &DragSession, client_pos: DVec2, slop: f64) -> Classification {
    if session.confirmed {
        return Classification::Drag;
    }
    // Mouse gestures confirm on any movement.
    let Some(origin) = session.touch_origin else {
        return Classification::Drag;
    };
    let dx = (client_pos.x - origin.x).abs();
    let dy = (client_pos.y - origin.y).abs();
    if dx < slop && dy < slop {
        Classification::Pending
    } else if dy > dx {
        Classification::Scroll
    } else {
        Classification::Drag
    }
}

/// Handles a click on the empty grid background: places a rounded point.
///
/// Ignored while a drag session or an animation is active, and for events
/// without a position. With four points already present the click restarts
/// the shape, discarding preview and history.
pub(crate) fn handle_background_click(
    drag: &Option<DragSession>,
    animating: bool,
    view: &GridView,
    input: &PointerInput,
    board: &mut BoardState,
    events: &mut Vec<GridEvent>,
) {
    if drag.is_some() || animating {
        return;
    }
    let Some(client_pos) = input.position else {
        return;
    };
    let position = math::round_to_grid(view.client_to_grid(client_pos));
    board.place_point(position);
    tracing::debug!(x = position.x, y = position.y, "point placed");
    events.push(GridEvent::PointPlaced { position });
    events.push(GridEvent::RepaintNeeded);
}

/// Starts a drag gesture on a vertex or on the shape body.
///
/// Rejected while an animation plays, while another session is active, for
/// events without a position, and for targets that do not exist on the
/// board. Returns true when a session was created.
pub(crate) fn handle_drag_start(
    drag: &mut Option<DragSession>,
    animating: bool,
    view: &GridView,
    input: &PointerInput,
    target: DragTarget,
    board: &BoardState,
) -> bool {
    if animating || drag.is_some() {
        return false;
    }
    let Some(client_pos) = input.position else {
        return false;
    };
    let displayed = board.displayed();
    let valid = match target {
        DragTarget::Point { index } => index < displayed.len(),
        DragTarget::Shape => displayed.len() == 4,
    };
    if !valid {
        return false;
    }
    let touch_origin = match input.source {
        PointerSource::Touch => Some(client_pos),
        PointerSource::Mouse => None,
    };
    let baseline = displayed.to_vec();
    *drag = Some(DragSession {
        target,
        anchor: view.client_to_grid(client_pos),
        live: baseline.clone(),
        baseline,
        delta: DVec2::ZERO,
        touch_origin,
        confirmed: false,
    });
    tracing::debug!(?target, touch = touch_origin.is_some(), "drag session started");
    true
}

/// Feeds a global pointer move into the active session.
///
/// Returns true when the canvas consumed the event; the host must then
/// suppress the event's default action (for touch, native scrolling).
/// False releases the event to the platform, either because no session is
/// active, the gesture is still unclassified, or it turned out to be a
/// scroll.
pub(crate) fn handle_pointer_move(
    drag: &mut Option<DragSession>,
    view: &GridView,
    config: &GridConfig,
    input: &PointerInput,
    events: &mut Vec<GridEvent>,
) -> bool {
    let Some(client_pos) = input.position else {
        return false;
    };
    let verdict = match drag.as_ref() {
        Some(session) => classify(session, client_pos, config.touch_slop),
        None => return false,
    };
    match verdict {
        Classification::Pending => false,
        Classification::Scroll => {
            *drag = None;
            tracing::debug!("touch gesture classified as scroll, drag aborted");
            events.push(GridEvent::DragAborted);
            events.push(GridEvent::RepaintNeeded);
            false
        }
        Classification::Drag => {
            let Some(session) = drag.as_mut() else {
                return false;
            };
            if !session.confirmed {
                tracing::debug!("drag confirmed");
                session.confirmed = true;
            }
            let grid_pos = view.client_to_grid(client_pos);
            session.delta = grid_pos - session.anchor;
            let points = moved_points(&session.baseline, session.target, session.delta);
            session.live = points.clone();
            events.push(GridEvent::DragMoved { points });
            events.push(GridEvent::RepaintNeeded);
            true
        }
    }
}

/// Ends the gesture.
///
/// A confirmed drag commits its live point set into the board; while a
/// preview exists the commit is folded into the newest history entry
/// instead of creating one. An unconfirmed gesture (a plain click, or a
/// touch that never left the slop) is discarded without touching the
/// board. The session is destroyed either way. Returns true when a commit
/// happened.
pub(crate) fn handle_pointer_up(
    drag: &mut Option<DragSession>,
    board: &mut BoardState,
    events: &mut Vec<GridEvent>,
) -> bool {
    let Some(session) = drag.take() else {
        return false;
    };
    if !session.confirmed {
        return false;
    }
    let points = session.live;
    if board.preview.is_some() {
        board.preview = Some(points.clone());
        history::absorb_drag_commit(board, session.target, math::round_to_grid(session.delta));
    } else {
        board.points = points.clone();
    }
    tracing::debug!(target = ?session.target, "drag committed");
    events.push(GridEvent::DragCommitted { points });
    events.push(GridEvent::RepaintNeeded);
    true
}

/// Applies a grid-space delta to the baseline snapshot, rounding every
/// moved coordinate to the nearest grid unit.
fn moved_points(baseline: &[DVec2], target: DragTarget, delta: DVec2) -> Vec<DVec2> {
    let mut points = baseline.to_vec();
    match target {
        DragTarget::Point { index } => {
            if let Some(p) = points.get_mut(index) {
                *p = math::round_to_grid(*p + delta);
            }
        }
        DragTarget::Shape => {
            for p in &mut points {
                *p = math::round_to_grid(*p + delta);
            }
        }
    }
    points
}
