//! # Transformation Animation
//!
//! Orchestrates the timed preview that plays between requesting a
//! transformation and committing its result. State only commits when the
//! animation completes; resetting mid-flight leaves no trace of it.

use std::time::Duration;

use glam::DVec2;

use crate::config::GridConfig;
use crate::history;
use crate::interaction::{DragSession, GridEvent};
use crate::math;
use crate::model::{BoardState, Transformation};

/// An in-flight interpolation between two shapes.
///
/// At most one request is active at a time. `generation` ties the request
/// to the canvas state that spawned it: a reset bumps the counter, so a
/// completion can detect it has been superseded and discard itself.
#[derive(Clone, Debug)]
pub struct AnimationRequest {
    /// The transformation being animated.
    pub op: Transformation,
    /// Shape at apply time: the preview when one exists, else the base
    /// points.
    pub from: Vec<DVec2>,
    /// Target shape, computed algebraically at apply time.
    pub to: Vec<DVec2>,
    /// Time accumulated so far.
    pub elapsed: Duration,
    /// Token tying this request to the canvas generation that spawned it.
    pub generation: u64,
}

impl AnimationRequest {
    /// Linear progress in `0.0..=1.0` against the given duration.
    pub fn progress(&self, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }
}

/// Starts the apply sequence for a transformation.
///
/// Computes the target shape up front and enters the animating state.
/// Rejected while an animation or a drag session is active, or when fewer
/// than four points are displayed. Returns true when the animation started.
pub(crate) fn handle_apply(
    animation: &mut Option<AnimationRequest>,
    generation: &mut u64,
    drag: &Option<DragSession>,
    op: Transformation,
    board: &BoardState,
    events: &mut Vec<GridEvent>,
) -> bool {
    if animation.is_some() || drag.is_some() {
        return false;
    }
    let source = board.displayed();
    if source.len() != 4 {
        return false;
    }
    let from = source.to_vec();
    let to = math::apply(op, &from);
    *generation += 1;
    *animation = Some(AnimationRequest {
        op,
        from,
        to,
        elapsed: Duration::ZERO,
        generation: *generation,
    });
    tracing::debug!(?op, generation = *generation, "transformation animation started");
    events.push(GridEvent::AnimationStarted);
    events.push(GridEvent::RepaintNeeded);
    true
}

/// Advances the active animation and commits it once the configured
/// duration has elapsed.
///
/// The commit promotes the animation source into the base points, stores
/// the target as the new preview, and prepends the history entry. A request
/// whose generation no longer matches the canvas is dropped without side
/// effects.
pub(crate) fn handle_tick(
    animation: &mut Option<AnimationRequest>,
    generation: u64,
    dt: Duration,
    config: &GridConfig,
    board: &mut BoardState,
    events: &mut Vec<GridEvent>,
) {
    let duration = Duration::from_millis(config.animation_duration_ms);
    let finished = match animation.as_mut() {
        Some(request) => {
            request.elapsed += dt;
            events.push(GridEvent::RepaintNeeded);
            request.elapsed >= duration
        }
        None => return,
    };
    if !finished {
        return;
    }
    let Some(request) = animation.take() else {
        return;
    };
    if request.generation != generation {
        // Superseded while in flight; nothing to commit.
        tracing::debug!(
            stale = request.generation,
            current = generation,
            "discarding stale animation"
        );
        return;
    }
    board.points = request.from.clone();
    board.preview = Some(request.to.clone());
    history::push_entry(board, request.op, request.from, request.to);
    tracing::debug!(generation = request.generation, "transformation committed");
    events.push(GridEvent::AnimationFinished);
    events.push(GridEvent::RepaintNeeded);
}

/// Clears the whole interactive state: board, history, highlight, any drag
/// session, and any in-flight animation. Available at all times, including
/// mid-gesture and mid-animation.
pub(crate) fn handle_reset(
    animation: &mut Option<AnimationRequest>,
    generation: &mut u64,
    drag: &mut Option<DragSession>,
    highlight: &mut Option<usize>,
    board: &mut BoardState,
    events: &mut Vec<GridEvent>,
) {
    if animation.take().is_some() {
        // Any completion still in flight is stale from here on.
        *generation += 1;
    }
    *drag = None;
    *highlight = None;
    board.clear();
    tracing::debug!("board reset");
    events.push(GridEvent::RepaintNeeded);
}
