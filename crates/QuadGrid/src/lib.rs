//! # QuadGrid
//!
//! `quad_grid` is a headless, event-driven engine for an interactive
//! coordinate grid on which users build a quadrilateral point by point,
//! drag its vertices or its body, and apply geometric transformations with
//! an animated preview. It handles state, mathematics, and interaction
//! logic while delegating all rendering and platform event plumbing to the
//! host application.
//!
//! ## Core Architecture
//!
//! - **Model ([`model`])**: durable board state, owned by the host.
//! - **View ([`view`])**: coordinate mapping between client pixels and the
//!   fixed logical grid.
//! - **Interaction ([`interaction`])**: the drag state machine, including
//!   touch scroll-vs-drag classification.
//! - **Animation ([`animation`])**: the timed transformation preview and
//!   its commit.
//! - **History ([`history`])**: the derivation log with worked formulas.
//! - **Render ([`render`]) / Painter ([`painter`])**: scene snapshots and
//!   display lists for the host to draw.

pub mod animation;
pub mod config;
pub mod history;
pub mod input;
pub mod interaction;
pub mod math;
pub mod model;
pub mod painter;
pub mod render;
pub mod view;

use std::time::Duration;

use glam::DVec2;

use animation::AnimationRequest;
use interaction::DragSession;
use render::AnimationFrame;

// Re-exports for convenience
pub use config::GridConfig;
pub use input::{DragTarget, PointerInput, PointerSource};
pub use interaction::GridEvent;
pub use math::Rect;
pub use model::{Axis, BoardState, Transformation};
pub use render::{RenderList, Scene};

/// The main entry point for the library.
///
/// `GridCanvas` owns the transient interactive state: the view mapping, the
/// active drag session, the in-flight animation, and the vertex highlight.
/// The durable state lives in a [`BoardState`] owned by the host and passed
/// into each handler.
pub struct GridCanvas {
    /// Configuration settings.
    pub config: GridConfig,
    /// The viewport system handling coordinate transformation.
    pub view: view::GridView,
    drag: Option<DragSession>,
    animation: Option<AnimationRequest>,
    generation: u64,
    highlight: Option<usize>,
}

impl GridCanvas {
    /// Creates a new canvas with the given configuration.
    ///
    /// The viewbox side length comes from the configuration. The client
    /// bounds start at 800x600 until the host reports real bounds through
    /// [`GridCanvas::set_bounds`].
    pub fn new(config: GridConfig) -> Self {
        let view = view::GridView::new(
            config.grid_size,
            Rect::new(DVec2::ZERO, DVec2::new(800.0, 600.0)),
        );
        Self {
            config,
            view,
            drag: None,
            animation: None,
            generation: 0,
            highlight: None,
        }
    }

    /// Updates the rendered bounding box of the grid element.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.view.set_bounds(bounds);
    }

    /// True while a drag session is active. The host forwards global
    /// pointer move/up events exactly while this holds.
    pub fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// True while a transformation animation plays.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Highlights one vertex (for example while the host hovers the
    /// matching derivation row), or clears the highlight with `None`. The
    /// change shows up in the next [`GridCanvas::scene`] snapshot.
    pub fn set_highlight(&mut self, index: Option<usize>) {
        self.highlight = index;
    }

    /// Handles a click on the empty grid background: places a point.
    pub fn background_click(
        &mut self,
        input: &PointerInput,
        board: &mut BoardState,
        events: &mut Vec<GridEvent>,
    ) {
        interaction::handle_background_click(
            &self.drag,
            self.animation.is_some(),
            &self.view,
            input,
            board,
            events,
        );
    }

    /// Starts a drag on a vertex or on the shape body. Returns true when a
    /// session was created; the host should then install its global
    /// pointer move/up forwarding.
    pub fn drag_start(
        &mut self,
        input: &PointerInput,
        target: DragTarget,
        board: &BoardState,
    ) -> bool {
        interaction::handle_drag_start(
            &mut self.drag,
            self.animation.is_some(),
            &self.view,
            input,
            target,
            board,
        )
    }

    /// Feeds a global pointer move to the active session. Returns true when
    /// the event was consumed; the host must then suppress its default
    /// action (for touch, native scrolling).
    pub fn pointer_move(&mut self, input: &PointerInput, events: &mut Vec<GridEvent>) -> bool {
        interaction::handle_pointer_move(&mut self.drag, &self.view, &self.config, input, events)
    }

    /// Ends the active gesture, committing it when it was a confirmed drag.
    /// Returns true when a commit happened.
    pub fn pointer_up(&mut self, board: &mut BoardState, events: &mut Vec<GridEvent>) -> bool {
        interaction::handle_pointer_up(&mut self.drag, board, events)
    }

    /// Requests a transformation of the displayed shape and starts the
    /// timed animation. Returns true when the request was accepted.
    pub fn apply_transformation(
        &mut self,
        op: Transformation,
        board: &BoardState,
        events: &mut Vec<GridEvent>,
    ) -> bool {
        animation::handle_apply(
            &mut self.animation,
            &mut self.generation,
            &self.drag,
            op,
            board,
            events,
        )
    }

    /// Advances time. Commits the active animation once its configured
    /// duration has elapsed.
    pub fn tick(&mut self, dt: Duration, board: &mut BoardState, events: &mut Vec<GridEvent>) {
        animation::handle_tick(
            &mut self.animation,
            self.generation,
            dt,
            &self.config,
            board,
            events,
        );
    }

    /// Clears the board, history, highlight, and any active gesture or
    /// animation.
    pub fn reset(&mut self, board: &mut BoardState, events: &mut Vec<GridEvent>) {
        animation::handle_reset(
            &mut self.animation,
            &mut self.generation,
            &mut self.drag,
            &mut self.highlight,
            board,
            events,
        );
    }

    /// Snapshot of everything the presentation layer needs for one frame.
    pub fn scene(&self, board: &BoardState) -> Scene {
        let duration = Duration::from_millis(self.config.animation_duration_ms);
        Scene {
            base: board.points.clone(),
            preview: board.preview.clone(),
            live: self.drag.as_ref().map(|s| s.live.clone()),
            animation: self.animation.as_ref().map(|a| AnimationFrame {
                from: a.from.clone(),
                to: a.to.clone(),
                progress: a.progress(duration),
            }),
            highlight: self.highlight,
            is_animating: self.animation.is_some(),
        }
    }

    /// The core frame loop: advances the animation, then paints.
    ///
    /// Hosts that drive the engine per-frame call this once per frame after
    /// forwarding the frame's pointer events through the discrete handlers.
    pub fn update(&mut self, dt: Duration, board: &mut BoardState) -> (RenderList, Vec<GridEvent>) {
        let mut events = Vec::new();
        self.tick(dt, board, &mut events);
        let draw_list = painter::Painter::draw_scene(&self.view, &self.config, &self.scene(board));
        (draw_list, events)
    }
}
