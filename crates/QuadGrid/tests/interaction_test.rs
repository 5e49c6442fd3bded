use glam::DVec2;
use quad_grid::{BoardState, DragTarget, GridCanvas, GridConfig, GridEvent, PointerInput, Rect};

/// Canvas with a 400x400 client area over the default 20-unit viewbox, so
/// one grid unit is exactly 20 client pixels.
fn create_test_canvas() -> GridCanvas {
    let mut canvas = GridCanvas::new(GridConfig::default());
    canvas.set_bounds(Rect::new(DVec2::ZERO, DVec2::new(400.0, 400.0)));
    canvas
}

fn client(canvas: &GridCanvas, x: f64, y: f64) -> DVec2 {
    canvas.view.grid_to_client(DVec2::new(x, y))
}

fn click(canvas: &mut GridCanvas, board: &mut BoardState, x: f64, y: f64) -> Vec<GridEvent> {
    let mut events = Vec::new();
    let pos = client(canvas, x, y);
    canvas.background_click(&PointerInput::mouse(pos.x, pos.y), board, &mut events);
    events
}

/// Builds the square (-2,-2) (2,-2) (2,2) (-2,2), which the centroid sort
/// keeps in that order.
fn square_board(canvas: &mut GridCanvas, board: &mut BoardState) {
    for (x, y) in [(-2.0, -2.0), (2.0, -2.0), (2.0, 2.0), (-2.0, 2.0)] {
        click(canvas, board, x, y);
    }
    assert_eq!(board.points.len(), 4);
}

#[test]
fn test_background_clicks_build_shape() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();

    // 1. Three clicks accumulate in click order
    let events = click(&mut canvas, &mut board, 2.0, 2.0);
    assert_eq!(
        events[0],
        GridEvent::PointPlaced {
            position: DVec2::new(2.0, 2.0)
        }
    );
    click(&mut canvas, &mut board, -2.0, -2.0);
    click(&mut canvas, &mut board, 2.0, -2.0);
    assert_eq!(board.points.len(), 3);
    assert_eq!(board.points[0], DVec2::new(2.0, 2.0));

    // 2. The fourth click completes the shape and reorders it by angle
    //    about the centroid
    click(&mut canvas, &mut board, -2.0, 2.0);
    assert_eq!(
        board.points,
        vec![
            DVec2::new(-2.0, -2.0),
            DVec2::new(2.0, -2.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(-2.0, 2.0),
        ]
    );
}

#[test]
fn test_clockwise_clicks_form_counter_clockwise_quad() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();

    // 1. Click the corners in clockwise order
    for (x, y) in [(-2.0, -2.0), (-2.0, 2.0), (2.0, 2.0), (2.0, -2.0)] {
        click(&mut canvas, &mut board, x, y);
    }

    // 2. The angular sort winds them counter-clockwise from the
    //    lower-left corner, so no edges cross
    assert_eq!(
        board.points,
        vec![
            DVec2::new(-2.0, -2.0),
            DVec2::new(2.0, -2.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(-2.0, 2.0),
        ]
    );
}

#[test]
fn test_click_rounds_to_nearest_unit() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();

    click(&mut canvas, &mut board, 1.2, 0.7);
    assert_eq!(board.points[0], DVec2::new(1.0, 1.0));
}

#[test]
fn test_fifth_click_restarts_shape() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    square_board(&mut canvas, &mut board);

    click(&mut canvas, &mut board, 5.0, 5.0);
    assert_eq!(board.points, vec![DVec2::new(5.0, 5.0)]);
    assert!(board.preview.is_none());
    assert!(board.history.is_empty());
}

#[test]
fn test_click_ignored_during_animation() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    assert!(canvas.apply_transformation(
        quad_grid::Transformation::Rotate { degrees: 90.0 },
        &board,
        &mut events
    ));
    assert!(canvas.is_animating());

    let events = click(&mut canvas, &mut board, 5.0, 5.0);
    assert!(events.is_empty());
    assert_eq!(board.points.len(), 4);
}

#[test]
fn test_mouse_point_drag_moves_single_vertex() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    // 1. Grab vertex 0 at (-2,-2)
    let start = client(&canvas, -2.0, -2.0);
    assert!(canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board
    ));
    assert!(canvas.drag_active());

    // 2. Move one unit right; the board itself must not change yet
    let target = client(&canvas, -1.0, -2.0);
    let consumed = canvas.pointer_move(&PointerInput::mouse(target.x, target.y), &mut events);
    assert!(consumed);
    assert_eq!(board.points[0], DVec2::new(-2.0, -2.0));
    match events.iter().find(|e| matches!(e, GridEvent::DragMoved { .. })) {
        Some(GridEvent::DragMoved { points }) => {
            assert_eq!(points[0], DVec2::new(-1.0, -2.0));
            assert_eq!(points[1], DVec2::new(2.0, -2.0));
        }
        _ => panic!("Should have emitted DragMoved"),
    }

    // 3. Release commits the live set
    assert!(canvas.pointer_up(&mut board, &mut events));
    assert!(!canvas.drag_active());
    assert_eq!(board.points[0], DVec2::new(-1.0, -2.0));
    assert_eq!(board.points[1], DVec2::new(2.0, -2.0));
    assert_eq!(board.points[2], DVec2::new(2.0, 2.0));
    assert_eq!(board.points[3], DVec2::new(-2.0, 2.0));
}

#[test]
fn test_mouse_click_without_movement_commits_nothing() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);
    let before = board.points.clone();

    let start = client(&canvas, -2.0, -2.0);
    assert!(canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board
    ));

    // Release without ever moving
    assert!(!canvas.pointer_up(&mut board, &mut events));
    assert!(!canvas.drag_active());
    assert_eq!(board.points, before);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GridEvent::DragCommitted { .. }))
    );
}

#[test]
fn test_shape_drag_translates_every_vertex() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    let start = client(&canvas, 0.0, 0.0);
    assert!(canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Shape,
        &board
    ));

    let target = client(&canvas, 1.0, 2.0);
    canvas.pointer_move(&PointerInput::mouse(target.x, target.y), &mut events);
    canvas.pointer_up(&mut board, &mut events);

    assert_eq!(
        board.points,
        vec![
            DVec2::new(-1.0, 0.0),
            DVec2::new(3.0, 0.0),
            DVec2::new(3.0, 4.0),
            DVec2::new(-1.0, 4.0),
        ]
    );
}

#[test]
fn test_drag_start_rejected_for_missing_targets() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();

    // Empty board: no vertex to grab
    let pos = client(&canvas, 0.0, 0.0);
    assert!(!canvas.drag_start(
        &PointerInput::mouse(pos.x, pos.y),
        DragTarget::Point { index: 0 },
        &board
    ));

    // Incomplete shape: the body is not draggable yet
    click(&mut canvas, &mut board, 0.0, 0.0);
    click(&mut canvas, &mut board, 1.0, 0.0);
    click(&mut canvas, &mut board, 1.0, 1.0);
    assert!(!canvas.drag_start(&PointerInput::mouse(pos.x, pos.y), DragTarget::Shape, &board));

    // But its existing vertices are
    assert!(canvas.drag_start(
        &PointerInput::mouse(pos.x, pos.y),
        DragTarget::Point { index: 2 },
        &board
    ));
}

#[test]
fn test_second_drag_start_rejected_while_active() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    square_board(&mut canvas, &mut board);

    let start = client(&canvas, -2.0, -2.0);
    assert!(canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board
    ));
    let other = client(&canvas, 2.0, -2.0);
    assert!(!canvas.drag_start(
        &PointerInput::mouse(other.x, other.y),
        DragTarget::Point { index: 1 },
        &board
    ));
}

#[test]
fn test_drag_start_rejected_while_animating() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    assert!(canvas.apply_transformation(
        quad_grid::Transformation::Rotate { degrees: 90.0 },
        &board,
        &mut events
    ));
    let start = client(&canvas, -2.0, -2.0);
    assert!(!canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board
    ));
}

#[test]
fn test_background_click_ignored_during_drag() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    square_board(&mut canvas, &mut board);

    let start = client(&canvas, -2.0, -2.0);
    canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board,
    );

    let events = click(&mut canvas, &mut board, 5.0, 5.0);
    assert!(events.is_empty());
    assert_eq!(board.points.len(), 4);
    assert!(canvas.drag_active());
}

#[test]
fn test_touch_drag_confirms_on_horizontal_move() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    // 1. Touch down on vertex 0; nothing is classified yet
    let start = client(&canvas, -2.0, -2.0);
    assert!(canvas.drag_start(
        &PointerInput::touch(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board
    ));

    // 2. A mostly-horizontal move past the slop confirms the drag, and the
    //    confirming move itself already drags (40px right is two units)
    let consumed = canvas.pointer_move(
        &PointerInput::touch(start.x + 40.0, start.y + 2.0),
        &mut events,
    );
    assert!(consumed);
    match events.iter().find(|e| matches!(e, GridEvent::DragMoved { .. })) {
        Some(GridEvent::DragMoved { points }) => {
            assert_eq!(points[0], DVec2::new(0.0, -2.0));
        }
        _ => panic!("Should have emitted DragMoved"),
    }

    // 3. Release commits
    assert!(canvas.pointer_up(&mut board, &mut events));
    assert_eq!(board.points[0], DVec2::new(0.0, -2.0));
}

#[test]
fn test_touch_scroll_aborts_drag() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);
    let before = board.points.clone();

    let start = client(&canvas, -2.0, -2.0);
    assert!(canvas.drag_start(
        &PointerInput::touch(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board
    ));

    // A mostly-vertical move: the user is scrolling the page. The event is
    // not consumed, so the host lets the native scroll proceed.
    let consumed = canvas.pointer_move(
        &PointerInput::touch(start.x + 2.0, start.y + 30.0),
        &mut events,
    );
    assert!(!consumed);
    assert!(!canvas.drag_active());
    assert!(events.contains(&GridEvent::DragAborted));

    // The gesture is gone: release does nothing
    assert!(!canvas.pointer_up(&mut board, &mut events));
    assert_eq!(board.points, before);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GridEvent::DragCommitted { .. }))
    );
}

#[test]
fn test_touch_jitter_below_slop_stays_pending() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);
    let before = board.points.clone();

    let start = client(&canvas, -2.0, -2.0);
    canvas.drag_start(
        &PointerInput::touch(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board,
    );

    // 3px both ways: too small to call either way
    let consumed = canvas.pointer_move(
        &PointerInput::touch(start.x + 3.0, start.y + 3.0),
        &mut events,
    );
    assert!(!consumed);
    assert!(canvas.drag_active());
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, GridEvent::DragMoved { .. }))
    );

    // Lifting the finger now is a tap, not a drag
    assert!(!canvas.pointer_up(&mut board, &mut events));
    assert_eq!(board.points, before);
}

#[test]
fn test_touch_slop_boundary_classifies() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    // Exactly 5px horizontal: classified, and horizontal wins
    let start = client(&canvas, -2.0, -2.0);
    canvas.drag_start(
        &PointerInput::touch(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board,
    );
    assert!(canvas.pointer_move(&PointerInput::touch(start.x + 5.0, start.y), &mut events));
    canvas.pointer_up(&mut board, &mut events);

    // Exactly 5px vertical on a fresh gesture: classified as scroll
    canvas.drag_start(
        &PointerInput::touch(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board,
    );
    assert!(!canvas.pointer_move(&PointerInput::touch(start.x, start.y + 5.0), &mut events));
    assert!(!canvas.drag_active());
}

#[test]
fn test_move_without_position_is_ignored() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    let start = client(&canvas, -2.0, -2.0);
    canvas.drag_start(
        &PointerInput::touch(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board,
    );

    let consumed = canvas.pointer_move(&PointerInput::touch_release(), &mut events);
    assert!(!consumed);
    assert!(canvas.drag_active());
    assert!(events.is_empty());
}

#[test]
fn test_drag_deltas_measure_from_baseline() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    let start = client(&canvas, -2.0, -2.0);
    canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board,
    );

    // 1. Out one unit
    let out = client(&canvas, -1.0, -2.0);
    canvas.pointer_move(&PointerInput::mouse(out.x, out.y), &mut events);

    // 2. Back to within rounding distance of the origin of the gesture.
    //    Deltas apply to the baseline snapshot, so the vertex returns to
    //    its starting unit instead of drifting.
    let back = client(&canvas, -1.8, -2.0);
    canvas.pointer_move(&PointerInput::mouse(back.x, back.y), &mut events);
    canvas.pointer_up(&mut board, &mut events);
    assert_eq!(board.points[0], DVec2::new(-2.0, -2.0));
}

#[test]
fn test_drag_rounds_fractional_positions() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    let start = client(&canvas, -2.0, -2.0);
    canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board,
    );

    // +0.6 units right, +0.4 units up: rounds to (-1, -2)
    let target = client(&canvas, -1.4, -1.6);
    canvas.pointer_move(&PointerInput::mouse(target.x, target.y), &mut events);
    canvas.pointer_up(&mut board, &mut events);
    assert_eq!(board.points[0], DVec2::new(-1.0, -2.0));
}

#[test]
fn test_live_updates_precede_commit() {
    let mut canvas = create_test_canvas();
    let mut board = BoardState::default();
    let mut events = Vec::new();
    square_board(&mut canvas, &mut board);

    let start = client(&canvas, -2.0, -2.0);
    canvas.drag_start(
        &PointerInput::mouse(start.x, start.y),
        DragTarget::Point { index: 0 },
        &board,
    );
    let target = client(&canvas, -1.0, -1.0);
    canvas.pointer_move(&PointerInput::mouse(target.x, target.y), &mut events);
    canvas.pointer_up(&mut board, &mut events);

    let moved = events
        .iter()
        .position(|e| matches!(e, GridEvent::DragMoved { .. }));
    let committed = events
        .iter()
        .position(|e| matches!(e, GridEvent::DragCommitted { .. }));
    match (moved, committed) {
        (Some(m), Some(c)) => assert!(m < c, "live update must precede the commit"),
        _ => panic!("Should have emitted both DragMoved and DragCommitted"),
    }
}
