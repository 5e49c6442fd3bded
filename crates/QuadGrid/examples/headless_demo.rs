use std::time::Duration;

use glam::DVec2;
use quad_grid::model::BoardState;
use quad_grid::{DragTarget, GridCanvas, GridConfig, GridEvent, PointerInput, Rect, Transformation};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== QuadGrid Headless Demo ===");

    // 1. Initialize Canvas
    let config = GridConfig::default();
    let mut canvas = GridCanvas::new(config);
    // Explicitly set the grid element bounds (simulating a layout pass)
    canvas.set_bounds(Rect::new(DVec2::ZERO, DVec2::new(600.0, 600.0)));

    // 2. Initialize Board State
    let mut board = BoardState::default();
    let mut events: Vec<GridEvent> = Vec::new();

    // 3. Click four grid positions; the fourth click closes the shape
    println!("\n>> Placing four points...");
    for (x, y) in [(-3.0, -2.0), (3.0, -2.0), (4.0, 3.0), (-2.0, 3.0)] {
        let pos = canvas.view.grid_to_client(DVec2::new(x, y));
        canvas.background_click(&PointerInput::mouse(pos.x, pos.y), &mut board, &mut events);
    }
    println!("  Shape: {:?}", board.points);

    // 4. Drag the first vertex one unit to the right
    println!("\n>> Dragging vertex 0...");
    let grab = canvas.view.grid_to_client(board.points[0]);
    canvas.drag_start(
        &PointerInput::mouse(grab.x, grab.y),
        DragTarget::Point { index: 0 },
        &board,
    );
    let drop = canvas.view.grid_to_client(board.points[0] + DVec2::new(1.0, 0.0));
    canvas.pointer_move(&PointerInput::mouse(drop.x, drop.y), &mut events);
    canvas.pointer_up(&mut board, &mut events);
    println!("  Vertex 0 now at: {}", board.points[0]);

    // 5. Apply a rotation and run the frame loop until the commit lands
    println!("\n>> Applying a 90° rotation...");
    canvas.apply_transformation(Transformation::Rotate { degrees: 90.0 }, &board, &mut events);

    let mut frame = 0;
    while canvas.is_animating() {
        let (draw_list, frame_events) = canvas.update(Duration::from_millis(100), &mut board);
        frame += 1;
        println!(
            "--- Frame {frame}: {} draw commands, events: {frame_events:?}",
            draw_list.len()
        );
    }

    // 6. Inspect the derivation log
    if let Some(entry) = board.history.first() {
        println!("\n{}", entry.description);
        for (point, derivation) in entry.original.iter().zip(&entry.derivations) {
            println!("  {point}:");
            for line in derivation.lines() {
                println!("    {line}");
            }
        }
    }

    // 7. A vertical touch gesture is handed back to the scroller
    println!("\n>> Touch-dragging vertically (should abort)...");
    let displayed = board.displayed()[0];
    let grab = canvas.view.grid_to_client(displayed);
    canvas.drag_start(
        &PointerInput::touch(grab.x, grab.y),
        DragTarget::Point { index: 0 },
        &board,
    );
    events.clear();
    let consumed = canvas.pointer_move(&PointerInput::touch(grab.x + 2.0, grab.y + 40.0), &mut events);
    println!("  Consumed: {consumed}, events: {events:?}");

    // 8. Reset wipes the whole board
    println!("\n>> Resetting...");
    canvas.reset(&mut board, &mut events);
    println!(
        "  Points: {}, history entries: {}",
        board.points.len(),
        board.history.len()
    );

    println!("\nDemo Complete.");
}
