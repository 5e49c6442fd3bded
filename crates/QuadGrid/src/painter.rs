use glam::{DVec2, Vec4};

use crate::config::{GridConfig, GridStyle};
use crate::history::format_number;
use crate::render::{DrawCommand, RenderList, Scene};
use crate::view::GridView;

/// Turns an abstract [`Scene`] into concrete draw commands.
///
/// Hosts that render the scene themselves (an SVG layer, for instance) can
/// skip the painter entirely and consume the `Scene` snapshot directly.
pub struct Painter;

impl Painter {
    /// Generates the full render list for the current frame.
    pub fn draw_scene(view: &GridView, config: &GridConfig, scene: &Scene) -> RenderList {
        let mut draw_list = Vec::new();
        let style = &config.style;

        // 1. Background
        draw_list.push(DrawCommand::Rect {
            pos: view.bounds.min,
            size: view.bounds.size(),
            color: style.background_color,
            corner_radius: 0.0,
            stroke_width: 0.0,
            stroke_color: None,
        });

        // 2. Unit grid and axes
        Self::draw_grid(view, style, &mut draw_list);

        // 3. Ghost of the pre-transform shape, outlined behind the live
        //    polygon while a transformed result is showing.
        let ghost = if let Some(anim) = &scene.animation {
            Some(&anim.from)
        } else if scene.preview.is_some() && scene.live.is_none() {
            Some(&scene.base)
        } else {
            None
        };
        if let Some(points) = ghost
            && points.len() == 4
        {
            draw_list.push(DrawCommand::Polygon {
                points: points.iter().map(|p| view.grid_to_client(*p)).collect(),
                fill: Vec4::ZERO,
                stroke_width: 1.0,
                stroke_color: Some(style.source_color),
            });
        }

        // 4. The displayed shape
        let shape = scene.shape_points();
        if shape.len() == 4 {
            draw_list.push(DrawCommand::Polygon {
                points: shape.iter().map(|p| view.grid_to_client(*p)).collect(),
                fill: style.shape_fill,
                stroke_width: 2.0,
                stroke_color: Some(style.shape_stroke),
            });
        }

        // 5. Vertex markers and coordinate labels
        for (i, point) in shape.iter().enumerate() {
            let center = view.grid_to_client(*point);
            let highlighted = scene.highlight == Some(i);
            let radius = if highlighted {
                style.point_radius * 1.6
            } else {
                style.point_radius
            };
            let color = if highlighted {
                style.highlight_color
            } else {
                style.point_color
            };
            draw_list.push(DrawCommand::Rect {
                pos: center - DVec2::splat(radius),
                size: DVec2::splat(radius * 2.0),
                color,
                corner_radius: radius,
                stroke_width: 0.0,
                stroke_color: None,
            });
            draw_list.push(DrawCommand::Text {
                pos: center + DVec2::new(8.0, -8.0),
                text: format!("({}, {})", format_number(point.x), format_number(point.y)),
                color: style.label_color,
                size: style.label_size,
            });
        }

        draw_list
    }

    fn draw_grid(view: &GridView, style: &GridStyle, draw_list: &mut RenderList) {
        let half = view.viewbox_size / 2.0;

        // Unit lines across the whole viewbox.
        let mut u = -half;
        while u <= half {
            draw_list.push(DrawCommand::Line {
                start: view.grid_to_client(DVec2::new(u, -half)),
                end: view.grid_to_client(DVec2::new(u, half)),
                color: style.grid_color,
                width: 1.0,
            });
            draw_list.push(DrawCommand::Line {
                start: view.grid_to_client(DVec2::new(-half, u)),
                end: view.grid_to_client(DVec2::new(half, u)),
                color: style.grid_color,
                width: 1.0,
            });
            u += 1.0;
        }

        // Axes, drawn over the unit lines.
        draw_list.push(DrawCommand::Line {
            start: view.grid_to_client(DVec2::new(0.0, -half)),
            end: view.grid_to_client(DVec2::new(0.0, half)),
            color: style.axis_color,
            width: 2.0,
        });
        draw_list.push(DrawCommand::Line {
            start: view.grid_to_client(DVec2::new(-half, 0.0)),
            end: view.grid_to_client(DVec2::new(half, 0.0)),
            color: style.axis_color,
            width: 2.0,
        });
    }
}
