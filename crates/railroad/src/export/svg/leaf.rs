//! SVG rendering for leaf nodes.

use svg::node::element as svg_element;

use railroad_core::geometry::Point;

use super::{fill_gaps, node_group, rail};
use crate::{
    config::DiagramType,
    layout::{BOX_HALF_HEIGHT, GLYPH_HALF_HEIGHT, GLYPH_WIDTH, Layout},
    node::{ArrowDirection, TextContent},
};

/// Corner radius of terminal boxes.
const TERMINAL_CORNER_RADIUS: f32 = 10.0;
/// Horizontal inset of the slanted sides of an expression box.
const EXPRESSION_SLANT: f32 = 10.0;
/// Radius of the ball drawn at the start of an SQL diagram.
const SQL_BALL_RADIUS: f32 = 3.7;

/// Joins the node's base class with the caller-supplied one.
fn class_list(base: &str, content: &TextContent) -> String {
    match content.class() {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

/// Adds the label of a text node, linked and titled as requested.
fn add_label(
    group: svg_element::Group,
    content: &TextContent,
    text: svg_element::Text,
) -> svg_element::Group {
    let group = match content.href() {
        Some(href) => group.add(svg_element::Anchor::new().set("xlink:href", href).add(text)),
        None => group.add(text),
    };
    match content.title() {
        Some(title) => group.add(svg_element::Title::new(title)),
        None => group,
    }
}

fn centered_text(content: &TextContent, x: f32, y: f32) -> svg_element::Text {
    svg_element::Text::new(content.text())
        .set("x", x)
        .set("y", y)
}

pub(super) fn terminal(
    layout: &Layout<'_>,
    content: &TextContent,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    boxed(layout, content, origin, width, "terminal", Some(TERMINAL_CORNER_RADIUS))
}

pub(super) fn non_terminal(
    layout: &Layout<'_>,
    content: &TextContent,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    boxed(layout, content, origin, width, "non-terminal", None)
}

fn boxed(
    layout: &Layout<'_>,
    content: &TextContent,
    origin: Point,
    width: f32,
    class: &str,
    corner_radius: Option<f32>,
) -> svg_element::Group {
    let extent = layout.extent();
    let group = node_group(layout).set("class", class_list(class, content));
    let (group, x) = fill_gaps(group, layout, origin, width);

    let mut rect = svg_element::Rectangle::new()
        .set("x", x)
        .set("y", origin.y() - BOX_HALF_HEIGHT)
        .set("width", extent.width())
        .set("height", extent.up() + extent.down());
    if let Some(radius) = corner_radius {
        rect = rect.set("rx", radius).set("ry", radius);
    }
    let text = centered_text(content, x + extent.width() / 2.0, origin.y() + 4.0);
    add_label(group.add(rect), content, text)
}

pub(super) fn expression(
    layout: &Layout<'_>,
    content: &TextContent,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let extent = layout.extent();
    let group = node_group(layout).set("class", class_list("expression", content));
    let (group, x) = fill_gaps(group, layout, origin, width);

    let y = origin.y();
    let w = extent.width();
    let top = y - BOX_HALF_HEIGHT;
    let bottom = top + extent.up() + extent.down();
    let points = format!(
        "{}, {top} {}, {top} {}, {y} {}, {bottom} {}, {bottom} {x}, {y}",
        x + EXPRESSION_SLANT,
        x + w - EXPRESSION_SLANT,
        x + w,
        x + w - EXPRESSION_SLANT,
        x + EXPRESSION_SLANT,
    );
    let polygon = svg_element::Polygon::new().set("points", points);
    let text = centered_text(content, x + w / 2.0, y + 4.0);
    add_label(group.add(polygon), content, text)
}

pub(super) fn comment(
    layout: &Layout<'_>,
    content: &TextContent,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let extent = layout.extent();
    let group = node_group(layout).set("class", class_list("non-terminal", content));
    let (group, x) = fill_gaps(group, layout, origin, width);
    let text = centered_text(content, x + extent.width() / 2.0, origin.y() + 5.0)
        .set("class", "comment");
    add_label(group, content, text)
}

pub(super) fn skip(layout: &Layout<'_>, origin: Point, width: f32) -> svg_element::Group {
    node_group(layout).add(
        rail(origin, layout.params())
            .right(width)
            .with_class("skip")
            .into_element(),
    )
}

pub(super) fn start(layout: &Layout<'_>, label: Option<&str>, origin: Point) -> svg_element::Group {
    let width = layout.extent().width();
    let (x, y) = (origin.x(), origin.y());
    let path = rail(Point::new(x, y - GLYPH_HALF_HEIGHT), layout.params()).with_class("start");
    let path = match layout.sentinel_type() {
        DiagramType::Complex => path.down(20.0).move_by(0.0, -10.0).right(width),
        DiagramType::Sql => path
            .move_by(0.0, 10.0)
            .circle(SQL_BALL_RADIUS)
            .move_to(origin)
            .right(width),
        DiagramType::Simple | DiagramType::Custom(_) => path
            .down(20.0)
            .move_by(10.0, -20.0)
            .down(20.0)
            .move_by(-10.0, -10.0)
            .right(width),
    };
    let group = node_group(layout).add(path.into_element());
    match label {
        Some(label) => group.add(
            svg_element::Text::new(label)
                .set("x", x)
                .set("y", y - 15.0)
                .set("style", "text-anchor:start"),
        ),
        None => group,
    }
}

pub(super) fn end(layout: &Layout<'_>, origin: Point) -> svg_element::Group {
    let path = rail(origin, layout.params())
        .h(GLYPH_WIDTH)
        .with_class("end");
    let path = match layout.sentinel_type() {
        DiagramType::Complex => path.move_by(0.0, -10.0).v(20.0),
        DiagramType::Sql => path.move_by(-5.0, -5.0).line_by(5.0, 5.0).line_by(-5.0, 5.0),
        DiagramType::Simple | DiagramType::Custom(_) => path
            .move_by(-10.0, -10.0)
            .v(20.0)
            .move_by(10.0, -20.0)
            .v(20.0),
    };
    node_group(layout).add(path.into_element())
}

pub(super) fn arrow(
    layout: &Layout<'_>,
    direction: ArrowDirection,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let path = rail(origin, layout.params()).with_class("arrow");
    let path = match direction {
        ArrowDirection::Right => path
            .h(width)
            .move_by(-5.0, -5.0)
            .line_by(5.0, 5.0)
            .line_by(-5.0, 5.0),
        ArrowDirection::Left => path
            .move_by(5.0, -5.0)
            .line_by(-5.0, 5.0)
            .line_by(5.0, 5.0)
            .line_by(-5.0, -5.0)
            .h(width),
        ArrowDirection::Undirected => path.h(width),
    };
    node_group(layout).add(path.into_element())
}
