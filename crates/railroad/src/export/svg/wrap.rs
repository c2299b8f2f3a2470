//! SVG rendering for loops and groups.

use svg::node::element as svg_element;

use railroad_core::{draw::Heading, geometry::Point};

use super::{fill_gaps, node_group, rail, render_node};
use crate::layout::Layout;

use Heading::{East, North, South, West};

pub(super) fn one_or_more(layout: &Layout<'_>, origin: Point, width: f32) -> svg_element::Group {
    let params = layout.params();
    let ar = params.arc_radius();
    let vs = params.vertical_separation();
    let [item, separator] = layout.children() else {
        return node_group(layout);
    };
    let (group, x) = fill_gaps(node_group(layout), layout, origin, width);
    let y = origin.y();
    let outer_width = layout.extent().width();
    let inner_width = outer_width - 2.0 * ar;
    let (item_extent, separator_extent) = (item.extent(), separator.extent());

    let entry = rail(Point::new(x, y), params).right(ar);
    let exit = rail(
        Point::new(x + outer_width - ar, y + item_extent.height()),
        params,
    )
    .right(ar);

    let distance = (2.0 * ar)
        .max(item_extent.height() + item_extent.down() + vs + separator_extent.up());
    let loop_down = rail(Point::new(x + ar, y), params)
        .arc(North, West)
        .down(distance - 2.0 * ar)
        .arc(West, South);
    let loop_up = rail(
        Point::new(
            x + outer_width - ar,
            y + distance + separator_extent.height(),
        ),
        params,
    )
    .arc(South, East)
    .up(distance - 2.0 * ar + separator_extent.height() - item_extent.height())
    .arc(East, North);

    group
        .add(entry.into_element())
        .add(render_node(item, Point::new(x + ar, y), inner_width))
        .add(exit.into_element())
        .add(loop_down.into_element())
        .add(render_node(
            separator,
            Point::new(x + ar, y + distance),
            inner_width,
        ))
        .add(loop_up.into_element())
}

pub(super) fn group(
    layout: &Layout<'_>,
    box_up: f32,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let params = layout.params();
    let ar = params.arc_radius();
    let extent = layout.extent();
    let (mut group, x) = fill_gaps(node_group(layout), layout, origin, width);
    let y = origin.y();

    let frame = svg_element::Rectangle::new()
        .set("x", x)
        .set("y", y - box_up)
        .set("width", extent.width())
        .set("height", box_up + extent.height() + extent.down())
        .set("rx", ar)
        .set("ry", ar)
        .set("class", "group-box");
    group = group.add(frame);

    let children = layout.children();
    if let Some(item) = children.first() {
        group = group.add(render_node(item, Point::new(x, y), extent.width()));
    }
    if let Some(label) = children.get(1) {
        let label_extent = label.extent();
        let label_y = y - (box_up + label_extent.down() + label_extent.height());
        group = group.add(render_node(
            label,
            Point::new(x, label_y),
            label_extent.width(),
        ));
    }
    group
}
