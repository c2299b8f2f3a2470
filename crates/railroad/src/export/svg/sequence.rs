//! SVG rendering for the sequential containers.

use svg::node::element as svg_element;

use railroad_core::{
    draw::{Heading, Octant, Rotation},
    geometry::Point,
};

use super::{fill_gaps, node_group, rail, render_node};
use crate::layout::{Crossover, Layout};

use Heading::{East, North, South, West};

pub(super) fn sequence(layout: &Layout<'_>, origin: Point, width: f32) -> svg_element::Group {
    let params = layout.params();
    let half = params.horizontal_separation() / 2.0;
    let (mut group, x) = fill_gaps(node_group(layout), layout, origin, width);

    let mut cursor = origin.with_x(x);
    let last = layout.children().len().saturating_sub(1);
    for (i, child) in layout.children().iter().enumerate() {
        if child.needs_space() && i > 0 {
            group = group.add(rail(cursor, params).h(half).into_element());
            cursor = cursor.shift_x(half);
        }
        let extent = child.extent();
        group = group.add(render_node(child, cursor, extent.width()));
        cursor = cursor.shift_x(extent.width()).shift_y(extent.height());
        if child.needs_space() && i < last {
            group = group.add(rail(cursor, params).h(half).into_element());
            cursor = cursor.shift_x(half);
        }
    }
    group
}

pub(super) fn stack(layout: &Layout<'_>, origin: Point, width: f32) -> svg_element::Group {
    let params = layout.params();
    let ar = params.arc_radius();
    let vs = params.vertical_separation();
    let half = params.horizontal_separation() / 2.0;
    let extent = layout.extent();
    let children = layout.children();

    let (left_gap, right_gap) = params.internal_alignment().gaps(width, extent.width());
    let mut group = node_group(layout).add(rail(origin, params).h(left_gap).into_element());
    let mut x = origin.x() + left_gap;
    let mut y = origin.y();
    let x_initial = x;

    let wrapped = children.len() > 1;
    let inner_width = if wrapped {
        group = group.add(rail(Point::new(x, y), params).h(ar).into_element());
        x += ar;
        extent.width() - 2.0 * ar
    } else {
        extent.width()
    };

    for (i, child) in children.iter().enumerate() {
        let child_extent = child.extent();
        group = group.add(render_node(child, Point::new(x, y), inner_width));
        x += inner_width;
        y += child_extent.height();
        if let Some(next) = children.get(i + 1) {
            let next_up = next.extent().up();
            let turn = rail(Point::new(x, y), params)
                .arc(North, East)
                .down(child_extent.down() + vs - 2.0 * ar)
                .arc(East, South)
                .left(inner_width)
                .arc(North, West)
                .down(next_up + vs - 2.0 * ar)
                .arc(West, South)
                .right(half);
            group = group.add(turn.into_element());
            y += (child_extent.down() + vs).max(2.0 * ar) + (next_up + vs).max(2.0 * ar);
            x = x_initial + ar;
        }
    }

    if wrapped {
        group = group.add(rail(Point::new(x, y), params).h(ar).into_element());
        x += ar;
    }
    group.add(rail(Point::new(x, y), params).h(right_gap).into_element())
}

pub(super) fn optional_sequence(
    layout: &Layout<'_>,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let params = layout.params();
    let ar = params.arc_radius();
    let vs = params.vertical_separation();
    let half = params.horizontal_separation() / 2.0;
    let (mut group, mut x) = fill_gaps(node_group(layout), layout, origin, width);
    let mut y = origin.y();
    let upper_line_y = y - layout.extent().up();
    let last = layout.children().len().saturating_sub(1);

    for (i, child) in layout.children().iter().enumerate() {
        let extent = child.extent();
        let item_space = if child.needs_space() { half } else { 0.0 };
        let item_width = extent.width() + item_space;

        if i == 0 {
            let upper_skip = rail(Point::new(x, y), params)
                .arc(South, East)
                .up(y - upper_line_y - 2.0 * ar)
                .arc(West, North)
                .right(item_width - ar)
                .arc(North, East)
                .down(y + extent.height() - upper_line_y - 2.0 * ar)
                .arc(West, South);
            let straight = rail(Point::new(x, y), params).right(item_space + ar);
            group = group
                .add(upper_skip.into_element())
                .add(straight.into_element())
                .add(render_node(
                    child,
                    Point::new(x + item_space + ar, y),
                    extent.width(),
                ));
            x += item_width + ar;
            y += extent.height();
            continue;
        }

        if i < last {
            let upper_skip = rail(Point::new(x, upper_line_y), params)
                .right(2.0 * ar + item_width.max(ar) + ar)
                .arc(North, East)
                .down(y - upper_line_y + extent.height() - 2.0 * ar)
                .arc(West, South);
            group = group.add(upper_skip.into_element());
        }

        let straight = rail(Point::new(x, y), params).right(2.0 * ar);
        let exit = rail(
            Point::new(x + 2.0 * ar + extent.width(), y + extent.height()),
            params,
        )
        .right(item_space + ar);
        let lower_skip = rail(Point::new(x, y), params)
            .arc(North, East)
            .down(extent.height() + (extent.down() + vs).max(2.0 * ar) - 2.0 * ar)
            .arc(West, South)
            .right(item_width - ar)
            .arc(South, East)
            .up(extent.down() + vs - 2.0 * ar)
            .arc(West, North);
        group = group
            .add(straight.into_element())
            .add(render_node(child, Point::new(x + 2.0 * ar, y), extent.width()))
            .add(exit.into_element())
            .add(lower_skip.into_element());

        x += 2.0 * ar + item_width.max(ar) + ar;
        y += extent.height();
    }
    group
}

pub(super) fn alternating_sequence(
    layout: &Layout<'_>,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let params = layout.params();
    let ar = params.arc_radius();
    let extent = layout.extent();
    let [first, second] = layout.children() else {
        return node_group(layout);
    };
    let (group, x) = fill_gaps(node_group(layout), layout, origin, width);
    let y = origin.y();
    let inner_width = extent.width() - 4.0 * ar;
    let (first_extent, second_extent) = (first.extent(), second.extent());

    let first_in = extent.up() - first_extent.up();
    let first_out = first_in - first_extent.height();
    let first_entry = rail(Point::new(x, y), params)
        .arc(South, East)
        .up(first_in - 2.0 * ar)
        .arc(West, North);
    let first_exit = rail(Point::new(x + extent.width() - 2.0 * ar, y - first_out), params)
        .arc(North, East)
        .down(first_out - 2.0 * ar)
        .arc(West, South);

    let second_out = extent.down() - second_extent.down();
    let second_in = second_out - second_extent.height();
    let second_entry = rail(Point::new(x, y), params)
        .arc(North, East)
        .down(second_in - 2.0 * ar)
        .arc(West, South);
    let second_exit = rail(Point::new(x + extent.width() - 2.0 * ar, y + second_out), params)
        .arc(South, East)
        .up(second_out - 2.0 * ar)
        .arc(West, North);

    let crossover = Crossover::new(params);
    let cross_bar = (inner_width - crossover.cross_x) / 2.0;
    let rise = crossover.cross_y - crossover.arc_y;
    let run = crossover.cross_x - crossover.arc_x;
    let downward = rail(Point::new(x + ar, y - crossover.cross_y / 2.0 - ar), params)
        .arc(West, South)
        .right(cross_bar)
        .eighth_arc(Octant::North, Rotation::Clockwise)
        .line_by(run, rise)
        .eighth_arc(Octant::SouthWest, Rotation::CounterClockwise)
        .right(cross_bar)
        .arc(North, East);
    let upward = rail(Point::new(x + ar, y + crossover.cross_y / 2.0 + ar), params)
        .arc(West, North)
        .right(cross_bar)
        .eighth_arc(Octant::South, Rotation::CounterClockwise)
        .line_by(run, -rise)
        .eighth_arc(Octant::NorthWest, Rotation::Clockwise)
        .right(cross_bar)
        .arc(South, East);

    group
        .add(first_entry.into_element())
        .add(render_node(first, Point::new(x + 2.0 * ar, y - first_in), inner_width))
        .add(first_exit.into_element())
        .add(second_entry.into_element())
        .add(render_node(second, Point::new(x + 2.0 * ar, y + second_in), inner_width))
        .add(second_exit.into_element())
        .add(downward.into_element())
        .add(upward.into_element())
}
