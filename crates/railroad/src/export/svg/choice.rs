//! SVG rendering for the branching containers.

use svg::node::element as svg_element;

use railroad_core::{draw::Heading, geometry::Point};

use super::{fill_gaps, node_group, rail, render_node};
use crate::{
    layout::{Layout, MULTI_ENTRY_WIDTH, MULTI_EXIT_WIDTH, MULTI_MIN_REACH},
    node::ChoiceMode,
};

use Heading::{East, North, South, West};

pub(super) fn choice(
    layout: &Layout<'_>,
    default: usize,
    separators: &[f32],
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let params = layout.params();
    let ar = params.arc_radius();
    let children = layout.children();
    let (mut group, x) = fill_gaps(node_group(layout), layout, origin, width);
    let y = origin.y();
    let inner_width = layout.extent().width() - 4.0 * ar;
    let default_height = layout.extent().height();

    let mut distance = 0.0_f32;
    for i in (0..default).rev() {
        let item = children[i].extent();
        let lower = children[i + 1].extent();
        distance += lower.up() + separators[i] + item.down() + item.height();
        let entry = rail(Point::new(x, y), params)
            .arc(South, East)
            .up(distance - 2.0 * ar)
            .arc(West, North);
        let exit = rail(
            Point::new(x + 2.0 * ar + inner_width, y - distance + item.height()),
            params,
        )
        .arc(North, East)
        .down(distance - item.height() + default_height - 2.0 * ar)
        .arc(West, South);
        group = group
            .add(entry.into_element())
            .add(render_node(
                &children[i],
                Point::new(x + 2.0 * ar, y - distance),
                inner_width,
            ))
            .add(exit.into_element());
    }

    let straight_in = rail(Point::new(x, y), params).right(2.0 * ar);
    let straight_out = rail(
        Point::new(x + 2.0 * ar + inner_width, y + default_height),
        params,
    )
    .right(2.0 * ar);
    group = group
        .add(straight_in.into_element())
        .add(render_node(
            &children[default],
            Point::new(x + 2.0 * ar, y),
            inner_width,
        ))
        .add(straight_out.into_element());

    let mut distance = 0.0_f32;
    for i in default + 1..children.len() {
        let item = children[i].extent();
        let upper = children[i - 1].extent();
        distance += upper.height() + upper.down() + separators[i - 1] + item.up();
        let entry = rail(Point::new(x, y), params)
            .arc(North, East)
            .down(distance - 2.0 * ar)
            .arc(West, South);
        let exit = rail(
            Point::new(x + 2.0 * ar + inner_width, y + distance + item.height()),
            params,
        )
        .arc(South, East)
        .up(distance - 2.0 * ar + item.height() - default_height)
        .arc(West, North);
        group = group
            .add(entry.into_element())
            .add(render_node(
                &children[i],
                Point::new(x + 2.0 * ar, y + distance),
                inner_width,
            ))
            .add(exit.into_element());
    }
    group
}

pub(super) fn multiple_choice(
    layout: &Layout<'_>,
    default: usize,
    mode: ChoiceMode,
    inner_width: f32,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let params = layout.params();
    let ar = params.arc_radius();
    let vs = params.vertical_separation();
    let children = layout.children();
    let (mut group, x) = fill_gaps(node_group(layout), layout, origin, width);
    let y = origin.y();
    let rail_x = x + MULTI_ENTRY_WIDTH;
    let slot_x = rail_x + ar;
    let default_extent = children[default].extent();

    let above: Vec<&Layout<'_>> = children[..default].iter().rev().collect();
    if let Some(nearest) = above.first() {
        let nearest = nearest.extent();
        let mut distance = (MULTI_MIN_REACH + ar)
            .max(default_extent.up() + vs + nearest.down() + nearest.height());
        for (i, item) in above.iter().enumerate() {
            let extent = item.extent();
            let entry = rail(Point::new(rail_x, y), params)
                .up(distance - ar)
                .arc(West, North);
            let exit = rail(
                Point::new(slot_x + inner_width, y - distance + extent.height()),
                params,
            )
            .arc(North, East)
            .down(distance - extent.height() + default_extent.height() - ar - MULTI_MIN_REACH);
            group = group
                .add(entry.into_element())
                .add(render_node(item, Point::new(slot_x, y - distance), inner_width))
                .add(exit.into_element());
            if let Some(next) = above.get(i + 1) {
                let next = next.extent();
                distance += ar.max(extent.up() + vs + next.down() + next.height());
            }
        }
    }

    let straight_in = rail(Point::new(rail_x, y), params).right(ar);
    let straight_out = rail(
        Point::new(slot_x + inner_width, y + layout.extent().height()),
        params,
    )
    .right(ar);
    group = group
        .add(straight_in.into_element())
        .add(render_node(&children[default], Point::new(slot_x, y), inner_width))
        .add(straight_out.into_element());

    let below = &children[default + 1..];
    if let Some(nearest) = below.first() {
        let mut distance = (MULTI_MIN_REACH + ar).max(
            default_extent.height() + default_extent.down() + vs + nearest.extent().up(),
        );
        for (i, item) in below.iter().enumerate() {
            let extent = item.extent();
            let entry = rail(Point::new(rail_x, y), params)
                .down(distance - ar)
                .arc(West, South);
            let exit = rail(
                Point::new(slot_x + inner_width, y + distance + extent.height()),
                params,
            )
            .arc(South, East)
            .up(distance - ar + extent.height() - default_extent.height() - MULTI_MIN_REACH);
            group = group
                .add(entry.into_element())
                .add(render_node(item, Point::new(slot_x, y + distance), inner_width))
                .add(exit.into_element());
            let next_up = below.get(i + 1).map_or(0.0, |next| next.extent().up());
            distance += ar.max(extent.height() + extent.down() + vs + next_up);
        }
    }

    group.add(multiple_choice_badges(
        mode,
        Point::new(x, y),
        layout.extent().width(),
    ))
}

/// Draws the mode indicator before the branches and the repeat marker after
/// them.
fn multiple_choice_badges(mode: ChoiceMode, origin: Point, width: f32) -> svg_element::Group {
    let (x, y) = (origin.x(), origin.y());
    let (title, label) = match mode {
        ChoiceMode::Any => ("take one or more branches, once each, in any order", "1+"),
        ChoiceMode::All => ("take all branches, once each, in any order", "all"),
    };
    let entry_badge = format!(
        "M{} {}h-26a4 4 0 0 0 -4 4v12a4 4 0 0 0 4 4h26z",
        x + MULTI_ENTRY_WIDTH,
        y - 10.0
    );
    let exit_badge = format!(
        "M{} {}h16a4 4 0 0 1 4 4v12a4 4 0 0 1 -4 4h-16z",
        x + width - MULTI_EXIT_WIDTH,
        y - 10.0
    );
    svg_element::Group::new()
        .set("class", "diagram-text")
        .add(svg_element::Title::new(title))
        .add(
            svg_element::Path::new()
                .set("d", entry_badge)
                .set("class", "diagram-text"),
        )
        .add(
            svg_element::Text::new(label)
                .set("x", x + MULTI_ENTRY_WIDTH / 2.0)
                .set("y", y + 4.0)
                .set("class", "diagram-text"),
        )
        .add(
            svg_element::Path::new()
                .set("d", exit_badge)
                .set("class", "diagram-text"),
        )
        .add(
            svg_element::Text::new("↺")
                .set("x", x + width - MULTI_EXIT_WIDTH / 2.0)
                .set("y", y + 4.0)
                .set("class", "diagram-arrow"),
        )
}

pub(super) fn horizontal_choice(
    layout: &Layout<'_>,
    upper_track: f32,
    lower_track: f32,
    origin: Point,
    width: f32,
) -> svg_element::Group {
    let params = layout.params();
    let ar = params.arc_radius();
    let children = layout.children();
    let (Some(first), Some(last)) = (children.first(), children.last()) else {
        return node_group(layout);
    };
    let (mut group, mut x) = fill_gaps(node_group(layout), layout, origin, width);
    let y = origin.y();
    let slot = |item: &Layout<'_>| item.extent().width() + item.spacing(params);
    let bridges = 2.0 * ar * children.len().saturating_sub(2) as f32;
    let last_rise = if last.extent().height() > 0.0 { ar } else { 0.0 };

    let upper_span: f32 =
        children[..children.len() - 1].iter().map(slot).sum::<f32>() + bridges - ar;
    let upper = rail(Point::new(x, y), params)
        .arc(South, East)
        .up(upper_track - 2.0 * ar)
        .arc(West, North)
        .h(upper_span);

    let lower_span: f32 = children[1..].iter().map(slot).sum::<f32>() + bridges + last_rise - ar;
    let lower_start = x + ar + slot(first) + 2.0 * ar;
    let lower = rail(Point::new(lower_start, y + lower_track), params)
        .h(lower_span)
        .arc(South, East)
        .up(lower_track - 2.0 * ar)
        .arc(West, North);
    group = group.add(upper.into_element()).add(lower.into_element());

    let last_index = children.len() - 1;
    for (i, item) in children.iter().enumerate() {
        let height = item.extent().height();
        let input = if i == 0 {
            let input = rail(Point::new(x, y), params).h(ar);
            x += ar;
            input
        } else {
            let input = rail(Point::new(x, y - upper_track), params)
                .arc(North, East)
                .v(upper_track - 2.0 * ar)
                .arc(West, South);
            x += 2.0 * ar;
            input
        };
        group = group.add(input.into_element());

        let item_width = slot(item);
        group = group.add(render_node(item, Point::new(x, y), item_width));
        x += item_width;

        let exit_point = Point::new(x, y + height);
        let output = if i == last_index {
            if height == 0.0 {
                rail(Point::new(x, y), params).h(ar)
            } else {
                rail(exit_point, params).arc(South, East)
            }
        } else if i == 0 && height > lower_track {
            if height - lower_track >= 2.0 * ar {
                rail(exit_point, params)
                    .arc(South, East)
                    .v(lower_track - height + 2.0 * ar)
                    .arc(West, North)
            } else {
                rail(exit_point, params).line_by(2.0 * ar, lower_track - height)
            }
        } else {
            rail(exit_point, params)
                .arc(North, East)
                .v(lower_track - height - 2.0 * ar)
                .arc(West, South)
        };
        group = group.add(output.into_element());
    }
    group
}
