//! Measuring of the branching containers.

use railroad_core::geometry::Extent;

use super::{Detail, Layout, Measure, max_width};
use crate::config::Parameters;

/// Vertical gap needed between two adjacent branches so both connecting
/// arcs fit.
///
/// `entry_delta` and `exit_delta` are the distances the rails would have
/// with a plain `VS` gap, measured at the entry and exit side.
fn branch_separator(arcs: f32, entry_delta: f32, exit_delta: f32, vs: f32) -> f32 {
    if entry_delta < arcs || exit_delta < arcs {
        vs + (arcs - entry_delta).max(arcs - exit_delta)
    } else {
        vs
    }
}

pub(super) fn choice(default: usize, items: &[Layout<'_>], params: &Parameters) -> Measure {
    let ar = params.arc_radius();
    let vs = params.vertical_separation();

    let width = 4.0 * ar + max_width(items);
    let mut separators = vec![vs; items.len().saturating_sub(1)];

    let mut up = 0.0_f32;
    for i in (0..default).rev() {
        let arcs = if i + 1 == default { 2.0 * ar } else { ar };
        let item = items[i].extent();
        let lower = items[i + 1].extent();
        let entry_delta = lower.up() + vs + item.down() + item.height();
        let exit_delta = lower.height() + lower.up() + vs + item.down();
        let separator = branch_separator(arcs, entry_delta, exit_delta, vs);
        separators[i] = separator;
        up += lower.up() + separator + item.down() + item.height();
    }
    up += items.first().map_or(0.0, |item| item.extent().up());

    let height = items[default].extent().height();

    let mut down = 0.0_f32;
    for i in default + 1..items.len() {
        let arcs = if i == default + 1 { 2.0 * ar } else { ar };
        let item = items[i].extent();
        let upper = items[i - 1].extent();
        let entry_delta = upper.height() + upper.down() + vs + item.up();
        let exit_delta = upper.down() + vs + item.up() + item.height();
        let separator = branch_separator(arcs, entry_delta, exit_delta, vs);
        separators[i - 1] = separator;
        down += upper.down() + separator + item.up() + item.height();
    }
    down += items.last().map_or(0.0, |item| item.extent().down());

    Measure::tight(Extent::new(width, up, down).with_height(height))
        .with_detail(Detail::Choice { separators })
}

/// Width of the indicator box drawn before the branches.
pub(crate) const MULTI_ENTRY_WIDTH: f32 = 30.0;
/// Width of the repeat box drawn after the branches.
pub(crate) const MULTI_EXIT_WIDTH: f32 = 20.0;
/// Minimum vertical reach of the branches next to the default one.
pub(crate) const MULTI_MIN_REACH: f32 = 10.0;

pub(super) fn multiple_choice(
    default: usize,
    items: &[Layout<'_>],
    params: &Parameters,
) -> Measure {
    let ar = params.arc_radius();
    let vs = params.vertical_separation();

    let inner_width = max_width(items);
    let width = MULTI_ENTRY_WIDTH + ar + inner_width + ar + MULTI_EXIT_WIDTH;
    let default_height = items[default].extent().height();

    let mut up = items.first().map_or(0.0, |item| item.extent().up());
    let mut down = items.last().map_or(0.0, |item| item.extent().down());
    for (i, item) in items.iter().enumerate() {
        if i == default {
            continue;
        }
        let minimum = if i + 1 == default || i == default + 1 {
            MULTI_MIN_REACH + ar
        } else {
            ar
        };
        let extent = item.extent();
        if i < default {
            let next = items[i + 1].extent();
            up += minimum.max(extent.height() + extent.down() + vs + next.up());
        } else {
            let previous = items[i - 1].extent();
            down += minimum.max(extent.up() + vs + previous.down() + previous.height());
        }
    }
    down = (down - default_height).max(items[default].extent().down());

    Measure::spaced(Extent::new(width, up, down).with_height(default_height))
        .with_detail(Detail::MultipleChoice { inner_width })
}

pub(super) fn horizontal_choice(items: &[Layout<'_>], params: &Parameters) -> Measure {
    let ar = params.arc_radius();
    let vs = params.vertical_separation();

    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return Measure::tight(Extent::default());
    };
    let (first_extent, last_extent) = (first.extent(), last.extent());
    let all_but_last = &items[..items.len() - 1];
    let middles = items.get(1..items.len() - 1).unwrap_or(&[]);

    let items_width: f32 = items
        .iter()
        .map(|item| item.extent().width() + item.spacing(params))
        .sum();
    let width = ar
        + 2.0 * ar * (items.len() - 1) as f32
        + items_width
        + if last_extent.height() > 0.0 { ar } else { 0.0 }
        + ar;

    let highest = all_but_last
        .iter()
        .map(|item| item.extent().up())
        .fold(0.0, f32::max);
    let upper_track = (2.0 * ar).max(vs).max(highest + vs);
    let up = upper_track.max(last_extent.up());

    let deepest_middle = middles
        .iter()
        .map(|item| {
            let extent = item.extent();
            extent.height() + (extent.down() + vs).max(2.0 * ar)
        })
        .fold(0.0, f32::max);
    let mut lower_track = vs
        .max(deepest_middle)
        .max(last_extent.height() + last_extent.down() + vs);
    if first_extent.height() < lower_track {
        lower_track = lower_track.max(first_extent.height() + 2.0 * ar);
    }
    let down = lower_track.max(first_extent.height() + first_extent.down());

    Measure::tight(Extent::new(width, up, down)).with_detail(Detail::HorizontalChoice {
        upper_track,
        lower_track,
    })
}
