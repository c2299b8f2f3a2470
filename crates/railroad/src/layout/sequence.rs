//! Measuring of the sequential containers.

use std::f32::consts::SQRT_2;

use railroad_core::geometry::Extent;

use super::{Layout, Measure};
use crate::config::Parameters;

pub(super) fn sequence(children: &[Layout<'_>], params: &Parameters) -> Measure {
    let half = params.horizontal_separation() / 2.0;
    let mut width = 0.0_f32;
    let mut up = 0.0_f32;
    let mut height = 0.0_f32;
    let mut down = 0.0_f32;
    for child in children {
        let extent = child.extent();
        width += extent.width() + child.spacing(params);
        up = up.max(extent.up() - height);
        height += extent.height();
        down = (down - extent.height()).max(extent.down());
    }
    if children.first().is_some_and(Layout::needs_space) {
        width -= half;
    }
    if children.last().is_some_and(Layout::needs_space) {
        width -= half;
    }
    Measure::spaced(Extent::new(width.max(0.0), up, down).with_height(height))
}

pub(super) fn stack(children: &[Layout<'_>], params: &Parameters) -> Measure {
    let ar = params.arc_radius();
    let vs = params.vertical_separation();

    let mut width = children
        .iter()
        .map(|child| child.extent().width() + child.spacing(params))
        .fold(0.0, f32::max);
    if children.len() > 1 {
        width += 2.0 * ar;
    }

    let mut height = 0.0_f32;
    let last = children.len().saturating_sub(1);
    for (i, child) in children.iter().enumerate() {
        let extent = child.extent();
        height += extent.height();
        if i > 0 {
            height += (2.0 * ar).max(extent.up() + vs);
        }
        if i < last {
            height += (2.0 * ar).max(extent.down() + vs);
        }
    }

    let up = children.first().map_or(0.0, |child| child.extent().up());
    let down = children.last().map_or(0.0, |child| child.extent().down());
    Measure::spaced(Extent::new(width, up, down).with_height(height))
}

pub(super) fn optional_sequence(children: &[Layout<'_>], params: &Parameters) -> Measure {
    let ar = params.arc_radius();
    let vs = params.vertical_separation();
    let half = params.horizontal_separation() / 2.0;

    let height: f32 = children.iter().map(|child| child.extent().height()).sum();
    let mut down = children.first().map_or(0.0, |child| child.extent().down());
    let mut up = 0.0_f32;
    let mut width = 0.0_f32;
    let mut height_so_far = 0.0_f32;

    for (i, child) in children.iter().enumerate() {
        let extent = child.extent();
        up = up.max((2.0 * ar).max(extent.up() + vs) - height_so_far);
        height_so_far += extent.height();
        if i > 0 {
            down = (height + down).max(height_so_far + (2.0 * ar).max(extent.down() + vs))
                - height;
        }
        let item_width = extent.width() + if child.needs_space() { half } else { 0.0 };
        width += if i == 0 {
            ar + item_width.max(ar)
        } else {
            2.0 * ar + item_width.max(ar) + ar
        };
    }

    Measure::tight(Extent::new(width, up, down.max(0.0)).with_height(height))
}

/// Geometry of the two crossing rails of an alternating sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Crossover {
    pub arc_x: f32,
    pub arc_y: f32,
    pub cross_x: f32,
    pub cross_y: f32,
}

impl Crossover {
    pub fn new(params: &Parameters) -> Self {
        let ar = params.arc_radius();
        let arc_x = 2.0 * ar / SQRT_2;
        let arc_y = (1.0 - 1.0 / SQRT_2) * 2.0 * ar;
        let cross_y = ar.max(params.vertical_separation());
        let cross_x = cross_y - arc_y + arc_x;
        Self {
            arc_x,
            arc_y,
            cross_x,
            cross_y,
        }
    }
}

pub(super) fn alternating_sequence(
    first: &Layout<'_>,
    second: &Layout<'_>,
    params: &Parameters,
) -> Measure {
    let ar = params.arc_radius();
    let vs = params.vertical_separation();
    let crossover = Crossover::new(params);
    let half_cross = crossover.cross_y / 2.0;

    let (first_extent, second_extent) = (first.extent(), second.extent());
    let first_out = (2.0 * ar)
        .max(half_cross + 2.0 * ar)
        .max(half_cross + vs + first_extent.down());
    let up = first_out + first_extent.height() + first_extent.up();

    let second_in = (2.0 * ar)
        .max(half_cross + 2.0 * ar)
        .max(half_cross + vs + second_extent.up());
    let down = second_in + second_extent.height() + second_extent.down();

    let width = 4.0 * ar
        + (first_extent.width() + first.spacing(params))
            .max(crossover.cross_x)
            .max(second_extent.width() + second.spacing(params));
    Measure::tight(Extent::new(width, up, down))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use crate::{
        config::{ParameterOverrides, Parameters},
        layout::layout,
        node::Node,
    };

    fn params() -> Parameters {
        Parameters::default()
    }

    #[test]
    fn test_sequence_spacing_between_items() {
        let params = params().merged(&ParameterOverrides::default().with_horizontal_separation(10.0));
        let node = Node::sequence(vec![Node::skip(), Node::terminal("")]).unwrap();
        // A skip has no spacing; the terminal loses its outer half.
        let extent = layout(&node, &params).extent();
        assert_approx_eq!(f32, extent.width(), 20.0 + 5.0);
    }

    #[test]
    fn test_sequence_width_sums_children() {
        let params = params().merged(
            &ParameterOverrides::default()
                .with_horizontal_separation(10.0)
                .with_comment_char_width(10.0),
        );
        // Comments of width 10, 20 and 30.
        let node = Node::sequence(vec![
            Node::comment(""),
            Node::comment("a"),
            Node::comment("ab"),
        ])
        .unwrap();
        let extent = layout(&node, &params).extent();
        assert_approx_eq!(f32, extent.width(), 80.0);
        assert_approx_eq!(f32, extent.up(), 8.0);
        assert_approx_eq!(f32, extent.down(), 8.0);
    }

    #[test]
    fn test_stack_adds_turn_arounds() {
        let node = Node::stack(vec![Node::terminal("ab"), Node::terminal("abcd")]).unwrap();
        let extent = layout(&node, &params()).extent();
        // Widest child 52 plus spacing 20 plus two arcs.
        assert_approx_eq!(f32, extent.width(), 52.0 + 20.0 + 20.0);
        assert_approx_eq!(f32, extent.up(), 11.0);
        assert_approx_eq!(f32, extent.down(), 11.0);
        // Leaving the first row and entering the second: 2 * max(2AR, 11 + VS).
        assert_approx_eq!(f32, extent.height(), 40.0);
    }

    #[test]
    fn test_single_stack_is_a_row() {
        let node = Node::stack(vec![Node::terminal("ab")]).unwrap();
        let extent = layout(&node, &params()).extent();
        assert_approx_eq!(f32, extent.width(), 36.0 + 20.0);
        assert_approx_eq!(f32, extent.height(), 0.0);
    }

    #[test]
    fn test_optional_sequence_extent() {
        let node = Node::optional_sequence(vec![Node::terminal("a"), Node::terminal("b")]).unwrap();
        let extent = layout(&node, &params()).extent();
        // Each item is 28 wide plus a half gap of 10.
        assert_approx_eq!(f32, extent.width(), (10.0 + 38.0) + (20.0 + 38.0 + 10.0));
        assert_approx_eq!(f32, extent.up(), 20.0);
        assert_approx_eq!(f32, extent.down(), 20.0);
        assert_approx_eq!(f32, extent.height(), 0.0);
    }

    #[test]
    fn test_alternating_sequence_extent() {
        let node = Node::alternating_sequence(vec![Node::terminal("a"), Node::terminal("b")])
            .unwrap();
        let root = layout(&node, &params());
        let extent = root.extent();
        assert!(!root.needs_space());
        // max(2AR, 5 + 2AR, 5 + 8 + 11) = 25, plus the item's own reach.
        assert_approx_eq!(f32, extent.up(), 25.0 + 11.0);
        assert_approx_eq!(f32, extent.down(), 25.0 + 11.0);
        assert_approx_eq!(f32, extent.width(), 40.0 + 48.0);
    }
}
