//! Measuring of containers that wrap a single item.

use railroad_core::geometry::Extent;

use super::{Detail, Layout, Measure};
use crate::config::Parameters;

pub(super) fn one_or_more(item: &Layout<'_>, separator: &Layout<'_>, params: &Parameters) -> Measure {
    let ar = params.arc_radius();
    let vs = params.vertical_separation();
    let (item, separator) = (item.extent(), separator.extent());

    let width = item.width().max(separator.width()) + 2.0 * ar;
    let down = (2.0 * ar)
        .max(item.down() + vs + separator.up() + separator.height() + separator.down());
    Measure::spaced(Extent::new(width, item.up(), down).with_height(item.height()))
}

pub(super) fn group(item: &Layout<'_>, label: Option<&Layout<'_>>, params: &Parameters) -> Measure {
    let ar = params.arc_radius();
    let vs = params.vertical_separation();
    let label = label.map(Layout::extent).unwrap_or_default();
    let extent = item.extent();

    let width = (extent.width() + item.spacing(params))
        .max(label.width())
        .max(2.0 * ar);
    let box_up = (extent.up() + vs).max(ar);
    let up = box_up + label.total_height();
    let down = (extent.down() + vs).max(ar);

    Measure::spaced(Extent::new(width, up, down).with_height(extent.height()))
        .with_detail(Detail::Group { box_up })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use crate::{
        config::Parameters,
        layout::{Detail, layout},
        node::Node,
    };

    #[test]
    fn test_one_or_more_loops_below() {
        let node = Node::one_or_more(Node::terminal("a"), Some(Node::terminal(",")));
        let extent = layout(&node, &Parameters::default()).extent();
        assert_approx_eq!(f32, extent.width(), 28.0 + 20.0);
        assert_approx_eq!(f32, extent.up(), 11.0);
        assert_approx_eq!(f32, extent.down(), 11.0 + 8.0 + 11.0 + 11.0);
    }

    #[test]
    fn test_one_or_more_without_separator() {
        let node = Node::one_or_more(Node::terminal("a"), None);
        let extent = layout(&node, &Parameters::default()).extent();
        assert_approx_eq!(f32, extent.down(), 20.0);
    }

    #[test]
    fn test_group_with_label() {
        let node = Node::labeled_group(Node::terminal("a"), "g");
        let root = layout(&node, &Parameters::default());
        let extent = root.extent();
        assert_approx_eq!(f32, extent.width(), 48.0);
        assert_eq!(root.detail(), &Detail::Group { box_up: 19.0 });
        assert_approx_eq!(f32, extent.up(), 19.0 + 16.0);
        assert_approx_eq!(f32, extent.down(), 19.0);
    }

    #[test]
    fn test_group_of_skip_keeps_arc_room() {
        let node = Node::group(Node::skip(), None);
        let extent = layout(&node, &Parameters::default()).extent();
        assert_approx_eq!(f32, extent.width(), 20.0);
        assert_approx_eq!(f32, extent.up(), 10.0);
        assert_approx_eq!(f32, extent.down(), 10.0);
    }
}
