//! Bottom-up geometry of a node tree.
//!
//! [`layout`] walks a [`Node`] tree once and returns a parallel tree of
//! [`Layout`] values. Every node's [`Extent`] is computed from its children's
//! extents and written exactly once; both renderers only read it afterwards.
//!
//! # Parameter cascade
//!
//! Each layout carries the [`Parameters`] it was measured with. A node with
//! [`ParameterOverrides`](crate::config::ParameterOverrides) attached merges
//! them over the inherited set, and its descendants inherit the result.
//!
//! # Spacing
//!
//! Text boxes and boxed containers report [`Layout::needs_space`]. A
//! container gives every such child `HS / 2` of extra rail on each side,
//! except on the outer edges of a sequence, where the parent's own spacing
//! takes over.

mod choice;
mod sequence;
mod wrap;

use std::sync::Arc;

use log::trace;

use railroad_core::geometry::Extent;

use crate::{
    config::{DiagramType, Parameters},
    node::{Node, NodeKind},
};

pub(crate) use choice::{MULTI_ENTRY_WIDTH, MULTI_EXIT_WIDTH, MULTI_MIN_REACH};
pub(crate) use sequence::Crossover;

/// Height of the box drawn around terminals, non-terminals and expressions.
pub(crate) const BOX_HALF_HEIGHT: f32 = 11.0;
/// Vertical reach of start, end and arrow glyphs around the rail.
pub(crate) const GLYPH_HALF_HEIGHT: f32 = 10.0;
/// Vertical reach of comment text around the rail.
pub(crate) const COMMENT_HALF_HEIGHT: f32 = 8.0;
/// Width of start, end and arrow glyphs.
pub(crate) const GLYPH_WIDTH: f32 = 20.0;

/// Values derived during measuring that renderers need again.
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    Plain,
    /// Vertical gap between each pair of adjacent branches.
    Choice { separators: Vec<f32> },
    /// Width of the slot every branch is drawn in.
    MultipleChoice { inner_width: f32 },
    /// Distances of the skip rails above and below the entry rail.
    HorizontalChoice { upper_track: f32, lower_track: f32 },
    /// Distance from the entry rail to the top of the dashed box.
    Group { box_up: f32 },
}

/// A node together with its computed geometry.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    node: &'a Node,
    params: Arc<Parameters>,
    extent: Extent,
    needs_space: bool,
    children: Vec<Layout<'a>>,
    detail: Detail,
}

impl<'a> Layout<'a> {
    /// Returns the node this layout was computed for.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Returns the variant data of the node.
    pub fn kind(&self) -> &'a NodeKind {
        self.node.kind()
    }

    /// Returns the parameters in effect for this node.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Returns the node's width and its reach above and below the rails.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Returns `true` if the node asks for extra rail on both sides.
    pub fn needs_space(&self) -> bool {
        self.needs_space
    }

    /// Returns the layouts of the direct children, in [`Node::children`] order.
    pub fn children(&self) -> &[Layout<'a>] {
        &self.children
    }

    /// Returns the kind-specific measurements the renderers reuse.
    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    /// Returns the rail allowance a parent with `params` adds around this node.
    pub fn spacing(&self, params: &Parameters) -> f32 {
        if self.needs_space {
            params.horizontal_separation()
        } else {
            0.0
        }
    }

    /// Returns the style of a start or end sentinel.
    ///
    /// A sentinel without an explicit type follows the `diagram_type` parameter.
    pub fn sentinel_type(&self) -> &DiagramType {
        match self.kind() {
            NodeKind::Start {
                diagram_type: Some(diagram_type),
                ..
            }
            | NodeKind::End {
                diagram_type: Some(diagram_type),
            } => diagram_type,
            _ => self.params.diagram_type(),
        }
    }
}

/// Computes the layout of `node` and its descendants.
///
/// # Examples
///
/// ```
/// # use railroad::{Node, config::Parameters, layout::layout};
/// let node = Node::terminal("foo");
/// let layout = layout(&node, &Parameters::default());
/// assert_eq!(layout.extent().width(), 44.0);
/// assert!(layout.needs_space());
/// ```
pub fn layout<'a>(node: &'a Node, params: &Parameters) -> Layout<'a> {
    compute(node, &Arc::new(params.clone()))
}

fn compute<'a>(node: &'a Node, inherited: &Arc<Parameters>) -> Layout<'a> {
    let params = match node.overrides() {
        Some(overrides) => Arc::new(inherited.merged(overrides)),
        None => Arc::clone(inherited),
    };
    let children: Vec<Layout<'a>> = node
        .children()
        .map(|child| compute(child, &params))
        .collect();

    let measure = match node.kind() {
        NodeKind::Terminal(content) | NodeKind::NonTerminal(content) => Measure::spaced(
            Extent::new(
                content.char_count() as f32 * params.char_width() + 20.0,
                BOX_HALF_HEIGHT,
                BOX_HALF_HEIGHT,
            ),
        ),
        NodeKind::Expression(content) => Measure::spaced(Extent::new(
            content.char_count() as f32 * params.char_width() + 40.0,
            BOX_HALF_HEIGHT,
            BOX_HALF_HEIGHT,
        )),
        NodeKind::Comment(content) => Measure::spaced(Extent::new(
            content.char_count() as f32 * params.comment_char_width() + 10.0,
            COMMENT_HALF_HEIGHT,
            COMMENT_HALF_HEIGHT,
        )),
        NodeKind::Skip => Measure::tight(Extent::default()),
        NodeKind::Start { label, .. } => {
            let width = label.as_ref().map_or(GLYPH_WIDTH, |label| {
                (label.chars().count() as f32 * params.char_width() + 10.0).max(GLYPH_WIDTH)
            });
            Measure::tight(Extent::new(width, GLYPH_HALF_HEIGHT, GLYPH_HALF_HEIGHT))
        }
        NodeKind::End { .. } | NodeKind::Arrow(_) => Measure::tight(Extent::new(
            GLYPH_WIDTH,
            GLYPH_HALF_HEIGHT,
            GLYPH_HALF_HEIGHT,
        )),
        NodeKind::Sequence(_) => sequence::sequence(&children, &params),
        NodeKind::Stack(_) => sequence::stack(&children, &params),
        NodeKind::OptionalSequence(_) => sequence::optional_sequence(&children, &params),
        NodeKind::AlternatingSequence { .. } => {
            sequence::alternating_sequence(&children[0], &children[1], &params)
        }
        NodeKind::Choice { default, .. } => choice::choice(*default, &children, &params),
        NodeKind::MultipleChoice { default, .. } => {
            choice::multiple_choice(*default, &children, &params)
        }
        NodeKind::HorizontalChoice(_) => choice::horizontal_choice(&children, &params),
        NodeKind::OneOrMore { .. } => wrap::one_or_more(&children[0], &children[1], &params),
        NodeKind::Group { .. } => wrap::group(&children[0], children.get(1), &params),
    };

    let extent = measure.extent;
    trace!(
        kind = node.kind().name(),
        width = extent.width(),
        up = extent.up(),
        height = extent.height(),
        down = extent.down();
        "Measured node"
    );

    Layout {
        node,
        params,
        extent,
        needs_space: measure.needs_space,
        children,
        detail: measure.detail,
    }
}

/// Result of measuring one node from its children.
struct Measure {
    extent: Extent,
    needs_space: bool,
    detail: Detail,
}

impl Measure {
    fn spaced(extent: Extent) -> Self {
        Self {
            extent,
            needs_space: true,
            detail: Detail::Plain,
        }
    }

    fn tight(extent: Extent) -> Self {
        Self {
            extent,
            needs_space: false,
            detail: Detail::Plain,
        }
    }

    fn with_detail(mut self, detail: Detail) -> Self {
        self.detail = detail;
        self
    }
}

/// Returns the widest child extent, or zero for no children.
fn max_width(children: &[Layout<'_>]) -> f32 {
    children
        .iter()
        .map(|child| child.extent().width())
        .fold(0.0, f32::max)
}


#[cfg(test)]
pub(crate) mod proptest_tests {
    use proptest::{prelude::*, sample::Index};
    use railroad_core::geometry::Alignment;

    use super::*;
    use crate::{
        config::ParameterOverrides,
        node::{ArrowDirection, ChoiceMode},
    };

    /// Arbitrary node trees of bounded depth covering every node kind.
    pub(crate) fn node_strategy() -> impl Strategy<Value = Node> {
        tree_strategy(false)
    }

    /// Like [`node_strategy`], with random parameter overrides attached to
    /// nodes at every depth.
    pub(crate) fn overridden_node_strategy() -> impl Strategy<Value = Node> {
        tree_strategy(true)
    }

    /// Valid overrides for the geometric parameters.
    pub(crate) fn overrides_strategy() -> impl Strategy<Value = ParameterOverrides> {
        (
            prop::option::of(0.0f32..24.0),
            prop::option::of(0.0f32..24.0),
            prop::option::of(0.0f32..40.0),
            prop::option::of(1.0f32..12.0),
            prop::option::of(1.0f32..12.0),
            prop::option::of(prop_oneof![
                Just(Alignment::Left),
                Just(Alignment::Center),
                Just(Alignment::Right),
            ]),
        )
            .prop_map(|(ar, vs, hs, char_width, comment_char_width, alignment)| {
                let mut overrides = ParameterOverrides::default();
                if let Some(ar) = ar {
                    overrides = overrides.with_arc_radius(ar);
                }
                if let Some(vs) = vs {
                    overrides = overrides.with_vertical_separation(vs);
                }
                if let Some(hs) = hs {
                    overrides = overrides.with_horizontal_separation(hs);
                }
                if let Some(char_width) = char_width {
                    overrides = overrides.with_char_width(char_width);
                }
                if let Some(width) = comment_char_width {
                    overrides = overrides.with_comment_char_width(width);
                }
                if let Some(alignment) = alignment {
                    overrides = overrides.with_internal_alignment(alignment);
                }
                overrides
            })
    }

    fn maybe_overridden(strategy: BoxedStrategy<Node>, overridden: bool) -> BoxedStrategy<Node> {
        if !overridden {
            return strategy;
        }
        (strategy, prop::option::of(overrides_strategy()))
            .prop_map(|(node, overrides)| match overrides {
                Some(overrides) => node.with_overrides(overrides),
                None => node,
            })
            .boxed()
    }

    fn tree_strategy(overridden: bool) -> BoxedStrategy<Node> {
        let leaf = prop_oneof![
            "[a-z]{0,6}".prop_map(|text| Node::terminal(text)),
            "[a-z]{0,6}".prop_map(|text| Node::non_terminal(text)),
            "[a-z ]{0,6}".prop_map(|text| Node::comment(text)),
            "[a-z]{1,4}".prop_map(|text| Node::expression(text)),
            Just(Node::skip()),
            Just(Node::arrow(ArrowDirection::Left)),
        ];
        let leaf = maybe_overridden(leaf.boxed(), overridden);
        leaf.prop_recursive(3, 24, 4, move |inner| {
            let items = prop::collection::vec(inner.clone(), 1..4);
            let container = prop_oneof![
                items.clone().prop_map(|items| Node::sequence(items).unwrap()),
                items.clone().prop_map(|items| Node::stack(items).unwrap()),
                (items.clone(), any::<Index>()).prop_map(|(items, default)| {
                    let default = default.index(items.len());
                    Node::choice(default, items).unwrap()
                }),
                (items.clone(), any::<Index>(), any::<bool>()).prop_map(
                    |(items, default, all)| {
                        let default = default.index(items.len());
                        let mode = if all { ChoiceMode::All } else { ChoiceMode::Any };
                        Node::multiple_choice(default, mode, items).unwrap()
                    }
                ),
                items.clone().prop_map(|items| Node::horizontal_choice(items).unwrap()),
                items.prop_map(|items| Node::optional_sequence(items).unwrap()),
                (inner.clone(), inner.clone()).prop_map(|(first, second)| {
                    Node::alternating_sequence(vec![first, second]).unwrap()
                }),
                (inner.clone(), prop::option::of(inner.clone()))
                    .prop_map(|(item, separator)| Node::one_or_more(item, separator)),
                (inner, prop::option::of("[a-z]{1,5}")).prop_map(|(item, label)| match label {
                    Some(label) => Node::labeled_group(item, label),
                    None => Node::group(item, None),
                }),
            ];
            maybe_overridden(container.boxed(), overridden)
        })
        .boxed()
    }

    fn check_well_formed(layout: &Layout<'_>) -> Result<(), TestCaseError> {
        prop_assert!(
            layout.extent().is_well_formed(),
            "{} has extent {:?}",
            layout.kind().name(),
            layout.extent()
        );
        for child in layout.children() {
            check_well_formed(child)?;
        }
        Ok(())
    }

    /// Every extent in the tree is finite and non-negative.
    fn check_extents_well_formed(node: &Node) -> Result<(), TestCaseError> {
        check_well_formed(&layout(node, &Parameters::default()))
    }

    /// Measuring the same tree twice gives the same extents.
    fn check_layout_idempotent(node: &Node) -> Result<(), TestCaseError> {
        let first = layout(node, &Parameters::default());
        let second = layout(node, &Parameters::default());
        prop_assert_eq!(first.extent(), second.extent());
        Ok(())
    }

    /// Choices keep one separator per adjacent pair, never below `VS`.
    fn check_choice_separators(layout: &Layout<'_>) -> Result<(), TestCaseError> {
        if let Detail::Choice { separators } = layout.detail() {
            prop_assert_eq!(separators.len(), layout.children().len() - 1);
            let vs = layout.params().vertical_separation();
            prop_assert!(separators.iter().all(|separator| *separator >= vs));
        }
        for child in layout.children() {
            check_choice_separators(child)?;
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_extents_well_formed(node in node_strategy()) {
            check_extents_well_formed(&node)?;
        }

        #[test]
        fn prop_extents_well_formed_with_overrides(node in overridden_node_strategy()) {
            check_extents_well_formed(&node)?;
        }

        #[test]
        fn prop_layout_idempotent_with_overrides(node in overridden_node_strategy()) {
            check_layout_idempotent(&node)?;
        }

        #[test]
        fn prop_choice_separators_with_overrides(node in overridden_node_strategy()) {
            check_choice_separators(&layout(&node, &Parameters::default()))?;
        }

        #[test]
        fn prop_layout_idempotent(node in node_strategy()) {
            check_layout_idempotent(&node)?;
        }

        #[test]
        fn prop_choice_separators(node in node_strategy()) {
            check_choice_separators(&layout(&node, &Parameters::default()))?;
        }
    }
}
