//! SVG export.
//!
//! Every node is drawn as an SVG `<g>` element holding its rails and glyphs.
//! Drawing is driven entirely by the [`Layout`] tree: a node is placed with
//! its entry point at `origin` inside a slot `width` wide, and any slack
//! between the slot and its own width is filled with straight rail according
//! to the `internal_alignment` parameter.
//!
//! The canvas is `width + 2 * padding` wide and `up + height + down + 2 *
//! padding` tall. A standalone document additionally embeds a stylesheet and
//! declares the SVG and XLink namespaces so it can be opened on its own.

mod choice;
mod leaf;
mod sequence;
mod wrap;

use std::io::Write;

use log::{debug, info};
use svg::{self, node::element as svg_element};

use railroad_core::{draw::RailPath, geometry::Point};

use super::Exporter;
use crate::{
    config::Parameters,
    error::RailroadError,
    layout::{Detail, Layout},
    node::NodeKind,
};

/// Stylesheet embedded in standalone documents unless another one is set.
pub const DEFAULT_STYLESHEET: &str = include_str!("svg/default.css");

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Builder for an [`Svg`] exporter.
///
/// Values not set on the builder are taken from the parameters of the
/// diagram being exported.
///
/// # Examples
///
/// ```
/// # use railroad::{Diagram, Node, export::{Exporter, svg::SvgBuilder}};
/// let diagram = Diagram::new(vec![Node::terminal("foo")]);
/// let mut exporter = SvgBuilder::new(Vec::new()).with_standalone(true).build();
/// exporter.export_diagram(&diagram.layout()).unwrap();
/// let output = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(output.contains("<style>"));
/// ```
#[derive(Debug)]
pub struct SvgBuilder<W> {
    sink: W,
    standalone: Option<bool>,
    stylesheet: Option<String>,
}

impl<W: Write> SvgBuilder<W> {
    /// Creates a builder that writes to `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            standalone: None,
            stylesheet: None,
        }
    }

    /// Forces standalone output on or off.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = Some(standalone);
        self
    }

    /// Sets the stylesheet embedded in standalone output.
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = Some(stylesheet.into());
        self
    }

    pub fn build(self) -> Svg<W> {
        Svg {
            sink: self.sink,
            standalone: self.standalone,
            stylesheet: self.stylesheet,
        }
    }
}

/// SVG exporter writing one document per exported diagram.
#[derive(Debug)]
pub struct Svg<W> {
    sink: W,
    standalone: Option<bool>,
    stylesheet: Option<String>,
}

impl<W: Write> Svg<W> {
    /// Returns the sink, consuming the exporter.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Builds the SVG document for the layout of a diagram's root sequence.
    pub fn render_document(&self, layout: &Layout<'_>) -> svg::Document {
        let params = layout.params();
        let extent = layout.extent();
        let padding = params.padding();
        let width = extent.width() + 2.0 * padding;
        let height = extent.total_height() + 2.0 * padding;
        debug!(width, height; "Computed canvas size");

        let mut content = svg_element::Group::new();
        if params.stroke_odd_pixel_length() {
            content = content.set("transform", "translate(.5 .5)");
        }
        let content = render_items(
            content,
            layout.children(),
            Point::new(padding, padding + extent.up()),
            params,
        );

        let mut doc = svg::Document::new()
            .set("class", params.diagram_class())
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"));

        if self.standalone.unwrap_or(params.standalone()) {
            let stylesheet = self
                .stylesheet
                .as_deref()
                .or(params.stylesheet())
                .unwrap_or(DEFAULT_STYLESHEET);
            doc = doc
                .set("xmlns", SVG_NAMESPACE)
                .set("xmlns:xlink", XLINK_NAMESPACE)
                .add(svg_element::Style::new(stylesheet));
        }

        doc.add(content)
    }
}

impl<W: Write> Exporter for Svg<W> {
    fn export_diagram(&mut self, layout: &Layout<'_>) -> Result<(), RailroadError> {
        info!(items = layout.children().len(); "Exporting diagram to SVG");
        let doc = self.render_document(layout);
        write!(self.sink, "{doc}")?;
        self.sink.flush()?;
        Ok(())
    }
}

/// Where a top-level item sits on the root rail.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    /// Start of the item's slot, before any leading rail.
    pub(crate) start: Point,
    /// Entry point of the item itself.
    pub(crate) entry: Point,
    /// Exit point of the item itself.
    pub(crate) exit: Point,
    /// End of the slot, after any trailing rail.
    pub(crate) end: Point,
}

/// Places the top-level items one after another from `origin`, with half a
/// horizontal separation of rail on both sides of every spaced item.
pub(crate) fn place_items(items: &[Layout<'_>], origin: Point, params: &Parameters) -> Vec<Placement> {
    let half = params.horizontal_separation() / 2.0;
    let mut cursor = origin;
    items
        .iter()
        .map(|item| {
            let rail = if item.needs_space() { half } else { 0.0 };
            let start = cursor;
            let entry = start.shift_x(rail);
            let exit = entry
                .shift_x(item.extent().width())
                .shift_y(item.extent().height());
            let end = exit.shift_x(rail);
            cursor = end;
            Placement {
                start,
                entry,
                exit,
                end,
            }
        })
        .collect()
}

/// Draws the top-level items of a diagram.
fn render_items(
    mut group: svg_element::Group,
    items: &[Layout<'_>],
    origin: Point,
    params: &Parameters,
) -> svg_element::Group {
    let half = params.horizontal_separation() / 2.0;
    for (item, placement) in items.iter().zip(place_items(items, origin, params)) {
        if item.needs_space() {
            group = group.add(rail(placement.start, params).h(half).into_element());
        }
        group = group.add(render_node(item, placement.entry, item.extent().width()));
        if item.needs_space() {
            group = group.add(rail(placement.exit, params).h(half).into_element());
        }
    }
    group
}

/// Draws `layout` with its entry point at `origin` in a slot `width` wide.
pub(crate) fn render_node(layout: &Layout<'_>, origin: Point, width: f32) -> svg_element::Group {
    match (layout.kind(), layout.detail()) {
        (NodeKind::Terminal(content), _) => leaf::terminal(layout, content, origin, width),
        (NodeKind::NonTerminal(content), _) => leaf::non_terminal(layout, content, origin, width),
        (NodeKind::Expression(content), _) => leaf::expression(layout, content, origin, width),
        (NodeKind::Comment(content), _) => leaf::comment(layout, content, origin, width),
        (NodeKind::Skip, _) => leaf::skip(layout, origin, width),
        (NodeKind::Arrow(direction), _) => leaf::arrow(layout, *direction, origin, width),
        (NodeKind::Start { label, .. }, _) => leaf::start(layout, label.as_deref(), origin),
        (NodeKind::End { .. }, _) => leaf::end(layout, origin),
        (NodeKind::Sequence(_), _) => sequence::sequence(layout, origin, width),
        (NodeKind::Stack(_), _) => sequence::stack(layout, origin, width),
        (NodeKind::OptionalSequence(_), _) => sequence::optional_sequence(layout, origin, width),
        (NodeKind::AlternatingSequence { .. }, _) => {
            sequence::alternating_sequence(layout, origin, width)
        }
        (NodeKind::Choice { default, .. }, Detail::Choice { separators }) => {
            choice::choice(layout, *default, separators, origin, width)
        }
        (
            NodeKind::MultipleChoice { default, mode, .. },
            Detail::MultipleChoice { inner_width },
        ) => choice::multiple_choice(layout, *default, *mode, *inner_width, origin, width),
        (
            NodeKind::HorizontalChoice(_),
            Detail::HorizontalChoice {
                upper_track,
                lower_track,
            },
        ) => choice::horizontal_choice(layout, *upper_track, *lower_track, origin, width),
        (NodeKind::OneOrMore { .. }, _) => wrap::one_or_more(layout, origin, width),
        (NodeKind::Group { .. }, Detail::Group { box_up }) => {
            wrap::group(layout, *box_up, origin, width)
        }
        // Layout always pairs these kinds with their detail.
        (NodeKind::Choice { .. }, _)
        | (NodeKind::MultipleChoice { .. }, _)
        | (NodeKind::HorizontalChoice(_), _)
        | (NodeKind::Group { .. }, _) => node_group(layout),
    }
}

/// Starts a rail with the arc radius in effect for `params`.
fn rail(start: Point, params: &Parameters) -> RailPath {
    RailPath::new(start, params.arc_radius())
}

/// Creates the `<g>` element for a node, annotated with its extent in
/// debug mode.
fn node_group(layout: &Layout<'_>) -> svg_element::Group {
    let group = svg_element::Group::new();
    if !layout.params().debug() {
        return group;
    }
    let extent = layout.extent();
    group.set(
        "data-x",
        format!(
            "{} w:{} h:{}/{}/{}",
            layout.kind().name(),
            extent.width(),
            extent.up(),
            extent.height(),
            extent.down()
        ),
    )
}

/// Adds the straight rails that fill the slack around a node in its slot and
/// returns the x coordinate where the node itself starts.
fn fill_gaps(
    group: svg_element::Group,
    layout: &Layout<'_>,
    origin: Point,
    width: f32,
) -> (svg_element::Group, f32) {
    let params = layout.params();
    let extent = layout.extent();
    let (left_gap, right_gap) = params.internal_alignment().gaps(width, extent.width());
    let exit = Point::new(
        origin.x() + left_gap + extent.width(),
        origin.y() + extent.height(),
    );
    let group = group
        .add(rail(origin, params).h(left_gap).into_element())
        .add(rail(exit, params).h(right_gap).into_element());
    (group, origin.x() + left_gap)
}
