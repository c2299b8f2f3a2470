//! Text blocks for leaf nodes.
//!
//! Links, titles and CSS classes of [`TextContent`] have no text rendition
//! and are dropped.

use railroad_core::draw::{FrameKind, Framed, Ports, TextBlock};

use super::glyphs;
use crate::{
    config::DiagramType,
    layout::Layout,
    node::{ArrowDirection, TextContent},
};

pub(super) fn terminal(layout: &Layout<'_>, content: &TextContent) -> TextBlock {
    framed(layout, content, FrameKind::RoundRect)
}

pub(super) fn non_terminal(layout: &Layout<'_>, content: &TextContent) -> TextBlock {
    framed(layout, content, FrameKind::Rect)
}

pub(super) fn expression(layout: &Layout<'_>, content: &TextContent) -> TextBlock {
    framed(layout, content, FrameKind::AngleRect)
}

fn framed(layout: &Layout<'_>, content: &TextContent, kind: FrameKind) -> TextBlock {
    TextBlock::framed(Framed::Text(content.text()), kind, false, glyphs(layout))
}

pub(super) fn comment(content: &TextContent) -> TextBlock {
    TextBlock::line(content.text())
}

pub(super) fn skip(layout: &Layout<'_>) -> TextBlock {
    TextBlock::line(glyphs(layout).line.to_string())
}

pub(super) fn arrow(layout: &Layout<'_>, direction: ArrowDirection) -> TextBlock {
    let glyphs = glyphs(layout);
    let head = match direction {
        ArrowDirection::Right => glyphs.arrow_right,
        ArrowDirection::Left => glyphs.arrow_left,
        ArrowDirection::Undirected => glyphs.line,
    };
    TextBlock::line(format!("{0}{head}{0}", glyphs.line))
}

/// Draws the entry sentinel, with its label on the row above.
///
/// A label wider than the sentinel extends the rail to the label's width.
pub(super) fn start(layout: &Layout<'_>, label: Option<&str>) -> TextBlock {
    let glyphs = glyphs(layout);
    let mut rail = match layout.sentinel_type() {
        DiagramType::Simple | DiagramType::Custom(_) => {
            format!("{}{}{}", glyphs.tee_right, glyphs.cross, glyphs.line)
        }
        DiagramType::Sql => format!("{}{}", glyphs.ball, glyphs.line),
        DiagramType::Complex => format!("{}{}", glyphs.tee_right, glyphs.line),
    };
    let Some(label) = label else {
        return TextBlock::line(rail);
    };
    let shortfall = label
        .chars()
        .count()
        .saturating_sub(rail.chars().count());
    rail.extend(std::iter::repeat_n(glyphs.line, shortfall));
    TextBlock::line(label).append_below(&TextBlock::line(rail), &[], Ports::Lower)
}

pub(super) fn end(layout: &Layout<'_>) -> TextBlock {
    let glyphs = glyphs(layout);
    let rail = match layout.sentinel_type() {
        DiagramType::Simple | DiagramType::Custom(_) => {
            format!("{}{}{}", glyphs.line, glyphs.cross, glyphs.tee_left)
        }
        DiagramType::Sql => format!("{}{}", glyphs.line, glyphs.arrow_right),
        DiagramType::Complex => format!("{}{}", glyphs.line, glyphs.tee_left),
    };
    TextBlock::line(rail)
}
