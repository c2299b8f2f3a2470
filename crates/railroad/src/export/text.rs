//! Monospace text export.
//!
//! Every node is turned into a [`TextBlock`], a rectangular character grid
//! with an entry row and an exit row, and containers compose their
//! children's blocks. Blocks are built from the [`Layout`] tree so that the
//! parameters in effect for each node (alignment, glyph set) are the same
//! ones the SVG back end sees.
//!
//! The text back end does not use the numeric extents: its geometry is in
//! character cells and is derived from the child blocks alone.

mod choice;
mod leaf;
mod sequence;
mod wrap;

use std::io::Write;

use log::{debug, info};

use railroad_core::draw::{Glyphs, TextBlock};

use super::Exporter;
use crate::{error::RailroadError, layout::Layout, node::NodeKind};

/// Text exporter writing one diagram per call, terminated by a newline.
///
/// # Examples
///
/// ```
/// # use railroad::{Diagram, Node, export::{Exporter, text::TextExporter}};
/// let diagram = Diagram::new(vec![Node::terminal("foo")]);
/// let mut exporter = TextExporter::new(Vec::new());
/// exporter.export_diagram(&diagram.layout()).unwrap();
/// let output = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(output.contains("│ foo │"));
/// ```
#[derive(Debug)]
pub struct TextExporter<W> {
    sink: W,
}

impl<W: Write> TextExporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Returns the sink, consuming the exporter.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Renders the layout of a diagram's root sequence to a string.
    ///
    /// Rows are joined with `\n` and the result ends with a newline. When
    /// the `escape_html` parameter is set, `&`, `<`, `>` and `"` are
    /// replaced by their HTML entities.
    pub fn render_string(&self, layout: &Layout<'_>) -> String {
        let block = render_root(layout);
        debug!(columns = block.width(), rows = block.height(); "Composed text diagram");

        let mut output = block.into_lines().join("\n");
        output.push('\n');
        if layout.params().escape_html() {
            output = escape_html(&output);
        }
        output
    }
}

impl<W: Write> Exporter for TextExporter<W> {
    fn export_diagram(&mut self, layout: &Layout<'_>) -> Result<(), RailroadError> {
        info!(items = layout.children().len(); "Exporting diagram to text");
        let output = self.render_string(layout);
        self.sink.write_all(output.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}

/// Joins the top-level items of a diagram.
///
/// Unlike a nested sequence, the first item is not preceded by a rail
/// segment, so the start sentinel sits at column zero.
fn render_root(layout: &Layout<'_>) -> TextBlock {
    let glyphs = glyphs(layout);
    let separator = glyphs.separator.to_string();
    let mut items = layout.children().iter();
    let Some(first) = items.next() else {
        return TextBlock::empty();
    };
    items.fold(render_node(first), |diagram, item| {
        diagram.append_right(&spaced(item), &separator)
    })
}

/// Builds the block of `layout` and its descendants.
pub(crate) fn render_node(layout: &Layout<'_>) -> TextBlock {
    match layout.kind() {
        NodeKind::Terminal(content) => leaf::terminal(layout, content),
        NodeKind::NonTerminal(content) => leaf::non_terminal(layout, content),
        NodeKind::Expression(content) => leaf::expression(layout, content),
        NodeKind::Comment(content) => leaf::comment(content),
        NodeKind::Skip => leaf::skip(layout),
        NodeKind::Arrow(direction) => leaf::arrow(layout, *direction),
        NodeKind::Start { label, .. } => leaf::start(layout, label.as_deref()),
        NodeKind::End { .. } => leaf::end(layout),
        NodeKind::Sequence(_) => sequence::sequence(layout),
        NodeKind::Stack(_) => sequence::stack(layout),
        NodeKind::OptionalSequence(_) => sequence::optional_sequence(layout),
        NodeKind::AlternatingSequence { .. } => sequence::alternating_sequence(layout),
        NodeKind::Choice { default, .. } => choice::choice(layout, *default),
        NodeKind::MultipleChoice { default, mode, .. } => {
            choice::multiple_choice(layout, *default, *mode)
        }
        NodeKind::HorizontalChoice(_) => choice::horizontal_choice(layout),
        NodeKind::OneOrMore { .. } => wrap::one_or_more(layout),
        NodeKind::Group { .. } => wrap::group(layout),
    }
}

/// Returns the glyph table in effect for `layout`.
fn glyphs(layout: &Layout<'_>) -> &'static Glyphs {
    layout.params().formatting().glyphs()
}

/// Builds the block of `layout`, with one cell of rail on each side if the
/// node asks for spacing.
fn spaced(layout: &Layout<'_>) -> TextBlock {
    let block = render_node(layout);
    if layout.needs_space() {
        block.expand(1, 1, 0, 0, glyphs(layout).line)
    } else {
        block
    }
}

/// Returns `count` copies of `part` as one row.
fn row(part: &str, count: usize) -> String {
    part.repeat(count)
}

/// Returns `count` rows each holding `part`.
fn rows(part: &str, count: usize) -> Vec<String> {
    vec![part.to_string(); count]
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Diagram, Node,
        config::{DiagramType, Formatting, ParameterOverrides},
    };

    fn render(diagram: &Diagram) -> String {
        TextExporter::new(Vec::new()).render_string(&diagram.layout())
    }

    #[test]
    fn test_sentinels_share_a_row() {
        let output = render(&Diagram::new(vec![Node::terminal("foo")]));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "├┼────│ foo │────┼┤");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_ascii_formatting() {
        let diagram = Diagram::new(vec![Node::terminal("foo")])
            .with_overrides(ParameterOverrides::default().with_formatting(Formatting::Ascii));
        let output = render(&diagram);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "|+----| foo |----+|");
    }

    #[test]
    fn test_html_escaping() {
        let diagram = Diagram::new(vec![Node::terminal("<a & \"b\">")]);
        let output = render(&diagram);
        assert!(output.contains("&lt;a &amp; &quot;b&quot;&gt;"), "{output}");

        let raw = diagram
            .clone()
            .with_overrides(ParameterOverrides::default().with_escape_html(false));
        assert!(render(&raw).contains("<a & \"b\">"));
    }

    #[test]
    fn test_sql_sentinels() {
        let diagram = Diagram::new(vec![Node::skip()])
            .with_overrides(ParameterOverrides::default().with_diagram_type(DiagramType::Sql));
        let output = render(&diagram);
        assert_eq!(output, "●─────►\n");
    }

    #[test]
    fn test_export_writes_to_sink() {
        let diagram = Diagram::new(vec![]);
        let mut exporter = TextExporter::new(Vec::new());
        exporter.export_diagram(&diagram.layout()).unwrap();
        let output = String::from_utf8(exporter.into_inner()).unwrap();
        assert_eq!(output, "├┼───┼┤\n");
    }

    #[test]
    fn test_escape_html_helper() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
