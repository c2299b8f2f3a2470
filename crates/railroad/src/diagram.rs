//! The diagram root.
//!
//! A [`Diagram`] owns the top-level items together with the parameters the
//! whole tree is laid out with. Construction wraps the items between a
//! [`Start`](NodeKind::Start) and an [`End`](NodeKind::End) sentinel so every
//! diagram has a visible entry and exit, even an empty one.

use std::io::Write;

use log::{debug, info};

use crate::{
    config::{ParameterOverrides, Parameters},
    error::RailroadError,
    export::{Exporter, svg::SvgBuilder, text::TextExporter},
    layout::{Layout, layout},
    node::{Node, NodeKind},
};

/// A complete railroad diagram, ready to be rendered.
///
/// # Examples
///
/// ```
/// # use railroad::{Diagram, Node};
/// let diagram = Diagram::new(vec![Node::terminal("SELECT"), Node::non_terminal("columns")]);
/// let svg = diagram.to_svg_string().unwrap();
/// assert!(svg.starts_with("<svg"));
/// let text = diagram.to_text_string().unwrap();
/// assert!(text.contains("│ SELECT │"));
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    root: Node,
    params: Parameters,
    overrides: ParameterOverrides,
}

impl Diagram {
    /// Creates a diagram from its top-level items with default parameters.
    ///
    /// A start sentinel is prepended unless the first item is one, and an
    /// end sentinel is appended unless the last item is one.
    pub fn new(items: Vec<Node>) -> Self {
        let mut items = items;
        if !items.first().is_some_and(Node::is_start) {
            items.insert(0, Node::start(None, None));
        }
        if !items.last().is_some_and(Node::is_end) {
            items.push(Node::end(None));
        }
        Self {
            root: Node::new(NodeKind::Sequence(items)),
            params: Parameters::default(),
            overrides: ParameterOverrides::default(),
        }
    }

    /// Starts building a diagram item by item.
    pub fn builder() -> DiagramBuilder {
        DiagramBuilder::default()
    }

    /// Replaces the base parameters the overrides are merged onto.
    pub fn with_parameters(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }

    /// Sets the caller overrides applied on top of the base parameters.
    pub fn with_overrides(mut self, overrides: ParameterOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Returns the top-level items, sentinels included.
    pub fn items(&self) -> &[Node] {
        match self.root.kind() {
            NodeKind::Sequence(items) => items,
            _ => &[],
        }
    }

    /// Returns the parameters in effect at the root of the diagram.
    pub fn parameters(&self) -> Parameters {
        self.params.merged(&self.overrides)
    }

    /// Lays out the diagram's root sequence.
    pub fn layout(&self) -> Layout<'_> {
        layout(&self.root, &self.parameters())
    }

    /// Writes the diagram as an SVG document.
    ///
    /// The stylesheet is embedded only when the `standalone` parameter is set.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Configuration`] if the parameters are invalid
    /// and [`RailroadError::RenderTarget`] if writing to `sink` fails.
    pub fn render_svg<W: Write>(&self, sink: W) -> Result<(), RailroadError> {
        self.export(&mut SvgBuilder::new(sink).build())
    }

    /// Writes the diagram as a self-contained SVG document with the
    /// stylesheet and namespace declarations embedded.
    ///
    /// # Errors
    ///
    /// Same as [`Diagram::render_svg`].
    pub fn render_standalone_svg<W: Write>(&self, sink: W) -> Result<(), RailroadError> {
        self.export(&mut SvgBuilder::new(sink).with_standalone(true).build())
    }

    /// Writes the diagram as monospace text.
    ///
    /// # Errors
    ///
    /// Same as [`Diagram::render_svg`].
    pub fn render_text<W: Write>(&self, sink: W) -> Result<(), RailroadError> {
        self.export(&mut TextExporter::new(sink))
    }

    /// Renders the diagram as an SVG document string.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Configuration`] if the parameters are invalid.
    pub fn to_svg_string(&self) -> Result<String, RailroadError> {
        let layout = self.validated_layout()?;
        let exporter = SvgBuilder::new(std::io::sink()).build();
        Ok(exporter.render_document(&layout).to_string())
    }

    /// Renders the diagram as text.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Configuration`] if the parameters are invalid.
    pub fn to_text_string(&self) -> Result<String, RailroadError> {
        let layout = self.validated_layout()?;
        Ok(TextExporter::new(std::io::sink()).render_string(&layout))
    }

    fn export(&self, exporter: &mut impl Exporter) -> Result<(), RailroadError> {
        let layout = self.validated_layout()?;
        exporter.export_diagram(&layout)
    }

    fn validated_layout(&self) -> Result<Layout<'_>, RailroadError> {
        let params = self.parameters();
        validate_tree(&self.root, &params)?;

        info!(items = self.items().len(); "Rendering diagram");
        let layout = layout(&self.root, &params);
        let extent = layout.extent();
        debug!(
            width = extent.width(),
            up = extent.up(),
            height = extent.height(),
            down = extent.down();
            "Laid out diagram"
        );
        Ok(layout)
    }
}

/// Builder for a [`Diagram`].
///
/// Unlike [`Diagram::new`], [`DiagramBuilder::build`] checks the parameters
/// up front.
///
/// # Examples
///
/// ```
/// # use railroad::{Diagram, Node, config::ParameterOverrides};
/// let diagram = Diagram::builder()
///     .item(Node::terminal("a"))
///     .item(Node::terminal("b"))
///     .overrides(ParameterOverrides::default().with_padding(0.0))
///     .build()
///     .unwrap();
/// assert_eq!(diagram.items().len(), 4);
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    items: Vec<Node>,
    params: Option<Parameters>,
    overrides: ParameterOverrides,
}

impl DiagramBuilder {
    /// Appends one top-level item.
    pub fn item(mut self, item: Node) -> Self {
        self.items.push(item);
        self
    }

    /// Appends several top-level items.
    pub fn items(mut self, items: impl IntoIterator<Item = Node>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn parameters(mut self, params: Parameters) -> Self {
        self.params = Some(params);
        self
    }

    pub fn overrides(mut self, overrides: ParameterOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Builds the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Configuration`] if the merged parameters are
    /// invalid.
    pub fn build(self) -> Result<Diagram, RailroadError> {
        let diagram = Diagram::new(self.items)
            .with_parameters(self.params.unwrap_or_default())
            .with_overrides(self.overrides);
        validate_tree(&diagram.root, &diagram.parameters())?;
        Ok(diagram)
    }
}

/// Validates the parameters in effect at every node of the tree, including
/// each set merged from a node's own overrides.
fn validate_tree(node: &Node, inherited: &Parameters) -> Result<(), RailroadError> {
    let merged;
    let params = match node.overrides() {
        Some(overrides) => {
            merged = inherited.merged(overrides);
            merged.validate()?;
            &merged
        }
        None => inherited,
    };
    node.children()
        .try_for_each(|child| validate_tree(child, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(diagram: &Diagram) -> Vec<&'static str> {
        diagram.items().iter().map(|item| item.kind().name()).collect()
    }

    #[test]
    fn test_sentinels_are_inserted() {
        let diagram = Diagram::new(vec![Node::terminal("a")]);
        assert_eq!(kinds(&diagram), ["Start", "Terminal", "End"]);
    }

    #[test]
    fn test_empty_diagram_keeps_sentinels() {
        let diagram = Diagram::new(Vec::new());
        assert_eq!(kinds(&diagram), ["Start", "End"]);
    }

    #[test]
    fn test_existing_sentinels_are_kept() {
        let diagram = Diagram::new(vec![
            Node::start(None, Some("rule".to_string())),
            Node::terminal("a"),
            Node::end(None),
        ]);
        assert_eq!(kinds(&diagram), ["Start", "Terminal", "End"]);
        assert!(matches!(
            diagram.items()[0].kind(),
            NodeKind::Start { label: Some(_), .. }
        ));
    }

    #[test]
    fn test_lone_end_gets_its_own_start() {
        let diagram = Diagram::new(vec![Node::end(None)]);
        assert_eq!(kinds(&diagram), ["Start", "End"]);
    }

    #[test]
    fn test_overrides_merge_onto_parameters() {
        let diagram = Diagram::new(Vec::new())
            .with_parameters(Parameters::default())
            .with_overrides(ParameterOverrides::default().with_arc_radius(4.0));
        assert_eq!(diagram.parameters().arc_radius(), 4.0);
        assert_eq!(diagram.parameters().padding(), 20.0);
    }

    #[test]
    fn test_invalid_parameters_are_reported() {
        let diagram = Diagram::new(vec![Node::terminal("a")])
            .with_overrides(ParameterOverrides::default().with_arc_radius(-1.0));
        assert!(matches!(
            diagram.to_svg_string(),
            Err(RailroadError::Configuration(_))
        ));
        assert!(matches!(
            diagram.render_text(Vec::new()),
            Err(RailroadError::Configuration(_))
        ));

        let built = Diagram::builder()
            .overrides(ParameterOverrides::default().with_padding(f32::NAN))
            .build();
        assert!(matches!(built, Err(RailroadError::Configuration(_))));
    }

    #[test]
    fn test_node_overrides_are_validated() {
        let choice = Node::choice(0, vec![Node::terminal("a"), Node::terminal("b")])
            .unwrap()
            .with_overrides(ParameterOverrides::default().with_arc_radius(-1.0));
        let diagram = Diagram::new(vec![choice.clone()]);
        assert!(matches!(
            diagram.to_svg_string(),
            Err(RailroadError::Configuration(_))
        ));
        assert!(matches!(
            diagram.to_text_string(),
            Err(RailroadError::Configuration(_))
        ));

        let nested = Node::sequence(vec![Node::terminal("x"), choice]).unwrap();
        let built = Diagram::builder().item(nested).build();
        assert!(matches!(built, Err(RailroadError::Configuration(_))));
    }

    #[test]
    fn test_valid_node_overrides_render() {
        let node = Node::terminal("a")
            .with_overrides(ParameterOverrides::default().with_horizontal_separation(4.0));
        let diagram = Diagram::new(vec![node]);
        assert!(diagram.to_svg_string().is_ok());
    }

    #[test]
    fn test_string_and_sink_output_agree() {
        let diagram = Diagram::new(vec![Node::terminal("a")]);
        let mut sink = Vec::new();
        diagram.render_text(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), diagram.to_text_string().unwrap());

        let mut sink = Vec::new();
        diagram.render_svg(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), diagram.to_svg_string().unwrap());
    }
}
