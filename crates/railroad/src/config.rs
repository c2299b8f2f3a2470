//! Parameters that control diagram geometry and output.
//!
//! [`Parameters`] is the fully resolved set every node is laid out with.
//! [`ParameterOverrides`] carries the subset a caller wants to change; it can
//! be attached to a [`Diagram`](crate::Diagram) or to any single
//! [`Node`](crate::Node), and it cascades to that node's descendants.
//!
//! Both types implement [`serde::Deserialize`] and reject unknown keys, so a
//! parameter file with a misspelled option fails to load instead of being
//! silently ignored.
//!
//! # Example
//!
//! ```
//! # use railroad::config::{ParameterOverrides, Parameters};
//! let params = Parameters::from_toml_str("AR = 12\nhorizontal_separation = 16").unwrap();
//! assert_eq!(params.arc_radius(), 12.0);
//!
//! let narrower = params.merged(&ParameterOverrides::default().with_arc_radius(4.0));
//! assert_eq!(narrower.arc_radius(), 4.0);
//! assert_eq!(narrower.horizontal_separation(), 16.0);
//! ```

use serde::Deserialize;

use railroad_core::{draw::Glyphs, geometry::Alignment};

use crate::error::RailroadError;

/// Style of the start and end sentinels of a diagram.
///
/// Any name other than `simple`, `complex` or `sql` is kept as
/// [`DiagramType::Custom`] and drawn like [`DiagramType::Simple`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DiagramType {
    #[default]
    Simple,
    Complex,
    Sql,
    Custom(String),
}

impl DiagramType {
    /// Returns the name this type is spelled with in parameter files.
    pub fn name(&self) -> &str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
            Self::Sql => "sql",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for DiagramType {
    fn from(name: &str) -> Self {
        match name {
            "simple" => Self::Simple,
            "complex" => Self::Complex,
            "sql" => Self::Sql,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for DiagramType {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

/// Character set used by the text renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatting {
    #[default]
    Unicode,
    Ascii,
}

impl Formatting {
    /// Returns the glyph table for this character set.
    pub fn glyphs(self) -> &'static Glyphs {
        match self {
            Self::Unicode => &Glyphs::UNICODE,
            Self::Ascii => &Glyphs::ASCII,
        }
    }
}

/// Fully resolved parameter set.
///
/// Every field has a default; deserializing an empty document yields
/// [`Parameters::default`]. The geometric constants accept the short aliases
/// `AR`, `VS` and `HS`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    char_width: f32,
    comment_char_width: f32,
    #[serde(alias = "AR")]
    arc_radius: f32,
    #[serde(alias = "VS")]
    vertical_separation: f32,
    #[serde(alias = "HS")]
    horizontal_separation: f32,
    diagram_class: String,
    #[serde(alias = "type")]
    diagram_type: DiagramType,
    internal_alignment: Alignment,
    stroke_odd_pixel_length: bool,
    padding: f32,
    standalone: bool,
    stylesheet: Option<String>,
    formatting: Formatting,
    escape_html: bool,
    debug: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            comment_char_width: 7.0,
            arc_radius: 10.0,
            vertical_separation: 8.0,
            horizontal_separation: 20.0,
            diagram_class: "railroad-diagram".to_string(),
            diagram_type: DiagramType::Simple,
            internal_alignment: Alignment::Center,
            stroke_odd_pixel_length: true,
            padding: 20.0,
            standalone: false,
            stylesheet: None,
            formatting: Formatting::Unicode,
            escape_html: true,
            debug: false,
        }
    }
}

impl Parameters {
    /// Parses a TOML document into a validated parameter set.
    ///
    /// Keys that are absent keep their default value.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Configuration`] if the document is not valid
    /// TOML, names an unknown key, or holds an out-of-range value.
    pub fn from_toml_str(source: &str) -> Result<Self, RailroadError> {
        let params: Self = toml::from_str(source)
            .map_err(|err| RailroadError::Configuration(err.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Checks every numeric parameter is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Configuration`] naming the first offending key.
    pub fn validate(&self) -> Result<(), RailroadError> {
        let numeric = [
            ("char_width", self.char_width),
            ("comment_char_width", self.comment_char_width),
            ("arc_radius", self.arc_radius),
            ("vertical_separation", self.vertical_separation),
            ("horizontal_separation", self.horizontal_separation),
            ("padding", self.padding),
        ];
        for (key, value) in numeric {
            if !value.is_finite() || value < 0.0 {
                return Err(RailroadError::Configuration(format!(
                    "`{key}` must be a finite, non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Returns a copy with every value present in `overrides` replaced.
    pub fn merged(&self, overrides: &ParameterOverrides) -> Self {
        let mut merged = self.clone();
        let o = overrides.clone();
        if let Some(v) = o.char_width {
            merged.char_width = v;
        }
        if let Some(v) = o.comment_char_width {
            merged.comment_char_width = v;
        }
        if let Some(v) = o.arc_radius {
            merged.arc_radius = v;
        }
        if let Some(v) = o.vertical_separation {
            merged.vertical_separation = v;
        }
        if let Some(v) = o.horizontal_separation {
            merged.horizontal_separation = v;
        }
        if let Some(v) = o.diagram_class {
            merged.diagram_class = v;
        }
        if let Some(v) = o.diagram_type {
            merged.diagram_type = v;
        }
        if let Some(v) = o.internal_alignment {
            merged.internal_alignment = v;
        }
        if let Some(v) = o.stroke_odd_pixel_length {
            merged.stroke_odd_pixel_length = v;
        }
        if let Some(v) = o.padding {
            merged.padding = v;
        }
        if let Some(v) = o.standalone {
            merged.standalone = v;
        }
        if let Some(v) = o.stylesheet {
            merged.stylesheet = Some(v);
        }
        if let Some(v) = o.formatting {
            merged.formatting = v;
        }
        if let Some(v) = o.escape_html {
            merged.escape_html = v;
        }
        if let Some(v) = o.debug {
            merged.debug = v;
        }
        merged
    }

    /// Returns the width of one monospace character.
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    /// Returns the width of one comment character.
    pub fn comment_char_width(&self) -> f32 {
        self.comment_char_width
    }

    /// Returns the rail arc radius (`AR`).
    pub fn arc_radius(&self) -> f32 {
        self.arc_radius
    }

    /// Returns the minimum vertical gap (`VS`).
    pub fn vertical_separation(&self) -> f32 {
        self.vertical_separation
    }

    /// Returns the rail allowance around spaced items (`HS`).
    ///
    /// Each spaced item gets half of it on either side.
    pub fn horizontal_separation(&self) -> f32 {
        self.horizontal_separation
    }

    /// Returns the class put on the root `<svg>` element.
    pub fn diagram_class(&self) -> &str {
        &self.diagram_class
    }

    /// Returns the start and end sentinel style.
    pub fn diagram_type(&self) -> &DiagramType {
        &self.diagram_type
    }

    /// Returns how narrower nodes sit in wider slots.
    pub fn internal_alignment(&self) -> Alignment {
        self.internal_alignment
    }

    /// Returns `true` if the canvas is shifted by half a pixel.
    pub fn stroke_odd_pixel_length(&self) -> bool {
        self.stroke_odd_pixel_length
    }

    /// Returns the canvas padding on every side.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns `true` if SVG output embeds its stylesheet.
    pub fn standalone(&self) -> bool {
        self.standalone
    }

    /// Returns the stylesheet replacing the built-in one, if any.
    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    /// Returns the character set of the text renderer.
    pub fn formatting(&self) -> Formatting {
        self.formatting
    }

    /// Returns `true` if text output is HTML-escaped.
    pub fn escape_html(&self) -> bool {
        self.escape_html
    }

    /// Returns `true` if SVG groups carry `data-x` geometry annotations.
    pub fn debug(&self) -> bool {
        self.debug
    }
}

/// A partial parameter set applied on top of inherited parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterOverrides {
    char_width: Option<f32>,
    comment_char_width: Option<f32>,
    #[serde(alias = "AR")]
    arc_radius: Option<f32>,
    #[serde(alias = "VS")]
    vertical_separation: Option<f32>,
    #[serde(alias = "HS")]
    horizontal_separation: Option<f32>,
    diagram_class: Option<String>,
    #[serde(alias = "type")]
    diagram_type: Option<DiagramType>,
    internal_alignment: Option<Alignment>,
    stroke_odd_pixel_length: Option<bool>,
    padding: Option<f32>,
    standalone: Option<bool>,
    stylesheet: Option<String>,
    formatting: Option<Formatting>,
    escape_html: Option<bool>,
    debug: Option<bool>,
}

impl ParameterOverrides {
    /// Parses a TOML document holding only the keys to override.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Configuration`] if the document is not valid
    /// TOML or names an unknown key.
    pub fn from_toml_str(source: &str) -> Result<Self, RailroadError> {
        toml::from_str(source).map_err(|err| RailroadError::Configuration(err.to_string()))
    }

    /// Returns `true` if no value is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_char_width(mut self, value: f32) -> Self {
        self.char_width = Some(value);
        self
    }

    pub fn with_comment_char_width(mut self, value: f32) -> Self {
        self.comment_char_width = Some(value);
        self
    }

    pub fn with_arc_radius(mut self, value: f32) -> Self {
        self.arc_radius = Some(value);
        self
    }

    pub fn with_vertical_separation(mut self, value: f32) -> Self {
        self.vertical_separation = Some(value);
        self
    }

    pub fn with_horizontal_separation(mut self, value: f32) -> Self {
        self.horizontal_separation = Some(value);
        self
    }

    pub fn with_diagram_class(mut self, value: impl Into<String>) -> Self {
        self.diagram_class = Some(value.into());
        self
    }

    pub fn with_diagram_type(mut self, value: DiagramType) -> Self {
        self.diagram_type = Some(value);
        self
    }

    pub fn with_internal_alignment(mut self, value: Alignment) -> Self {
        self.internal_alignment = Some(value);
        self
    }

    pub fn with_stroke_odd_pixel_length(mut self, value: bool) -> Self {
        self.stroke_odd_pixel_length = Some(value);
        self
    }

    pub fn with_padding(mut self, value: f32) -> Self {
        self.padding = Some(value);
        self
    }

    pub fn with_standalone(mut self, value: bool) -> Self {
        self.standalone = Some(value);
        self
    }

    pub fn with_stylesheet(mut self, value: impl Into<String>) -> Self {
        self.stylesheet = Some(value.into());
        self
    }

    pub fn with_formatting(mut self, value: Formatting) -> Self {
        self.formatting = Some(value);
        self
    }

    pub fn with_escape_html(mut self, value: bool) -> Self {
        self.escape_html = Some(value);
        self
    }

    pub fn with_debug(mut self, value: bool) -> Self {
        self.debug = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let params = Parameters::default();
        assert_approx_eq!(f32, params.char_width(), 8.0);
        assert_approx_eq!(f32, params.comment_char_width(), 7.0);
        assert_approx_eq!(f32, params.arc_radius(), 10.0);
        assert_approx_eq!(f32, params.vertical_separation(), 8.0);
        assert_approx_eq!(f32, params.horizontal_separation(), 20.0);
        assert_eq!(params.diagram_class(), "railroad-diagram");
        assert_eq!(params.diagram_type(), &DiagramType::Simple);
        assert!(params.stroke_odd_pixel_length());
        assert!(params.escape_html());
        assert!(!params.debug());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_from_toml_with_aliases() {
        let params = Parameters::from_toml_str(
            r#"
                AR = 6
                VS = 4.5
                HS = 10
                type = "sql"
                internal_alignment = "left"
                formatting = "ascii"
            "#,
        )
        .unwrap();
        assert_approx_eq!(f32, params.arc_radius(), 6.0);
        assert_approx_eq!(f32, params.vertical_separation(), 4.5);
        assert_approx_eq!(f32, params.horizontal_separation(), 10.0);
        assert_eq!(params.diagram_type(), &DiagramType::Sql);
        assert_eq!(params.internal_alignment(), Alignment::Left);
        assert_eq!(params.formatting(), Formatting::Ascii);
        // untouched keys keep their defaults
        assert_approx_eq!(f32, params.char_width(), 8.0);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Parameters::from_toml_str("arc_radios = 3").unwrap_err();
        assert!(matches!(err, RailroadError::Configuration(_)));

        let err = ParameterOverrides::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, RailroadError::Configuration(_)));
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let err = Parameters::from_toml_str("VS = -1").unwrap_err();
        match err {
            RailroadError::Configuration(msg) => assert!(msg.contains("vertical_separation")),
            other => panic!("unexpected error: {other:?}"),
        }

        let params =
            Parameters::default().merged(&ParameterOverrides::default().with_arc_radius(f32::NAN));
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_merge_keeps_unset_values() {
        let base = Parameters::default();
        let overrides = ParameterOverrides::default()
            .with_horizontal_separation(10.0)
            .with_diagram_class("grammar");
        let merged = base.merged(&overrides);
        assert_approx_eq!(f32, merged.horizontal_separation(), 10.0);
        assert_eq!(merged.diagram_class(), "grammar");
        assert_approx_eq!(f32, merged.arc_radius(), base.arc_radius());
        assert!(ParameterOverrides::default().is_empty());
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_custom_diagram_type() {
        let kind = DiagramType::from("railway");
        assert_eq!(kind, DiagramType::Custom("railway".to_string()));
        assert_eq!(kind.name(), "railway");
        assert_eq!(DiagramType::from("complex").name(), "complex");
    }
}
