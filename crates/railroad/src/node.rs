//! The diagram element tree.
//!
//! A railroad diagram is a tree of [`Node`]s. Leaves carry text or draw a
//! fixed glyph; containers combine their children in sequence, in parallel
//! or in a loop. Nodes are immutable once built, and every constructor that
//! could produce an inconsistent tree validates its input and returns a
//! [`RailroadError::Structural`] instead.
//!
//! # Overview
//!
//! | Constructor | Draws |
//! |---|---|
//! | [`Node::terminal`] | a literal token in a rounded box |
//! | [`Node::non_terminal`] | a reference to another rule in a square box |
//! | [`Node::expression`] | an expression in a hexagonal box |
//! | [`Node::comment`] | free text on the rail |
//! | [`Node::skip`] | an empty stretch of rail |
//! | [`Node::arrow`] | a direction marker on the rail |
//! | [`Node::start`] / [`Node::end`] | the diagram's entry and exit sentinels |
//! | [`Node::sequence`] | children one after another |
//! | [`Node::stack`] | a sequence wrapped onto several rows |
//! | [`Node::choice`] | exactly one of the children |
//! | [`Node::multiple_choice`] | one or more (or all) children in any order |
//! | [`Node::horizontal_choice`] | a choice laid out left to right |
//! | [`Node::optional_sequence`] | a sequence where every child may be skipped, but not all |
//! | [`Node::alternating_sequence`] | two children alternating |
//! | [`Node::one_or_more`] | a child repeated, with an optional separator on the way back |
//! | [`Node::group`] | a child inside a dashed box with an optional label |
//!
//! [`Node::optional`] and [`Node::zero_or_more`] are expansions onto the
//! nodes above and do not add new kinds.
//!
//! # Example
//!
//! ```
//! # use railroad::Node;
//! let rule = Node::sequence(vec![
//!     Node::terminal("SELECT"),
//!     Node::one_or_more(Node::non_terminal("column"), Some(Node::terminal(","))),
//!     Node::optional(Node::non_terminal("where-clause"), false),
//! ])
//! .unwrap();
//! assert_eq!(rule.children().count(), 3);
//! ```

use crate::{
    config::{DiagramType, ParameterOverrides},
    error::RailroadError,
};

/// Text shown by a leaf node, with optional link, tooltip and CSS class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextContent {
    text: String,
    href: Option<String>,
    title: Option<String>,
    class: Option<String>,
}

impl TextContent {
    /// Creates content showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Makes the text a hyperlink to `href`.
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Adds a tooltip.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds an extra CSS class to the node's group.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Returns the length of the text in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Direction drawn by an [`Node::arrow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    #[default]
    Right,
    Undirected,
}

impl From<&str> for ArrowDirection {
    fn from(direction: &str) -> Self {
        match direction {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Undirected,
        }
    }
}

/// How many branches of a [`Node::multiple_choice`] are taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChoiceMode {
    /// One or more branches, each at most once.
    #[default]
    Any,
    /// Every branch exactly once.
    All,
}

/// The variant data of a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Terminal(TextContent),
    NonTerminal(TextContent),
    Comment(TextContent),
    Expression(TextContent),
    Skip,
    Arrow(ArrowDirection),
    Start {
        diagram_type: Option<DiagramType>,
        label: Option<String>,
    },
    End {
        diagram_type: Option<DiagramType>,
    },
    Sequence(Vec<Node>),
    Stack(Vec<Node>),
    Choice {
        default: usize,
        items: Vec<Node>,
    },
    MultipleChoice {
        default: usize,
        mode: ChoiceMode,
        items: Vec<Node>,
    },
    HorizontalChoice(Vec<Node>),
    OptionalSequence(Vec<Node>),
    AlternatingSequence {
        first: Box<Node>,
        second: Box<Node>,
    },
    OneOrMore {
        item: Box<Node>,
        separator: Box<Node>,
    },
    Group {
        item: Box<Node>,
        label: Option<Box<Node>>,
    },
}

impl NodeKind {
    /// Returns the name of the variant, as used in debug annotations.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Terminal(_) => "Terminal",
            Self::NonTerminal(_) => "NonTerminal",
            Self::Comment(_) => "Comment",
            Self::Expression(_) => "Expression",
            Self::Skip => "Skip",
            Self::Arrow(_) => "Arrow",
            Self::Start { .. } => "Start",
            Self::End { .. } => "End",
            Self::Sequence(_) => "Sequence",
            Self::Stack(_) => "Stack",
            Self::Choice { .. } => "Choice",
            Self::MultipleChoice { .. } => "MultipleChoice",
            Self::HorizontalChoice(_) => "HorizontalChoice",
            Self::OptionalSequence(_) => "OptionalSequence",
            Self::AlternatingSequence { .. } => "AlternatingSequence",
            Self::OneOrMore { .. } => "OneOrMore",
            Self::Group { .. } => "Group",
        }
    }
}

/// A diagram element.
///
/// Build nodes through the constructors; the variant data can be inspected
/// with [`Node::kind`] but not modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    overrides: Option<ParameterOverrides>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            overrides: None,
        }
    }

    pub fn terminal(content: impl Into<TextContent>) -> Self {
        Self::new(NodeKind::Terminal(content.into()))
    }

    pub fn non_terminal(content: impl Into<TextContent>) -> Self {
        Self::new(NodeKind::NonTerminal(content.into()))
    }

    pub fn comment(content: impl Into<TextContent>) -> Self {
        Self::new(NodeKind::Comment(content.into()))
    }

    pub fn expression(content: impl Into<TextContent>) -> Self {
        Self::new(NodeKind::Expression(content.into()))
    }

    pub fn skip() -> Self {
        Self::new(NodeKind::Skip)
    }

    pub fn arrow(direction: ArrowDirection) -> Self {
        Self::new(NodeKind::Arrow(direction))
    }

    /// Creates an entry sentinel.
    ///
    /// Without an explicit type the sentinel follows the `diagram_type`
    /// parameter in effect where it is laid out.
    pub fn start(diagram_type: Option<DiagramType>, label: Option<String>) -> Self {
        Self::new(NodeKind::Start {
            diagram_type,
            label,
        })
    }

    /// Creates an exit sentinel.
    pub fn end(diagram_type: Option<DiagramType>) -> Self {
        Self::new(NodeKind::End { diagram_type })
    }

    /// Creates a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Structural`] if `items` is empty.
    pub fn sequence(items: Vec<Node>) -> Result<Self, RailroadError> {
        require_items("Sequence", &items)?;
        Ok(Self::new(NodeKind::Sequence(items)))
    }

    /// Creates a sequence wrapped so each child sits on its own row.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Structural`] if `items` is empty.
    pub fn stack(items: Vec<Node>) -> Result<Self, RailroadError> {
        require_items("Stack", &items)?;
        Ok(Self::new(NodeKind::Stack(items)))
    }

    /// Creates a choice whose `default` branch is the straight-through rail.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Structural`] if `items` is empty or `default`
    /// is not an index into it.
    pub fn choice(default: usize, items: Vec<Node>) -> Result<Self, RailroadError> {
        require_items("Choice", &items)?;
        require_default("Choice", default, &items)?;
        Ok(Self::new(NodeKind::Choice { default, items }))
    }

    /// Creates a choice where several branches may be taken.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Structural`] if `items` is empty or `default`
    /// is not an index into it.
    pub fn multiple_choice(
        default: usize,
        mode: ChoiceMode,
        items: Vec<Node>,
    ) -> Result<Self, RailroadError> {
        require_items("MultipleChoice", &items)?;
        require_default("MultipleChoice", default, &items)?;
        Ok(Self::new(NodeKind::MultipleChoice {
            default,
            mode,
            items,
        }))
    }

    /// Creates a choice laid out horizontally.
    ///
    /// A single child yields a plain sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Structural`] if `items` is empty.
    pub fn horizontal_choice(items: Vec<Node>) -> Result<Self, RailroadError> {
        require_items("HorizontalChoice", &items)?;
        if items.len() == 1 {
            return Self::sequence(items);
        }
        Ok(Self::new(NodeKind::HorizontalChoice(items)))
    }

    /// Creates a sequence in which any child may be skipped, but not all.
    ///
    /// A single child yields a plain sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Structural`] if `items` is empty.
    pub fn optional_sequence(items: Vec<Node>) -> Result<Self, RailroadError> {
        require_items("OptionalSequence", &items)?;
        if items.len() == 1 {
            return Self::sequence(items);
        }
        Ok(Self::new(NodeKind::OptionalSequence(items)))
    }

    /// Creates a pair of children that may follow each other any number of times.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::Structural`] unless `items` holds exactly two nodes.
    pub fn alternating_sequence(items: Vec<Node>) -> Result<Self, RailroadError> {
        let count = items.len();
        let mut items = items.into_iter();
        match (items.next(), items.next(), items.next()) {
            (Some(first), Some(second), None) => Ok(Self::new(NodeKind::AlternatingSequence {
                first: Box::new(first),
                second: Box::new(second),
            })),
            _ => Err(RailroadError::Structural(format!(
                "AlternatingSequence takes exactly two children, got {count}"
            ))),
        }
    }

    /// Creates a loop over `item`, passing through `separator` on the way back.
    ///
    /// A missing separator is drawn as bare rail.
    pub fn one_or_more(item: Node, separator: Option<Node>) -> Self {
        Self::new(NodeKind::OneOrMore {
            item: Box::new(item),
            separator: Box::new(separator.unwrap_or_else(Self::skip)),
        })
    }

    /// Wraps `item` in a dashed box, with `label` drawn above it.
    pub fn group(item: Node, label: Option<Node>) -> Self {
        Self::new(NodeKind::Group {
            item: Box::new(item),
            label: label.map(Box::new),
        })
    }

    /// Wraps `item` in a dashed box labeled with a comment.
    pub fn labeled_group(item: Node, label: impl Into<TextContent>) -> Self {
        Self::group(item, Some(Self::comment(label)))
    }

    /// A choice between `item` and skipping it.
    ///
    /// When `skip` is `true` the skipping branch is the straight-through rail.
    pub fn optional(item: Node, skip: bool) -> Self {
        Self::new(NodeKind::Choice {
            default: if skip { 0 } else { 1 },
            items: vec![Self::skip(), item],
        })
    }

    /// An optional loop over `item`.
    pub fn zero_or_more(item: Node, separator: Option<Node>, skip: bool) -> Self {
        Self::optional(Self::one_or_more(item, separator), skip)
    }

    /// Attaches parameter overrides that apply to this node and its descendants.
    pub fn with_overrides(mut self, overrides: ParameterOverrides) -> Self {
        self.overrides = (!overrides.is_empty()).then_some(overrides);
        self
    }

    /// Returns the variant data.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the overrides attached to this node, if any.
    pub fn overrides(&self) -> Option<&ParameterOverrides> {
        self.overrides.as_ref()
    }

    pub fn is_start(&self) -> bool {
        matches!(self.kind, NodeKind::Start { .. })
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, NodeKind::End { .. })
    }

    /// Iterates over the direct children in layout order.
    ///
    /// A group's label comes after its item.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let children: Vec<&Node> = match &self.kind {
            NodeKind::Sequence(items)
            | NodeKind::Stack(items)
            | NodeKind::HorizontalChoice(items)
            | NodeKind::OptionalSequence(items)
            | NodeKind::Choice { items, .. }
            | NodeKind::MultipleChoice { items, .. } => items.iter().collect(),
            NodeKind::AlternatingSequence { first, second } => vec![first.as_ref(), second.as_ref()],
            NodeKind::OneOrMore { item, separator } => vec![item.as_ref(), separator.as_ref()],
            NodeKind::Group { item, label } => {
                std::iter::once(item.as_ref()).chain(label.as_deref()).collect()
            }
            NodeKind::Terminal(_)
            | NodeKind::NonTerminal(_)
            | NodeKind::Comment(_)
            | NodeKind::Expression(_)
            | NodeKind::Skip
            | NodeKind::Arrow(_)
            | NodeKind::Start { .. }
            | NodeKind::End { .. } => Vec::new(),
        };
        children.into_iter()
    }
}

fn require_items(kind: &str, items: &[Node]) -> Result<(), RailroadError> {
    if items.is_empty() {
        return Err(RailroadError::Structural(format!(
            "{kind} needs at least one child"
        )));
    }
    Ok(())
}

fn require_default(kind: &str, default: usize, items: &[Node]) -> Result<(), RailroadError> {
    if default >= items.len() {
        return Err(RailroadError::Structural(format!(
            "{kind} default index {default} is out of range for {} children",
            items.len()
        )));
    }
    Ok(())
}
