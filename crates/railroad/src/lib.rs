//! Railroad - layout and rendering of railroad (syntax) diagrams.
//!
//! A diagram is a tree of [`Node`]s: boxed terminals and non-terminals,
//! joined by sequences, choices, loops and groups. The tree is measured in a
//! single bottom-up pass into a [`layout::Layout`], which both back ends
//! consume: [`export::svg`] draws rails and boxes as SVG, [`export::text`]
//! draws them with box-drawing characters.
//!
//! # Examples
//!
//! ```
//! use railroad::{Diagram, Node};
//!
//! let diagram = Diagram::new(vec![
//!     Node::terminal("SELECT"),
//!     Node::one_or_more(Node::non_terminal("column"), Some(Node::terminal(","))),
//! ]);
//! let svg = diagram.to_svg_string().unwrap();
//! assert!(svg.contains("SELECT"));
//! ```

pub mod config;
pub mod export;
pub mod layout;

mod diagram;
mod error;
mod node;

pub use railroad_core::{draw, geometry};

pub use diagram::{Diagram, DiagramBuilder};
pub use error::RailroadError;
pub use node::{ArrowDirection, ChoiceMode, Node, NodeKind, TextContent};
