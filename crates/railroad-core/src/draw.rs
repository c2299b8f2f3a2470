//! Drawing primitives for both output back ends.
//!
//! - [`RailPath`] builds the `d` attribute of an SVG `<path>` out of rail
//!   segments, quarter arcs and eighth arcs.
//! - [`TextBlock`] is a rectangular grid of characters with an entry row and
//!   an exit row, composed into larger blocks by the text renderer.
//! - [`Glyphs`] holds the box-drawing characters a [`TextBlock`] is drawn with.

mod glyphs;
mod path;
mod text_block;

pub use glyphs::{FrameGlyphs, Glyphs};
pub use path::{Heading, Octant, RailPath, Rotation};
pub use text_block::{FrameKind, Framed, Ports, TextBlock};
