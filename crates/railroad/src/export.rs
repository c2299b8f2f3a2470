//! Export backends for laid-out diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! writing a measured diagram to an output format. It is the final stage of
//! the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Node tree (Diagram)
//!     ↓ layout
//! Layout tree (extents, resolved parameters)
//!     ↓ export (this module)
//! Output sink
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`text`]: monospace box-drawing output via [`text::TextExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`RailroadError`]. Failures of the output sink
//! surface as [`RailroadError::RenderTarget`].

pub mod svg;
pub mod text;

use crate::{error::RailroadError, layout::Layout};

/// Abstraction for diagram export backends.
///
/// Implementors convert the [`Layout`] of a diagram's root sequence into a
/// specific output format and write it to their sink.
pub trait Exporter {
    /// Exports a laid-out diagram to the backend's output format.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout of the diagram's root sequence, with start and
    ///   end sentinels as its first and last children.
    ///
    /// # Errors
    ///
    /// Returns [`RailroadError::RenderTarget`] if writing the output fails.
    fn export_diagram(&mut self, layout: &Layout<'_>) -> Result<(), RailroadError>;
}
