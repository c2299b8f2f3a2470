//! Railroad Core Types and Definitions
//!
//! This crate provides the drawing primitives shared by the railroad diagram
//! engine. It knows nothing about node kinds; it only deals with numbers,
//! rails and characters. It includes:
//!
//! - **Geometry**: Points, node extents, canvas insets and slot alignment ([`geometry`] module)
//! - **Draw**: Rail path building for SVG and character grids for text output ([`draw`] module)

pub mod draw;
pub mod geometry;
