//! Geometric primitives for railroad diagram layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Extent`] - The four numbers every laid-out node reports to its parent
//! - [`Alignment`] - How a node sits inside a slot wider than itself
//!
//! # Coordinate System
//!
//! Coordinates follow SVG: the origin is the top-left corner, X grows to the
//! right and Y grows downward. A node is always addressed by the point where
//! its entry rail starts:
//!
//! ```text
//!            ┌──────────────────┐  ▲
//!            │                  │  │ up
//!   entry ──►┼─────────┐        │  ▼
//!            │         │        │  ▲ height
//!            │         └────────┼──► exit
//!            │                  │  │ down
//!            └──────────────────┘  ▼
//!            ◄────── width ─────►
//! ```

use serde::Deserialize;

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use railroad_core::geometry::Point;
/// let origin = Point::new(10.0, 20.0);
/// let moved = origin.shift_x(5.0).shift_y(-5.0);
/// assert_eq!(moved.x(), 15.0);
/// assert_eq!(moved.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Moves the point horizontally by `dx`.
    pub fn shift_x(self, dx: f32) -> Self {
        self.with_x(self.x + dx)
    }

    /// Moves the point vertically by `dy`.
    pub fn shift_y(self, dy: f32) -> Self {
        self.with_y(self.y + dy)
    }
}

/// The geometry a laid-out node reports to its parent.
///
/// - `width`: horizontal distance between the entry point and the exit point.
/// - `up`: how far the node projects above its entry rail.
/// - `height`: vertical distance from the entry rail down to the exit rail.
///   Zero for every node whose exit leaves on the entry row.
/// - `down`: how far the node projects below its exit rail.
///
/// All four values are non-negative for every node the engine builds.
///
/// # Examples
///
/// ```
/// # use railroad_core::geometry::Extent;
/// let extent = Extent::new(40.0, 11.0, 11.0);
/// assert_eq!(extent.height(), 0.0);
/// assert_eq!(extent.total_height(), 22.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    width: f32,
    up: f32,
    height: f32,
    down: f32,
}

impl Extent {
    /// Creates an extent whose exit is on the same row as its entry.
    pub fn new(width: f32, up: f32, down: f32) -> Self {
        Self {
            width,
            up,
            height: 0.0,
            down,
        }
    }

    /// Returns the horizontal extent.
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the distance from the top edge to the entry rail.
    pub fn up(self) -> f32 {
        self.up
    }

    /// Returns the vertical offset of the exit rail below the entry rail.
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the distance from the exit rail to the bottom edge.
    pub fn down(self) -> f32 {
        self.down
    }

    /// Creates a new extent with the specified exit offset
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Returns the full vertical space the node occupies.
    pub fn total_height(self) -> f32 {
        self.up + self.height + self.down
    }

    /// Returns `true` if every component is finite and non-negative.
    pub fn is_well_formed(self) -> bool {
        [self.width, self.up, self.height, self.down]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Placement of a node inside a slot that is wider than the node.
///
/// The surplus is turned into plain rail on the left and right of the node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
    #[default]
    Center,
}

impl Alignment {
    /// Splits the surplus of `outer` over `inner` into left and right gaps.
    ///
    /// # Examples
    ///
    /// ```
    /// # use railroad_core::geometry::Alignment;
    /// assert_eq!(Alignment::Center.gaps(100.0, 60.0), (20.0, 20.0));
    /// assert_eq!(Alignment::Left.gaps(100.0, 60.0), (0.0, 40.0));
    /// assert_eq!(Alignment::Right.gaps(100.0, 60.0), (40.0, 0.0));
    /// ```
    pub fn gaps(self, outer: f32, inner: f32) -> (f32, f32) {
        let diff = outer - inner;
        match self {
            Self::Left => (0.0, diff),
            Self::Right => (diff, 0.0),
            Self::Center => (diff / 2.0, diff / 2.0),
        }
    }

    /// Character-cell version of [`Alignment::gaps`].
    ///
    /// Centering an odd surplus puts the extra cell on the right.
    pub fn cell_gaps(self, outer: usize, inner: usize) -> (usize, usize) {
        let diff = outer.saturating_sub(inner);
        match self {
            Self::Left => (0, diff),
            Self::Right => (diff, 0),
            Self::Center => {
                let left = diff / 2;
                (left, diff - left)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_shift() {
        let p = Point::new(1.0, 2.0).shift_x(3.0).shift_y(-4.0);
        assert_approx_eq!(f32, p.x(), 4.0);
        assert_approx_eq!(f32, p.y(), -2.0);
    }

    #[test]
    fn test_extent_builders() {
        let extent = Extent::new(12.0, 1.0, 2.0).with_height(5.0);
        assert_approx_eq!(f32, extent.width(), 12.0);
        assert_approx_eq!(f32, extent.up(), 1.0);
        assert_approx_eq!(f32, extent.height(), 5.0);
        assert_approx_eq!(f32, extent.down(), 2.0);
        assert_approx_eq!(f32, extent.total_height(), 8.0);
    }

    #[test]
    fn test_extent_well_formed() {
        assert!(Extent::default().is_well_formed());
        assert!(Extent::new(1.0, 2.0, 3.0).is_well_formed());
        assert!(!Extent::new(-1.0, 2.0, 3.0).is_well_formed());
        assert!(!Extent::new(f32::NAN, 0.0, 0.0).is_well_formed());
    }

    #[test]
    fn test_cell_gaps_odd_surplus() {
        assert_eq!(Alignment::Center.cell_gaps(10, 5), (2, 3));
        assert_eq!(Alignment::Left.cell_gaps(10, 5), (0, 5));
        assert_eq!(Alignment::Right.cell_gaps(10, 5), (5, 0));
        assert_eq!(Alignment::Center.cell_gaps(3, 5), (0, 0));
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn alignment_strategy() -> impl Strategy<Value = Alignment> {
        prop_oneof![
            Just(Alignment::Left),
            Just(Alignment::Right),
            Just(Alignment::Center),
        ]
    }

    /// Gaps plus the inner width always reconstruct the outer width.
    fn check_gaps_fill_slot(
        alignment: Alignment,
        inner: f32,
        surplus: f32,
    ) -> Result<(), TestCaseError> {
        let outer = inner + surplus;
        let (left, right) = alignment.gaps(outer, inner);
        prop_assert!(left >= 0.0 && right >= 0.0);
        prop_assert!(approx_eq!(
            f32,
            left + inner + right,
            outer,
            epsilon = 0.001
        ));
        Ok(())
    }

    fn check_cell_gaps_fill_slot(
        alignment: Alignment,
        inner: usize,
        surplus: usize,
    ) -> Result<(), TestCaseError> {
        let (left, right) = alignment.cell_gaps(inner + surplus, inner);
        prop_assert_eq!(left + right, surplus);
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_gaps_fill_slot(
            alignment in alignment_strategy(),
            inner in 0.0f32..500.0,
            surplus in 0.0f32..500.0,
        ) {
            check_gaps_fill_slot(alignment, inner, surplus)?;
        }

        #[test]
        fn prop_cell_gaps_fill_slot(
            alignment in alignment_strategy(),
            inner in 0usize..200,
            surplus in 0usize..200,
        ) {
            check_cell_gaps_fill_slot(alignment, inner, surplus)?;
        }
    }
}
