//! Rail path construction.
//!
//! Every connector of a railroad diagram is a sequence of relative moves,
//! straight runs and circular arcs of one fixed radius. [`RailPath`] records
//! those segments as SVG path data and turns them into a `<path>` element.

use std::fmt::Write as _;

use svg::node::element as svg_element;

use crate::geometry::Point;

/// Compass direction used to describe quarter-circle arcs.
///
/// An arc is named by the direction of the rail at its start and the
/// direction it turns towards. `arc(South, East)` starts heading south and
/// bends into an eastward run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Starting point of an eighth-circle arc, measured on the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octant {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Sweep direction of an eighth-circle arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// Builder for the `d` attribute of a rail.
///
/// Runs expressed with [`right`](RailPath::right), [`left`](RailPath::left),
/// [`up`](RailPath::up) and [`down`](RailPath::down) never go backwards:
/// negative lengths are drawn as zero-length segments.
///
/// # Examples
///
/// ```
/// # use railroad_core::{draw::{Heading, RailPath}, geometry::Point};
/// let path = RailPath::new(Point::new(10.0, 20.0), 10.0)
///     .right(5.0)
///     .arc(Heading::North, Heading::East);
/// assert_eq!(path.data(), "M10 20h5a10 10 0 0 1 10 10");
/// ```
#[derive(Debug, Clone)]
pub struct RailPath {
    radius: f32,
    data: String,
    class: Option<String>,
}

impl RailPath {
    /// Starts a new rail at `start` using `radius` for every arc.
    pub fn new(start: Point, radius: f32) -> Self {
        let mut data = String::new();
        let _ = write!(data, "M{} {}", num(start.x()), num(start.y()));
        Self {
            radius,
            data,
            class: None,
        }
    }

    /// Sets the `class` attribute of the resulting element.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Returns the path data built so far.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Moves the pen by a relative offset without drawing.
    pub fn move_by(mut self, dx: f32, dy: f32) -> Self {
        let _ = write!(self.data, "m{} {}", num(dx), num(dy));
        self
    }

    /// Moves the pen to an absolute position without drawing.
    pub fn move_to(mut self, point: Point) -> Self {
        let _ = write!(self.data, "M{} {}", num(point.x()), num(point.y()));
        self
    }

    /// Draws a straight line by a relative offset.
    pub fn line_by(mut self, dx: f32, dy: f32) -> Self {
        let _ = write!(self.data, "l{} {}", num(dx), num(dy));
        self
    }

    /// Draws a horizontal line of signed length.
    pub fn h(mut self, dx: f32) -> Self {
        let _ = write!(self.data, "h{}", num(dx));
        self
    }

    /// Draws a vertical line of signed length.
    pub fn v(mut self, dy: f32) -> Self {
        let _ = write!(self.data, "v{}", num(dy));
        self
    }

    pub fn right(self, len: f32) -> Self {
        self.h(len.max(0.0))
    }

    pub fn left(self, len: f32) -> Self {
        self.h(-len.max(0.0))
    }

    pub fn down(self, len: f32) -> Self {
        self.v(len.max(0.0))
    }

    pub fn up(self, len: f32) -> Self {
        self.v(-len.max(0.0))
    }

    /// Draws a quarter-circle arc starting towards `from` and ending towards `to`.
    pub fn arc(mut self, from: Heading, to: Heading) -> Self {
        use Heading::{East, North, South, West};

        let r = self.radius;
        let mut x = r;
        let mut y = r;
        if from == East || to == West {
            x = -x;
        }
        if from == South || to == North {
            y = -y;
        }
        let sweep = matches!(
            (from, to),
            (North, East) | (East, South) | (South, West) | (West, North)
        );
        let _ = write!(
            self.data,
            "a{} {} 0 0 {} {} {}",
            num(r),
            num(r),
            u8::from(sweep),
            num(x),
            num(y)
        );
        self
    }

    /// Draws an eighth-circle arc starting at `start` on the circle.
    pub fn eighth_arc(mut self, start: Octant, rotation: Rotation) -> Self {
        use Octant::*;
        use Rotation::{Clockwise, CounterClockwise};

        let r = self.radius;
        let s2 = r / std::f32::consts::SQRT_2;
        let s2inv = r - s2;
        let (dx, dy) = match (start, rotation) {
            (North, Clockwise) => (s2, s2inv),
            (NorthEast, Clockwise) => (s2inv, s2),
            (East, Clockwise) => (-s2inv, s2),
            (SouthEast, Clockwise) => (-s2, s2inv),
            (South, Clockwise) => (-s2, -s2inv),
            (SouthWest, Clockwise) => (-s2inv, -s2),
            (West, Clockwise) => (s2inv, -s2),
            (NorthWest, Clockwise) => (s2, -s2inv),
            (North, CounterClockwise) => (-s2, s2inv),
            (NorthWest, CounterClockwise) => (-s2inv, s2),
            (West, CounterClockwise) => (s2inv, s2),
            (SouthWest, CounterClockwise) => (s2, s2inv),
            (South, CounterClockwise) => (s2, -s2inv),
            (SouthEast, CounterClockwise) => (s2inv, -s2),
            (East, CounterClockwise) => (-s2inv, -s2),
            (NorthEast, CounterClockwise) => (-s2, -s2inv),
        };
        let sweep = u8::from(rotation == Clockwise);
        let _ = write!(
            self.data,
            "a {} {} 0 0 {} {} {}",
            num(r),
            num(r),
            sweep,
            num(dx),
            num(dy)
        );
        self
    }

    /// Draws a closed circle of radius `r` whose leftmost point is the pen.
    pub fn circle(mut self, r: f32) -> Self {
        let r = num(r);
        let _ = write!(
            self.data,
            "a {r},{r} 0 0 1 -{r},{r} {r},{r} 0 0 1 -{r},-{r} {r},{r} 0 0 1 {r},-{r} {r},{r} 0 0 1 {r},{r} z"
        );
        self
    }

    /// Converts the rail into an SVG `<path>` element.
    pub fn into_element(self) -> svg_element::Path {
        let path = svg_element::Path::new().set("d", self.data);
        match self.class {
            Some(class) => path.set("class", class),
            None => path,
        }
    }
}

/// Normalizes negative zero so path data never contains `-0`.
fn num(value: f32) -> f32 {
    if value == 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> RailPath {
        RailPath::new(Point::new(0.0, 0.0), 10.0)
    }

    #[test]
    fn test_runs_clamp_negative_lengths() {
        let path = start().right(-5.0).left(3.0).down(-1.0).up(2.0);
        assert_eq!(path.data(), "M0 0h0h-3v0v-2");
    }

    #[test]
    fn test_quarter_arcs() {
        use Heading::*;

        assert_eq!(start().arc(South, East).data(), "M0 0a10 10 0 0 0 10 -10");
        assert_eq!(start().arc(West, North).data(), "M0 0a10 10 0 0 1 10 -10");
        assert_eq!(start().arc(North, East).data(), "M0 0a10 10 0 0 1 10 10");
        assert_eq!(start().arc(West, South).data(), "M0 0a10 10 0 0 0 10 10");
        assert_eq!(start().arc(North, West).data(), "M0 0a10 10 0 0 0 -10 10");
        assert_eq!(start().arc(East, South).data(), "M0 0a10 10 0 0 1 -10 10");
        assert_eq!(start().arc(East, North).data(), "M0 0a10 10 0 0 0 -10 -10");
    }

    #[test]
    fn test_eighth_arc_offsets_are_symmetric() {
        let cw = start().eighth_arc(Octant::North, Rotation::Clockwise);
        let ccw = start().eighth_arc(Octant::North, Rotation::CounterClockwise);
        assert!(cw.data().starts_with("M0 0a 10 10 0 0 1 7.0710"));
        assert!(ccw.data().starts_with("M0 0a 10 10 0 0 0 -7.0710"));
    }

    #[test]
    fn test_moves_and_lines() {
        let path = start()
            .move_by(0.0, 10.0)
            .move_to(Point::new(5.0, 5.0))
            .line_by(3.0, -4.0)
            .h(1.5)
            .v(-2.5);
        assert_eq!(path.data(), "M0 0m0 10M5 5l3 -4h1.5v-2.5");
    }

    #[test]
    fn test_circle_closes() {
        let path = start().circle(3.5);
        assert!(path.data().ends_with("z"));
        assert!(path.data().contains("a 3.5,3.5 0 0 1 -3.5,3.5"));
    }

    #[test]
    fn test_into_element_sets_class() {
        let element = start().h(10.0).with_class("skip").into_element();
        let rendered = element.to_string();
        assert!(rendered.contains("class=\"skip\""));
        assert!(rendered.contains("d=\"M0 0h10\""));
    }
}
