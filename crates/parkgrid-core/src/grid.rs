//! The occupancy grid: a rectangular matrix of parking [`Spot`]s.
//!
//! Grids are plain value data stored row-major. Besides cell access they
//! support a small ASCII layout format (`'X'` = occupied, `'.'` = empty)
//! used by test harnesses and by anything that wants a textual dump:
//! [`Grid::parse`] reads it, the [`Display`](fmt::Display) impl writes it.

use crate::geom::{Point, Range};
use std::fmt;

/// State of a single parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spot {
    /// The spot is free.
    #[default]
    Empty,
    /// The spot holds a parked vehicle.
    Occupied,
}

impl Spot {
    /// Whether the spot is free.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Spot::Empty)
    }

    /// Whether the spot holds a vehicle.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Spot::Occupied)
    }

    /// The layout character for this spot.
    pub const fn as_char(self) -> char {
        match self {
            Spot::Empty => '.',
            Spot::Occupied => 'X',
        }
    }

    /// Parse a layout character, or `None` if it maps to no spot state.
    pub const fn from_char(ch: char) -> Option<Spot> {
        match ch {
            '.' => Some(Spot::Empty),
            'X' => Some(Spot::Occupied),
            _ => None,
        }
    }
}

/// A rectangular grid of [`Spot`]s with row-major storage.
///
/// Dimensions are fixed at construction and travel with the value, so a
/// grid can be swapped into an engine wholesale without the two ever
/// disagreeing about its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Spot>,
}

impl Grid {
    /// Create a new grid with every spot empty. Negative dimensions are
    /// clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![Spot::default(); (width * height) as usize],
        }
    }

    /// Width of the grid (number of columns).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid (number of rows).
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// The bounding range, anchored at the origin.
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Get the spot at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Spot> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.idx(p)])
    }

    /// Set the spot at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, spot: Spot) {
        if !self.contains(p) {
            return;
        }
        let idx = self.idx(p);
        self.cells[idx] = spot;
    }

    /// Fill the entire grid with the given spot state.
    pub fn fill(&mut self, spot: Spot) {
        self.cells.fill(spot);
    }

    /// Count how many spots are in the given state.
    pub fn count(&self, spot: Spot) -> usize {
        self.cells.iter().filter(|&&s| s == spot).count()
    }

    /// Iterate over `(Point, Spot)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Spot)> + '_ {
        self.bounds().iter().map(move |p| (p, self.cells[self.idx(p)]))
    }

    /// Parse a grid from its ASCII layout form.
    ///
    /// Lines are rows; `'X'` marks an occupied spot and `'.'` an empty one.
    /// Whitespace around the whole string and around each line is trimmed
    /// (so string literals can be indented); every line must have the same
    /// width after trimming.
    pub fn parse(s: &str) -> Result<Grid, LayoutError> {
        let s = s.trim();
        let mut cells = Vec::new();
        let mut width: i32 = -1;
        let mut y: i32 = 0;

        for line in s.lines() {
            let line = line.trim();
            let mut x: i32 = 0;
            for ch in line.chars() {
                let Some(spot) = Spot::from_char(ch) else {
                    return Err(LayoutError::UnknownChar {
                        ch,
                        pos: Point::new(x, y),
                    });
                };
                cells.push(spot);
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(LayoutError::UnevenRow { row: y });
            }
            y += 1;
        }

        Ok(Grid {
            width: width.max(0),
            height: y,
            cells,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                write!(f, "{}", self.cells[self.idx(Point::new(x, y))].as_char())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a grid layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A row has a different width than the first row.
    UnevenRow { row: i32 },
    /// A character that maps to no spot state.
    UnknownChar { ch: char, pos: Point },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnevenRow { row } => {
                write!(f, "layout row {row} differs in width from the first row")
            }
            Self::UnknownChar { ch, pos } => {
                write!(f, "layout contains unknown character {ch:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.count(Spot::Empty), 12);
        assert_eq!(g.count(Spot::Occupied), 0);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Spot::Occupied);
        assert_eq!(g.at(p), Some(Spot::Occupied));
        assert_eq!(g.at(Point::new(0, 0)), Some(Spot::Empty));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut g = Grid::new(2, 2);
        g.set(Point::new(5, 5), Spot::Occupied);
        assert_eq!(g.count(Spot::Occupied), 0);
    }

    #[test]
    fn fill_and_count() {
        let mut g = Grid::new(5, 5);
        g.fill(Spot::Occupied);
        assert_eq!(g.count(Spot::Occupied), 25);
        g.set(Point::new(0, 0), Spot::Empty);
        assert_eq!(g.count(Spot::Occupied), 24);
    }

    #[test]
    fn parse_layout() {
        let g = Grid::parse(
            "X.
             XX",
        )
        .unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.at(Point::new(0, 0)), Some(Spot::Occupied));
        assert_eq!(g.at(Point::new(1, 0)), Some(Spot::Empty));
        assert_eq!(g.at(Point::new(0, 1)), Some(Spot::Occupied));
        assert_eq!(g.at(Point::new(1, 1)), Some(Spot::Occupied));
    }

    #[test]
    fn parse_rejects_uneven_rows() {
        assert_eq!(
            Grid::parse("XX\nX"),
            Err(LayoutError::UnevenRow { row: 1 })
        );
    }

    #[test]
    fn parse_rejects_unknown_characters() {
        assert_eq!(
            Grid::parse("X?\nXX"),
            Err(LayoutError::UnknownChar {
                ch: '?',
                pos: Point::new(1, 0),
            })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let text = "X..X\n.XX.\nXXXX";
        let g = Grid::parse(text).unwrap();
        assert_eq!(g.to_string(), text);
        assert_eq!(Grid::parse(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn iter_is_row_major() {
        let g = Grid::parse(".X\nX.").unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1], (Point::new(1, 0), Spot::Occupied));
        assert_eq!(items[2], (Point::new(0, 1), Spot::Occupied));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("X.\n.X").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
