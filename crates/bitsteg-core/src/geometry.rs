//! Pixel addressing for the bit-plane codec.
//!
//! A payload occupies a contiguous row-major run of pixels `[start, end)`.
//! The functions in here translate between that 2-D view and a linear bit
//! index, and validate coordinates against the carrier's [`Rect`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A pixel coordinate, `x` is the column and `y` the row.
///
/// A point can lie anywhere, also outside of an image, use [`in_bounds`] to check that.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Strict row-major ordering: `self` is on an earlier row than `other`,
    /// or on the same row and an earlier column.
    ///
    /// A point never precedes itself.
    pub fn precedes(&self, other: &Point) -> bool {
        self.y < other.y || (self.y == other.y && self.x < other.x)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
#[error("Invalid point `{0}`, expected the form `x,y`")]
pub struct ParsePointError(String);

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| ParsePointError(s.to_string()))?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| ParsePointError(s.to_string()))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| ParsePointError(s.to_string()))?;

        Ok(Self { x, y })
    }
}

/// Half-open pixel region `[min, max)` on both axes
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// the addressable region of an image with the given dimensions
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self {
            min: Point::new(0, 0),
            max: Point::new(width as i64, height as i64),
        }
    }

    pub fn width(&self) -> i64 {
        self.max.x.saturating_sub(self.min.x)
    }

    pub fn height(&self) -> i64 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// every point of the region, row by row
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let Rect { min, max } = *self;
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| Point::new(x, y)))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {})", self.min, self.max)
    }
}

/// true iff `point` is addressable inside `rect`
pub fn in_bounds(rect: &Rect, point: Point) -> bool {
    rect.min.x <= point.x && point.x < rect.max.x && rect.min.y <= point.y && point.y < rect.max.y
}

/// see [`Point::precedes`]
pub fn precedes(a: Point, b: Point) -> bool {
    a.precedes(&b)
}

/// Row-major linear index of `point`, counted from `rect.min`.
///
/// `point` has to be inside of `rect`, this is not checked.
pub fn offset_from_origin(rect: &Rect, point: Point) -> u64 {
    ((point.y - rect.min.y) * rect.width() + (point.x - rect.min.x)) as u64
}

/// The point right after a run of `bit_count` pixels that begins at `start`.
///
/// The result is not clamped. It can sit exactly on `rect.max.x` when the run
/// ends on the last column of a row, or beyond `rect` when the run does not fit.
/// Coordinates saturate at the limits of `i64` instead of overflowing.
pub fn point_at_offset(rect: &Rect, start: Point, bit_count: u64) -> Point {
    let width = rect.width();
    if width <= 0 {
        // nothing is addressable, the caller rejects `start` anyway
        return start;
    }

    let mut p = start;
    let rows = i64::try_from(bit_count / width as u64).unwrap_or(i64::MAX);
    p.y = p.y.saturating_add(rows);

    let mut remainder = (bit_count % width as u64) as i64;
    if p.x.saturating_add(remainder) > rect.max.x {
        p.y = p.y.saturating_add(1);
        remainder = remainder.saturating_sub(rect.max.x.saturating_sub(p.x));
        p.x = rect.min.x;
    }
    p.x = p.x.saturating_add(remainder);

    p
}
