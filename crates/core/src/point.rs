use std::{fmt, ops, str::FromStr};

use crate::PointError;

/// Integer x-y coordinate.
///
/// Operators follow plain `i32` arithmetic, so overflow panics when debug
/// assertions are on and wraps otherwise. Use [`Point::checked_add`] and
/// [`Point::checked_sub`] when the inputs are not trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Sign of each axis, -1, 0 or 1
    pub fn sign(&self) -> Point {
        Point {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }

    pub fn checked_add(self, rhs: Point) -> Result<Point, PointError> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Ok(Point { x, y }),
            _ => Err(overflow("add", self, rhs)),
        }
    }

    pub fn checked_sub(self, rhs: Point) -> Result<Point, PointError> {
        match (self.x.checked_sub(rhs.x), self.y.checked_sub(rhs.y)) {
            (Some(x), Some(y)) => Ok(Point { x, y }),
            _ => Err(overflow("sub", self, rhs)),
        }
    }
}

fn overflow(op: &'static str, lhs: Point, rhs: Point) -> PointError {
    log::debug!("Point {op} overflowed: {lhs} and {rhs}");
    PointError::Overflow { op, lhs, rhs }
}

impl ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointError;

    /// Parses `x,y`, whitespace around either number is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| PointError::MissingSeparator(s.to_string()))?;
        Ok(Point {
            x: coordinate(x)?,
            y: coordinate(y)?,
        })
    }
}

fn coordinate(s: &str) -> Result<i32, PointError> {
    let s = s.trim();
    s.parse::<i32>()
        .map_err(|source| PointError::InvalidCoordinate {
            input: s.to_string(),
            source,
        })
}
