use std::num::ParseIntError;

use thiserror::Error;

use crate::Point;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointError {
    #[error("Point {op} overflowed: {lhs} and {rhs}")]
    Overflow {
        op: &'static str,
        lhs: Point,
        rhs: Point,
    },

    #[error("Expected a point as x,y, got {0:?}")]
    MissingSeparator(String),

    #[error("Invalid coordinate {input:?}: {source}")]
    InvalidCoordinate {
        input: String,
        source: ParseIntError,
    },
}
