use std::io;

use crate::point::Point;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot place {requested} unique points on a grid with {available} cells")]
    Capacity { requested: u64, available: u64 },

    #[error("cannot reserve memory for {requested} points")]
    Allocation { requested: u64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("points {first} and {second} share the same position")]
    Duplicate { first: usize, second: usize },

    #[error("point {id} at {point} lies outside [0, {bound}]")]
    OutOfBounds { id: usize, point: Point, bound: u32 },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
