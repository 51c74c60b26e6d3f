use crate::error::ApiError;
use crate::models::{Occurrence, Position};
use std::fmt;
use std::str::FromStr;

/// Granularity of a directional jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move to the nearest occurrence on an adjacent line that has one.
    Line,
    /// Move along the current line only.
    Character,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Next,
    Previous,
}

impl FromStr for Step {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "line" => Ok(Step::Line),
            "character" | "char" => Ok(Step::Character),
            _ => Err(ApiError::InvalidArgument(format!("unknown step '{}'", s))),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Line => write!(f, "line"),
            Step::Character => write!(f, "character"),
        }
    }
}

impl FromStr for Direction {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "next" => Ok(Direction::Next),
            "previous" | "prev" => Ok(Direction::Previous),
            _ => Err(ApiError::InvalidArgument(format!("unknown direction '{}'", s))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Previous => write!(f, "previous"),
        }
    }
}

/// Positional queries over the occurrences of a single document.
///
/// Every query is infallible: "nothing there" is `None`.
pub trait OccurrenceNavigator {
    /// The occurrence whose range contains `position`.
    fn at_position(&self, position: Position) -> Option<&Occurrence>;

    /// The occurrence reached by moving from `from` one `step` in
    /// `direction`.
    ///
    /// - `Step::Character` stays on `from.line` and picks the closest
    ///   occurrence starting strictly after (or before) `from`.
    /// - `Step::Line` walks line by line away from `from.line` and returns
    ///   the occurrence closest to `from.character` on the first line that
    ///   has any.
    fn next(&self, from: Position, step: Step, direction: Direction) -> Option<&Occurrence>;
}
