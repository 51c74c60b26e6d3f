use crate::error::ApiError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A zero-based location in a document.
///
/// `character` counts UTF-16 code units, matching the editor and LSP
/// conventions. Ordering is lexicographic over `(line, character)`.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    pub fn compare(&self, other: &Position) -> Ordering {
        self.cmp(other)
    }

    pub fn is_greater(&self, other: &Position) -> bool {
        self > other
    }

    pub fn is_smaller(&self, other: &Position) -> bool {
        self < other
    }

    /// Column distance to `other`. Positions on different lines are
    /// considered infinitely far apart.
    pub fn character_distance(&self, other: &Position) -> u32 {
        if self.line == other.line {
            self.character.abs_diff(other.character)
        } else {
            u32::MAX
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

impl FromStr for Position {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ApiError::InvalidPosition(s.to_string());
        let (line, character) = s.trim().split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            line: line.trim().parse().map_err(|_| invalid())?,
            character: character.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl From<lsp_types::Position> for Position {
    fn from(p: lsp_types::Position) -> Self {
        Self::new(p.line, p.character)
    }
}

impl From<Position> for lsp_types::Position {
    fn from(p: Position) -> Self {
        lsp_types::Position::new(p.line, p.character)
    }
}

/// A half-open span `[start, end)` of a document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub const fn from_coords(
        start_line: u32,
        start_character: u32,
        end_line: u32,
        end_character: u32,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_character),
            end: Position::new(end_line, end_character),
        }
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// End-exclusive: a zero-width range contains nothing.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Column distance from the start of this range to a position on the
    /// same line.
    pub fn character_distance(&self, position: Position) -> u32 {
        self.start.character_distance(&position)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<lsp_types::Range> for Range {
    fn from(r: lsp_types::Range) -> Self {
        Self::new(r.start.into(), r.end.into())
    }
}

impl From<Range> for lsp_types::Range {
    fn from(r: Range) -> Self {
        lsp_types::Range::new(r.start.into(), r.end.into())
    }
}
