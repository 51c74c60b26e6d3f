//! Positional index over the occurrences of one document.
//!
//! The index stores a flattened (sorted, pairwise disjoint) copy of the
//! input plus a [`LineTable`], and answers point lookups by binary search
//! and directional jumps by scanning from the line table entry.

pub mod flatten;
pub mod line_table;

pub use flatten::non_overlapping_occurrences;
pub use line_table::LineTable;

use codenav_api::{Direction, Occurrence, OccurrenceNavigator, Position, Range, Step};
use std::ops::Index;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceIndex {
    occurrences: Vec<Occurrence>,
    line_table: LineTable,
}

impl OccurrenceIndex {
    /// Builds the index from occurrences sorted by range start.
    ///
    /// Overlapping input is flattened, first occurrence in sort order wins.
    pub fn new(occurrences: &[Occurrence]) -> Self {
        let flattened = non_overlapping_occurrences(occurrences);
        let line_table = LineTable::build(&flattened);

        debug!(
            input = occurrences.len(),
            kept = flattened.len(),
            lines = line_table.len(),
            "Built occurrence index"
        );

        Self {
            occurrences: flattened,
            line_table,
        }
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Occurrence> {
        self.occurrences.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.occurrences.iter()
    }

    pub fn as_slice(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn line_table(&self) -> &LineTable {
        &self.line_table
    }

    /// One past the highest line any occurrence starts or finishes on.
    pub fn line_count(&self) -> u32 {
        u32::try_from(self.line_table.len()).unwrap_or(u32::MAX)
    }

    /// The occurrences intersecting `range`, as a contiguous run.
    ///
    /// An empty query range matches nothing; use `at_position` for points.
    pub fn overlapping(&self, range: Range) -> &[Occurrence] {
        &self.occurrences[self.overlapping_span(range)]
    }

    /// Index bounds of the run returned by [`overlapping`](Self::overlapping).
    pub fn overlapping_span(&self, range: Range) -> std::ops::Range<usize> {
        if range.is_empty() {
            return 0..0;
        }

        // Disjoint and sorted, so both starts and ends are monotonic.
        let lower = self
            .occurrences
            .partition_point(|o| o.range.end <= range.start);
        let upper = self
            .occurrences
            .partition_point(|o| o.range.start < range.end);

        if lower >= upper { lower..lower } else { lower..upper }
    }

    /// Occurrences of `symbol`, in document order.
    pub fn with_symbol<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Occurrence> + 'a {
        self.occurrences
            .iter()
            .filter(move |o| o.symbol.as_deref() == Some(symbol))
    }

    /// The first occurrence defining `symbol`.
    pub fn definition(&self, symbol: &str) -> Option<&Occurrence> {
        self.occurrences
            .iter()
            .find(|o| o.symbol.as_deref() == Some(symbol) && o.is_definition())
    }

    /// Closest occurrence on `line` to `reference`, by column.
    ///
    /// Walks forward from the line table entry while occurrences still
    /// start on `line`. An entry pointing at a multi-line occurrence that
    /// started earlier yields nothing. Ties go to the earliest candidate.
    fn closest_by_character<F>(
        &self,
        line: u32,
        reference: Position,
        include: F,
    ) -> Option<&Occurrence>
    where
        F: Fn(&Occurrence) -> bool,
    {
        let start = self.line_table.get(line)?;
        let mut best: Option<(&Occurrence, u32)> = None;

        for occurrence in self
            .occurrences
            .get(start..)?
            .iter()
            .take_while(|o| o.range.start.line == line)
        {
            if !include(occurrence) {
                continue;
            }
            let distance = occurrence.range.character_distance(reference);
            match best {
                Some((_, best_distance)) if best_distance <= distance => {}
                _ => best = Some((occurrence, distance)),
            }
        }

        best.map(|(occurrence, _)| occurrence)
    }
}

impl OccurrenceNavigator for OccurrenceIndex {
    fn at_position(&self, position: Position) -> Option<&Occurrence> {
        let (mut low, mut high) = (0, self.occurrences.len());

        while low < high {
            let mid = low + (high - low) / 2;
            let range = &self.occurrences[mid].range;
            if range.contains(position) {
                return Some(&self.occurrences[mid]);
            }
            // Ranges are end-exclusive: sitting on `end` is already past it.
            if range.end <= position {
                low = mid + 1;
            } else {
                high = mid;
            }
        }

        None
    }

    fn next(&self, from: Position, step: Step, direction: Direction) -> Option<&Occurrence> {
        match step {
            Step::Character => match direction {
                Direction::Next => {
                    self.closest_by_character(from.line, from, |o| o.range.start.is_greater(&from))
                }
                Direction::Previous => {
                    self.closest_by_character(from.line, from, |o| o.range.start.is_smaller(&from))
                }
            },
            Step::Line => {
                let line_count = self.line_count();
                // Compare columns against the scanned line, not `from.line`.
                let visit = |line: u32| {
                    self.closest_by_character(line, Position::new(line, from.character), |_| true)
                };

                match direction {
                    Direction::Next => (from.line.saturating_add(1)..line_count).find_map(visit),
                    Direction::Previous => (0..from.line.min(line_count)).rev().find_map(visit),
                }
            }
        }
    }
}

impl Index<usize> for OccurrenceIndex {
    type Output = Occurrence;

    fn index(&self, index: usize) -> &Self::Output {
        &self.occurrences[index]
    }
}

impl<'a> IntoIterator for &'a OccurrenceIndex {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.occurrences.iter()
    }
}

impl From<&[Occurrence]> for OccurrenceIndex {
    fn from(occurrences: &[Occurrence]) -> Self {
        Self::new(occurrences)
    }
}
