use codenav_api::Occurrence;

/// Sparse map from line number to the first flattened occurrence that
/// starts on, or finishes on, that line.
///
/// Slots for lines no occurrence touches stay `None`, which is distinct
/// from a valid index of 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTable {
    slots: Vec<Option<usize>>,
}

impl LineTable {
    /// Builds the table over an already flattened, sorted sequence.
    pub fn build(occurrences: &[Occurrence]) -> Self {
        let mut table = Self::default();
        let mut previous_end_line: Option<u32> = None;

        for (index, occurrence) in occurrences.iter().enumerate() {
            let range = &occurrence.range;

            // A previous occurrence finishing on this line already owns the slot.
            if previous_end_line != Some(range.start.line) {
                table.set(range.start.line, index);
            }

            // Let queries on the last line of a multi-line occurrence find it.
            if !range.is_single_line() {
                table.set(range.end.line, index);
            }

            previous_end_line = Some(range.end.line);
        }

        table
    }

    fn set(&mut self, line: u32, index: usize) {
        let line = line as usize;
        if self.slots.len() <= line {
            self.slots.resize(line + 1, None);
        }
        self.slots[line] = Some(index);
    }

    pub fn get(&self, line: u32) -> Option<usize> {
        self.slots.get(line as usize).copied().flatten()
    }

    /// Number of slots: one past the highest recorded line.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Lines that have an entry, ascending.
    pub fn lines(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(line, _)| line as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codenav_api::Range;

    fn occ(sl: u32, sc: u32, el: u32, ec: u32) -> Occurrence {
        Occurrence::new(Range::from_coords(sl, sc, el, ec))
    }

    #[test]
    fn test_first_occurrence_per_line() {
        let table = LineTable::build(&[
            occ(0, 0, 0, 3),
            occ(0, 5, 0, 8),
            occ(2, 1, 2, 4),
            occ(2, 6, 2, 9),
        ]);
        assert_eq!(table.get(0), Some(0));
        assert_eq!(table.get(1), None);
        assert_eq!(table.get(2), Some(2));
        assert_eq!(table.get(3), None);
        assert_eq!(table.len(), 3);
        assert_eq!(table.lines().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_multi_line_records_both_ends() {
        let table = LineTable::build(&[occ(2, 4, 5, 1), occ(5, 3, 5, 6), occ(6, 0, 6, 1)]);
        assert_eq!(table.get(2), Some(0));
        assert_eq!(table.get(3), None);
        assert_eq!(table.get(4), None);
        // Line 5 keeps the spanning occurrence, not the one starting there.
        assert_eq!(table.get(5), Some(0));
        assert_eq!(table.get(6), Some(2));
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_empty() {
        let table = LineTable::build(&[]);
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }
}
