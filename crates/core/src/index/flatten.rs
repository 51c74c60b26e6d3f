//! Reduction of a sorted, possibly overlapping occurrence list to disjoint
//! ranges.

use codenav_api::Occurrence;

/// Keeps the first occurrence of every contested span.
///
/// Input is assumed sorted by range start. An occurrence is dropped when it
/// starts at the same position as the last kept one, or starts before the
/// last kept one ends. Dropped occurrences are discarded whole, never split.
///
/// The last kept occurrence always has the furthest end of everything kept
/// so far, so comparing against it alone is enough. Out-of-order input is
/// dropped by the same rule, which keeps the output sorted.
pub fn non_overlapping_occurrences(occurrences: &[Occurrence]) -> Vec<Occurrence> {
    let mut kept: Vec<Occurrence> = Vec::with_capacity(occurrences.len());

    for occurrence in occurrences {
        if let Some(last) = kept.last() {
            let start = occurrence.range.start;
            if start == last.range.start || start < last.range.end {
                continue;
            }
        }
        kept.push(occurrence.clone());
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use codenav_api::Range;

    fn occ(sl: u32, sc: u32, el: u32, ec: u32) -> Occurrence {
        Occurrence::new(Range::from_coords(sl, sc, el, ec))
    }

    fn ranges(occurrences: &[Occurrence]) -> Vec<Range> {
        occurrences.iter().map(|o| o.range).collect()
    }

    #[test]
    fn test_disjoint_input_is_unchanged() {
        let input = vec![occ(0, 0, 0, 3), occ(0, 5, 0, 8), occ(2, 0, 4, 1), occ(4, 1, 4, 2)];
        let flat = non_overlapping_occurrences(&input);
        assert_eq!(flat, input);
        // idempotent
        assert_eq!(non_overlapping_occurrences(&flat), flat);
    }

    #[test]
    fn test_same_start_first_wins() {
        let a = occ(1, 4, 1, 10).with_symbol("a");
        let b = occ(1, 4, 1, 6).with_symbol("b");
        let flat = non_overlapping_occurrences(&[a.clone(), b]);
        assert_eq!(flat, vec![a]);
    }

    #[test]
    fn test_nested_and_partial_overlaps_dropped() {
        let input = vec![
            occ(0, 0, 0, 10), // outer
            occ(0, 2, 0, 4),  // nested
            occ(0, 8, 0, 12), // partial
            occ(0, 10, 0, 11),
        ];
        assert_eq!(
            ranges(&non_overlapping_occurrences(&input)),
            vec![Range::from_coords(0, 0, 0, 10), Range::from_coords(0, 10, 0, 11)]
        );
    }

    #[test]
    fn test_multi_line_swallows_later_lines() {
        let input = vec![occ(2, 0, 5, 3), occ(3, 1, 3, 4), occ(5, 2, 5, 6), occ(5, 3, 5, 6)];
        assert_eq!(
            ranges(&non_overlapping_occurrences(&input)),
            vec![Range::from_coords(2, 0, 5, 3), Range::from_coords(5, 3, 5, 6)]
        );
    }

    #[test]
    fn test_zero_width_duplicates() {
        let input = vec![occ(0, 2, 0, 2), occ(0, 2, 0, 2), occ(0, 2, 0, 5)];
        assert_eq!(
            ranges(&non_overlapping_occurrences(&input)),
            vec![Range::from_coords(0, 2, 0, 2)]
        );
    }

    #[test]
    fn test_out_of_order_input_stays_sorted() {
        let input = vec![occ(3, 0, 3, 2), occ(1, 0, 1, 2), occ(4, 0, 4, 1)];
        assert_eq!(
            ranges(&non_overlapping_occurrences(&input)),
            vec![Range::from_coords(3, 0, 3, 2), Range::from_coords(4, 0, 4, 1)]
        );
    }

    #[test]
    fn test_empty() {
        assert!(non_overlapping_occurrences(&[]).is_empty());
    }
}
