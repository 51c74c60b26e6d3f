use crate::view::OccurrenceView;
use codenav_api::{Provenance, Range};
use std::path::Path;
use tabled::{Table, settings::Style};

pub fn run(
    file: &Path,
    provenance: Option<Provenance>,
    line: Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in crate::load_entries(file, provenance)? {
        let index = &entry.occurrence_index;

        let (offset, occurrences) = match line {
            Some(line) => {
                let line_range = Range::from_coords(line, 0, line.saturating_add(1), 0);
                let span = index.overlapping_span(line_range);
                (span.start, &index.as_slice()[span])
            }
            None => (0, index.as_slice()),
        };

        let views: Vec<OccurrenceView> = occurrences
            .iter()
            .enumerate()
            .map(|(i, occurrence)| OccurrenceView::new(offset + i, occurrence))
            .collect();

        println!("{} @ {}", entry.data.provenance, entry.data.commit);
        println!("{}", Table::new(&views).with(Style::psql()));
    }
    Ok(())
}
