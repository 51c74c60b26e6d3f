use codenav_api::{Direction, Occurrence, OccurrenceNavigator, Position, Provenance, Step};
use codenav_core::IndexedCodeGraphData;
use std::path::Path;

pub fn at(
    file: &Path,
    provenance: Option<Provenance>,
    position: Position,
) -> Result<(), Box<dyn std::error::Error>> {
    for entry in crate::load_entries(file, provenance)? {
        let found = entry.occurrence_index.at_position(position);
        print_result(&entry, found)?;
    }
    Ok(())
}

pub fn next(
    file: &Path,
    provenance: Option<Provenance>,
    from: Position,
    step: Step,
    direction: Direction,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!("Navigating from {} by {} ({})", from, step, direction);
    for entry in crate::load_entries(file, provenance)? {
        let found = entry.occurrence_index.next(from, step, direction);
        print_result(&entry, found)?;
    }
    Ok(())
}

fn print_result(
    entry: &IndexedCodeGraphData,
    found: Option<&Occurrence>,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = serde_json::json!({
        "provenance": entry.data.provenance,
        "commit": entry.data.commit,
        "occurrence": found,
    });
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
