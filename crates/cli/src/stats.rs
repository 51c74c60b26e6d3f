use crate::view::EntryStatsView;
use codenav_api::Provenance;
use std::path::Path;
use tabled::{Table, settings::Style};

pub fn run(file: &Path, provenance: Option<Provenance>) -> Result<(), Box<dyn std::error::Error>> {
    let entries = crate::load_entries(file, provenance)?;

    let views: Vec<EntryStatsView> = entries
        .iter()
        .map(|entry| {
            let tool = entry
                .data
                .tool_info
                .as_ref()
                .map(|tool| {
                    format!(
                        "{} {}",
                        tool.name.as_deref().unwrap_or("?"),
                        tool.version.as_deref().unwrap_or("")
                    )
                    .trim()
                    .to_string()
                })
                .unwrap_or_else(|| "-".to_string());

            EntryStatsView {
                provenance: entry.data.provenance.to_string(),
                commit: entry.data.commit.clone(),
                tool,
                input: entry.data.occurrences.len(),
                kept: entry.occurrence_index.len(),
                lines: entry.occurrence_index.line_count(),
            }
        })
        .collect();

    println!("{}", Table::new(&views).with(Style::psql()));
    Ok(())
}
