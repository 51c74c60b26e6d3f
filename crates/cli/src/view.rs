use codenav_api::Occurrence;
use tabled::Tabled;

/// A terminal view of one occurrence
#[derive(Tabled)]
pub struct OccurrenceView {
    pub index: usize,
    pub range: String,
    pub symbol: String,
    pub roles: String,
}

impl OccurrenceView {
    pub fn new(index: usize, occurrence: &Occurrence) -> Self {
        Self {
            index,
            range: occurrence.range.to_string(),
            symbol: occurrence
                .symbol
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            roles: occurrence.symbol_roles.to_string(),
        }
    }
}

/// Per-entry summary for `codenav stats`
#[derive(Tabled)]
pub struct EntryStatsView {
    pub provenance: String,
    pub commit: String,
    pub tool: String,
    pub input: usize,
    pub kept: usize,
    pub lines: u32,
}
