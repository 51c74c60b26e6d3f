use crate::index::OccurrenceIndex;
use codenav_api::CodeGraphData;

/// Producer data paired with the index built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedCodeGraphData {
    pub data: CodeGraphData,
    pub occurrence_index: OccurrenceIndex,
}

impl IndexedCodeGraphData {
    pub fn new(data: CodeGraphData) -> Self {
        let occurrence_index = OccurrenceIndex::new(&data.occurrences);
        Self {
            data,
            occurrence_index,
        }
    }
}

impl From<CodeGraphData> for IndexedCodeGraphData {
    fn from(data: CodeGraphData) -> Self {
        Self::new(data)
    }
}
