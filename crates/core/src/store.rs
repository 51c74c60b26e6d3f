//! Host-owned registry of indexed occurrence data.
//!
//! Producers (precise, syntactic, search-based) each contribute a list of
//! `CodeGraphData` for a document. Only the most recent contribution is
//! kept; contributions are never merged.

use crate::model::IndexedCodeGraphData;
use codenav_api::{CodeGraphData, Provenance};
use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, info};

/// Identifies one displayed version of a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    pub path: String,
    pub revision: String,
}

impl DocumentKey {
    pub fn new(path: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            revision: revision.into(),
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.path, self.revision)
    }
}

/// Indexes the last contribution; earlier ones are ignored.
pub fn combine(contributions: &[Vec<CodeGraphData>]) -> Vec<IndexedCodeGraphData> {
    contributions
        .last()
        .map(|latest| latest.iter().cloned().map(IndexedCodeGraphData::new).collect())
        .unwrap_or_default()
}

#[derive(Debug, Default)]
pub struct CodeGraphStore {
    entries: IndexMap<DocumentKey, Vec<IndexedCodeGraphData>>,
}

impl CodeGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the data for `key` with the latest of `contributions`.
    ///
    /// Returns `false` without rebuilding when the latest contribution is
    /// identical to what is already stored for `key`.
    pub fn update(&mut self, key: DocumentKey, contributions: &[Vec<CodeGraphData>]) -> bool {
        let latest: &[CodeGraphData] = contributions.last().map(Vec::as_slice).unwrap_or(&[]);

        if let Some(existing) = self.entries.get(&key) {
            if existing.iter().map(|indexed| &indexed.data).eq(latest.iter()) {
                debug!("Code graph data for {} unchanged, keeping index", key);
                return false;
            }
        }

        let indexed = combine(contributions);
        info!(
            "Indexed {} code graph entries for {} ({} occurrences kept)",
            indexed.len(),
            key,
            indexed
                .iter()
                .map(|entry| entry.occurrence_index.len())
                .sum::<usize>()
        );
        self.entries.insert(key, indexed);
        true
    }

    pub fn get(&self, key: &DocumentKey) -> Option<&[IndexedCodeGraphData]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// The first entry for `key` with the given provenance.
    pub fn get_by_provenance(
        &self,
        key: &DocumentKey,
        provenance: Provenance,
    ) -> Option<&IndexedCodeGraphData> {
        self.get(key)?
            .iter()
            .find(|entry| entry.data.provenance == provenance)
    }

    /// Drops the data for a document that is no longer displayed.
    pub fn remove(&mut self, key: &DocumentKey) -> Option<Vec<IndexedCodeGraphData>> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &DocumentKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
