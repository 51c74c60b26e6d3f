use super::occurrence::Occurrence;
use crate::error::ApiError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a set of occurrences was produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Provenance {
    /// Compiler-accurate index (SCIP upload or auto-indexing).
    Precise,
    /// Tree-sitter based, single-file heuristics.
    Syntactic,
    /// Text search over candidate files.
    SearchBased,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Precise => "PRECISE",
            Provenance::Syntactic => "SYNTACTIC",
            Provenance::SearchBased => "SEARCH_BASED",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provenance {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "PRECISE" => Ok(Provenance::Precise),
            "SYNTACTIC" => Ok(Provenance::Syntactic),
            "SEARCH_BASED" => Ok(Provenance::SearchBased),
            _ => Err(ApiError::InvalidArgument(format!("unknown provenance '{}'", s))),
        }
    }
}

/// The indexer that produced a set of occurrences, when known.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash, JsonSchema)]
pub struct ToolInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Occurrence data for one file at one commit, as delivered by a producer.
///
/// `occurrences` are expected to be sorted by range start. Nothing checks
/// this; indexing tolerates unsorted input by dropping out-of-order entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeGraphData {
    pub provenance: Provenance,
    pub commit: String,
    #[serde(default)]
    pub tool_info: Option<ToolInfo>,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
}

impl CodeGraphData {
    pub fn new(provenance: Provenance, commit: impl Into<String>, occurrences: Vec<Occurrence>) -> Self {
        Self {
            provenance,
            commit: commit.into(),
            tool_info: None,
            occurrences,
        }
    }

    pub fn with_tool_info(mut self, tool_info: ToolInfo) -> Self {
        self.tool_info = Some(tool_info);
        self
    }
}
