use crate::error::Result;
use codenav_api::CodeGraphData;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CodeGraphFile {
    Many(Vec<CodeGraphData>),
    One(CodeGraphData),
}

/// Reads code graph data from a JSON file holding either a single object
/// or an array of them.
pub fn load_code_graph(path: &Path) -> Result<Vec<CodeGraphData>> {
    let bytes = std::fs::read(path)?;
    let data = parse_code_graph(&bytes)?;
    tracing::info!(
        "Loaded {} code graph entries from {}",
        data.len(),
        path.display()
    );
    Ok(data)
}

pub fn parse_code_graph(bytes: &[u8]) -> Result<Vec<CodeGraphData>> {
    Ok(match serde_json::from_slice(bytes)? {
        CodeGraphFile::Many(data) => data,
        CodeGraphFile::One(data) => vec![data],
    })
}
