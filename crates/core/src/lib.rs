pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod logging;
pub mod model;
pub mod store;

pub use error::{CodenavError, Result};
pub use index::OccurrenceIndex;
pub use model::IndexedCodeGraphData;
pub use store::{CodeGraphStore, DocumentKey, combine};
