pub mod code_graph;
pub mod occurrence;
pub mod position;

pub use code_graph::*;
pub use occurrence::*;
pub use position::*;
