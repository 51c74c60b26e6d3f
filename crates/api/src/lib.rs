pub mod error;
pub mod models;
pub mod navigation;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use navigation::{Direction, OccurrenceNavigator, Step};
